use poem_openapi::payload::Json;

use crate::{
    books_api::models::{HealthDto, HealthResponse},
    storage::BookRepo,
};

pub struct HealthService<'a> {
    pub repo: &'a dyn BookRepo,
}

impl<'a> HealthService<'a> {
    pub fn new(repo: &'a dyn BookRepo) -> Self {
        Self { repo }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn status(&self) -> HealthResponse {
        let stats = self.repo.stats();
        HealthResponse::Ok(Json(HealthDto {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            users: stats.users as u64,
            books: stats.books as u64,
        }))
    }
}
