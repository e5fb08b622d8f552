use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use super::models::{
    AddBookResponse, BookDto, BookResponse, HealthResponse, ListBooksResponse, ProgressUpdateDto,
    RemoveBookResponse,
};
use super::services::{books::BookService, health::HealthService};
use crate::storage::BookRepo;

pub struct BooksApi {
    pub repo: Arc<dyn BookRepo>,
}

#[OpenApi]
impl BooksApi {
    /// Liveness check with store counters
    #[oai(path = "/health", method = "get")]
    #[tracing::instrument(level = "debug", skip(self))]
    async fn health(&self) -> HealthResponse {
        HealthService::new(self.repo.as_ref()).status()
    }

    /// List the books a user is reading
    #[oai(path = "/users/:user_id/books", method = "get")]
    #[tracing::instrument(level = "debug", skip(self, user_id))]
    async fn list_user_books(&self, user_id: Path<i64>) -> ListBooksResponse {
        BookService::new(self.repo.as_ref()).list_books(user_id.0)
    }

    /// Add a book to a user's reading list
    #[oai(path = "/users/:user_id/books", method = "post")]
    #[tracing::instrument(level = "debug", skip(self, user_id, body))]
    async fn add_user_book(&self, user_id: Path<i64>, body: Json<BookDto>) -> AddBookResponse {
        BookService::new(self.repo.as_ref()).add_book(user_id.0, body.0)
    }

    /// Get one book from a user's reading list
    #[oai(path = "/users/:user_id/books/:book_id", method = "get")]
    #[tracing::instrument(level = "debug", skip(self, user_id, book_id))]
    async fn get_user_book(&self, user_id: Path<i64>, book_id: Path<i64>) -> BookResponse {
        BookService::new(self.repo.as_ref()).get_book(user_id.0, book_id.0)
    }

    /// Update reading progress
    #[oai(path = "/users/:user_id/books/:book_id", method = "put")]
    #[tracing::instrument(level = "debug", skip(self, user_id, book_id, body))]
    async fn update_reading_progress(
        &self,
        user_id: Path<i64>,
        book_id: Path<i64>,
        body: Json<ProgressUpdateDto>,
    ) -> BookResponse {
        BookService::new(self.repo.as_ref()).update_progress(user_id.0, book_id.0, body.0.page)
    }

    /// Remove a book from a user's reading list
    #[oai(path = "/users/:user_id/books/:book_id", method = "delete")]
    #[tracing::instrument(level = "debug", skip(self, user_id, book_id))]
    async fn remove_user_book(&self, user_id: Path<i64>, book_id: Path<i64>) -> RemoveBookResponse {
        BookService::new(self.repo.as_ref()).remove_book(user_id.0, book_id.0)
    }
}
