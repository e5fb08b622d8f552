pub mod books_api;
pub mod config;
pub mod domain;
pub mod storage;

use std::sync::Arc;

use poem::{
    Endpoint, EndpointExt, Route, Server,
    listener::TcpListener,
    middleware::{Cors, Tracing as PoemTracing},
};
use poem_openapi::OpenApiService;

use books_api::BooksApi;
use config::Config;
use storage::BookRepo;

pub type ReadingResult<T> = anyhow::Result<T>;

/// Build the route tree: the book API at `/`, RapiDoc at `/ui` and the
/// OpenAPI document at `/spec`.
pub fn build_app(repo: Arc<dyn BookRepo>, public_url: &str) -> impl Endpoint + use<> {
    let version = env!("CARGO_PKG_VERSION");
    let api = BooksApi { repo };
    let api_service = OpenApiService::new(api, "Reading Progress API", version).server(public_url);
    let ui = api_service.rapidoc();
    let spec = api_service.spec();
    Route::new()
        .nest("/", api_service)
        .nest("/ui", ui)
        .nest("/spec", poem::endpoint::make_sync(move |_| spec.clone()))
        .with(Cors::new())
        .with(PoemTracing)
}

pub async fn run_server(config: &Config, repo: Arc<dyn BookRepo>) -> ReadingResult<()> {
    let route = build_app(repo, &config.public_url);
    let bind_addr = config.bind_addr.as_str();
    tracing::info!(%bind_addr, "starting HTTP server");
    Server::new(TcpListener::bind(bind_addr)).run(route).await?;
    Ok(())
}
