use std::time::Duration;

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::models::{ApiError, Book, ClientError, ClientResult, ProgressUpdate};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Typed client for the reading progress HTTP API
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the given base URL (e.g. "http://localhost:8080").
    /// Every request is bounded by `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url_str = base_url.into();
        tracing::debug!(base_url = %base_url_str, ?timeout, "creating ApiClient");
        Ok(ApiClient {
            base_url: base_url_str.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// POST /users/:user_id/books
    #[tracing::instrument(level = "debug", skip(self, book), fields(book_id = book.id))]
    pub async fn add_book(&self, user_id: i64, book: &Book) -> ClientResult<Book> {
        let url = self.url(&format!("/users/{}/books", user_id));
        tracing::debug!(%url, "POST book");
        let resp = self.client.post(&url).json(book).send().await?;
        decode(resp, StatusCode::CREATED).await
    }

    /// GET /users/:user_id/books
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn list_books(&self, user_id: i64) -> ClientResult<Vec<Book>> {
        let url = self.url(&format!("/users/{}/books", user_id));
        tracing::debug!(%url, "GET books");
        let resp = self.client.get(&url).send().await?;
        decode(resp, StatusCode::OK).await
    }

    /// GET /users/:user_id/books/:book_id
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn get_book(&self, user_id: i64, book_id: i64) -> ClientResult<Book> {
        let url = self.url(&format!("/users/{}/books/{}", user_id, book_id));
        tracing::debug!(%url, "GET book");
        let resp = self.client.get(&url).send().await?;
        decode(resp, StatusCode::OK).await
    }

    /// PUT /users/:user_id/books/:book_id
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn update_progress(&self, user_id: i64, book_id: i64, page: i64) -> ClientResult<Book> {
        let url = self.url(&format!("/users/{}/books/{}", user_id, book_id));
        tracing::debug!(%url, page, "PUT progress");
        let resp = self
            .client
            .put(&url)
            .json(&ProgressUpdate { page })
            .send()
            .await?;
        decode(resp, StatusCode::OK).await
    }

    /// DELETE /users/:user_id/books/:book_id
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn remove_book(&self, user_id: i64, book_id: i64) -> ClientResult<()> {
        let url = self.url(&format!("/users/{}/books/{}", user_id, book_id));
        tracing::debug!(%url, "DELETE book");
        let resp = self.client.delete(&url).send().await?;
        if resp.status() == StatusCode::NO_CONTENT {
            Ok(())
        } else {
            Err(error_from(resp).await)
        }
    }
}

async fn decode<T: DeserializeOwned>(resp: Response, expected: StatusCode) -> ClientResult<T> {
    if resp.status() == expected {
        Ok(resp.json().await?)
    } else {
        Err(error_from(resp).await)
    }
}

async fn error_from(resp: Response) -> ClientError {
    let status = resp.status();
    match resp.json::<ApiError>().await {
        Ok(body) => ClientError::Api(body),
        Err(e) => {
            tracing::debug!(%status, error = %e, "response has no error body");
            ClientError::UnexpectedStatus(status.as_u16())
        }
    }
}
