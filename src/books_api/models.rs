use chrono::NaiveDate;
use poem_openapi::{ApiResponse, Object, payload::Json};

/// A book on a user's reading list
#[derive(Debug, Clone, PartialEq, Object)]
#[oai(rename_all = "snake_case")]
pub struct BookDto {
    /// Book id, unique within one user's list
    pub id: i64,
    pub title: String,
    pub author: String,
    /// Publication date (YYYY-MM-DD)
    pub published: NaiveDate,
    /// Current reading position
    pub page: i64,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "snake_case")]
pub struct ProgressUpdateDto {
    /// New reading position, stored as given
    pub page: i64,
}

#[derive(Debug, Clone, PartialEq, Object)]
#[oai(rename_all = "snake_case")]
pub struct ErrorDto {
    /// Same value as the HTTP status of the response
    pub status_code: u16,
    /// Human-readable error message
    pub message: String,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "snake_case")]
pub struct HealthDto {
    pub status: String,
    pub version: String,
    pub users: u64,
    pub books: u64,
}

#[derive(ApiResponse)]
pub enum AddBookResponse {
    /// Book added to the reading list
    #[oai(status = 201)]
    Created(Json<BookDto>),

    /// The user is already reading a book with this id
    #[oai(status = 409)]
    Conflict(Json<ErrorDto>),
}

#[derive(ApiResponse)]
pub enum ListBooksResponse {
    /// All books of the user, in no particular order
    #[oai(status = 200)]
    Ok(Json<Vec<BookDto>>),
}

#[derive(ApiResponse)]
pub enum BookResponse {
    #[oai(status = 200)]
    Ok(Json<BookDto>),

    /// User or book not found
    #[oai(status = 404)]
    NotFound(Json<ErrorDto>),
}

#[derive(ApiResponse)]
pub enum RemoveBookResponse {
    /// Book removed
    #[oai(status = 204)]
    NoContent,

    /// User or book not found
    #[oai(status = 404)]
    NotFound(Json<ErrorDto>),
}

#[derive(ApiResponse)]
pub enum HealthResponse {
    #[oai(status = 200)]
    Ok(Json<HealthDto>),
}
