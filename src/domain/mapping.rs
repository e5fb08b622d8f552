// Mapping between domain models and the HTTP DTOs

use super::models::Book;
use crate::books_api::models::{BookDto, ErrorDto};
use crate::storage::StoreError;

impl From<BookDto> for Book {
    fn from(dto: BookDto) -> Self {
        Book {
            id: dto.id,
            title: dto.title,
            author: dto.author,
            published: dto.published,
            page: dto.page,
        }
    }
}

impl From<Book> for BookDto {
    fn from(book: Book) -> Self {
        BookDto {
            id: book.id,
            title: book.title,
            author: book.author,
            published: book.published,
            page: book.page,
        }
    }
}

impl From<&StoreError> for ErrorDto {
    fn from(err: &StoreError) -> Self {
        ErrorDto {
            status_code: err.status_code(),
            message: err.to_string(),
        }
    }
}
