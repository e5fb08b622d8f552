use poem_openapi::payload::Json;

use crate::{
    books_api::models::{
        AddBookResponse, BookDto, BookResponse, ErrorDto, ListBooksResponse, RemoveBookResponse,
    },
    domain::models::{Book, BookId, UserId},
    storage::{BookRepo, ErrorKind, StoreError, StoreResult},
};

pub struct BookService<'a> {
    pub repo: &'a dyn BookRepo,
}

impl<'a> BookService<'a> {
    pub fn new(repo: &'a dyn BookRepo) -> Self {
        Self { repo }
    }

    #[tracing::instrument(level = "debug", skip(self, book), fields(book_id = book.id))]
    pub fn add_book(&self, user_id: UserId, book: BookDto) -> AddBookResponse {
        match self.repo.add_book(user_id, book.into()) {
            Ok(stored) => {
                tracing::info!(user_id, book_id = stored.id, "book added");
                AddBookResponse::Created(Json(stored.into()))
            }
            Err(e) => {
                tracing::debug!(error = %e, "add rejected");
                // add only ever conflicts
                debug_assert_eq!(e.kind(), ErrorKind::Conflict);
                AddBookResponse::Conflict(Json(ErrorDto::from(&e)))
            }
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn list_books(&self, user_id: UserId) -> ListBooksResponse {
        let books: Vec<BookDto> = self
            .repo
            .list_books(user_id)
            .into_iter()
            .map(BookDto::from)
            .collect();
        tracing::debug!(count = books.len(), "listed books");
        ListBooksResponse::Ok(Json(books))
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn get_book(&self, user_id: UserId, book_id: BookId) -> BookResponse {
        book_response(self.repo.get_book(user_id, book_id))
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn update_progress(&self, user_id: UserId, book_id: BookId, page: i64) -> BookResponse {
        let result = self.repo.update_progress(user_id, book_id, page);
        if result.is_ok() {
            tracing::info!(user_id, book_id, page, "reading progress updated");
        }
        book_response(result)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn remove_book(&self, user_id: UserId, book_id: BookId) -> RemoveBookResponse {
        match self.repo.remove_book(user_id, book_id) {
            Ok(()) => {
                tracing::info!(user_id, book_id, "book removed");
                RemoveBookResponse::NoContent
            }
            Err(e) => RemoveBookResponse::NotFound(Json(not_found(&e))),
        }
    }
}

fn book_response(result: StoreResult<Book>) -> BookResponse {
    match result {
        Ok(book) => BookResponse::Ok(Json(book.into())),
        Err(e) => BookResponse::NotFound(Json(not_found(&e))),
    }
}

fn not_found(e: &StoreError) -> ErrorDto {
    tracing::debug!(error = %e, "lookup failed");
    ErrorDto::from(e)
}
