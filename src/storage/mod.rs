// Reading-list storage. Only an in-memory implementation exists; nothing
// survives a restart.

mod error;
mod memory;

pub use error::{ErrorKind, StoreError, StoreResult};
pub use memory::MemoryBookStore;

use crate::domain::models::{Book, BookId, UserId};

/// Counts reported by the health endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    /// Users that have (or had) a collection
    pub users: usize,
    pub books: usize,
}

/// Owner of every user's reading list.
///
/// All methods are synchronous and never block on I/O, so callers on an async
/// runtime can invoke them directly from request handlers.
pub trait BookRepo: Send + Sync {
    /// Insert a copy of `book` into the user's collection. Fails with
    /// [`StoreError::Conflict`] if the id is already taken for that user.
    fn add_book(&self, user_id: UserId, book: Book) -> StoreResult<Book>;

    fn get_book(&self, user_id: UserId, book_id: BookId) -> StoreResult<Book>;

    /// All of the user's books in no particular order. Unknown users simply
    /// have no books.
    fn list_books(&self, user_id: UserId) -> Vec<Book>;

    /// Overwrite the reading position and return the updated book. The page
    /// is taken as-is, without range checks.
    fn update_progress(&self, user_id: UserId, book_id: BookId, page: i64) -> StoreResult<Book>;

    fn remove_book(&self, user_id: UserId, book_id: BookId) -> StoreResult<()>;

    fn stats(&self) -> StoreStats;
}
