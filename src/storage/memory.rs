use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{BookRepo, StoreError, StoreResult, StoreStats};
use crate::domain::models::{Book, BookId, UserId};

type Collections = HashMap<UserId, HashMap<BookId, Book>>;

/// In-memory [`BookRepo`].
///
/// Books are kept by value in a per-user map rather than behind pointers in
/// one flat map, so one user's books stay together once their map has been
/// allocated. A single lock covers the whole structure: lookups share it,
/// mutations hold it exclusively for the entire lookup-and-modify step.
#[derive(Debug, Default)]
pub struct MemoryBookStore {
    users: RwLock<Collections>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Every write is a single map operation, so a panic elsewhere can't leave
    // the maps half-updated and a poisoned lock is safe to reuse.
    fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.users.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        self.users.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl BookRepo for MemoryBookStore {
    #[tracing::instrument(level = "debug", skip(self, book), fields(book_id = book.id))]
    fn add_book(&self, user_id: UserId, book: Book) -> StoreResult<Book> {
        let mut users = self.write();
        let books = users.entry(user_id).or_default();
        match books.entry(book.id) {
            Entry::Occupied(_) => {
                tracing::debug!("book already on reading list");
                Err(StoreError::Conflict {
                    user_id,
                    book_id: book.id,
                })
            }
            Entry::Vacant(slot) => Ok(slot.insert(book).clone()),
        }
    }

    fn get_book(&self, user_id: UserId, book_id: BookId) -> StoreResult<Book> {
        let users = self.read();
        let books = users
            .get(&user_id)
            .ok_or(StoreError::UserNotFound { user_id })?;
        books
            .get(&book_id)
            .cloned()
            .ok_or(StoreError::BookNotFound { user_id, book_id })
    }

    fn list_books(&self, user_id: UserId) -> Vec<Book> {
        self.read()
            .get(&user_id)
            .map(|books| books.values().cloned().collect())
            .unwrap_or_default()
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn update_progress(&self, user_id: UserId, book_id: BookId, page: i64) -> StoreResult<Book> {
        let mut users = self.write();
        let book = users
            .get_mut(&user_id)
            .ok_or(StoreError::UserNotFound { user_id })?
            .get_mut(&book_id)
            .ok_or(StoreError::BookNotFound { user_id, book_id })?;
        book.page = page;
        Ok(book.clone())
    }

    // The user's map is left in place even when it becomes empty.
    #[tracing::instrument(level = "debug", skip(self))]
    fn remove_book(&self, user_id: UserId, book_id: BookId) -> StoreResult<()> {
        let mut users = self.write();
        users
            .get_mut(&user_id)
            .ok_or(StoreError::UserNotFound { user_id })?
            .remove(&book_id)
            .map(|_| ())
            .ok_or(StoreError::BookNotFound { user_id, book_id })
    }

    fn stats(&self) -> StoreStats {
        let users = self.read();
        StoreStats {
            users: users.len(),
            books: users.values().map(HashMap::len).sum(),
        }
    }
}
