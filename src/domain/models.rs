// Domain models shared by the store and the HTTP layer

use chrono::NaiveDate;

pub type UserId = i64;
pub type BookId = i64;

/// A book on a user's reading list.
///
/// `id` is only unique within one user's collection. `page` is the single
/// field that changes after the book has been added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub published: NaiveDate,
    pub page: i64,
}
