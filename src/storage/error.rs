use crate::domain::models::{BookId, UserId};

pub type StoreResult<T> = Result<T, StoreError>;

/// Broad category of a [`StoreError`], used by callers that only care about
/// which transport status to answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
}

/// Expected failures of a store operation.
///
/// These are ordinary outcomes, never panics. The store has no other failure
/// mode since it performs no I/O.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("user {user_id} not found")]
    UserNotFound { user_id: UserId },

    #[error("book {book_id} not found for user {user_id}")]
    BookNotFound { user_id: UserId, book_id: BookId },

    #[error("user {user_id} is already reading the book with id {book_id}")]
    Conflict { user_id: UserId, book_id: BookId },
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UserNotFound { .. } | Self::BookNotFound { .. } => ErrorKind::NotFound,
            Self::Conflict { .. } => ErrorKind::Conflict,
        }
    }

    /// HTTP-style status code for this error (404 or 409).
    pub fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_variants_share_status() {
        let user = StoreError::UserNotFound { user_id: 7 };
        let book = StoreError::BookNotFound {
            user_id: 7,
            book_id: 3,
        };
        assert_eq!(user.kind(), ErrorKind::NotFound);
        assert_eq!(book.kind(), ErrorKind::NotFound);
        assert_eq!(user.status_code(), 404);
        assert_eq!(book.status_code(), 404);
    }

    #[test]
    fn messages() {
        assert_eq!(
            StoreError::BookNotFound {
                user_id: 1,
                book_id: 1234
            }
            .to_string(),
            "book 1234 not found for user 1"
        );
        let conflict = StoreError::Conflict {
            user_id: 1,
            book_id: 1234,
        };
        assert_eq!(
            conflict.to_string(),
            "user 1 is already reading the book with id 1234"
        );
        assert_eq!(conflict.status_code(), 409);
    }
}
