pub mod api;
pub mod command;
pub mod models;
pub mod session;

pub use api::{ApiClient, DEFAULT_TIMEOUT};
pub use command::{Command, ParseCommandError};
pub use models::{ApiError, Book, ClientError, ClientResult};
