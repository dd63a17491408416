//! Bookshelf: HTTP CRUD service for a book catalog backed by SQLite.

pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use error::AppError;
pub use model::{Book, BookPatch, NewBook};
pub use routes::{book_routes, common_routes};
pub use service::BookService;
pub use state::AppState;
pub use store::{connect, init_schema};
