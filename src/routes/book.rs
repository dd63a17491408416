//! Book routes: method+path table under /book.

use crate::handlers::book::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn book_routes(state: AppState) -> Router {
    Router::new()
        .route("/book", get(list).post(create))
        .route("/book/:id", get(read).put(update).delete(delete_handler))
        .with_state(state)
}
