//! Fixed-shape message bodies for confirmations and structured errors.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

pub fn book_deleted() -> Message {
    Message {
        message: "Book deleted successfully".to_string(),
    }
}
