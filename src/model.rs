//! Book entity and per-operation input shapes.

use serde::{Deserialize, Serialize};

/// A persisted catalog row. Declaration order here is the wire field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Book {
    pub id: i64,
    pub book_name: String,
    pub author: String,
    pub publisher: String,
}

/// Create input: all three fields mandatory.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub book_name: String,
    pub author: String,
    pub publisher: String,
}

/// Update input: absent fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct BookPatch {
    pub book_name: Option<String>,
    pub author: Option<String>,
    pub publisher: Option<String>,
}
