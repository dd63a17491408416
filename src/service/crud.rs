//! Single-row CRUD execution against SQLite.

use crate::error::AppError;
use crate::model::{Book, BookPatch, NewBook};
use sqlx::SqlitePool;

pub struct BookService;

impl BookService {
    /// Insert one row; the id comes from AUTOINCREMENT. Returns the created row.
    pub async fn insert(pool: &SqlitePool, new: &NewBook) -> Result<Book, AppError> {
        let sql = "INSERT INTO book (book_name, author, publisher) \
                   VALUES (?1, ?2, ?3) \
                   RETURNING id, book_name, author, publisher";
        tracing::debug!(sql = %sql, "insert");
        let book = sqlx::query_as::<_, Book>(sql)
            .bind(&new.book_name)
            .bind(&new.author)
            .bind(&new.publisher)
            .fetch_one(pool)
            .await?;
        Ok(book)
    }

    /// All rows in insertion order. Empty store yields an empty vec.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Book>, AppError> {
        let sql = "SELECT id, book_name, author, publisher FROM book ORDER BY id";
        tracing::debug!(sql = %sql, "list");
        let books = sqlx::query_as::<_, Book>(sql).fetch_all(pool).await?;
        Ok(books)
    }

    /// Fetch one row by primary key. None when absent.
    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Book>, AppError> {
        let sql = "SELECT id, book_name, author, publisher FROM book WHERE id = ?1";
        tracing::debug!(sql = %sql, id, "read");
        let book = sqlx::query_as::<_, Book>(sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(book)
    }

    /// Apply only the provided fields; absent ones keep their stored value.
    /// Returns the updated row, or None when the id is absent.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        patch: &BookPatch,
    ) -> Result<Option<Book>, AppError> {
        let sql = "UPDATE book SET \
                   book_name = COALESCE(?1, book_name), \
                   author = COALESCE(?2, author), \
                   publisher = COALESCE(?3, publisher) \
                   WHERE id = ?4 \
                   RETURNING id, book_name, author, publisher";
        tracing::debug!(sql = %sql, id, "update");
        let book = sqlx::query_as::<_, Book>(sql)
            .bind(&patch.book_name)
            .bind(&patch.author)
            .bind(&patch.publisher)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(book)
    }

    /// Remove one row permanently. Returns the deleted row, or None when absent.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<Option<Book>, AppError> {
        let sql = "DELETE FROM book WHERE id = ?1 \
                   RETURNING id, book_name, author, publisher";
        tracing::debug!(sql = %sql, id, "delete");
        let book = sqlx::query_as::<_, Book>(sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(book)
    }
}
