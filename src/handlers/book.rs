//! Book CRUD handlers: create, list, read, update, delete.
//!
//! Each handler is a stateless single pass: parse and validate the input,
//! run the one storage call, serialize the outcome. A missing row is turned
//! into `AppError::NotFound` here; storage failures propagate untouched.

use crate::error::AppError;
use crate::model::Book;
use crate::response::{self, Message};
use crate::service::{validation, BookService};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde_json::Value;

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Book>, AppError> {
    let Json(body) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let new = validation::new_book(&body)?;
    let book = BookService::insert(&state.pool, &new).await?;
    Ok(Json(book))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Book>>, AppError> {
    let books = BookService::list_all(&state.pool).await?;
    Ok(Json(books))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Book>, AppError> {
    let book = BookService::get_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(book))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Book>, AppError> {
    let Json(body) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let patch = validation::book_patch(&body)?;
    let book = BookService::update(&state.pool, id, &patch)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(book))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Message>, AppError> {
    BookService::delete(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(response::book_deleted()))
}
