//! Request body validation: untrusted JSON to typed per-operation inputs.

use crate::error::AppError;
use crate::model::{BookPatch, NewBook};
use serde_json::{Map, Value};

fn as_object(body: &Value) -> Result<&Map<String, Value>, AppError> {
    body.as_object()
        .ok_or_else(|| AppError::BadRequest("body must be a JSON object".to_string()))
}

fn required_string(body: &Map<String, Value>, field: &str) -> Result<String, AppError> {
    match body.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(AppError::BadRequest(format!("{} must be a string", field))),
        None => Err(AppError::BadRequest(format!("{} is required", field))),
    }
}

fn optional_string(body: &Map<String, Value>, field: &str) -> Result<Option<String>, AppError> {
    match body.get(field) {
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Null) | None => Ok(None),
        Some(_) => Err(AppError::BadRequest(format!("{} must be a string", field))),
    }
}

/// Parse create input. All three fields must be present strings.
pub fn new_book(body: &Value) -> Result<NewBook, AppError> {
    let body = as_object(body)?;
    Ok(NewBook {
        book_name: required_string(body, "book_name")?,
        author: required_string(body, "author")?,
        publisher: required_string(body, "publisher")?,
    })
}

/// Parse update input. Every field is optional; unknown fields are ignored.
pub fn book_patch(body: &Value) -> Result<BookPatch, AppError> {
    let body = as_object(body)?;
    Ok(BookPatch {
        book_name: optional_string(body, "book_name")?,
        author: optional_string(body, "author")?,
        publisher: optional_string(body, "publisher")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_book_accepts_complete_input() {
        let parsed = new_book(&json!({
            "book_name": "Dune",
            "author": "Herbert",
            "publisher": "Chilton"
        }))
        .unwrap();
        assert_eq!(parsed.book_name, "Dune");
        assert_eq!(parsed.author, "Herbert");
        assert_eq!(parsed.publisher, "Chilton");
    }

    #[test]
    fn new_book_rejects_each_missing_field() {
        for field in ["book_name", "author", "publisher"] {
            let mut body = json!({
                "book_name": "Dune",
                "author": "Herbert",
                "publisher": "Chilton"
            });
            body.as_object_mut().unwrap().remove(field);
            let err = new_book(&body).unwrap_err();
            assert!(matches!(err, AppError::BadRequest(_)), "{} missing", field);
        }
    }

    #[test]
    fn new_book_rejects_non_string_and_null_fields() {
        let err = new_book(&json!({
            "book_name": 7,
            "author": "Herbert",
            "publisher": "Chilton"
        }))
        .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        let err = new_book(&json!({
            "book_name": "Dune",
            "author": null,
            "publisher": "Chilton"
        }))
        .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn new_book_rejects_non_object_body() {
        assert!(new_book(&json!(["Dune"])).is_err());
        assert!(new_book(&json!("Dune")).is_err());
    }

    #[test]
    fn new_book_accepts_empty_strings() {
        let parsed = new_book(&json!({
            "book_name": "",
            "author": "",
            "publisher": ""
        }))
        .unwrap();
        assert_eq!(parsed.book_name, "");
    }

    #[test]
    fn book_patch_takes_any_subset() {
        let patch = book_patch(&json!({})).unwrap();
        assert!(patch.book_name.is_none());
        assert!(patch.author.is_none());
        assert!(patch.publisher.is_none());

        let patch = book_patch(&json!({"author": "Herbert"})).unwrap();
        assert_eq!(patch.author.as_deref(), Some("Herbert"));
        assert!(patch.book_name.is_none());
    }

    #[test]
    fn book_patch_ignores_unknown_fields() {
        let patch = book_patch(&json!({"isbn": "123", "author": "Herbert"})).unwrap();
        assert_eq!(patch.author.as_deref(), Some("Herbert"));
    }

    #[test]
    fn book_patch_rejects_non_string_values() {
        assert!(book_patch(&json!({"author": 42})).is_err());
    }
}
