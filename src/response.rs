//! Response helpers. Success bodies are written as the raw payload; errors use the
//! `{"status": "Error", "error": "..."}` envelope.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use std::fmt::Display;

pub const STATUS_OK: &str = "OK";
pub const STATUS_ERROR: &str = "Error";

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct ErrorBody {
    pub status: &'static str,
    pub error: String,
}

/// Body of a successful create.
#[derive(Serialize, Debug)]
pub struct CreatedId {
    pub id: i64,
}

pub fn general_error(err: &impl Display) -> ErrorBody {
    ErrorBody {
        status: STATUS_ERROR,
        error: err.to_string(),
    }
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_shape() {
        let body = serde_json::to_value(general_error(&"empty body")).unwrap();
        assert_eq!(body, serde_json::json!({"status": "Error", "error": "empty body"}));
    }

    #[test]
    fn created_id_is_not_wrapped() {
        let (status, Json(body)) = created(CreatedId { id: 7 });
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(serde_json::to_value(body).unwrap(), serde_json::json!({"id": 7}));
    }
}
