//! Uniform response envelope
//!
//! Every API boundary returns one of two shapes:
//!
//! - success: `{"success":true,"data":...,"message"?,"timestamp":...}`
//! - error:   `{"success":false,"error":...,"code":...,"status":...,"details"?,"timestamp":...}`
//!
//! The `details` object is stripped before serialization in production so
//! internal structure never leaks outside development.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::validation::FieldErrors;

/// Stable machine-readable error codes
pub mod codes {
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const CONFLICT: &str = "CONFLICT";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

/// RFC 3339 timestamp stamped on every envelope
pub fn envelope_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Success envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
            timestamp: envelope_timestamp(),
        }
    }

    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: Some(message.into()),
            timestamp: envelope_timestamp(),
        }
    }
}

/// Error envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    pub code: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    pub timestamp: String,
}

impl ErrorBody {
    pub fn new(
        message: impl Into<String>,
        code: &str,
        status: u16,
        details: Option<serde_json::Value>,
    ) -> Self {
        Self {
            success: false,
            error: message.into(),
            code: code.to_string(),
            status,
            details,
            timestamp: envelope_timestamp(),
        }
    }

    /// Field-level validation failure, detail shape
    /// `{"validationErrors":{field:message,...}}`
    pub fn validation(errors: &FieldErrors) -> Self {
        Self::new(
            "Validation failed",
            codes::VALIDATION_ERROR,
            400,
            Some(serde_json::json!({ "validationErrors": errors })),
        )
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(message, codes::UNAUTHORIZED, 401, None)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(message, codes::NOT_FOUND, 404, None)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(message, codes::CONFLICT, 409, None)
    }

    pub fn internal() -> Self {
        Self::new(
            "An internal error occurred",
            codes::INTERNAL_ERROR,
            500,
            None,
        )
    }

    /// Strip internal detail, used for production responses
    pub fn without_details(mut self) -> Self {
        self.details = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_shape() {
        let body = ApiResponse::success(serde_json::json!({"id": 1}));
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["data"]["id"], 1);
        assert!(value.get("message").is_none());
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn test_success_with_message() {
        let body = ApiResponse::success_with_message(1, "Created");
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["message"], "Created");
    }

    #[test]
    fn test_error_shape() {
        let body = ErrorBody::conflict("Email already registered");
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "Email already registered");
        assert_eq!(value["code"], "CONFLICT");
        assert_eq!(value["status"], 409);
        assert!(value.get("details").is_none());
    }

    #[test]
    fn test_validation_detail_shape() {
        let mut errors = FieldErrors::new();
        errors.insert("email".to_string(), "Invalid email format".to_string());

        let body = ErrorBody::validation(&errors);
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["code"], "VALIDATION_ERROR");
        assert_eq!(value["status"], 400);
        assert_eq!(
            value["details"]["validationErrors"]["email"],
            "Invalid email format"
        );
    }

    #[test]
    fn test_without_details_strips_validation_errors() {
        let mut errors = FieldErrors::new();
        errors.insert("name".to_string(), "Too short".to_string());

        let body = ErrorBody::validation(&errors).without_details();
        let value = serde_json::to_value(&body).unwrap();
        assert!(value.get("details").is_none());
    }

    #[test]
    fn test_timestamp_is_rfc3339() {
        let stamp = envelope_timestamp();
        assert!(chrono::DateTime::parse_from_rfc3339(&stamp).is_ok());
    }
}
