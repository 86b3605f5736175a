//! Error handling for the API layer
//!
//! Every backend error response is normalized into the same
//! `{status, message, data}` shape before a caller sees it, so screens never
//! need to pick a backend body apart themselves. Conflicts (409) keep their
//! payload: "license already exists" carries the existing license, which the
//! caller shows as an informative read rather than a failure.

use serde_json::Value;
use thiserror::Error;

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Error type for all client operations.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Normalized backend error response.
    #[error("{message}")]
    Api {
        status: u16,
        message: String,
        data: Option<Value>,
    },

    /// Transport-level failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body did not decode into the expected shape.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration errors (bad base URL, malformed settings).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request URL construction failure.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Client-side validation failure; never reaches the network.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl ApiError {
    /// Build the normalized error for a non-success response.
    ///
    /// The message prefers the backend's `message`, then `error`, then the
    /// generic fallback.
    pub fn from_response(status: u16, body: Option<Value>) -> Self {
        let message = body
            .as_ref()
            .and_then(|body| {
                body.get("message")
                    .or_else(|| body.get("error"))
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .unwrap_or_else(|| format!("Request failed with status {status}"));

        ApiError::Api {
            status,
            message,
            data: body,
        }
    }

    /// HTTP status of a normalized backend error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
    }

    /// The raw error payload, when the backend sent one.
    pub fn data(&self) -> Option<&Value> {
        match self {
            ApiError::Api { data, .. } => data.as_ref(),
            _ => None,
        }
    }

    /// For 409 responses on license generation, the already-issued license
    /// the backend reports. Checked at both nesting depths the backend has
    /// used over time.
    pub fn existing_license(&self) -> Option<&Value> {
        if !self.is_conflict() {
            return None;
        }
        let data = self.data()?;
        data.pointer("/data/existingLicense")
            .or_else(|| data.get("existingLicense"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn message_prefers_backend_message_field() {
        let err = ApiError::from_response(400, Some(json!({"message": "bad input", "error": "x"})));
        assert_eq!(err.to_string(), "bad input");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn message_falls_back_to_error_field() {
        let err = ApiError::from_response(403, Some(json!({"error": "denied"})));
        assert_eq!(err.to_string(), "denied");
    }

    #[test]
    fn message_falls_back_to_generic_text() {
        let err = ApiError::from_response(502, Some(json!({"detail": "?"})));
        assert_eq!(err.to_string(), "Request failed with status 502");

        let err = ApiError::from_response(500, None);
        assert_eq!(err.to_string(), "Request failed with status 500");
    }

    #[test]
    fn conflict_exposes_existing_license_at_either_depth() {
        let nested = ApiError::from_response(
            409,
            Some(json!({
                "message": "License already exists",
                "data": {"existingLicense": {"licenseKey": "KEY-1", "expiryDate": "2026-01-01"}}
            })),
        );
        assert!(nested.is_conflict());
        assert_eq!(
            nested.existing_license().unwrap()["licenseKey"],
            json!("KEY-1")
        );

        let flat = ApiError::from_response(
            409,
            Some(json!({"existingLicense": {"licenseKey": "KEY-2"}})),
        );
        assert_eq!(
            flat.existing_license().unwrap()["licenseKey"],
            json!("KEY-2")
        );
    }

    #[test]
    fn non_conflict_has_no_existing_license() {
        let err = ApiError::from_response(400, Some(json!({"existingLicense": {}})));
        assert!(err.existing_license().is_none());
    }
}
