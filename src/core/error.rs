use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Failures surfaced by the chargeback accessor.
///
/// Every kind is returned to the caller unchanged; nothing at this layer
/// retries or recovers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The inputs could not be turned into a valid request.
    #[error("Failed to build request: {0}")]
    RequestConstruction(String),
    /// The request was built but executing it failed.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
    /// The response body did not match the expected JSON shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("{0}")]
    Network(#[from] reqwest::Error),
    #[error("HTTP {status}: {message}")]
    Status {
        status: StatusCode,
        message: String,
        body: String,
    },
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Error document returned by the platform alongside non-2xx statuses.
#[derive(Deserialize)]
struct ErrorDocument {
    title: Option<String>,
    detail: Option<String>,
    field: Option<String>,
}

impl TransportError {
    /// Build a status error, pulling title/detail out of the body when it is an
    /// error document.
    pub fn from_status(status: StatusCode, body: String) -> Self {
        let message = match serde_json::from_str::<ErrorDocument>(&body) {
            Ok(doc) => {
                let mut message = match (doc.title, doc.detail) {
                    (Some(title), Some(detail)) => format!("{}: {}", title, detail),
                    (Some(title), None) => title,
                    (None, Some(detail)) => detail,
                    (None, None) => body.clone(),
                };
                if let Some(field) = doc.field {
                    message.push_str(&format!(" (field: {})", field));
                }
                message
            }
            Err(_) => body.clone(),
        };
        Self::Status {
            status,
            message,
            body,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Network(e) => e.status(),
            Self::Status { status, .. } => Some(*status),
        }
    }
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Transport(e) if e.status() == Some(StatusCode::NOT_FOUND)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_uses_error_document() {
        let body = r#"{
            "status": 404,
            "title": "Not Found",
            "detail": "No chargeback exists with token chb_xxx.",
            "_links": { "documentation": { "href": "https://docs.mollie.com", "type": "text/html" } }
        }"#;
        let err = TransportError::from_status(StatusCode::NOT_FOUND, body.to_string());
        assert_eq!(
            err.to_string(),
            "HTTP 404 Not Found: Not Found: No chargeback exists with token chb_xxx."
        );
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }

    #[test]
    fn status_error_includes_field() {
        let body = r#"{"status":422,"title":"Unprocessable Entity","detail":"The profile id is invalid","field":"profileId"}"#;
        let err = TransportError::from_status(StatusCode::UNPROCESSABLE_ENTITY, body.to_string());
        assert!(err.to_string().ends_with("(field: profileId)"));
    }

    #[test]
    fn status_error_falls_back_to_raw_body() {
        let err = TransportError::from_status(StatusCode::BAD_GATEWAY, "upstream down".to_string());
        assert_eq!(err.to_string(), "HTTP 502 Bad Gateway: upstream down");
    }

    #[test]
    fn not_found_is_detected() {
        let err: ApiError =
            TransportError::from_status(StatusCode::NOT_FOUND, String::new()).into();
        assert!(err.is_not_found());

        let err: ApiError =
            TransportError::from_status(StatusCode::UNAUTHORIZED, String::new()).into();
        assert!(!err.is_not_found());
    }

    #[test]
    fn decode_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: ApiError = json_err.into();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(err.to_string().starts_with("Failed to decode response"));
    }
}
