use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// Signal raised when a predicate denies access.
///
/// Carries the status code the response must use and the resolved
/// human-readable message. Constructed per evaluation, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{status_code}: {message}")]
pub struct Rejection {
    status_code: StatusCode,
    message: String,
}

impl Rejection {
    pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Structured response body for this rejection. The message is the only
    /// thing exposed; predicate identity and internals never leak.
    pub fn detail(&self) -> Detail {
        Detail {
            detail: self.message.clone(),
        }
    }
}

/// Response body with the rejection message bound to a `detail` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detail {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_status_and_message() {
        let rejection = Rejection::new(StatusCode::FORBIDDEN, "no entry");
        assert_eq!(rejection.to_string(), "403 Forbidden: no entry");
    }

    #[test]
    fn detail_serializes_to_a_detail_field() {
        let rejection = Rejection::new(StatusCode::NOT_FOUND, "No such user");
        let body = serde_json::to_value(rejection.detail()).unwrap();
        assert_eq!(body, serde_json::json!({ "detail": "No such user" }));
    }
}
