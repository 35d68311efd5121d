//! Client-boundary error taxonomy.
//!
//! Every failure a page can see is one of these kinds; the notification
//! layer renders them uniformly, and 401s trigger the session-expiry path.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx HTTP status. Single attempt, no retry.
    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },

    /// The request never produced a response (offline, DNS, CORS).
    #[error("network error: {0}")]
    Network(String),

    /// The response body could not be decoded into the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),

    /// The backend answered with a `success: false` envelope.
    #[error("{0}")]
    Backend(String),

    /// localStorage was unavailable or rejected a write while persisting
    /// the session.
    #[error("storage error: {0}")]
    Storage(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Http { status: 401, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::dto::envelope::ApiResponse;

    #[test]
    fn http_error_carries_status_line() {
        let err = ApiError::Http {
            status: 503,
            status_text: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "HTTP 503: Service Unavailable");
    }

    #[test]
    fn http_error_matches_envelope_failure_shape() {
        // The typed error and the wire envelope must agree on the status line.
        let err = ApiError::Http {
            status: 404,
            status_text: "Not Found".into(),
        };
        let envelope: ApiResponse<()> = ApiResponse::http_failure(404, "Not Found");
        assert_eq!(Some(err.to_string()), envelope.error);
    }

    #[test]
    fn only_401_reads_as_unauthorized() {
        let unauthorized = ApiError::Http {
            status: 401,
            status_text: "Unauthorized".into(),
        };
        let forbidden = ApiError::Http {
            status: 403,
            status_text: "Forbidden".into(),
        };
        assert!(unauthorized.is_unauthorized());
        assert!(!forbidden.is_unauthorized());
        assert!(!ApiError::Network("offline".into()).is_unauthorized());
    }

    #[test]
    fn backend_error_displays_message_verbatim() {
        let err = ApiError::Backend("provider not connected".into());
        assert_eq!(err.to_string(), "provider not connected");
    }
}
