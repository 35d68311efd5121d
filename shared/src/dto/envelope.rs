//! The uniform response envelope every backend call resolves to.
//!
//! The backend services are inconsistent about wrapping: the auth and cloud
//! services already return `{success, data, error}` objects, while several of
//! the agent services return bare payloads. The client normalizes both shapes
//! through [`ApiResponse::from_value`] so callers only ever see one envelope.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Uniform `{success, data, error, message}` wrapper.
///
/// Invariants maintained by the constructors:
/// - a body that already carries a `success` field passes through unchanged
/// - a bare body `v` becomes `{success: true, data: v}`
/// - an HTTP-level failure becomes `{success: false, error: "HTTP <status>: <text>"}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }

    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
        }
    }

    /// Envelope for a non-2xx HTTP response. Single attempt, no retry; the
    /// status line is all the caller gets.
    pub fn http_failure(status: u16, status_text: &str) -> Self {
        Self::fail(format!("HTTP {}: {}", status, status_text))
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Normalize a parsed JSON body into the envelope.
    ///
    /// Pass-through when the body is an object containing a `success` key,
    /// auto-wrap otherwise.
    pub fn from_value(body: serde_json::Value) -> Result<Self, serde_json::Error> {
        let already_wrapped = body
            .as_object()
            .map(|obj| obj.contains_key("success"))
            .unwrap_or(false);

        if already_wrapped {
            serde_json::from_value(body)
        } else {
            Ok(Self::ok(serde_json::from_value(body)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wrapped_body_passes_through() {
        let body = json!({
            "success": false,
            "error": "provider not connected",
            "message": "connect a cloud account first"
        });
        let env: ApiResponse<serde_json::Value> = ApiResponse::from_value(body).unwrap();
        assert!(!env.success);
        assert_eq!(env.data, None);
        assert_eq!(env.error.as_deref(), Some("provider not connected"));
        assert_eq!(env.message.as_deref(), Some("connect a cloud account first"));
    }

    #[test]
    fn wrapped_success_keeps_data() {
        let body = json!({"success": true, "data": {"total": 3}});
        let env: ApiResponse<serde_json::Value> = ApiResponse::from_value(body).unwrap();
        assert!(env.success);
        assert_eq!(env.data, Some(json!({"total": 3})));
    }

    #[test]
    fn bare_body_is_auto_wrapped() {
        let body = json!({"items": ["a", "b"], "page": 1});
        let env: ApiResponse<serde_json::Value> = ApiResponse::from_value(body.clone()).unwrap();
        assert!(env.success);
        assert_eq!(env.data, Some(body));
        assert_eq!(env.error, None);
    }

    #[test]
    fn bare_array_is_auto_wrapped() {
        let body = json!([1, 2, 3]);
        let env: ApiResponse<Vec<i32>> = ApiResponse::from_value(body).unwrap();
        assert_eq!(env.data, Some(vec![1, 2, 3]));
    }

    #[test]
    fn http_failure_carries_status_line() {
        let env: ApiResponse<()> = ApiResponse::http_failure(503, "Service Unavailable");
        assert!(!env.success);
        assert_eq!(env.error.as_deref(), Some("HTTP 503: Service Unavailable"));
    }
}
