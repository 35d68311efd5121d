//! Core HTTP client: base URL + optional bearer token over `gloo-net`.
//!
//! The client is a plain value handed to components through Leptos context,
//! not a module-level singleton. Clones share one token slot, so the session
//! layer setting the token after login is visible to every holder.

use std::sync::{Arc, RwLock};

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::dto::envelope::ApiResponse;

use crate::api::error::ApiError;
use crate::utils::constants::API_BASE;

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    // Last write wins; one active session per tab.
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: Arc::new(RwLock::new(None)),
        }
    }

    pub fn from_env() -> Self {
        Self::new(API_BASE)
    }

    pub fn set_token(&self, token: &str) {
        if let Ok(mut slot) = self.token.write() {
            *slot = Some(token.to_string());
        }
    }

    pub fn clear_token(&self) {
        if let Ok(mut slot) = self.token.write() {
            *slot = None;
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|slot| slot.clone())
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn apply_headers(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("Content-Type", "application/json");
        match self.token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let response = self
            .apply_headers(Request::get(&self.url(endpoint)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::unwrap_response(response).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .apply_headers(Request::post(&self.url(endpoint)))
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::unwrap_response(response).await
    }

    /// Normalize a response into `Result<T, ApiError>`.
    ///
    /// Non-2xx statuses never reach body parsing; 2xx bodies go through the
    /// envelope so backends that wrap and backends that return bare payloads
    /// look the same to callers.
    async fn unwrap_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.ok() {
            return Err(ApiError::Http {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        let envelope =
            ApiResponse::<T>::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        resolve_envelope(envelope)
    }
}

/// Collapse a normalized envelope into the typed result callers consume.
pub fn resolve_envelope<T>(envelope: ApiResponse<T>) -> Result<T, ApiError> {
    if !envelope.success {
        let reason = envelope
            .error
            .or(envelope.message)
            .unwrap_or_else(|| "request failed".to_string());
        return Err(ApiError::Backend(reason));
    }
    envelope
        .data
        .ok_or_else(|| ApiError::Decode("success envelope carried no data".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn token_is_shared_between_clones() {
        let client = ApiClient::new("http://api.test");
        let clone = client.clone();
        client.set_token("t1");
        assert_eq!(clone.token().as_deref(), Some("t1"));
        clone.clear_token();
        assert_eq!(client.token(), None);
    }

    #[test]
    fn set_token_overwrites() {
        let client = ApiClient::new("http://api.test");
        client.set_token("first");
        client.set_token("second");
        assert_eq!(client.token().as_deref(), Some("second"));
    }

    #[test]
    fn url_joins_base_and_endpoint() {
        let client = ApiClient::new("http://api.test");
        assert_eq!(client.url("/auth/login"), "http://api.test/auth/login");
    }

    #[test]
    fn resolve_envelope_success_yields_data() {
        let envelope = ApiResponse::ok(json!({"n": 1}));
        assert_eq!(resolve_envelope(envelope).unwrap(), json!({"n": 1}));
    }

    #[test]
    fn resolve_envelope_failure_prefers_error_over_message() {
        let envelope = ApiResponse::<()> {
            success: false,
            data: None,
            error: Some("scan failed".into()),
            message: Some("try again later".into()),
        };
        assert_eq!(
            resolve_envelope(envelope).unwrap_err(),
            ApiError::Backend("scan failed".into())
        );
    }

    #[test]
    fn resolve_envelope_failure_falls_back_to_message() {
        let envelope = ApiResponse::<()> {
            success: false,
            data: None,
            error: None,
            message: Some("quota exceeded".into()),
        };
        assert_eq!(
            resolve_envelope(envelope).unwrap_err(),
            ApiError::Backend("quota exceeded".into())
        );
    }

    #[test]
    fn resolve_envelope_success_without_data_is_decode_error() {
        let envelope = ApiResponse::<String> {
            success: true,
            data: None,
            error: None,
            message: None,
        };
        assert!(matches!(
            resolve_envelope(envelope),
            Err(ApiError::Decode(_))
        ));
    }
}
