//! Auth service endpoints.

use shared::dto::auth::{
    AuthPayload, BackendUser, LoginRequest, OAuthAuthorizeResponse, OAuthCallbackRequest,
    RegisterRequest,
};

use crate::api::client::ApiClient;
use crate::api::error::ApiError;

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthPayload, ApiError> {
        log::info!("logging in {}", request.username_or_email);
        self.post("/auth/login", request).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthPayload, ApiError> {
        log::info!("registering {}", request.email);
        self.post("/auth/register", request).await
    }

    /// Fetch the provider authorization URL and CSRF state for the redirect hop.
    pub async fn oauth_authorize(
        &self,
        provider: &str,
    ) -> Result<OAuthAuthorizeResponse, ApiError> {
        self.get(&format!("/auth/oauth/{}", provider)).await
    }

    /// Exchange the provider redirect code for a session.
    pub async fn oauth_callback(
        &self,
        request: &OAuthCallbackRequest,
    ) -> Result<AuthPayload, ApiError> {
        self.post("/auth/oauth/callback", request).await
    }

    pub async fn profile(&self) -> Result<BackendUser, ApiError> {
        self.get("/auth/profile").await
    }
}
