//! Cloud integrations service endpoints.

use shared::dto::cloud::{
    CloudProvider, CloudResource, ConnectProviderRequest, TestConnectionResult,
};

use crate::api::client::ApiClient;
use crate::api::error::ApiError;

impl ApiClient {
    pub async fn cloud_providers(&self) -> Result<Vec<CloudProvider>, ApiError> {
        self.get("/cloud/providers").await
    }

    pub async fn connect_provider(
        &self,
        request: &ConnectProviderRequest,
    ) -> Result<CloudProvider, ApiError> {
        log::info!(
            "connecting {} account {}",
            request.provider,
            request.account_name
        );
        self.post("/cloud/providers/connect", request).await
    }

    /// Dry-run credential check; nothing is persisted server-side.
    pub async fn test_provider(
        &self,
        request: &ConnectProviderRequest,
    ) -> Result<TestConnectionResult, ApiError> {
        self.post("/cloud/providers/test", request).await
    }

    pub async fn cloud_resources(&self, provider: &str) -> Result<Vec<CloudResource>, ApiError> {
        self.get(&format!("/cloud/resources/{}", provider)).await
    }
}
