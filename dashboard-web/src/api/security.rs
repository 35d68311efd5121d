//! Security agent endpoints.

use shared::dto::security::{SbomReport, SbomRequest, SecurityScan};

use crate::api::client::ApiClient;
use crate::api::error::ApiError;

impl ApiClient {
    pub async fn security_scan(&self, provider: &str) -> Result<SecurityScan, ApiError> {
        log::info!("requesting security scan for {}", provider);
        self.get(&format!("/security/{}/scan", provider)).await
    }

    pub async fn generate_sbom(&self, request: &SbomRequest) -> Result<SbomReport, ApiError> {
        self.post("/security/sbom", request).await
    }
}
