//! Cost agent endpoints.

use shared::dto::cost::CostAnalysis;

use crate::api::client::ApiClient;
use crate::api::error::ApiError;

impl ApiClient {
    pub async fn cost_analysis(&self, provider: &str) -> Result<CostAnalysis, ApiError> {
        self.get(&format!("/costs/{}/analysis", provider)).await
    }
}
