//! FinOps service endpoints.

use shared::dto::finops::{BudgetForecast, CostAnomaly};

use crate::api::client::ApiClient;
use crate::api::error::ApiError;

impl ApiClient {
    pub async fn cost_anomalies(&self) -> Result<Vec<CostAnomaly>, ApiError> {
        self.get("/finops/anomalies").await
    }

    pub async fn budget_forecast(&self) -> Result<Vec<BudgetForecast>, ApiError> {
        self.get("/finops/forecast").await
    }
}
