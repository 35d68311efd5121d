//! SRE service endpoints.

use shared::dto::sre::{IncidentSummary, Runbook, SloStatus};

use crate::api::client::ApiClient;
use crate::api::error::ApiError;

impl ApiClient {
    pub async fn slos(&self) -> Result<Vec<SloStatus>, ApiError> {
        self.get("/sre/slos").await
    }

    pub async fn incidents(&self) -> Result<Vec<IncidentSummary>, ApiError> {
        self.get("/sre/incidents").await
    }

    pub async fn runbooks(&self) -> Result<Vec<Runbook>, ApiError> {
        self.get("/sre/runbooks").await
    }
}
