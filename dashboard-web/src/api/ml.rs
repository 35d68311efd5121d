//! MLOps service endpoints.

use shared::dto::ml::{DriftReport, FeatureLineage, FeatureSet};

use crate::api::client::ApiClient;
use crate::api::error::ApiError;

impl ApiClient {
    pub async fn feature_sets(&self) -> Result<Vec<FeatureSet>, ApiError> {
        self.get("/ml/feature-sets").await
    }

    pub async fn feature_lineage(&self, name: &str) -> Result<FeatureLineage, ApiError> {
        self.get(&format!("/ml/lineage/{}", urlencoding::encode(name)))
            .await
    }

    pub async fn drift_reports(&self) -> Result<Vec<DriftReport>, ApiError> {
        self.get("/ml/drift").await
    }
}
