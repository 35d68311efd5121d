//! Plugin marketplace endpoints.

use shared::dto::plugins::PluginListing;

use crate::api::client::ApiClient;
use crate::api::error::ApiError;

impl ApiClient {
    pub async fn plugins(&self) -> Result<Vec<PluginListing>, ApiError> {
        self.get("/plugins").await
    }
}
