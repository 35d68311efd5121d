//! Dashboard summary and resource inventory endpoints.

use shared::dto::dashboard::{DashboardSummary, ResourcePage, ResourceQuery};

use crate::api::client::ApiClient;
use crate::api::error::ApiError;

impl ApiClient {
    pub async fn dashboard_summary(&self) -> Result<DashboardSummary, ApiError> {
        self.get("/dashboard/summary").await
    }

    pub async fn dashboard_resources(
        &self,
        query: &ResourceQuery,
    ) -> Result<ResourcePage, ApiError> {
        let endpoint = format!("/dashboard/resources?{}", resource_query_string(query));
        self.get(&endpoint).await
    }
}

/// Serialize the filter set to the `provider&region&type&page&page_size`
/// query order the inventory endpoint documents.
pub fn resource_query_string(query: &ResourceQuery) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(provider) = &query.provider {
        parts.push(format!("provider={}", urlencoding::encode(provider)));
    }
    if let Some(region) = &query.region {
        parts.push(format!("region={}", urlencoding::encode(region)));
    }
    if let Some(resource_type) = &query.resource_type {
        parts.push(format!("type={}", urlencoding::encode(resource_type)));
    }
    parts.push(format!("page={}", query.page));
    parts.push(format!("page_size={}", query.page_size));
    parts.join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_query_keeps_documented_order() {
        let query = ResourceQuery {
            provider: Some("aws".into()),
            region: Some("eu-west-1".into()),
            resource_type: Some("ec2 instance".into()),
            page: 2,
            page_size: 25,
        };
        assert_eq!(
            resource_query_string(&query),
            "provider=aws&region=eu-west-1&type=ec2%20instance&page=2&page_size=25"
        );
    }

    #[test]
    fn absent_filters_are_omitted() {
        let query = ResourceQuery::first_page(50);
        assert_eq!(resource_query_string(&query), "page=1&page_size=50");
    }
}
