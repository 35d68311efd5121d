//! Knowledge base endpoints.

use shared::dto::knowledge::Article;

use crate::api::client::ApiClient;
use crate::api::error::ApiError;

impl ApiClient {
    pub async fn articles(&self, search: Option<&str>) -> Result<Vec<Article>, ApiError> {
        let endpoint = match search {
            Some(q) if !q.is_empty() => {
                format!("/knowledge/articles?q={}", urlencoding::encode(q))
            }
            _ => "/knowledge/articles".to_string(),
        };
        self.get(&endpoint).await
    }
}
