use serde::{Deserialize, Serialize};

use crate::dto::cloud::CloudResource;

/// Headline numbers for the landing dashboard (`GET /dashboard/summary`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardSummary {
    pub connected_providers: u32,
    pub total_resources: u64,
    pub monthly_spend_usd: f64,
    pub open_findings: u32,
    pub active_agents: u32,
}

/// Filters for `GET /dashboard/resources`. `None` means "any".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    pub page: u32,
    pub page_size: u32,
}

impl ResourceQuery {
    pub fn first_page(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size,
            ..Self::default()
        }
    }
}

/// One page of resources plus the paging envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResourcePage {
    pub items: Vec<CloudResource>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl ResourcePage {
    pub fn page_count(&self) -> u32 {
        if self.page_size == 0 {
            return 0;
        }
        ((self.total + self.page_size as u64 - 1) / self.page_size as u64) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        let page = ResourcePage {
            items: vec![],
            total: 101,
            page: 1,
            page_size: 25,
        };
        assert_eq!(page.page_count(), 5);
    }

    #[test]
    fn page_count_handles_zero_page_size() {
        let page = ResourcePage {
            items: vec![],
            total: 10,
            page: 1,
            page_size: 0,
        };
        assert_eq!(page.page_count(), 0);
    }
}
