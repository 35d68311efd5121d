use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Spend analysis for one provider (`GET /costs/{provider}/analysis`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CostAnalysis {
    pub provider: String,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub total_usd: f64,
    pub by_service: Vec<ServiceCost>,
    pub recommendations: Vec<CostRecommendation>,
}

/// Spend attributed to one service within the analysis window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceCost {
    pub service: String,
    pub amount_usd: f64,
    /// Percent change against the previous window, signed.
    pub change_pct: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CostRecommendation {
    pub id: String,
    pub title: String,
    pub description: String,
    pub estimated_savings_usd_monthly: f64,
    pub effort: RecommendationEffort,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationEffort {
    Low,
    Medium,
    High,
}

impl RecommendationEffort {
    pub fn label(&self) -> &'static str {
        match self {
            RecommendationEffort::Low => "Low",
            RecommendationEffort::Medium => "Medium",
            RecommendationEffort::High => "High",
        }
    }
}
