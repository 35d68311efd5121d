use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A spend spike flagged by the anomaly detector (`GET /finops/anomalies`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CostAnomaly {
    pub id: String,
    pub provider: String,
    pub service: String,
    pub expected_usd: f64,
    pub actual_usd: f64,
    pub deviation_pct: f64,
    pub detected_at: DateTime<Utc>,
}

/// Month-level budget vs. projected spend (`GET /finops/forecast`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetForecast {
    /// Calendar month, `YYYY-MM`.
    pub month: String,
    pub budget_usd: f64,
    pub forecast_usd: f64,
}

impl BudgetForecast {
    pub fn over_budget(&self) -> bool {
        self.forecast_usd > self.budget_usd
    }
}
