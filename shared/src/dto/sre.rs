use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dto::security::Severity;

/// SLO evaluation for one service (`GET /sre/slos`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SloStatus {
    pub name: String,
    pub service: String,
    pub target_pct: f64,
    pub current_pct: f64,
    pub error_budget_remaining_pct: f64,
    pub healthy: bool,
}

/// Open or recently closed incident (`GET /sre/incidents`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IncidentSummary {
    pub id: String,
    pub title: String,
    pub severity: Severity,
    pub status: IncidentStatus,
    pub opened_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IncidentStatus {
    Open,
    Mitigated,
    Resolved,
}

impl IncidentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            IncidentStatus::Open => "Open",
            IncidentStatus::Mitigated => "Mitigated",
            IncidentStatus::Resolved => "Resolved",
        }
    }
}

/// Operational runbook the SRE agent can walk through (`GET /sre/runbooks`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Runbook {
    pub id: String,
    pub title: String,
    pub service: String,
    pub steps: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_run_at: Option<DateTime<Utc>>,
}
