use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered feature set in the feature store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeatureSet {
    pub name: String,
    pub version: u32,
    pub owner: String,
    pub feature_count: u32,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineageNode {
    pub id: String,
    pub label: String,
    pub kind: LineageKind,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LineageKind {
    Source,
    Transform,
    FeatureSet,
    Model,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineageEdge {
    pub from: String,
    pub to: String,
}

/// Upstream/downstream graph for one feature set (`GET /ml/lineage/{name}`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeatureLineage {
    pub feature_set: String,
    pub nodes: Vec<LineageNode>,
    pub edges: Vec<LineageEdge>,
}

/// Drift evaluation for one deployed model (`GET /ml/drift`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DriftReport {
    pub model: String,
    pub metric: String,
    pub baseline: f64,
    pub current: f64,
    pub drifted: bool,
    pub evaluated_at: DateTime<Utc>,
}
