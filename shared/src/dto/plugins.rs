use serde::{Deserialize, Serialize};

/// Marketplace entry (`GET /plugins`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PluginListing {
    pub id: String,
    pub name: String,
    pub category: String,
    pub publisher: String,
    pub description: String,
    pub rating: f32,
    pub installs: u64,
    pub verified: bool,
}
