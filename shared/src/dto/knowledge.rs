use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Knowledge-base article (`GET /knowledge/articles`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub category: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub updated_at: DateTime<Utc>,
}
