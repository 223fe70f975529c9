use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A job posting — immutable reference data, either from the baked-in demo
/// catalog or mapped from the live search provider. Not user-owned and never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    /// Display string, e.g. "$120k - $180k".
    pub salary: String,
    pub description: String,
    pub skills: Vec<String>,
    pub posted_date: DateTime<Utc>,
    pub apply_url: String,
    pub match_score: u32,
    pub match_reasons: Vec<String>,
}

/// Expanded detail shape for the single-job endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDetail {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub posted_date: DateTime<Utc>,
    pub apply_url: String,
}
