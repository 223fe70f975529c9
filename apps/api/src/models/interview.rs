use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Interview status values stored in the `status` column.
/// `active → paused → active` by explicit user action; `active → completed`
/// is automatic and one-way once the cursor reaches the question count.
pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_PAUSED: &str = "paused";
pub const STATUS_COMPLETED: &str = "completed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Technical,
    Behavioral,
    Situational,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A single generated question. The question list is built once at session
/// creation and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: Uuid,
    pub question: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub difficulty: Difficulty,
    pub topic: String,
    pub order: u32,
}

/// Synthesized feedback embedded in a response. Constructed once at
/// submission time; immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub score: u8,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub relevance: u8,
    pub clarity: u8,
    pub completeness: u8,
    pub comments: String,
}

/// One recorded answer. The responses list is append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub question_id: Uuid,
    pub answer: String,
    /// Seconds the candidate took to answer, as reported by the client.
    pub response_time: Option<i64>,
    pub feedback: Feedback,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewSettings {
    /// Minutes per question; 0 = no limit.
    #[serde(default)]
    pub time_limit: u32,
    #[serde(default = "default_total_questions")]
    pub total_questions: u32,
    #[serde(default = "default_true")]
    pub include_technical: bool,
    #[serde(default = "default_true")]
    pub include_behavioral: bool,
}

fn default_total_questions() -> u32 {
    10
}

fn default_true() -> bool {
    true
}

impl Default for InterviewSettings {
    fn default() -> Self {
        Self {
            time_limit: 0,
            total_questions: 10,
            include_technical: true,
            include_behavioral: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InterviewRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub job_role: String,
    pub job_description: String,
    pub status: String,
    pub questions: Json<Vec<Question>>,
    pub responses: Json<Vec<Response>>,
    pub current_question_index: i32,
    /// Derived from responses on every persist — never trusted as stored.
    pub total_score: i32,
    /// Derived from responses on every persist — never trusted as stored.
    pub average_score: f64,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    /// Total duration in minutes, stamped at completion.
    pub duration: Option<i32>,
    pub settings: Json<InterviewSettings>,
    pub created_at: DateTime<Utc>,
}

/// Summary shape returned by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InterviewSummaryRow {
    pub id: Uuid,
    pub job_role: String,
    pub status: String,
    pub average_score: f64,
    pub duration: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
}
