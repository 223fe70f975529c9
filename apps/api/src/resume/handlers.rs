//! Axum route handlers for the Resume API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use sqlx::types::Json as Jsonb;
use tracing::warn;
use uuid::Uuid;

use crate::assistant::{fallback_content, GeneratedContent};
use crate::errors::AppError;
use crate::models::resume::{
    CertificationEntry, EducationEntry, ExperienceEntry, LanguageEntry, PersonalInfo,
    ProjectEntry, ResumeRow,
};
use crate::resume::store;
use crate::state::AppState;

const TEMPLATES: &[&str] = &["professional", "creative", "minimalist"];
const DEFAULT_TEMPLATE: &str = "professional";

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct ResumePayload {
    pub user_id: Uuid,
    pub title: String,
    pub template: Option<String>,
    #[serde(default)]
    pub personal_info: PersonalInfo,
    pub summary: Option<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub certifications: Vec<CertificationEntry>,
    #[serde(default)]
    pub languages: Vec<LanguageEntry>,
}

fn validate_payload(payload: &ResumePayload) -> Result<String, AppError> {
    if payload.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    let template = payload
        .template
        .clone()
        .unwrap_or_else(|| DEFAULT_TEMPLATE.to_string());
    if !TEMPLATES.contains(&template.as_str()) {
        return Err(AppError::Validation(format!(
            "template must be one of: {}",
            TEMPLATES.join(", ")
        )));
    }
    Ok(template)
}

/// GET /api/v1/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<ResumeRow>>, AppError> {
    let rows = store::list_resumes(&state.db, params.user_id).await?;
    Ok(Json(rows))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ResumeRow>, AppError> {
    let row = store::find_resume(&state.db, id, params.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;
    Ok(Json(row))
}

/// POST /api/v1/resumes
pub async fn handle_create_resume(
    State(state): State<AppState>,
    Json(payload): Json<ResumePayload>,
) -> Result<(StatusCode, Json<ResumeRow>), AppError> {
    let template = validate_payload(&payload)?;

    let now = Utc::now();
    let row = ResumeRow {
        id: Uuid::new_v4(),
        user_id: payload.user_id,
        title: payload.title,
        template,
        personal_info: Jsonb(payload.personal_info),
        summary: payload.summary,
        experience: Jsonb(payload.experience),
        education: Jsonb(payload.education),
        skills: payload.skills,
        projects: Jsonb(payload.projects),
        certifications: Jsonb(payload.certifications),
        languages: Jsonb(payload.languages),
        created_at: now,
        updated_at: now,
    };

    store::insert_resume(&state.db, &row).await?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/v1/resumes/:id
///
/// Full replacement of the resume's content; `updated_at` is restamped.
pub async fn handle_update_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ResumePayload>,
) -> Result<Json<ResumeRow>, AppError> {
    let template = validate_payload(&payload)?;

    let existing = store::find_resume(&state.db, id, payload.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;

    let row = ResumeRow {
        id: existing.id,
        user_id: existing.user_id,
        title: payload.title,
        template,
        personal_info: Jsonb(payload.personal_info),
        summary: payload.summary,
        experience: Jsonb(payload.experience),
        education: Jsonb(payload.education),
        skills: payload.skills,
        projects: Jsonb(payload.projects),
        certifications: Jsonb(payload.certifications),
        languages: Jsonb(payload.languages),
        created_at: existing.created_at,
        updated_at: Utc::now(),
    };

    store::update_resume(&state.db, &row).await?;

    Ok(Json(row))
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    let deleted = store::delete_resume(&state.db, id, params.user_id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!("Resume {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
pub struct GenerateResumeRequest {
    pub prompt: String,
}

/// POST /api/v1/resumes/generate
///
/// Asks the assistant for summary/skills/experience content. The assistant
/// being unconfigured or failing is never an error — the canned fallback is
/// served instead.
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    Json(req): Json<GenerateResumeRequest>,
) -> Result<Json<GeneratedContent>, AppError> {
    if req.prompt.trim().is_empty() {
        return Err(AppError::Validation("prompt cannot be empty".to_string()));
    }

    let content = match &state.assistant {
        Some(assistant) => match assistant.generate(&req.prompt).await {
            Ok(content) => content,
            Err(e) => {
                warn!("Resume assistant unavailable, serving canned content: {e}");
                fallback_content()
            }
        },
        None => fallback_content(),
    };

    Ok(Json(content))
}
