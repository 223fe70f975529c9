//! Axum route handlers for the Interview API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::types::Json as Jsonb;
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::generator::generate_questions;
use crate::interview::progression::{pause, resume, submit_answer};
use crate::interview::store;
use crate::models::interview::{
    Feedback, InterviewRow, InterviewSettings, InterviewSummaryRow, STATUS_ACTIVE,
};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct CreateInterviewRequest {
    pub user_id: Uuid,
    pub job_role: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub settings: Option<InterviewSettings>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitAnswerRequest {
    pub user_id: Uuid,
    pub question_id: Uuid,
    pub answer: String,
    pub response_time: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct SubmitAnswerResponse {
    pub feedback: Feedback,
    pub completed: bool,
}

/// POST /api/v1/interviews
///
/// Creates a session with its question list generated up front; the list is
/// immutable for the session's lifetime.
pub async fn handle_create_interview(
    State(state): State<AppState>,
    Json(req): Json<CreateInterviewRequest>,
) -> Result<(StatusCode, Json<InterviewRow>), AppError> {
    if req.job_role.trim().is_empty() {
        return Err(AppError::Validation("job_role cannot be empty".to_string()));
    }

    let settings = req.settings.unwrap_or_default();
    let questions = generate_questions(
        &req.job_role,
        settings.total_questions,
        settings.include_technical,
        settings.include_behavioral,
    );

    let now = Utc::now();
    let row = InterviewRow {
        id: Uuid::new_v4(),
        user_id: req.user_id,
        job_role: req.job_role,
        job_description: req.job_description,
        status: STATUS_ACTIVE.to_string(),
        questions: Jsonb(questions),
        responses: Jsonb(Vec::new()),
        current_question_index: 0,
        total_score: 0,
        average_score: 0.0,
        start_time: now,
        end_time: None,
        duration: None,
        settings: Jsonb(settings),
        created_at: now,
    };

    store::insert_interview(&state.db, &row).await?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/interviews
pub async fn handle_list_interviews(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<InterviewSummaryRow>>, AppError> {
    let rows = store::list_interviews(&state.db, params.user_id).await?;
    Ok(Json(rows))
}

/// GET /api/v1/interviews/:id
pub async fn handle_get_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<InterviewRow>, AppError> {
    let row = store::find_interview(&state.db, id, params.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Interview {id} not found")))?;
    Ok(Json(row))
}

/// POST /api/v1/interviews/:id/answer
///
/// Runs the progression step and persists the updated session. The feedback
/// synthesizer is the pluggable one carried in `AppState`.
pub async fn handle_submit_answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SubmitAnswerRequest>,
) -> Result<Json<SubmitAnswerResponse>, AppError> {
    let mut interview = store::find_interview(&state.db, id, req.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Interview {id} not found")))?;

    let outcome = submit_answer(
        &mut interview,
        req.question_id,
        &req.answer,
        req.response_time,
        state.synthesizer.as_ref(),
        Utc::now(),
    )?;

    store::update_interview(&state.db, &interview).await?;

    Ok(Json(SubmitAnswerResponse {
        feedback: outcome.feedback,
        completed: outcome.completed,
    }))
}

/// POST /api/v1/interviews/:id/pause
pub async fn handle_pause_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UserIdQuery>,
) -> Result<Json<InterviewRow>, AppError> {
    let mut interview = store::find_interview(&state.db, id, req.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Interview {id} not found")))?;

    pause(&mut interview)?;
    store::update_interview(&state.db, &interview).await?;

    Ok(Json(interview))
}

/// POST /api/v1/interviews/:id/resume
pub async fn handle_resume_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UserIdQuery>,
) -> Result<Json<InterviewRow>, AppError> {
    let mut interview = store::find_interview(&state.db, id, req.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Interview {id} not found")))?;

    resume(&mut interview)?;
    store::update_interview(&state.db, &interview).await?;

    Ok(Json(interview))
}

/// DELETE /api/v1/interviews/:id
pub async fn handle_delete_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    let deleted = store::delete_interview(&state.db, id, params.user_id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!("Interview {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}
