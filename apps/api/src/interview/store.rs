//! Persistence for interview sessions. Every query is keyed by id + owner so
//! records belonging to other users are simply invisible.

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::interview::{InterviewRow, InterviewSummaryRow};

pub async fn insert_interview(db: &PgPool, row: &InterviewRow) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO interviews
            (id, user_id, job_role, job_description, status, questions, responses,
             current_question_index, total_score, average_score, start_time,
             end_time, duration, settings, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
        "#,
    )
    .bind(row.id)
    .bind(row.user_id)
    .bind(&row.job_role)
    .bind(&row.job_description)
    .bind(&row.status)
    .bind(&row.questions)
    .bind(&row.responses)
    .bind(row.current_question_index)
    .bind(row.total_score)
    .bind(row.average_score)
    .bind(row.start_time)
    .bind(row.end_time)
    .bind(row.duration)
    .bind(&row.settings)
    .bind(row.created_at)
    .execute(db)
    .await?;

    Ok(())
}

pub async fn find_interview(
    db: &PgPool,
    id: Uuid,
    user_id: Uuid,
) -> Result<Option<InterviewRow>, AppError> {
    let row: Option<InterviewRow> =
        sqlx::query_as("SELECT * FROM interviews WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(db)
            .await?;

    Ok(row)
}

/// Owner's sessions, newest first, in the summary shape the dashboard needs.
pub async fn list_interviews(
    db: &PgPool,
    user_id: Uuid,
) -> Result<Vec<InterviewSummaryRow>, AppError> {
    let rows: Vec<InterviewSummaryRow> = sqlx::query_as(
        r#"
        SELECT id, job_role, status, average_score, duration, created_at, end_time
        FROM interviews
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

/// Persists the mutable portion of a session after progression ran.
pub async fn update_interview(db: &PgPool, row: &InterviewRow) -> Result<(), AppError> {
    sqlx::query(
        r#"
        UPDATE interviews
        SET status = $1, responses = $2, current_question_index = $3,
            total_score = $4, average_score = $5, end_time = $6, duration = $7
        WHERE id = $8 AND user_id = $9
        "#,
    )
    .bind(&row.status)
    .bind(&row.responses)
    .bind(row.current_question_index)
    .bind(row.total_score)
    .bind(row.average_score)
    .bind(row.end_time)
    .bind(row.duration)
    .bind(row.id)
    .bind(row.user_id)
    .execute(db)
    .await?;

    Ok(())
}

/// Returns true if a row was deleted.
pub async fn delete_interview(db: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM interviews WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await?;

    Ok(result.rows_affected() > 0)
}
