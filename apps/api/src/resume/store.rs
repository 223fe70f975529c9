//! Persistence for resumes. Keyed by id + owner throughout.

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeRow;

/// Owner's resumes, most recently updated first.
pub async fn list_resumes(db: &PgPool, user_id: Uuid) -> Result<Vec<ResumeRow>, AppError> {
    let rows: Vec<ResumeRow> =
        sqlx::query_as("SELECT * FROM resumes WHERE user_id = $1 ORDER BY updated_at DESC")
            .bind(user_id)
            .fetch_all(db)
            .await?;

    Ok(rows)
}

pub async fn find_resume(
    db: &PgPool,
    id: Uuid,
    user_id: Uuid,
) -> Result<Option<ResumeRow>, AppError> {
    let row: Option<ResumeRow> =
        sqlx::query_as("SELECT * FROM resumes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .fetch_optional(db)
            .await?;

    Ok(row)
}

pub async fn insert_resume(db: &PgPool, row: &ResumeRow) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO resumes
            (id, user_id, title, template, personal_info, summary, experience,
             education, skills, projects, certifications, languages,
             created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
        "#,
    )
    .bind(row.id)
    .bind(row.user_id)
    .bind(&row.title)
    .bind(&row.template)
    .bind(&row.personal_info)
    .bind(&row.summary)
    .bind(&row.experience)
    .bind(&row.education)
    .bind(&row.skills)
    .bind(&row.projects)
    .bind(&row.certifications)
    .bind(&row.languages)
    .bind(row.created_at)
    .bind(row.updated_at)
    .execute(db)
    .await?;

    Ok(())
}

/// Full-row update; `updated_at` must already be stamped by the caller.
pub async fn update_resume(db: &PgPool, row: &ResumeRow) -> Result<(), AppError> {
    sqlx::query(
        r#"
        UPDATE resumes
        SET title = $1, template = $2, personal_info = $3, summary = $4,
            experience = $5, education = $6, skills = $7, projects = $8,
            certifications = $9, languages = $10, updated_at = $11
        WHERE id = $12 AND user_id = $13
        "#,
    )
    .bind(&row.title)
    .bind(&row.template)
    .bind(&row.personal_info)
    .bind(&row.summary)
    .bind(&row.experience)
    .bind(&row.education)
    .bind(&row.skills)
    .bind(&row.projects)
    .bind(&row.certifications)
    .bind(&row.languages)
    .bind(row.updated_at)
    .bind(row.id)
    .bind(row.user_id)
    .execute(db)
    .await?;

    Ok(())
}

/// Returns true if a row was deleted.
pub async fn delete_resume(db: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM resumes WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await?;

    Ok(result.rows_affected() > 0)
}
