//! Axum route handlers for the Jobs API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::catalog::{demo_job_detail, demo_jobs, filter_jobs};
use crate::matching::profile::{extract_skills, infer_experience_level, infer_preferred_roles};
use crate::matching::scorer::rank_jobs;
use crate::models::job::{JobDetail, JobPosting};
use crate::resume::store as resume_store;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JobSearchQuery {
    pub user_id: Uuid,
    pub skills: Option<String>,
    pub location: Option<String>,
    pub keywords: Option<String>,
    pub page: Option<u32>,
    /// When set, the response is personalized recommendations ranked against
    /// this resume instead of a plain catalog search.
    pub resume_id: Option<Uuid>,
}

/// GET /api/v1/jobs/search
///
/// Without `resume_id`: searches the live provider when configured (falling
/// back to the demo catalog on any upstream failure) and applies the
/// keyword/location/skill filters identically to both sources.
///
/// With `resume_id`: recomputes the candidate profile from the resume and
/// ranks the catalog by match score.
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobSearchQuery>,
) -> Result<Json<Vec<JobPosting>>, AppError> {
    if let Some(resume_id) = params.resume_id {
        let resume = resume_store::find_resume(&state.db, resume_id, params.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;

        let skills = extract_skills(&resume);
        let level = infer_experience_level(&resume);
        let preferred = infer_preferred_roles(&resume, &skills);
        let location = resume.personal_info.address.clone().unwrap_or_default();

        let ranked = rank_jobs(demo_jobs(), &skills, level, &preferred, &location);
        return Ok(Json(ranked));
    }

    let query = params
        .keywords
        .clone()
        .or_else(|| {
            params
                .skills
                .as_ref()
                .and_then(|s| s.split(',').next())
                .map(|s| s.trim().to_string())
        })
        .filter(|q| !q.is_empty())
        .unwrap_or_else(|| "developer".to_string());
    let page = params.page.unwrap_or(1);

    let candidates = match &state.jobs {
        Some(provider) => {
            match provider
                .search(&query, params.location.as_deref().unwrap_or(""), page)
                .await
            {
                Ok(jobs) => jobs,
                Err(e) => {
                    warn!("Job provider unavailable, serving demo catalog: {e}");
                    demo_jobs().to_vec()
                }
            }
        }
        None => demo_jobs().to_vec(),
    };

    let filtered = filter_jobs(
        &candidates,
        params.skills.as_deref(),
        params.location.as_deref(),
        params.keywords.as_deref(),
    );

    Ok(Json(filtered))
}

/// GET /api/v1/jobs/:id
pub async fn handle_job_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobDetail>, AppError> {
    let detail = match &state.jobs {
        Some(provider) => match provider.job_details(&id).await {
            Ok(detail) => detail,
            Err(e) => {
                warn!("Job provider unavailable, serving demo detail: {e}");
                demo_job_detail(&id)
            }
        },
        None => demo_job_detail(&id),
    };

    Ok(Json(detail))
}
