pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::interview::handlers as interview_handlers;
use crate::jobs::handlers as job_handlers;
use crate::resume::handlers as resume_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route(
            "/api/v1/resumes",
            get(resume_handlers::handle_list_resumes).post(resume_handlers::handle_create_resume),
        )
        .route(
            "/api/v1/resumes/generate",
            post(resume_handlers::handle_generate_resume),
        )
        .route(
            "/api/v1/resumes/:id",
            get(resume_handlers::handle_get_resume)
                .put(resume_handlers::handle_update_resume)
                .delete(resume_handlers::handle_delete_resume),
        )
        // Interview API
        .route(
            "/api/v1/interviews",
            get(interview_handlers::handle_list_interviews)
                .post(interview_handlers::handle_create_interview),
        )
        .route(
            "/api/v1/interviews/:id",
            get(interview_handlers::handle_get_interview)
                .delete(interview_handlers::handle_delete_interview),
        )
        .route(
            "/api/v1/interviews/:id/answer",
            post(interview_handlers::handle_submit_answer),
        )
        .route(
            "/api/v1/interviews/:id/pause",
            post(interview_handlers::handle_pause_interview),
        )
        .route(
            "/api/v1/interviews/:id/resume",
            post(interview_handlers::handle_resume_interview),
        )
        // Jobs API
        .route("/api/v1/jobs/search", get(job_handlers::handle_search_jobs))
        .route("/api/v1/jobs/:id", get(job_handlers::handle_job_detail))
        .with_state(state)
}
