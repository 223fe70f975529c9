use std::sync::Arc;

use sqlx::PgPool;

use crate::assistant::ResumeAssistant;
use crate::config::Config;
use crate::interview::feedback::FeedbackSynthesizer;
use crate::jobs::provider::JobProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Live job search provider; `None` means demo catalog only.
    pub jobs: Option<Arc<dyn JobProvider>>,
    /// Resume content assistant; `None` means the canned fallback is served.
    pub assistant: Option<Arc<dyn ResumeAssistant>>,
    /// Pluggable feedback synthesizer. Default: TemplateFeedbackSynthesizer.
    pub synthesizer: Arc<dyn FeedbackSynthesizer>,
}
