use std::sync::Arc;

use crate::config::Config;
use crate::ranking::ResumeRanker;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable ranker. Default: RuleBasedRanker over the loaded reference tables.
    pub ranker: Arc<dyn ResumeRanker>,
}
