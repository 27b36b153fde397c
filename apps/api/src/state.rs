use std::sync::Arc;

use crate::config::Config;
use crate::screening::ScreeningContext;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Skill vocabulary and classifier artifacts — loaded once, never mutated.
    pub screening: Arc<ScreeningContext>,
}
