use std::sync::Arc;

use crate::analytics::Analytics;
use crate::catalog::Catalog;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Immutable after startup.
    pub catalog: Arc<Catalog>,
    /// Pluggable analytics sink. Default: TracingAnalytics. Disable via ANALYTICS_ENABLED.
    pub analytics: Arc<dyn Analytics>,
}
