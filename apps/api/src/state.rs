use std::sync::Arc;

use crate::catalog::{PostingCatalog, ProfileStore};
use crate::matching::scorer::MatchScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable scorer. Default: SkillOverlapScorer.
    pub scorer: Arc<dyn MatchScorer>,
    /// Fixtures, or the HireFlow backend when HIREFLOW_API_URL is set.
    pub catalog: Arc<dyn PostingCatalog>,
    pub profiles: Arc<dyn ProfileStore>,
}
