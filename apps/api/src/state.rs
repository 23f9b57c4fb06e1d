use std::sync::Arc;

use crate::config::Config;
use crate::generation::generator::CandidateGenerator;
use crate::storage::StorageManager;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub generator: Arc<CandidateGenerator>,
    /// Candidate batches keyed by campaign id. Best-effort; may have no medium.
    pub store: Arc<StorageManager>,
}
