use std::path::PathBuf;
use std::sync::Arc;

use crate::resumes::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable gateway. Default: SqliteResumeStore over the startup pool.
    pub store: Arc<dyn ResumeStore>,
    /// Directory uploaded documents are written to; created at startup.
    pub upload_dir: PathBuf,
}
