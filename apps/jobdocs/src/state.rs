use crate::generation::pipeline::DocumentPipeline;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: DocumentPipeline,
}
