//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::DirectoryService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Query service for all read operations.
    pub directory: Arc<DirectoryService>,
}
