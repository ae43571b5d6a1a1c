//! Shared application state for the activities API.

use std::sync::Arc;

use mergington_roster::RosterStore;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor. The
/// store is itself behind an [`Arc`] so the binary and tests can keep a
/// handle to it alongside the router.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The activity roster store.
    pub roster: Arc<RosterStore>,
}

impl AppState {
    /// Create application state around an existing store.
    pub const fn new(roster: Arc<RosterStore>) -> Self {
        Self { roster }
    }
}
