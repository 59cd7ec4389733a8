//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend on
//! the storage port only and stay testable without I/O. The concrete
//! backend is chosen once at startup and injected here; handlers never
//! branch on the storage mode.

use std::sync::Arc;

use crate::domain::ports::TodoStore;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Active storage backend.
    pub todos: Arc<dyn TodoStore>,
}

impl HttpState {
    /// Construct state around the selected storage backend.
    #[must_use]
    pub fn new(todos: Arc<dyn TodoStore>) -> Self {
        Self { todos }
    }
}
