//! Port abstraction for to-do storage adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Todo, TodoDraft, TodoId, TodoPatch};

/// Storage errors raised by to-do store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TodoStoreError {
    /// Store connection could not be established.
    #[error("todo store connection failed: {message}")]
    Connection {
        /// Adapter-level description of the connection failure.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("todo store query failed: {message}")]
    Query {
        /// Adapter-level description of the failed statement.
        message: String,
    },
}

impl TodoStoreError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

impl From<TodoStoreError> for crate::domain::Error {
    fn from(error: TodoStoreError) -> Self {
        // Adapters already logged specifics; record the propagation once.
        tracing::error!(error = %error, "todo store operation failed");
        Self::internal(error.to_string())
    }
}

/// CRUD contract implemented by every storage backend.
///
/// Both adapters share these semantics; only durability, timestamp source,
/// and listing order differ, and those are documented on the
/// implementations. Absent records are `Ok(None)` / `Ok(false)`, never an
/// error: the inbound adapter decides how absence is reported.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Return all live items.
    async fn list(&self) -> Result<Vec<Todo>, TodoStoreError>;

    /// Fetch one item by identifier.
    async fn find(&self, id: TodoId) -> Result<Option<Todo>, TodoStoreError>;

    /// Persist a new item: fresh id, `completed = false`, both timestamps
    /// stamped to now.
    async fn create(&self, draft: TodoDraft) -> Result<Todo, TodoStoreError>;

    /// Merge the supplied fields into an existing item and return it.
    ///
    /// `updated_at` is refreshed even when the patch supplies no fields.
    async fn update(&self, id: TodoId, patch: TodoPatch)
    -> Result<Option<Todo>, TodoStoreError>;

    /// Remove an item permanently. Returns `false` when the id is absent.
    async fn delete(&self, id: TodoId) -> Result<bool, TodoStoreError>;
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[test]
    fn constructors_accept_str_for_message_fields() {
        let err = TodoStoreError::connection("connection refused");
        assert_eq!(
            err.to_string(),
            "todo store connection failed: connection refused"
        );

        let err = TodoStoreError::query("bad statement");
        assert_eq!(err.to_string(), "todo store query failed: bad statement");
    }
}
