//! The to-do item entity and its validated value types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identifier assigned to a [`Todo`] by the storage backend.
///
/// Identifiers are positive, unique among live items within one backend
/// instance, and never reused after deletion.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
    /// Wrap a raw identifier, e.g. one taken from a request path.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Raw integer value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Title text validated to be non-empty once trimmed.
///
/// The stored value keeps its surrounding whitespace; only the emptiness
/// check trims. Constructing a [`TodoTitle`] is the storage boundary's
/// validation: stores never see an empty title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoTitle(String);

/// Validation error emitted by [`TodoTitle::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TitleValidationError {
    /// The supplied title was empty or whitespace-only.
    #[error("title must not be empty")]
    Empty,
}

impl TodoTitle {
    /// Validate and wrap a title.
    pub fn new(value: impl Into<String>) -> Result<Self, TitleValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(TitleValidationError::Empty);
        }
        Ok(Self(value))
    }

    /// Borrow the title text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the title text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for TodoTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single to-do list item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Todo {
    /// Backend-assigned identifier.
    pub id: TodoId,
    /// Item title; non-empty after trimming.
    pub title: String,
    /// Completion flag; `false` at creation.
    pub completed: bool,
    /// Creation timestamp (UTC); immutable.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful mutation; never before `created_at`.
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Merge the supplied fields into the item and refresh `updated_at`.
    ///
    /// Only supplied fields change; an all-`None` patch is legal and still
    /// counts as a mutation.
    pub fn apply_patch(&mut self, patch: TodoPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title.into_string();
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        self.updated_at = now;
    }
}

/// Fields required to create a new item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    /// Validated title for the new item.
    pub title: TodoTitle,
}

/// Sparse set of mutable fields for a partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    /// Replacement title, when supplied.
    pub title: Option<TodoTitle>,
    /// Replacement completion flag, when supplied.
    pub completed: Option<bool>,
}
