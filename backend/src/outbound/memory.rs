//! In-process, non-persistent to-do store.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::ports::{TodoStore, TodoStoreError};
use crate::domain::{Todo, TodoDraft, TodoId, TodoPatch};

/// Mutable store contents. A single lock guards both the items and the id
/// counter: every read-modify-write sequence (create, update, the
/// filter-and-drop in delete) must exclude all other operations for its
/// duration, and actix workers run genuinely in parallel.
struct MemoryState {
    todos: Vec<Todo>,
    next_id: i64,
}

/// In-memory [`TodoStore`] with no durability across process restarts.
///
/// Items are listed in insertion order. Identifiers come from a
/// monotonically increasing counter seeded at 1, so an id is never reused
/// after deletion. Timestamps are stamped here with [`Utc::now`].
pub struct MemoryTodoStore {
    state: Mutex<MemoryState>,
}

impl MemoryTodoStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MemoryState {
                todos: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryTodoStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn list(&self) -> Result<Vec<Todo>, TodoStoreError> {
        Ok(self.state.lock().await.todos.clone())
    }

    async fn find(&self, id: TodoId) -> Result<Option<Todo>, TodoStoreError> {
        let state = self.state.lock().await;
        Ok(state.todos.iter().find(|todo| todo.id == id).cloned())
    }

    async fn create(&self, draft: TodoDraft) -> Result<Todo, TodoStoreError> {
        let mut state = self.state.lock().await;
        let now = Utc::now();
        let id = TodoId::new(state.next_id);
        state.next_id += 1;

        let todo = Todo {
            id,
            title: draft.title.into_string(),
            completed: false,
            created_at: now,
            updated_at: now,
        };
        state.todos.push(todo.clone());
        debug!(id = %id, "created todo in memory store");
        Ok(todo)
    }

    async fn update(
        &self,
        id: TodoId,
        patch: TodoPatch,
    ) -> Result<Option<Todo>, TodoStoreError> {
        let mut state = self.state.lock().await;
        let Some(todo) = state.todos.iter_mut().find(|todo| todo.id == id) else {
            return Ok(None);
        };
        todo.apply_patch(patch, Utc::now());
        debug!(id = %id, "updated todo in memory store");
        Ok(Some(todo.clone()))
    }

    async fn delete(&self, id: TodoId) -> Result<bool, TodoStoreError> {
        let mut state = self.state.lock().await;
        let before = state.todos.len();
        state.todos.retain(|todo| todo.id != id);
        let removed = state.todos.len() != before;
        if removed {
            debug!(id = %id, "deleted todo from memory store");
        }
        Ok(removed)
    }
}
