//! PostgreSQL-backed `TodoStore` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{TodoStore, TodoStoreError};
use crate::domain::{Todo, TodoDraft, TodoId, TodoPatch, TodoTitle};

use super::models::{NewTodoRow, TodoChangeset, TodoRow};
use super::pool::{DbPool, PoolError};
use super::schema::todos;

/// One-time idempotent bootstrap DDL; must stay in lockstep with
/// `schema.rs`.
const CREATE_TODOS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS todos (
    id BIGSERIAL PRIMARY KEY,
    title TEXT NOT NULL,
    completed BOOLEAN NOT NULL DEFAULT FALSE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
)";

/// Diesel-backed implementation of the [`TodoStore`] port.
///
/// Every operation compiles to a single statement scoped by primary key and
/// runs in its own implicit transaction, so a driver-level failure is never
/// partially applied. Timestamps are stamped by the database (`DEFAULT
/// now()` on insert, `updated_at = now()` inside the update statement) so
/// handler and storage clocks cannot disagree.
///
/// `list` returns rows in ascending id order, which matches insertion order
/// for this table and stays stable across a session.
#[derive(Clone)]
pub struct DieselTodoStore {
    pool: DbPool,
}

impl DieselTodoStore {
    /// Create a new store backed by the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create the `todos` table when absent.
    ///
    /// Run once at startup before serving traffic; safe to repeat.
    pub async fn ensure_schema(&self) -> Result<(), TodoStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::sql_query(CREATE_TODOS_TABLE)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        debug!("todos table ensured");
        Ok(())
    }
}

/// Map pool errors to port errors.
fn map_pool_error(error: PoolError) -> TodoStoreError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            TodoStoreError::connection(message)
        }
    }
}

/// Map Diesel errors to port errors without leaking driver detail upward.
fn map_diesel_error(error: diesel::result::Error) -> TodoStoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            TodoStoreError::connection("database connection error")
        }
        DieselError::DatabaseError(_, _) => TodoStoreError::query("database error"),
        _ => TodoStoreError::query("database error"),
    }
}

#[async_trait]
impl TodoStore for DieselTodoStore {
    async fn list(&self) -> Result<Vec<Todo>, TodoStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<TodoRow> = todos::table
            .order(todos::id.asc())
            .select(TodoRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find(&self, id: TodoId) -> Result<Option<Todo>, TodoStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<TodoRow> = todos::table
            .find(id.value())
            .select(TodoRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, draft: TodoDraft) -> Result<Todo, TodoStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: TodoRow = diesel::insert_into(todos::table)
            .values(NewTodoRow {
                title: draft.title.as_str(),
            })
            .returning(TodoRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        debug!(id = row.id, "inserted todo row");
        Ok(row.into())
    }

    async fn update(
        &self,
        id: TodoId,
        patch: TodoPatch,
    ) -> Result<Option<Todo>, TodoStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changeset = TodoChangeset {
            title: patch.title.as_ref().map(TodoTitle::as_str),
            completed: patch.completed,
        };

        // The explicit updated_at assignment keeps the changeset non-empty
        // even for an all-None patch, so the timestamp always refreshes.
        let row: Option<TodoRow> = diesel::update(todos::table.find(id.value()))
            .set((changeset, todos::updated_at.eq(diesel::dsl::now)))
            .returning(TodoRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        if row.is_some() {
            debug!(id = id.value(), "updated todo row");
        }
        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: TodoId) -> Result<bool, TodoStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(todos::table.find(id.value()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if deleted > 0 {
            debug!(id = id.value(), "deleted todo row");
        }
        Ok(deleted > 0)
    }
}
