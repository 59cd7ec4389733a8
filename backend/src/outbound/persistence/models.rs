//! Diesel row types bridging the `todos` table and the domain entity.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::todos;
use crate::domain::{Todo, TodoId};

/// Queryable row for to-do items.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TodoRow {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Self {
            id: TodoId::new(row.id),
            title: row.title,
            completed: row.completed,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Insertable row for a new item.
///
/// The database assigns the id and defaults the flag and both timestamps.
#[derive(Debug, Insertable)]
#[diesel(table_name = todos)]
pub(crate) struct NewTodoRow<'a> {
    pub title: &'a str,
}

/// Changeset carrying only the supplied fields of a partial update.
///
/// `None` fields are omitted from the generated statement; `updated_at` is
/// set separately so it refreshes even for an all-`None` patch.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = todos)]
pub(crate) struct TodoChangeset<'a> {
    pub title: Option<&'a str>,
    pub completed: Option<bool>,
}
