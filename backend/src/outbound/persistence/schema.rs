//! Diesel table definitions for the PostgreSQL schema.
//!
//! These must match the bootstrap DDL in the store adapter exactly; Diesel
//! uses them for type-safe SQL generation.

diesel::table! {
    /// To-do items table.
    ///
    /// The `id` column is an auto-incrementing primary key. Both timestamp
    /// columns default to the database clock, and `updated_at` is refreshed
    /// by every update statement.
    todos (id) {
        /// Primary key, assigned by the database sequence.
        id -> Int8,
        /// Item title; non-empty by application invariant.
        title -> Text,
        /// Completion flag, defaults to false.
        completed -> Bool,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}
