//! Driven ports: interfaces the domain expects adapters to implement.

mod todo_store;

pub use todo_store::{TodoStore, TodoStoreError};
