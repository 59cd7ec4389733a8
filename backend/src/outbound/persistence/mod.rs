//! Durable persistence adapter: PostgreSQL via Diesel with an async pool.

mod diesel_todo_store;
mod models;
mod pool;
mod schema;

pub use diesel_todo_store::DieselTodoStore;
pub use pool::{DbPool, PoolConfig, PoolError};
