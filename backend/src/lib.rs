//! To-do list service: an actix-web HTTP surface over two interchangeable
//! storage backends (in-process or PostgreSQL), selected once at startup.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
