//! Server construction: storage selection, CORS policy, app assembly.

mod config;

pub use config::{AppConfig, ConfigError, StorageMode};

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use crate::domain::ports::TodoStore;
use crate::inbound::http::health::root;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::todos::{create_todo, delete_todo, get_todo, list_todos, update_todo};
use crate::inbound::http::validation::{json_config, path_config};
use crate::outbound::memory::MemoryTodoStore;
use crate::outbound::persistence::{DbPool, DieselTodoStore, PoolConfig};

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Development UI origin allowed by the CORS policy.
const ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Fixed CORS policy: one allowed origin, all methods and headers,
/// credentials permitted. Deliberately not configurable.
fn cors_policy() -> Cors {
    Cors::default()
        .allowed_origin(ALLOWED_ORIGIN)
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}

/// Build the actix application serving the to-do API.
///
/// Also used by the end-to-end tests, which inject an in-memory store.
pub fn build_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config())
        .app_data(path_config())
        .wrap(cors_policy())
        .service(root)
        .service(list_todos)
        .service(get_todo)
        .service(create_todo)
        .service(update_todo)
        .service(delete_todo);

    #[cfg(debug_assertions)]
    let app =
        app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct the storage backend selected by configuration.
///
/// Durable mode builds the connection pool and runs the idempotent schema
/// bootstrap; a database that cannot be reached fails startup instead of
/// serving traffic.
pub async fn build_store(config: &AppConfig) -> std::io::Result<Arc<dyn TodoStore>> {
    match config.storage_mode {
        StorageMode::Volatile => Ok(Arc::new(MemoryTodoStore::new())),
        StorageMode::Durable => {
            let url = config
                .database_url
                .clone()
                .ok_or_else(|| std::io::Error::other(ConfigError::MissingDatabaseUrl))?;

            let pool = DbPool::new(PoolConfig::new(url))
                .await
                .map_err(std::io::Error::other)?;
            let store = DieselTodoStore::new(pool);
            store.ensure_schema().await.map_err(std::io::Error::other)?;
            Ok(Arc::new(store))
        }
    }
}

/// Construct the HTTP server around the selected storage backend.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(store: Arc<dyn TodoStore>, config: &AppConfig) -> std::io::Result<Server> {
    let bind_addr = config.bind_addr;
    let server = HttpServer::new(move || build_app(HttpState::new(store.clone())))
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, "todo API listening");
    Ok(server)
}
