//! OpenAPI document assembled from handler annotations.

use utoipa::OpenApi;

/// Public OpenAPI surface served by Swagger UI in debug builds.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::inbound::http::health::root,
        crate::inbound::http::todos::list_todos,
        crate::inbound::http::todos::get_todo,
        crate::inbound::http::todos::create_todo,
        crate::inbound::http::todos::update_todo,
        crate::inbound::http::todos::delete_todo,
    ),
    components(schemas(
        crate::domain::Todo,
        crate::domain::TodoId,
        crate::inbound::http::health::LivenessResponse,
        crate::inbound::http::todos::CreateTodoRequest,
        crate::inbound::http::todos::UpdateTodoRequest,
    )),
    tags(
        (name = "todos", description = "Task-list CRUD operations"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;
