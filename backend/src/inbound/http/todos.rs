//! To-do CRUD handlers.
//!
//! ```text
//! GET /todos
//! GET /todos/{id}
//! POST /todos {"title":"Buy milk"}
//! PUT /todos/{id} {"title"?:"...","completed"?:true}
//! DELETE /todos/{id}
//! ```
//!
//! Handlers dispatch to the storage port and translate outcomes; every
//! domain rule lives behind that boundary.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Todo, TodoDraft, TodoId, TodoPatch, TodoTitle};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::empty_title_error;

/// Request body for `POST /todos`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateTodoRequest {
    /// Title for the new item; must be non-empty after trimming.
    pub title: String,
}

/// Request body for `PUT /todos/{id}`; both fields optional.
///
/// An empty body is legal and still refreshes the item's `updated_at`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateTodoRequest {
    /// Replacement title, when supplied.
    pub title: Option<String>,
    /// Replacement completion flag, when supplied.
    pub completed: Option<bool>,
}

fn todo_not_found() -> Error {
    Error::not_found("Todo not found")
}

fn parse_title(raw: String) -> Result<TodoTitle, Error> {
    TodoTitle::new(raw).map_err(|_| empty_title_error())
}

/// List all items.
#[utoipa::path(
    get,
    path = "/todos",
    responses((status = 200, description = "All live items", body = [Todo])),
    tags = ["todos"],
    operation_id = "listTodos"
)]
#[get("/todos")]
pub async fn list_todos(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Todo>>> {
    let todos = state.todos.list().await?;
    Ok(web::Json(todos))
}

/// Fetch one item.
#[utoipa::path(
    get,
    path = "/todos/{id}",
    params(("id" = i64, Path, description = "Item identifier")),
    responses(
        (status = 200, description = "The item", body = Todo),
        (status = 404, description = "No item with that id")
    ),
    tags = ["todos"],
    operation_id = "getTodo"
)]
#[get("/todos/{id}")]
pub async fn get_todo(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<Todo>> {
    let id = TodoId::new(path.into_inner());
    let todo = state.todos.find(id).await?.ok_or_else(todo_not_found)?;
    Ok(web::Json(todo))
}

/// Create an item.
#[utoipa::path(
    post,
    path = "/todos",
    request_body = CreateTodoRequest,
    responses(
        (status = 201, description = "Created item", body = Todo),
        (status = 422, description = "Missing or blank title")
    ),
    tags = ["todos"],
    operation_id = "createTodo"
)]
#[post("/todos")]
pub async fn create_todo(
    state: web::Data<HttpState>,
    payload: web::Json<CreateTodoRequest>,
) -> ApiResult<HttpResponse> {
    let title = parse_title(payload.into_inner().title)?;
    let todo = state.todos.create(TodoDraft { title }).await?;
    Ok(HttpResponse::Created().json(todo))
}

/// Partially update an item.
#[utoipa::path(
    put,
    path = "/todos/{id}",
    params(("id" = i64, Path, description = "Item identifier")),
    request_body = UpdateTodoRequest,
    responses(
        (status = 200, description = "Updated item", body = Todo),
        (status = 404, description = "No item with that id"),
        (status = 422, description = "Blank title supplied")
    ),
    tags = ["todos"],
    operation_id = "updateTodo"
)]
#[put("/todos/{id}")]
pub async fn update_todo(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<UpdateTodoRequest>,
) -> ApiResult<web::Json<Todo>> {
    let id = TodoId::new(path.into_inner());
    let body = payload.into_inner();
    let patch = TodoPatch {
        title: body.title.map(parse_title).transpose()?,
        completed: body.completed,
    };

    let todo = state
        .todos
        .update(id, patch)
        .await?
        .ok_or_else(todo_not_found)?;
    Ok(web::Json(todo))
}

/// Delete an item permanently.
#[utoipa::path(
    delete,
    path = "/todos/{id}",
    params(("id" = i64, Path, description = "Item identifier")),
    responses(
        (status = 204, description = "Item removed"),
        (status = 404, description = "No item with that id")
    ),
    tags = ["todos"],
    operation_id = "deleteTodo"
)]
#[delete("/todos/{id}")]
pub async fn delete_todo(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = TodoId::new(path.into_inner());
    if state.todos.delete(id).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(todo_not_found())
    }
}
