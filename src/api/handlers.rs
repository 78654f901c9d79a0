//! HTTP API handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{ApiError, Result};
use crate::model::{NewTodo, Todo};
use crate::store::TodoStore;

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// Record store backing the CRUD routes.
    pub store: TodoStore,
    /// Prometheus recorder handle rendered by the metrics endpoint.
    pub metrics: PrometheusHandle,
}

impl AppState {
    /// Create new app state around the given store.
    pub fn new(store: TodoStore, metrics: PrometheusHandle) -> Self {
        Self { store, metrics }
    }
}

/// Welcome response.
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    /// Greeting message.
    pub message: &'static str,
}

/// Welcome endpoint.
#[utoipa::path(
    get,
    path = "/",
    tag = "root",
    responses((status = 200, description = "Welcome message"))
)]
pub async fn root() -> impl IntoResponse {
    info!("Root endpoint accessed");
    Json(WelcomeResponse {
        message: "Welcome to the Simple Todo API!",
    })
}

/// Create a new todo item.
#[utoipa::path(
    post,
    path = "/todos/",
    tag = "todos",
    request_body = NewTodo,
    responses(
        (status = 201, description = "Todo created", body = Todo),
        (status = 422, description = "Invalid payload")
    )
)]
pub async fn create_todo(
    State(state): State<AppState>,
    Json(payload): Json<NewTodo>,
) -> Result<(StatusCode, Json<Todo>)> {
    payload.validate()?;
    let todo = state.store.create(payload);
    info!("Created new todo: {}", todo.id);
    Ok((StatusCode::CREATED, Json(todo)))
}

/// Retrieve all todo items.
#[utoipa::path(
    get,
    path = "/todos/",
    tag = "todos",
    responses((status = 200, description = "All todos in insertion order", body = [Todo]))
)]
pub async fn list_todos(State(state): State<AppState>) -> Json<Vec<Todo>> {
    Json(state.store.list())
}

/// Retrieve a single todo item by its id.
#[utoipa::path(
    get,
    path = "/todos/{id}",
    tag = "todos",
    params(("id" = u64, Path, description = "Todo identifier")),
    responses(
        (status = 200, description = "Matching todo", body = Todo),
        (status = 404, description = "No todo with that id")
    )
)]
pub async fn get_todo(State(state): State<AppState>, Path(id): Path<u64>) -> Result<Json<Todo>> {
    match state.store.get(id) {
        Some(todo) => Ok(Json(todo)),
        None => {
            warn!("Todo not found: {}", id);
            Err(ApiError::NotFound)
        }
    }
}

/// Update an existing todo item, replacing all mutable fields.
#[utoipa::path(
    put,
    path = "/todos/{id}",
    tag = "todos",
    params(("id" = u64, Path, description = "Todo identifier")),
    request_body = NewTodo,
    responses(
        (status = 200, description = "Updated todo", body = Todo),
        (status = 404, description = "No todo with that id"),
        (status = 422, description = "Invalid payload")
    )
)]
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<NewTodo>,
) -> Result<Json<Todo>> {
    payload.validate()?;
    match state.store.update(id, payload) {
        Some(todo) => {
            info!("Updated todo: {}", id);
            Ok(Json(todo))
        }
        None => Err(ApiError::NotFound),
    }
}

/// Delete a todo item.
#[utoipa::path(
    delete,
    path = "/todos/{id}",
    tag = "todos",
    params(("id" = u64, Path, description = "Todo identifier")),
    responses(
        (status = 204, description = "Todo deleted"),
        (status = 404, description = "No todo with that id")
    )
)]
pub async fn delete_todo(State(state): State<AppState>, Path(id): Path<u64>) -> Result<StatusCode> {
    if state.store.delete(id) {
        info!("Deleted todo: {}", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

/// Render the Prometheus scrape text.
pub async fn metrics(State(state): State<AppState>) -> String {
    state.metrics.render()
}
