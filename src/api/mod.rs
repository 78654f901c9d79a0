//! HTTP API module: CRUD routes, tracing middleware, metrics and docs
//! endpoints.

use utoipa::OpenApi;

use crate::model::{NewTodo, Todo};

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;

/// OpenAPI document served under `/api-docs/openapi.json` and browsed via
/// the Swagger UI at `/docs`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Simple Todo API",
        description = "A simple API for the DevOps project.",
        version = "1.0.0"
    ),
    paths(
        handlers::root,
        handlers::create_todo,
        handlers::list_todos,
        handlers::get_todo,
        handlers::update_todo,
        handlers::delete_todo,
    ),
    components(schemas(Todo, NewTodo)),
    tags(
        (name = "root", description = "Welcome endpoint"),
        (name = "todos", description = "Todo CRUD operations")
    )
)]
pub struct ApiDoc;
