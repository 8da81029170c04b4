//! HTTP routing: one handler per verb/route, each a thin mapping from the
//! request onto [`TodoService`] calls.
//!
//! # Design
//! Wiring happens once in [`app_with_store`]: the service holds the store,
//! the handlers hold the service. Extractor failures are not handled
//! inline — a non-integer path id or an unparseable body follows the same
//! blanket rule as any other unexpected failure and lands in the translator
//! as a 500.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{OriginalUri, Path, State};
use axum::http::Uri;
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;

use crate::error::ApiError;
use crate::model::Todo;
use crate::service::TodoService;
use crate::store::{InMemoryStore, TodoStore};

#[derive(Clone)]
struct AppState {
    service: Arc<TodoService>,
}

/// Router backed by a fresh in-memory store.
pub fn app() -> Router {
    app_with_store(Arc::new(InMemoryStore::new()))
}

/// Router over an arbitrary backing store.
pub fn app_with_store(store: Arc<dyn TodoStore>) -> Router {
    let state = AppState {
        service: Arc::new(TodoService::new(store)),
    };
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).patch(update_todo).delete(delete_todo),
        )
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

#[tracing::instrument(name = "list_todos", skip_all)]
async fn list_todos(State(state): State<AppState>) -> Json<Vec<Todo>> {
    Json(state.service.find_all().await)
}

#[tracing::instrument(name = "get_todo", skip_all)]
async fn get_todo(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(id, &uri)?;
    match state.service.find_by_id(id).await {
        Some(todo) => Ok(Json(todo)),
        None => {
            tracing::debug!(id, "todo not found");
            Err(ApiError::not_found(&uri))
        }
    }
}

#[tracing::instrument(name = "create_todo", skip_all)]
async fn create_todo(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    body: Result<Json<Todo>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let todo = parse_body(body, &uri)?;
    Ok(Json(state.service.save(todo).await))
}

#[tracing::instrument(name = "update_todo", skip_all)]
async fn update_todo(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<Todo>, JsonRejection>,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(id, &uri)?;
    let payload = parse_body(body, &uri)?;
    let existing = state
        .service
        .find_by_id(id)
        .await
        .ok_or_else(|| ApiError::not_found(&uri))?;
    // only description and completionStatus are taken from the payload;
    // the stored id wins over whatever the body carries
    let merged = Todo {
        description: payload.description,
        completion_status: payload.completion_status,
        ..existing
    };
    Ok(Json(state.service.update(merged).await))
}

#[tracing::instrument(name = "delete_todo", skip_all)]
async fn delete_todo(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    id: Result<Path<i64>, PathRejection>,
) -> Result<(), ApiError> {
    let id = parse_id(id, &uri)?;
    if state.service.find_by_id(id).await.is_none() {
        return Err(ApiError::not_found(&uri));
    }
    state.service.delete_by_id(id).await;
    Ok(())
}

fn parse_id(id: Result<Path<i64>, PathRejection>, uri: &Uri) -> Result<i64, ApiError> {
    match id {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            tracing::warn!(%rejection, "rejected path parameter");
            Err(ApiError::internal(uri))
        }
    }
}

fn parse_body(body: Result<Json<Todo>, JsonRejection>, uri: &Uri) -> Result<Todo, ApiError> {
    match body {
        Ok(Json(todo)) => Ok(todo),
        Err(rejection) => {
            tracing::warn!(%rejection, "rejected request body");
            Err(ApiError::internal(uri))
        }
    }
}
