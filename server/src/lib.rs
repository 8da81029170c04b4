//! REST service managing todo items.
//!
//! # Overview
//! A thin controller layer ([`routes`]) delegates to a service façade
//! ([`service::TodoService`]) which delegates to a persistence seam
//! ([`store::TodoStore`]). Absence stays an `Option` until the controller
//! boundary, where it becomes an [`error::ApiError`]; all error-to-response
//! formatting is centralized there so every endpoint shares one error body
//! shape.

pub mod error;
pub mod model;
pub mod routes;
pub mod service;
pub mod store;

pub use error::ApiError;
pub use model::{CompletionStatus, Todo};
pub use routes::{app, app_with_store, run};
pub use service::TodoService;
pub use store::{InMemoryStore, TodoStore};
