//! Business-logic façade over the todo store.

use std::sync::Arc;

use crate::model::Todo;
use crate::store::TodoStore;

/// Thin façade delegating to a [`TodoStore`].
///
/// Each operation issues exactly one store interaction. Absence surfaces as
/// `Option` at this boundary; converting it into an error is the
/// controller's job.
pub struct TodoService {
    store: Arc<dyn TodoStore>,
}

impl TodoService {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    pub async fn find_all(&self) -> Vec<Todo> {
        self.store.find_all().await
    }

    pub async fn find_by_id(&self, id: i64) -> Option<Todo> {
        self.store.find_by_id(id).await
    }

    /// Persists a new todo. Any caller-supplied id is discarded so the
    /// store always assigns a fresh one.
    pub async fn save(&self, todo: Todo) -> Todo {
        self.store.save(Todo { id: None, ..todo }).await
    }

    /// Persists a mutated todo the caller previously loaded and merged.
    pub async fn update(&self, todo: Todo) -> Todo {
        self.store.save(todo).await
    }

    /// Removes the record. No-op when absent; the controller enforces
    /// existence before calling.
    pub async fn delete_by_id(&self, id: i64) {
        self.store.delete_by_id(id).await;
    }
}
