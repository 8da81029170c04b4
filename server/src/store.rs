//! Persistence seam for todo records.
//!
//! # Design
//! [`TodoStore`] is the id-indexed CRUD interface the service layer is
//! written against. Absence is a normal outcome (`Option` returns, no-op
//! deletes), never an error; consistency under concurrent requests is the
//! store's problem, not the caller's. The only backend shipped here is
//! [`InMemoryStore`], which the binary and the tests use.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::model::Todo;

/// Id-indexed CRUD operations expected from a backing store.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Every stored record, in store order.
    async fn find_all(&self) -> Vec<Todo>;

    async fn find_by_id(&self, id: i64) -> Option<Todo>;

    /// Inserts `todo` under a freshly assigned id when `todo.id` is `None`,
    /// otherwise inserts-or-replaces the record at that id. Returns the
    /// stored record with its id set.
    async fn save(&self, todo: Todo) -> Todo;

    /// No-op when no record has `id`.
    async fn delete_by_id(&self, id: i64);

    async fn exists_by_id(&self, id: i64) -> bool;
}

/// In-memory store keyed by id.
///
/// Assigns sequential ids starting at 1, like a relational identity column,
/// and keeps insertion order so `find_all` is stable.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    records: HashMap<i64, Todo>,
    order: Vec<i64>,
    last_id: i64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for InMemoryStore {
    async fn find_all(&self) -> Vec<Todo> {
        let inner = self.inner.read().await;
        inner
            .order
            .iter()
            .filter_map(|id| inner.records.get(id).cloned())
            .collect()
    }

    async fn find_by_id(&self, id: i64) -> Option<Todo> {
        self.inner.read().await.records.get(&id).cloned()
    }

    async fn save(&self, mut todo: Todo) -> Todo {
        let mut inner = self.inner.write().await;
        let id = match todo.id {
            Some(id) => id,
            None => inner.last_id + 1,
        };
        todo.id = Some(id);
        if inner.records.insert(id, todo.clone()).is_none() {
            inner.order.push(id);
        }
        // the counter never lags behind an explicitly keyed insert
        inner.last_id = inner.last_id.max(id);
        todo
    }

    async fn delete_by_id(&self, id: i64) {
        let mut inner = self.inner.write().await;
        if inner.records.remove(&id).is_some() {
            inner.order.retain(|&kept| kept != id);
        }
    }

    async fn exists_by_id(&self, id: i64) -> bool {
        self.inner.read().await.records.contains_key(&id)
    }
}
