//! Domain model for the todo service.
//!
//! # Design
//! Request bodies deserialize straight into [`Todo`]; there is no separate
//! create/update payload type. `id` is optional on the wire because a todo
//! has no id until the store assigns one — handlers decide what to do with
//! a caller-supplied id (ignore it on create, preserve the stored one on
//! update).

use serde::{Deserialize, Serialize};

/// Completion state of a [`Todo`].
///
/// Closed set: deserializing any value other than `"PENDING"` or
/// `"COMPLETED"` fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompletionStatus {
    Pending,
    Completed,
}

/// A single todo item.
///
/// Every persisted record has `Some(id)`; `None` only occurs on records
/// that have not been stored yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: Option<i64>,
    pub description: String,
    pub completion_status: CompletionStatus,
}
