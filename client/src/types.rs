//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the server's wire schema but are defined
//! independently, so the client crate carries no dependency on the server
//! or its web framework. The integration test catches any schema drift
//! between the two crates.

use serde::{Deserialize, Serialize};

/// Completion state of a todo. The API rejects any value outside this set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompletionStatus {
    Pending,
    Completed,
}

/// A stored todo item returned by the API. `id` is always present because
/// the server assigns one on creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub description: String,
    pub completion_status: CompletionStatus,
}

/// Request payload for creating or updating a todo. The server ignores any
/// id carried in a body, so this type does not serialize one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPayload {
    pub description: String,
    pub completion_status: CompletionStatus,
}
