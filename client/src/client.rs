//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state
//! between calls. Each CRUD operation is split into a `build_*` method
//! that produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip.
//!
//! Every operation expects 200 on success — including create (the API
//! deliberately answers 200, not 201) and delete (200 with an empty body).

use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Todo, TodoPayload};

/// Synchronous, stateless client for the todo API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/todos", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_todo(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/todos/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_todo(&self, input: &TodoPayload) -> Result<HttpRequest, ClientError> {
        let body =
            serde_json::to_string(input).map_err(|e| ClientError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/todos", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_update_todo(
        &self,
        id: i64,
        input: &TodoPayload,
    ) -> Result<HttpRequest, ClientError> {
        let body =
            serde_json::to_string(input).map_err(|e| ClientError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Patch,
            path: format!("{}/todos/{id}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_todo(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/todos/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ClientError> {
        check_status(&response)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ClientError::DeserializationError(e.to_string()))
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ClientError> {
        check_status(&response)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ClientError::DeserializationError(e.to_string()))
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ClientError> {
        check_status(&response)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ClientError::DeserializationError(e.to_string()))
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ClientError> {
        check_status(&response)?;
        serde_json::from_str(&response.body)
            .map_err(|e| ClientError::DeserializationError(e.to_string()))
    }

    /// The delete response carries no body; only the status matters.
    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ClientError> {
        check_status(&response)
    }
}

/// Map non-200 status codes to the appropriate `ClientError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ClientError> {
    match response.status {
        200 => Ok(()),
        404 => Err(ClientError::NotFound),
        status => Err(ClientError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CompletionStatus;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:3000")
    }

    fn payload(description: &str, completion_status: CompletionStatus) -> TodoPayload {
        TodoPayload {
            description: description.to_string(),
            completion_status,
        }
    }

    #[test]
    fn new_trims_trailing_slash() {
        let client = TodoClient::new("http://localhost:3000/");
        assert_eq!(client.build_list_todos().path, "http://localhost:3000/todos");
    }

    #[test]
    fn build_list_todos_produces_correct_request() {
        let req = client().build_list_todos();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/todos");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_todo_produces_correct_request() {
        let req = client().build_get_todo(7);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/todos/7");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_todo_produces_correct_request() {
        let input = payload("Buy milk", CompletionStatus::Pending);
        let req = client().build_create_todo(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/todos");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["description"], "Buy milk");
        assert_eq!(body["completionStatus"], "PENDING");
        assert!(body.get("id").is_none());
    }

    #[test]
    fn build_update_todo_produces_correct_request() {
        let input = payload("Buy milk", CompletionStatus::Completed);
        let req = client().build_update_todo(7, &input).unwrap();
        assert_eq!(req.method, HttpMethod::Patch);
        assert_eq!(req.path, "http://localhost:3000/todos/7");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["completionStatus"], "COMPLETED");
    }

    #[test]
    fn build_delete_todo_produces_correct_request() {
        let req = client().build_delete_todo(7);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/todos/7");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_todos_success() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"[{"id":1,"description":"Test","completionStatus":"PENDING"}]"#.to_string(),
        };
        let todos = client().parse_list_todos(response).unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, 1);
        assert_eq!(todos[0].description, "Test");
    }

    #[test]
    fn parse_create_todo_expects_200() {
        let response = HttpResponse {
            status: 201,
            headers: Vec::new(),
            body: r#"{"id":1,"description":"Test","completionStatus":"PENDING"}"#.to_string(),
        };
        assert!(matches!(
            client().parse_create_todo(response),
            Err(ClientError::HttpError { status: 201, .. })
        ));
    }

    #[test]
    fn parse_get_todo_maps_404_to_not_found() {
        let response = HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: r#"{"timestamp":"2026-08-08T00:00:00Z","message":"Todo not found","requestDescription":"uri=/todos/999"}"#.to_string(),
        };
        assert!(matches!(
            client().parse_get_todo(response),
            Err(ClientError::NotFound)
        ));
    }

    #[test]
    fn parse_delete_todo_accepts_empty_200() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: String::new(),
        };
        assert!(client().parse_delete_todo(response).is_ok());
    }

    #[test]
    fn parse_error_carries_status_and_body() {
        let response = HttpResponse {
            status: 500,
            headers: Vec::new(),
            body: r#"{"message":"An unexpected error occurred"}"#.to_string(),
        };
        match client().parse_get_todo(response) {
            Err(ClientError::HttpError { status, body }) => {
                assert_eq!(status, 500);
                assert!(body.contains("unexpected error"));
            }
            other => panic!("expected HttpError, got {other:?}"),
        }
    }

    #[test]
    fn parse_garbage_body_is_deserialization_error() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: "not json".to_string(),
        };
        assert!(matches!(
            client().parse_get_todo(response),
            Err(ClientError::DeserializationError(_))
        ));
    }
}
