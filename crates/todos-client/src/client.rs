//! HTTP Loader

use crate::error::FetchError;
use crate::models::Todo;

/// Loads the todo list from a single fixed URL.
#[derive(Debug, Clone)]
pub struct TodosClient {
    url: String,
    http: reqwest::Client,
}

impl TodosClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issue one `GET` and decode the response. No retry.
    pub async fn fetch_todos(&self) -> Result<Vec<Todo>, FetchError> {
        log::debug!("GET {}", self.url);
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        parse_todos(status, &body)
    }
}

/// Interpret a response to the list request.
pub fn parse_todos(status: u16, body: &str) -> Result<Vec<Todo>, FetchError> {
    if status != 200 {
        return Err(FetchError::Status {
            status,
            body: body.to_string(),
        });
    }
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_success_keeps_order() {
        let body = r#"[
            {"id":2,"title":"b","completed":true},
            {"id":1,"title":"a","completed":false}
        ]"#;
        let todos = parse_todos(200, body).unwrap();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].id, 2);
        assert_eq!(todos[1].title, "a");
    }

    #[test]
    fn parse_empty_array() {
        assert!(parse_todos(200, "[]").unwrap().is_empty());
    }

    #[test]
    fn parse_not_found_is_status_error() {
        let err = parse_todos(404, "").unwrap_err();
        assert_eq!(
            err,
            FetchError::Status {
                status: 404,
                body: String::new()
            }
        );
    }

    #[test]
    fn parse_server_error_keeps_body() {
        let err = parse_todos(500, "boom").unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 500, ref body } if body == "boom"));
        assert_eq!(err.to_string(), "HTTP 500: boom");
    }

    #[test]
    fn parse_bad_json_is_decode_error() {
        let err = parse_todos(200, "not json").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn parse_object_instead_of_array_is_decode_error() {
        let err = parse_todos(200, r#"{"id":1,"title":"a","completed":false}"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn client_keeps_url() {
        let client = TodosClient::new("http://localhost:3000/todos");
        assert_eq!(client.url(), "http://localhost:3000/todos");
    }
}
