//! HTTP client for the simulation and scenario endpoints.
//!
//! This is the outbound half of the dashboard: manually authored events go
//! to `POST /api/simulate`, scenario triggers to
//! `POST /api/scenario/{scenario_id}`. Success is any 2xx; anything else is
//! surfaced to the caller as [`ApiError::Status`] with no retry. These
//! calls never touch the stream core; their results come back around
//! through the feed as `event_sent` and `scenario_started` frames.

use reqwest::{Client, Response};

use crate::config::ApiConfig;

use super::dto::{EventSubmission, ScenarioResponse, SimulateResponse, TemplatesResponse};
use super::error::ApiError;

/// Client for the backend simulation/scenario API.
pub struct ApiClient {
    config: ApiConfig,
    client: Client,
}

impl ApiClient {
    /// Creates a new client with the configured base address and timeout.
    pub fn new(config: ApiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Submits one manually authored event.
    pub async fn submit_event(
        &self,
        submission: &EventSubmission,
    ) -> Result<SimulateResponse, ApiError> {
        let response = self
            .client
            .post(self.url("/api/simulate"))
            .json(submission)
            .send()
            .await?;

        Ok(checked(response).await?.json().await?)
    }

    /// Triggers a named scenario, e.g. `incident` or `deployment`.
    pub async fn trigger_scenario(&self, scenario_id: &str) -> Result<ScenarioResponse, ApiError> {
        let response = self
            .client
            .post(self.url(&format!("/api/scenario/{scenario_id}")))
            .send()
            .await?;

        Ok(checked(response).await?.json().await?)
    }

    /// Fetches the event templates and scenario catalog.
    pub async fn templates(&self) -> Result<TemplatesResponse, ApiError> {
        let response = self.client.get(self.url("/api/templates")).send().await?;

        Ok(checked(response).await?.json().await?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

/// Maps non-2xx responses to [`ApiError::Status`], keeping the body text.
async fn checked(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Severity;
    use std::net::SocketAddr;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// One-shot HTTP stub that answers any request with a canned response.
    async fn stub_server(status_line: &'static str, body: &'static str) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let response = format!(
                    "{status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
            }
        });

        addr
    }

    fn client_for(addr: SocketAddr) -> ApiClient {
        ApiClient::new(ApiConfig {
            base_url: format!("http://{addr}"),
            request_timeout_secs: 5,
        })
    }

    fn submission() -> EventSubmission {
        EventSubmission {
            source: "github".to_string(),
            event_type: "com.github.push".to_string(),
            severity: Severity::Info,
            subject: "pushed to main".to_string(),
            category: "cicd".to_string(),
        }
    }

    #[tokio::test]
    async fn submit_event_parses_success_response() {
        let addr = stub_server(
            "HTTP/1.1 200 OK",
            r#"{"status": "success", "event_id": "evt-1", "message": "queued"}"#,
        )
        .await;

        let response = client_for(addr).submit_event(&submission()).await.unwrap();
        assert_eq!(response.status, "success");
        assert_eq!(response.event_id, "evt-1");
    }

    #[tokio::test]
    async fn submit_event_surfaces_server_error_without_retry() {
        let addr = stub_server("HTTP/1.1 500 Internal Server Error", "kafka down").await;

        let error = client_for(addr).submit_event(&submission()).await.unwrap_err();
        match error {
            ApiError::Status { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "kafka down");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn trigger_scenario_parses_started_response() {
        let addr = stub_server(
            "HTTP/1.1 200 OK",
            r#"{"status": "started", "scenario": "incident", "description": "Production incident"}"#,
        )
        .await;

        let response = client_for(addr).trigger_scenario("incident").await.unwrap();
        assert_eq!(response.status, "started");
        assert_eq!(response.scenario, "incident");
    }

    #[tokio::test]
    async fn trigger_unknown_scenario_surfaces_404() {
        let addr = stub_server("HTTP/1.1 404 Not Found", "not found").await;

        let error = client_for(addr).trigger_scenario("bogus").await.unwrap_err();
        assert_eq!(error.status(), Some(404));
    }

    #[tokio::test]
    async fn connection_refused_is_a_transport_error() {
        let client = ApiClient::new(ApiConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            request_timeout_secs: 2,
        });

        let error = client.submit_event(&submission()).await.unwrap_err();
        assert!(matches!(error, ApiError::Transport(_)));
        assert_eq!(error.status(), None);
    }
}
