use std::time::Duration;

use reqwest::Client;

use super::error::ModerationError;
use super::types::{ModerationRequest, ModerationResponse};
use super::{ModerationProvider, ModerationVerdict};

const MODERATION_PATH: &str = "/api/v1/moderate-content";

/// Whole-request deadline; exceeding it surfaces as a transport error.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for the remote content-moderation endpoint.
///
/// Issues one POST per verdict with no retries; retry policy, if ever
/// added, belongs here and must stay invisible to the job state machine.
pub struct ModerationClient {
    api_token: String,
    client: Client,
    base_url: String,
}

impl ModerationClient {
    /// Create a client for the given moderation service base URL.
    pub fn new(base_url: String, api_token: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");
        Self {
            api_token,
            client,
            base_url,
        }
    }
}

impl ModerationProvider for ModerationClient {
    async fn moderate(
        &self,
        content: &str,
        requester_id: &str,
    ) -> Result<ModerationVerdict, ModerationError> {
        let request = ModerationRequest {
            content: content.to_string(),
            user_id: requester_id.to_string(),
        };

        let response = self
            .client
            .post(format!("{}{MODERATION_PATH}", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_token))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ModerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        // Decode by hand so a malformed body is reported as a format
        // error rather than folded into the transport variant.
        let body = response.text().await?;
        let decision: ModerationResponse =
            serde_json::from_str(&body).map_err(|e| ModerationError::Format(e.to_string()))?;

        Ok(decision.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moderation::DEFAULT_REASON;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn sends_bearer_token_and_json_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/moderate-content"))
            .and(header("Authorization", "Bearer test-token"))
            .and(header("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "approved": true,
                "reason": "Content appears safe"
            })))
            .mount(&server)
            .await;

        let client = ModerationClient::new(server.uri(), "test-token".into());
        let verdict = client
            .moderate("A friendly robot avatar", "user123")
            .await
            .unwrap();

        assert!(verdict.approved);
        assert_eq!(verdict.reason.as_deref(), Some("Content appears safe"));

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let json: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(json["content"], "A friendly robot avatar");
        assert_eq!(json["user_id"], "user123");
    }

    #[tokio::test]
    async fn rejection_verdict_passes_through() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/moderate-content"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "approved": false,
                "reason": "Policy violation"
            })))
            .mount(&server)
            .await;

        let client = ModerationClient::new(server.uri(), "test-token".into());
        let verdict = client.moderate("something", "user456").await.unwrap();

        assert!(!verdict.approved);
        assert_eq!(verdict.reason.as_deref(), Some("Policy violation"));
    }

    #[tokio::test]
    async fn missing_reason_gets_default() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/moderate-content"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "approved": true })),
            )
            .mount(&server)
            .await;

        let client = ModerationClient::new(server.uri(), "test-token".into());
        let verdict = client.moderate("robot", "user123").await.unwrap();

        assert!(verdict.approved);
        assert_eq!(verdict.reason.as_deref(), Some(DEFAULT_REASON));
    }

    #[tokio::test]
    async fn error_status_maps_to_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/moderate-content"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
            .mount(&server)
            .await;

        let client = ModerationClient::new(server.uri(), "test-token".into());
        let err = client.moderate("robot", "user123").await.unwrap_err();

        match err {
            ModerationError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "internal error");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn undecodable_body_maps_to_format_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/moderate-content"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
            .mount(&server)
            .await;

        let client = ModerationClient::new(server.uri(), "test-token".into());
        let err = client.moderate("robot", "user123").await.unwrap_err();

        assert!(matches!(err, ModerationError::Format(_)));
    }

    #[tokio::test]
    async fn unreachable_server_maps_to_transport_error() {
        // Nothing listens on this port.
        let client = ModerationClient::new("http://127.0.0.1:9".into(), "test-token".into());
        let err = client.moderate("robot", "user123").await.unwrap_err();

        assert!(matches!(err, ModerationError::Transport(_)));
    }
}
