use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use super::OutboundEmail;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SentEmail {
    pub id: Option<String>,
}

/// Error reported inside a completed provider response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProviderFailure {
    pub message: Option<String>,
    pub name: Option<String>,
}

/// Body of a 2xx reply. Resend answers `{"id": ...}`, but an error may
/// still arrive under a success status.
#[derive(Deserialize)]
struct AcceptedReply {
    id: Option<String>,
    error: Option<ProviderFailure>,
}

/// A provider call that completed. Success and rejection both land here;
/// only transport problems become a [`ProviderError`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendOutcome {
    pub data: Option<SentEmail>,
    pub error: Option<ProviderFailure>,
}

impl SendOutcome {
    pub fn sent(id: impl Into<String>) -> Self {
        Self {
            data: Some(SentEmail {
                id: Some(id.into()),
            }),
            error: None,
        }
    }

    pub fn rejected(failure: ProviderFailure) -> Self {
        Self {
            data: None,
            error: Some(failure),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("{0}")]
    Transport(String),
    #[error("Unexpected response from email provider: {0}")]
    UnexpectedResponse(u16),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Transport(err.to_string())
    }
}

#[async_trait]
pub trait EmailProvider: Send + Sync {
    async fn send(&self, api_key: &str, email: &OutboundEmail)
        -> Result<SendOutcome, ProviderError>;
}

/// Resend's `POST /emails`.
#[derive(Debug, Clone)]
pub struct ResendClient {
    http: Client,
    base_url: String,
}

impl ResendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl EmailProvider for ResendClient {
    async fn send(
        &self,
        api_key: &str,
        email: &OutboundEmail,
    ) -> Result<SendOutcome, ProviderError> {
        let url = format!("{}/emails", self.base_url.trim_end_matches('/'));
        let res = self
            .http
            .post(url)
            .bearer_auth(api_key)
            .json(email)
            .send()
            .await?;
        let status = res.status();
        let body = res.bytes().await?;

        if status.is_success() {
            let reply = serde_json::from_slice::<AcceptedReply>(&body)
                .map_err(|_| ProviderError::UnexpectedResponse(status.as_u16()))?;
            if let Some(failure) = reply.error {
                return Ok(SendOutcome::rejected(failure));
            }
            return match reply.id.filter(|id| !id.is_empty()) {
                Some(id) => Ok(SendOutcome::sent(id)),
                None => Err(ProviderError::UnexpectedResponse(status.as_u16())),
            };
        }
        serde_json::from_slice::<ProviderFailure>(&body)
            .map(SendOutcome::rejected)
            .map_err(|_| ProviderError::UnexpectedResponse(status.as_u16()))
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        http::{HeaderMap, StatusCode},
        routing::post,
        Json, Router,
    };
    use serde_json::{json, Value};

    use super::*;
    use crate::test_util::serve;

    fn email() -> OutboundEmail {
        OutboundEmail {
            from: "Portfolio Contact <onboarding@resend.dev>".to_string(),
            to: vec!["owner@example.com".to_string()],
            subject: "New Contact Form Message from Jane".to_string(),
            html: "<p>Hello</p>".to_string(),
        }
    }

    #[tokio::test]
    async fn test_send_success() {
        let router = Router::new().route(
            "/emails",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                let auth = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default();
                if auth != "Bearer re_123" || body["to"] != json!(["owner@example.com"]) {
                    return (StatusCode::UNAUTHORIZED, Json(json!({"message": "bad"})));
                }
                (StatusCode::OK, Json(json!({"id": "4ef9a417"})))
            }),
        );
        let base = serve(router).await;

        let outcome = ResendClient::new(base).send("re_123", &email()).await;
        assert_eq!(outcome, Ok(SendOutcome::sent("4ef9a417")));
    }

    #[tokio::test]
    async fn test_send_rejected() {
        let router = Router::new().route(
            "/emails",
            post(|| async {
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({
                        "statusCode": 422,
                        "message": "Invalid `to` field.",
                        "name": "validation_error",
                    })),
                )
            }),
        );
        let base = serve(router).await;

        let outcome = ResendClient::new(base)
            .send("re_123", &email())
            .await
            .expect("rejection is not a transport error");
        assert!(outcome.data.is_none());
        let failure = outcome.error.expect("should carry provider error");
        assert_eq!(failure.message.as_deref(), Some("Invalid `to` field."));
        assert_eq!(failure.name.as_deref(), Some("validation_error"));
    }

    #[tokio::test]
    async fn test_send_error_under_success_status() {
        let router = Router::new().route(
            "/emails",
            post(|| async {
                Json(json!({
                    "error": {"message": "daily quota exceeded", "name": "rate_limit"},
                }))
            }),
        );
        let base = serve(router).await;

        let outcome = ResendClient::new(base).send("re_123", &email()).await;
        assert_eq!(
            outcome,
            Ok(SendOutcome::rejected(ProviderFailure {
                message: Some("daily quota exceeded".to_string()),
                name: Some("rate_limit".to_string()),
            }))
        );
    }

    #[tokio::test]
    async fn test_send_success_without_id() {
        for reply in [json!({}), json!({"id": ""}), json!({"id": null})] {
            let router = Router::new().route(
                "/emails",
                post(move || {
                    let reply = reply.clone();
                    async move { Json(reply) }
                }),
            );
            let base = serve(router).await;

            let outcome = ResendClient::new(base).send("re_123", &email()).await;
            assert_eq!(outcome, Err(ProviderError::UnexpectedResponse(200)));
        }
    }

    #[tokio::test]
    async fn test_send_garbage_response() {
        let router = Router::new().route(
            "/emails",
            post(|| async { (StatusCode::BAD_GATEWAY, "<html>oops</html>") }),
        );
        let base = serve(router).await;

        let outcome = ResendClient::new(base).send("re_123", &email()).await;
        assert_eq!(outcome, Err(ProviderError::UnexpectedResponse(502)));
    }

    #[tokio::test]
    async fn test_send_unreachable() {
        let outcome = ResendClient::new("http://127.0.0.1:1")
            .send("re_123", &email())
            .await;
        assert!(matches!(outcome, Err(ProviderError::Transport(_))));
    }
}
