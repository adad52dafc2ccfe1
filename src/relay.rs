mod config;
mod email;
mod provider;

pub use config::{RelayConfig, API_KEY_VAR};
pub use email::{ContactEmail, OutboundEmail};
pub use provider::{
    EmailProvider, ProviderError, ProviderFailure, ResendClient, SendOutcome, SentEmail,
};

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use http::{header, HeaderValue, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::{debug, error, info};

use crate::contact::{ContactSubmission, SubmissionResult, RELAY_PATH};

pub const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

const PROVIDER_REJECTED: &str = "Email provider error";
const SEND_FAILED: &str = "Failed to send email";
const PREVIEW_CHARS: usize = 50;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("RESEND_API_KEY not configured")]
    MissingApiKey,
    #[error("Invalid submission: {0}")]
    InvalidPayload(#[from] serde_json::Error),
    #[error("Couldn't render email: {0}")]
    Template(#[from] askama::Error),
    #[error("{0}")]
    Rejected(String),
    #[error("{0}")]
    Provider(#[from] ProviderError),
    #[error("Email provider returned no message id")]
    MissingEmailId,
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        let msg = self.to_string();
        if !msg.is_empty() {
            return msg;
        }
        match self {
            RelayError::Rejected(_) => PROVIDER_REJECTED.to_string(),
            _ => SEND_FAILED.to_string(),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status(), Json(SubmissionResult::failed(self.message()))).into_response()
    }
}

/// Wire shape of a submission: every field optional, `null` allowed.
#[derive(Deserialize)]
struct SubmissionPayload {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl From<SubmissionPayload> for ContactSubmission {
    fn from(value: SubmissionPayload) -> Self {
        Self {
            name: value.name.unwrap_or_default(),
            email: value.email.unwrap_or_default(),
            message: value.message.unwrap_or_default(),
        }
    }
}

fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head = chars.by_ref().take(PREVIEW_CHARS).collect::<String>();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

/// Turns contact submissions into one email each. Holds no state between requests.
pub struct MailRelay<P> {
    config: RelayConfig,
    provider: P,
}

impl<P: EmailProvider> MailRelay<P> {
    pub fn new(config: RelayConfig, provider: P) -> Self {
        Self { config, provider }
    }

    pub async fn relay(&self, body: &[u8]) -> Result<SubmissionResult, RelayError> {
        info!("Received contact form submission");

        let Some(api_key) = self.config.api_key() else {
            error!(var = API_KEY_VAR, "Provider API key missing from relay configuration");
            return Err(RelayError::MissingApiKey);
        };

        let submission: ContactSubmission =
            serde_json::from_slice::<SubmissionPayload>(body)?.into();
        debug!(
            name = %submission.name,
            email = %submission.email,
            message = %preview(&submission.message),
            "Form data"
        );

        let email = ContactEmail::new(&submission).compose(&self.config)?;
        let outcome = match self.provider.send(api_key, &email).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(error = %e, "Error sending contact email");
                return Err(e.into());
            }
        };

        if let Some(failure) = outcome.error {
            error!(?failure, "Email provider returned an error");
            let msg = failure
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| PROVIDER_REJECTED.to_string());
            return Err(RelayError::Rejected(msg));
        }

        let email_id = outcome.data.and_then(|d| d.id).filter(|id| !id.is_empty());
        let Some(email_id) = email_id else {
            error!("Email provider accepted the request without a message id");
            return Err(RelayError::MissingEmailId);
        };
        info!(%email_id, "Email sent successfully");
        Ok(SubmissionResult::sent(email_id))
    }
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn submit<P: EmailProvider>(
    State(relay): State<Arc<MailRelay<P>>>,
    body: Bytes,
) -> Result<Json<SubmissionResult>, RelayError> {
    relay.relay(&body).await.map(Json)
}

/// Mounts the relay at [`RELAY_PATH`]. Every response, preflight included,
/// carries the permissive CORS headers.
pub fn router<P, S>(relay: Arc<MailRelay<P>>) -> Router<S>
where
    P: EmailProvider + 'static,
    S: Clone + Send + Sync + 'static,
{
    let cors = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ));

    Router::new()
        .route(RELAY_PATH, post(submit::<P>).options(preflight))
        .layer(cors)
        .with_state(relay)
}
