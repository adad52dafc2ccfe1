use reqwest::Client;

use super::{ContactError, ContactSubmission, SubmissionResult};

/// Where the server mounts the mail relay.
pub const RELAY_PATH: &str = "/api/send-contact-email";

/// Browser-side transport to the mail relay. One POST per call, no retries.
#[derive(Debug, Clone)]
pub struct RelayClient {
    http: Client,
    endpoint: String,
}

impl RelayClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Relay mounted on the given origin, e.g. `https://example.com`.
    pub fn for_origin(origin: &str) -> Self {
        Self::new(format!("{}{}", origin.trim_end_matches('/'), RELAY_PATH))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Error responses from the relay still carry a [`SubmissionResult`], so any
    /// body that decodes is returned whatever the status code.
    pub async fn submit(
        &self,
        submission: &ContactSubmission,
    ) -> Result<SubmissionResult, ContactError> {
        let res = self.http.post(&self.endpoint).json(submission).send().await?;
        let status = res.status();
        let body = res.bytes().await?;
        serde_json::from_slice(&body).map_err(|_| ContactError::Status(status.as_u16()))
    }
}
