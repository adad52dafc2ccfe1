mod client;
mod form;

pub use client::{RelayClient, RELAY_PATH};
pub use form::{ContactForm, Toast, ToastKind, FALLBACK_FAILURE, UNEXPLAINED_FAILURE};

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SENT_CONFIRMATION: &str = "Email sent successfully";

/// A single message from the contact form. Lives for one request and is never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// What the relay endpoint answers with, on every path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_id: Option<String>,
}

impl SubmissionResult {
    pub fn sent(email_id: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(SENT_CONFIRMATION.to_string()),
            error: None,
            email_id: Some(email_id.into()),
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
            email_id: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    /// The `name` of the form control bound to this field.
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl FromStr for ContactField {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "message" => Ok(Self::Message),
            other => Err(ContactError::UnknownField(other.to_string())),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("unknown contact form field: {0}")]
    UnknownField(String),
    #[error("{0}")]
    Transport(String),
    #[error("Contact endpoint returned status {0}")]
    Status(u16),
}

impl From<reqwest::Error> for ContactError {
    fn from(err: reqwest::Error) -> Self {
        ContactError::Transport(err.to_string())
    }
}
