use askama::Template;
use serde::Serialize;

use super::RelayConfig;
use crate::contact::ContactSubmission;

/// The message handed to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

/// Notification to the site owner. User text is HTML-escaped by the template.
#[derive(Template)]
#[template(path = "contact_email.html")]
pub struct ContactEmail<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

impl<'a> ContactEmail<'a> {
    pub fn new(submission: &'a ContactSubmission) -> Self {
        Self {
            name: &submission.name,
            email: &submission.email,
            message: &submission.message,
        }
    }

    pub fn subject(&self) -> String {
        format!("New Contact Form Message from {}", self.name)
    }

    pub fn compose(&self, config: &RelayConfig) -> Result<OutboundEmail, askama::Error> {
        Ok(OutboundEmail {
            from: config.from.clone(),
            to: config.to.clone(),
            subject: self.subject(),
            html: self.render()?,
        })
    }
}
