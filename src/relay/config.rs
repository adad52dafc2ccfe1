use std::{env, fmt};

pub const API_KEY_VAR: &str = "RESEND_API_KEY";

const DEFAULT_FROM: &str = "Portfolio Contact <onboarding@resend.dev>";
const DEFAULT_TO: &str = "vamsiraj.1617@gmail.com";
const DEFAULT_PROVIDER_URL: &str = "https://api.resend.com";

/// Settings for the mail relay, read once at startup and handed to [`super::MailRelay`].
#[derive(Clone, PartialEq, Eq)]
pub struct RelayConfig {
    api_key: Option<String>,
    pub from: String,
    pub to: Vec<String>,
    pub provider_url: String,
}

impl RelayConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()),
            from: DEFAULT_FROM.to_string(),
            to: vec![DEFAULT_TO.to_string()],
            provider_url: DEFAULT_PROVIDER_URL.to_string(),
        }
    }

    /// `RESEND_API_KEY`, `CONTACT_FROM`, `CONTACT_TO` (comma separated), `RESEND_API_URL`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new(lookup(API_KEY_VAR));
        if let Some(from) = lookup("CONTACT_FROM").filter(|s| !s.is_empty()) {
            config.from = from;
        }
        if let Some(to) = lookup("CONTACT_TO") {
            let to = to
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect::<Vec<_>>();
            if !to.is_empty() {
                config.to = to;
            }
        }
        if let Some(url) = lookup("RESEND_API_URL").filter(|s| !s.is_empty()) {
            config.provider_url = url;
        }
        config
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("from", &self.from)
            .field("to", &self.to)
            .field("provider_url", &self.provider_url)
            .finish()
    }
}
