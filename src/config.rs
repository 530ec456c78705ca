// src/config.rs
use std::time::Duration;

use url::Url;

use crate::error::{Result, WidgetError};

pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";
pub const DEFAULT_TITLE: &str = "Chat Assistant";
pub const DEFAULT_GREETING: &str = "Welcome! How can I assist you today?";
pub const DEFAULT_LOADING_TEXT: &str = "Assistant is thinking...";

#[derive(Clone, Debug)]
pub struct WidgetConfig {
    pub server_url: Url,
    pub clear_session_on_exit: bool,
    pub request_timeout: Option<Duration>,
    pub title: String,
    /// `None` when the greeting is disabled.
    pub greeting: Option<String>,
    pub loading_text: String,
}

impl WidgetConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup, falling back to defaults for
    /// missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_url =
            lookup("CHAT_SERVER_URL").unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        let mut config = Self {
            server_url: Url::parse(server_url.trim())?,
            clear_session_on_exit: false,
            request_timeout: None,
            title: DEFAULT_TITLE.to_string(),
            greeting: Some(DEFAULT_GREETING.to_string()),
            loading_text: DEFAULT_LOADING_TEXT.to_string(),
        };

        if let Some(raw) = lookup("CHAT_CLEAR_SESSION_ON_EXIT") {
            config.clear_session_on_exit = parse_bool("CHAT_CLEAR_SESSION_ON_EXIT", &raw)?;
        }

        if let Some(raw) = lookup("CHAT_REQUEST_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                WidgetError::Config(format!(
                    "CHAT_REQUEST_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                    raw
                ))
            })?;
            config.request_timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }

        if let Some(title) = lookup("CHAT_TITLE") {
            config.title = title;
        }

        if let Some(greeting) = lookup("CHAT_GREETING") {
            config.greeting = (!greeting.trim().is_empty()).then_some(greeting);
        }

        if let Some(text) = lookup("CHAT_LOADING_TEXT") {
            config.loading_text = text;
        }

        Ok(config)
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(WidgetError::Config(format!(
            "{} must be a boolean, got '{}'",
            key, other
        ))),
    }
}
