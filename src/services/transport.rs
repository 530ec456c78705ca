// src/services/transport.rs
use async_trait::async_trait;
use tracing::debug;
use url::Url;

use crate::{
    config::WidgetConfig,
    error::Result,
    message::{ChatRequest, ChatResponse, ClearSessionRequest},
};

/// The network surface of the widget.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatResponse>;

    async fn clear_session(&self, session_id: &str) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    chat_url: Url,
    clear_url: Url,
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(base_url: &Url) -> Result<Self> {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn from_config(config: &WidgetConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Self::with_client(&config.server_url, builder.build()?)
    }

    /// Endpoints resolve as absolute paths against the base URL's origin.
    pub fn with_client(base_url: &Url, http: reqwest::Client) -> Result<Self> {
        Ok(Self {
            chat_url: base_url.join("/chat")?,
            clear_url: base_url.join("/clear_session")?,
            http,
        })
    }

    pub fn chat_url(&self) -> &Url {
        &self.chat_url
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let response = self
            .http
            .post(self.chat_url.clone())
            .json(request)
            .send()
            .await?;

        // Application errors arrive with a 5xx status, so the body is read
        // whatever the status.
        let status = response.status();
        let body = response.text().await?;
        debug!(%status, bytes = body.len(), "chat response received");

        Ok(serde_json::from_str(&body)?)
    }

    async fn clear_session(&self, session_id: &str) -> Result<()> {
        let payload = ClearSessionRequest { session_id: session_id.to_string() };
        let response = self
            .http
            .post(self.clear_url.clone())
            .json(&payload)
            .send()
            .await?;

        response.error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_resolve_from_origin() {
        let base = Url::parse("http://localhost:3000/app/").unwrap();
        let transport = HttpTransport::new(&base).unwrap();
        assert_eq!(transport.chat_url().as_str(), "http://localhost:3000/chat");
        assert_eq!(
            transport.clear_url.as_str(),
            "http://localhost:3000/clear_session"
        );
    }
}
