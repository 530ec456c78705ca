// src/services/widget.rs
use tracing::{debug, info, warn};

use crate::{
    message::{ChatRequest, ChatResponse, Message, MessageRole},
    services::transport::ChatTransport,
    state::SessionState,
    view::ChatView,
};

pub const ERROR_PREFIX: &str = "Error: ";
pub const NETWORK_ERROR_PREFIX: &str = "Network error: ";

/// Controller tying a view to a backend. Owns the session token, so each
/// instance is an independent conversation.
pub struct ChatWidget<T, V> {
    transport: T,
    view: V,
    session: SessionState,
    greeting: Option<String>,
    clear_session_on_exit: bool,
}

impl<T: ChatTransport, V: ChatView> ChatWidget<T, V> {
    pub fn new(transport: T, view: V) -> Self {
        Self {
            transport,
            view,
            session: SessionState::new(),
            greeting: None,
            clear_session_on_exit: false,
        }
    }

    pub fn with_greeting(mut self, greeting: Option<String>) -> Self {
        self.greeting = greeting;
        self
    }

    pub fn with_clear_session_on_exit(mut self, enabled: bool) -> Self {
        self.clear_session_on_exit = enabled;
        self
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    pub fn render_message(&mut self, content: impl Into<String>, origin: MessageRole) {
        self.view.render(&Message::new(content, origin));
    }

    /// Render the configured greeting, if any.
    pub fn greet(&mut self) {
        if let Some(greeting) = self.greeting.clone() {
            self.render_message(greeting, MessageRole::Bot);
        }
    }

    /// Send whatever is in the input field. Returns `false` without touching
    /// the view or the network when the trimmed input is empty.
    pub async fn submit(&mut self) -> bool {
        let raw = self.view.input_value();
        let text = raw.trim();
        if text.is_empty() {
            return false;
        }
        let text = text.to_string();

        self.render_message(text.clone(), MessageRole::User);
        self.view.clear_input();
        self.view.set_input_enabled(false);
        self.view.set_busy(true);

        let request = ChatRequest {
            message: text,
            session_id: self.session.token().map(str::to_string),
        };
        debug!(has_session = request.session_id.is_some(), "sending chat message");

        match self.transport.send_chat(&request).await {
            Ok(ChatResponse::Error { error }) => {
                debug!(%error, "backend reported an error");
                self.render_message(format!("{ERROR_PREFIX}{error}"), MessageRole::Bot);
            }
            Ok(ChatResponse::Reply { response, session_id }) => {
                // A blank id means the backend issued no session.
                if let Some(token) = session_id.filter(|t| !t.trim().is_empty()) {
                    self.session.adopt(token);
                }
                self.render_message(response, MessageRole::Bot);
            }
            Err(e) => {
                debug!(error = %e, "chat request failed");
                self.render_message(format!("{NETWORK_ERROR_PREFIX}{e}"), MessageRole::Bot);
            }
        }

        self.view.set_input_enabled(true);
        self.view.set_busy(false);
        self.view.focus_input();
        true
    }

    /// Best-effort server-side invalidation. The local token is dropped
    /// whether or not the request succeeds.
    pub async fn clear_session(&mut self) {
        let Some(token) = self.session.token().map(str::to_string) else {
            return;
        };

        match self.transport.clear_session(&token).await {
            Ok(()) => info!("session cleared"),
            Err(e) => warn!(error = %e, "failed to clear session on server"),
        }

        self.session.clear();
    }

    /// Called when the widget goes away.
    pub async fn shutdown(&mut self) {
        if self.clear_session_on_exit {
            self.clear_session().await;
        }
    }
}
