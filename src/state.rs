// src/state.rs

/// Session token held by one widget instance. Lives only as long as the
/// widget; nothing here is persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    token: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Overwrite the held token with one returned by the backend.
    pub fn adopt(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Drop the token, returning whatever was held.
    pub fn clear(&mut self) -> Option<String> {
        self.token.take()
    }
}
