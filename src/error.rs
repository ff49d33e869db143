//! Error types for menu and favorites requests

use thiserror::Error;

/// Shown when the server flags a failure without saying why
pub const FALLBACK_MESSAGE: &str = "Failed to load menu data";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MenuError {
    /// Network or HTTP failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// Server answered with a non-success status
    #[error("Server error: {0}")]
    Server(String),

    /// Response body could not be decoded
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl MenuError {
    /// Server-flagged failure, using the server's text when it sent one
    pub fn from_server(message: Option<String>) -> Self {
        match message {
            Some(text) if !text.trim().is_empty() => MenuError::Server(text),
            _ => MenuError::Server(FALLBACK_MESSAGE.to_string()),
        }
    }

    /// Text for the error region
    pub fn user_message(&self) -> String {
        match self {
            MenuError::Server(text) => text.clone(),
            MenuError::Transport(_) => "Failed to load menu. Check your connection.".to_string(),
            MenuError::Malformed(_) => FALLBACK_MESSAGE.to_string(),
        }
    }
}

impl From<reqwest::Error> for MenuError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            MenuError::Malformed(err.to_string())
        } else {
            MenuError::Transport(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;
