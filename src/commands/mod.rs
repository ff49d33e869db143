//! REST Endpoint Wrappers
//!
//! Frontend bindings to the dining server, organized by endpoint.
//! The controller only sees the `MenuSource` and `FavoritesSource` traits.

mod favorites;
mod menu;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::config::AppConfig;
use crate::error::{MenuError, Result};
use crate::models::{FavoriteDish, MenuSnapshot};

/// Menu Data Service
#[async_trait(?Send)]
pub trait MenuSource {
    async fn fetch_menu(&self, hall: &str, date: NaiveDate) -> Result<MenuSnapshot>;
}

/// Favorites Service
#[async_trait(?Send)]
pub trait FavoritesSource {
    async fn list_favorites(&self) -> Result<Vec<String>>;
    async fn add_favorite(&self, dish_name: &str) -> Result<()>;
    async fn remove_favorite(&self, dish_name: &str) -> Result<()>;
}

/// HTTP client for both services
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    config: AppConfig,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config: config.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }
}

// ========================
// Response Envelope
// ========================

/// Every endpoint answers `{status, error?, ...payload}`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Envelope {
    status: Option<String>,
    error: Option<String>,
    menu: Option<MenuSnapshot>,
    favorites: Option<Vec<FavoriteDish>>,
}

impl Envelope {
    fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }

    /// Non-success envelopes become `MenuError::Server`
    fn check(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(MenuError::from_server(self.error))
        }
    }
}

/// Decode a response body. The server reports most failures as HTTP 200
/// with an `error` field, so the body is read whatever the status.
fn parse_envelope(status: StatusCode, body: &str) -> Result<Envelope> {
    match serde_json::from_str::<Envelope>(body) {
        Ok(envelope) => envelope.check(),
        Err(_) if !status.is_success() => Err(MenuError::Transport(format!("HTTP {}", status))),
        Err(e) => Err(MenuError::Malformed(e.to_string())),
    }
}

async fn read_envelope(response: reqwest::Response) -> Result<Envelope> {
    let status = response.status();
    let body = response.text().await?;
    parse_envelope(status, &body)
}
