//! Menu Commands
//!
//! `GET /api/menu/current?dining_hall=..&date=YYYY-MM-DD`

use async_trait::async_trait;
use chrono::NaiveDate;

use super::{read_envelope, ApiClient, Envelope, MenuSource};
use crate::error::{MenuError, Result};
use crate::models::MenuSnapshot;

pub const MENU_PATH: &str = "/api/menu/current";

fn into_snapshot(envelope: Envelope) -> Result<MenuSnapshot> {
    envelope
        .menu
        .ok_or_else(|| MenuError::Malformed("response has no menu".to_string()))
}

#[async_trait(?Send)]
impl MenuSource for ApiClient {
    async fn fetch_menu(&self, hall: &str, date: NaiveDate) -> Result<MenuSnapshot> {
        let date = date.format("%Y-%m-%d").to_string();
        log::debug!("[API] GET {} hall={} date={}", MENU_PATH, hall, date);

        let response = self
            .client
            .get(self.url(MENU_PATH))
            .query(&[("dining_hall", hall), ("date", date.as_str())])
            .send()
            .await?;
        into_snapshot(read_envelope(response).await?)
    }
}
