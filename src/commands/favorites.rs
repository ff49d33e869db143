//! Favorites Commands
//!
//! `GET`, `POST` and `DELETE` on `/api/favorites`. Dishes are keyed by name.

use async_trait::async_trait;
use serde::Serialize;

use super::{read_envelope, ApiClient, Envelope, FavoritesSource};
use crate::error::{MenuError, Result};

pub const FAVORITES_PATH: &str = "/api/favorites";

#[derive(Serialize)]
struct DishArgs<'a> {
    dish_name: &'a str,
}

fn into_names(envelope: Envelope) -> Result<Vec<String>> {
    let favorites = envelope
        .favorites
        .ok_or_else(|| MenuError::Malformed("response has no favorites".to_string()))?;
    Ok(favorites.into_iter().map(|f| f.dish_name).collect())
}

#[async_trait(?Send)]
impl FavoritesSource for ApiClient {
    async fn list_favorites(&self) -> Result<Vec<String>> {
        let response = self.client.get(self.url(FAVORITES_PATH)).send().await?;
        into_names(read_envelope(response).await?)
    }

    async fn add_favorite(&self, dish_name: &str) -> Result<()> {
        log::debug!("[API] POST {} dish={}", FAVORITES_PATH, dish_name);
        let response = self
            .client
            .post(self.url(FAVORITES_PATH))
            .json(&DishArgs { dish_name })
            .send()
            .await?;
        read_envelope(response).await.map(|_| ())
    }

    async fn remove_favorite(&self, dish_name: &str) -> Result<()> {
        log::debug!("[API] DELETE {} dish={}", FAVORITES_PATH, dish_name);
        let response = self
            .client
            .delete(self.url(FAVORITES_PATH))
            .json(&DishArgs { dish_name })
            .send()
            .await?;
        read_envelope(response).await.map(|_| ())
    }
}
