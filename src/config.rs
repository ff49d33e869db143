//! Application Configuration
//!
//! Defaults match the deployed site. A page may override any field by
//! defining `window.DINING_MENU_CONFIG` before the bundle loads.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Global the page template may define with overrides
pub const CONFIG_GLOBAL: &str = "DINING_MENU_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix for `/api/...` paths. Empty means the page origin.
    pub api_base: String,
    pub dining_halls: Vec<String>,
    pub default_hall: String,
    /// Period buttons shown next to "All"
    pub meal_periods: Vec<String>,
    /// Dietary checkboxes; values must match the server's flag labels
    pub dietary_filters: Vec<String>,
    pub search_debounce_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            dining_halls: vec!["Dana".into(), "Foss".into(), "Roberts".into()],
            default_hall: "Dana".into(),
            meal_periods: vec![
                "Breakfast".into(),
                "Lunch".into(),
                "Lunch Lite".into(),
                "Dinner".into(),
                "Dinner Lite".into(),
            ],
            dietary_filters: vec![
                "Vegan".into(),
                "Vegetarian".into(),
                "Made without Gluten-Containing Ingredients".into(),
                "Halal".into(),
            ],
            search_debounce_ms: 300,
        }
    }
}

impl AppConfig {
    /// Overlay a JSON document on the defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read overrides from the page, falling back to defaults
    pub fn from_page() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let mut config = match js_sys::Reflect::get(&window, &CONFIG_GLOBAL.into()) {
            Ok(value) if !value.is_undefined() && !value.is_null() => {
                serde_wasm_bindgen::from_value(value).unwrap_or_else(|e| {
                    log::warn!("[CONFIG] ignoring {}: {}", CONFIG_GLOBAL, e);
                    Self::default()
                })
            }
            _ => Self::default(),
        };
        if config.api_base.is_empty() {
            // reqwest needs absolute URLs, even in the browser.
            config.api_base = window.location().origin().unwrap_or_default();
        }
        config
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }
}
