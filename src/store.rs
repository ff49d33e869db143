//! UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The controller
//! owns filtering; the store only mirrors what the page needs to draw:
//! which buttons are active and what the board currently shows.

use chrono::NaiveDate;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::AppConfig;
use crate::controller::MenuSurface;
use crate::filter::MealPeriod;
use crate::menu_view::MenuView;

/// What the menu board shows. Exactly one region is visible at a time.
#[derive(Clone, Debug, PartialEq)]
pub enum Screen {
    Loading,
    Error(String),
    Menu(MenuView),
}

#[derive(Clone, Debug, Store)]
pub struct UiState {
    pub selected_hall: String,
    pub selected_date: NaiveDate,
    pub selected_period: MealPeriod,
    pub screen: Screen,
}

impl UiState {
    pub fn new(config: &AppConfig, today: NaiveDate) -> Self {
        Self {
            selected_hall: config.default_hall.clone(),
            selected_date: today,
            selected_period: MealPeriod::All,
            screen: Screen::Loading,
        }
    }
}

/// Type alias for the store
pub type MenuStore = Store<UiState>;

/// Get the menu store from context
pub fn use_menu_store() -> MenuStore {
    expect_context::<MenuStore>()
}

/// Render regions backed by the store's `screen` field
pub struct StoreSurface {
    store: MenuStore,
}

impl StoreSurface {
    pub fn new(store: MenuStore) -> Self {
        Self { store }
    }
}

impl MenuSurface for StoreSurface {
    fn show_loading(&self) {
        self.store.screen().set(Screen::Loading);
    }

    fn show_error(&self, message: &str) {
        self.store.screen().set(Screen::Error(message.to_string()));
    }

    fn show_menu(&self, view: &MenuView) {
        self.store.screen().set(Screen::Menu(view.clone()));
    }
}
