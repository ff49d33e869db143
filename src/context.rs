//! Menu Context
//!
//! Shared handle provided via Leptos Context API. Components call these
//! methods from event handlers; async work is spawned on the UI thread.

use std::rc::Rc;

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_debounce::{Debouncer, TimeoutScheduler};

use crate::controller::MenuController;
use crate::filter::MealPeriod;
use crate::store::{MenuStore, UiStateStoreFields};

#[derive(Clone, Copy)]
pub struct MenuContext {
    store: MenuStore,
    controller: StoredValue<Rc<MenuController>, LocalStorage>,
    search: StoredValue<Debouncer<String, TimeoutScheduler>, LocalStorage>,
}

impl MenuContext {
    pub fn new(
        store: MenuStore,
        controller: Rc<MenuController>,
        search: Debouncer<String, TimeoutScheduler>,
    ) -> Self {
        Self {
            store,
            controller: StoredValue::new_local(controller),
            search: StoredValue::new_local(search),
        }
    }

    fn controller(&self) -> Rc<MenuController> {
        self.controller.get_value()
    }

    /// Load favorites and the first menu
    pub fn init(&self) {
        let controller = self.controller();
        spawn_local(async move { controller.init().await });
    }

    pub fn select_hall(&self, hall: String) {
        self.store.selected_hall().set(hall.clone());
        let controller = self.controller();
        spawn_local(async move { controller.select_hall(&hall).await });
    }

    pub fn select_date(&self, date: NaiveDate) {
        self.store.selected_date().set(date);
        let controller = self.controller();
        spawn_local(async move { controller.select_date(date).await });
    }

    pub fn select_meal_period(&self, period: MealPeriod) {
        self.store.selected_period().set(period.clone());
        self.controller().select_meal_period(period);
    }

    pub fn set_dietary_filter(&self, flag: &str, enabled: bool) {
        self.controller().set_dietary_filter(flag, enabled);
    }

    /// Raw keystroke value; filtering happens once typing pauses
    pub fn search(&self, raw: String) {
        self.search.with_value(|search| search.call(raw));
    }

    pub fn toggle_favorite(&self, dish_name: String) {
        let controller = self.controller();
        spawn_local(async move { controller.toggle_favorite(&dish_name).await });
    }
}

pub fn use_menu_context() -> MenuContext {
    expect_context::<MenuContext>()
}
