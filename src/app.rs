//! Dining Menu App
//!
//! Root component: wires the HTTP services, the store-backed surface and the
//! controller together, then lays out the filter bar above the menu board.

use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;
use wasm_debounce::TimeoutScheduler;

use crate::commands::ApiClient;
use crate::components::{FilterBar, MenuBoard};
use crate::config::AppConfig;
use crate::context::MenuContext;
use crate::controller::MenuController;
use crate::filter::FilterState;
use crate::store::{StoreSurface, UiState};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_page();
    let today = chrono::Utc::now().date_naive();

    let store = Store::new(UiState::new(&config, today));
    let api = Rc::new(ApiClient::new(&config));
    let controller = Rc::new(MenuController::new(
        api.clone(),
        api,
        Rc::new(StoreSurface::new(store)),
        FilterState::new(config.default_hall.clone(), today),
    ));
    let search = controller.search_debouncer(TimeoutScheduler, config.search_debounce());
    let ctx = MenuContext::new(store, controller, search);

    // Provide context to all children
    provide_context(config);
    provide_context(store);
    provide_context(ctx);

    // Load favorites and the first menu on mount
    Effect::new(move |_| ctx.init());

    view! {
        <div class="container menu-page">
            <h1>"Today's Menu"</h1>
            <FilterBar />
            <MenuBoard />
        </div>
    }
}
