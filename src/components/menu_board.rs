//! Menu Board Component
//!
//! Shows exactly one of: loading spinner, error region, or the menu
//! container. The container is rebuilt from scratch on every screen change.

use leptos::prelude::*;

use crate::components::MenuItemCard;
use crate::menu_view::{MealSection, MenuView, NO_RESULTS_TEXT};
use crate::store::{use_menu_store, Screen, UiStateStoreFields};

/// One meal period with its station groups
#[component]
fn MealSectionView(section: MealSection) -> impl IntoView {
    view! {
        <div class="meal-section">
            <h2>{section.period}</h2>
            {section.stations.into_iter().map(|station| view! {
                <div class="station-section">
                    <h3>{station.name}</h3>
                    <div class="menu-items-grid">
                        {station.items.into_iter().map(|card| view! { <MenuItemCard card=card /> }).collect_view()}
                    </div>
                </div>
            }).collect_view()}
        </div>
    }
}

#[component]
pub fn MenuBoard() -> impl IntoView {
    let store = use_menu_store();

    view! {
        <div class="menu-board">
            {move || match store.screen().get() {
                Screen::Loading => view! {
                    <div id="loading-spinner" class="text-center my-4">
                        <div class="spinner-border" role="status"></div>
                        <span class="ms-2">"Loading menu..."</span>
                    </div>
                }.into_any(),
                Screen::Error(message) => view! {
                    <div id="error-message" class="alert alert-danger">{message}</div>
                }.into_any(),
                Screen::Menu(MenuView::NoResults) => view! {
                    <div id="menu-container">
                        <div class="no-results">{NO_RESULTS_TEXT}</div>
                    </div>
                }.into_any(),
                Screen::Menu(MenuView::Sections(sections)) => view! {
                    <div id="menu-container">
                        {sections.into_iter().map(|section| view! { <MealSectionView section=section /> }).collect_view()}
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
