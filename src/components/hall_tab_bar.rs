//! Hall Tab Bar Component
//!
//! Buttons for switching dining halls. Switching always refetches.

use leptos::prelude::*;

use crate::context::use_menu_context;
use crate::store::{use_menu_store, UiStateStoreFields};

#[component]
pub fn HallTabBar(halls: Vec<String>) -> impl IntoView {
    let ctx = use_menu_context();
    let store = use_menu_store();

    view! {
        <div class="btn-group hall-tab-bar" role="group">
            {halls.into_iter().map(|hall| {
                let label = hall.clone();
                let data_hall = hall.clone();
                let active_hall = hall.clone();
                let is_active = move || store.selected_hall().get() == active_hall;
                let tab_class = move || {
                    if is_active() { "btn btn-outline-primary active" } else { "btn btn-outline-primary" }
                };

                view! {
                    <button
                        class=tab_class
                        data-hall=data_hall
                        on:click=move |_| ctx.select_hall(hall.clone())
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
