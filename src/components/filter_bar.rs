//! Filter Bar Component
//!
//! Date picker, meal-period buttons, dietary checkboxes and the search box.
//! Only the date picker refetches; the rest filter the loaded menu.

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::components::HallTabBar;
use crate::config::AppConfig;
use crate::context::use_menu_context;
use crate::filter::MealPeriod;
use crate::store::{use_menu_store, UiStateStoreFields};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Meal period buttons ("All" first, even if the page config lists it)
#[component]
fn PeriodButtons(periods: Vec<String>) -> impl IntoView {
    let ctx = use_menu_context();
    let store = use_menu_store();

    let options: Vec<MealPeriod> = std::iter::once(MealPeriod::All)
        .chain(
            periods
                .iter()
                .map(|label| MealPeriod::from_label(label))
                .filter(|period| *period != MealPeriod::All),
        )
        .collect();

    view! {
        <div class="btn-group period-buttons" role="group">
            {options.into_iter().map(|period| {
                let label = period.label().to_string();
                let current = period.clone();
                let button_class = move || {
                    if store.selected_period().get() == current {
                        "btn btn-outline-secondary active"
                    } else {
                        "btn btn-outline-secondary"
                    }
                };

                view! {
                    <button
                        class=button_class
                        on:click=move |_| ctx.select_meal_period(period.clone())
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Dietary checkboxes; checking several requires all of them
#[component]
fn DietaryFilters(flags: Vec<String>) -> impl IntoView {
    let ctx = use_menu_context();

    view! {
        <div class="dietary-filters">
            {flags.into_iter().map(|flag| {
                let label = flag.clone();
                let value = flag.clone();
                view! {
                    <label class="form-check form-check-inline">
                        <input
                            type="checkbox"
                            class="form-check-input dietary-filter"
                            value=value
                            on:change=move |ev| ctx.set_dietary_filter(&flag, event_target_checked(&ev))
                        />
                        <span class="form-check-label">{label}</span>
                    </label>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
pub fn FilterBar() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let ctx = use_menu_context();
    let store = use_menu_store();

    let on_date_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        match NaiveDate::parse_from_str(&value, DATE_FORMAT) {
            Ok(date) => ctx.select_date(date),
            Err(e) => log::warn!("[FilterBar] Ignoring date {:?}: {}", value, e),
        }
    };

    view! {
        <div class="menu-filters">
            <HallTabBar halls=config.dining_halls.clone() />

            <input
                type="date"
                id="date-picker"
                class="form-control"
                prop:value=move || store.selected_date().get().format(DATE_FORMAT).to_string()
                on:change=on_date_change
            />

            <PeriodButtons periods=config.meal_periods.clone() />
            <DietaryFilters flags=config.dietary_filters.clone() />

            <input
                type="search"
                id="menu-search"
                class="form-control"
                placeholder="Search dishes, stations, dietary tags..."
                autocomplete="off"
                on:input=move |ev| ctx.search(event_target_value(&ev))
            />
        </div>
    }
}
