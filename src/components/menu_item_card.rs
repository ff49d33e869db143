//! Menu Item Card Component

use leptos::prelude::*;

use crate::context::use_menu_context;
use crate::menu_view::ItemCard;

/// A single dish with its favorite toggle
#[component]
pub fn MenuItemCard(card: ItemCard) -> impl IntoView {
    let ctx = use_menu_context();

    let favorited = card.favorited;
    let dish_name = card.name.clone();
    let calories = card.calories_label();
    let flags = card.dietary_flags;

    view! {
        <div class="menu-item">
            <div class="d-flex justify-content-between align-items-start">
                <h4>{card.name}</h4>
                <button
                    class=if favorited { "btn btn-link favorite-btn favorited" } else { "btn btn-link favorite-btn" }
                    title=if favorited { "Remove from favorites" } else { "Add to favorites" }
                    on:click=move |_| ctx.toggle_favorite(dish_name.clone())
                >
                    <i class=if favorited { "fas fa-heart text-danger" } else { "far fa-heart" }></i>
                </button>
            </div>
            {card.description.map(|text| view! { <p>{text}</p> })}
            {(!flags.is_empty()).then(|| view! {
                <div class="dietary-flags">
                    {flags.into_iter().map(|flag| view! { <span class="dietary-badge">{flag}</span> }).collect_view()}
                </div>
            })}
            {calories.map(|label| view! { <div class="nutrition-info">{label}</div> })}
        </div>
    }
}
