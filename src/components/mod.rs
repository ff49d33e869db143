//! UI Components
//!
//! Reusable Leptos components.

mod hall_tab_bar;
mod filter_bar;
mod menu_board;
mod menu_item_card;

pub use hall_tab_bar::HallTabBar;
pub use filter_bar::FilterBar;
pub use menu_board::MenuBoard;
pub use menu_item_card::MenuItemCard;
