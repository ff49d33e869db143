//! Menu Controller
//!
//! Single authority for which menu is on screen and how it is filtered.
//! Only `load_menu` touches the network for menu data; every other filter
//! change rebuilds the view from the snapshot already held.
//!
//! The controller is shared through `Rc` on the UI thread. Interior state is
//! never borrowed across an `.await`.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use std::time::Duration;

use chrono::NaiveDate;
use wasm_debounce::{Debouncer, Scheduler};

use crate::commands::{FavoritesSource, MenuSource};
use crate::filter::{FilterState, MealPeriod};
use crate::menu_view::{build_view, MenuView};
use crate::models::MenuSnapshot;

pub const NO_MENU_DATA: &str = "No menu data available";

/// The three render regions: menu container, loading indicator, error region.
///
/// Each call replaces whatever the regions showed before.
pub trait MenuSurface {
    /// Spinner on; content and error hidden
    fn show_loading(&self);
    /// Error text shown; spinner and content hidden
    fn show_error(&self, message: &str);
    /// Content rebuilt from `view`; spinner and error hidden
    fn show_menu(&self, view: &MenuView);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Loading,
    Ready,
    Error,
}

struct State {
    filters: FilterState,
    snapshot: Option<MenuSnapshot>,
    favorites: HashSet<String>,
    phase: Phase,
    /// Id of the newest `load_menu` call; older responses are dropped
    latest_request: u64,
}

pub struct MenuController {
    menu: Rc<dyn MenuSource>,
    favorites: Rc<dyn FavoritesSource>,
    surface: Rc<dyn MenuSurface>,
    state: RefCell<State>,
}

impl MenuController {
    pub fn new(
        menu: Rc<dyn MenuSource>,
        favorites: Rc<dyn FavoritesSource>,
        surface: Rc<dyn MenuSurface>,
        filters: FilterState,
    ) -> Self {
        Self {
            menu,
            favorites,
            surface,
            state: RefCell::new(State {
                filters,
                snapshot: None,
                favorites: HashSet::new(),
                phase: Phase::Uninitialized,
                latest_request: 0,
            }),
        }
    }

    pub fn phase(&self) -> Phase {
        self.state.borrow().phase
    }

    pub fn filters(&self) -> FilterState {
        self.state.borrow().filters.clone()
    }

    pub fn is_favorite(&self, dish_name: &str) -> bool {
        self.state.borrow().favorites.contains(dish_name)
    }

    /// Load favorites, then the first menu. A favorites failure is not fatal.
    pub async fn init(&self) {
        let favorites = match self.favorites.list_favorites().await {
            Ok(names) => names.into_iter().collect(),
            Err(e) => {
                log::warn!("[MENU] Could not load favorites, continuing without: {}", e);
                HashSet::new()
            }
        };
        log::debug!("[MENU] {} favorites cached", favorites.len());
        self.state.borrow_mut().favorites = favorites;
        self.load_menu().await;
    }

    /// Fetch the menu for the selected hall and date
    pub async fn load_menu(&self) {
        let (request_id, hall, date) = {
            let mut state = self.state.borrow_mut();
            state.latest_request += 1;
            state.phase = Phase::Loading;
            (
                state.latest_request,
                state.filters.selected_hall.clone(),
                state.filters.selected_date,
            )
        };
        self.surface.show_loading();
        log::info!("[MENU] Loading {} on {} (request {})", hall, date, request_id);

        let result = self.menu.fetch_menu(&hall, date).await;

        if self.state.borrow().latest_request != request_id {
            log::debug!("[MENU] Dropping stale response for request {}", request_id);
            return;
        }

        match result {
            Ok(snapshot) => {
                log::info!("[MENU] Loaded {} items for {}", snapshot.item_count(), hall);
                {
                    let mut state = self.state.borrow_mut();
                    state.snapshot = Some(snapshot);
                    state.phase = Phase::Ready;
                }
                self.filter_current_menu();
            }
            Err(e) => {
                log::error!("[MENU] Error loading menu for {} on {}: {}", hall, date, e);
                {
                    let mut state = self.state.borrow_mut();
                    state.snapshot = None;
                    state.phase = Phase::Error;
                }
                self.surface.show_error(&e.user_message());
            }
        }
    }

    /// Rebuild the whole view from the held snapshot.
    ///
    /// Nothing is rendered while a load is in flight; the load renders with
    /// whatever filters are current when it lands.
    pub fn filter_current_menu(&self) {
        let view = {
            let state = self.state.borrow();
            if state.phase == Phase::Loading {
                log::debug!("[MENU] Filter deferred until load completes");
                return;
            }
            state
                .snapshot
                .as_ref()
                .map(|snapshot| build_view(snapshot, &state.filters, &state.favorites))
        };

        match view {
            Some(view) => {
                log::debug!("[MENU] Rendering {} items", view.item_count());
                self.surface.show_menu(&view);
            }
            None => self.surface.show_error(NO_MENU_DATA),
        }
    }

    pub async fn select_hall(&self, hall: &str) {
        self.state.borrow_mut().filters.selected_hall = hall.to_string();
        self.load_menu().await;
    }

    pub async fn select_date(&self, date: NaiveDate) {
        self.state.borrow_mut().filters.selected_date = date;
        self.load_menu().await;
    }

    pub fn select_meal_period(&self, period: MealPeriod) {
        self.state.borrow_mut().filters.selected_meal_period = period;
        self.filter_current_menu();
    }

    pub fn set_dietary_filter(&self, flag: &str, enabled: bool) {
        self.state.borrow_mut().filters.set_dietary_filter(flag, enabled);
        self.filter_current_menu();
    }

    /// Apply a raw search box value. Keystrokes should go through
    /// [`MenuController::search_debouncer`] rather than calling this directly.
    pub fn set_search_term(&self, raw: &str) {
        self.state.borrow_mut().filters.set_search_term(raw);
        self.filter_current_menu();
    }

    /// Add or remove `dish_name` from favorites. The cache only changes once
    /// the server confirms.
    pub async fn toggle_favorite(&self, dish_name: &str) {
        let was_favorite = self.is_favorite(dish_name);
        let result = if was_favorite {
            self.favorites.remove_favorite(dish_name).await
        } else {
            self.favorites.add_favorite(dish_name).await
        };

        match result {
            Ok(()) => {
                {
                    let mut state = self.state.borrow_mut();
                    if was_favorite {
                        state.favorites.remove(dish_name);
                    } else {
                        state.favorites.insert(dish_name.to_string());
                    }
                }
                self.filter_current_menu();
            }
            Err(e) => log::error!("[MENU] Error toggling favorite {}: {}", dish_name, e),
        }
    }

    /// Debounced search input bound to this controller
    pub fn search_debouncer<S: Scheduler>(self: &Rc<Self>, scheduler: S, delay: Duration) -> Debouncer<String, S> {
        let controller = Rc::downgrade(self);
        Debouncer::new(scheduler, delay, move |raw: String| {
            if let Some(controller) = controller.upgrade() {
                controller.set_search_term(&raw);
            }
        })
    }
}
