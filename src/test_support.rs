//! Test doubles for the controller: scripted services and a recording surface.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::oneshot;

use crate::commands::{FavoritesSource, MenuSource};
use crate::controller::MenuSurface;
use crate::error::{MenuError, Result};
use crate::menu_view::MenuView;
use crate::models::{MenuItem, MenuSnapshot, Nutrition};

pub fn make_item(name: &str, station: Option<&str>, flags: &[&str]) -> MenuItem {
    MenuItem {
        name: name.to_string(),
        description: None,
        station: station.map(str::to_string),
        dietary_flags: flags.iter().map(|f| f.to_string()).collect(),
        nutrition: Nutrition::default(),
    }
}

/// Breakfast: Eggs (Grill). Lunch: Salad (Cold Bar, vegan).
pub fn dana_snapshot() -> MenuSnapshot {
    MenuSnapshot::from_periods(vec![
        ("Breakfast".into(), vec![make_item("Eggs", Some("Grill"), &[])]),
        ("Lunch".into(), vec![make_item("Salad", Some("Cold Bar"), &["vegan"])]),
    ])
}

/// Menu service answering per hall, optionally held until a gate opens
#[derive(Default)]
pub struct FakeMenuSource {
    responses: RefCell<HashMap<String, Result<MenuSnapshot>>>,
    gates: RefCell<HashMap<String, oneshot::Receiver<()>>>,
    calls: RefCell<Vec<(String, NaiveDate)>>,
}

impl FakeMenuSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, hall: &str, response: Result<MenuSnapshot>) {
        self.responses.borrow_mut().insert(hall.to_string(), response);
    }

    /// The next fetch for `hall` waits until the returned sender fires
    pub fn gate(&self, hall: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().insert(hall.to_string(), rx);
        tx
    }

    pub fn calls(&self) -> Vec<(String, NaiveDate)> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl MenuSource for FakeMenuSource {
    async fn fetch_menu(&self, hall: &str, date: NaiveDate) -> Result<MenuSnapshot> {
        self.calls.borrow_mut().push((hall.to_string(), date));
        let gate = self.gates.borrow_mut().remove(hall);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.responses
            .borrow()
            .get(hall)
            .cloned()
            .unwrap_or_else(|| Err(MenuError::Server("Invalid dining hall".to_string())))
    }
}

/// Favorites service with switchable failures
pub struct FakeFavorites {
    names: Vec<String>,
    fail_list: Cell<bool>,
    fail_mutations: Cell<bool>,
    calls: RefCell<Vec<String>>,
}

impl FakeFavorites {
    pub fn new(names: &[&str]) -> Self {
        Self {
            names: names.iter().map(|n| n.to_string()).collect(),
            fail_list: Cell::new(false),
            fail_mutations: Cell::new(false),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn fail_list(&self, fail: bool) {
        self.fail_list.set(fail);
    }

    pub fn fail_mutations(&self, fail: bool) {
        self.fail_mutations.set(fail);
    }

    /// "POST <dish>" / "DELETE <dish>" in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn mutate(&self, method: &str, dish_name: &str) -> Result<()> {
        self.calls.borrow_mut().push(format!("{} {}", method, dish_name));
        if self.fail_mutations.get() {
            Err(MenuError::Transport("connection reset".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait(?Send)]
impl FavoritesSource for FakeFavorites {
    async fn list_favorites(&self) -> Result<Vec<String>> {
        if self.fail_list.get() {
            return Err(MenuError::Server("Not logged in".to_string()));
        }
        Ok(self.names.clone())
    }

    async fn add_favorite(&self, dish_name: &str) -> Result<()> {
        self.mutate("POST", dish_name)
    }

    async fn remove_favorite(&self, dish_name: &str) -> Result<()> {
        self.mutate("DELETE", dish_name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    Loading,
    Error(String),
    Menu(MenuView),
}

/// Records every surface call in order
#[derive(Default)]
pub struct RecordingSurface {
    events: RefCell<Vec<SurfaceEvent>>,
}

impl RecordingSurface {
    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.events.borrow().clone()
    }

    pub fn last(&self) -> Option<SurfaceEvent> {
        self.events.borrow().last().cloned()
    }

    /// Most recent view, if the last call rendered one
    pub fn last_view(&self) -> Option<MenuView> {
        match self.last() {
            Some(SurfaceEvent::Menu(view)) => Some(view),
            _ => None,
        }
    }

    pub fn menu_renders(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| matches!(e, SurfaceEvent::Menu(_)))
            .count()
    }
}

impl MenuSurface for RecordingSurface {
    fn show_loading(&self) {
        self.events.borrow_mut().push(SurfaceEvent::Loading);
    }

    fn show_error(&self, message: &str) {
        self.events.borrow_mut().push(SurfaceEvent::Error(message.to_string()));
    }

    fn show_menu(&self, view: &MenuView) {
        self.events.borrow_mut().push(SurfaceEvent::Menu(view.clone()));
    }
}
