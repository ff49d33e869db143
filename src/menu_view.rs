//! Menu View Builder
//!
//! Turns a snapshot plus the current filters into the grouped structure the
//! menu board renders: meal periods → stations → item cards.

use std::collections::HashSet;

use crate::filter::{matches_search, passes_dietary, FilterState, MealPeriod};
use crate::models::{MenuItem, MenuSnapshot};

pub const NO_RESULTS_TEXT: &str = "No menu items found matching your criteria";

#[derive(Debug, Clone, PartialEq)]
pub enum MenuView {
    /// Every item was filtered out
    NoResults,
    Sections(Vec<MealSection>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MealSection {
    pub period: String,
    pub stations: Vec<StationGroup>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StationGroup {
    pub name: String,
    pub items: Vec<ItemCard>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemCard {
    pub name: String,
    pub description: Option<String>,
    pub dietary_flags: Vec<String>,
    /// Only set for a positive calorie count
    pub calories: Option<f64>,
    pub favorited: bool,
}

impl ItemCard {
    fn new(item: &MenuItem, favorites: &HashSet<String>) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            dietary_flags: item.dietary_flags.clone(),
            calories: item.nutrition.calories.filter(|kcal| *kcal > 0.0),
            favorited: favorites.contains(&item.name),
        }
    }

    pub fn calories_label(&self) -> Option<String> {
        self.calories.map(|kcal| {
            if kcal.fract() == 0.0 {
                format!("{} calories", kcal as i64)
            } else {
                format!("{:.1} calories", kcal)
            }
        })
    }
}

impl MenuView {
    pub fn sections(&self) -> &[MealSection] {
        match self {
            MenuView::NoResults => &[],
            MenuView::Sections(sections) => sections.as_slice(),
        }
    }

    pub fn item_count(&self) -> usize {
        self.sections()
            .iter()
            .flat_map(|section| &section.stations)
            .map(|station| station.items.len())
            .sum()
    }
}

/// Build the view for `filters`. Pure: equal inputs give an equal view.
pub fn build_view(snapshot: &MenuSnapshot, filters: &FilterState, favorites: &HashSet<String>) -> MenuView {
    let selected: Vec<&str> = match &filters.selected_meal_period {
        MealPeriod::All => snapshot.periods().map(|(name, _)| name).collect(),
        MealPeriod::Named(name) => vec![name.as_str()],
    };

    let sections: Vec<MealSection> = selected
        .into_iter()
        .filter_map(|period| {
            let items = snapshot.period(period)?;
            // Dietary first, then search.
            let kept: Vec<&MenuItem> = items
                .iter()
                .filter(|item| passes_dietary(item, &filters.dietary_filters))
                .filter(|item| matches_search(item, filters.search_term()))
                .collect();
            if kept.is_empty() {
                return None;
            }
            Some(MealSection {
                period: period.to_string(),
                stations: group_by_station(&kept, favorites),
            })
        })
        .collect();

    if sections.is_empty() {
        MenuView::NoResults
    } else {
        MenuView::Sections(sections)
    }
}

/// Stations in first-seen order, items in server order within each
fn group_by_station(items: &[&MenuItem], favorites: &HashSet<String>) -> Vec<StationGroup> {
    let mut groups: Vec<StationGroup> = Vec::new();
    for item in items {
        let station = item.station_or_fallback();
        let card = ItemCard::new(item, favorites);
        match groups.iter_mut().find(|group| group.name == station) {
            Some(group) => group.items.push(card),
            None => groups.push(StationGroup {
                name: station.to_string(),
                items: vec![card],
            }),
        }
    }
    groups
}
