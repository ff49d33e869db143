//! Filter State and Item Predicates
//!
//! Dietary filters are an AND across the selected flags. Search is a
//! case-insensitive substring match that passes if ANY field contains it.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::models::MenuItem;

/// Meal-period selector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MealPeriod {
    #[default]
    All,
    Named(String),
}

impl MealPeriod {
    /// "all" (any case) selects every period
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("all") {
            MealPeriod::All
        } else {
            MealPeriod::Named(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            MealPeriod::All => "All",
            MealPeriod::Named(name) => name.as_str(),
        }
    }
}

/// What the user asked to see
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub selected_hall: String,
    pub selected_date: NaiveDate,
    pub selected_meal_period: MealPeriod,
    pub dietary_filters: BTreeSet<String>,
    search_term: String,
}

impl FilterState {
    pub fn new(hall: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            selected_hall: hall.into(),
            selected_date: date,
            selected_meal_period: MealPeriod::All,
            dietary_filters: BTreeSet::new(),
            search_term: String::new(),
        }
    }

    /// Lowercased and trimmed
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, raw: &str) {
        self.search_term = raw.trim().to_lowercase();
    }

    pub fn set_dietary_filter(&mut self, flag: &str, enabled: bool) {
        if enabled {
            self.dietary_filters.insert(flag.to_string());
        } else {
            self.dietary_filters.remove(flag);
        }
    }
}

/// Item carries every selected flag (empty selection passes everything)
pub fn passes_dietary(item: &MenuItem, filters: &BTreeSet<String>) -> bool {
    filters.iter().all(|flag| item.has_flag(flag))
}

/// `term` must already be lowercased; an empty term matches everything
pub fn matches_search(item: &MenuItem, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let contains = |field: &str| field.to_lowercase().contains(term);

    contains(&item.name)
        || item.description.as_deref().is_some_and(|field| contains(field))
        || item.station.as_deref().is_some_and(|field| contains(field))
        || item.dietary_flags.iter().any(|flag| contains(flag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Nutrition;

    fn item(name: &str, station: Option<&str>, flags: &[&str]) -> MenuItem {
        MenuItem {
            name: name.to_string(),
            description: None,
            station: station.map(str::to_string),
            dietary_flags: flags.iter().map(|f| f.to_string()).collect(),
            nutrition: Nutrition::default(),
        }
    }

    fn flags(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_dietary_is_and() {
        let salad = item("Salad", None, &["vegan"]);

        assert!(!passes_dietary(&salad, &flags(&["vegan", "gluten-free"])));
        assert!(passes_dietary(&salad, &flags(&["vegan"])));
        assert!(passes_dietary(&salad, &flags(&[])));
    }

    #[test]
    fn test_search_any_field_case_insensitive() {
        let bowl = item("Tofu Bowl", Some("Grill"), &[]);

        assert!(matches_search(&bowl, "grill"));
        assert!(matches_search(&bowl, "tofu"));
        assert!(!matches_search(&bowl, "sushi"));
    }

    #[test]
    fn test_search_covers_description_and_flags() {
        let mut soup = item("Soup", None, &["Vegetarian"]);
        soup.description = Some("Roasted Tomato".to_string());

        assert!(matches_search(&soup, "tomato"));
        assert!(matches_search(&soup, "vegetar"));
        assert!(matches_search(&soup, ""));
    }

    #[test]
    fn test_search_term_is_normalized() {
        let mut state = FilterState::new("Dana", NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        state.set_search_term("  TOFU ");
        assert_eq!(state.search_term(), "tofu");
    }

    #[test]
    fn test_toggle_dietary_filter() {
        let mut state = FilterState::new("Dana", NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        state.set_dietary_filter("vegan", true);
        state.set_dietary_filter("halal", true);
        state.set_dietary_filter("vegan", false);
        assert_eq!(state.dietary_filters, flags(&["halal"]));
    }

    #[test]
    fn test_meal_period_labels() {
        assert_eq!(MealPeriod::from_label("all"), MealPeriod::All);
        assert_eq!(MealPeriod::from_label("Lunch"), MealPeriod::Named("Lunch".into()));
        assert_eq!(MealPeriod::All.label(), "All");
    }
}
