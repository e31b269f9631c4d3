use std::collections::HashMap;

use chrono::Weekday;

use crate::error::{MessError, Result};
use crate::generator::constants::DEFAULT_POPULARITY;
use crate::models::MealSlot;

/// Weekly rotation: one (breakfast, lunch, dinner) triple per weekday.
const WEEKLY_MENU: [(Weekday, [&str; 3]); 7] = [
    (Weekday::Mon, ["Idli-Sambar", "Rice-Dal-Sabzi", "Roti-Dal"]),
    (Weekday::Tue, ["Poha", "Roti-Paneer", "Rice-Rajma"]),
    (Weekday::Wed, ["Upma", "Rice-Sambar", "Paratha-Paneer"]),
    (Weekday::Thu, ["Dosa", "Biryani", "Rice-Curd-Pickle"]),
    (Weekday::Fri, ["Paratha-Curry", "Chole-Bhature", "Noodles"]),
    (Weekday::Sat, ["Bread-Omelette", "Fried Rice", "Roti-Paneer"]),
    (Weekday::Sun, ["Puri-Bhaji", "Rice-Chicken", "Khichdi"]),
];

/// Popularity scores on a 1-5 scale.
const POPULARITY: [(&str, f64); 21] = [
    ("Biryani", 4.8),
    ("Chole-Bhature", 4.5),
    ("Dosa", 4.6),
    ("Rice-Chicken", 4.7),
    ("Puri-Bhaji", 4.3),
    ("Fried Rice", 4.2),
    ("Roti-Paneer", 4.0),
    ("Paratha-Paneer", 4.1),
    ("Noodles", 4.2),
    ("Idli-Sambar", 3.9),
    ("Poha", 3.7),
    ("Upma", 3.5),
    ("Rice-Dal-Sabzi", 3.4),
    ("Roti-Dal", 3.3),
    ("Rice-Rajma", 3.8),
    ("Rice-Sambar", 3.6),
    ("Rice-Curd-Pickle", 3.2),
    ("Khichdi", 3.0),
    ("Bread-Omelette", 3.9),
    ("Paratha-Curry", 3.7),
    ("Pulao", 4.0),
];

/// Fixed weekly menu rotation plus per-item popularity scores.
///
/// Both tables are immutable after construction. The weekly table is total:
/// every weekday/slot pair resolves to exactly one item.
pub struct MenuSchedule {
    weekly: HashMap<(Weekday, MealSlot), &'static str>,
    popularity: HashMap<&'static str, f64>,
}

impl MenuSchedule {
    pub fn new() -> Self {
        let mut weekly = HashMap::new();
        for (weekday, items) in WEEKLY_MENU {
            for (slot, item) in MealSlot::ALL.into_iter().zip(items) {
                weekly.insert((weekday, slot), item);
            }
        }
        debug_assert_eq!(weekly.len(), 21, "weekly menu must cover every weekday/slot pair");

        let popularity = POPULARITY.into_iter().collect();

        Self { weekly, popularity }
    }

    /// Get the scheduled item for a weekday and meal slot.
    ///
    /// A miss means the rotation table lost an entry, which is a programming
    /// error; callers treat it as fatal.
    pub fn get_menu(&self, weekday: Weekday, slot: MealSlot) -> Result<&'static str> {
        self.weekly
            .get(&(weekday, slot))
            .copied()
            .ok_or_else(|| MessError::MenuNotFound {
                weekday: weekday.to_string(),
                slot: slot.to_string(),
            })
    }

    /// Popularity score for an item, 3.5 for anything not in the table.
    pub fn get_popularity(&self, item: &str) -> f64 {
        self.popularity.get(item).copied().unwrap_or(DEFAULT_POPULARITY)
    }
}

impl Default for MenuSchedule {
    fn default() -> Self {
        Self::new()
    }
}
