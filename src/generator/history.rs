use std::collections::{HashMap, VecDeque};

use crate::generator::constants::{FATIGUE_WINDOW, MENU_HISTORY_CAP};
use crate::models::MealSlot;

/// Rolling per-slot record of recently served menu items.
///
/// Owned by the dataset builder and consulted by the attendance model to
/// detect repetition. Each slot keeps at most the last 7 served items;
/// fatigue only looks at the last 3.
#[derive(Debug, Default)]
pub struct MenuHistory {
    served: HashMap<MealSlot, VecDeque<String>>,
}

impl MenuHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `item` was served within the fatigue window of `slot`.
    ///
    /// Checked before the current serving is recorded, so an item never
    /// matches against itself.
    pub fn is_recent_repeat(&self, slot: MealSlot, item: &str) -> bool {
        self.served
            .get(&slot)
            .map(|items| items.iter().rev().take(FATIGUE_WINDOW).any(|m| m == item))
            .unwrap_or(false)
    }

    /// Record a serving, evicting the oldest entry past the cap.
    pub fn record(&mut self, slot: MealSlot, item: &str) {
        let items = self.served.entry(slot).or_default();
        items.push_back(item.to_string());
        if items.len() > MENU_HISTORY_CAP {
            items.pop_front();
        }
    }

    /// Number of retained entries for a slot.
    pub fn len(&self, slot: MealSlot) -> usize {
        self.served.get(&slot).map(VecDeque::len).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_history_never_repeats() {
        let history = MenuHistory::new();
        assert!(!history.is_recent_repeat(MealSlot::Lunch, "Biryani"));
    }

    #[test]
    fn test_repeat_within_window() {
        let mut history = MenuHistory::new();
        history.record(MealSlot::Lunch, "Biryani");
        history.record(MealSlot::Lunch, "Pulao");

        assert!(history.is_recent_repeat(MealSlot::Lunch, "Biryani"));
        // Other slots are independent
        assert!(!history.is_recent_repeat(MealSlot::Dinner, "Biryani"));
    }

    #[test]
    fn test_repeat_ages_out_of_window() {
        let mut history = MenuHistory::new();
        history.record(MealSlot::Lunch, "Biryani");
        history.record(MealSlot::Lunch, "Pulao");
        history.record(MealSlot::Lunch, "Fried Rice");
        history.record(MealSlot::Lunch, "Rice-Sambar");

        // Biryani is now 4 servings back, outside the last-3 window
        assert!(!history.is_recent_repeat(MealSlot::Lunch, "Biryani"));
        assert!(history.is_recent_repeat(MealSlot::Lunch, "Pulao"));
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let mut history = MenuHistory::new();
        for i in 0..10 {
            history.record(MealSlot::Breakfast, &format!("Item-{i}"));
        }
        assert_eq!(history.len(MealSlot::Breakfast), MENU_HISTORY_CAP);
    }
}
