use chrono::Weekday;

use crate::models::MealSlot;

/// Popularity score assumed for items missing from the popularity table.
pub const DEFAULT_POPULARITY: f64 = 3.5;

/// Divisor scaling the popularity deviation into a rate boost.
pub const POPULARITY_BOOST_SCALE: f64 = 5.0;

/// Attendance multipliers for situational conditions, applied in the
/// order exam, festival, rainy, start-semester, end-semester.
pub const EXAM_MULT: f64 = 0.90;
pub const FESTIVAL_MULT: f64 = 0.40;
pub const RAINY_MULT: f64 = 1.10;
pub const START_SEMESTER_MULT: f64 = 0.95;
pub const END_SEMESTER_MULT: f64 = 0.85;

/// Rate penalty when a menu item repeats within the fatigue window.
pub const FATIGUE_MULT: f64 = 0.92;

/// How many recently served items count toward menu fatigue.
pub const FATIGUE_WINDOW: usize = 3;

/// Maximum entries retained per meal slot in the menu history.
pub const MENU_HISTORY_CAP: usize = 7;

/// Upper clamp on the computed attendance rate.
pub const MAX_ATTENDANCE_RATE: f64 = 0.95;

/// Relative standard deviation of the attendance noise model.
pub const ATTENDANCE_NOISE_STD: f64 = 0.08;

// ─────────────────────────────────────────────────────────────────────────────
// Weather model
// ─────────────────────────────────────────────────────────────────────────────

/// Mean daily temperature in °C, by season.
pub const TEMP_MEAN_MONSOON: f64 = 24.0;
pub const TEMP_MEAN_DRY: f64 = 28.0;

/// Standard deviation of the daily temperature draw.
pub const TEMP_STD: f64 = 3.0;

// ─────────────────────────────────────────────────────────────────────────────
// Resource accounting
// ─────────────────────────────────────────────────────────────────────────────

/// Food prepared per attending student, in kg.
pub const FOOD_PER_PERSON_KG: f64 = 0.35;

/// Preparation buffer over the per-person baseline.
pub const PREP_BUFFER: f64 = 1.10;

/// Fraction of the per-person baseline actually eaten, drawn per record.
pub const CONSUMPTION_RATE_MIN: f64 = 0.85;
pub const CONSUMPTION_RATE_MAX: f64 = 0.95;

/// Ingredient cost range in rupees per kg.
pub const COST_PER_KG_MIN: f64 = 80.0;
pub const COST_PER_KG_MAX: f64 = 150.0;

/// Staff on duty per meal.
pub const STAFF_MIN: u32 = 8;
pub const STAFF_MAX: u32 = 12;

/// Serving window length in minutes.
pub const SERVING_MINS_MIN: u32 = 45;
pub const SERVING_MINS_MAX: u32 = 90;

/// Freshness score range feeding the satisfaction blend.
pub const FRESHNESS_MIN: f64 = 3.5;
pub const FRESHNESS_MAX: f64 = 5.0;

/// Satisfaction = popularity × 0.7 + freshness × 0.3.
pub const SATISFACTION_POPULARITY_WEIGHT: f64 = 0.7;
pub const SATISFACTION_FRESHNESS_WEIGHT: f64 = 0.3;

/// Days between progress lines while generating.
pub const PROGRESS_INTERVAL_DAYS: i64 = 30;

/// Base attendance rate by weekday.
pub fn base_attendance_rate(weekday: Weekday) -> f64 {
    match weekday {
        Weekday::Mon => 0.75,
        Weekday::Tue => 0.78,
        Weekday::Wed => 0.76,
        Weekday::Thu => 0.74,
        Weekday::Fri => 0.65,
        Weekday::Sat => 0.55,
        Weekday::Sun => 0.50,
    }
}

/// Meal-slot attendance multiplier.
pub fn meal_multiplier(slot: MealSlot) -> f64 {
    match slot {
        MealSlot::Breakfast => 0.70,
        MealSlot::Lunch => 0.85,
        MealSlot::Dinner => 0.75,
    }
}
