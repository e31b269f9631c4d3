use chrono::NaiveDate;
use serde::Serialize;

/// The three meal slots served each day, in serving order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    /// All slots in the fixed generation order.
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
        }
    }
}

impl std::fmt::Display for MealSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categorical weather state for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Weather {
    Sunny,
    Cloudy,
    Rainy,
}

impl Weather {
    pub fn as_str(&self) -> &'static str {
        match self {
            Weather::Sunny => "Sunny",
            Weather::Cloudy => "Cloudy",
            Weather::Rainy => "Rainy",
        }
    }
}

impl std::fmt::Display for Weather {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One output row: a single (date, meal slot) observation.
///
/// Field names and declaration order are the CSV schema consumed by the
/// downstream feature-preparation step. Do not rename or reorder them
/// without updating that step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealRecord {
    pub date: NaiveDate,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub day_of_week: String,
    pub week_of_year: u32,
    pub meal_type: MealSlot,
    pub menu_item: String,
    pub menu_popularity: f64,
    pub weather: Weather,
    pub temperature_c: f64,
    pub is_exam_period: bool,
    pub is_festival: bool,
    pub is_weekend: bool,
    pub is_start_semester: bool,
    pub is_end_semester: bool,
    pub is_monsoon: bool,
    pub total_capacity: u32,
    pub students_attended: u32,
    pub attendance_rate: f64,
    pub food_prepared_kg: f64,
    pub food_consumed_kg: f64,
    pub food_wasted_kg: f64,
    pub waste_percentage: f64,
    pub cost_per_kg_rs: f64,
    pub total_cost_rs: f64,
    pub waste_cost_rs: f64,
    pub staff_count: u32,
    pub serving_duration_mins: u32,
    pub student_satisfaction: f64,
}
