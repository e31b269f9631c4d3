use rand::Rng;
use rand_distr::StandardNormal;

use crate::generator::constants::*;
use crate::generator::history::MenuHistory;
use crate::generator::round2;
use crate::models::{DayContext, MealSlot, Weather};

/// Compose the expected attendance rate for one meal.
///
/// Starts from the weekday base rate and the meal-slot multiplier, then
/// applies each situational multiplier whose condition holds (exam,
/// festival, rain, semester boundaries — exam and end-semester can fire
/// together), the popularity boost, and the menu-fatigue penalty. The
/// result is clamped to at most 0.95; there is no lower clamp.
pub fn computed_rate(
    ctx: &DayContext,
    slot: MealSlot,
    menu_item: &str,
    popularity: f64,
    weather: Weather,
    history: &MenuHistory,
) -> f64 {
    let mut rate = base_attendance_rate(ctx.weekday) * meal_multiplier(slot);

    if ctx.is_exam {
        rate *= EXAM_MULT;
    }
    if ctx.is_festival {
        rate *= FESTIVAL_MULT;
    }
    if weather == Weather::Rainy {
        rate *= RAINY_MULT;
    }
    if ctx.is_start_semester {
        rate *= START_SEMESTER_MULT;
    }
    if ctx.is_end_semester {
        rate *= END_SEMESTER_MULT;
    }

    rate *= 1.0 + (popularity - DEFAULT_POPULARITY) / POPULARITY_BOOST_SCALE;

    if history.is_recent_repeat(slot, menu_item) {
        rate *= FATIGUE_MULT;
    }

    rate.min(MAX_ATTENDANCE_RATE)
}

/// Sample the actual headcount from the computed rate.
///
/// Expected count is floor(capacity × rate); the realized count adds 8%
/// multiplicative noise and is floored at zero. No upper clamp: overshoot
/// past capacity is left in the data.
pub fn sample_attendance(rng: &mut impl Rng, total_capacity: u32, rate: f64) -> u32 {
    let expected = (total_capacity as f64 * rate).floor();
    let z: f64 = rng.sample(StandardNormal);
    let actual = expected + expected * ATTENDANCE_NOISE_STD * z;
    actual.round().max(0.0) as u32
}

/// Attendance rate as persisted in the record: derived from the sampled
/// headcount, not the pre-sampling computed rate.
pub fn attendance_rate_pct(students: u32, total_capacity: u32) -> f64 {
    round2(students as f64 / total_capacity as f64 * 100.0)
}
