use chrono::Datelike;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::GenerationConfig;
use crate::error::Result;
use crate::generator::constants::PROGRESS_INTERVAL_DAYS;
use crate::generator::{attendance, calendar, history::MenuHistory, resources, weather};
use crate::menu::MenuSchedule;
use crate::models::{MealRecord, MealSlot};

/// Drives the day-by-day, meal-by-meal generation loop.
///
/// Owns the seeded random stream and the rolling menu history; both are
/// consumed strictly sequentially (weather and temperature per date, then
/// per slot: attendance noise, consumption rate, cost, staff, duration,
/// freshness), so a fixed seed yields an identical record sequence.
pub struct DatasetBuilder {
    config: GenerationConfig,
    schedule: MenuSchedule,
    rng: StdRng,
}

impl DatasetBuilder {
    /// Validates the config up front; generation never starts on a bad one.
    pub fn new(config: GenerationConfig, schedule: MenuSchedule) -> Result<Self> {
        config.validate()?;
        let rng = StdRng::seed_from_u64(config.seed);
        Ok(Self {
            config,
            schedule,
            rng,
        })
    }

    /// Generate the complete record sequence, date-ascending with
    /// breakfast/lunch/dinner in order within each date.
    pub fn build(&mut self) -> Result<Vec<MealRecord>> {
        let mut records = Vec::with_capacity(self.config.days() as usize * MealSlot::ALL.len());
        let mut history = MenuHistory::new();
        let mut generated_days = 0i64;

        for date in self.config.start_date.iter_days() {
            if date > self.config.end_date {
                break;
            }

            let ctx = calendar::classify(date);
            let (day_weather, temperature) = weather::sample(&mut self.rng, ctx.is_monsoon);

            for slot in MealSlot::ALL {
                let menu_item = self.schedule.get_menu(ctx.weekday, slot)?;
                let popularity = self.schedule.get_popularity(menu_item);

                let rate = attendance::computed_rate(
                    &ctx,
                    slot,
                    menu_item,
                    popularity,
                    day_weather,
                    &history,
                );
                let students =
                    attendance::sample_attendance(&mut self.rng, self.config.total_capacity, rate);
                let fields = resources::compute(&mut self.rng, students, popularity);

                records.push(MealRecord {
                    date,
                    year: date.year(),
                    month: ctx.month,
                    day: ctx.day,
                    day_of_week: calendar::weekday_name(ctx.weekday).to_string(),
                    week_of_year: ctx.week_of_year,
                    meal_type: slot,
                    menu_item: menu_item.to_string(),
                    menu_popularity: popularity,
                    weather: day_weather,
                    temperature_c: temperature,
                    is_exam_period: ctx.is_exam,
                    is_festival: ctx.is_festival,
                    is_weekend: ctx.is_weekend,
                    is_start_semester: ctx.is_start_semester,
                    is_end_semester: ctx.is_end_semester,
                    is_monsoon: ctx.is_monsoon,
                    total_capacity: self.config.total_capacity,
                    students_attended: students,
                    attendance_rate: attendance::attendance_rate_pct(
                        students,
                        self.config.total_capacity,
                    ),
                    food_prepared_kg: fields.food_prepared_kg,
                    food_consumed_kg: fields.food_consumed_kg,
                    food_wasted_kg: fields.food_wasted_kg,
                    waste_percentage: fields.waste_percentage,
                    cost_per_kg_rs: fields.cost_per_kg_rs,
                    total_cost_rs: fields.total_cost_rs,
                    waste_cost_rs: fields.waste_cost_rs,
                    staff_count: fields.staff_count,
                    serving_duration_mins: fields.serving_duration_mins,
                    student_satisfaction: fields.student_satisfaction,
                });

                // Recorded after the fatigue check so the current serving
                // never counts against itself
                history.record(slot, menu_item);
            }

            generated_days += 1;
            if generated_days % PROGRESS_INTERVAL_DAYS == 0 {
                println!("Generated {} days...", generated_days);
            }
        }

        Ok(records)
    }
}
