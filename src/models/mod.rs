pub mod context;
pub mod record;

pub use context::DayContext;
pub use record::{MealRecord, MealSlot, Weather};
