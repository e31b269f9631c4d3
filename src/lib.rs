pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod menu;
pub mod models;
pub mod report;

pub use config::GenerationConfig;
pub use error::{MessError, Result};
pub use models::{DayContext, MealRecord, MealSlot, Weather};
