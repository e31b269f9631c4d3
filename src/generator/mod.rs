pub mod attendance;
pub mod builder;
pub mod calendar;
pub mod constants;
pub mod history;
pub mod resources;
pub mod weather;

pub use builder::DatasetBuilder;
pub use calendar::classify;
pub use history::MenuHistory;
pub use resources::ResourceFields;

/// Round to two decimal places, used for all weight and money fields.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to one decimal place, used for temperatures.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
