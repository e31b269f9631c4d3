use rand::Rng;
use rand_distr::StandardNormal;

use crate::generator::constants::{TEMP_MEAN_DRY, TEMP_MEAN_MONSOON, TEMP_STD};
use crate::generator::round1;
use crate::models::Weather;

/// Weather weights during the monsoon months.
const MONSOON_WEIGHTS: [(Weather, f64); 3] = [
    (Weather::Rainy, 0.5),
    (Weather::Cloudy, 0.3),
    (Weather::Sunny, 0.2),
];

/// Weather weights outside the monsoon.
const DRY_WEIGHTS: [(Weather, f64); 3] = [
    (Weather::Sunny, 0.6),
    (Weather::Cloudy, 0.3),
    (Weather::Rainy, 0.1),
];

/// Draw the day's weather state and temperature.
///
/// One categorical draw and one normal draw per call, independent across
/// days. The temperature is rounded to one decimal and deliberately not
/// clamped; implausible extremes are accepted simulation noise.
pub fn sample(rng: &mut impl Rng, is_monsoon: bool) -> (Weather, f64) {
    let weights = if is_monsoon {
        &MONSOON_WEIGHTS
    } else {
        &DRY_WEIGHTS
    };
    let weather = pick_weighted(rng, weights);

    let mean = if is_monsoon {
        TEMP_MEAN_MONSOON
    } else {
        TEMP_MEAN_DRY
    };
    let z: f64 = rng.sample(StandardNormal);
    let temperature = round1(mean + TEMP_STD * z);

    (weather, temperature)
}

/// Weighted categorical draw over a fixed table.
fn pick_weighted(rng: &mut impl Rng, weights: &[(Weather, f64)]) -> Weather {
    let total: f64 = weights.iter().map(|(_, w)| w).sum();
    let mut choice = rng.gen_range(0.0..total);

    for (weather, weight) in weights {
        if choice < *weight {
            return *weather;
        }
        choice -= weight;
    }
    weights.last().map(|(w, _)| *w).unwrap_or(Weather::Sunny)
}
