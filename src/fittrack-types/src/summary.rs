use std::fmt::Display;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::WorkoutKind;

/// Computed metrics of a single workout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub training_type: WorkoutKind,
    /// Hours
    pub duration: f64,
    /// Kilometers
    pub distance: f64,
    /// Mean speed in km/h
    pub speed: f64,
    /// Kilocalories
    pub calories: f64,
}

impl Summary {
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Duration as a time span, rounded to the millisecond. Non-finite or
    /// out of range durations map to zero.
    pub fn elapsed(&self) -> TimeDelta {
        if !self.duration.is_finite() {
            return TimeDelta::zero();
        }

        TimeDelta::try_milliseconds((self.duration * 3_600_000.0).round() as i64)
            .unwrap_or_default()
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Training type: {}; Duration: {:.3} h.; Distance: {:.3} km; Avg. speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        ))
    }
}
