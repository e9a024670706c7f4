use fittrack_types::{Swimming, WorkoutKind};

use crate::{TrainingMetrics, units::M_IN_KM};

const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Distance still follows the stroke count, but mean speed is taken from
/// the pool: length x laps over duration.
/// kcal = (speed + 1.1) x 2 x weight x hours
impl TrainingMetrics for Swimming {
    const STEP_LENGTH_M: f64 = 1.38;

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn action_count(&self) -> u32 {
        self.action_count
    }

    fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_laps) / M_IN_KM / self.duration_hours
    }

    fn calories_kcal(&self) -> f64 {
        (self.mean_speed_kmh() + CALORIES_MEAN_SPEED_SHIFT)
            * CALORIES_WEIGHT_MULTIPLIER
            * self.weight_kg
            * self.duration_hours
    }
}
