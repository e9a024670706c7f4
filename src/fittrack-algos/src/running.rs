use fittrack_types::{Running, WorkoutKind};

use crate::{
    TrainingMetrics,
    units::{M_IN_KM, MIN_IN_H},
};

const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

/// Step model for distance and speed.
/// kcal = (18 x speed + 1.79) x weight / 1000 x minutes
impl TrainingMetrics for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn action_count(&self) -> u32 {
        self.action_count
    }

    fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    fn calories_kcal(&self) -> f64 {
        (CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed_kmh()
            + CALORIES_MEAN_SPEED_SHIFT)
            * self.weight_kg
            / M_IN_KM
            * self.duration_hours
            * MIN_IN_H
    }
}
