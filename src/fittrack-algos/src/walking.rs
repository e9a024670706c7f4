use fittrack_types::{SportsWalking, WorkoutKind};

use crate::{
    TrainingMetrics,
    units::{CM_IN_M, KMH_IN_MS, MIN_IN_H},
};

const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// Step model for distance and speed.
/// kcal = (0.035 x weight + (v^2 / height_m) x 0.029 x weight) x minutes,
/// with v the mean speed in m/s.
impl TrainingMetrics for SportsWalking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn action_count(&self) -> u32 {
        self.action_count
    }

    fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    fn calories_kcal(&self) -> f64 {
        let speed_ms = self.mean_speed_kmh() * KMH_IN_MS;
        let height_m = self.height_cm / CM_IN_M;

        (CALORIES_WEIGHT_MULTIPLIER * self.weight_kg
            + (speed_ms.powi(2) / height_m)
                * CALORIES_SPEED_HEIGHT_MULTIPLIER
                * self.weight_kg)
            * (self.duration_hours * MIN_IN_H)
    }
}
