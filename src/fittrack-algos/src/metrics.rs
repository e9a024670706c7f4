use fittrack_types::{Summary, WorkoutKind, WorkoutRecord};

use crate::units::M_IN_KM;

/// Distance, speed and energy model of a workout.
///
/// Distance defaults to the step model (`action_count * STEP_LENGTH_M`) and
/// mean speed to distance over duration; kinds with a different model
/// override those.
pub trait TrainingMetrics {
    /// Distance covered by one action (step or stroke), meters.
    const STEP_LENGTH_M: f64 = 0.65;

    fn kind(&self) -> WorkoutKind;
    fn action_count(&self) -> u32;
    fn duration_hours(&self) -> f64;

    fn distance_km(&self) -> f64 {
        f64::from(self.action_count()) * Self::STEP_LENGTH_M / M_IN_KM
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_hours()
    }

    fn calories_kcal(&self) -> f64;

    fn summary(&self) -> Summary {
        Summary {
            training_type: self.kind(),
            duration: self.duration_hours(),
            distance: self.distance_km(),
            speed: self.mean_speed_kmh(),
            calories: self.calories_kcal(),
        }
    }
}

impl TrainingMetrics for WorkoutRecord {
    fn kind(&self) -> WorkoutKind {
        WorkoutRecord::kind(self)
    }

    fn action_count(&self) -> u32 {
        WorkoutRecord::action_count(self)
    }

    fn duration_hours(&self) -> f64 {
        WorkoutRecord::duration_hours(self)
    }

    fn distance_km(&self) -> f64 {
        match self {
            Self::Running(r) => r.distance_km(),
            Self::Swimming(s) => s.distance_km(),
            Self::SportsWalking(w) => w.distance_km(),
        }
    }

    fn mean_speed_kmh(&self) -> f64 {
        match self {
            Self::Running(r) => r.mean_speed_kmh(),
            Self::Swimming(s) => s.mean_speed_kmh(),
            Self::SportsWalking(w) => w.mean_speed_kmh(),
        }
    }

    fn calories_kcal(&self) -> f64 {
        match self {
            Self::Running(r) => r.calories_kcal(),
            Self::Swimming(s) => s.calories_kcal(),
            Self::SportsWalking(w) => w.calories_kcal(),
        }
    }
}

pub fn summarize(record: &WorkoutRecord) -> Summary {
    record.summary()
}
