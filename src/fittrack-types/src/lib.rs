pub mod summary;
pub use summary::Summary;

pub mod workouts;
pub use workouts::{Running, SportsWalking, Swimming, WorkoutKind, WorkoutRecord};
