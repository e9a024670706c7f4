use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator as _};

/// Closed set of supported workout kinds.
///
/// `Display` yields the label used in summaries, `code` the short code used
/// by sensor packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum WorkoutKind {
    Running,
    Swimming,
    SportsWalking,
}

impl WorkoutKind {
    pub fn code(self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::Swimming => "SWM",
            Self::SportsWalking => "WLK",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::iter().find(|kind| kind.code() == code)
    }

    /// Reading layout in package order: common fields first, then the
    /// kind-specific ones.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            Self::Running => &["action_count", "duration_hours", "weight_kg"],
            Self::Swimming => &[
                "action_count",
                "duration_hours",
                "weight_kg",
                "pool_length_m",
                "pool_laps",
            ],
            Self::SportsWalking => &["action_count", "duration_hours", "weight_kg", "height_cm"],
        }
    }

    pub fn reading_count(self) -> usize {
        self.fields().len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Running {
    /// Steps taken
    pub action_count: u32,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SportsWalking {
    /// Steps taken
    pub action_count: u32,
    pub duration_hours: f64,
    pub weight_kg: f64,
    pub height_cm: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Swimming {
    /// Strokes taken
    pub action_count: u32,
    pub duration_hours: f64,
    pub weight_kg: f64,
    pub pool_length_m: f64,
    pub pool_laps: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum WorkoutRecord {
    Running(Running),
    Swimming(Swimming),
    SportsWalking(SportsWalking),
}

impl WorkoutRecord {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Self::Running(_) => WorkoutKind::Running,
            Self::Swimming(_) => WorkoutKind::Swimming,
            Self::SportsWalking(_) => WorkoutKind::SportsWalking,
        }
    }

    pub fn action_count(&self) -> u32 {
        match self {
            Self::Running(r) => r.action_count,
            Self::Swimming(s) => s.action_count,
            Self::SportsWalking(w) => w.action_count,
        }
    }

    pub fn duration_hours(&self) -> f64 {
        match self {
            Self::Running(r) => r.duration_hours,
            Self::Swimming(s) => s.duration_hours,
            Self::SportsWalking(w) => w.duration_hours,
        }
    }

    pub fn weight_kg(&self) -> f64 {
        match self {
            Self::Running(r) => r.weight_kg,
            Self::Swimming(s) => s.weight_kg,
            Self::SportsWalking(w) => w.weight_kg,
        }
    }
}

impl From<Running> for WorkoutRecord {
    fn from(value: Running) -> Self {
        Self::Running(value)
    }
}

impl From<Swimming> for WorkoutRecord {
    fn from(value: Swimming) -> Self {
        Self::Swimming(value)
    }
}

impl From<SportsWalking> for WorkoutRecord {
    fn from(value: SportsWalking) -> Self {
        Self::SportsWalking(value)
    }
}
