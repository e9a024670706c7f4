pub(crate) mod metrics;
pub use metrics::{TrainingMetrics, summarize};

pub(crate) mod running;
pub(crate) mod swimming;
pub(crate) mod walking;

pub mod units;
