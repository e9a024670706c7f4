#[macro_use]
extern crate log;

mod driver;
pub use driver::{BatchMode, BatchReport, Driver, DriverError, OutputFormat, PackageFailure};

mod samples;
pub use samples::{SAMPLE_PACKAGES, sample_packages};

pub mod helpers;
