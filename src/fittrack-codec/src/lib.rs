#[macro_use]
extern crate serde;

mod error;
pub use error::{PackageError, ParsePackageError};

mod package;
pub use package::{WorkoutPackage, read_package};

mod readings;
