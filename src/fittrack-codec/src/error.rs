use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PackageError {
    #[error("unknown workout kind `{code}`")]
    UnknownWorkoutKind { code: String },
    #[error("`{code}` expects {expected} readings, got {got}")]
    ReadingCountMismatch {
        code: String,
        got: usize,
        expected: usize,
    },
    #[error("`{code}` duration must be a positive number of hours, got {value}")]
    NonPositiveDuration { code: String, value: f64 },
    #[error("`{code}` reading `{field}` is invalid: {value}")]
    InvalidReading {
        code: String,
        field: &'static str,
        value: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParsePackageError {
    #[error("package `{0}` is missing the `CODE:` prefix")]
    MissingCode(String),
    #[error("package `{package}` has a non numeric reading `{reading}`")]
    InvalidNumber { package: String, reading: String },
}
