use std::{fmt, str::FromStr};

use fittrack_types::{Running, SportsWalking, Swimming, WorkoutKind, WorkoutRecord};

use crate::{PackageError, ParsePackageError, readings::ReadingCursor};

/// Builds the record for `code` from positional readings: common fields
/// (`action_count`, `duration_hours`, `weight_kg`) first, then the kind's own.
pub fn read_package(code: &str, readings: &[f64]) -> Result<WorkoutRecord, PackageError> {
    let kind = WorkoutKind::from_code(code).ok_or_else(|| PackageError::UnknownWorkoutKind {
        code: code.to_owned(),
    })?;

    let expected = kind.reading_count();
    if readings.len() != expected {
        return Err(PackageError::ReadingCountMismatch {
            code: code.to_owned(),
            got: readings.len(),
            expected,
        });
    }

    let mut cursor = ReadingCursor::new(code, kind.fields(), readings);
    let action_count = cursor.count()?;
    let duration_hours = cursor.duration()?;
    let weight_kg = cursor.positive()?;

    let record = match kind {
        WorkoutKind::Running => Running {
            action_count,
            duration_hours,
            weight_kg,
        }
        .into(),
        WorkoutKind::SportsWalking => SportsWalking {
            action_count,
            duration_hours,
            weight_kg,
            height_cm: cursor.positive()?,
        }
        .into(),
        WorkoutKind::Swimming => Swimming {
            action_count,
            duration_hours,
            weight_kg,
            pool_length_m: cursor.positive()?,
            pool_laps: cursor.count()?,
        }
        .into(),
    };

    Ok(record)
}

/// A workout kind code with its raw sensor readings, e.g. `RUN:15000,1,75`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPackage {
    pub code: String,
    pub readings: Vec<f64>,
}

impl WorkoutPackage {
    pub fn new(code: impl Into<String>, readings: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            readings: readings.into(),
        }
    }

    pub fn read(&self) -> Result<WorkoutRecord, PackageError> {
        read_package(&self.code, &self.readings)
    }
}

impl FromStr for WorkoutPackage {
    type Err = ParsePackageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((code, readings)) = s.split_once(':') else {
            return Err(ParsePackageError::MissingCode(s.to_owned()));
        };

        let code = code.trim();
        if code.is_empty() {
            return Err(ParsePackageError::MissingCode(s.to_owned()));
        }

        let readings = readings.trim();
        if readings.is_empty() {
            return Ok(Self::new(code, Vec::new()));
        }

        let readings = readings
            .split(',')
            .map(str::trim)
            .map(|reading| {
                reading
                    .parse::<f64>()
                    .map_err(|_| ParsePackageError::InvalidNumber {
                        package: s.to_owned(),
                        reading: reading.to_owned(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(code, readings))
    }
}

impl fmt::Display for WorkoutPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.code)?;
        for (i, reading) in self.readings.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", reading)?;
        }
        Ok(())
    }
}
