use std::io::Write;

use clap::ValueEnum;
use fittrack_algos::summarize;
use fittrack_codec::{PackageError, WorkoutPackage};
use fittrack_types::Summary;
use serde::Serialize;
use thiserror::Error;

use crate::helpers::format_hm::FormatHM as _;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One summary message per line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BatchMode {
    /// Abort the batch on the first rejected package
    #[default]
    StopOnError,
    /// Log rejected packages and keep going
    ContinueOnError,
}

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("package #{index} `{package}` rejected: {source}")]
    Package {
        index: usize,
        package: String,
        source: PackageError,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PackageFailure {
    pub index: usize,
    pub package: WorkoutPackage,
    pub error: PackageError,
}

#[derive(Debug, Default, PartialEq)]
pub struct BatchReport {
    pub processed: usize,
    pub failures: Vec<PackageFailure>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Serialize)]
struct SummaryLine<'a> {
    code: &'a str,
    #[serde(flatten)]
    summary: &'a Summary,
}

/// Turns packages into summary lines written to `sink`, in input order.
pub struct Driver<W> {
    sink: W,
    mode: BatchMode,
    format: OutputFormat,
}

impl<W: Write> Driver<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            mode: BatchMode::default(),
            format: OutputFormat::default(),
        }
    }

    pub fn with_mode(self, mode: BatchMode) -> Self {
        Self { mode, ..self }
    }

    pub fn with_format(self, format: OutputFormat) -> Self {
        Self { format, ..self }
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    pub fn process(&self, package: &WorkoutPackage) -> Result<Summary, PackageError> {
        let record = package.read()?;
        Ok(summarize(&record))
    }

    pub fn run(&mut self, packages: &[WorkoutPackage]) -> Result<BatchReport, DriverError> {
        let mut report = BatchReport::default();

        for (index, package) in packages.iter().enumerate() {
            match package.read() {
                Ok(record) => {
                    let summary = summarize(&record);
                    debug!(
                        "{} #{}: {} over {} at {} kg",
                        package.code,
                        index,
                        summary.training_type,
                        summary.elapsed().format_hm(),
                        record.weight_kg()
                    );
                    self.write_summary(&package.code, &summary)?;
                    report.processed += 1;
                }
                Err(error) if self.mode == BatchMode::ContinueOnError => {
                    warn!("Skipping package #{} `{}`: {}", index, package, error);
                    report.failures.push(PackageFailure {
                        index,
                        package: package.clone(),
                        error,
                    });
                }
                Err(source) => {
                    self.sink.flush()?;
                    return Err(DriverError::Package {
                        index,
                        package: package.to_string(),
                        source,
                    });
                }
            }
        }

        self.sink.flush()?;
        info!(
            "Processed {} of {} packages",
            report.processed,
            packages.len()
        );

        Ok(report)
    }

    fn write_summary(&mut self, code: &str, summary: &Summary) -> Result<(), DriverError> {
        match self.format {
            OutputFormat::Text => writeln!(self.sink, "{}", summary)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.sink, &SummaryLine { code, summary })?;
                writeln!(self.sink)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use fittrack_types::WorkoutKind;

    use super::*;
    use crate::sample_packages;

    const SAMPLE_OUTPUT: [&str; 3] = [
        "Training type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; Avg. speed: 1.000 km/h; Calories burned: 336.000.",
        "Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; Avg. speed: 9.750 km/h; Calories burned: 797.805.",
        "Training type: SportsWalking; Duration: 1.000 h.; Distance: 5.850 km; Avg. speed: 5.850 km/h; Calories burned: 349.252.",
    ];

    fn output(driver: Driver<Vec<u8>>) -> String {
        String::from_utf8(driver.into_inner()).unwrap()
    }

    #[test]
    fn samples_end_to_end() {
        let mut driver = Driver::new(Vec::new());
        let report = driver.run(&sample_packages()).unwrap();

        assert_eq!(report.processed, 3);
        assert!(report.is_success());

        let output = output(driver);
        assert_eq!(output.lines().collect::<Vec<_>>(), SAMPLE_OUTPUT);
        assert!(output.ends_with(".\n"));
    }

    #[test]
    fn empty_batch() {
        let mut driver = Driver::new(Vec::new());
        let report = driver.run(&[]).unwrap();
        assert_eq!(report, BatchReport::default());
        assert!(output(driver).is_empty());
    }

    #[test]
    fn stops_on_first_error() {
        let packages = vec![
            WorkoutPackage::new("RUN", [15000.0, 1.0, 75.0]),
            WorkoutPackage::new("ZZZ", [1.0, 2.0, 3.0]),
            WorkoutPackage::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
        ];

        let mut driver = Driver::new(Vec::new());
        let result = driver.run(&packages);

        match result {
            Err(DriverError::Package {
                index,
                package,
                source,
            }) => {
                assert_eq!(index, 1);
                assert_eq!(package, "ZZZ:1,2,3");
                assert_eq!(
                    source,
                    PackageError::UnknownWorkoutKind { code: "ZZZ".into() }
                );
            }
            other => panic!("unexpected {other:?}"),
        }

        // lines before the failure are already written
        assert_eq!(output(driver).lines().collect::<Vec<_>>(), [SAMPLE_OUTPUT[1]]);
    }

    #[test]
    fn continues_past_errors() {
        let packages = vec![
            WorkoutPackage::new("RUN", [1.0, 2.0]),
            WorkoutPackage::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
            WorkoutPackage::new("RUN", [15000.0, 0.0, 75.0]),
            WorkoutPackage::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
        ];

        let mut driver = Driver::new(Vec::new()).with_mode(BatchMode::ContinueOnError);
        let report = driver.run(&packages).unwrap();

        assert_eq!(report.processed, 2);
        assert!(!report.is_success());
        assert_eq!(
            report
                .failures
                .iter()
                .map(|f| f.index)
                .collect::<Vec<_>>(),
            [0, 2]
        );
        assert_eq!(
            report.failures[0].error,
            PackageError::ReadingCountMismatch {
                code: "RUN".into(),
                got: 2,
                expected: 3,
            }
        );
        assert!(matches!(
            report.failures[1].error,
            PackageError::NonPositiveDuration { .. }
        ));

        assert_eq!(
            output(driver).lines().collect::<Vec<_>>(),
            [SAMPLE_OUTPUT[0], SAMPLE_OUTPUT[2]]
        );
    }

    #[test]
    fn json_lines() {
        let mut driver = Driver::new(Vec::new()).with_format(OutputFormat::Json);
        driver.run(&sample_packages()).unwrap();

        let output = output(driver);
        let lines = output
            .lines()
            .map(|line| serde_json::from_str::<serde_json::Value>(line).unwrap())
            .collect::<Vec<_>>();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["code"], "SWM");
        assert_eq!(lines[0]["training_type"], "Swimming");
        assert_eq!(lines[1]["code"], "RUN");
        assert_eq!(lines[2]["training_type"], "SportsWalking");

        let calories = lines[1]["calories"].as_f64().unwrap();
        assert!((calories - 797.805).abs() < 1e-9);
    }

    #[test]
    fn process_does_not_write() {
        let driver = Driver::new(Vec::new());
        let summary = driver
            .process(&WorkoutPackage::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]))
            .unwrap();
        assert_eq!(summary.training_type, WorkoutKind::Swimming);
        assert!(output(driver).is_empty());
    }
}
