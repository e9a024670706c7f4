use fittrack_codec::WorkoutPackage;

/// Reference packages: one swim, one run, one walk.
pub const SAMPLE_PACKAGES: [(&str, &[f64]); 3] = [
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

pub fn sample_packages() -> Vec<WorkoutPackage> {
    SAMPLE_PACKAGES
        .iter()
        .map(|(code, readings)| WorkoutPackage::new(*code, *readings))
        .collect()
}
