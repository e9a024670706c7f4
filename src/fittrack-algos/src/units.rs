pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;
pub const CM_IN_M: f64 = 100.0;

/// km/h to m/s factor, `1000 / 3600` rounded to three decimals.
pub const KMH_IN_MS: f64 = 0.278;
