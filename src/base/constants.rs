/// Unit weight of water γw (kN/m³)
pub const UNIT_WEIGHT_WATER: f64 = 9.81;

/// Value reported for a factor of safety without net driving force
pub const SENTINEL_FS: f64 = 999.0;

/// Absolute value of the driving sum below which the factor of safety is unbounded
pub const DRIVING_EPSILON: f64 = 0.001;

/// Defines the directory where the analysis result files are saved
pub const DEFAULT_OUT_DIR: &str = "/tmp/slopesim/results";

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/slopesim/test";
