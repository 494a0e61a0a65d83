//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default constants are sane and positive.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let cfg = GlobalConfig::default();
/// assert!(cfg.degenerate_axis_epsilon > 0.0);
/// ```
#[test]
fn default_constants_are_valid() {
    let cfg = GlobalConfig::default();
    assert_eq!(cfg.dedup_epsilon, REMOVE_DUPLICATES_EPSILON);
    assert_eq!(cfg.planarity_tolerance, PLANARITY_TOLERANCE);
    assert_eq!(cfg.degenerate_axis_epsilon, DEGENERATE_AXIS_EPSILON);
    assert_eq!(
        GlobalConfig::new(REMOVE_DUPLICATES_EPSILON, PLANARITY_TOLERANCE, DEGENERATE_AXIS_EPSILON),
        Ok(cfg)
    );
}

/// Validates the builder rejects invalid values.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// assert!(GlobalConfig::new(1.0e-10, 1.0e-6, 0.0).is_err());
/// ```
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GlobalConfig::new(-1.0, 1.0e-6, 1.0e-9).unwrap_err(),
        ConfigError::InvalidDedupEpsilon(-1.0)
    );
    assert!(matches!(
        GlobalConfig::new(1.0e-10, f64::NAN, 1.0e-9).unwrap_err(),
        ConfigError::InvalidPlanarityTolerance(_)
    ));
    assert_eq!(
        GlobalConfig::new(1.0e-10, 1.0e-6, 0.0).unwrap_err(),
        ConfigError::InvalidDegenerateAxisEpsilon(0.0)
    );
    assert_eq!(
        GlobalConfig::new(1.0e-10, 1.0e-6, 1.0).unwrap_err(),
        ConfigError::InvalidDegenerateAxisEpsilon(1.0)
    );
}

#[test]
fn zero_dedup_epsilon_is_allowed() {
    let cfg = GlobalConfig::new(0.0, 0.0, 1.0e-9).unwrap();
    assert_eq!(cfg.dedup_epsilon, 0.0);
}

#[test]
fn config_error_display_names_field() {
    let msg = ConfigError::InvalidPlanarityTolerance(-2.0).to_string();
    assert!(msg.contains("planarity_tolerance"));
    let msg = ConfigError::InvalidDegenerateAxisEpsilon(2.0).to_string();
    assert!(msg.contains("degenerate_axis_epsilon"));
}
