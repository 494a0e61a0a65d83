//! Tests for the outline configuration wrapper.

use super::*;
use config::constants::{DEGENERATE_AXIS_EPSILON, PLANARITY_TOLERANCE, REMOVE_DUPLICATES_EPSILON};

/// Default configuration mirrors the shared constants.
///
/// # Examples
/// ```
/// use coplanar_outline::settings::OutlineConfig;
/// assert!(OutlineConfig::default().planarity_tolerance > 0.0);
/// ```
#[test]
fn default_matches_shared_constants() {
    let cfg = OutlineConfig::default();
    assert_eq!(cfg.dedup_epsilon, REMOVE_DUPLICATES_EPSILON);
    assert_eq!(cfg.planarity_tolerance, PLANARITY_TOLERANCE);
    assert_eq!(cfg.degenerate_axis_epsilon, DEGENERATE_AXIS_EPSILON);
}

#[test]
fn new_rejects_negative_planarity() {
    let err = OutlineConfig::new(1.0e-10, -0.5, 1.0e-9).unwrap_err();
    assert!(err.to_string().contains("planarity_tolerance"));
}

#[test]
fn new_keeps_explicit_values() {
    let cfg = OutlineConfig::new(1.0e-4, 0.25, 1.0e-3).unwrap();
    assert_eq!(cfg.dedup_epsilon, 1.0e-4);
    assert_eq!(cfg.planarity_tolerance, 0.25);
    assert_eq!(cfg.degenerate_axis_epsilon, 1.0e-3);
}

#[test]
fn new_rejects_degenerate_axis_epsilon_outside_unit_range() {
    let err = OutlineConfig::new(1.0e-10, 1.0e-6, 0.0).unwrap_err();
    assert!(err.to_string().contains("degenerate_axis_epsilon"));
    assert!(OutlineConfig::new(1.0e-10, 1.0e-6, 1.5).is_err());
}
