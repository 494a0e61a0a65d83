//! Centralized configuration values shared across the coplanar outline
//! workspace.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance used when removing consecutive duplicate ring positions.
///
/// Applied per component, both as an absolute and as a relative bound (see
/// [`equals_epsilon`]).
///
/// # Examples
/// ```
/// use config::constants::{equals_epsilon, REMOVE_DUPLICATES_EPSILON};
/// assert!(equals_epsilon(6378137.0, 6378137.0 + 1.0e-4, REMOVE_DUPLICATES_EPSILON));
/// ```
pub const REMOVE_DUPLICATES_EPSILON: f64 = 1.0e-10;

/// Maximum out-of-plane thickness of an outline, relative to its largest
/// in-plane extent, before the points are rejected as not coplanar.
///
/// # Examples
/// ```
/// use config::constants::PLANARITY_TOLERANCE;
/// let extent = 100.0;
/// let thickness = 1.0e-5;
/// assert!(thickness <= PLANARITY_TOLERANCE * extent);
/// ```
pub const PLANARITY_TOLERANCE: f64 = 1.0e-6;

/// Relative length below which an oriented bounding box half-axis counts as
/// collapsed. Two collapsed axes mean the points lie on a line.
///
/// # Examples
/// ```
/// use config::constants::DEGENERATE_AXIS_EPSILON;
/// assert!(DEGENERATE_AXIS_EPSILON < 1.0e-6);
/// ```
pub const DEGENERATE_AXIS_EPSILON: f64 = 1.0e-9;

/// Convergence tolerance of the Jacobi eigen solver, relative to the
/// Frobenius norm of the input matrix.
pub const EIGEN_TOLERANCE: f64 = 1.0e-20;

/// Upper bound on Jacobi sweeps when diagonalizing a covariance matrix.
///
/// # Examples
/// ```
/// use config::constants::EIGEN_MAX_SWEEPS;
/// assert!(EIGEN_MAX_SWEEPS >= 5);
/// ```
pub const EIGEN_MAX_SWEEPS: usize = 10;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Vertex count at which index buffers switch from 16-bit to 32-bit indices.
///
/// # Examples
/// ```
/// use config::constants::SIXTY_FOUR_KILOBYTES;
/// assert_eq!(SIXTY_FOUR_KILOBYTES, u16::MAX as usize + 1);
/// ```
pub const SIXTY_FOUR_KILOBYTES: usize = 64 * 1024;

/// Minimum number of distinct points a ring needs to enclose an area.
pub const MIN_RING_POINTS: usize = 3;

/// Remaining stack below which recursive hierarchy walks grow the stack
/// using the `stacker` crate.
///
/// # Examples
/// ```
/// use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
/// assert!(STACKER_RED_ZONE_BYTES < STACKER_STACK_SIZE_BYTES);
/// ```
pub const STACKER_RED_ZONE_BYTES: usize = 64 * 1024;

/// Bytes of stack space reserved each time a recursive walk grows its stack.
pub const STACKER_STACK_SIZE_BYTES: usize = 1024 * 1024;

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert_eq!(config.degenerate_axis_epsilon, config::constants::DEGENERATE_AXIS_EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Per-component tolerance for duplicate point removal.
    pub dedup_epsilon: f64,
    /// Relative out-of-plane thickness accepted for coplanar outlines.
    pub planarity_tolerance: f64,
    /// Relative half-axis length treated as collapsed when fitting a plane.
    pub degenerate_axis_epsilon: f64,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of every tolerance.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-8, 1.0e-3, 1.0e-6).expect("valid config");
    /// assert_eq!(cfg.planarity_tolerance, 1.0e-3);
    /// ```
    pub fn new(
        dedup_epsilon: f64,
        planarity_tolerance: f64,
        degenerate_axis_epsilon: f64,
    ) -> Result<Self, ConfigError> {
        if !(dedup_epsilon >= 0.0 && dedup_epsilon.is_finite()) {
            return Err(ConfigError::InvalidDedupEpsilon(dedup_epsilon));
        }
        if !(planarity_tolerance >= 0.0 && planarity_tolerance.is_finite()) {
            return Err(ConfigError::InvalidPlanarityTolerance(planarity_tolerance));
        }
        if !(degenerate_axis_epsilon > 0.0 && degenerate_axis_epsilon < 1.0) {
            return Err(ConfigError::InvalidDegenerateAxisEpsilon(degenerate_axis_epsilon));
        }
        Ok(Self {
            dedup_epsilon,
            planarity_tolerance,
            degenerate_axis_epsilon,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dedup_epsilon: REMOVE_DUPLICATES_EPSILON,
            planarity_tolerance: PLANARITY_TOLERANCE,
            degenerate_axis_epsilon: DEGENERATE_AXIS_EPSILON,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Raised when the dedup epsilon is negative or not finite.
    InvalidDedupEpsilon(f64),
    /// Raised when the planarity tolerance is negative or not finite.
    InvalidPlanarityTolerance(f64),
    /// Raised when the degenerate axis epsilon is outside `(0, 1)`.
    InvalidDegenerateAxisEpsilon(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDedupEpsilon(value) => {
                write!(f, "dedup_epsilon must be non-negative and finite: {value}")
            }
            ConfigError::InvalidPlanarityTolerance(value) => {
                write!(f, "planarity_tolerance must be non-negative and finite: {value}")
            }
            ConfigError::InvalidDegenerateAxisEpsilon(value) => {
                write!(f, "degenerate_axis_epsilon must lie in (0, 1): {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Compares two scalars using `epsilon` both as an absolute bound and as a
/// bound relative to the larger magnitude.
///
/// # Example
///
/// ```rust
/// use config::constants::equals_epsilon;
///
/// assert!(equals_epsilon(1.0, 1.0 + 1e-11, 1e-10));
/// assert!(equals_epsilon(1.0e9, 1.0e9 + 1e-2, 1e-10));
/// assert!(!equals_epsilon(1.0, 1.1, 1e-10));
/// ```
#[inline]
pub fn equals_epsilon(a: f64, b: f64, epsilon: f64) -> bool {
    let diff = (a - b).abs();
    diff <= epsilon || diff <= epsilon * a.abs().max(b.abs())
}

#[cfg(test)]
mod tests;
