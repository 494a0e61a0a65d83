//! Kernel-level configuration helpers building on the shared `config` crate.
//!
//! The module forwards the workspace tolerances so geometry components can
//! stay decoupled from literal constants.

use config::constants::{ConfigError, GlobalConfig};

/// Outline kernel configuration.
///
/// # Examples
/// ```
/// use coplanar_outline::settings::OutlineConfig;
/// let cfg = OutlineConfig::default();
/// assert!(cfg.dedup_epsilon > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineConfig {
    /// Per-component tolerance used to drop consecutive duplicate points.
    pub dedup_epsilon: f64,
    /// Accepted out-of-plane thickness relative to the largest extent.
    pub planarity_tolerance: f64,
    /// Relative half-axis length treated as collapsed when fitting a plane.
    pub degenerate_axis_epsilon: f64,
}

impl OutlineConfig {
    /// Creates a new configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use coplanar_outline::settings::OutlineConfig;
    /// let cfg = OutlineConfig::new(1.0e-8, 1.0e-3, 1.0e-6).unwrap();
    /// assert_eq!(cfg.planarity_tolerance, 1.0e-3);
    /// assert!(OutlineConfig::new(-1.0, 1.0e-3, 1.0e-6).is_err());
    /// ```
    pub fn new(
        dedup_epsilon: f64,
        planarity_tolerance: f64,
        degenerate_axis_epsilon: f64,
    ) -> Result<Self, OutlineConfigError> {
        GlobalConfig::new(dedup_epsilon, planarity_tolerance, degenerate_axis_epsilon)
            .map(Self::from)
            .map_err(OutlineConfigError)
    }
}

impl From<GlobalConfig> for OutlineConfig {
    fn from(cfg: GlobalConfig) -> Self {
        Self {
            dedup_epsilon: cfg.dedup_epsilon,
            planarity_tolerance: cfg.planarity_tolerance,
            degenerate_axis_epsilon: cfg.degenerate_axis_epsilon,
        }
    }
}

impl Default for OutlineConfig {
    fn default() -> Self {
        GlobalConfig::default().into()
    }
}

/// Error wrapper for invalid outline configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineConfigError(ConfigError);

impl std::fmt::Display for OutlineConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for OutlineConfigError {}

#[cfg(test)]
mod tests;
