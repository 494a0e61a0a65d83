//! Thin wrapper around `glam::DVec3` shared across kernel modules.
//!
//! The helper functions keep epsilon comparisons and buffer flattening
//! readable while avoiding direct dependencies on `glam` from higher layers.

use config::constants;

pub use glam::DVec3 as Vec3;

/// Component-wise epsilon equality, absolute and relative.
///
/// # Examples
/// ```
/// use coplanar_outline::core::vec3::{equals_epsilon, Vec3};
/// let a = Vec3::new(1.0, 2.0, 3.0);
/// assert!(equals_epsilon(a, a + Vec3::splat(1e-12), 1e-10));
/// assert!(!equals_epsilon(a, Vec3::ZERO, 1e-10));
/// ```
#[inline]
pub fn equals_epsilon(a: Vec3, b: Vec3, epsilon: f64) -> bool {
    constants::equals_epsilon(a.x, b.x, epsilon)
        && constants::equals_epsilon(a.y, b.y, epsilon)
        && constants::equals_epsilon(a.z, b.z, epsilon)
}

/// Flattens points into `[x, y, z, x, y, z, ...]`.
///
/// # Examples
/// ```
/// use coplanar_outline::core::vec3::{flatten, Vec3};
/// assert_eq!(flatten(&[Vec3::new(1.0, 2.0, 3.0)]), vec![1.0, 2.0, 3.0]);
/// ```
pub fn flatten(points: &[Vec3]) -> Vec<f64> {
    let mut result = Vec::with_capacity(points.len() * 3);
    for p in points {
        result.extend_from_slice(&[p.x, p.y, p.z]);
    }
    result
}

/// Groups `[x, y, z, ...]` into points. Returns `None` when the length is not
/// a multiple of three.
///
/// # Examples
/// ```
/// use coplanar_outline::core::vec3::unflatten;
/// assert_eq!(unflatten(&[1.0, 2.0, 3.0]).unwrap().len(), 1);
/// assert!(unflatten(&[1.0, 2.0]).is_none());
/// ```
pub fn unflatten(values: &[f64]) -> Option<Vec<Vec3>> {
    if values.len() % 3 != 0 {
        return None;
    }
    Some(
        values
            .chunks_exact(3)
            .map(|c| Vec3::new(c[0], c[1], c[2]))
            .collect(),
    )
}
