//! # Duplicate Removal
//!
//! Drops consecutive ring positions that are equal within a tolerance.
//! Rings are closed implicitly, so with wrap-around enabled a final point
//! that repeats the first one is dropped as well.

use crate::core::vec3::{equals_epsilon, Vec3};

/// Removes consecutive duplicates from `points`.
///
/// Each point is compared with the last point kept, so a run of near-equal
/// points collapses to its first member. With `wrap_around`, the last kept
/// point is dropped when it equals the first. Inputs with fewer than two
/// points are returned unchanged. Applying the function twice yields the
/// same result as applying it once.
///
/// # Example
///
/// ```rust
/// use coplanar_outline::dedup::remove_duplicates;
/// use coplanar_outline::Vec3;
///
/// let ring = vec![Vec3::ZERO, Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::ZERO];
/// let cleaned = remove_duplicates(&ring, 1e-10, true);
/// assert_eq!(cleaned, vec![Vec3::ZERO, Vec3::X, Vec3::Y]);
/// ```
pub fn remove_duplicates(points: &[Vec3], epsilon: f64, wrap_around: bool) -> Vec<Vec3> {
    if points.len() < 2 {
        return points.to_vec();
    }

    let mut cleaned: Vec<Vec3> = Vec::with_capacity(points.len());
    for &point in points {
        match cleaned.last() {
            Some(&last) if equals_epsilon(last, point, epsilon) => {}
            _ => cleaned.push(point),
        }
    }

    if wrap_around && cleaned.len() > 1 {
        let first = cleaned[0];
        while cleaned.len() > 1
            && cleaned
                .last()
                .is_some_and(|&last| equals_epsilon(first, last, epsilon))
        {
            cleaned.pop();
        }
    }

    cleaned
}

#[cfg(test)]
mod tests;
