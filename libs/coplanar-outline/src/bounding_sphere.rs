//! # Bounding Sphere
//!
//! Enclosing sphere of a point set, used by renderers for culling.

use serde::{Deserialize, Serialize};

use crate::core::vec3::Vec3;

/// Sphere given by center and radius.
///
/// # Example
///
/// ```rust
/// use coplanar_outline::{BoundingSphere, Vec3};
///
/// let sphere = BoundingSphere::from_points(&[Vec3::new(-1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0)]);
/// assert_eq!(sphere.center, Vec3::ZERO);
/// assert_eq!(sphere.radius, 1.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingSphere {
    /// Sphere center
    pub center: Vec3,
    /// Sphere radius
    pub radius: f64,
}

impl BoundingSphere {
    /// Creates a sphere.
    pub fn new(center: Vec3, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Computes a tight sphere around `points`.
    ///
    /// Runs Ritter's algorithm seeded with the axis of largest span, and
    /// compares it with the sphere centered on the axis-aligned bounding box.
    /// The smaller of the two is returned. An empty slice gives a zero sphere
    /// at the origin.
    pub fn from_points(points: &[Vec3]) -> Self {
        let Some(&first) = points.first() else {
            return Self::default();
        };

        // Extreme points along each axis
        let (mut x_min, mut y_min, mut z_min) = (first, first, first);
        let (mut x_max, mut y_max, mut z_max) = (first, first, first);
        for &p in &points[1..] {
            if p.x < x_min.x {
                x_min = p;
            }
            if p.x > x_max.x {
                x_max = p;
            }
            if p.y < y_min.y {
                y_min = p;
            }
            if p.y > y_max.y {
                y_max = p;
            }
            if p.z < z_min.z {
                z_min = p;
            }
            if p.z > z_max.z {
                z_max = p;
            }
        }

        // Seed diameter: the pair with the largest span
        let x_span = x_max.distance_squared(x_min);
        let y_span = y_max.distance_squared(y_min);
        let z_span = z_max.distance_squared(z_min);
        let (mut diameter1, mut diameter2, mut max_span) = (x_min, x_max, x_span);
        if y_span > max_span {
            (diameter1, diameter2, max_span) = (y_min, y_max, y_span);
        }
        if z_span > max_span {
            (diameter1, diameter2) = (z_min, z_max);
        }

        let mut ritter_center = (diameter1 + diameter2) * 0.5;
        let mut radius_squared = diameter2.distance_squared(ritter_center);
        let mut ritter_radius = radius_squared.sqrt();

        let min_box = Vec3::new(x_min.x, y_min.y, z_min.z);
        let max_box = Vec3::new(x_max.x, y_max.y, z_max.z);
        let naive_center = (min_box + max_box) * 0.5;
        let mut naive_radius: f64 = 0.0;

        for &p in points {
            naive_radius = naive_radius.max(p.distance(naive_center));

            // Grow the Ritter sphere just enough to include p
            let old_center_to_point_squared = p.distance_squared(ritter_center);
            if old_center_to_point_squared > radius_squared {
                let old_center_to_point = old_center_to_point_squared.sqrt();
                ritter_radius = (ritter_radius + old_center_to_point) * 0.5;
                radius_squared = ritter_radius * ritter_radius;
                let old_to_new = old_center_to_point - ritter_radius;
                ritter_center =
                    (ritter_center * ritter_radius + p * old_to_new) / old_center_to_point;
            }
        }

        if ritter_radius < naive_radius {
            Self::new(ritter_center, ritter_radius)
        } else {
            Self::new(naive_center, naive_radius)
        }
    }

    /// True when `point` lies inside the sphere, allowing `tolerance`.
    #[inline]
    pub fn contains(&self, point: Vec3, tolerance: f64) -> bool {
        point.distance(self.center) <= self.radius + tolerance
    }
}
