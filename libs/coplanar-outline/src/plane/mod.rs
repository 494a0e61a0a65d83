//! # Plane Fitting
//!
//! Fits an oriented bounding box to a point set by principal component
//! analysis and derives the plane the points lie in.
//!
//! ## Algorithm
//!
//! 1. Covariance matrix of the points about their mean
//! 2. Jacobi eigen-decomposition (eigenvectors are the box axes)
//! 3. Extents of the points projected on each axis
//!
//! The axis with the smallest extent is the plane normal. Two collapsed axes
//! mean the points are collinear and span no plane.

use config::constants::{EIGEN_MAX_SWEEPS, EIGEN_TOLERANCE};
use glam::DMat3;

use crate::core::vec3::Vec3;

// =============================================================================
// EIGEN DECOMPOSITION
// =============================================================================

/// Eigen-decomposition of a symmetric 3x3 matrix: `matrix = unitary * diagonal * unitaryᵀ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EigenDecomposition {
    /// Orthonormal eigenvectors as columns.
    pub unitary: DMat3,
    /// Eigenvalues on the diagonal, in the same order as the columns of `unitary`.
    pub diagonal: DMat3,
}

impl EigenDecomposition {
    /// Eigenvalues in column order.
    pub fn eigenvalues(&self) -> Vec3 {
        Vec3::new(self.diagonal.x_axis.x, self.diagonal.y_axis.y, self.diagonal.z_axis.z)
    }
}

/// Diagonalizes a symmetric matrix with cyclic Jacobi rotations.
///
/// Stops once the off-diagonal norm falls below [`EIGEN_TOLERANCE`] relative
/// to the Frobenius norm, or after [`EIGEN_MAX_SWEEPS`] sweeps.
///
/// # Example
///
/// ```rust
/// use coplanar_outline::plane::eigen_decomposition;
/// use glam::{DMat3, DVec3};
///
/// let m = DMat3::from_cols(
///     DVec3::new(2.0, 1.0, 0.0),
///     DVec3::new(1.0, 2.0, 0.0),
///     DVec3::new(0.0, 0.0, 5.0),
/// );
/// let eigen = eigen_decomposition(m);
/// let mut values = eigen.eigenvalues().to_array();
/// values.sort_by(f64::total_cmp);
/// assert!((values[0] - 1.0).abs() < 1e-12);
/// assert!((values[1] - 3.0).abs() < 1e-12);
/// assert!((values[2] - 5.0).abs() < 1e-12);
/// ```
pub fn eigen_decomposition(matrix: DMat3) -> EigenDecomposition {
    let mut diagonal = matrix;
    let mut unitary = DMat3::IDENTITY;
    let epsilon = EIGEN_TOLERANCE * frobenius_norm(&matrix);

    for _ in 0..EIGEN_MAX_SWEEPS {
        if off_diagonal_norm(&diagonal) <= epsilon {
            break;
        }
        for (p, q) in [(0, 1), (0, 2), (1, 2)] {
            let apq = element(&diagonal, p, q);
            if apq == 0.0 {
                continue;
            }
            let theta = (element(&diagonal, q, q) - element(&diagonal, p, p)) / (2.0 * apq);
            let t = theta.signum() / (theta.abs() + (theta * theta + 1.0).sqrt());
            let c = 1.0 / (t * t + 1.0).sqrt();
            let s = t * c;

            let rotation = jacobi_rotation(p, q, c, s);
            diagonal = rotation.transpose() * diagonal * rotation;
            unitary *= rotation;
        }
    }

    EigenDecomposition { unitary, diagonal }
}

/// Element at `row`, `col`.
#[inline]
fn element(m: &DMat3, row: usize, col: usize) -> f64 {
    m.col(col)[row]
}

/// Rotation in the `p`/`q` plane that zeroes element `(p, q)` of `Jᵀ A J`.
fn jacobi_rotation(p: usize, q: usize, c: f64, s: f64) -> DMat3 {
    let mut cols = DMat3::IDENTITY.to_cols_array_2d();
    cols[p][p] = c;
    cols[q][q] = c;
    cols[q][p] = s;
    cols[p][q] = -s;
    DMat3::from_cols_array_2d(&cols)
}

fn frobenius_norm(m: &DMat3) -> f64 {
    m.to_cols_array().iter().map(|v| v * v).sum::<f64>().sqrt()
}

fn off_diagonal_norm(m: &DMat3) -> f64 {
    let mut sum = 0.0;
    for row in 0..3 {
        for col in 0..3 {
            if row != col {
                let v = element(m, row, col);
                sum += v * v;
            }
        }
    }
    sum.sqrt()
}

// =============================================================================
// ORIENTED BOUNDING BOX
// =============================================================================

/// Box with arbitrary orientation: `center` plus three half-axis vectors as
/// the columns of `half_axes`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedBoundingBox {
    /// Box center.
    pub center: Vec3,
    /// Half-axis vectors as columns.
    pub half_axes: DMat3,
}

impl OrientedBoundingBox {
    /// Fits a box to `points` along their principal axes. An empty slice
    /// yields a zero-sized box at the origin.
    ///
    /// # Example
    ///
    /// ```rust
    /// use coplanar_outline::plane::OrientedBoundingBox;
    /// use coplanar_outline::Vec3;
    ///
    /// let obb = OrientedBoundingBox::from_points(&[
    ///     Vec3::new(-2.0, 0.0, 0.0),
    ///     Vec3::new(2.0, 0.0, 0.0),
    ///     Vec3::new(0.0, 1.0, 0.0),
    ///     Vec3::new(0.0, -1.0, 0.0),
    /// ]);
    /// let mut lengths = obb.half_axis_lengths().to_array();
    /// lengths.sort_by(f64::total_cmp);
    /// assert!(lengths[0] < 1e-12);
    /// assert!((lengths[2] - 2.0).abs() < 1e-9);
    /// ```
    pub fn from_points(points: &[Vec3]) -> Self {
        if points.is_empty() {
            return Self {
                center: Vec3::ZERO,
                half_axes: DMat3::ZERO,
            };
        }

        let inv_length = 1.0 / points.len() as f64;
        let mean = points.iter().copied().sum::<Vec3>() * inv_length;

        let (mut exx, mut exy, mut exz, mut eyy, mut eyz, mut ezz) = (0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        for p in points {
            let d = *p - mean;
            exx += d.x * d.x;
            exy += d.x * d.y;
            exz += d.x * d.z;
            eyy += d.y * d.y;
            eyz += d.y * d.z;
            ezz += d.z * d.z;
        }
        let covariance = DMat3::from_cols(
            Vec3::new(exx, exy, exz),
            Vec3::new(exy, eyy, eyz),
            Vec3::new(exz, eyz, ezz),
        ) * inv_length;

        let rotation = eigen_decomposition(covariance).unitary;

        let mut min = Vec3::splat(f64::MAX);
        let mut max = Vec3::splat(f64::MIN);
        for p in points {
            let local = rotation.transpose() * *p;
            min = min.min(local);
            max = max.max(local);
        }

        Self {
            center: rotation * ((min + max) * 0.5),
            half_axes: rotation * DMat3::from_diagonal((max - min) * 0.5),
        }
    }

    /// Lengths of the three half-axes.
    pub fn half_axis_lengths(&self) -> Vec3 {
        Vec3::new(
            self.half_axes.x_axis.length(),
            self.half_axes.y_axis.length(),
            self.half_axes.z_axis.length(),
        )
    }
}

// =============================================================================
// PROJECTION PLANE
// =============================================================================

/// Plane fitted through a point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionPlane {
    /// Center of the fitted box; lies on the plane.
    pub center: Vec3,
    /// First in-plane unit axis.
    pub axis1: Vec3,
    /// Second in-plane unit axis.
    pub axis2: Vec3,
    /// Unit normal, `axis1 × axis2`.
    pub normal: Vec3,
    /// Half of the point set's extent along the normal.
    pub half_thickness: f64,
    /// Half of the point set's largest in-plane extent.
    pub half_extent: f64,
}

impl ProjectionPlane {
    /// Signed distance of `point` from the plane.
    #[inline]
    pub fn signed_distance(&self, point: Vec3) -> f64 {
        self.normal.dot(point - self.center)
    }

    /// True when the thickness is within `tolerance` relative to the extent.
    #[inline]
    pub fn is_flat(&self, tolerance: f64) -> bool {
        self.half_thickness <= tolerance * self.half_extent
    }
}

/// Fits the plane spanned by `points`.
///
/// Returns `None` when fewer than two box axes have a length above
/// `degenerate_epsilon` relative to the longest one, i.e. the points are
/// coincident or collinear.
pub fn compute_projection_plane(points: &[Vec3], degenerate_epsilon: f64) -> Option<ProjectionPlane> {
    let obb = OrientedBoundingBox::from_points(points);
    let axes = [obb.half_axes.x_axis, obb.half_axes.y_axis, obb.half_axes.z_axis];
    let lengths = obb.half_axis_lengths().to_array();

    let largest = lengths.iter().copied().fold(0.0, f64::max);
    if largest == 0.0 {
        return None;
    }
    let collapsed = lengths
        .iter()
        .filter(|&&length| length <= degenerate_epsilon * largest)
        .count();
    if collapsed >= 2 {
        return None;
    }

    let mut normal_index = 0;
    for i in 1..3 {
        if lengths[i] < lengths[normal_index] {
            normal_index = i;
        }
    }
    let (i1, i2) = match normal_index {
        0 => (1, 2),
        1 => (0, 2),
        _ => (0, 1),
    };

    let axis1 = axes[i1].normalize();
    let axis2 = axes[i2].normalize();
    Some(ProjectionPlane {
        center: obb.center,
        axis1,
        axis2,
        normal: axis1.cross(axis2).normalize(),
        half_thickness: lengths[normal_index],
        half_extent: largest,
    })
}
