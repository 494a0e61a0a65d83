//! # Coplanar Polygon Outline
//!
//! Describes a coplanar polygon with holes and turns it into a line-list
//! outline geometry.
//!
//! ## Pipeline
//!
//! ```text
//! PolygonHierarchy
//!       ↓  remove_duplicates (outer ring)
//!       ↓  plane fit: collinear or thick → None
//!       ↓  polygon_outlines_from_hierarchy
//!       ↓  create_geometry_from_positions per ring
//!       ↓  Geometry::combine + bounding sphere
//! Geometry (Lines)
//! ```
//!
//! Polygons that cannot be drawn produce `None` so a batch can skip them.

use std::collections::VecDeque;

use config::constants::MIN_RING_POINTS;
use log::{debug, trace};

use crate::bounding_sphere::BoundingSphere;
use crate::core::vec3::{flatten, unflatten, Vec3};
use crate::dedup::remove_duplicates;
use crate::error::{OutlineError, OutlineResult};
use crate::geometry::{Geometry, GeometryAttribute, GeometryAttributes, IndexBuffer, PrimitiveType};
use crate::hierarchy::{read_value, PolygonHierarchy};
use crate::plane::compute_projection_plane;
use crate::settings::OutlineConfig;

/// Name of the worker entry point that builds this geometry.
pub const WORKER_NAME: &str = "createCoplanarPolygonOutlineGeometry";

// =============================================================================
// RING GEOMETRY
// =============================================================================

/// Builds a closed-loop line list through `positions`.
///
/// The index buffer holds `(i, (i + 1) % n)` for every point, so the last
/// segment closes the ring. Callers pass at least three distinct points.
///
/// # Example
///
/// ```rust
/// use coplanar_outline::outline::create_geometry_from_positions;
/// use coplanar_outline::Vec3;
///
/// let g = create_geometry_from_positions(&[Vec3::ZERO, Vec3::X, Vec3::Y]);
/// assert_eq!(g.indices.to_u32_vec(), vec![0, 1, 1, 2, 2, 0]);
/// ```
pub fn create_geometry_from_positions(positions: &[Vec3]) -> Geometry {
    let length = positions.len();
    let mut indices = Vec::with_capacity(length * 2);
    for i in 0..length {
        indices.push(i as u32);
        indices.push(((i + 1) % length) as u32);
    }

    Geometry::new(
        GeometryAttributes {
            position: Some(GeometryAttribute::positions(flatten(positions))),
        },
        IndexBuffer::for_vertex_count(length, indices),
        PrimitiveType::Lines,
    )
}

/// Splits a hierarchy into the rings to outline.
///
/// Walks the tree breadth-first. Every outer ring is followed by its holes;
/// islands inside a hole are queued as outer rings of their own. Each ring
/// is deduplicated first, and a ring left with fewer than three points is
/// skipped together with everything nested inside it.
pub fn polygon_outlines_from_hierarchy(hierarchy: &PolygonHierarchy, dedup_epsilon: f64) -> Vec<Vec<Vec3>> {
    let mut outlines = Vec::new();
    let mut queue = VecDeque::from([hierarchy]);

    while let Some(outer) = queue.pop_front() {
        let outer_ring = remove_duplicates(&outer.positions, dedup_epsilon, true);
        if outer_ring.len() < MIN_RING_POINTS {
            continue;
        }
        outlines.push(outer_ring);

        for hole in &outer.holes {
            let hole_ring = remove_duplicates(&hole.positions, dedup_epsilon, true);
            if hole_ring.len() < MIN_RING_POINTS {
                continue;
            }
            outlines.push(hole_ring);
            queue.extend(hole.holes.iter());
        }
    }

    outlines
}

// =============================================================================
// DESCRIPTOR
// =============================================================================

/// Construction options for [`CoplanarPolygonOutlineGeometry`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoplanarPolygonOutlineOptions {
    /// Polygon to outline. Required.
    pub polygon_hierarchy: Option<PolygonHierarchy>,
}

/// Description of a coplanar polygon outline.
///
/// Holds the polygon hierarchy and the number of `f64` values its packed
/// form occupies. Geometry is built on demand by
/// [`create_geometry`](Self::create_geometry).
///
/// # Example
///
/// ```rust
/// use coplanar_outline::{CoplanarPolygonOutlineGeometry, Vec3};
///
/// let outline = CoplanarPolygonOutlineGeometry::from_positions(vec![
///     Vec3::new(0.0, 0.0, 0.0),
///     Vec3::new(0.0, 0.0, 1.0),
///     Vec3::new(1.0, 0.0, 1.0),
///     Vec3::new(1.0, 0.0, 0.0),
/// ]);
/// let geometry = outline.create_geometry().unwrap();
/// assert_eq!(geometry.indices.to_u32_vec(), vec![0, 1, 1, 2, 2, 3, 3, 0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CoplanarPolygonOutlineGeometry {
    polygon_hierarchy: PolygonHierarchy,
    packed_length: usize,
}

impl CoplanarPolygonOutlineGeometry {
    /// Creates a descriptor.
    ///
    /// # Errors
    ///
    /// [`OutlineError::MissingPolygonHierarchy`] when no hierarchy is given.
    pub fn new(options: CoplanarPolygonOutlineOptions) -> OutlineResult<Self> {
        let polygon_hierarchy = options
            .polygon_hierarchy
            .ok_or(OutlineError::MissingPolygonHierarchy)?;
        Ok(Self::from_hierarchy(polygon_hierarchy))
    }

    /// Creates a descriptor for a single ring without holes.
    pub fn from_positions(positions: Vec<Vec3>) -> Self {
        Self::from_hierarchy(PolygonHierarchy::new(positions))
    }

    /// Creates a descriptor from `[x, y, z, x, y, z, ...]`.
    ///
    /// # Errors
    ///
    /// [`OutlineError::InvalidCoordinateCount`] when the length is not a
    /// multiple of three.
    pub fn from_flat_positions(values: &[f64]) -> OutlineResult<Self> {
        let positions = unflatten(values).ok_or(OutlineError::InvalidCoordinateCount {
            count: values.len(),
        })?;
        Ok(Self::from_positions(positions))
    }

    fn from_hierarchy(polygon_hierarchy: PolygonHierarchy) -> Self {
        let packed_length = polygon_hierarchy.packed_length() + 1;
        Self {
            polygon_hierarchy,
            packed_length,
        }
    }

    /// The described polygon.
    #[inline]
    pub fn polygon_hierarchy(&self) -> &PolygonHierarchy {
        &self.polygon_hierarchy
    }

    /// Number of `f64` values [`pack`](Self::pack) writes.
    #[inline]
    pub fn packed_length(&self) -> usize {
        self.packed_length
    }

    /// Packs the descriptor into `buffer` at `offset`: the hierarchy followed
    /// by the packed length. Returns the index just past the written values.
    ///
    /// # Errors
    ///
    /// [`OutlineError::BufferTooSmall`] when fewer than
    /// [`packed_length`](Self::packed_length) values fit after `offset`.
    pub fn pack(&self, buffer: &mut [f64], offset: usize) -> OutlineResult<usize> {
        if buffer.len() < offset.saturating_add(self.packed_length) {
            return Err(OutlineError::BufferTooSmall {
                required: self.packed_length,
                offset,
                available: buffer.len(),
            });
        }
        let index = self.polygon_hierarchy.pack_into(buffer, offset)?;
        buffer[index] = self.packed_length as f64;
        Ok(index + 1)
    }

    /// Packs the descriptor into a new buffer of exactly
    /// [`packed_length`](Self::packed_length) values.
    pub fn to_packed(&self) -> Vec<f64> {
        let mut buffer = vec![0.0; self.packed_length];
        let index = self.polygon_hierarchy.write_unchecked(&mut buffer, 0);
        buffer[index] = self.packed_length as f64;
        buffer
    }

    /// Reads a descriptor packed at `offset`.
    ///
    /// # Errors
    ///
    /// Any error of [`PolygonHierarchy::unpack_from`], or
    /// [`OutlineError::PackedLengthMismatch`] when the trailing length does
    /// not match the decoded hierarchy.
    pub fn unpack(buffer: &[f64], offset: usize) -> OutlineResult<Self> {
        let (polygon_hierarchy, index) = PolygonHierarchy::unpack_from(buffer, offset)?;
        let found = read_value(buffer, index)?;
        let descriptor = Self::from_hierarchy(polygon_hierarchy);
        if found != descriptor.packed_length as f64 {
            return Err(OutlineError::PackedLengthMismatch {
                expected: descriptor.packed_length,
                found,
            });
        }
        Ok(descriptor)
    }

    /// Builds the outline with the default tolerances.
    ///
    /// Returns `None` when the polygon cannot be drawn: fewer than three
    /// distinct outer points, collinear or non-planar points, or no ring
    /// surviving deduplication.
    pub fn create_geometry(&self) -> Option<Geometry> {
        self.create_geometry_with_config(&OutlineConfig::default())
    }

    /// Builds the outline with explicit tolerances.
    pub fn create_geometry_with_config(&self, config: &OutlineConfig) -> Option<Geometry> {
        let hierarchy = &self.polygon_hierarchy;

        let outer_positions = remove_duplicates(&hierarchy.positions, config.dedup_epsilon, true);
        if outer_positions.len() < MIN_RING_POINTS {
            debug!(
                "skipping outline: {} distinct outer positions",
                outer_positions.len()
            );
            return None;
        }

        let Some(plane) = compute_projection_plane(&outer_positions, config.degenerate_axis_epsilon) else {
            debug!("skipping outline: outer positions are collinear");
            return None;
        };
        if !plane.is_flat(config.planarity_tolerance) {
            debug!(
                "skipping outline: thickness {} exceeds tolerance for extent {}",
                plane.half_thickness * 2.0,
                plane.half_extent * 2.0
            );
            return None;
        }

        let outlines = polygon_outlines_from_hierarchy(hierarchy, config.dedup_epsilon);
        if outlines.is_empty() {
            debug!("skipping outline: no ring survived deduplication");
            return None;
        }
        trace!("outlining {} rings", outlines.len());

        let geometries: Vec<Geometry> = outlines
            .iter()
            .map(|ring| create_geometry_from_positions(ring))
            .collect();
        let geometry = Geometry::combine(&geometries)?;

        Some(geometry.with_bounding_sphere(BoundingSphere::from_points(&hierarchy.positions)))
    }
}
