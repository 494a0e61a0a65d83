//! # Polygon Hierarchy
//!
//! Tree of rings describing a polygon: an outer ring plus holes, where each
//! hole may carry islands of its own.
//!
//! ## Packed Layout
//!
//! ```text
//! [n, x0, y0, z0, ..., x(n-1), y(n-1), z(n-1), h, <hole 0>, ..., <hole h-1>]
//! ```
//!
//! Counts are stored as `f64` integers so that the whole description fits a
//! single `Float64Array` when crossing a worker boundary.

use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use serde::{Deserialize, Serialize};
use stacker::maybe_grow;

use crate::core::vec3::Vec3;
use crate::error::{OutlineError, OutlineResult};

/// Values per packed position.
const COMPONENTS_PER_POSITION: usize = 3;

/// Outer ring positions plus nested hole hierarchies.
///
/// # Example
///
/// ```rust
/// use coplanar_outline::{PolygonHierarchy, Vec3};
///
/// let hole = PolygonHierarchy::new(vec![
///     Vec3::new(0.25, 0.25, 0.0),
///     Vec3::new(0.75, 0.25, 0.0),
///     Vec3::new(0.5, 0.75, 0.0),
/// ]);
/// let polygon = PolygonHierarchy::with_holes(
///     vec![Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0), Vec3::Y],
///     vec![hole],
/// );
/// assert_eq!(polygon.ring_count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolygonHierarchy {
    /// Ring positions in order; the ring closes implicitly.
    pub positions: Vec<Vec3>,
    /// Holes cut out of this ring.
    #[serde(default)]
    pub holes: Vec<PolygonHierarchy>,
}

impl PolygonHierarchy {
    /// Creates a hierarchy with a single ring and no holes.
    pub fn new(positions: Vec<Vec3>) -> Self {
        Self {
            positions,
            holes: Vec::new(),
        }
    }

    /// Creates a hierarchy with holes.
    pub fn with_holes(positions: Vec<Vec3>, holes: Vec<PolygonHierarchy>) -> Self {
        Self { positions, holes }
    }

    /// Total number of rings in the tree, this one included.
    pub fn ring_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.holes.iter());
        }
        count
    }

    /// Number of `f64` values [`pack_into`](Self::pack_into) writes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use coplanar_outline::{PolygonHierarchy, Vec3};
    ///
    /// let ring = PolygonHierarchy::new(vec![Vec3::ZERO, Vec3::X, Vec3::Y]);
    /// // count + 9 coordinates + hole count
    /// assert_eq!(ring.packed_length(), 11);
    /// ```
    pub fn packed_length(&self) -> usize {
        let mut length = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            length += 2 + node.positions.len() * COMPONENTS_PER_POSITION;
            stack.extend(node.holes.iter());
        }
        length
    }

    /// Writes the hierarchy into `buffer` starting at `offset` and returns the
    /// index just past the written values.
    ///
    /// # Errors
    ///
    /// Returns [`OutlineError::BufferTooSmall`] when the buffer cannot hold
    /// [`packed_length`](Self::packed_length) values from `offset`. Nothing is
    /// written in that case.
    pub fn pack_into(&self, buffer: &mut [f64], offset: usize) -> OutlineResult<usize> {
        let required = self.packed_length();
        if buffer.len() < offset.saturating_add(required) {
            return Err(OutlineError::BufferTooSmall {
                required,
                offset,
                available: buffer.len(),
            });
        }
        Ok(self.write_unchecked(buffer, offset))
    }

    /// Reads a hierarchy from `buffer` at `offset`. Returns the hierarchy and
    /// the index just past the values read.
    ///
    /// # Errors
    ///
    /// - [`OutlineError::UnexpectedEndOfBuffer`] when the buffer is truncated
    /// - [`OutlineError::InvalidCount`] when a count is not a non-negative
    ///   integer
    pub fn unpack_from(buffer: &[f64], offset: usize) -> OutlineResult<(Self, usize)> {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            let mut index = offset;

            let positions_length = read_count(buffer, index, COMPONENTS_PER_POSITION)?;
            index += 1;
            let mut positions = Vec::with_capacity(positions_length);
            for _ in 0..positions_length {
                let end = index + COMPONENTS_PER_POSITION;
                let coords = buffer
                    .get(index..end)
                    .ok_or_else(|| OutlineError::end_of_buffer(end - 1, buffer.len()))?;
                positions.push(Vec3::new(coords[0], coords[1], coords[2]));
                index = end;
            }

            // Every hole needs at least its two count fields. `holes` grows as
            // holes decode so a malformed chain of counts reserves nothing up front.
            let holes_length = read_count(buffer, index, 2)?;
            index += 1;
            let mut holes = Vec::new();
            for _ in 0..holes_length {
                let (hole, next) = Self::unpack_from(buffer, index)?;
                holes.push(hole);
                index = next;
            }

            Ok((Self { positions, holes }, index))
        })
    }

    /// Writes without a length check; the caller guarantees
    /// [`packed_length`](Self::packed_length) values of room from `index`.
    pub(crate) fn write_unchecked(&self, buffer: &mut [f64], mut index: usize) -> usize {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            buffer[index] = self.positions.len() as f64;
            index += 1;
            for p in &self.positions {
                buffer[index..index + COMPONENTS_PER_POSITION].copy_from_slice(&[p.x, p.y, p.z]);
                index += COMPONENTS_PER_POSITION;
            }

            buffer[index] = self.holes.len() as f64;
            index += 1;
            for hole in &self.holes {
                index = hole.write_unchecked(buffer, index);
            }
            index
        })
    }
}

// Dropping level by level would recurse once per nested hole.
impl Drop for PolygonHierarchy {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.holes);
        while let Some(mut hole) = pending.pop() {
            pending.append(&mut hole.holes);
        }
    }
}

/// Reads a value from `buffer`, failing on a short buffer.
pub(crate) fn read_value(buffer: &[f64], index: usize) -> OutlineResult<f64> {
    buffer
        .get(index)
        .copied()
        .ok_or_else(|| OutlineError::end_of_buffer(index, buffer.len()))
}

/// Reads a count field whose items occupy at least `min_item_len` values each.
///
/// A count that cannot fit in the rest of the buffer is reported as a
/// truncated buffer at the count's own index, before anything is allocated
/// for it.
fn read_count(buffer: &[f64], index: usize, min_item_len: usize) -> OutlineResult<usize> {
    let value = read_value(buffer, index)?;
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
        return Err(OutlineError::InvalidCount { index, value });
    }
    let remaining = buffer.len() - index - 1;
    if value > (remaining / min_item_len) as f64 {
        return Err(OutlineError::end_of_buffer(index, buffer.len()));
    }
    Ok(value as usize)
}

#[cfg(test)]
mod tests;
