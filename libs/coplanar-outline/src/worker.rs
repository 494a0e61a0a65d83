//! # Worker Entry Point
//!
//! Adapter for hosts that run geometry creation off the main thread. The
//! descriptor either arrives as a value or packed into a shared `f64` buffer.

use log::trace;

use crate::error::OutlineResult;
use crate::geometry::Geometry;
use crate::outline::CoplanarPolygonOutlineGeometry;

/// Input handed to the worker.
#[derive(Debug, Clone)]
pub enum WorkerInput<'a> {
    /// Descriptor passed by value.
    Descriptor(CoplanarPolygonOutlineGeometry),
    /// Descriptor packed into `buffer` at `offset`.
    Packed {
        /// Shared transfer buffer
        buffer: &'a [f64],
        /// Index of the packed descriptor
        offset: usize,
    },
}

/// Builds the outline geometry, unpacking the descriptor first if needed.
///
/// # Errors
///
/// Only a malformed packed buffer is an error. A polygon that cannot be
/// drawn gives `Ok(None)`.
///
/// # Example
///
/// ```rust
/// use coplanar_outline::worker::{create_coplanar_polygon_outline_geometry, WorkerInput};
/// use coplanar_outline::{CoplanarPolygonOutlineGeometry, Vec3};
///
/// let packed = CoplanarPolygonOutlineGeometry::from_positions(vec![Vec3::ZERO, Vec3::X, Vec3::Y]).to_packed();
/// let geometry = create_coplanar_polygon_outline_geometry(WorkerInput::Packed { buffer: &packed, offset: 0 })
///     .unwrap()
///     .unwrap();
/// assert_eq!(geometry.vertex_count(), 3);
/// ```
pub fn create_coplanar_polygon_outline_geometry(input: WorkerInput<'_>) -> OutlineResult<Option<Geometry>> {
    let descriptor = match input {
        WorkerInput::Descriptor(descriptor) => descriptor,
        WorkerInput::Packed { buffer, offset } => {
            trace!("unpacking outline descriptor at offset {offset}");
            CoplanarPolygonOutlineGeometry::unpack(buffer, offset)?
        }
    };
    Ok(descriptor.create_geometry())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vec3::Vec3;
    use crate::error::OutlineError;

    fn triangle() -> CoplanarPolygonOutlineGeometry {
        CoplanarPolygonOutlineGeometry::from_positions(vec![
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(1.0, 0.0, 5.0),
            Vec3::new(0.0, 1.0, 5.0),
        ])
    }

    #[test]
    fn test_descriptor_and_packed_inputs_agree() {
        let descriptor = triangle();
        let mut buffer = vec![0.0; 4];
        buffer.extend(descriptor.to_packed());

        let direct = create_coplanar_polygon_outline_geometry(WorkerInput::Descriptor(descriptor)).unwrap();
        let packed = create_coplanar_polygon_outline_geometry(WorkerInput::Packed {
            buffer: &buffer,
            offset: 4,
        })
        .unwrap();
        assert!(direct.is_some());
        assert_eq!(direct, packed);
    }

    #[test]
    fn test_degenerate_input_is_not_an_error() {
        let packed = CoplanarPolygonOutlineGeometry::from_positions(vec![Vec3::ZERO; 3]).to_packed();
        let result = create_coplanar_polygon_outline_geometry(WorkerInput::Packed {
            buffer: &packed,
            offset: 0,
        });
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn test_deeply_nested_packed_input_returns() {
        let depth = 200_000;
        let mut buffer = Vec::with_capacity(2 * depth + 3);
        for _ in 0..depth {
            buffer.extend_from_slice(&[0.0, 1.0]);
        }
        buffer.extend_from_slice(&[0.0, 0.0]);
        buffer.push((buffer.len() + 1) as f64);

        let result = create_coplanar_polygon_outline_geometry(WorkerInput::Packed {
            buffer: &buffer,
            offset: 0,
        });
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn test_malformed_buffer_is_an_error() {
        let result = create_coplanar_polygon_outline_geometry(WorkerInput::Packed {
            buffer: &[3.0, 0.0],
            offset: 0,
        });
        assert!(matches!(result, Err(OutlineError::UnexpectedEndOfBuffer { .. })));
    }
}
