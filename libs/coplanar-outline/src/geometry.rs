//! # Geometry Data Structure
//!
//! Vertex attributes, index buffer and primitive type ready for GPU upload.
//!
//! All positions are kept as f64. Narrowing to f32 only happens at the WASM
//! boundary, on request.

use config::constants::SIXTY_FOUR_KILOBYTES;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::bounding_sphere::BoundingSphere;

// =============================================================================
// ENUMS
// =============================================================================

/// Element type of an attribute buffer, with WebGL enum values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u32)]
pub enum ComponentDatatype {
    /// 8-bit signed integer
    Byte = 5120,
    /// 8-bit unsigned integer
    UnsignedByte = 5121,
    /// 16-bit signed integer
    Short = 5122,
    /// 16-bit unsigned integer
    UnsignedShort = 5123,
    /// 32-bit signed integer
    Int = 5124,
    /// 32-bit unsigned integer
    UnsignedInt = 5125,
    /// 32-bit float
    Float = 5126,
    /// 64-bit float
    Double = 5130,
}

impl ComponentDatatype {
    /// Size of one component in bytes.
    pub fn size_in_bytes(self) -> usize {
        match self {
            Self::Byte | Self::UnsignedByte => 1,
            Self::Short | Self::UnsignedShort => 2,
            Self::Int | Self::UnsignedInt | Self::Float => 4,
            Self::Double => 8,
        }
    }
}

/// How indices are assembled into primitives, with WebGL enum values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u32)]
pub enum PrimitiveType {
    /// Independent points
    Points = 0,
    /// Independent segments, two indices each
    Lines = 1,
    /// Closed polyline
    LineLoop = 2,
    /// Open polyline
    LineStrip = 3,
    /// Independent triangles
    Triangles = 4,
    /// Triangle strip
    TriangleStrip = 5,
    /// Triangle fan
    TriangleFan = 6,
}

impl PrimitiveType {
    /// WebGL enum value.
    #[inline]
    pub fn code(self) -> u32 {
        self as u32
    }
}

// =============================================================================
// ATTRIBUTES
// =============================================================================

/// One named vertex attribute buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryAttribute {
    /// Element type the values are uploaded as.
    pub component_datatype: ComponentDatatype,
    /// Components per vertex (3 for positions).
    pub components_per_attribute: usize,
    /// Whether integer values are normalized on upload.
    pub normalize: bool,
    /// Flattened values.
    pub values: Vec<f64>,
}

impl GeometryAttribute {
    /// Double-precision xyz positions.
    pub fn positions(values: Vec<f64>) -> Self {
        Self {
            component_datatype: ComponentDatatype::Double,
            components_per_attribute: 3,
            normalize: false,
            values,
        }
    }

    /// Number of vertices in the buffer.
    #[inline]
    pub fn count(&self) -> usize {
        self.values.len() / self.components_per_attribute
    }
}

/// Named attribute buffers of a geometry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometryAttributes {
    /// Vertex positions.
    pub position: Option<GeometryAttribute>,
}

// =============================================================================
// INDEX BUFFER
// =============================================================================

/// Index buffer sized to the vertex count it addresses.
///
/// # Example
///
/// ```rust
/// use coplanar_outline::IndexBuffer;
///
/// let small = IndexBuffer::for_vertex_count(4, vec![0, 1, 1, 2]);
/// assert!(matches!(small, IndexBuffer::U16(_)));
///
/// let large = IndexBuffer::for_vertex_count(70_000, vec![0, 69_999]);
/// assert!(matches!(large, IndexBuffer::U32(_)));
/// assert_eq!(large.get(1), Some(69_999));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndexBuffer {
    /// 16-bit indices, for fewer than 65 536 vertices
    U16(Vec<u16>),
    /// 32-bit indices
    U32(Vec<u32>),
}

impl Default for IndexBuffer {
    fn default() -> Self {
        Self::U16(Vec::new())
    }
}

impl IndexBuffer {
    /// Chooses the narrowest index type able to address `vertex_count`
    /// vertices.
    pub fn for_vertex_count(vertex_count: usize, indices: Vec<u32>) -> Self {
        if vertex_count < SIXTY_FOUR_KILOBYTES {
            Self::U16(indices.into_iter().map(|i| i as u16).collect())
        } else {
            Self::U32(indices)
        }
    }

    /// Number of indices.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Self::U16(v) => v.len(),
            Self::U32(v) => v.len(),
        }
    }

    /// True if there are no indices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index at `position`.
    pub fn get(&self, position: usize) -> Option<u32> {
        match self {
            Self::U16(v) => v.get(position).map(|&i| u32::from(i)),
            Self::U32(v) => v.get(position).copied(),
        }
    }

    /// Iterates the indices widened to `u32`.
    pub fn iter(&self) -> Box<dyn Iterator<Item = u32> + '_> {
        match self {
            Self::U16(v) => Box::new(v.iter().map(|&i| u32::from(i))),
            Self::U32(v) => Box::new(v.iter().copied()),
        }
    }

    /// Copies the indices into a `u32` vector.
    pub fn to_u32_vec(&self) -> Vec<u32> {
        self.iter().collect()
    }

    /// Element type of the buffer.
    pub fn datatype(&self) -> ComponentDatatype {
        match self {
            Self::U16(_) => ComponentDatatype::UnsignedShort,
            Self::U32(_) => ComponentDatatype::UnsignedInt,
        }
    }
}

// =============================================================================
// GEOMETRY
// =============================================================================

/// Renderable geometry: attributes, indices, primitive type and an optional
/// bounding sphere.
///
/// # Example
///
/// ```rust
/// use coplanar_outline::{Geometry, GeometryAttribute, GeometryAttributes, IndexBuffer, PrimitiveType};
///
/// let geometry = Geometry::new(
///     GeometryAttributes {
///         position: Some(GeometryAttribute::positions(vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0])),
///     },
///     IndexBuffer::for_vertex_count(2, vec![0, 1]),
///     PrimitiveType::Lines,
/// );
/// assert_eq!(geometry.vertex_count(), 2);
/// assert_eq!(geometry.segment_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Vertex attribute buffers
    pub attributes: GeometryAttributes,
    /// Index buffer
    pub indices: IndexBuffer,
    /// How indices form primitives
    pub primitive_type: PrimitiveType,
    /// Enclosing sphere, when known
    pub bounding_sphere: Option<BoundingSphere>,
}

impl Geometry {
    /// Creates a geometry without a bounding sphere.
    pub fn new(attributes: GeometryAttributes, indices: IndexBuffer, primitive_type: PrimitiveType) -> Self {
        Self {
            attributes,
            indices,
            primitive_type,
            bounding_sphere: None,
        }
    }

    /// Attaches a bounding sphere.
    pub fn with_bounding_sphere(mut self, sphere: BoundingSphere) -> Self {
        self.bounding_sphere = Some(sphere);
        self
    }

    /// Flattened positions, empty when there is no position attribute.
    #[inline]
    pub fn positions(&self) -> &[f64] {
        self.attributes
            .position
            .as_ref()
            .map(|attribute| attribute.values.as_slice())
            .unwrap_or(&[])
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.attributes.position.as_ref().map_or(0, GeometryAttribute::count)
    }

    /// Number of line segments, for line lists.
    #[inline]
    pub fn segment_count(&self) -> usize {
        match self.primitive_type {
            PrimitiveType::Lines => self.indices.len() / 2,
            _ => 0,
        }
    }

    /// Concatenates geometries into one, offsetting each geometry's indices
    /// by the vertices that precede it. The index width is chosen for the
    /// combined vertex count and bounding spheres are dropped.
    ///
    /// Returns `None` for an empty input or mixed primitive types.
    pub fn combine(geometries: &[Geometry]) -> Option<Geometry> {
        let first = geometries.first()?;
        if let Some(other) = geometries
            .iter()
            .find(|g| g.primitive_type != first.primitive_type)
        {
            warn!(
                "cannot combine {:?} with {:?} geometry",
                first.primitive_type, other.primitive_type
            );
            return None;
        }

        let vertex_count: usize = geometries.iter().map(Geometry::vertex_count).sum();
        let index_count: usize = geometries.iter().map(|g| g.indices.len()).sum();

        let mut positions = Vec::with_capacity(vertex_count * 3);
        let mut indices = Vec::with_capacity(index_count);
        let mut offset = 0u32;
        for geometry in geometries {
            positions.extend_from_slice(geometry.positions());
            indices.extend(geometry.indices.iter().map(|i| i + offset));
            offset += geometry.vertex_count() as u32;
        }

        Some(Geometry::new(
            GeometryAttributes {
                position: Some(GeometryAttribute::positions(positions)),
            },
            IndexBuffer::for_vertex_count(vertex_count, indices),
            first.primitive_type,
        ))
    }

    /// Exports positions as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn positions_f32(&self) -> Vec<f32> {
        self.positions().iter().map(|&v| v as f32).collect()
    }

    /// Checks that every index addresses an existing vertex.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertex_count();
        self.indices.iter().all(|i| (i as usize) < vertex_count)
    }
}
