//! # Outline Handle
//!
//! WASM-friendly wrapper for outline geometry that can be transferred to
//! JavaScript.

use coplanar_outline::{BoundingSphere, Geometry};
use wasm_bindgen::prelude::*;

/// A handle to line-list outline data that can be accessed from JavaScript.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const outline = createCoplanarPolygonOutlineGeometry(packed);
/// if (outline) {
///   const geometry = new THREE.BufferGeometry();
///   geometry.setAttribute('position', new THREE.BufferAttribute(new Float32Array(outline.positions()), 3));
///   geometry.setIndex(new THREE.BufferAttribute(outline.indices(), 1));
///   const [cx, cy, cz, radius] = outline.boundingSphere();
/// }
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct OutlineGeometryHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    positions: Vec<f64>,
    /// Segment indices as [i0, i1, i0, i1, ...]
    indices: Vec<u32>,
    primitive_type: u32,
    index_datatype: u32,
    bounding_sphere: Option<BoundingSphere>,
}

#[wasm_bindgen]
impl OutlineGeometryHandle {
    /// WebGL primitive type code (`1` for lines).
    #[wasm_bindgen(getter, js_name = primitiveType)]
    pub fn primitive_type(&self) -> u32 {
        self.primitive_type
    }

    /// WebGL component datatype code of the index buffer.
    ///
    /// `5123` (unsigned short) below 65 536 vertices, `5125` (unsigned int)
    /// otherwise.
    #[wasm_bindgen(getter, js_name = indexDatatype)]
    pub fn index_datatype(&self) -> u32 {
        self.index_datatype
    }

    /// Number of vertices.
    #[wasm_bindgen(getter, js_name = vertexCount)]
    pub fn vertex_count(&self) -> u32 {
        (self.positions.len() / 3) as u32
    }

    /// Number of line segments.
    #[wasm_bindgen(getter, js_name = segmentCount)]
    pub fn segment_count(&self) -> u32 {
        (self.indices.len() / 2) as u32
    }

    /// Returns the vertex positions as a Float64Array.
    #[wasm_bindgen]
    pub fn positions(&self) -> js_sys::Float64Array {
        js_sys::Float64Array::from(&self.positions[..])
    }

    /// Returns the vertex positions narrowed to a Float32Array.
    #[wasm_bindgen(js_name = positionsF32)]
    pub fn positions_f32(&self) -> js_sys::Float32Array {
        let narrowed: Vec<f32> = self.positions.iter().map(|&v| v as f32).collect();
        js_sys::Float32Array::from(&narrowed[..])
    }

    /// Returns the segment indices as a Uint32Array.
    #[wasm_bindgen]
    pub fn indices(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(&self.indices[..])
    }

    /// Returns `[centerX, centerY, centerZ, radius]`, if available.
    #[wasm_bindgen(js_name = boundingSphere)]
    pub fn bounding_sphere(&self) -> Option<js_sys::Float64Array> {
        self.bounding_sphere_values()
            .map(|values| js_sys::Float64Array::from(&values[..]))
    }
}

impl OutlineGeometryHandle {
    /// Creates a handle from a kernel geometry.
    pub fn from_geometry(geometry: Geometry) -> Self {
        Self {
            positions: geometry.positions().to_vec(),
            indices: geometry.indices.to_u32_vec(),
            primitive_type: geometry.primitive_type.code(),
            index_datatype: geometry.indices.datatype() as u32,
            bounding_sphere: geometry.bounding_sphere,
        }
    }

    /// Position values, for host-side callers.
    pub fn position_values(&self) -> &[f64] {
        &self.positions
    }

    /// Index values, for host-side callers.
    pub fn index_values(&self) -> &[u32] {
        &self.indices
    }

    /// Bounding sphere as `[cx, cy, cz, r]`, for host-side callers.
    pub fn bounding_sphere_values(&self) -> Option<[f64; 4]> {
        self.bounding_sphere.map(|sphere| {
            [sphere.center.x, sphere.center.y, sphere.center.z, sphere.radius]
        })
    }
}
