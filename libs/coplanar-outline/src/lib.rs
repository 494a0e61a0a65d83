//! # Coplanar Outline
//!
//! Outline (wireframe) geometry for coplanar polygons with holes, plus a
//! flat `f64` transfer format for moving polygon descriptions across worker
//! boundaries.
//!
//! ## Architecture
//!
//! ```text
//! PolygonHierarchy ──pack──→ [f64] ──unpack──→ PolygonHierarchy
//!        ↓
//! CoplanarPolygonOutlineGeometry::create_geometry
//!        ↓
//! Geometry { positions (f64), line indices, bounding sphere }
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use coplanar_outline::{CoplanarPolygonOutlineGeometry, PrimitiveType, Vec3};
//!
//! let outline = CoplanarPolygonOutlineGeometry::from_positions(vec![
//!     Vec3::new(0.0, 0.0, 0.0),
//!     Vec3::new(0.0, 0.0, 1.0),
//!     Vec3::new(1.0, 0.0, 1.0),
//!     Vec3::new(1.0, 0.0, 0.0),
//! ]);
//!
//! // Ship it to a worker as plain numbers
//! let packed = outline.to_packed();
//! let received = CoplanarPolygonOutlineGeometry::unpack(&packed, 0).unwrap();
//!
//! let geometry = received.create_geometry().unwrap();
//! assert_eq!(geometry.primitive_type, PrimitiveType::Lines);
//! assert_eq!(geometry.vertex_count(), 4);
//! ```

pub mod bounding_sphere;
pub mod core;
pub mod dedup;
pub mod error;
pub mod geometry;
pub mod hierarchy;
pub mod outline;
pub mod plane;
pub mod settings;
pub mod worker;

pub use bounding_sphere::BoundingSphere;
pub use crate::core::vec3::Vec3;
pub use error::{OutlineError, OutlineResult};
pub use geometry::{ComponentDatatype, Geometry, GeometryAttribute, GeometryAttributes, IndexBuffer, PrimitiveType};
pub use hierarchy::PolygonHierarchy;
pub use outline::{CoplanarPolygonOutlineGeometry, CoplanarPolygonOutlineOptions, WORKER_NAME};
pub use settings::OutlineConfig;
pub use worker::{create_coplanar_polygon_outline_geometry, WorkerInput};
