//! WASM-facing entry points for coplanar polygon outlines.
//!
//! This crate is compiled to a `cdylib` and consumed from a Web Worker via
//! `wasm-bindgen`. Native tests use the `*_internal` helpers, which expose
//! Rust error types directly and do not need a JS host.
//!
//! ```
//! let packed = [4.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 15.0];
//! let outline = coplanar_outline_wasm::create_outline_internal(&packed, 0)
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(outline.index_values(), &[0, 1, 1, 2, 2, 3, 3, 0]);
//! ```

use coplanar_outline::{
    create_coplanar_polygon_outline_geometry, CoplanarPolygonOutlineGeometry,
    CoplanarPolygonOutlineOptions, PolygonHierarchy, WorkerInput,
};
use wasm_bindgen::prelude::*;

mod error;
mod outline_handle;

pub use error::BoundaryError;
pub use outline_handle::OutlineGeometryHandle;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at worker startup.
/// // import { init_panic_hook } from "coplanar-outline-wasm";
/// // init_panic_hook();
/// ```
#[cfg(feature = "console_error_panic_hook")]
#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Routes `log` records at `level` and above to the browser console.
///
/// `level` is one of `error`, `warn`, `info`, `debug`, `trace`; anything
/// else falls back to `warn`. Calling it twice keeps the first logger.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_logging(level: Option<String>) {
    let level = level
        .as_deref()
        .and_then(|name| name.parse::<log::Level>().ok())
        .unwrap_or(log::Level::Warn);
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already installed");
    }
}

/// Builds the outline of a packed polygon description.
///
/// Returns `undefined` when the polygon cannot be drawn (fewer than three
/// distinct points, collinear or non-planar).
///
/// # Errors
/// Throws a JavaScript `Error` when the buffer is malformed.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const outline = createCoplanarPolygonOutlineGeometry(packed, 0);
/// // if (outline) console.log(outline.vertexCount, outline.primitiveType);
/// ```
#[wasm_bindgen(js_name = createCoplanarPolygonOutlineGeometry)]
pub fn create_coplanar_polygon_outline_geometry_js(
    packed: &[f64],
    offset: Option<u32>,
) -> Result<Option<OutlineGeometryHandle>, JsValue> {
    let offset = offset.unwrap_or(0) as usize;
    create_outline_internal(packed, offset).map_err(JsValue::from)
}

/// Builds the outline of a polygon hierarchy given as JSON:
/// `{ "positions": [[x, y, z], ...], "holes": [ ... ] }`.
///
/// # Errors
/// Throws a JavaScript `Error` when the JSON is not a polygon hierarchy.
#[wasm_bindgen(js_name = createCoplanarPolygonOutlineGeometryFromJson)]
pub fn create_outline_from_json(json: &str) -> Result<Option<OutlineGeometryHandle>, JsValue> {
    create_outline_from_json_internal(json).map_err(JsValue::from)
}

/// Packs a polygon hierarchy given as JSON into the flat transfer format.
///
/// # Errors
/// Throws a JavaScript `Error` when the JSON is not a polygon hierarchy.
#[wasm_bindgen(js_name = packCoplanarPolygonOutline)]
pub fn pack_outline(json: &str) -> Result<Vec<f64>, JsValue> {
    pack_outline_internal(json).map_err(JsValue::from)
}

/// Host-only implementation of `createCoplanarPolygonOutlineGeometry`.
///
/// # Errors
/// [`BoundaryError::Outline`] for malformed buffers.
pub fn create_outline_internal(
    packed: &[f64],
    offset: usize,
) -> Result<Option<OutlineGeometryHandle>, BoundaryError> {
    let geometry = create_coplanar_polygon_outline_geometry(WorkerInput::Packed {
        buffer: packed,
        offset,
    })?;
    Ok(geometry.map(OutlineGeometryHandle::from_geometry))
}

/// Host-only implementation of `createCoplanarPolygonOutlineGeometryFromJson`.
///
/// # Errors
/// [`BoundaryError::Json`] when parsing fails.
pub fn create_outline_from_json_internal(
    json: &str,
) -> Result<Option<OutlineGeometryHandle>, BoundaryError> {
    let descriptor = descriptor_from_json(json)?;
    let geometry = create_coplanar_polygon_outline_geometry(WorkerInput::Descriptor(descriptor))?;
    Ok(geometry.map(OutlineGeometryHandle::from_geometry))
}

/// Host-only implementation of `packCoplanarPolygonOutline`.
///
/// # Errors
/// [`BoundaryError::Json`] when parsing fails.
pub fn pack_outline_internal(json: &str) -> Result<Vec<f64>, BoundaryError> {
    Ok(descriptor_from_json(json)?.to_packed())
}

fn descriptor_from_json(json: &str) -> Result<CoplanarPolygonOutlineGeometry, BoundaryError> {
    let polygon_hierarchy: PolygonHierarchy = serde_json::from_str(json)?;
    Ok(CoplanarPolygonOutlineGeometry::new(CoplanarPolygonOutlineOptions {
        polygon_hierarchy: Some(polygon_hierarchy),
    })?)
}
