//! # Error Types
//!
//! Error types for outline operations. Only programmer errors and malformed
//! transfer buffers are errors; polygons that cannot be drawn are reported as
//! `Ok(None)` by the geometry builders.
//!
//! ## Error Policy
//!
//! - Missing required inputs fail immediately
//! - Malformed packed buffers fail with the offending index
//! - No panics in library code

use thiserror::Error;

use crate::settings::OutlineConfigError;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while describing, packing or unpacking outlines.
///
/// ## Example
///
/// ```rust
/// use coplanar_outline::{CoplanarPolygonOutlineGeometry, CoplanarPolygonOutlineOptions, OutlineError};
///
/// let err = CoplanarPolygonOutlineGeometry::new(CoplanarPolygonOutlineOptions::default()).unwrap_err();
/// assert!(matches!(err, OutlineError::MissingPolygonHierarchy));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OutlineError {
    /// The descriptor was constructed without a polygon hierarchy.
    #[error("options.polygon_hierarchy is required")]
    MissingPolygonHierarchy,

    /// A flat coordinate list did not contain whole points.
    #[error("coordinate count {count} is not a multiple of 3")]
    InvalidCoordinateCount {
        /// Number of values received
        count: usize,
    },

    /// The destination buffer cannot hold the packed descriptor.
    #[error("buffer too small: need {required} values from offset {offset}, have {available}")]
    BufferTooSmall {
        /// Values the packed descriptor needs
        required: usize,
        /// Offset packing starts at
        offset: usize,
        /// Total buffer length
        available: usize,
    },

    /// A packed buffer ended before the descriptor was complete.
    #[error("unexpected end of packed buffer at index {index} (length {length})")]
    UnexpectedEndOfBuffer {
        /// Index that was read, or the count field asking for more values
        /// than remain
        index: usize,
        /// Buffer length
        length: usize,
    },

    /// A count field in a packed buffer is not a non-negative integer.
    #[error("invalid count {value} at index {index}")]
    InvalidCount {
        /// Index of the count field
        index: usize,
        /// Raw value found
        value: f64,
    },

    /// The trailing packed length disagrees with the decoded hierarchy.
    #[error("packed length mismatch: descriptor needs {expected}, buffer says {found}")]
    PackedLengthMismatch {
        /// Length computed from the decoded hierarchy
        expected: usize,
        /// Trailing value stored in the buffer
        found: f64,
    },

    /// Invalid kernel configuration.
    #[error("invalid configuration: {0}")]
    Config(#[from] OutlineConfigError),
}

impl OutlineError {
    /// Creates an end-of-buffer error for a read at `index`.
    pub fn end_of_buffer(index: usize, length: usize) -> Self {
        Self::UnexpectedEndOfBuffer { index, length }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for outline operations.
pub type OutlineResult<T> = Result<T, OutlineError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let err = OutlineError::BufferTooSmall {
            required: 14,
            offset: 2,
            available: 10,
        };
        assert!(err.to_string().contains("need 14"));

        let err = OutlineError::InvalidCount {
            index: 3,
            value: -1.0,
        };
        assert!(err.to_string().contains("index 3"));
        assert!(OutlineError::MissingPolygonHierarchy
            .to_string()
            .contains("polygon_hierarchy"));
    }

    /// Test error types are Send + Sync so workers can return them.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OutlineError>();
    }
}
