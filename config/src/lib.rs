//! # Config Crate
//!
//! Centralized configuration constants for coplanar outline geometry.
//! Every tolerance used by the geometry kernel is defined here so that
//! deduplication, plane fitting and the worker boundary agree on the same
//! numbers.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{equals_epsilon, REMOVE_DUPLICATES_EPSILON};
//!
//! // Two coordinates closer than the dedup tolerance are the same point
//! assert!(equals_epsilon(1.0, 1.0 + 1e-12, REMOVE_DUPLICATES_EPSILON));
//! assert!(!equals_epsilon(1.0, 1.1, REMOVE_DUPLICATES_EPSILON));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
