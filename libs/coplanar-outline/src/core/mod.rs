//! Core vector aliases and helpers shared by the outline kernel.

pub mod vec3;
