//! Capability traits for the external geometry engine.
//!
//! polyio never runs computational geometry itself; anything beyond simple
//! affine remapping is consumed through the narrow interfaces defined here.

pub mod triangulate;

pub use triangulate::TriangulationProvider;
