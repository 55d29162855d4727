//! Core abstractions shared by the polyio vector exporters: the layout
//! normalizer that places a polygon collection into a target surface, and
//! the common rendering error type.

pub mod error;
pub mod layout;

pub use error::RenderError;
pub use layout::{Layout, Sizing};
