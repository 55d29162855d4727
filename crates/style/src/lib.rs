//! Presentation style values for the vector exporters: cyclic style
//! assignment and the documented default style tables.

pub mod cycler;
pub mod defaults;

pub use cycler::{StyleCycler, StyleError};
