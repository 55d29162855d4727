//! Foundation types for the polyio workspace: the planar polygon model
//! (points, contours, polygons, bounding boxes) and presentation colors.
//!
//! The model stores geometry only. Areas, bounding boxes and centroids are
//! derived on demand and never cached. Set operations and triangulation are
//! supplied by an external geometry engine and are out of scope here.

pub mod color;
pub mod fmt;
pub mod geometry;
pub mod polygon;

pub use color::Color;
pub use geometry::{BoundingBox, Point};
pub use polygon::{Contour, Polygon};
