//! Readable XML interchange for polygon lists.
//!
//! The document format is schema-light: one `<polygon>` element per
//! polygon carrying count, area and bounding-box attributes; nested
//! `<contour>` elements with the same per-contour metadata plus a 0/1
//! `isHole` flag; nested self-closing `<p x=".." y=".."/>` points in order.
//! On read only counts, coordinates and hole flags reconstruct geometry;
//! area and bounding-box attributes are metadata and are never re-validated.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::XmlError;
pub use reader::read_xml;
pub use writer::write_xml;
