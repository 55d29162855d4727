//! polyio: polygon interchange and vector export.
//!
//! This crate moves planar multi-contour polygon geometry (with holes)
//! between an in-memory model and several interchange formats:
//!
//! - a compact binary wire format ([`encode_binary`] / [`decode_binary`]),
//! - a readable XML document format ([`write_xml`] / [`read_xml`]),
//! - styled SVG paths ([`write_svg`]),
//! - a single-page PDF rendering ([`write_pdf`]),
//! - raw gnuplot coordinate data ([`gnuplot::write_gnuplot`]).
//!
//! Every writer accepts a [`Destination`] (in-memory buffer, file path, or
//! an already-open stream) and every reader a [`Source`]; see
//! [`polyio_stream`] for the resolution rules.
//!
//! Computational geometry (boolean operations, triangulation) is not done
//! here; the triangle exporter consumes an external
//! [`TriangulationProvider`].
//!
//! ```no_run
//! use polyio::{Destination, Polygon, SvgOptions, write_svg};
//!
//! let mut polygon = Polygon::new();
//! polygon.add_contour(vec![(0.0, 0.0), (4.0, 0.0), (2.0, 3.0)], false);
//! write_svg(
//!     Destination::path("triangle.svg"),
//!     &[polygon],
//!     &SvgOptions::default(),
//! )?;
//! # Ok::<(), polyio::RenderError>(())
//! ```

pub mod gnuplot;

pub use polyio_codec::{CodecError, decode_binary, encode_binary};
pub use polyio_render_core::{Layout, RenderError, Sizing};
pub use polyio_render_lopdf::{PdfOptions, write_pdf};
pub use polyio_render_svg::{SvgOptions, svg_document, write_svg};
pub use polyio_stream::{
    Destination, ReadHandle, Source, StreamError, WriteHandle, resolve_for_read,
    resolve_for_write,
};
pub use polyio_style::{StyleCycler, StyleError, defaults};
pub use polyio_traits::TriangulationProvider;
pub use polyio_types::{BoundingBox, Color, Contour, Point, Polygon};
pub use polyio_xml::{XmlError, read_xml, write_xml};

/// Crate version, from the package metadata.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Package authors, from the package metadata.
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

/// License identifier, from the package metadata.
pub const LICENSE: &str = env!("CARGO_PKG_LICENSE");

#[cfg(test)]
mod tests {
    #[test]
    fn metadata_accessors_are_populated() {
        assert!(!super::version().is_empty());
        assert!(!super::AUTHORS.is_empty());
        assert_eq!(super::LICENSE, "MIT");
    }
}
