//! Plain-coordinate export for gnuplot's `plot "file" with lines`.
//!
//! The degenerate case of path emission with no styling and no layout: each
//! contour becomes a block of `x y` lines closed by repeating its first
//! point, blocks separated by blank lines.

use polyio_stream::{Destination, StreamError, resolve_for_write};
use polyio_traits::TriangulationProvider;
use polyio_types::fmt::compact;
use polyio_types::{Point, Polygon};
use std::io::Write;

/// Write every contour of every polygon as gnuplot line data.
///
/// Returns the written bytes for [`Destination::Buffer`], `None` otherwise.
pub fn write_gnuplot(
    destination: Destination,
    polygons: &[Polygon],
) -> Result<Option<Vec<u8>>, StreamError> {
    let mut handle = resolve_for_write(destination)?;
    for polygon in polygons {
        for contour in polygon {
            for p in contour.points() {
                write_point(&mut handle, p)?;
            }
            if let Some(first) = contour.points().first() {
                write_point(&mut handle, first)?;
            }
            writeln!(handle)?;
        }
    }
    log::debug!("gnuplot: wrote {} polygons", polygons.len());
    Ok(handle.finish()?)
}

/// Triangulate every polygon with `provider` and write each triangle as a
/// closed 4-point loop of gnuplot line data.
pub fn write_gnuplot_triangles(
    destination: Destination,
    polygons: &[Polygon],
    provider: &dyn TriangulationProvider,
) -> Result<Option<Vec<u8>>, StreamError> {
    let mut handle = resolve_for_write(destination)?;
    for polygon in polygons {
        for strip in provider.tri_strips(polygon) {
            for triangle in strip.windows(3) {
                let [a, b, c] = triangle else { continue };
                write_point(&mut handle, a)?;
                write_point(&mut handle, b)?;
                write_point(&mut handle, c)?;
                write_point(&mut handle, a)?;
                writeln!(handle)?;
            }
            writeln!(handle)?;
        }
    }
    Ok(handle.finish()?)
}

fn write_point(handle: &mut impl Write, p: &Point) -> Result<(), StreamError> {
    writeln!(handle, "{} {}", compact(p.x), compact(p.y))?;
    Ok(())
}
