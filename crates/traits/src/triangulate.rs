use polyio_types::{Point, Polygon};

/// A trait for turning polygons into triangle strips.
///
/// Triangulation is the job of the external polygon engine; writers that
/// need triangle data (the gnuplot triangle exporter) take an implementation
/// of this trait rather than triangulating themselves.
///
/// A strip is an ordered vertex list where every window of three
/// consecutive vertices `(v[i], v[i+1], v[i+2])` forms one triangle. A strip
/// with fewer than three vertices contains no triangles. The result is
/// assumed correct and is not validated.
pub trait TriangulationProvider {
    /// Decompose `polygon` into triangle strips covering its solid area.
    fn tri_strips(&self, polygon: &Polygon) -> Vec<Vec<Point>>;
}

impl<T: TriangulationProvider + ?Sized> TriangulationProvider for &T {
    fn tri_strips(&self, polygon: &Polygon) -> Vec<Vec<Point>> {
        (**self).tri_strips(polygon)
    }
}
