use crate::error::RenderError;
use polyio_types::{BoundingBox, Polygon};

/// Default edge length for the canvas axis chosen by the aspect ratio when
/// the caller gives neither width nor height.
const DEFAULT_CANVAS_UNITS: f64 = 300.0;

/// How the target surface dimensions are derived from the scene extent.
#[derive(Debug, Clone, Copy)]
pub enum Sizing {
    /// Free canvas (SVG): missing axes default to 300 units or derive from
    /// the aspect ratio; giving both width and height abandons the aspect.
    Canvas {
        width: Option<f64>,
        height: Option<f64>,
    },
    /// Fixed page (PDF): shrink one axis so the scene fits the page while
    /// preserving aspect.
    FitPage { width: f64, height: f64 },
}

/// A collection of polygons normalized into a shared coordinate frame.
///
/// Construction clones every input polygon (callers' geometry is never
/// touched), optionally flips the clones for downward-y targets, and
/// resolves the target surface size. [`Layout::warp_into_canvas`] then maps
/// each polygon's bounding box into its proportional slot of the canvas, so
/// relative size and position within the aggregate bounding box are
/// preserved per axis.
#[derive(Debug)]
pub struct Layout {
    polygons: Vec<Polygon>,
    boxes: Vec<Option<BoundingBox>>,
    bounds: BoundingBox,
    width: f64,
    height: f64,
}

impl Layout {
    /// Normalize `polygons`. `flip_vertical` mirrors every clone across
    /// `y = 0` first, for targets like SVG whose y axis points down.
    ///
    /// Fails with [`RenderError::DegenerateExtent`] when the aggregate
    /// bounding box has zero extent in both axes (no scale can be
    /// established).
    pub fn compute(
        polygons: &[Polygon],
        flip_vertical: bool,
        sizing: Sizing,
    ) -> Result<Self, RenderError> {
        let mut clones: Vec<Polygon> = polygons.to_vec();
        if flip_vertical {
            for p in &mut clones {
                p.flip_vertical(0.0);
            }
        }

        let boxes: Vec<Option<BoundingBox>> =
            clones.iter().map(Polygon::bounding_box).collect();
        let mut present = boxes.iter().flatten();
        let mut bounds = *present.next().ok_or(RenderError::DegenerateExtent)?;
        for bb in present {
            bounds.merge(bb);
        }

        let x_extent = bounds.width();
        let y_extent = bounds.height();
        if x_extent == 0.0 && y_extent == 0.0 {
            return Err(RenderError::DegenerateExtent);
        }

        let (width, height) = resolve_dimensions(sizing, x_extent, y_extent);
        log::debug!(
            "layout: {} polygons, extent {}x{}, surface {}x{}",
            clones.len(),
            x_extent,
            y_extent,
            width,
            height
        );

        Ok(Self { polygons: clones, boxes, bounds, width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Map a model-space x coordinate into the canvas frame.
    pub fn frame_x(&self, x: f64) -> f64 {
        self.width * proportion(x - self.bounds.x_min, self.bounds.width())
    }

    /// Map a model-space y coordinate into the canvas frame.
    pub fn frame_y(&self, y: f64) -> f64 {
        self.height * proportion(y - self.bounds.y_min, self.bounds.height())
    }

    /// Warp every polygon into its proportional slot of the canvas.
    ///
    /// Each polygon's own bounding box lands on the rectangle obtained by
    /// mapping that box through the aggregate frame; this keeps each
    /// polygon's size and position relative to the whole scene.
    pub fn warp_into_canvas(&mut self) {
        for (polygon, bb) in self.polygons.iter_mut().zip(&self.boxes) {
            let Some(bb) = bb else { continue };
            let target = BoundingBox::new(
                self.width * proportion(bb.x_min - self.bounds.x_min, self.bounds.width()),
                self.width * proportion(bb.x_max - self.bounds.x_min, self.bounds.width()),
                self.height * proportion(bb.y_min - self.bounds.y_min, self.bounds.height()),
                self.height * proportion(bb.y_max - self.bounds.y_min, self.bounds.height()),
            );
            polygon.warp_to_box(target);
        }
    }
}

/// Ratio with the zero-extent axis collapsing to the frame origin.
fn proportion(offset: f64, extent: f64) -> f64 {
    if extent == 0.0 { 0.0 } else { offset / extent }
}

fn resolve_dimensions(sizing: Sizing, x_extent: f64, y_extent: f64) -> (f64, f64) {
    match sizing {
        Sizing::Canvas { width, height } => {
            if x_extent == 0.0 || y_extent == 0.0 {
                // Aspect ratio is undefined; each axis stands on its own.
                return (
                    width.unwrap_or(DEFAULT_CANVAS_UNITS),
                    height.unwrap_or(DEFAULT_CANVAS_UNITS),
                );
            }
            let aspect = y_extent / x_extent;
            match (width, height) {
                (Some(w), Some(h)) => (w, h),
                (Some(w), None) => (w, w * aspect),
                (None, Some(h)) => (h / aspect, h),
                (None, None) => {
                    if aspect < 1.0 {
                        (DEFAULT_CANVAS_UNITS, DEFAULT_CANVAS_UNITS * aspect)
                    } else {
                        (DEFAULT_CANVAS_UNITS / aspect, DEFAULT_CANVAS_UNITS)
                    }
                }
            }
        }
        Sizing::FitPage { width, height } => {
            if x_extent == 0.0 || y_extent == 0.0 {
                return (width, height);
            }
            let aspect = y_extent / x_extent;
            if aspect > height / width {
                (height / aspect, height)
            } else {
                (width, width * aspect)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(origin: f64, size: f64) -> Polygon {
        let mut p = Polygon::new();
        p.add_contour(
            vec![
                (origin, origin),
                (origin + size, origin),
                (origin + size, origin + size),
                (origin, origin + size),
            ],
            false,
        );
        p
    }

    #[test]
    fn slots_preserve_relative_placement() {
        let polys = vec![square(0.0, 1.0), square(2.0, 1.0)];
        let mut layout = Layout::compute(
            &polys,
            false,
            Sizing::Canvas { width: Some(100.0), height: None },
        )
        .unwrap();
        assert_eq!(layout.width(), 100.0);
        assert_eq!(layout.height(), 100.0);

        layout.warp_into_canvas();
        let first = layout.polygons()[0].bounding_box().unwrap();
        let second = layout.polygons()[1].bounding_box().unwrap();

        // aggregate [0,3]: each unit maps to 100/3 canvas units
        assert!((first.x_max - 100.0 / 3.0).abs() < 1e-9);
        assert!((second.x_min - 200.0 / 3.0).abs() < 1e-9);
        assert!(second.x_min > first.x_max);
        // the 1-unit gap keeps its proportional share
        assert!((second.x_min - first.x_max - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn wide_scenes_default_to_width_300() {
        let mut p = Polygon::new();
        p.add_contour(vec![(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (0.0, 1.0)], false);
        let layout = Layout::compute(
            &[p],
            false,
            Sizing::Canvas { width: None, height: None },
        )
        .unwrap();
        assert_eq!(layout.width(), 300.0);
        assert_eq!(layout.height(), 150.0);
    }

    #[test]
    fn tall_scenes_default_to_height_300() {
        let mut p = Polygon::new();
        p.add_contour(vec![(0.0, 0.0), (1.0, 0.0), (1.0, 3.0), (0.0, 3.0)], false);
        let layout = Layout::compute(
            &[p],
            false,
            Sizing::Canvas { width: None, height: None },
        )
        .unwrap();
        assert_eq!(layout.width(), 100.0);
        assert_eq!(layout.height(), 300.0);
    }

    #[test]
    fn explicit_height_derives_width() {
        let mut p = Polygon::new();
        p.add_contour(vec![(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (0.0, 1.0)], false);
        let layout = Layout::compute(
            &[p],
            false,
            Sizing::Canvas { width: None, height: Some(50.0) },
        )
        .unwrap();
        assert_eq!(layout.width(), 100.0);
        assert_eq!(layout.height(), 50.0);
    }

    #[test]
    fn degenerate_extent_is_rejected() {
        let mut p = Polygon::new();
        p.add_contour(vec![(5.0, 5.0), (5.0, 5.0), (5.0, 5.0)], false);
        let err = Layout::compute(
            &[p],
            false,
            Sizing::Canvas { width: None, height: None },
        )
        .unwrap_err();
        assert!(matches!(err, RenderError::DegenerateExtent));
    }

    #[test]
    fn collection_of_empty_polygons_is_degenerate() {
        let err = Layout::compute(
            &[Polygon::new(), Polygon::new()],
            false,
            Sizing::Canvas { width: None, height: None },
        )
        .unwrap_err();
        assert!(matches!(err, RenderError::DegenerateExtent));
    }

    #[test]
    fn flip_mirrors_before_any_box_math() {
        let polys = vec![square(0.0, 1.0), square(2.0, 1.0)];
        let mut layout = Layout::compute(
            &polys,
            true,
            Sizing::Canvas { width: Some(90.0), height: Some(90.0) },
        )
        .unwrap();
        layout.warp_into_canvas();
        // after the flip the square that was on top (y in [2,3]) sits at the
        // bottom of the canvas frame
        let first = layout.polygons()[0].bounding_box().unwrap();
        let second = layout.polygons()[1].bounding_box().unwrap();
        assert!(second.y_min < first.y_min);
        assert_eq!(second.y_min, 0.0);
        assert_eq!(first.y_max, 90.0);
    }

    #[test]
    fn fit_page_preserves_aspect_within_page() {
        let mut p = Polygon::new();
        p.add_contour(vec![(0.0, 0.0), (10.0, 0.0), (10.0, 5.0), (0.0, 5.0)], false);
        let layout = Layout::compute(
            &[p],
            false,
            Sizing::FitPage { width: 595.0, height: 842.0 },
        )
        .unwrap();
        assert_eq!(layout.width(), 595.0);
        assert_eq!(layout.height(), 297.5);

        let mut tall = Polygon::new();
        tall.add_contour(vec![(0.0, 0.0), (5.0, 0.0), (5.0, 50.0), (0.0, 50.0)], false);
        let layout = Layout::compute(
            &[tall],
            false,
            Sizing::FitPage { width: 595.0, height: 842.0 },
        )
        .unwrap();
        assert_eq!(layout.height(), 842.0);
        assert!((layout.width() - 84.2).abs() < 1e-9);
    }

    #[test]
    fn zero_width_scene_collapses_x_to_frame_origin() {
        let mut p = Polygon::new();
        p.add_contour(vec![(1.0, 0.0), (1.0, 2.0), (1.0, 4.0)], false);
        let mut layout = Layout::compute(
            &[p],
            false,
            Sizing::Canvas { width: None, height: None },
        )
        .unwrap();
        assert_eq!(layout.width(), 300.0);
        assert_eq!(layout.height(), 300.0);
        layout.warp_into_canvas();
        let bb = layout.polygons()[0].bounding_box().unwrap();
        assert_eq!((bb.x_min, bb.x_max), (0.0, 0.0));
        assert_eq!((bb.y_min, bb.y_max), (0.0, 300.0));
    }
}
