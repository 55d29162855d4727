use crate::geometry::{BoundingBox, Point};
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// A closed polyline, implicitly joining its last point back to the first,
/// tagged as solid or hole.
///
/// Point order is significant (it determines winding); the hole flag is a
/// classification supplied by whoever built the contour, not something
/// recomputed here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contour {
    points: Vec<Point>,
    hole: bool,
}

impl Contour {
    pub fn new(points: Vec<Point>, hole: bool) -> Self {
        Self { points, hole }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_hole(&self) -> bool {
        self.hole
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(self.points.iter().copied())
    }

    /// Unsigned area of the closed polyline (shoelace formula).
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    fn signed_area(&self) -> f64 {
        if self.points.len() < 3 {
            return 0.0;
        }
        let mut sum = 0.0;
        for (a, b) in self.edge_pairs() {
            sum += a.x * b.y - b.x * a.y;
        }
        sum / 2.0
    }

    /// Area centroid of the closed polyline. Falls back to the vertex mean
    /// for degenerate (zero-area) contours; `None` when there are no points.
    pub fn centroid(&self) -> Option<Point> {
        if self.points.is_empty() {
            return None;
        }
        let signed = self.signed_area();
        if signed == 0.0 {
            let n = self.points.len() as f64;
            let (sx, sy) = self
                .points
                .iter()
                .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
            return Some(Point::new(sx / n, sy / n));
        }
        let mut cx = 0.0;
        let mut cy = 0.0;
        for (a, b) in self.edge_pairs() {
            let cross = a.x * b.y - b.x * a.y;
            cx += (a.x + b.x) * cross;
            cy += (a.y + b.y) * cross;
        }
        let scale = 1.0 / (6.0 * signed);
        Some(Point::new(cx * scale, cy * scale))
    }

    fn edge_pairs(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    fn map_points(&mut self, f: impl Fn(Point) -> Point) {
        for p in &mut self.points {
            *p = f(*p);
        }
    }
}

/// An ordered sequence of contours forming a multi-contour region with
/// optional holes.
///
/// Insertion order is preserved across iteration, indexing and every
/// serialization format. A polygon with zero contours is a valid empty
/// region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    contours: Vec<Contour>,
}

impl Polygon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_contours(contours: Vec<Contour>) -> Self {
        Self { contours }
    }

    /// Append a contour built from `points`, tagged solid or hole.
    pub fn add_contour<I, P>(&mut self, points: I, hole: bool)
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        let points = points.into_iter().map(Into::into).collect();
        self.contours.push(Contour::new(points, hole));
    }

    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contour> {
        self.contours.iter()
    }

    pub fn len(&self) -> usize {
        self.contours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    /// Total enclosed area: solid contour areas minus hole contour areas.
    pub fn area(&self) -> f64 {
        self.contours
            .iter()
            .map(|c| if c.is_hole() { -c.area() } else { c.area() })
            .sum()
    }

    /// Aggregate bounding box over all contours, `None` when empty.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let mut boxes = self.contours.iter().filter_map(Contour::bounding_box);
        let mut bb = boxes.next()?;
        for other in boxes {
            bb.merge(&other);
        }
        Some(bb)
    }

    /// Area-weighted center of gravity, holes counting negative. Falls back
    /// to the mean of contour centroids when the net area is zero.
    pub fn centroid(&self) -> Option<Point> {
        let mut weighted = (0.0, 0.0);
        let mut total_area = 0.0;
        let mut mean = (0.0, 0.0);
        let mut count = 0usize;
        for c in &self.contours {
            let Some(center) = c.centroid() else { continue };
            let weight = if c.is_hole() { -c.area() } else { c.area() };
            weighted.0 += center.x * weight;
            weighted.1 += center.y * weight;
            total_area += weight;
            mean.0 += center.x;
            mean.1 += center.y;
            count += 1;
        }
        if count == 0 {
            return None;
        }
        if total_area == 0.0 {
            let n = count as f64;
            return Some(Point::new(mean.0 / n, mean.1 / n));
        }
        Some(Point::new(weighted.0 / total_area, weighted.1 / total_area))
    }

    /// Mirror the polygon across the horizontal line `y = axis`.
    ///
    /// Destructive; renderers apply this to clones only.
    pub fn flip_vertical(&mut self, axis: f64) {
        for c in &mut self.contours {
            c.map_points(|p| Point::new(p.x, 2.0 * axis - p.y));
        }
    }

    /// Remap the polygon so that its own bounding box coincides with
    /// `target`, scaling each axis independently.
    ///
    /// A zero-extent axis collapses onto the target minimum. Destructive;
    /// renderers apply this to clones only. No-op for an empty polygon.
    pub fn warp_to_box(&mut self, target: BoundingBox) {
        let Some(own) = self.bounding_box() else { return };
        let sx = ratio(target.width(), own.width());
        let sy = ratio(target.height(), own.height());
        for c in &mut self.contours {
            c.map_points(|p| {
                Point::new(
                    target.x_min + (p.x - own.x_min) * sx,
                    target.y_min + (p.y - own.y_min) * sy,
                )
            });
        }
    }
}

fn ratio(target_extent: f64, own_extent: f64) -> f64 {
    if own_extent == 0.0 { 0.0 } else { target_extent / own_extent }
}

impl Index<usize> for Polygon {
    type Output = Contour;

    fn index(&self, index: usize) -> &Contour {
        &self.contours[index]
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a Contour;
    type IntoIter = std::slice::Iter<'a, Contour>;

    fn into_iter(self) -> Self::IntoIter {
        self.contours.iter()
    }
}
