//! SVG export: one styled `<path>` per polygon, subpaths per contour,
//! cyclic style assignment and optional text labels.

use polyio_render_core::{Layout, RenderError, Sizing};
use polyio_stream::{Destination, resolve_for_write};
use polyio_style::defaults::{
    DEFAULT_FILL_COLORS, DEFAULT_FILL_OPACITY, DEFAULT_STROKE_COLORS, DEFAULT_STROKE_WIDTHS,
};
use polyio_style::StyleCycler;
use polyio_types::fmt::compact;
use polyio_types::{Color, Point, Polygon};
use std::fmt::Write as _;
use std::io::Write as _;

/// Options for [`write_svg`].
///
/// Each style list is cycled over the polygon sequence; omitted (or empty)
/// lists use the documented defaults. `labels`, when given, must match the
/// polygon count, and `labels_coords` the label count.
#[derive(Debug, Clone, Default)]
pub struct SvgOptions {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub fill_color: Option<Vec<Color>>,
    pub fill_opacity: Option<Vec<f64>>,
    pub stroke_color: Option<Vec<Color>>,
    pub stroke_width: Option<Vec<f64>>,
    pub labels: Option<Vec<String>>,
    pub labels_coords: Option<Vec<Point>>,
    /// Anchor label text at the middle of its bounding box instead of its
    /// start. Styling only; coordinates are unaffected.
    pub labels_centered: bool,
}

/// Render `polygons` as an SVG document into `destination`.
///
/// Returns the document bytes for [`Destination::Buffer`], `None` otherwise.
pub fn write_svg(
    destination: Destination,
    polygons: &[Polygon],
    options: &SvgOptions,
) -> Result<Option<Vec<u8>>, RenderError> {
    let document = svg_document(polygons, options)?;
    let mut handle = resolve_for_write(destination)?;
    handle.write_all(document.as_bytes())?;
    Ok(handle.finish()?)
}

/// Build the SVG document as a string.
pub fn svg_document(polygons: &[Polygon], options: &SvgOptions) -> Result<String, RenderError> {
    let labels = validate_labels(polygons.len(), options)?;

    let mut layout = Layout::compute(
        polygons,
        true, // SVG's y axis points down
        Sizing::Canvas { width: options.width, height: options.height },
    )?;

    // Label coordinates share the model's orientation, so they get the same
    // flip the polygons got before mapping into the frame.
    let coords: Option<Vec<Point>> = options.labels_coords.as_ref().map(|coords| {
        coords
            .iter()
            .map(|p| Point::new(layout.frame_x(p.x), layout.frame_y(-p.y)))
            .collect()
    });

    layout.warp_into_canvas();

    let mut fill_color = StyleCycler::with_fallback(options.fill_color.clone(), &DEFAULT_FILL_COLORS);
    let mut fill_opacity =
        StyleCycler::with_fallback(options.fill_opacity.clone(), &DEFAULT_FILL_OPACITY);
    let mut stroke_color =
        StyleCycler::with_fallback(options.stroke_color.clone(), &DEFAULT_STROKE_COLORS);
    let mut stroke_width =
        StyleCycler::with_fallback(options.stroke_width.clone(), &DEFAULT_STROKE_WIDTHS);

    let mut doc = String::new();
    doc.push_str("<?xml version=\"1.0\" encoding=\"iso-8859-1\" standalone=\"no\"?>\n");
    doc.push_str(
        "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.0//EN\" \
         \"http://www.w3.org/TR/2001/REC-SVG-20010904/DTD/svg10.dtd\">\n",
    );
    let _ = writeln!(
        doc,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">",
        layout.width().round() as i64,
        layout.height().round() as i64,
    );

    for (i, polygon) in layout.polygons().iter().enumerate() {
        let path = path_element(
            polygon,
            *fill_color.advance(),
            *fill_opacity.advance(),
            *stroke_color.advance(),
            *stroke_width.advance(),
        );

        match &labels {
            Some(labels) => {
                let anchor = match &coords {
                    Some(coords) => coords[i],
                    None => polygon.centroid().unwrap_or_default(),
                };
                // group polygon and label so consumers can pair them up
                doc.push_str("<g>\n");
                doc.push_str(&path);
                doc.push('\n');
                let _ = writeln!(doc, "{}", text_element(&labels[i], anchor, options.labels_centered));
                doc.push_str("</g>\n");
            }
            None => {
                doc.push_str(&path);
                doc.push('\n');
            }
        }
    }
    doc.push_str("</svg>");

    log::debug!(
        "svg: {} polygons on a {}x{} canvas",
        polygons.len(),
        layout.width(),
        layout.height()
    );
    Ok(doc)
}

/// Check label/coordinate counts; an empty label list counts as no labels.
fn validate_labels<'a>(
    polygon_count: usize,
    options: &'a SvgOptions,
) -> Result<Option<&'a [String]>, RenderError> {
    let Some(labels) = options.labels.as_deref() else {
        return Ok(None);
    };
    if labels.is_empty() {
        return Ok(None);
    }
    if labels.len() != polygon_count {
        return Err(RenderError::LabelCountMismatch {
            labels: labels.len(),
            polygons: polygon_count,
        });
    }
    if let Some(coords) = &options.labels_coords {
        if coords.len() != labels.len() {
            return Err(RenderError::LabelCoordMismatch {
                coords: coords.len(),
                labels: labels.len(),
            });
        }
    }
    Ok(Some(labels))
}

fn path_element(
    polygon: &Polygon,
    fill: Color,
    opacity: f64,
    stroke: Color,
    stroke_width: f64,
) -> String {
    let mut d = String::new();
    for contour in polygon {
        let points = contour.points();
        let Some(first) = points.first() else { continue };
        let _ = write!(d, "M {}, {}", compact(first.x), compact(first.y));
        for p in &points[1..] {
            let _ = write!(d, " L {}, {}", compact(p.x), compact(p.y));
        }
        d.push_str(" z ");
    }
    format!(
        "<path style=\"fill:{};fill-opacity:{};fill-rule:evenodd;stroke:{};stroke-width:{};\" d=\"{}\"/>",
        fill.to_rgb_string(),
        opacity,
        stroke.to_rgb_string(),
        stroke_width,
        d,
    )
}

fn text_element(label: &str, anchor: Point, centered: bool) -> String {
    let (dy, anchor_style) = if centered {
        ("dy=\"0.3em\" ", "text-anchor:middle;text-align:center")
    } else {
        ("", "")
    };
    format!(
        "<text x=\"{}\" y=\"{}\" {}style=\"font-size:10px;fill:black;font-family:Sans;{}\">{}</text>",
        compact(anchor.x),
        compact(anchor.y),
        dy,
        anchor_style,
        escape_text(label),
    )
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
