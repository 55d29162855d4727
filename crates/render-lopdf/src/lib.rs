//! Single-page PDF export.
//!
//! The polygon collection is fitted into the page while preserving aspect,
//! then drawn back-to-front: each polygon's solid contours are filled with
//! the next color from the fill cycler, and its hole contours are painted
//! over in white. This painter's-algorithm hole simulation is a documented
//! limitation: holes are not compound paths, so overlapping scenes can
//! paint white over geometry beneath them.

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, dictionary};
use polyio_render_core::{Layout, RenderError, Sizing};
use polyio_stream::{Destination, resolve_for_write};
use polyio_style::StyleCycler;
use polyio_style::defaults::PDF_FILL_COLORS;
use polyio_types::{Color, Contour, Polygon};

/// A4 portrait in PDF points.
pub const A4: (f64, f64) = (595.0, 842.0);

/// Options for [`write_pdf`].
#[derive(Debug, Clone)]
pub struct PdfOptions {
    /// Page size in points, default A4.
    pub page_size: (f64, f64),
    /// Stroke width for contour outlines, default 0 (hairline).
    pub line_width: f64,
    /// Cyclic fill palette, default red/green/blue/yellow.
    pub fill_color: Option<Vec<Color>>,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            page_size: A4,
            line_width: 0.0,
            fill_color: None,
        }
    }
}

/// Render `polygons` as a one-page PDF into `destination`.
///
/// Returns the document bytes for [`Destination::Buffer`], `None` otherwise.
pub fn write_pdf(
    destination: Destination,
    polygons: &[Polygon],
    options: &PdfOptions,
) -> Result<Option<Vec<u8>>, RenderError> {
    let (page_width, page_height) = options.page_size;
    // PDF shares the model's upward y axis, so no flip is needed.
    let mut layout = Layout::compute(
        polygons,
        false,
        Sizing::FitPage { width: page_width, height: page_height },
    )?;
    layout.warp_into_canvas();

    let mut fill_color = StyleCycler::with_fallback(options.fill_color.clone(), &PDF_FILL_COLORS);

    let mut content = Content { operations: vec![] };
    content
        .operations
        .push(Operation::new("w", vec![options.line_width.into()]));
    for polygon in layout.polygons() {
        draw_polygon(&mut content, polygon, *fill_color.advance());
    }

    let bytes = assemble_document(content, page_width, page_height)?;
    log::debug!(
        "pdf: {} polygons on a {}x{} pt page ({} bytes)",
        polygons.len(),
        page_width,
        page_height,
        bytes.len()
    );

    let mut handle = resolve_for_write(destination)?;
    std::io::Write::write_all(&mut handle, &bytes)?;
    Ok(handle.finish()?)
}

fn draw_polygon(content: &mut Content, polygon: &Polygon, fill: Color) {
    set_fill_color(content, fill);
    for contour in polygon.iter().filter(|c| !c.is_hole()) {
        draw_contour(content, contour);
    }
    // overpaint holes in white rather than building compound paths
    set_fill_color(content, Color::WHITE);
    for contour in polygon.iter().filter(|c| c.is_hole()) {
        draw_contour(content, contour);
    }
}

fn set_fill_color(content: &mut Content, color: Color) {
    let (r, g, b) = color.to_unit_components();
    content
        .operations
        .push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
}

fn draw_contour(content: &mut Content, contour: &Contour) {
    let points = contour.points();
    let Some(first) = points.first() else { return };
    content
        .operations
        .push(Operation::new("m", vec![first.x.into(), first.y.into()]));
    for p in &points[1..] {
        content
            .operations
            .push(Operation::new("l", vec![p.x.into(), p.y.into()]));
    }
    content.operations.push(Operation::new("h", vec![]));
    // fill and stroke, like the SVG path's fill+stroke styling
    content.operations.push(Operation::new("B", vec![]));
}

fn assemble_document(
    content: Content,
    page_width: f64,
    page_height: f64,
) -> Result<Vec<u8>, RenderError> {
    let mut document = Document::with_version("1.7");
    let pages_id = document.new_object_id();

    let encoded = content
        .encode()
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    let content_id = document.add_object(Stream::new(Dictionary::new(), encoded));

    let page_id = document.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), page_width.into(), page_height.into()],
        "Contents" => content_id,
        "Resources" => Object::Dictionary(Dictionary::new()),
    });

    document.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::from(page_id)],
            "Count" => 1,
        }),
    );

    let catalog_id = document.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    document.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    document
        .save_to(&mut bytes)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    Ok(bytes)
}
