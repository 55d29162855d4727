//! End-to-end rendering tests: SVG, PDF and gnuplot exports driven through
//! the public crate surface.

use polyio::gnuplot::{write_gnuplot, write_gnuplot_triangles};
use polyio::{
    Destination, PdfOptions, Point, Polygon, RenderError, SvgOptions, TriangulationProvider,
    write_pdf, write_svg,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

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
fn svg_export_writes_a_file() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.svg");

    let polygons = vec![square(0.0, 1.0), square(2.0, 1.0)];
    let options = SvgOptions { width: Some(100.0), ..Default::default() };
    assert!(write_svg(Destination::path(&path), &polygons, &options)
        .unwrap()
        .is_none());

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("width=\"100\" height=\"100\""));
    assert_eq!(text.matches("<path ").count(), 2);
}

#[test]
fn svg_labels_match_polygons_one_to_one() {
    init_logging();
    let polygons = vec![square(0.0, 1.0), square(2.0, 1.0), square(4.0, 1.0)];
    let err = write_svg(
        Destination::Buffer,
        &polygons,
        &SvgOptions {
            labels: Some(vec!["a".into(), "b".into()]),
            ..Default::default()
        },
    )
    .unwrap_err();
    assert!(matches!(
        err,
        RenderError::LabelCountMismatch { labels: 2, polygons: 3 }
    ));
}

#[test]
fn degenerate_scene_fails_all_renderers() {
    init_logging();
    let mut point_like = Polygon::new();
    point_like.add_contour(vec![(3.0, 3.0), (3.0, 3.0), (3.0, 3.0)], false);
    let polygons = vec![point_like];

    let svg = write_svg(Destination::Buffer, &polygons, &SvgOptions::default());
    assert!(matches!(svg.unwrap_err(), RenderError::DegenerateExtent));

    let pdf = write_pdf(Destination::Buffer, &polygons, &PdfOptions::default());
    assert!(matches!(pdf.unwrap_err(), RenderError::DegenerateExtent));
}

#[test]
fn pdf_export_writes_a_parseable_header() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.pdf");

    let mut with_hole = square(0.0, 10.0);
    with_hole.add_contour(vec![(2.0, 2.0), (8.0, 2.0), (8.0, 8.0), (2.0, 8.0)], true);
    write_pdf(Destination::path(&path), &[with_hole], &PdfOptions::default()).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF-1.7"));
    assert!(bytes.ends_with(b"%%EOF\n") || bytes.windows(5).any(|w| w == b"%%EOF"));
}

#[test]
fn gnuplot_export_closes_every_contour() {
    init_logging();
    let bytes = write_gnuplot(Destination::Buffer, &[square(0.0, 2.0)])
        .unwrap()
        .unwrap();
    let text = String::from_utf8(bytes).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], lines[4], "first point repeats to close the loop");
    assert_eq!(lines[5], "");
}

struct StripTriangulator;

impl TriangulationProvider for StripTriangulator {
    fn tri_strips(&self, polygon: &Polygon) -> Vec<Vec<Point>> {
        polygon.iter().map(|c| c.points().to_vec()).collect()
    }
}

#[test]
fn gnuplot_triangles_use_the_external_engine() {
    init_logging();
    let bytes = write_gnuplot_triangles(
        Destination::Buffer,
        &[square(0.0, 2.0)],
        &StripTriangulator,
    )
    .unwrap()
    .unwrap();
    let text = String::from_utf8(bytes).unwrap();
    // 4-point strip: two triangles, four lines each plus separators
    assert_eq!(text.matches('\n').count(), 4 + 1 + 4 + 1 + 1);
}
