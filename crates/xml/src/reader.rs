use crate::error::XmlError;
use polyio_stream::{Source, resolve_for_read};
use polyio_types::{Contour, Point, Polygon};
use roxmltree::{Document, Node};
use std::io::Read;

/// Read a list of polygons from an XML document written by
/// [`crate::write_xml`].
///
/// The writer emits one root `<polygon>` element per polygon, so documents
/// holding several polygons have sibling roots; the content is parsed inside
/// a synthetic wrapper element (after stripping a leading XML declaration)
/// to keep the parser happy. Declared `points` and `contours` counts are
/// checked against what was actually read.
pub fn read_xml(source: Source) -> Result<Vec<Polygon>, XmlError> {
    let mut handle = resolve_for_read(source)?;
    let mut text = String::new();
    handle.read_to_string(&mut text)?;

    let body = strip_declaration(&text);
    let wrapped = format!("<polylist>{}</polylist>", body);
    let doc = Document::parse(&wrapped)?;

    let mut polygons = Vec::new();
    for node in doc.root_element().children().filter(Node::is_element) {
        if node.tag_name().name() != "polygon" {
            return Err(XmlError::UnexpectedElement {
                expected: "polygon",
                found: node.tag_name().name().to_string(),
            });
        }
        polygons.push(read_polygon(node)?);
    }
    Ok(polygons)
}

fn read_polygon(node: Node) -> Result<Polygon, XmlError> {
    let mut contours = Vec::new();
    for child in node.children() {
        if !child.is_element() {
            continue;
        }
        if child.tag_name().name() != "contour" {
            return Err(XmlError::UnexpectedElement {
                expected: "contour",
                found: child.tag_name().name().to_string(),
            });
        }
        contours.push(read_contour(child)?);
    }

    let declared = int_attr(node, "polygon", "contours")?;
    if declared != contours.len() {
        return Err(XmlError::StructuralMismatch {
            element: "polygon",
            name: "contours",
            declared,
            actual: contours.len(),
        });
    }
    Ok(Polygon::from_contours(contours))
}

fn read_contour(node: Node) -> Result<Contour, XmlError> {
    let mut points = Vec::new();
    for child in node.children() {
        if !child.is_element() {
            log::debug!("skipping non-element node inside <contour>");
            continue;
        }
        if child.tag_name().name() != "p" {
            return Err(XmlError::UnexpectedElement {
                expected: "p",
                found: child.tag_name().name().to_string(),
            });
        }
        let x = float_attr(child, "p", "x")?;
        let y = float_attr(child, "p", "y")?;
        points.push(Point::new(x, y));
    }

    let declared = int_attr(node, "contour", "points")?;
    if declared != points.len() {
        return Err(XmlError::StructuralMismatch {
            element: "contour",
            name: "points",
            declared,
            actual: points.len(),
        });
    }

    let hole = int_attr(node, "contour", "isHole")? != 0;
    Ok(Contour::new(points, hole))
}

fn attr<'a>(
    node: Node<'a, '_>,
    element: &'static str,
    name: &'static str,
) -> Result<&'a str, XmlError> {
    node.attribute(name)
        .ok_or(XmlError::MissingAttribute { element, name })
}

fn int_attr(node: Node, element: &'static str, name: &'static str) -> Result<usize, XmlError> {
    let value = attr(node, element, name)?;
    value.parse().map_err(|_| XmlError::InvalidNumber {
        element,
        name,
        value: value.to_string(),
    })
}

fn float_attr(node: Node, element: &'static str, name: &'static str) -> Result<f64, XmlError> {
    let value = attr(node, element, name)?;
    value.parse().map_err(|_| XmlError::InvalidNumber {
        element,
        name,
        value: value.to_string(),
    })
}

fn strip_declaration(text: &str) -> &str {
    let trimmed = text.trim_start();
    if let Some(rest) = trimmed.strip_prefix("<?xml") {
        if let Some(end) = rest.find("?>") {
            return &rest[end + 2..];
        }
    }
    trimmed
}
