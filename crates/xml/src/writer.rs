use crate::error::XmlError;
use polyio_stream::{Destination, WriteHandle, resolve_for_write};
use polyio_types::{BoundingBox, Polygon};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

/// Write `polygons` as an XML document to `destination`.
///
/// With `with_header` a standalone XML declaration is emitted first.
/// Returns the document bytes for [`Destination::Buffer`], `None` otherwise.
pub fn write_xml(
    destination: Destination,
    polygons: &[Polygon],
    with_header: bool,
) -> Result<Option<Vec<u8>>, XmlError> {
    let handle = resolve_for_write(destination)?;
    let mut writer = Writer::new_with_indent(handle, b' ', 2);

    if with_header {
        writer.write_event(Event::Decl(BytesDecl::new(
            "1.0",
            Some("iso-8859-1"),
            Some("no"),
        )))?;
    }

    for polygon in polygons {
        write_polygon(&mut writer, polygon)?;
    }

    Ok(writer.into_inner().finish()?)
}

fn write_polygon(writer: &mut Writer<WriteHandle>, polygon: &Polygon) -> Result<(), XmlError> {
    let mut elem = BytesStart::new("polygon");
    elem.push_attribute(("contours", polygon.len().to_string().as_str()));
    elem.push_attribute(("area", fmt(polygon.area()).as_str()));
    push_bounding_box(&mut elem, polygon.bounding_box());

    writer.write_event(Event::Start(elem))?;
    for contour in polygon {
        let mut celem = BytesStart::new("contour");
        celem.push_attribute(("points", contour.len().to_string().as_str()));
        celem.push_attribute(("isHole", if contour.is_hole() { "1" } else { "0" }));
        celem.push_attribute(("area", fmt(contour.area()).as_str()));
        push_bounding_box(&mut celem, contour.bounding_box());
        writer.write_event(Event::Start(celem))?;

        for point in contour.points() {
            let mut pelem = BytesStart::new("p");
            pelem.push_attribute(("x", fmt(point.x).as_str()));
            pelem.push_attribute(("y", fmt(point.y).as_str()));
            writer.write_event(Event::Empty(pelem))?;
        }
        writer.write_event(Event::End(BytesEnd::new("contour")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("polygon")))?;
    Ok(())
}

fn push_bounding_box(elem: &mut BytesStart<'_>, bb: Option<BoundingBox>) {
    let bb = bb.unwrap_or(BoundingBox::new(0.0, 0.0, 0.0, 0.0));
    elem.push_attribute(("xMin", fmt(bb.x_min).as_str()));
    elem.push_attribute(("xMax", fmt(bb.x_max).as_str()));
    elem.push_attribute(("yMin", fmt(bb.y_min).as_str()));
    elem.push_attribute(("yMax", fmt(bb.y_max).as_str()));
}

fn fmt(value: f64) -> String {
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Polygon {
        let mut p = Polygon::new();
        p.add_contour(vec![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)], false);
        p.add_contour(vec![(0.5, 0.5), (1.5, 0.5), (1.5, 1.5), (0.5, 1.5)], true);
        p
    }

    fn render(polygons: &[Polygon], with_header: bool) -> String {
        let bytes = write_xml(Destination::Buffer, polygons, with_header)
            .unwrap()
            .unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn document_structure_matches_the_format() {
        let text = render(&[sample()], false);
        assert!(text.starts_with("<polygon contours=\"2\" area=\"3\""));
        assert!(text.contains("<contour points=\"4\" isHole=\"0\""));
        assert!(text.contains("<contour points=\"4\" isHole=\"1\""));
        assert!(text.contains("<p x=\"0.5\" y=\"0.5\"/>"));
        assert!(text.ends_with("</polygon>"));
    }

    #[test]
    fn header_is_optional() {
        let text = render(&[sample()], true);
        assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"iso-8859-1\" standalone=\"no\"?>"));
        assert!(!render(&[sample()], false).contains("<?xml"));
    }

    #[test]
    fn empty_polygon_writes_an_empty_element() {
        let text = render(&[Polygon::new()], false);
        assert!(text.contains("contours=\"0\""));
        assert!(!text.contains("<contour"));
    }

    #[test]
    fn bounding_box_attributes_are_present() {
        let text = render(&[sample()], false);
        assert!(text.contains("xMin=\"0\" xMax=\"2\" yMin=\"0\" yMax=\"2\""));
    }
}
