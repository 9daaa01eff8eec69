//! Curve creation commands.
//!
//! Curve items live in folders under the project's Curves tree; every
//! emitter takes the folder name alongside the item name.

use std::io::Write;

use cstgen_vba::{quote, Value, VbaWriter};

use crate::error::Error;

/// One segment of a polygon curve.
#[derive(Debug, Clone, PartialEq)]
pub enum PolygonStep {
    /// Line to an absolute point.
    LineTo(Value, Value),
    /// Line to a point relative to the previous one.
    RLine(Value, Value),
}

/// Create a 2D ellipse in the xy-plane.
///
/// With `segments == 0` the ellipse is analytical; otherwise it is a
/// polygonal approximation with that many segments (CST requires more
/// than two).
pub fn ellipse(
    writer: &mut VbaWriter<impl Write>,
    name: &str,
    curve: &str,
    center: (Value, Value),
    x_radius: Value,
    y_radius: Value,
    segments: i64,
) -> Result<(), Error> {
    writer.begin_with("Ellipse")?;
    writer.write_line(".Reset")?;
    writer.write_line(&format!(".Name {}", quote(name)))?;
    writer.write_line(&format!(".Curve {}", quote(curve)))?;
    writer.write_line(&format!(".XRadius {}", x_radius.arg()))?;
    writer.write_line(&format!(".YRadius {}", y_radius.arg()))?;
    writer.write_line(&format!(".Xcenter {}", center.0.arg()))?;
    writer.write_line(&format!(".Ycenter {}", center.1.arg()))?;
    writer.write_line(&format!(".Segments {}", Value::from(segments).arg()))?;
    writer.write_line(".Create")?;
    writer.end_with()?;
    Ok(())
}

/// Create a 2D line in the xy-plane from `start` to `end`.
pub fn line(
    writer: &mut VbaWriter<impl Write>,
    name: &str,
    curve: &str,
    start: (Value, Value),
    end: (Value, Value),
) -> Result<(), Error> {
    writer.begin_with("Line")?;
    writer.write_line(".Reset")?;
    writer.write_line(&format!(".Name {}", quote(name)))?;
    writer.write_line(&format!(".Curve {}", quote(curve)))?;
    writer.write_line(&format!(".X1 {}", start.0.arg()))?;
    writer.write_line(&format!(".Y1 {}", start.1.arg()))?;
    writer.write_line(&format!(".X2 {}", end.0.arg()))?;
    writer.write_line(&format!(".Y2 {}", end.1.arg()))?;
    writer.write_line(".Create")?;
    writer.end_with()?;
    Ok(())
}

/// Create a polygonal curve starting at `start` and following `steps` in
/// order.
///
/// At least one step is required.
pub fn polygon(
    writer: &mut VbaWriter<impl Write>,
    name: &str,
    curve: &str,
    start: (Value, Value),
    steps: &[PolygonStep],
) -> Result<(), Error> {
    if steps.is_empty() {
        return Err(Error::EmptyPolygon(name.to_string()));
    }
    writer.begin_with("Polygon")?;
    writer.write_line(".Reset")?;
    writer.write_line(&format!(".Name {}", quote(name)))?;
    writer.write_line(&format!(".Curve {}", quote(curve)))?;
    writer.write_line(&format!(".Point {}, {}", start.0.arg(), start.1.arg()))?;
    for step in steps {
        match step {
            PolygonStep::LineTo(x, y) => {
                writer.write_line(&format!(".LineTo {}, {}", x.arg(), y.arg()))?;
            }
            PolygonStep::RLine(x, y) => {
                writer.write_line(&format!(".RLine {}, {}", x.arg(), y.arg()))?;
            }
        }
    }
    writer.write_line(".Create")?;
    writer.end_with()?;
    Ok(())
}

/// Trim two intersecting curve items stored under the same folder,
/// deleting the listed edges created by the intersection.
pub fn trim_curves(
    writer: &mut VbaWriter<impl Write>,
    curve: &str,
    curve_item_1: &str,
    curve_item_2: &str,
    delete_edges_1: &[i64],
    delete_edges_2: &[i64],
) -> Result<(), Error> {
    writer.begin_with("TrimCurves")?;
    writer.write_line(".Reset")?;
    writer.write_line(&format!(".Curve {}", quote(curve)))?;
    writer.write_line(&format!(".CurveItem1 {}", quote(curve_item_1)))?;
    writer.write_line(&format!(".CurveItem2 {}", quote(curve_item_2)))?;
    writer.write_line(&format!(".DeleteEdges1 {}", edge_list(delete_edges_1)))?;
    writer.write_line(&format!(".DeleteEdges2 {}", edge_list(delete_edges_2)))?;
    writer.write_line(".Trim")?;
    writer.end_with()?;
    Ok(())
}

/// Render an edge-id list as the quoted comma-separated form CST expects,
/// e.g. `"1,2,3"`.
fn edge_list(edges: &[i64]) -> String {
    let joined = edges
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(",");
    quote(&joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(writer: VbaWriter<Vec<u8>>) -> String {
        String::from_utf8(writer.finish().unwrap()).unwrap()
    }

    #[test]
    fn ellipse_with_parameter_radius() {
        let mut w = VbaWriter::new(Vec::new()).unwrap();
        ellipse(
            &mut w,
            "iris",
            "curve",
            (Value::from(0.0), Value::from(0.0)),
            Value::from("iris_radius"),
            Value::from(4.5),
            0,
        )
        .unwrap();
        assert_eq!(
            text(w),
            "Option Explicit\n\
             With Ellipse\n\
             \t.Reset\n\
             \t.Name \"iris\"\n\
             \t.Curve \"curve\"\n\
             \t.XRadius iris_radius\n\
             \t.YRadius \"4.5\"\n\
             \t.Xcenter \"0\"\n\
             \t.Ycenter \"0\"\n\
             \t.Segments \"0\"\n\
             \t.Create\n\
             End With\n"
        );
    }

    #[test]
    fn polygon_mixes_absolute_and_relative_steps() {
        let mut w = VbaWriter::new(Vec::new()).unwrap();
        polygon(
            &mut w,
            "profile",
            "curve",
            (Value::from(0.0), Value::from(0.0)),
            &[
                PolygonStep::LineTo(Value::from(10.0), Value::from(0.0)),
                PolygonStep::RLine(Value::from(0.0), Value::from(5.0)),
            ],
        )
        .unwrap();
        let out = text(w);
        assert!(out.contains(".Point \"0\", \"0\"\n"));
        assert!(out.contains(".LineTo \"10\", \"0\"\n"));
        assert!(out.contains(".RLine \"0\", \"5\"\n"));
        let line_to = out.find(".LineTo").unwrap();
        let r_line = out.find(".RLine").unwrap();
        assert!(line_to < r_line);
    }

    #[test]
    fn polygon_needs_at_least_one_step() {
        let mut w = VbaWriter::new(Vec::new()).unwrap();
        let result = polygon(
            &mut w,
            "empty",
            "curve",
            (Value::from(0.0), Value::from(0.0)),
            &[],
        );
        assert!(matches!(result, Err(Error::EmptyPolygon(_))));
        assert_eq!(text(w), "Option Explicit\n");
    }

    #[test]
    fn trim_renders_edge_lists_without_trailing_comma() {
        let mut w = VbaWriter::new(Vec::new()).unwrap();
        trim_curves(&mut w, "curve", "a", "b", &[1, 2], &[3]).unwrap();
        let out = text(w);
        assert!(out.contains(".DeleteEdges1 \"1,2\"\n"));
        assert!(out.contains(".DeleteEdges2 \"3\"\n"));
        assert!(out.ends_with("\t.Trim\nEnd With\n"));
    }
}
