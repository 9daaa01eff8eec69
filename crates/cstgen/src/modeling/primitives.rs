//! Primitive solid shapes.

use std::io::Write;

use serde::{Deserialize, Serialize};

use cstgen_vba::{quote, Value, VbaWriter};

use crate::error::Error;

/// Coordinate axis a primitive is aligned with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// X axis.
    X,
    /// Y axis.
    Y,
    /// Z axis.
    #[default]
    Z,
}

impl Axis {
    fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

/// Create an axis-aligned brick spanning the given coordinate ranges.
///
/// The component and material must already exist.
pub fn brick(
    writer: &mut VbaWriter<impl Write>,
    name: &str,
    component: &str,
    material: &str,
    x_range: (Value, Value),
    y_range: (Value, Value),
    z_range: (Value, Value),
) -> Result<(), Error> {
    writer.begin_with("Brick")?;
    writer.write_line(".Reset")?;
    writer.write_line(&format!(".Name {}", quote(name)))?;
    writer.write_line(&format!(".Component {}", quote(component)))?;
    writer.write_line(&format!(".Material {}", quote(material)))?;
    writer.write_line(&format!(".Xrange {}, {}", x_range.0.arg(), x_range.1.arg()))?;
    writer.write_line(&format!(".Yrange {}, {}", y_range.0.arg(), y_range.1.arg()))?;
    writer.write_line(&format!(".Zrange {}, {}", z_range.0.arg(), z_range.1.arg()))?;
    writer.write_line(".Create")?;
    writer.end_with()?;
    Ok(())
}

/// Create a cylinder along `axis`.
///
/// `axis_range` bounds the cylinder along its axis and `center` places it
/// in the plane perpendicular to the axis (the two remaining coordinates
/// in x, y, z order). A non-zero `inner_radius` makes it a tube; zero
/// `segments` keeps the shape analytical.
pub fn cylinder(
    writer: &mut VbaWriter<impl Write>,
    name: &str,
    component: &str,
    material: &str,
    axis: Axis,
    outer_radius: Value,
    inner_radius: Value,
    axis_range: (Value, Value),
    center: (Value, Value),
    segments: i64,
) -> Result<(), Error> {
    writer.begin_with("Cylinder")?;
    writer.write_line(".Reset")?;
    writer.write_line(&format!(".Name {}", quote(name)))?;
    writer.write_line(&format!(".Component {}", quote(component)))?;
    writer.write_line(&format!(".Material {}", quote(material)))?;
    writer.write_line(&format!(".OuterRadius {}", outer_radius.arg()))?;
    writer.write_line(&format!(".InnerRadius {}", inner_radius.arg()))?;
    writer.write_line(&format!(".Axis {}", quote(axis.as_str())))?;
    let (range_member, center_members) = match axis {
        Axis::X => (".Xrange", [".Ycenter", ".Zcenter"]),
        Axis::Y => (".Yrange", [".Xcenter", ".Zcenter"]),
        Axis::Z => (".Zrange", [".Xcenter", ".Ycenter"]),
    };
    writer.write_line(&format!(
        "{range_member} {}, {}",
        axis_range.0.arg(),
        axis_range.1.arg()
    ))?;
    writer.write_line(&format!("{} {}", center_members[0], center.0.arg()))?;
    writer.write_line(&format!("{} {}", center_members[1], center.1.arg()))?;
    writer.write_line(&format!(".Segments {}", Value::from(segments).arg()))?;
    writer.write_line(".Create")?;
    writer.end_with()?;
    Ok(())
}

/// Create a sphere centered at `center`.
pub fn sphere(
    writer: &mut VbaWriter<impl Write>,
    name: &str,
    component: &str,
    material: &str,
    radius: Value,
    center: (Value, Value, Value),
    axis: Axis,
    segments: i64,
) -> Result<(), Error> {
    writer.begin_with("Sphere")?;
    writer.write_line(".Reset")?;
    writer.write_line(&format!(".Name {}", quote(name)))?;
    writer.write_line(&format!(".Component {}", quote(component)))?;
    writer.write_line(&format!(".Material {}", quote(material)))?;
    writer.write_line(&format!(".Axis {}", quote(axis.as_str())))?;
    writer.write_line(&format!(".CenterRadius {}", radius.arg()))?;
    writer.write_line(&format!(
        ".Center {}, {}, {}",
        center.0.arg(),
        center.1.arg(),
        center.2.arg()
    ))?;
    writer.write_line(&format!(".Segments {}", Value::from(segments).arg()))?;
    writer.write_line(".Create")?;
    writer.end_with()?;
    Ok(())
}
