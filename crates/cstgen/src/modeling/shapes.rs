//! Face creation and solids of revolution.

use std::io::Write;

use cstgen_vba::{quote, Value, VbaWriter};

use crate::error::Error;

/// How a face is constructed.
///
/// Each mode carries exactly the arguments that are meaningful for it, so
/// a curve-based mode cannot be requested without a curve.
#[derive(Debug, Clone, PartialEq)]
pub enum FaceMode {
    /// From the face currently picked on a solid, optionally offset from
    /// it along its normal.
    PickFace {
        /// Distance between the picked face and the created face.
        offset: Option<f64>,
    },
    /// By extruding a curve profile.
    ExtrudeCurve {
        /// Curve item to extrude, as `folder:item`.
        curve: String,
        /// Taper angle of the extrusion in degrees.
        taper_angle: Option<f64>,
        /// Twist angle of the extrusion in degrees.
        twist_angle: Option<f64>,
    },
    /// By covering a closed curve profile.
    CoverCurve {
        /// Curve item to cover, as `folder:item`.
        curve: String,
    },
}

impl FaceMode {
    fn type_str(&self) -> &'static str {
        match self {
            FaceMode::PickFace { .. } => "PickFace",
            FaceMode::ExtrudeCurve { .. } => "ExtrudeCurve",
            FaceMode::CoverCurve { .. } => "CoverCurve",
        }
    }

    fn curve(&self) -> Option<&str> {
        match self {
            FaceMode::PickFace { .. } => None,
            FaceMode::ExtrudeCurve { curve, .. } | FaceMode::CoverCurve { curve } => Some(curve),
        }
    }
}

/// Create a face under the Faces folder.
pub fn face(
    writer: &mut VbaWriter<impl Write>,
    name: &str,
    mode: &FaceMode,
    thickness: Option<f64>,
) -> Result<(), Error> {
    writer.begin_with("Face")?;
    writer.write_line(".Reset")?;
    writer.write_line(&format!(".Name {}", quote(name)))?;
    writer.write_line(&format!(".Type {}", quote(mode.type_str())))?;
    if let Some(curve) = mode.curve() {
        writer.write_line(&format!(".Curve {}", quote(curve)))?;
    }
    if let FaceMode::PickFace {
        offset: Some(offset),
    } = mode
    {
        writer.write_line(&format!(".Offset {}", Value::from(*offset).arg()))?;
    }
    if let FaceMode::ExtrudeCurve {
        taper_angle: Some(taper),
        ..
    } = mode
    {
        writer.write_line(&format!(".Taperangle {}", Value::from(*taper).arg()))?;
    }
    if let Some(thickness) = thickness {
        writer.write_line(&format!(".Thickness {}", Value::from(thickness).arg()))?;
    }
    if let FaceMode::ExtrudeCurve {
        twist_angle: Some(twist),
        ..
    } = mode
    {
        writer.write_line(&format!(".Twistangle {}", Value::from(*twist).arg()))?;
    }
    writer.write_line(".Create")?;
    writer.end_with()?;
    Ok(())
}

/// Delete the face called `name` from the Faces folder.
pub fn delete_face(writer: &mut VbaWriter<impl Write>, name: &str) -> Result<(), Error> {
    writer.write_line(&format!("Face.Delete {}", quote(name)))?;
    Ok(())
}

/// Profile source for a solid of revolution.
#[derive(Debug, Clone, PartialEq)]
pub enum RotateMode {
    /// Rotate a point-list profile, optionally starting from an angle in
    /// degrees.
    Pointlist {
        /// Angle the rotation starts from.
        start_angle: Option<f64>,
    },
    /// Rotate the currently picked face.
    Picks,
}

impl RotateMode {
    fn as_str(&self) -> &'static str {
        match self {
            RotateMode::Pointlist { .. } => "Pointlist",
            RotateMode::Picks => "Picks",
        }
    }
}

/// Options for [`rotate`], with CST's defaults.
///
/// The three backwards-compatibility flags (`split_closed_edges`,
/// `simplify_solid`, `use_advanced_segmented_rotation`) must stay `true`
/// for current CST versions.
#[derive(Debug, Clone, PartialEq)]
pub struct RotateOptions {
    /// Rotation angle in degrees.
    pub angle: f64,
    /// Axial distance between start and end profile, bending the solid
    /// into a helix when non-zero.
    pub height: f64,
    /// Ratio of the radius after a full turn to the starting radius.
    pub radius_ratio: f64,
    /// Number of segments of the solid; zero keeps it analytical.
    pub n_steps: i64,
    /// Number of picked faces the rotation consumes.
    pub number_of_picked_faces: i64,
    /// Backwards-compatibility flag.
    pub split_closed_edges: bool,
    /// Rotate by the defined number of segments.
    pub segmented_profile: bool,
    /// Delete the base face after the solid is created.
    pub delete_base_face_solid: bool,
    /// Clear the face pick after the rotation.
    pub clear_picked_face: bool,
    /// Backwards-compatibility flag.
    pub simplify_solid: bool,
    /// Backwards-compatibility flag.
    pub use_advanced_segmented_rotation: bool,
    /// Cut the end of the rotated solid off.
    pub cut_end_off: bool,
}

impl Default for RotateOptions {
    fn default() -> Self {
        Self {
            angle: 360.0,
            height: 0.0,
            radius_ratio: 1.0,
            n_steps: 0,
            number_of_picked_faces: 1,
            split_closed_edges: true,
            segmented_profile: false,
            delete_base_face_solid: false,
            clear_picked_face: true,
            simplify_solid: true,
            use_advanced_segmented_rotation: true,
            cut_end_off: false,
        }
    }
}

/// Create a solid by rotating a profile or picked face.
///
/// The component and material must already exist in the project.
pub fn rotate(
    writer: &mut VbaWriter<impl Write>,
    name: &str,
    component: &str,
    material: &str,
    mode: &RotateMode,
    options: &RotateOptions,
) -> Result<(), Error> {
    writer.begin_with("Rotate")?;
    writer.write_line(&format!(".Name {}", quote(name)))?;
    writer.write_line(&format!(".Component {}", quote(component)))?;
    writer.write_line(&format!(
        ".NumberOfPickedFaces {}",
        Value::from(options.number_of_picked_faces).arg()
    ))?;
    writer.write_line(&format!(".Material {}", quote(material)))?;
    writer.write_line(&format!(".Mode {}", quote(mode.as_str())))?;
    if let RotateMode::Pointlist {
        start_angle: Some(start),
    } = mode
    {
        writer.write_line(&format!(".StartAngle {}", Value::from(*start).arg()))?;
    }
    writer.write_line(&format!(".Angle {}", Value::from(options.angle).arg()))?;
    writer.write_line(&format!(".Height {}", Value::from(options.height).arg()))?;
    writer.write_line(&format!(
        ".RadiusRatio {}",
        Value::from(options.radius_ratio).arg()
    ))?;
    writer.write_line(&format!(".NSteps {}", Value::from(options.n_steps).arg()))?;
    writer.write_line(&format!(
        ".SplitClosedEdges {}",
        Value::from(options.split_closed_edges).arg()
    ))?;
    writer.write_line(&format!(
        ".SegmentedProfile {}",
        Value::from(options.segmented_profile).arg()
    ))?;
    writer.write_line(&format!(
        ".DeleteBaseFaceSolid {}",
        Value::from(options.delete_base_face_solid).arg()
    ))?;
    writer.write_line(&format!(
        ".ClearPickedFace {}",
        Value::from(options.clear_picked_face).arg()
    ))?;
    writer.write_line(&format!(
        ".SimplifySolid {}",
        Value::from(options.simplify_solid).arg()
    ))?;
    writer.write_line(&format!(
        ".UseAdvancedSegmentedRotation {}",
        Value::from(options.use_advanced_segmented_rotation).arg()
    ))?;
    writer.write_line(&format!(
        ".CutEndOff {}",
        Value::from(options.cut_end_off).arg()
    ))?;
    writer.write_line(".Create")?;
    writer.end_with()?;
    Ok(())
}
