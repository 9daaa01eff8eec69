//! Shape transformations.

use std::io::Write;

use cstgen_vba::{quote, Value, VbaWriter};

use crate::error::Error;

/// What a transformation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformTarget {
    /// A solid shape.
    Shape,
}

impl TransformTarget {
    fn as_str(&self) -> &'static str {
        match self {
            TransformTarget::Shape => "Shape",
        }
    }
}

/// Where the transformation origin sits.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformOrigin {
    /// Center of the transformed shape.
    ShapeCenter,
    /// Common center of all selected shapes.
    CommonCenter,
    /// A freely chosen point.
    Free {
        /// Origin coordinates.
        center: (Value, Value, Value),
    },
}

impl TransformOrigin {
    fn as_str(&self) -> &'static str {
        match self {
            TransformOrigin::ShapeCenter => "ShapeCenter",
            TransformOrigin::CommonCenter => "CommonCenter",
            TransformOrigin::Free { .. } => "Free",
        }
    }
}

/// The transformation to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformMethod {
    /// Mirror across the plane through the origin with the given normal.
    Mirror {
        /// Normal of the mirror plane.
        plane_normal: (Value, Value, Value),
    },
    /// Translate along a vector, or along the line between the last two
    /// picked points.
    Translate {
        /// Translation vector.
        vector: (Value, Value, Value),
        /// Take the translation from the last two picked points instead
        /// of `vector`.
        use_picked_points: Option<bool>,
        /// Invert the picked-point direction.
        invert_picked_points: Option<bool>,
    },
}

impl TransformMethod {
    fn as_str(&self) -> &'static str {
        match self {
            TransformMethod::Mirror { .. } => "Mirror",
            TransformMethod::Translate { .. } => "Translate",
        }
    }
}

/// Options shared by every transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformOptions {
    /// Keep the original and produce a transformed copy.
    pub copy: bool,
    /// Unite the copy with the original (requires `copy`).
    pub unite: bool,
    /// How many times the transformation is applied.
    pub repetitions: i64,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            copy: false,
            unite: false,
            repetitions: 1,
        }
    }
}

/// Transform the object called `name`.
pub fn transform(
    writer: &mut VbaWriter<impl Write>,
    name: &str,
    target: TransformTarget,
    method: &TransformMethod,
    origin: &TransformOrigin,
    options: &TransformOptions,
) -> Result<(), Error> {
    writer.begin_with("Transform")?;
    writer.write_line(".Reset")?;
    writer.write_line(&format!(".Name {}", quote(name)))?;
    writer.write_line(&format!(".Origin {}", quote(origin.as_str())))?;
    if let TransformOrigin::Free { center } = origin {
        writer.write_line(&format!(
            ".Center {}, {}, {}",
            center.0.arg(),
            center.1.arg(),
            center.2.arg()
        ))?;
    }
    match method {
        TransformMethod::Mirror { plane_normal } => {
            writer.write_line(&format!(
                ".PlaneNormal {}, {}, {}",
                plane_normal.0.arg(),
                plane_normal.1.arg(),
                plane_normal.2.arg()
            ))?;
        }
        TransformMethod::Translate {
            vector,
            use_picked_points,
            invert_picked_points,
        } => {
            writer.write_line(&format!(
                ".Vector {}, {}, {}",
                vector.0.arg(),
                vector.1.arg(),
                vector.2.arg()
            ))?;
            if let Some(use_picked) = use_picked_points {
                writer.write_line(&format!(
                    ".UsePickedPoints {}",
                    Value::from(*use_picked).arg()
                ))?;
            }
            if let Some(invert) = invert_picked_points {
                writer.write_line(&format!(
                    ".InvertPickedPoints {}",
                    Value::from(*invert).arg()
                ))?;
            }
        }
    }
    writer.write_line(&format!(
        ".MultipleObjects {}",
        Value::from(options.copy).arg()
    ))?;
    writer.write_line(&format!(".GroupObjects {}", Value::from(options.unite).arg()))?;
    writer.write_line(&format!(
        ".Transform {}, {}",
        quote(target.as_str()),
        quote(method.as_str())
    ))?;
    writer.write_line(&format!(
        ".Repetitions {}",
        Value::from(options.repetitions).arg()
    ))?;
    writer.end_with()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(writer: VbaWriter<Vec<u8>>) -> String {
        String::from_utf8(writer.finish().unwrap()).unwrap()
    }

    #[test]
    fn mirror_across_the_xy_plane() {
        let mut w = VbaWriter::new(Vec::new()).unwrap();
        transform(
            &mut w,
            "component1:body",
            TransformTarget::Shape,
            &TransformMethod::Mirror {
                plane_normal: (Value::from(0.0), Value::from(0.0), Value::from(1.0)),
            },
            &TransformOrigin::ShapeCenter,
            &TransformOptions {
                copy: true,
                unite: true,
                ..TransformOptions::default()
            },
        )
        .unwrap();
        assert_eq!(
            text(w),
            "Option Explicit\n\
             With Transform\n\
             \t.Reset\n\
             \t.Name \"component1:body\"\n\
             \t.Origin \"ShapeCenter\"\n\
             \t.PlaneNormal \"0\", \"0\", \"1\"\n\
             \t.MultipleObjects \"True\"\n\
             \t.GroupObjects \"True\"\n\
             \t.Transform \"Shape\", \"Mirror\"\n\
             \t.Repetitions \"1\"\n\
             End With\n"
        );
    }

    #[test]
    fn translate_from_a_free_origin() {
        let mut w = VbaWriter::new(Vec::new()).unwrap();
        transform(
            &mut w,
            "component1:cap",
            TransformTarget::Shape,
            &TransformMethod::Translate {
                vector: (Value::from("shift_x"), Value::from(0.0), Value::from(0.0)),
                use_picked_points: Some(false),
                invert_picked_points: None,
            },
            &TransformOrigin::Free {
                center: (Value::from(0.0), Value::from(0.0), Value::from(0.0)),
            },
            &TransformOptions::default(),
        )
        .unwrap();
        let out = text(w);
        assert!(out.contains(".Origin \"Free\"\n"));
        assert!(out.contains(".Center \"0\", \"0\", \"0\"\n"));
        assert!(out.contains(".Vector shift_x, \"0\", \"0\"\n"));
        assert!(out.contains(".UsePickedPoints \"False\"\n"));
        assert!(!out.contains(".InvertPickedPoints"));
        assert!(out.contains(".Transform \"Shape\", \"Translate\"\n"));
    }
}
