//! Background material and boundary conditions for the bounding box.

use std::io::Write;

use serde::{Deserialize, Serialize};

use cstgen_vba::{quote, Value, VbaWriter};

use crate::error::Error;

/// Electromagnetic class of the background material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundMaterial {
    /// Dielectric background described by its properties.
    #[default]
    Normal,
    /// Perfect electric conductor.
    Pec,
}

impl BackgroundMaterial {
    fn as_str(&self) -> &'static str {
        match self {
            BackgroundMaterial::Normal => "normal",
            BackgroundMaterial::Pec => "pec",
        }
    }
}

/// Thermal class of the background material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThermalType {
    /// Thermal properties described by a conductivity.
    #[default]
    Normal,
    /// Perfect thermal conductor.
    Ptc,
}

impl ThermalType {
    fn as_str(&self) -> &'static str {
        match self {
            ThermalType::Normal => "normal",
            ThermalType::Ptc => "ptc",
        }
    }
}

/// Background material surrounding the structure.
///
/// The background volume defaults to the structure's bounding box; the
/// per-axis `*_space` pairs extend it. Unset properties keep CST's
/// defaults (vacuum, zero conductivity).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Background {
    /// Electromagnetic class.
    pub material: BackgroundMaterial,
    /// Apply the x-minimum extension in every direction.
    pub apply_in_all_directions: bool,
    /// Relative electric permittivity.
    pub epsilon: Option<f64>,
    /// Relative magnetic permeability.
    pub mu: Option<f64>,
    /// Electric conductivity in S/m.
    pub electric_conductivity: Option<f64>,
    /// Extra space beyond the structure in x (lower, upper).
    pub x_space: Option<(f64, f64)>,
    /// Extra space beyond the structure in y (lower, upper).
    pub y_space: Option<(f64, f64)>,
    /// Extra space beyond the structure in z (lower, upper).
    pub z_space: Option<(f64, f64)>,
    /// Thermal class.
    pub thermal: Option<ThermalType>,
    /// Thermal conductivity in W/K/m.
    pub thermal_conductivity: Option<f64>,
}

/// Emit the `With Background` block.
pub fn background(
    writer: &mut VbaWriter<impl Write>,
    settings: &Background,
) -> Result<(), Error> {
    writer.begin_with("Background")?;
    writer.write_line(".Reset")?;
    writer.write_line(&format!(".Type {}", quote(settings.material.as_str())))?;
    if let Some(epsilon) = settings.epsilon {
        writer.write_line(&format!(".Epsilon {}", Value::from(epsilon).arg()))?;
    }
    if let Some(mu) = settings.mu {
        writer.write_line(&format!(".Mu {}", Value::from(mu).arg()))?;
    }
    if let Some(conductivity) = settings.electric_conductivity {
        writer.write_line(&format!(
            ".ElConductivity {}",
            Value::from(conductivity).arg()
        ))?;
    }
    let spaces = [
        ("XminSpace", "XmaxSpace", settings.x_space),
        ("YminSpace", "YmaxSpace", settings.y_space),
        ("ZminSpace", "ZmaxSpace", settings.z_space),
    ];
    for (min_member, max_member, bounds) in spaces {
        if let Some((min, max)) = bounds {
            writer.write_line(&format!(".{min_member} {}", Value::from(min).arg()))?;
            writer.write_line(&format!(".{max_member} {}", Value::from(max).arg()))?;
        }
    }
    if let Some(thermal) = settings.thermal {
        writer.write_line(&format!(".ThermalType {}", quote(thermal.as_str())))?;
    }
    if let Some(conductivity) = settings.thermal_conductivity {
        writer.write_line(&format!(
            ".ThermalConductivity {}",
            Value::from(conductivity).arg()
        ))?;
    }
    writer.write_line(&format!(
        ".ApplyInAllDirections {}",
        Value::from(settings.apply_in_all_directions).arg()
    ))?;
    writer.end_with()?;
    Ok(())
}

/// Boundary condition applied at one face of the bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryType {
    /// Tangential electric field is zero.
    #[default]
    Electric,
    /// Tangential magnetic field is zero.
    Magnetic,
    /// All tangential field components are zero.
    Tangential,
    /// All normal field components are zero.
    Normal,
    /// No boundary, open space.
    Open,
    /// Open, with extra space added to the computational domain.
    ExpandedOpen,
    /// Periodic boundary.
    Periodic,
    /// Wall of lossy metal.
    ConductingWall,
    /// For unit-cell structures.
    UnitCell,
}

impl BoundaryType {
    fn as_str(&self) -> &'static str {
        match self {
            BoundaryType::Electric => "electric",
            BoundaryType::Magnetic => "magnetic",
            BoundaryType::Tangential => "tangential",
            BoundaryType::Normal => "normal",
            BoundaryType::Open => "open",
            BoundaryType::ExpandedOpen => "expanded open",
            BoundaryType::Periodic => "periodic",
            BoundaryType::ConductingWall => "conducting wall",
            BoundaryType::UnitCell => "unit cell",
        }
    }
}

/// Which boundary types apply to the bounding box faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundarySpec {
    /// One type for every direction.
    AllDirections(BoundaryType),
    /// Independent (lower, upper) pairs per axis; omitted axes keep the
    /// project defaults.
    PerAxis {
        /// Boundary types at the x faces.
        x: Option<(BoundaryType, BoundaryType)>,
        /// Boundary types at the y faces.
        y: Option<(BoundaryType, BoundaryType)>,
        /// Boundary types at the z faces.
        z: Option<(BoundaryType, BoundaryType)>,
    },
}

impl Default for BoundarySpec {
    fn default() -> Self {
        BoundarySpec::AllDirections(BoundaryType::Electric)
    }
}

/// Emit the `With Boundary` block.
pub fn boundaries(writer: &mut VbaWriter<impl Write>, spec: &BoundarySpec) -> Result<(), Error> {
    writer.begin_with("Boundary")?;
    match spec {
        BoundarySpec::AllDirections(kind) => {
            writer.write_line(&format!(
                ".ApplyInAllDirections {}",
                Value::from(true).arg()
            ))?;
            writer.write_line(&format!(".Xmin {}", quote(kind.as_str())))?;
        }
        BoundarySpec::PerAxis { x, y, z } => {
            writer.write_line(&format!(
                ".ApplyInAllDirections {}",
                Value::from(false).arg()
            ))?;
            let axes = [
                ("Xmin", "Xmax", x),
                ("Ymin", "Ymax", y),
                ("Zmin", "Zmax", z),
            ];
            for (min_member, max_member, pair) in axes {
                if let Some((min, max)) = pair {
                    writer.write_line(&format!(".{min_member} {}", quote(min.as_str())))?;
                    writer.write_line(&format!(".{max_member} {}", quote(max.as_str())))?;
                }
            }
        }
    }
    writer.end_with()?;
    Ok(())
}
