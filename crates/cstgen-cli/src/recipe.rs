//! Declarative model recipes and their compilation into macros.

use std::io::Write;

use serde::{Deserialize, Serialize};

use cstgen::export::{ascii_export, AsciiExportOptions, ExportFileType};
use cstgen::materials::{material, MaterialKind, MaterialProps};
use cstgen::modeling::{components, primitives, solids};
use cstgen::solver::eigenmode::{eigenmode_solver, EigenmodeMesh};
use cstgen::solver::frequency_range;
use cstgen::solver::settings::{background, boundaries, Background, BoundarySpec};
use cstgen::tree::select_tree_item;
use cstgen::units::{set_units, Units};
use cstgen::{Error, Value, VbaWriter};

/// A complete model description, compiled top to bottom into one macro.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipe {
    /// Global project units.
    pub units: Units,
    /// Solver frequency range (min, max).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_range: Option<(f64, f64)>,
    /// Background material settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
    /// Bounding-box boundary conditions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundaries: Option<BoundarySpec>,
    /// Materials to define before any solid uses them.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub materials: Vec<MaterialRecipe>,
    /// Components to create before any solid is stored in them.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<String>,
    /// Primitive solids, created in order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub solids: Vec<SolidRecipe>,
    /// Boolean combinations, applied after all solids exist.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub booleans: Vec<BooleanRecipe>,
    /// Eigenmode solver run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eigenmode: Option<EigenmodeRecipe>,
    /// Result export after the solver run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<ExportRecipe>,
}

/// A named material definition.
#[derive(Debug, Serialize, Deserialize)]
pub struct MaterialRecipe {
    /// Material name.
    pub name: String,
    /// Electromagnetic class.
    #[serde(default)]
    pub kind: MaterialKind,
    /// Properties for `normal` materials.
    #[serde(flatten)]
    pub props: MaterialProps,
}

/// A primitive solid.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum SolidRecipe {
    /// Axis-aligned brick.
    Brick {
        /// Solid name.
        name: String,
        /// Component the solid is stored in.
        component: String,
        /// Material name.
        material: String,
        /// (min, max) along x.
        x_range: (f64, f64),
        /// (min, max) along y.
        y_range: (f64, f64),
        /// (min, max) along z.
        z_range: (f64, f64),
    },
    /// Cylinder along a coordinate axis.
    Cylinder {
        /// Solid name.
        name: String,
        /// Component the solid is stored in.
        component: String,
        /// Material name.
        material: String,
        /// Axis the cylinder is aligned with.
        #[serde(default)]
        axis: primitives::Axis,
        /// Outer radius.
        outer_radius: f64,
        /// Inner radius; non-zero makes a tube.
        #[serde(default)]
        inner_radius: f64,
        /// (min, max) along the axis.
        axis_range: (f64, f64),
        /// Center in the plane perpendicular to the axis.
        #[serde(default)]
        center: (f64, f64),
        /// Number of segments; zero keeps the shape analytical.
        #[serde(default)]
        segments: i64,
    },
    /// Sphere.
    Sphere {
        /// Solid name.
        name: String,
        /// Component the solid is stored in.
        component: String,
        /// Material name.
        material: String,
        /// Center radius.
        radius: f64,
        /// Center point.
        #[serde(default)]
        center: (f64, f64, f64),
        /// Orientation axis.
        #[serde(default)]
        axis: primitives::Axis,
        /// Number of segments; zero keeps the shape analytical.
        #[serde(default)]
        segments: i64,
    },
}

/// A boolean combination of two existing solids.
#[derive(Debug, Serialize, Deserialize)]
pub struct BooleanRecipe {
    /// The operation to apply.
    pub op: BooleanOp,
    /// First operand; receives the result.
    pub solid_1: String,
    /// Second operand; consumed.
    pub solid_2: String,
}

/// Boolean operation kind.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BooleanOp {
    /// Union.
    Add,
    /// Difference.
    Subtract,
    /// Intersection.
    Intersect,
    /// Insertion.
    Insert,
}

/// Eigenmode solver settings.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EigenmodeRecipe {
    /// Number of modes to compute.
    pub modes: i64,
    /// Mesh type and adaptation.
    pub mesh: EigenmodeMesh,
}

impl Default for EigenmodeRecipe {
    fn default() -> Self {
        Self {
            modes: 10,
            mesh: EigenmodeMesh::default(),
        }
    }
}

/// Export of one result tree item.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportRecipe {
    /// Tree item to export, e.g. `2D/3D Results\E-Field\e1`.
    pub tree_item: String,
    /// Destination file path.
    pub path: String,
    /// Exported file format.
    #[serde(default)]
    pub file_type: ExportFileType,
}

impl Recipe {
    /// Compile the recipe into one `Sub Main` macro.
    pub fn compile(&self, writer: &mut VbaWriter<impl Write>) -> Result<(), Error> {
        writer.with_main(|w| {
            set_units(w, &self.units)?;
            for mat in &self.materials {
                material(w, &mat.name, mat.kind, &mat.props)?;
            }
            for component in &self.components {
                components::new_component(w, component)?;
            }
            for solid in &self.solids {
                solid.emit(w)?;
            }
            for boolean in &self.booleans {
                let (a, b) = (boolean.solid_1.as_str(), boolean.solid_2.as_str());
                match boolean.op {
                    BooleanOp::Add => solids::add(w, a, b)?,
                    BooleanOp::Subtract => solids::subtract(w, a, b)?,
                    BooleanOp::Intersect => solids::intersect(w, a, b)?,
                    BooleanOp::Insert => solids::insert(w, a, b)?,
                }
            }
            if let Some(settings) = &self.background {
                background(w, settings)?;
            }
            if let Some(spec) = &self.boundaries {
                boundaries(w, spec)?;
            }
            if let Some((min, max)) = self.frequency_range {
                frequency_range(w, (Value::from(min), Value::from(max)))?;
            }
            if let Some(eigenmode) = &self.eigenmode {
                eigenmode_solver(w, eigenmode.modes, &eigenmode.mesh)?;
            }
            if let Some(export) = &self.export {
                select_tree_item(w, &export.tree_item)?;
                ascii_export(
                    w,
                    &export.path,
                    &AsciiExportOptions {
                        file_type: export.file_type,
                        ..AsciiExportOptions::default()
                    },
                )?;
            }
            Ok(())
        })
    }

    /// A small but complete recipe for `template` output.
    pub fn starter() -> Self {
        Self {
            frequency_range: Some((0.5, 3.0)),
            components: vec!["model".to_string()],
            solids: vec![SolidRecipe::Brick {
                name: "body".to_string(),
                component: "model".to_string(),
                material: "Vacuum".to_string(),
                x_range: (-50.0, 50.0),
                y_range: (-25.0, 25.0),
                z_range: (0.0, 30.0),
            }],
            eigenmode: Some(EigenmodeRecipe::default()),
            ..Self::default()
        }
    }
}

impl SolidRecipe {
    fn emit(&self, writer: &mut VbaWriter<impl Write>) -> Result<(), Error> {
        match self {
            SolidRecipe::Brick {
                name,
                component,
                material,
                x_range,
                y_range,
                z_range,
            } => primitives::brick(
                writer,
                name,
                component,
                material,
                (Value::from(x_range.0), Value::from(x_range.1)),
                (Value::from(y_range.0), Value::from(y_range.1)),
                (Value::from(z_range.0), Value::from(z_range.1)),
            ),
            SolidRecipe::Cylinder {
                name,
                component,
                material,
                axis,
                outer_radius,
                inner_radius,
                axis_range,
                center,
                segments,
            } => primitives::cylinder(
                writer,
                name,
                component,
                material,
                *axis,
                Value::from(*outer_radius),
                Value::from(*inner_radius),
                (Value::from(axis_range.0), Value::from(axis_range.1)),
                (Value::from(center.0), Value::from(center.1)),
                *segments,
            ),
            SolidRecipe::Sphere {
                name,
                component,
                material,
                radius,
                center,
                axis,
                segments,
            } => primitives::sphere(
                writer,
                name,
                component,
                material,
                Value::from(*radius),
                (
                    Value::from(center.0),
                    Value::from(center.1),
                    Value::from(center.2),
                ),
                *axis,
                *segments,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_recipe_round_trips_through_toml() {
        let text = toml::to_string_pretty(&Recipe::starter()).unwrap();
        let parsed: Recipe = toml::from_str(&text).unwrap();
        assert_eq!(parsed.components, vec!["model".to_string()]);
        assert_eq!(parsed.frequency_range, Some((0.5, 3.0)));
        assert_eq!(parsed.solids.len(), 1);
    }

    #[test]
    fn starter_compiles_to_a_complete_macro() {
        let mut writer = VbaWriter::new(Vec::new()).unwrap();
        Recipe::starter().compile(&mut writer).unwrap();
        let script = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert!(script.starts_with("Option Explicit\nSub Main ()\n"));
        assert!(script.contains("With Units"));
        assert!(script.contains("Component.New \"model\""));
        assert!(script.contains("With Brick"));
        assert!(script.contains("Solver.FrequencyRange \"0.5\", \"3\""));
        assert!(script.contains("With EigenmodeSolver"));
        assert!(script.ends_with("\tSave\nEnd Sub\n"));
    }

    #[test]
    fn toml_recipe_with_booleans_and_export() {
        let text = r#"
            frequency_range = [1.0, 12.0]
            components = ["filter"]

            [[materials]]
            name = "Alumina"
            epsilon = 9.9

            [[solids]]
            shape = "brick"
            name = "housing"
            component = "filter"
            material = "PEC"
            x_range = [-40.0, 40.0]
            y_range = [-20.0, 20.0]
            z_range = [0.0, 15.0]

            [[solids]]
            shape = "cylinder"
            name = "bore"
            component = "filter"
            material = "Vacuum"
            axis = "z"
            outer_radius = 6.0
            axis_range = [0.0, 15.0]

            [[booleans]]
            op = "subtract"
            solid_1 = "filter:housing"
            solid_2 = "filter:bore"

            [boundaries.per_axis]
            z = ["electric", "open"]

            [export]
            tree_item = "2D/3D Results\\E-Field\\e1"
            path = "fields.txt"
        "#;
        let recipe: Recipe = toml::from_str(text).unwrap();
        let mut writer = VbaWriter::new(Vec::new()).unwrap();
        recipe.compile(&mut writer).unwrap();
        let script = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert!(script.contains("With Material"));
        assert!(script.contains(".Epsilon \"9.9\""));
        assert!(script.contains("Solid.Subtract \"filter:housing\", \"filter:bore\""));
        assert!(script.contains(".Zmin \"electric\""));
        assert!(script.contains(".Zmax \"open\""));
        assert!(script.contains("SelectTreeItem \"2D/3D Results\\E-Field\\e1\""));
        assert!(script.contains("With ASCIIExport"));
    }
}
