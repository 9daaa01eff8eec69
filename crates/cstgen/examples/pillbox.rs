//! Pillbox cavity eigenmode study — curves, rotation and solver launch.
//!
//! Generates `pillbox.bas`, which builds a cylindrical vacuum cavity as a
//! solid of revolution and computes its first ten eigenmodes.

use cstgen::modeling::curves::{self, PolygonStep};
use cstgen::modeling::{components, shapes};
use cstgen::solver::eigenmode::{eigenmode_solver, EigenmodeMesh};
use cstgen::solver::frequency_range;
use cstgen::solver::settings::{boundaries, BoundarySpec, BoundaryType};
use cstgen::units::{set_units, Units};
use cstgen::{Error, Value, VbaWriter};

fn main() -> Result<(), Error> {
    let mut writer = VbaWriter::create("pillbox.bas")?;

    writer.with_main(|w| {
        set_units(w, &Units::default())?;

        // Cavity dimensions as host-side parameters, so they stay
        // tunable inside CST.
        w.define("cavity_radius", 115.0)?;
        w.define("cavity_length", 100.0)?;

        // Half cross-section of the cavity in the xy-plane.
        curves::polygon(
            w,
            "profile",
            "curve",
            (Value::from(0.0), Value::from(0.0)),
            &[
                PolygonStep::LineTo(Value::from("cavity_radius"), Value::from(0.0)),
                PolygonStep::RLine(Value::from(0.0), Value::from("cavity_length")),
                PolygonStep::LineTo(Value::from(0.0), Value::from("cavity_length")),
                PolygonStep::LineTo(Value::from(0.0), Value::from(0.0)),
            ],
        )?;
        shapes::face(
            w,
            "cross_section",
            &shapes::FaceMode::CoverCurve {
                curve: "curve:profile".to_string(),
            },
            None,
        )?;

        components::new_component(w, "cavity")?;
        shapes::rotate(
            w,
            "body",
            "cavity",
            "Vacuum",
            &shapes::RotateMode::Picks,
            &shapes::RotateOptions::default(),
        )?;

        boundaries(w, &BoundarySpec::AllDirections(BoundaryType::Electric))?;
        frequency_range(w, (Value::from(0.5), Value::from(3.0)))?;
        eigenmode_solver(w, 10, &EigenmodeMesh::Hexahedral { adaptive: true })?;
        Ok::<(), Error>(())
    })?;

    writer.finish()?;
    println!("wrote pillbox.bas");
    Ok(())
}
