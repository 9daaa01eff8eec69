//! Waveguide filter blank — primitives, booleans and transforms.
//!
//! Generates `brick_filter.bas`: a PEC block with a vacuum channel cut
//! through it, mirrored to produce the second half.

use cstgen::materials::{material, MaterialKind, MaterialProps};
use cstgen::modeling::tools::{
    transform, TransformMethod, TransformOptions, TransformOrigin, TransformTarget,
};
use cstgen::modeling::{components, primitives, solids};
use cstgen::solver::settings::{background, Background};
use cstgen::units::{set_units, Units};
use cstgen::{Error, Value, VbaWriter};

fn main() -> Result<(), Error> {
    let mut writer = VbaWriter::create("brick_filter.bas")?;

    writer.with_main(|w| {
        set_units(w, &Units::default())?;

        material(
            w,
            "Alumina",
            MaterialKind::Normal,
            &MaterialProps {
                epsilon: Some(9.9),
                ..MaterialProps::default()
            },
        )?;

        components::new_component(w, "filter")?;
        primitives::brick(
            w,
            "housing",
            "filter",
            "PEC",
            (Value::from(-40.0), Value::from(40.0)),
            (Value::from(-20.0), Value::from(20.0)),
            (Value::from(0.0), Value::from(15.0)),
        )?;
        primitives::brick(
            w,
            "channel",
            "filter",
            "Vacuum",
            (Value::from(-35.0), Value::from(35.0)),
            (Value::from(-8.0), Value::from(8.0)),
            (Value::from(3.0), Value::from(12.0)),
        )?;
        solids::subtract(w, "filter:housing", "filter:channel")?;

        // Second half by mirroring across the yz-plane.
        transform(
            w,
            "filter:housing",
            TransformTarget::Shape,
            &TransformMethod::Mirror {
                plane_normal: (Value::from(1.0), Value::from(0.0), Value::from(0.0)),
            },
            &TransformOrigin::Free {
                center: (Value::from(40.0), Value::from(0.0), Value::from(0.0)),
            },
            &TransformOptions {
                copy: true,
                unite: true,
                ..TransformOptions::default()
            },
        )?;

        background(w, &Background::default())?;
        Ok::<(), Error>(())
    })?;

    writer.finish()?;
    println!("wrote brick_filter.bas");
    Ok(())
}
