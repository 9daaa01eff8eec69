//! Boolean operations on solids.
//!
//! Each operation combines two existing solids; the result is stored
//! under the first name and the second solid is consumed.

use std::io::Write;

use cstgen_vba::{quote, VbaWriter};

use crate::error::Error;

fn boolean(
    writer: &mut VbaWriter<impl Write>,
    op: &str,
    solid_1: &str,
    solid_2: &str,
) -> Result<(), Error> {
    writer.write_line(&format!(
        "Solid.{op} {}, {}",
        quote(solid_1),
        quote(solid_2)
    ))?;
    Ok(())
}

/// Boolean union of two solids.
pub fn add(writer: &mut VbaWriter<impl Write>, solid_1: &str, solid_2: &str) -> Result<(), Error> {
    boolean(writer, "Add", solid_1, solid_2)
}

/// Boolean difference: `solid_2` is cut away from `solid_1`.
pub fn subtract(
    writer: &mut VbaWriter<impl Write>,
    solid_1: &str,
    solid_2: &str,
) -> Result<(), Error> {
    boolean(writer, "Subtract", solid_1, solid_2)
}

/// Boolean intersection of two solids.
pub fn intersect(
    writer: &mut VbaWriter<impl Write>,
    solid_1: &str,
    solid_2: &str,
) -> Result<(), Error> {
    boolean(writer, "Intersect", solid_1, solid_2)
}

/// Insert `solid_2` into `solid_1`: both survive, with the overlap
/// removed from `solid_1`.
pub fn insert(
    writer: &mut VbaWriter<impl Write>,
    solid_1: &str,
    solid_2: &str,
) -> Result<(), Error> {
    boolean(writer, "Insert", solid_1, solid_2)
}
