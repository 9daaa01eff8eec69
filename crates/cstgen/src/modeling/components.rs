//! Component management.
//!
//! Solids are stored under named components; a component must exist
//! before anything can be created inside it.

use std::io::Write;

use cstgen_vba::{quote, VbaWriter};

use crate::error::Error;

/// Create a new, empty component.
pub fn new_component(writer: &mut VbaWriter<impl Write>, name: &str) -> Result<(), Error> {
    writer.write_line(&format!("Component.New {}", quote(name)))?;
    Ok(())
}

/// Delete a component and everything stored under it.
pub fn delete_component(writer: &mut VbaWriter<impl Write>, name: &str) -> Result<(), Error> {
    writer.write_line(&format!("Component.Delete {}", quote(name)))?;
    Ok(())
}
