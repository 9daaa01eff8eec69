//! Project-level commands: file handling and application state.

use std::io::Write;

use cstgen_vba::{quote, Value, VbaWriter};

use crate::error::Error;

/// Open a new, unnamed project.
pub fn file_new(writer: &mut VbaWriter<impl Write>) -> Result<(), Error> {
    writer.write_line("FileNew")?;
    Ok(())
}

/// Open the existing project stored at `path`.
pub fn open_file(writer: &mut VbaWriter<impl Write>, path: &str) -> Result<(), Error> {
    writer.write_line(&format!("OpenFile {}", quote(path)))?;
    Ok(())
}

/// Close the project without saving.
pub fn quit(writer: &mut VbaWriter<impl Write>) -> Result<(), Error> {
    writer.write_line("Quit")?;
    Ok(())
}

/// Save the project.
pub fn save(writer: &mut VbaWriter<impl Write>) -> Result<(), Error> {
    writer.write_line("Save")?;
    Ok(())
}

/// Save the project under `path`, with or without solver results.
pub fn save_as(
    writer: &mut VbaWriter<impl Write>,
    path: &str,
    include_results: bool,
) -> Result<(), Error> {
    writer.write_line(&format!(
        "SaveAs {}, {}",
        quote(path),
        Value::from(include_results).arg()
    ))?;
    Ok(())
}

/// Lock or unlock user interaction for the duration of the macro. CST
/// re-enables interaction when the macro finishes.
pub fn set_interaction_lock(writer: &mut VbaWriter<impl Write>, lock: bool) -> Result<(), Error> {
    writer.write_line(&format!("SetLock {}", Value::from(lock).arg()))?;
    Ok(())
}
