//! Solver configuration and launch commands.

pub mod eigenmode;
pub mod settings;

use std::io::Write;

use cstgen_vba::{Value, VbaWriter};

use crate::error::Error;

/// Set the frequency range shared by all solvers, in the project's
/// frequency unit.
pub fn frequency_range(
    writer: &mut VbaWriter<impl Write>,
    range: (Value, Value),
) -> Result<(), Error> {
    writer.write_line(&format!(
        "Solver.FrequencyRange {}, {}",
        range.0.arg(),
        range.1.arg()
    ))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_preserves_min_max_order() {
        let mut w = VbaWriter::new(Vec::new()).unwrap();
        frequency_range(&mut w, (Value::from(0.5), Value::from(4.0))).unwrap();
        let out = String::from_utf8(w.finish().unwrap()).unwrap();
        assert_eq!(
            out,
            "Option Explicit\nSolver.FrequencyRange \"0.5\", \"4\"\n"
        );
    }
}
