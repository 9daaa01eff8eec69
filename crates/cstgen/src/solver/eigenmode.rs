//! Eigenmode solver launch.

use std::io::Write;

use serde::{Deserialize, Serialize};

use cstgen_vba::{quote, Value, VbaWriter};

use crate::error::Error;

/// Mesh the eigenmode solver runs on, with its adaptation flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EigenmodeMesh {
    /// Hexahedral mesh.
    Hexahedral {
        /// Enable automatic hexahedral mesh adaptation.
        adaptive: bool,
    },
    /// Tetrahedral mesh.
    Tetrahedral {
        /// Enable automatic tetrahedral mesh adaptation.
        adaptive: bool,
    },
}

impl Default for EigenmodeMesh {
    fn default() -> Self {
        EigenmodeMesh::Hexahedral { adaptive: false }
    }
}

impl EigenmodeMesh {
    fn as_str(&self) -> &'static str {
        match self {
            EigenmodeMesh::Hexahedral { .. } => "Hexahedral Mesh",
            EigenmodeMesh::Tetrahedral { .. } => "Tetrahedral Mesh",
        }
    }
}

/// Configure and start the eigenmode solver.
///
/// `number_of_modes` are computed inside the frequency range set with
/// [`super::frequency_range`].
pub fn eigenmode_solver(
    writer: &mut VbaWriter<impl Write>,
    number_of_modes: i64,
    mesh: &EigenmodeMesh,
) -> Result<(), Error> {
    writer.begin_with("EigenmodeSolver")?;
    writer.write_line(".Reset")?;
    writer.write_line(&format!(".SetMeshType {}", quote(mesh.as_str())))?;
    match mesh {
        EigenmodeMesh::Hexahedral { adaptive } => {
            writer.write_line(&format!(
                ".SetMeshAdaptationHex {}",
                Value::from(*adaptive).arg()
            ))?;
        }
        EigenmodeMesh::Tetrahedral { adaptive } => {
            writer.write_line(&format!(
                ".SetMeshAdaptationTet {}",
                Value::from(*adaptive).arg()
            ))?;
        }
    }
    writer.write_line(&format!(
        ".SetNumberOfModes {}",
        Value::from(number_of_modes).arg()
    ))?;
    writer.write_line(".Start")?;
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
    fn hexahedral_run() {
        let mut w = VbaWriter::new(Vec::new()).unwrap();
        eigenmode_solver(&mut w, 10, &EigenmodeMesh::Hexahedral { adaptive: true }).unwrap();
        assert_eq!(
            text(w),
            "Option Explicit\n\
             With EigenmodeSolver\n\
             \t.Reset\n\
             \t.SetMeshType \"Hexahedral Mesh\"\n\
             \t.SetMeshAdaptationHex \"True\"\n\
             \t.SetNumberOfModes \"10\"\n\
             \t.Start\n\
             End With\n"
        );
    }

    #[test]
    fn tetrahedral_run_sets_the_tet_flag() {
        let mut w = VbaWriter::new(Vec::new()).unwrap();
        eigenmode_solver(&mut w, 5, &EigenmodeMesh::Tetrahedral { adaptive: false }).unwrap();
        let out = text(w);
        assert!(out.contains(".SetMeshType \"Tetrahedral Mesh\"\n"));
        assert!(out.contains(".SetMeshAdaptationTet \"False\"\n"));
        assert!(!out.contains(".SetMeshAdaptationHex"));
    }
}
