//! Material definitions.

use std::io::Write;

use serde::{Deserialize, Serialize};

use cstgen_vba::{quote, Value, VbaWriter};

use crate::error::Error;

/// Electromagnetic class of a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    /// Dielectric described by its material properties.
    #[default]
    Normal,
    /// Perfect electric conductor.
    Pec,
}

impl MaterialKind {
    fn as_str(&self) -> &'static str {
        match self {
            MaterialKind::Normal => "Normal",
            MaterialKind::Pec => "PEC",
        }
    }
}

/// Electromagnetic properties of a `Normal` material. CST falls back to
/// vacuum values for anything left unset.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialProps {
    /// Relative electric permittivity.
    pub epsilon: Option<f64>,
    /// Relative magnetic permeability.
    pub mu: Option<f64>,
    /// Electric conductivity in S/m.
    pub electric_conductivity: Option<f64>,
}

/// Define a material that solids can then be assigned to.
pub fn material(
    writer: &mut VbaWriter<impl Write>,
    name: &str,
    kind: MaterialKind,
    props: &MaterialProps,
) -> Result<(), Error> {
    writer.begin_with("Material")?;
    writer.write_line(".Reset")?;
    writer.write_line(&format!(".Name {}", quote(name)))?;
    writer.write_line(&format!(".Type {}", quote(kind.as_str())))?;
    if let Some(epsilon) = props.epsilon {
        writer.write_line(&format!(".Epsilon {}", Value::from(epsilon).arg()))?;
    }
    if let Some(mu) = props.mu {
        writer.write_line(&format!(".Mu {}", Value::from(mu).arg()))?;
    }
    if let Some(conductivity) = props.electric_conductivity {
        writer.write_line(&format!(".ElConductivity {}", Value::from(conductivity).arg()))?;
    }
    writer.write_line(".Create")?;
    writer.end_with()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dielectric_with_permittivity() {
        let mut w = VbaWriter::new(Vec::new()).unwrap();
        material(
            &mut w,
            "Alumina",
            MaterialKind::Normal,
            &MaterialProps {
                epsilon: Some(9.9),
                ..MaterialProps::default()
            },
        )
        .unwrap();
        let out = String::from_utf8(w.finish().unwrap()).unwrap();
        assert_eq!(
            out,
            "Option Explicit\n\
             With Material\n\
             \t.Reset\n\
             \t.Name \"Alumina\"\n\
             \t.Type \"Normal\"\n\
             \t.Epsilon \"9.9\"\n\
             \t.Create\n\
             End With\n"
        );
    }

    #[test]
    fn pec_omits_unset_properties() {
        let mut w = VbaWriter::new(Vec::new()).unwrap();
        material(&mut w, "Walls", MaterialKind::Pec, &MaterialProps::default()).unwrap();
        let out = String::from_utf8(w.finish().unwrap()).unwrap();
        assert!(out.contains(".Type \"PEC\"\n"));
        assert!(!out.contains(".Epsilon"));
        assert!(!out.contains(".Mu"));
    }
}
