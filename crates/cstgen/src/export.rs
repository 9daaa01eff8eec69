//! Result data export.

use std::io::Write;

use serde::{Deserialize, Serialize};

use cstgen_vba::{quote, Value, VbaWriter};

use crate::error::Error;

/// Format of the exported data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFileType {
    /// Plain text.
    #[default]
    Ascii,
    /// Comma-separated values.
    Csv,
    /// HDF5.
    Hdf5,
}

impl ExportFileType {
    fn as_str(&self) -> &'static str {
        match self {
            ExportFileType::Ascii => "ascii",
            ExportFileType::Csv => "csv",
            ExportFileType::Hdf5 => "hdf5",
        }
    }
}

/// How 2D/3D field results are sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleMode {
    /// Export a fixed number of samples per direction.
    FixedNumber,
    /// Fix the step width per direction.
    FixedWidth,
}

impl SampleMode {
    fn as_str(&self) -> &'static str {
        match self {
            SampleMode::FixedNumber => "FixedNumber",
            SampleMode::FixedWidth => "FixedWidth",
        }
    }
}

/// Options for [`ascii_export`]. The sampling members only apply when the
/// selected tree item is a 2D/3D field result.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AsciiExportOptions {
    /// Exported file format.
    pub file_type: ExportFileType,
    /// Sampling mode for field results.
    pub sample_mode: Option<SampleMode>,
    /// Number of samples or step width, uniform over all directions.
    pub step: Option<Value>,
    /// Number of samples or step width per direction (x, y, z).
    pub step_per_axis: Option<(Value, Value, Value)>,
    /// Evaluation sub-volume as (min, max) pairs in x, y, z order.
    pub subvolume: Option<[(f64, f64); 3]>,
    /// Evaluate inside `subvolume` instead of the whole structure.
    pub use_subvolume: bool,
    /// Export coordinates in meters instead of project units.
    pub use_meter: bool,
    /// Separator for the csv format.
    pub csv_separator: Option<String>,
}

/// Export the currently selected tree item to `export_path`.
///
/// Select the item first with [`crate::tree::select_tree_item`].
pub fn ascii_export(
    writer: &mut VbaWriter<impl Write>,
    export_path: &str,
    options: &AsciiExportOptions,
) -> Result<(), Error> {
    writer.begin_with("ASCIIExport")?;
    writer.write_line(".Reset")?;
    writer.write_line(&format!(".FileName {}", quote(export_path)))?;
    writer.write_line(&format!(".SetfileType {}", quote(options.file_type.as_str())))?;
    if let Some(mode) = options.sample_mode {
        writer.write_line(&format!(".Mode {}", quote(mode.as_str())))?;
    }
    if let Some(step) = &options.step {
        writer.write_line(&format!(".Step {}", step.arg()))?;
    }
    if let Some((x, y, z)) = &options.step_per_axis {
        writer.write_line(&format!(".StepX {}", x.arg()))?;
        writer.write_line(&format!(".StepY {}", y.arg()))?;
        writer.write_line(&format!(".StepZ {}", z.arg()))?;
    }
    if let Some(bounds) = options.subvolume {
        let flat = bounds
            .iter()
            .flat_map(|(min, max)| [*min, *max])
            .map(|v| Value::from(v).arg())
            .collect::<Vec<_>>()
            .join(", ");
        writer.write_line(&format!(".SetSubvolume {flat}"))?;
    }
    writer.write_line(&format!(
        ".UseSubvolume {}",
        Value::from(options.use_subvolume).arg()
    ))?;
    writer.write_line(&format!(
        ".ExportCoordinatesInMeter {}",
        Value::from(options.use_meter).arg()
    ))?;
    if let Some(separator) = &options.csv_separator {
        writer.write_line(&format!(".SetCsvSeparator {}", quote(separator)))?;
    }
    writer.write_line(".Execute")?;
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
    fn minimal_export() {
        let mut w = VbaWriter::new(Vec::new()).unwrap();
        ascii_export(&mut w, "results/e_field.txt", &AsciiExportOptions::default()).unwrap();
        assert_eq!(
            text(w),
            "Option Explicit\n\
             With ASCIIExport\n\
             \t.Reset\n\
             \t.FileName \"results/e_field.txt\"\n\
             \t.SetfileType \"ascii\"\n\
             \t.UseSubvolume \"False\"\n\
             \t.ExportCoordinatesInMeter \"False\"\n\
             \t.Execute\n\
             End With\n"
        );
    }

    #[test]
    fn subvolume_flattens_min_max_pairs_in_axis_order() {
        let mut w = VbaWriter::new(Vec::new()).unwrap();
        ascii_export(
            &mut w,
            "results/e.csv",
            &AsciiExportOptions {
                file_type: ExportFileType::Csv,
                sample_mode: Some(SampleMode::FixedWidth),
                step_per_axis: Some((Value::from(1.0), Value::from(2.0), Value::from(4.0))),
                subvolume: Some([(-1.0, 1.0), (-2.0, 2.0), (0.0, 9.0)]),
                use_subvolume: true,
                csv_separator: Some(";".to_string()),
                ..AsciiExportOptions::default()
            },
        )
        .unwrap();
        let out = text(w);
        assert!(out.contains(".Mode \"FixedWidth\"\n"));
        assert!(out.contains(".StepX \"1\"\n\t.StepY \"2\"\n\t.StepZ \"4\"\n"));
        assert!(out.contains(
            ".SetSubvolume \"-1\", \"1\", \"-2\", \"2\", \"0\", \"9\"\n"
        ));
        assert!(out.contains(".UseSubvolume \"True\"\n"));
        assert!(out.contains(".SetCsvSeparator \";\"\n"));
    }
}
