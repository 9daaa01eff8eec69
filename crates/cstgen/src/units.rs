//! Global unit settings.

use std::io::Write;

use serde::{Deserialize, Serialize};

use cstgen_vba::{quote, VbaWriter};

use crate::error::Error;

/// Unit of length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Meter.
    M,
    /// Centimeter.
    Cm,
    /// Millimeter.
    #[default]
    Mm,
    /// Micrometer.
    Um,
    /// Nanometer.
    Nm,
    /// Feet.
    Ft,
    /// Inch.
    In,
    /// A thousandth of an inch.
    Mil,
}

impl LengthUnit {
    /// Spelling CST expects in the `Units` block.
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthUnit::M => "m",
            LengthUnit::Cm => "cm",
            LengthUnit::Mm => "mm",
            LengthUnit::Um => "um",
            LengthUnit::Nm => "nm",
            LengthUnit::Ft => "ft",
            LengthUnit::In => "in",
            LengthUnit::Mil => "mil",
        }
    }
}

/// Unit of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// Femtosecond.
    Fs,
    /// Picosecond.
    Ps,
    /// Nanosecond.
    #[default]
    Ns,
    /// Microsecond.
    Us,
    /// Millisecond.
    Ms,
    /// Second.
    S,
}

impl TimeUnit {
    /// Spelling CST expects in the `Units` block.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Fs => "fs",
            TimeUnit::Ps => "ps",
            TimeUnit::Ns => "ns",
            TimeUnit::Us => "us",
            TimeUnit::Ms => "ms",
            TimeUnit::S => "s",
        }
    }
}

/// Unit of frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FrequencyUnit {
    /// Hertz.
    Hz,
    /// Kilohertz.
    #[serde(rename = "kHz")]
    KHz,
    /// Megahertz.
    MHz,
    /// Gigahertz.
    #[default]
    GHz,
    /// Terahertz.
    THz,
    /// Petahertz.
    PHz,
}

impl FrequencyUnit {
    /// Spelling CST expects in the `Units` block.
    pub fn as_str(&self) -> &'static str {
        match self {
            FrequencyUnit::Hz => "Hz",
            FrequencyUnit::KHz => "kHz",
            FrequencyUnit::MHz => "MHz",
            FrequencyUnit::GHz => "GHz",
            FrequencyUnit::THz => "THz",
            FrequencyUnit::PHz => "PHz",
        }
    }
}

/// Unit of temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    /// Degrees Celsius.
    #[default]
    Celsius,
    /// Kelvin.
    Kelvin,
    /// Degrees Fahrenheit.
    Fahrenheit,
}

impl TemperatureUnit {
    /// Spelling CST expects in the `Units` block.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Kelvin => "kelvin",
            TemperatureUnit::Fahrenheit => "fahrenheit",
        }
    }
}

/// The four global units every project defines.
///
/// Defaults to mm / ns / GHz / celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Units {
    /// Unit of length.
    pub length: LengthUnit,
    /// Unit of time.
    pub time: TimeUnit,
    /// Unit of frequency.
    pub frequency: FrequencyUnit,
    /// Unit of temperature.
    pub temperature: TemperatureUnit,
}

/// Emit the `With Units` block setting all four project units.
pub fn set_units(writer: &mut VbaWriter<impl Write>, units: &Units) -> Result<(), Error> {
    writer.begin_with("Units")?;
    writer.write_line(&format!(".Geometry {}", quote(units.length.as_str())))?;
    writer.write_line(&format!(".Time {}", quote(units.time.as_str())))?;
    writer.write_line(&format!(".Frequency {}", quote(units.frequency.as_str())))?;
    writer.write_line(&format!(
        ".TemperatureUnit {}",
        quote(units.temperature.as_str())
    ))?;
    writer.end_with()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_units_block() {
        let mut w = VbaWriter::new(Vec::new()).unwrap();
        set_units(&mut w, &Units::default()).unwrap();
        let out = String::from_utf8(w.finish().unwrap()).unwrap();
        assert_eq!(
            out,
            "Option Explicit\n\
             With Units\n\
             \t.Geometry \"mm\"\n\
             \t.Time \"ns\"\n\
             \t.Frequency \"GHz\"\n\
             \t.TemperatureUnit \"celsius\"\n\
             End With\n"
        );
    }

    #[test]
    fn imperial_units_spellings() {
        let units = Units {
            length: LengthUnit::Mil,
            frequency: FrequencyUnit::KHz,
            ..Units::default()
        };
        let mut w = VbaWriter::new(Vec::new()).unwrap();
        set_units(&mut w, &units).unwrap();
        let out = String::from_utf8(w.finish().unwrap()).unwrap();
        assert!(out.contains(".Geometry \"mil\""));
        assert!(out.contains(".Frequency \"kHz\""));
    }
}
