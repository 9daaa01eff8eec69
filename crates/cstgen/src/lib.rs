#![warn(missing_docs)]

//! High-level macro generation for CST Studio Suite.
//!
//! Each module mirrors one area of the CST user interface and provides
//! emitter functions that encode the corresponding VBA commands through a
//! [`VbaWriter`]. The writer itself (indentation, block nesting, parameter
//! bookkeeping, literal formatting) lives in the `cstgen-vba` crate and is
//! re-exported here.
//!
//! # Example
//!
//! ```
//! use cstgen::{units, VbaWriter};
//!
//! let mut writer = VbaWriter::new(Vec::new())?;
//! writer.with_main(|w| units::set_units(w, &units::Units::default()))?;
//! let script = String::from_utf8(writer.finish()?).unwrap();
//! assert!(script.contains("With Units"));
//! # Ok::<(), cstgen::Error>(())
//! ```

pub mod error;
pub mod export;
pub mod materials;
pub mod modeling;
pub mod project;
pub mod solver;
pub mod tree;
pub mod units;

pub use cstgen_vba::{quote, Value, VbaError, VbaType, VbaWriter};
pub use error::Error;
