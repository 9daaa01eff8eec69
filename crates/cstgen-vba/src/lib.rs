#![warn(missing_docs)]

//! Low-level writer for CST Studio Suite VBA macros.
//!
//! This crate handles the mechanics of VBA script emission: `With` block
//! nesting and indentation, `Sub Main` entry-point scoping, parameter
//! declaration bookkeeping, and the literal formatting rules the CST
//! scripting engine expects. The command surface built on top of it lives
//! in the `cstgen` crate.
//!
//! # Example
//!
//! ```
//! use cstgen_vba::{quote, VbaWriter};
//!
//! let mut writer = VbaWriter::new(Vec::new())?;
//! writer.with_main(|w| {
//!     w.with_block("Units", |w| {
//!         w.write_line(&format!(".Geometry {}", quote("mm")))
//!     })
//! })?;
//! let script = String::from_utf8(writer.finish()?).unwrap();
//! assert!(script.starts_with("Option Explicit\nSub Main ()\n"));
//! # Ok::<(), cstgen_vba::VbaError>(())
//! ```

pub mod error;
pub mod value;
pub mod writer;

pub use error::VbaError;
pub use value::{quote, Value, VbaType};
pub use writer::VbaWriter;
