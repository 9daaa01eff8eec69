//! Error types for the CST command surface.

use thiserror::Error;

/// Errors returned by operation emitters.
#[derive(Error, Debug)]
pub enum Error {
    /// Error from the underlying VBA writer.
    #[error(transparent)]
    Vba(#[from] cstgen_vba::VbaError),

    /// A polygon curve needs at least one segment after its start point.
    #[error("polygon curve `{0}` has no segments")]
    EmptyPolygon(String),
}
