//! Error types for VBA script emission.

use thiserror::Error;

/// Errors that can occur while writing a VBA macro.
#[derive(Error, Debug)]
pub enum VbaError {
    /// The output sink rejected a write. Fatal; never retried.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value was assigned to a parameter that was never declared in the
    /// scope the assignment runs in.
    #[error("parameter `{name}` in scope `{}` was never declared", scope.as_deref().unwrap_or("<global>"))]
    UndeclaredParam {
        /// Parameter name the assignment targeted.
        name: String,
        /// Scope that was current at the assignment (`None` = outside
        /// `Sub Main`).
        scope: Option<String>,
    },

    /// `End With` was requested with no open `With` block.
    #[error("`End With` without a matching `With`")]
    UnbalancedBlock,

    /// `End Sub` was requested outside the `Sub Main` entry point.
    #[error("`End Sub` without a matching `Sub Main`")]
    MainNotEntered,

    /// An integer literal does not fit VBA's 16-bit `Integer` type.
    #[error("value {0} cannot be represented by a 16-bit VBA Integer")]
    IntegerOutOfRange(i64),
}
