//! Argument errors raised at the host boundary.

use thiserror::Error;

/// Why an argument could not be marshalled into a 32-bit integer.
///
/// Both variants surface to Python as `module.ArgumentTypeError`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// The argument has no integer interpretation (`str`, `float`, `None`, ...).
    #[error("an integer is required (got type {type_name})")]
    NotAnInteger { type_name: String },

    /// The argument is an integer but lies outside `i32`. `value` is the
    /// decimal value, or a bit count when that does not fit `i64`.
    #[error("integer {value} is out of range for a signed 32-bit integer")]
    OutOfRange { value: String },
}
