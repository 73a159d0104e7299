//! Increment Module - native integer increment for Python
//!
//! This library exposes one operation, `add`, which returns its argument plus one.
//! It is reachable two ways: as the Python extension module `module` (with the
//! `python` feature) and as a plain C ABI symbol for FFI hosts.

#[cfg(feature = "python")]
pub mod error;
pub mod ffi;
pub mod increment;

#[cfg(feature = "python")]
pub mod python;

#[cfg(test)]
mod tests;

#[cfg(feature = "python")]
pub use error::ArgumentError;
pub use increment::increment;
