//! Python binding: the `module` extension module.
//!
//! `add` takes its argument as an untyped object and converts it explicitly,
//! so every marshalling failure surfaces as `module.ArgumentTypeError` before
//! the computation runs.

use pyo3::create_exception;
use pyo3::exceptions::{PyOverflowError, PyTypeError};
use pyo3::prelude::*;

use crate::error::ArgumentError;
use crate::increment::increment;

create_exception!(
    module,
    ArgumentTypeError,
    PyTypeError,
    "Raised when an argument cannot be converted to a signed 32-bit integer."
);

impl From<ArgumentError> for PyErr {
    fn from(err: ArgumentError) -> PyErr {
        ArgumentTypeError::new_err(err.to_string())
    }
}

/// Converts one host value into an `i32`.
///
/// Accepts `int` and anything implementing `__index__` (including `bool`).
/// Type and range failures become `ArgumentTypeError`; anything raised by a
/// user `__index__` propagates unchanged.
pub fn parse_argument(arg: &Bound<'_, PyAny>) -> PyResult<i32> {
    let py = arg.py();
    arg.extract::<i32>().map_err(|err| {
        let rejected = if err.is_instance_of::<PyOverflowError>(py) {
            ArgumentError::OutOfRange {
                value: describe_integer(arg),
            }
        } else if err.is_instance_of::<PyTypeError>(py) {
            ArgumentError::NotAnInteger {
                type_name: arg
                    .get_type()
                    .name()
                    .map(|name| name.to_string())
                    .unwrap_or_else(|_| "<unknown>".to_owned()),
            }
        } else {
            return err;
        };
        tracing::debug!(error = %rejected, "rejected argument to add");
        rejected.into()
    })
}

// Decimal when it fits i64, otherwise the bit length. Huge ints can exceed
// the interpreter's int-to-str digit limit.
fn describe_integer(arg: &Bound<'_, PyAny>) -> String {
    if let Ok(value) = arg.extract::<i64>() {
        return value.to_string();
    }
    match arg
        .call_method0("bit_length")
        .and_then(|bits| bits.extract::<u64>())
    {
        Ok(bits) => format!("of {} bits", bits),
        Err(_) => "of unknown size".to_owned(),
    }
}

/// Return `a + 1`. `a` must fit in a signed 32-bit integer; the result wraps
/// at 2**31 - 1.
#[pyfunction]
#[pyo3(name = "add", signature = (a, /))]
fn py_add(a: &Bound<'_, PyAny>) -> PyResult<i32> {
    let a = parse_argument(a)?;
    Ok(increment(a))
}

/// Populates a module object with the public API.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("ArgumentTypeError", m.py().get_type_bound::<ArgumentTypeError>())?;
    m.add_function(wrap_pyfunction!(py_add, m)?)?;
    Ok(())
}

#[pymodule]
#[pyo3(name = "module")]
fn module_init(m: &Bound<'_, PyModule>) -> PyResult<()> {
    register(m)
}
