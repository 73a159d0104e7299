//! C FFI layer.
//!
//! Exports C ABI functions for hosts that load the shared library directly
//! (ctypes, LuaJIT FFI, C). These are thin wrappers over the `increment` module.

pub mod simple;

pub use simple::add;
