//! redeem-linalg: small dense linear-algebra primitives.
//!
//! This crate provides a bounds-checked `Vector` and `Matrix` over `f64`
//! with scalar and elementwise arithmetic, inner products, matrix-matrix and
//! matrix-vector products, transposition and identity construction. Vectors
//! can also be parsed from literals such as `"[ 1.0 2.0 3.0 ]"`.
//!
//! Every fallible operation returns [`error::Result`]; nothing panics on bad
//! input except the `Index` impls, which mirror slice indexing.
pub mod config;
pub mod error;
pub mod math;

pub use config::FormatConfig;
pub use error::{LinAlgError, Result, Shape};
pub use math::{Matrix, Vector};
