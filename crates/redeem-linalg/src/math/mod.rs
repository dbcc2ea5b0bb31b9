//! Dense `f64` vector and matrix types.
//!
//! `Vector` and `Matrix` own their storage, check every index and shape, and
//! pair each in-place arithmetic method with a variant that returns a fresh
//! value and leaves its receiver untouched.
pub mod matrix;
pub mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
