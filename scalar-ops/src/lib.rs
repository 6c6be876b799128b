//! Scalar operator implementations for igemm-kernels.
//!
//! These serve as:
//! 1. Golden reference for correctness testing of the SIMD kernels.
//! 2. The single home of the compile-time constant tables (exponential
//!    lookup, reciprocal factorials) shared by every SIMD instantiation.
//!
//! Every reference follows the exact operation order of its vector
//! counterpart, so results that do not depend on approximate instructions
//! (`rcp`) compare bit-for-bit.

pub mod activations;
pub mod blas;
pub mod quant;
pub mod tables;

pub use tables::{expi, factorial, EXP_LOOKUP, EXP_LOOKUP_LEN, EXP_MAX, EXP_MIN, TAYLOR_DIVIDERS};
