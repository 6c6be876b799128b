//! Macro system for igemm-kernels.
//!
//! Two layers:
//! 1. `simd_primitive!` (hardware primitives per ISA and element)
//! 2. `expand_isa_impls!` / `expand_gather_impl!` (per-ISA trait expansion)

#[macro_use]
pub mod simd_primitive;
#[macro_use]
pub mod expand;
