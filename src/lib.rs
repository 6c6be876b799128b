//! igemm-kernels: output processing for integer GEMM on x86.
//!
//! Turns the i32 accumulators of an 8/16-bit integer matrix multiply into
//! the caller's final output, one register-width tile at a time:
//! - **Kernels**: quantize, unquantize, bias-add, ReLU, multiply, floor,
//!   table-plus-Taylor `exp`, sigmoid, tanh and write, written once and
//!   monomorphized for SSE2, AVX2 and AVX-512BW
//! - **Callbacks**: a closed set of configuration variants, each compiled
//!   into a per-ISA functor with no per-element dispatch
//! - **Epilogue driver**: validates shapes and ISA support, then applies a
//!   callback to a whole accumulator matrix
//!
//! # Quick Start
//!
//! ```ignore
//! use igemm_kernels::{run_epilogue, Avx2, UnquantizeAndAddBiasAndWrite};
//!
//! let config = UnquantizeAndAddBiasAndWrite::new(1.0 / 127.0, &bias, &mut output);
//! run_epilogue::<Avx2, _>(&accumulators, rows, cols, config)?;
//! ```
//!
//! The ISA is chosen by the caller. `IGEMM_ISA_CEILING=sse2|avx2|avx512bw`
//! caps what [`ensure_isa`] accepts.

pub mod error;
pub mod types;

#[macro_use]
pub mod macros;

#[cfg(target_arch = "x86_64")]
pub mod cpu_kernels;
#[cfg(target_arch = "x86_64")]
pub mod kernels;
#[cfg(target_arch = "x86_64")]
pub mod callbacks;
#[cfg(target_arch = "x86_64")]
pub mod epilogue;

pub use error::{KernelError, KernelResult};
pub use types::{Index, OutputBufferInfo};

#[cfg(target_arch = "x86_64")]
pub use cpu_kernels::{
    best_isa_level, ensure_isa, isa_available, isa_ceiling, Avx2, Avx512bw, Gather, Isa, IsaLevel,
    Lane, Sse2,
};
#[cfg(target_arch = "x86_64")]
pub use callbacks::{
    AddBiasAndWrite, CallbackConfig, Dummy, OutputCallback, UnquantizeAndAddBiasAndWrite,
    UnquantizeAndAddBiasAndWriteRelu, UnquantizeAndWrite, UnquantizeAndWriteRelu, Write,
};
#[cfg(target_arch = "x86_64")]
pub use epilogue::{run_epilogue, run_epilogue_unchecked};

pub use igemm_scalar_ops as scalar_ops;

#[cfg(all(test, target_arch = "x86_64"))]
mod tests_simd;
