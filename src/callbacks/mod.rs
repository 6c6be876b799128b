//! Output callbacks.
//!
//! A callback turns one register of i32 accumulators into the caller's final
//! output for one tile. The set of behaviors is closed: each configuration
//! variant in [`configs`] maps, through [`CallbackConfig::Impl`], to one
//! functor type per ISA, resolved at compile time. Adding a behavior means
//! adding a config struct, a functor, and the `CallbackConfig` impl below.

pub mod configs;
pub mod implementations;

pub use configs::{
    AddBiasAndWrite, BiasBuffer, Dummy, OutputBuffer, UnquantizeAndAddBiasAndWrite,
    UnquantizeAndAddBiasAndWriteRelu, UnquantizeAndWrite, UnquantizeAndWriteRelu, Write,
};
pub use implementations::{
    AddBiasAndWriteCallback, DummyCallback, UnquantizeAndAddBiasAndWriteCallback,
    UnquantizeAndAddBiasAndWriteReluCallback, UnquantizeAndWriteCallback,
    UnquantizeAndWriteReluCallback, WriteCallback,
};

use crate::cpu_kernels::Isa;
use crate::error::KernelResult;
use crate::types::{Index, OutputBufferInfo};
use configs::{check_bias, check_output};

/// Per-tile post-processing step, specialized for one ISA.
///
/// Functors are immutable after construction and may be shared across
/// threads that process disjoint tiles.
pub trait OutputCallback<I: Isa>: Send + Sync {
    /// Process one accumulator register for the tile described by `info`.
    ///
    /// # Safety
    /// The CPU must support `I` and the configured buffers must cover the
    /// tile: `output[linear_offset .. linear_offset + LANES_I32]` and, for
    /// bias variants, `bias[col_idx .. col_idx + LANES_I32]`.
    unsafe fn run(&self, input: I::Vi, info: &OutputBufferInfo);
}

/// A configuration variant and the functor it compiles to on each ISA.
///
/// `build` consumes the configuration, so a slice-backed configuration
/// yields exactly one functor. Share the functor by reference instead.
pub trait CallbackConfig: Sized {
    type Impl<I: Isa>: OutputCallback<I>;

    /// Build the functor, broadcasting scalar parameters into registers.
    ///
    /// # Safety
    /// The CPU must support `I`.
    unsafe fn build<I: Isa>(self) -> Self::Impl<I>;

    /// Check the slice-backed buffers against a `rows x cols` output.
    fn validate(&self, _rows: Index, _cols: Index) -> KernelResult<()> {
        Ok(())
    }
}

impl CallbackConfig for Dummy {
    type Impl<I: Isa> = DummyCallback;

    unsafe fn build<I: Isa>(self) -> DummyCallback {
        DummyCallback::new(self)
    }
}

impl<'a> CallbackConfig for Write<'a> {
    type Impl<I: Isa> = WriteCallback<'a>;

    unsafe fn build<I: Isa>(self) -> WriteCallback<'a> {
        WriteCallback::new(self)
    }

    fn validate(&self, rows: Index, cols: Index) -> KernelResult<()> {
        check_output(&self.output, rows, cols)
    }
}

impl<'a> CallbackConfig for AddBiasAndWrite<'a> {
    type Impl<I: Isa> = AddBiasAndWriteCallback<'a>;

    unsafe fn build<I: Isa>(self) -> AddBiasAndWriteCallback<'a> {
        AddBiasAndWriteCallback::new(self)
    }

    fn validate(&self, rows: Index, cols: Index) -> KernelResult<()> {
        check_bias(&self.bias, cols)?;
        check_output(&self.output, rows, cols)
    }
}

impl<'a> CallbackConfig for UnquantizeAndWrite<'a> {
    type Impl<I: Isa> = UnquantizeAndWriteCallback<'a, I>;

    unsafe fn build<I: Isa>(self) -> UnquantizeAndWriteCallback<'a, I> {
        UnquantizeAndWriteCallback::new(self)
    }

    fn validate(&self, rows: Index, cols: Index) -> KernelResult<()> {
        check_output(&self.output, rows, cols)
    }
}

impl<'a> CallbackConfig for UnquantizeAndAddBiasAndWrite<'a> {
    type Impl<I: Isa> = UnquantizeAndAddBiasAndWriteCallback<'a, I>;

    unsafe fn build<I: Isa>(self) -> UnquantizeAndAddBiasAndWriteCallback<'a, I> {
        UnquantizeAndAddBiasAndWriteCallback::new(self)
    }

    fn validate(&self, rows: Index, cols: Index) -> KernelResult<()> {
        check_bias(&self.bias, cols)?;
        check_output(&self.output, rows, cols)
    }
}

impl<'a> CallbackConfig for UnquantizeAndWriteRelu<'a> {
    type Impl<I: Isa> = UnquantizeAndWriteReluCallback<'a, I>;

    unsafe fn build<I: Isa>(self) -> UnquantizeAndWriteReluCallback<'a, I> {
        UnquantizeAndWriteReluCallback::new(self)
    }

    fn validate(&self, rows: Index, cols: Index) -> KernelResult<()> {
        check_output(&self.output, rows, cols)
    }
}

impl<'a> CallbackConfig for UnquantizeAndAddBiasAndWriteRelu<'a> {
    type Impl<I: Isa> = UnquantizeAndAddBiasAndWriteReluCallback<'a, I>;

    unsafe fn build<I: Isa>(self) -> UnquantizeAndAddBiasAndWriteReluCallback<'a, I> {
        UnquantizeAndAddBiasAndWriteReluCallback::new(self)
    }

    fn validate(&self, rows: Index, cols: Index) -> KernelResult<()> {
        check_bias(&self.bias, cols)?;
        check_output(&self.output, rows, cols)
    }
}
