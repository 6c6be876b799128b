//! Callback configuration variants.
//!
//! A configuration is a small value built once before a multiplication and
//! consumed by [`CallbackConfig::build`](super::CallbackConfig::build).
//! Buffers are held as [`OutputBuffer`] / [`BiasBuffer`], which keep the raw
//! base pointer the kernels write through plus, when built from a slice, its
//! length and borrow.
//!
//! An [`OutputBuffer`] stands in for a unique `&mut [T]`, so it and every
//! configuration holding one are neither `Clone` nor `Copy`. A configuration
//! runs at most once:
//!
//! ```compile_fail
//! use igemm_kernels::{run_epilogue, Sse2, UnquantizeAndWrite};
//!
//! let acc = vec![0i32; 8];
//! let mut out = vec![0.0f32; 8];
//! let config = UnquantizeAndWrite::new(1.0, &mut out);
//! let second = config;
//! run_epilogue::<Sse2, _>(&acc, 2, 4, config).unwrap();
//! run_epilogue::<Sse2, _>(&acc, 2, 4, second).unwrap();
//! ```
//!
//! ```compile_fail
//! use igemm_kernels::Write;
//!
//! let mut out = vec![0i32; 8];
//! let config = Write::new(&mut out);
//! let _copy = config.clone();
//! ```

use crate::error::{KernelError, KernelResult};
use crate::types::Index;
use std::fmt;
use std::marker::PhantomData;

/// Destination of a callback: a base pointer into caller-owned memory.
pub struct OutputBuffer<'a, T> {
    ptr: *mut T,
    len: Option<usize>,
    _marker: PhantomData<&'a mut [T]>,
}

impl<'a, T> OutputBuffer<'a, T> {
    pub fn new(output: &'a mut [T]) -> Self {
        Self { ptr: output.as_mut_ptr(), len: Some(output.len()), _marker: PhantomData }
    }

    /// Wrap a raw base pointer with no known length.
    ///
    /// # Safety
    /// Every offset the callback is invoked with, plus one register width,
    /// must stay inside a single writable allocation for as long as the
    /// configuration is used, and concurrent users must write disjoint
    /// regions.
    pub unsafe fn from_raw(ptr: *mut T) -> Self {
        Self { ptr, len: None, _marker: PhantomData }
    }

    #[inline(always)]
    pub fn as_ptr(&self) -> *mut T {
        self.ptr
    }

    /// Element count, when built from a slice.
    pub fn known_len(&self) -> Option<usize> {
        self.len
    }

    /// `true` if `end` elements fit; always `true` for raw buffers.
    #[inline(always)]
    pub(crate) fn fits(&self, end: usize) -> bool {
        self.len.map_or(true, |len| end <= len)
    }

    pub(crate) fn require(&self, what: &'static str, needed: usize) -> KernelResult<()> {
        match self.len {
            Some(actual) if actual < needed => Err(KernelError::BufferTooSmall { what, needed, actual }),
            _ => Ok(()),
        }
    }
}

impl<T> fmt::Debug for OutputBuffer<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputBuffer").field("ptr", &self.ptr).field("len", &self.len).finish()
    }
}

// Same auto traits as `&mut [T]`. Writes through a shared reference only
// happen in `unsafe` callback code, whose callers partition the output.
unsafe impl<T: Send> Send for OutputBuffer<'_, T> {}
unsafe impl<T: Sync> Sync for OutputBuffer<'_, T> {}

/// Read-only per-column bias, indexed by `col_idx` for every row.
pub struct BiasBuffer<'a, T> {
    ptr: *const T,
    len: Option<usize>,
    _marker: PhantomData<&'a [T]>,
}

impl<'a, T> BiasBuffer<'a, T> {
    pub fn new(bias: &'a [T]) -> Self {
        Self { ptr: bias.as_ptr(), len: Some(bias.len()), _marker: PhantomData }
    }

    /// # Safety
    /// `ptr` must stay readable for `cols` elements while the configuration
    /// is used.
    pub unsafe fn from_raw(ptr: *const T) -> Self {
        Self { ptr, len: None, _marker: PhantomData }
    }

    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.ptr
    }

    /// Element count, when built from a slice.
    pub fn known_len(&self) -> Option<usize> {
        self.len
    }

    #[inline(always)]
    pub(crate) fn fits(&self, end: usize) -> bool {
        self.len.map_or(true, |len| end <= len)
    }

    pub(crate) fn require(&self, needed: usize) -> KernelResult<()> {
        match self.len {
            Some(actual) if actual < needed => {
                Err(KernelError::BufferTooSmall { what: "bias", needed, actual })
            }
            _ => Ok(()),
        }
    }
}

impl<T> Clone for BiasBuffer<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for BiasBuffer<'_, T> {}

impl<T> fmt::Debug for BiasBuffer<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BiasBuffer").field("ptr", &self.ptr).field("len", &self.len).finish()
    }
}

unsafe impl<T: Sync> Send for BiasBuffer<'_, T> {}
unsafe impl<T: Sync> Sync for BiasBuffer<'_, T> {}

/// Leave the accumulators where they are.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dummy;

/// Store the raw i32 accumulators.
#[derive(Debug)]
pub struct Write<'a> {
    pub output: OutputBuffer<'a, i32>,
}

impl<'a> Write<'a> {
    pub fn new(output: &'a mut [i32]) -> Self {
        Self { output: OutputBuffer::new(output) }
    }

    /// # Safety
    /// See [`OutputBuffer::from_raw`].
    pub unsafe fn from_raw(output_addr: *mut i32) -> Self {
        Self { output: OutputBuffer::from_raw(output_addr) }
    }
}

/// Add an i32 per-column bias to the accumulators, then store them.
#[derive(Debug)]
pub struct AddBiasAndWrite<'a> {
    pub bias: BiasBuffer<'a, i32>,
    pub output: OutputBuffer<'a, i32>,
}

impl<'a> AddBiasAndWrite<'a> {
    pub fn new(bias: &'a [i32], output: &'a mut [i32]) -> Self {
        Self { bias: BiasBuffer::new(bias), output: OutputBuffer::new(output) }
    }

    /// # Safety
    /// See [`BiasBuffer::from_raw`] and [`OutputBuffer::from_raw`].
    pub unsafe fn from_raw(bias_addr: *const i32, output_addr: *mut i32) -> Self {
        Self { bias: BiasBuffer::from_raw(bias_addr), output: OutputBuffer::from_raw(output_addr) }
    }
}

/// `acc as f32 * unquant_mult`, stored as f32.
#[derive(Debug)]
pub struct UnquantizeAndWrite<'a> {
    pub unquant_mult: f32,
    pub output: OutputBuffer<'a, f32>,
}

impl<'a> UnquantizeAndWrite<'a> {
    pub fn new(unquant_mult: f32, output: &'a mut [f32]) -> Self {
        Self { unquant_mult, output: OutputBuffer::new(output) }
    }

    /// # Safety
    /// See [`OutputBuffer::from_raw`].
    pub unsafe fn from_raw(unquant_mult: f32, addr: *mut f32) -> Self {
        Self { unquant_mult, output: OutputBuffer::from_raw(addr) }
    }
}

/// Unquantize, add the per-column f32 bias, store.
#[derive(Debug)]
pub struct UnquantizeAndAddBiasAndWrite<'a> {
    pub unquant_mult: f32,
    pub bias: BiasBuffer<'a, f32>,
    pub output: OutputBuffer<'a, f32>,
}

impl<'a> UnquantizeAndAddBiasAndWrite<'a> {
    pub fn new(unquant_mult: f32, bias: &'a [f32], output: &'a mut [f32]) -> Self {
        Self { unquant_mult, bias: BiasBuffer::new(bias), output: OutputBuffer::new(output) }
    }

    /// # Safety
    /// See [`BiasBuffer::from_raw`] and [`OutputBuffer::from_raw`].
    pub unsafe fn from_raw(unquant_mult: f32, bias_addr: *const f32, output_addr: *mut f32) -> Self {
        Self {
            unquant_mult,
            bias: BiasBuffer::from_raw(bias_addr),
            output: OutputBuffer::from_raw(output_addr),
        }
    }
}

/// Unquantize, clamp at zero, store.
#[derive(Debug)]
pub struct UnquantizeAndWriteRelu<'a> {
    pub unquant_mult: f32,
    pub output: OutputBuffer<'a, f32>,
}

impl<'a> UnquantizeAndWriteRelu<'a> {
    pub fn new(unquant_mult: f32, output: &'a mut [f32]) -> Self {
        Self { unquant_mult, output: OutputBuffer::new(output) }
    }

    /// # Safety
    /// See [`OutputBuffer::from_raw`].
    pub unsafe fn from_raw(unquant_mult: f32, addr: *mut f32) -> Self {
        Self { unquant_mult, output: OutputBuffer::from_raw(addr) }
    }
}

/// Unquantize, add bias, clamp at zero, store.
#[derive(Debug)]
pub struct UnquantizeAndAddBiasAndWriteRelu<'a> {
    pub unquant_mult: f32,
    pub bias: BiasBuffer<'a, f32>,
    pub output: OutputBuffer<'a, f32>,
}

impl<'a> UnquantizeAndAddBiasAndWriteRelu<'a> {
    pub fn new(unquant_mult: f32, bias: &'a [f32], output: &'a mut [f32]) -> Self {
        Self { unquant_mult, bias: BiasBuffer::new(bias), output: OutputBuffer::new(output) }
    }

    /// # Safety
    /// See [`BiasBuffer::from_raw`] and [`OutputBuffer::from_raw`].
    pub unsafe fn from_raw(unquant_mult: f32, bias_addr: *const f32, output_addr: *mut f32) -> Self {
        Self {
            unquant_mult,
            bias: BiasBuffer::from_raw(bias_addr),
            output: OutputBuffer::from_raw(output_addr),
        }
    }
}

// Shape checks shared by the CallbackConfig impls.

pub(crate) fn check_output<T>(output: &OutputBuffer<'_, T>, rows: Index, cols: Index) -> KernelResult<()> {
    output.require("output", rows.saturating_mul(cols))
}

pub(crate) fn check_bias<T>(bias: &BiasBuffer<'_, T>, cols: Index) -> KernelResult<()> {
    bias.require(cols)
}
