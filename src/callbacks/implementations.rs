//! Per-variant callback functors.
//!
//! `build` broadcasts the scalar parameters into registers once; `run` is
//! then the fixed kernel pipeline of the variant followed by exactly one
//! register-width store at `info.linear_offset()`.

use super::configs::{
    AddBiasAndWrite, Dummy, UnquantizeAndAddBiasAndWrite, UnquantizeAndAddBiasAndWriteRelu,
    UnquantizeAndWrite, UnquantizeAndWriteRelu, Write,
};
use super::OutputCallback;
use crate::cpu_kernels::Isa;
use crate::kernels;
use crate::types::OutputBufferInfo;

#[derive(Debug, Clone, Copy, Default)]
pub struct DummyCallback;

impl<I: Isa> OutputCallback<I> for DummyCallback {
    #[inline(always)]
    unsafe fn run(&self, _input: I::Vi, _info: &OutputBufferInfo) {}
}

impl DummyCallback {
    pub fn new(_config: Dummy) -> Self {
        DummyCallback
    }
}

#[derive(Debug)]
pub struct WriteCallback<'a> {
    config: Write<'a>,
}

impl<'a> WriteCallback<'a> {
    pub fn new(config: Write<'a>) -> Self {
        Self { config }
    }
}

impl<I: Isa> OutputCallback<I> for WriteCallback<'_> {
    #[inline(always)]
    unsafe fn run(&self, input: I::Vi, info: &OutputBufferInfo) {
        let offset = info.linear_offset();
        debug_assert!(self.config.output.fits(offset + I::LANES_I32));
        kernels::write::<I, i32>(input, self.config.output.as_ptr(), offset);
    }
}

#[derive(Debug)]
pub struct AddBiasAndWriteCallback<'a> {
    config: AddBiasAndWrite<'a>,
}

impl<'a> AddBiasAndWriteCallback<'a> {
    pub fn new(config: AddBiasAndWrite<'a>) -> Self {
        Self { config }
    }
}

impl<I: Isa> OutputCallback<I> for AddBiasAndWriteCallback<'_> {
    #[inline(always)]
    unsafe fn run(&self, input: I::Vi, info: &OutputBufferInfo) {
        let offset = info.linear_offset();
        debug_assert!(self.config.bias.fits(info.col_idx + I::LANES_I32));
        debug_assert!(self.config.output.fits(offset + I::LANES_I32));
        let result = kernels::add_bias::<I, i32>(input, self.config.bias.as_ptr(), info.col_idx);
        kernels::write::<I, i32>(result, self.config.output.as_ptr(), offset);
    }
}

pub struct UnquantizeAndWriteCallback<'a, I: Isa> {
    config: UnquantizeAndWrite<'a>,
    unquant_mult: I::Vf,
}

impl<'a, I: Isa> UnquantizeAndWriteCallback<'a, I> {
    /// # Safety
    /// The CPU must support `I`.
    pub unsafe fn new(config: UnquantizeAndWrite<'a>) -> Self {
        let unquant_mult = I::set1_ps(config.unquant_mult);
        Self { config, unquant_mult }
    }
}

impl<I: Isa> OutputCallback<I> for UnquantizeAndWriteCallback<'_, I> {
    #[inline(always)]
    unsafe fn run(&self, input: I::Vi, info: &OutputBufferInfo) {
        let offset = info.linear_offset();
        debug_assert!(self.config.output.fits(offset + I::LANES_I32));
        let result = kernels::unquantize::<I>(input, self.unquant_mult);
        kernels::write::<I, f32>(result, self.config.output.as_ptr(), offset);
    }
}

pub struct UnquantizeAndAddBiasAndWriteCallback<'a, I: Isa> {
    config: UnquantizeAndAddBiasAndWrite<'a>,
    unquant_mult: I::Vf,
}

impl<'a, I: Isa> UnquantizeAndAddBiasAndWriteCallback<'a, I> {
    /// # Safety
    /// The CPU must support `I`.
    pub unsafe fn new(config: UnquantizeAndAddBiasAndWrite<'a>) -> Self {
        let unquant_mult = I::set1_ps(config.unquant_mult);
        Self { config, unquant_mult }
    }
}

impl<I: Isa> OutputCallback<I> for UnquantizeAndAddBiasAndWriteCallback<'_, I> {
    #[inline(always)]
    unsafe fn run(&self, input: I::Vi, info: &OutputBufferInfo) {
        let offset = info.linear_offset();
        debug_assert!(self.config.bias.fits(info.col_idx + I::LANES_I32));
        debug_assert!(self.config.output.fits(offset + I::LANES_I32));
        let result = kernels::unquantize::<I>(input, self.unquant_mult);
        let result = kernels::add_bias::<I, f32>(result, self.config.bias.as_ptr(), info.col_idx);
        kernels::write::<I, f32>(result, self.config.output.as_ptr(), offset);
    }
}

pub struct UnquantizeAndWriteReluCallback<'a, I: Isa> {
    config: UnquantizeAndWriteRelu<'a>,
    unquant_mult: I::Vf,
}

impl<'a, I: Isa> UnquantizeAndWriteReluCallback<'a, I> {
    /// # Safety
    /// The CPU must support `I`.
    pub unsafe fn new(config: UnquantizeAndWriteRelu<'a>) -> Self {
        let unquant_mult = I::set1_ps(config.unquant_mult);
        Self { config, unquant_mult }
    }
}

impl<I: Isa> OutputCallback<I> for UnquantizeAndWriteReluCallback<'_, I> {
    #[inline(always)]
    unsafe fn run(&self, input: I::Vi, info: &OutputBufferInfo) {
        let offset = info.linear_offset();
        debug_assert!(self.config.output.fits(offset + I::LANES_I32));
        let result = kernels::unquantize::<I>(input, self.unquant_mult);
        let result = kernels::relu::<I, f32>(result);
        kernels::write::<I, f32>(result, self.config.output.as_ptr(), offset);
    }
}

pub struct UnquantizeAndAddBiasAndWriteReluCallback<'a, I: Isa> {
    config: UnquantizeAndAddBiasAndWriteRelu<'a>,
    unquant_mult: I::Vf,
}

impl<'a, I: Isa> UnquantizeAndAddBiasAndWriteReluCallback<'a, I> {
    /// # Safety
    /// The CPU must support `I`.
    pub unsafe fn new(config: UnquantizeAndAddBiasAndWriteRelu<'a>) -> Self {
        let unquant_mult = I::set1_ps(config.unquant_mult);
        Self { config, unquant_mult }
    }
}

impl<I: Isa> OutputCallback<I> for UnquantizeAndAddBiasAndWriteReluCallback<'_, I> {
    #[inline(always)]
    unsafe fn run(&self, input: I::Vi, info: &OutputBufferInfo) {
        let offset = info.linear_offset();
        debug_assert!(self.config.bias.fits(info.col_idx + I::LANES_I32));
        debug_assert!(self.config.output.fits(offset + I::LANES_I32));
        let result = kernels::unquantize::<I>(input, self.unquant_mult);
        let result = kernels::add_bias::<I, f32>(result, self.config.bias.as_ptr(), info.col_idx);
        let result = kernels::relu::<I, f32>(result);
        kernels::write::<I, f32>(result, self.config.output.as_ptr(), offset);
    }
}
