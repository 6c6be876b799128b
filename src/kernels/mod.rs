//! Width-agnostic numeric kernels.
//!
//! Every kernel is written once against the [`Isa`] primitives and
//! monomorphized per instruction set. All functions are `#[inline(always)]`
//! so they are emitted inside the caller's `#[target_feature]` region.
//!
//! # Safety
//! Every kernel requires that the CPU supports `I`. Pointer-taking kernels
//! additionally require `I::BYTES` valid bytes at `base + offset`; there is
//! no bounds checking.

use crate::cpu_kernels::{Isa, Lane};
use crate::types::Index;

pub mod exp;

pub use exp::{exp_approx_taylor, sigmoid, tanh};

/// Store one register at `output + offset` (element offset, unaligned).
#[inline(always)]
pub unsafe fn write<I: Isa, T: Lane<I>>(input: T::Reg, output: *mut T, offset: Index) {
    T::storeu(output.add(offset), input)
}

/// `round(input * quant_mult)` into i32 lanes, ties to even.
///
/// Out-of-range and NaN lanes produce `i32::MIN` (x86 integer indefinite).
#[inline(always)]
pub unsafe fn quantize<I: Isa>(input: I::Vf, quant_mult: I::Vf) -> I::Vi {
    I::cvtps_epi32(I::mul_ps(input, quant_mult))
}

/// `(input as f32) * unquant_mult` per lane.
#[inline(always)]
pub unsafe fn unquantize<I: Isa>(input: I::Vi, unquant_mult: I::Vf) -> I::Vf {
    I::mul_ps(I::cvtepi32_ps(input), unquant_mult)
}

/// Add the register-width chunk of bias found at `bias_addr + bias_offset`.
#[inline(always)]
pub unsafe fn add_bias<I: Isa, T: Lane<I>>(input: T::Reg, bias_addr: *const T, bias_offset: Index) -> T::Reg {
    let bias_term = T::loadu(bias_addr.add(bias_offset));
    T::add(input, bias_term)
}

/// `max(x, 0)` per lane.
#[inline(always)]
pub unsafe fn relu<I: Isa, T: Lane<I>>(input: T::Reg) -> T::Reg {
    T::max(input, T::setzero())
}

/// Lane-wise multiply; integer lanes keep the low bits of the product.
#[inline(always)]
pub unsafe fn multiply<I: Isa, T: Lane<I>>(a: T::Reg, b: T::Reg) -> T::Reg {
    T::mul(a, b)
}

/// 8-bit lane multiply. No x86 ISA has one: multiply the even and odd bytes
/// as 16-bit lanes and stitch the low bytes back together.
#[inline(always)]
pub unsafe fn mullo_epi8<I: Isa>(a: I::Vi, b: I::Vi) -> I::Vi {
    let even = I::mullo_epi16(a, b);
    let odd = I::mullo_epi16(I::srli_epi16(a, 8), I::srli_epi16(b, 8));
    I::or_si(I::slli_epi16(odd, 8), I::srli_epi16(I::slli_epi16(even, 8), 8))
}

/// Lane-wise floor, native where the ISA has one.
#[inline(always)]
pub unsafe fn floor<I: Isa>(input: I::Vf) -> I::Vf {
    I::floor_ps(input)
}

/// Floor from truncation: `trunc(x) - 1` on negative non-integer lanes.
///
/// Only primitives present on every ISA are used, so this is the floor of
/// targets without `roundps`. Lanes with `|x| >= 2^23` are already integral
/// (or infinite, or NaN) and pass through unchanged.
#[inline(always)]
pub unsafe fn floor_by_truncation<I: Isa>(input: I::Vf) -> I::Vf {
    let vconst_zero = I::setzero_ps();
    let vconst_one = I::set1_ps(1.0);
    let vconst_integral = I::set1_ps(FLOAT_INTEGRAL_BOUND);

    let result = I::cvtepi32_ps(I::cvttps_epi32(input));
    let negatives = I::cmplt_ps(input, vconst_zero);
    let nonintegers = I::cmpneq_ps(input, result);
    let corrected = I::blend_ps(I::mask_and(negatives, nonintegers), result, I::sub_ps(result, vconst_one));

    // False for NaN, so NaN lanes take the input too.
    let magnitude = I::max_ps(input, I::sub_ps(vconst_zero, input));
    let fractional_range = I::cmplt_ps(magnitude, vconst_integral);
    I::blend_ps(fractional_range, input, corrected)
}

/// Smallest magnitude at which every f32 is an integer (2^23).
pub const FLOAT_INTEGRAL_BOUND: f32 = 8_388_608.0;

/// 32-bit lane multiply from widening multiplies.
///
/// `mul_epu32` forms the 64-bit products of the even lanes; the odd lanes are
/// shuffled down into even position and multiplied the same way. The low
/// halves are then gathered with `shuffle_epi32` and re-interleaved with
/// `unpacklo_epi32`. Every step works within 128-bit lanes, so the result
/// equals `mullo_epi32` on every ISA. SSE2 uses this as its `mullo_epi32`.
#[inline(always)]
pub unsafe fn mullo_epi32_by_parts<I: Isa>(a: I::Vi, b: I::Vi) -> I::Vi {
    const ODD_TO_EVEN: i32 = 0b11_11_01_01;
    const LOW_HALVES: i32 = 0b00_00_10_00;

    let even = I::mul_epu32(a, b);
    let odd = I::mul_epu32(I::shuffle_epi32::<ODD_TO_EVEN>(a), I::shuffle_epi32::<ODD_TO_EVEN>(b));
    I::unpacklo_epi32(I::shuffle_epi32::<LOW_HALVES>(even), I::shuffle_epi32::<LOW_HALVES>(odd))
}
