//! Table-plus-polynomial exponential and the activations built on it.
//!
//! These need a gather to read the integer-exponent table, so they are
//! bounded on [`Gather`] and do not exist for SSE2.

use crate::cpu_kernels::Gather;
use igemm_scalar_ops::{EXP_LOOKUP, EXP_MAX, EXP_MIN, TAYLOR_DIVIDERS};

/// `e^x` for `x` clamped to `[-20, 20]`.
///
/// `x = a + xa` with `a = floor(x)`. `e^xa` comes from a degree-7 Horner
/// polynomial on `[0, 1)`, `e^a` from a 41-entry table gather.
#[inline(always)]
pub unsafe fn exp_approx_taylor<I: Gather>(x: I::Vf) -> I::Vf {
    // max/min return the bound for NaN lanes, keeping the gather index valid.
    let x = I::max_ps(x, I::set1_ps(EXP_MIN as f32));
    let x = I::min_ps(x, I::set1_ps(EXP_MAX as f32));

    let a = I::floor_ps(x);
    let xa = I::sub_ps(x, a);

    let mut result = I::mul_ps(I::set1_ps(TAYLOR_DIVIDERS[0]), xa);
    for &divider in &TAYLOR_DIVIDERS[1..] {
        result = I::add_ps(result, I::set1_ps(divider));
        result = I::mul_ps(result, xa);
    }
    result = I::add_ps(result, I::set1_ps(1.0));

    // Base points at e^0 so the signed exponent indexes directly.
    let table_zero = EXP_LOOKUP.as_ptr().add((-EXP_MIN) as usize);
    let ea = I::i32gather_ps(table_zero, I::cvttps_epi32(a));
    I::mul_ps(ea, result)
}

/// Logistic sigmoid with a per-lane stable branch.
///
/// `1 / (1 + e^-x)` for `x >= 0`, `e^x / (1 + e^x)` for `x < 0`; the
/// divisions use the approximate reciprocal.
#[inline(always)]
pub unsafe fn sigmoid<I: Gather>(input: I::Vf) -> I::Vf {
    let vconst_zero = I::setzero_ps();
    let vconst_one = I::set1_ps(1.0);

    let x = input;
    let minus_x = I::sub_ps(vconst_zero, x);
    let e_x = exp_approx_taylor::<I>(x);
    let e_minus_x = exp_approx_taylor::<I>(minus_x);

    let nonnegative_case = I::rcp_ps(I::add_ps(vconst_one, e_minus_x));
    let negative_case = I::mul_ps(e_x, I::rcp_ps(I::add_ps(vconst_one, e_x)));

    let negative_mask = I::cmplt_ps(x, vconst_zero);
    I::blend_ps(negative_mask, nonnegative_case, negative_case)
}

/// `(e^x - e^-x) / (e^x + e^-x)` with an exact division.
#[inline(always)]
pub unsafe fn tanh<I: Gather>(input: I::Vf) -> I::Vf {
    let vconst_zero = I::setzero_ps();

    let e_x = exp_approx_taylor::<I>(input);
    let e_minus_x = exp_approx_taylor::<I>(I::sub_ps(vconst_zero, input));

    I::div_ps(I::sub_ps(e_x, e_minus_x), I::add_ps(e_x, e_minus_x))
}
