//! Scalar activation functions and their approximations.

use crate::tables::{EXP_LOOKUP, EXP_MAX, EXP_MIN, TAYLOR_DIVIDERS};

/// ReLU: `max(x, 0)` on any ordered element.
#[inline]
pub fn relu<T: PartialOrd + Default + Copy>(x: T) -> T {
    let zero = T::default();
    if x > zero {
        x
    } else {
        zero
    }
}

/// Floor that mirrors the truncate-and-correct vector emulation.
///
/// Lanes with `|x| >= 2^23`, infinities and NaN are returned unchanged, so
/// this agrees with `f32::floor` everywhere.
#[inline]
pub fn floor_by_truncation(x: f32) -> f32 {
    if !(x.abs() < 8_388_608.0) {
        return x;
    }
    let truncated = (x as i32) as f32;
    if x < 0.0 && x != truncated {
        truncated - 1.0
    } else {
        truncated
    }
}

/// `e^x` via a degree-7 Taylor polynomial on the fractional part and a table
/// lookup for the integer part.
///
/// Inputs are clamped to `[EXP_MIN, EXP_MAX]`. The operation order is the
/// same as the vector kernel, so results agree bit-for-bit.
pub fn exp_approx_taylor(x: f32) -> f32 {
    let x = x.max(EXP_MIN as f32).min(EXP_MAX as f32);
    let a = x.floor();
    let xa = x - a;

    let mut result = TAYLOR_DIVIDERS[0] * xa;
    for &divider in &TAYLOR_DIVIDERS[1..] {
        result = result + divider;
        result = result * xa;
    }
    result = result + 1.0;

    let ea = EXP_LOOKUP[(a as i32 - EXP_MIN) as usize];
    ea * result
}

/// Logistic sigmoid using exact `f32::exp`.
#[inline]
pub fn sigmoid(x: f32) -> f32 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Sigmoid built on [`exp_approx_taylor`], exact division.
///
/// Differs from the vector kernel only by the reciprocal approximation.
#[inline]
pub fn sigmoid_taylor(x: f32) -> f32 {
    if x >= 0.0 {
        1.0 / (1.0 + exp_approx_taylor(-x))
    } else {
        let e = exp_approx_taylor(x);
        e / (1.0 + e)
    }
}

/// Tanh built on [`exp_approx_taylor`]; matches the vector kernel exactly.
#[inline]
pub fn tanh_taylor(x: f32) -> f32 {
    let e_x = exp_approx_taylor(x);
    let e_minus_x = exp_approx_taylor(0.0 - x);
    (e_x - e_minus_x) / (e_x + e_minus_x)
}

/// ReLU over a slice: `out[i] = max(0, x[i])`
pub fn scalar_relu(x: &[f32], out: &mut [f32]) {
    debug_assert_eq!(x.len(), out.len());
    for (o, &v) in out.iter_mut().zip(x) {
        *o = relu(v);
    }
}

/// Sigmoid over a slice.
pub fn scalar_sigmoid(x: &[f32], out: &mut [f32]) {
    debug_assert_eq!(x.len(), out.len());
    for (o, &v) in out.iter_mut().zip(x) {
        *o = sigmoid(v);
    }
}

/// Tanh over a slice.
pub fn scalar_tanh(x: &[f32], out: &mut [f32]) {
    debug_assert_eq!(x.len(), out.len());
    for (o, &v) in out.iter_mut().zip(x) {
        *o = v.tanh();
    }
}
