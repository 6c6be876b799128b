//! Scalar quantize / unquantize references with x86 conversion semantics.

/// x86 "integer indefinite" value returned by float→int conversions that
/// overflow or see NaN.
pub const INTEGER_INDEFINITE: i32 = i32::MIN;

/// Float→i32 with round-half-to-even, matching `cvtps2dq` under the default
/// MXCSR rounding mode.
#[inline]
pub fn cvt_nearest(x: f32) -> i32 {
    let r = x.round_ties_even();
    if r.is_nan() || r < i32::MIN as f32 || r >= 2_147_483_648.0 {
        INTEGER_INDEFINITE
    } else {
        r as i32
    }
}

/// Float→i32 with truncation, matching `cvttps2dq`.
#[inline]
pub fn cvt_truncate(x: f32) -> i32 {
    let t = x.trunc();
    if t.is_nan() || t < i32::MIN as f32 || t >= 2_147_483_648.0 {
        INTEGER_INDEFINITE
    } else {
        t as i32
    }
}

/// `round(x * quant_mult)` to i32.
#[inline]
pub fn quantize(x: f32, quant_mult: f32) -> i32 {
    cvt_nearest(x * quant_mult)
}

/// `(acc as f32) * unquant_mult`.
#[inline]
pub fn unquantize(acc: i32, unquant_mult: f32) -> f32 {
    acc as f32 * unquant_mult
}

/// Quantize a slice into i32 lanes.
pub fn scalar_quantize(x: &[f32], out: &mut [i32], quant_mult: f32) {
    debug_assert_eq!(x.len(), out.len());
    for (o, &v) in out.iter_mut().zip(x) {
        *o = quantize(v, quant_mult);
    }
}

/// Unquantize a slice of accumulators, optionally adding a per-column bias.
///
/// `acc` is a row-major `rows x cols` matrix; `bias`, when present, holds at
/// least `cols` values and is applied to every row.
pub fn scalar_unquantize(
    acc: &[i32],
    out: &mut [f32],
    cols: usize,
    unquant_mult: f32,
    bias: Option<&[f32]>,
) {
    debug_assert_eq!(acc.len(), out.len());
    for (idx, (o, &a)) in out.iter_mut().zip(acc).enumerate() {
        let v = unquantize(a, unquant_mult);
        *o = match bias {
            Some(b) => v + b[idx % cols],
            None => v,
        };
    }
}
