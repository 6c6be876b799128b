//! Compile-time constant tables for the exponential approximation.

/// Smallest integer exponent covered by [`EXP_LOOKUP`].
pub const EXP_MIN: i32 = -20;
/// Largest integer exponent covered by [`EXP_LOOKUP`].
pub const EXP_MAX: i32 = 20;
/// Number of entries in [`EXP_LOOKUP`].
pub const EXP_LOOKUP_LEN: usize = (EXP_MAX - EXP_MIN + 1) as usize;

/// `e^n` for an integer `n`, computed in f64 and rounded once to f32.
pub const fn expi(n: i32) -> f32 {
    let mut acc = 1.0f64;
    let mut i = 0;
    let steps = n.unsigned_abs();
    while i < steps {
        acc *= std::f64::consts::E;
        i += 1;
    }
    if n < 0 {
        (1.0 / acc) as f32
    } else {
        acc as f32
    }
}

/// `n!` for small `n`.
pub const fn factorial(n: u32) -> u64 {
    let mut acc = 1u64;
    let mut i = 2;
    while i <= n as u64 {
        acc *= i;
        i += 1;
    }
    acc
}

const fn build_exp_lookup() -> [f32; EXP_LOOKUP_LEN] {
    let mut table = [0.0f32; EXP_LOOKUP_LEN];
    let mut i = 0;
    while i < EXP_LOOKUP_LEN {
        table[i] = expi(EXP_MIN + i as i32);
        i += 1;
    }
    table
}

/// `e^n` for `n` in `EXP_MIN..=EXP_MAX`; index with `n - EXP_MIN`.
///
/// A `static` rather than a `const` so that gather instructions can address
/// it through one stable pointer.
pub static EXP_LOOKUP: [f32; EXP_LOOKUP_LEN] = build_exp_lookup();

/// Horner coefficients for `e^x` on `[0, 1)`: `1/7!, 1/6!, ..., 1/1!`.
/// The trailing `+1` term is applied separately.
pub const TAYLOR_DIVIDERS: [f32; 7] = [
    1.0 / factorial(7) as f32,
    1.0 / factorial(6) as f32,
    1.0 / factorial(5) as f32,
    1.0 / factorial(4) as f32,
    1.0 / factorial(3) as f32,
    1.0 / factorial(2) as f32,
    1.0 / factorial(1) as f32,
];
