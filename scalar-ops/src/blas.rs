//! Scalar element-wise arithmetic with the wrapping semantics of SIMD lanes.

/// Lane-wise wrapping multiply for the integer widths and plain multiply for
/// floats.
pub trait WrappingLaneMul: Copy {
    fn lane_mul(self, other: Self) -> Self;
}

macro_rules! impl_wrapping_int {
    ($($t:ty),*) => {
        $(impl WrappingLaneMul for $t {
            #[inline]
            fn lane_mul(self, other: Self) -> Self { self.wrapping_mul(other) }
        })*
    };
}

macro_rules! impl_float {
    ($($t:ty),*) => {
        $(impl WrappingLaneMul for $t {
            #[inline]
            fn lane_mul(self, other: Self) -> Self { self * other }
        })*
    };
}

impl_wrapping_int!(i8, i16, i32);
impl_float!(f32, f64);

/// Vector mul: `out[i] = a[i] * b[i]` (wrapping for integers).
pub fn scalar_vec_mul<T: WrappingLaneMul>(a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), out.len());
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        *o = x.lane_mul(y);
    }
}

/// Signed saturating add of i16 lanes (`paddsw`).
#[inline]
pub fn adds_i16(a: i16, b: i16) -> i16 {
    a.saturating_add(b)
}

/// `pmaddwd` for one output lane: `a0*b0 + a1*b1` with 32-bit wrap.
#[inline]
pub fn madd_i16(a0: i16, a1: i16, b0: i16, b1: i16) -> i32 {
    (a0 as i32 * b0 as i32).wrapping_add(a1 as i32 * b1 as i32)
}

/// `pmuludq` for one 64-bit lane: the full product of the low 32 bits.
#[inline]
pub fn mul_u32_wide(a: i32, b: i32) -> u64 {
    (a as u32 as u64) * (b as u32 as u64)
}

/// `pabsb`: absolute value with `i8::MIN` mapping to itself.
#[inline]
pub fn abs_i8(a: i8) -> i8 {
    a.wrapping_abs()
}
