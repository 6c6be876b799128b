//! SSE2 stand-ins for SSE4.1/SSSE3 integer instructions.
//!
//! Each function is bit-identical to the instruction it replaces. `pmulld`
//! is width-generic and lives in `kernels::mullo_epi32_by_parts`.

use std::arch::x86_64::*;

/// `pmaxsb` via a signed compare and select.
#[inline(always)]
pub unsafe fn max_epi8(a: __m128i, b: __m128i) -> __m128i {
    let a_greater = _mm_cmpgt_epi8(a, b);
    _mm_or_si128(_mm_and_si128(a_greater, a), _mm_andnot_si128(a_greater, b))
}

/// `pmaxsd` via a signed compare and select.
#[inline(always)]
pub unsafe fn max_epi32(a: __m128i, b: __m128i) -> __m128i {
    let a_greater = _mm_cmpgt_epi32(a, b);
    _mm_or_si128(_mm_and_si128(a_greater, a), _mm_andnot_si128(a_greater, b))
}

/// `pabsb`: `(a ^ sign) - sign`, so `i8::MIN` stays `i8::MIN`.
#[inline(always)]
pub unsafe fn abs_epi8(a: __m128i) -> __m128i {
    let sign = _mm_cmplt_epi8(a, _mm_setzero_si128());
    _mm_sub_epi8(_mm_xor_si128(a, sign), sign)
}
