/// Maps abstract SIMD operations to concrete x86 intrinsics or emulations.
///
/// # Architecture
/// This macro is "Layer 1" of the kernel architecture. It provides one arm per
/// `(isa, element, op)` tuple covering:
/// - Register types (`@vi`, `@vf`, `@vd`, `@mask`) and architecture constants
/// - Set/zero/load/store, integer and float arithmetic, compare, convert,
///   shift, shuffle, blend and gather
///
/// Element tags: `i8`/`i16`/`i32`/`u32` select the integer lane view of an
/// integer register, `si` is a lane-agnostic bitwise op, `f32`/`f64` are float
/// lanes, `mask` operates on comparison masks.
///
/// SSE2 lacks `pmaxsb`, `pmaxsd`, `pmulld`, `pabsb`, `roundps` and gathers.
/// Max and abs route to bit-identical emulations in
/// `cpu_kernels::sse2::emulate`, `pmulld` and floor to the width-generic
/// kernels built from other primitives, and gather has no arm at all.
///
/// # Usage
/// ```ignore
/// simd_primitive!(sse2, i32, add, a, b)   // -> _mm_add_epi32(a, b)
/// simd_primitive!(avx2, f32, floor, a)    // -> _mm256_floor_ps(a)
/// ```
#[macro_export]
macro_rules! simd_primitive {
    // ========================================================================
    // SSE2 (128-bit)
    // ========================================================================

    // --- Register types & constants ---
    (sse2, @vi) => { ::std::arch::x86_64::__m128i };
    (sse2, @vf) => { ::std::arch::x86_64::__m128 };
    (sse2, @vd) => { ::std::arch::x86_64::__m128d };
    (sse2, @mask) => { ::std::arch::x86_64::__m128 };
    (sse2, bytes) => { 16 };
    (sse2, detect) => { ::std::is_x86_feature_detected!("sse2") };

    // --- Set / zero ---
    (sse2, i8, splat, $v:expr) => { ::std::arch::x86_64::_mm_set1_epi8($v) };
    (sse2, i16, splat, $v:expr) => { ::std::arch::x86_64::_mm_set1_epi16($v) };
    (sse2, i32, splat, $v:expr) => { ::std::arch::x86_64::_mm_set1_epi32($v) };
    (sse2, f32, splat, $v:expr) => { ::std::arch::x86_64::_mm_set1_ps($v) };
    (sse2, f64, splat, $v:expr) => { ::std::arch::x86_64::_mm_set1_pd($v) };
    (sse2, si, zero) => { ::std::arch::x86_64::_mm_setzero_si128() };
    (sse2, f32, zero) => { ::std::arch::x86_64::_mm_setzero_ps() };
    (sse2, f64, zero) => { ::std::arch::x86_64::_mm_setzero_pd() };

    // --- Load / store (unaligned) ---
    (sse2, si, loadu, $p:expr) => { ::std::arch::x86_64::_mm_loadu_si128($p) };
    (sse2, si, storeu, $p:expr, $v:expr) => { ::std::arch::x86_64::_mm_storeu_si128($p, $v) };
    (sse2, f32, loadu, $p:expr) => { ::std::arch::x86_64::_mm_loadu_ps($p) };
    (sse2, f32, storeu, $p:expr, $v:expr) => { ::std::arch::x86_64::_mm_storeu_ps($p, $v) };
    (sse2, f64, loadu, $p:expr) => { ::std::arch::x86_64::_mm_loadu_pd($p) };
    (sse2, f64, storeu, $p:expr, $v:expr) => { ::std::arch::x86_64::_mm_storeu_pd($p, $v) };

    // --- Integer arithmetic ---
    (sse2, i8, abs, $a:expr) => { $crate::cpu_kernels::sse2::emulate::abs_epi8($a) };
    (sse2, i8, add, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm_add_epi8($a, $b) };
    (sse2, i16, add, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm_add_epi16($a, $b) };
    (sse2, i32, add, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm_add_epi32($a, $b) };
    (sse2, i16, adds, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm_adds_epi16($a, $b) };
    (sse2, i8, max, $a:expr, $b:expr) => { $crate::cpu_kernels::sse2::emulate::max_epi8($a, $b) };
    (sse2, i16, max, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm_max_epi16($a, $b) };
    (sse2, i32, max, $a:expr, $b:expr) => { $crate::cpu_kernels::sse2::emulate::max_epi32($a, $b) };
    (sse2, i16, mullo, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm_mullo_epi16($a, $b) };
    (sse2, i32, mullo, $a:expr, $b:expr) => {
        $crate::kernels::mullo_epi32_by_parts::<$crate::cpu_kernels::Sse2>($a, $b)
    };
    (sse2, u32, mul_wide, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm_mul_epu32($a, $b) };
    (sse2, i16, madd, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm_madd_epi16($a, $b) };

    // --- Bitwise ---
    (sse2, si, and, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm_and_si128($a, $b) };
    (sse2, si, andnot, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm_andnot_si128($a, $b) };
    (sse2, si, or, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm_or_si128($a, $b) };

    // --- Shifts & shuffles ---
    (sse2, i16, shl, $a:expr, $n:expr) => {
        ::std::arch::x86_64::_mm_sll_epi16($a, ::std::arch::x86_64::_mm_cvtsi32_si128($n as i32))
    };
    (sse2, i16, shr_u, $a:expr, $n:expr) => {
        ::std::arch::x86_64::_mm_srl_epi16($a, ::std::arch::x86_64::_mm_cvtsi32_si128($n as i32))
    };
    (sse2, i32, shuffle, $a:expr, $imm:tt) => { ::std::arch::x86_64::_mm_shuffle_epi32::<$imm>($a) };
    (sse2, i32, unpacklo, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm_unpacklo_epi32($a, $b) };

    // --- Float arithmetic ---
    (sse2, f32, add, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm_add_ps($a, $b) };
    (sse2, f64, add, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm_add_pd($a, $b) };
    (sse2, f32, sub, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm_sub_ps($a, $b) };
    (sse2, f64, sub, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm_sub_pd($a, $b) };
    (sse2, f32, mul, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm_mul_ps($a, $b) };
    (sse2, f64, mul, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm_mul_pd($a, $b) };
    (sse2, f32, div, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm_div_ps($a, $b) };
    (sse2, f32, max, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm_max_ps($a, $b) };
    (sse2, f64, max, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm_max_pd($a, $b) };
    (sse2, f32, min, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm_min_ps($a, $b) };
    (sse2, f32, recip, $a:expr) => { ::std::arch::x86_64::_mm_rcp_ps($a) };
    (sse2, f32, floor, $a:expr) => {
        $crate::kernels::floor_by_truncation::<$crate::cpu_kernels::Sse2>($a)
    };

    // --- Conversions ---
    (sse2, i32, cast_f32, $a:expr) => { ::std::arch::x86_64::_mm_cvtepi32_ps($a) };
    (sse2, f32, cvt_nearest, $a:expr) => { ::std::arch::x86_64::_mm_cvtps_epi32($a) };
    (sse2, f32, cvt_trunc, $a:expr) => { ::std::arch::x86_64::_mm_cvttps_epi32($a) };

    // --- Compare / select ---
    (sse2, f32, cmp_lt, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm_cmplt_ps($a, $b) };
    (sse2, f32, cmp_neq, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm_cmpneq_ps($a, $b) };
    (sse2, mask, and, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm_and_ps($a, $b) };
    // No blendvps before SSE4.1: (mask & b) | (!mask & a)
    (sse2, f32, blend, $m:expr, $a:expr, $b:expr) => {
        ::std::arch::x86_64::_mm_or_ps(
            ::std::arch::x86_64::_mm_and_ps($m, $b),
            ::std::arch::x86_64::_mm_andnot_ps($m, $a),
        )
    };

    // ========================================================================
    // AVX2 (256-bit)
    // ========================================================================

    // --- Register types & constants ---
    (avx2, @vi) => { ::std::arch::x86_64::__m256i };
    (avx2, @vf) => { ::std::arch::x86_64::__m256 };
    (avx2, @vd) => { ::std::arch::x86_64::__m256d };
    (avx2, @mask) => { ::std::arch::x86_64::__m256 };
    (avx2, bytes) => { 32 };
    (avx2, detect) => { ::std::is_x86_feature_detected!("avx2") };

    // --- Set / zero ---
    (avx2, i8, splat, $v:expr) => { ::std::arch::x86_64::_mm256_set1_epi8($v) };
    (avx2, i16, splat, $v:expr) => { ::std::arch::x86_64::_mm256_set1_epi16($v) };
    (avx2, i32, splat, $v:expr) => { ::std::arch::x86_64::_mm256_set1_epi32($v) };
    (avx2, f32, splat, $v:expr) => { ::std::arch::x86_64::_mm256_set1_ps($v) };
    (avx2, f64, splat, $v:expr) => { ::std::arch::x86_64::_mm256_set1_pd($v) };
    (avx2, si, zero) => { ::std::arch::x86_64::_mm256_setzero_si256() };
    (avx2, f32, zero) => { ::std::arch::x86_64::_mm256_setzero_ps() };
    (avx2, f64, zero) => { ::std::arch::x86_64::_mm256_setzero_pd() };

    // --- Load / store (unaligned) ---
    (avx2, si, loadu, $p:expr) => { ::std::arch::x86_64::_mm256_loadu_si256($p) };
    (avx2, si, storeu, $p:expr, $v:expr) => { ::std::arch::x86_64::_mm256_storeu_si256($p, $v) };
    (avx2, f32, loadu, $p:expr) => { ::std::arch::x86_64::_mm256_loadu_ps($p) };
    (avx2, f32, storeu, $p:expr, $v:expr) => { ::std::arch::x86_64::_mm256_storeu_ps($p, $v) };
    (avx2, f64, loadu, $p:expr) => { ::std::arch::x86_64::_mm256_loadu_pd($p) };
    (avx2, f64, storeu, $p:expr, $v:expr) => { ::std::arch::x86_64::_mm256_storeu_pd($p, $v) };

    // --- Integer arithmetic ---
    (avx2, i8, abs, $a:expr) => { ::std::arch::x86_64::_mm256_abs_epi8($a) };
    (avx2, i8, add, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm256_add_epi8($a, $b) };
    (avx2, i16, add, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm256_add_epi16($a, $b) };
    (avx2, i32, add, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm256_add_epi32($a, $b) };
    (avx2, i16, adds, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm256_adds_epi16($a, $b) };
    (avx2, i8, max, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm256_max_epi8($a, $b) };
    (avx2, i16, max, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm256_max_epi16($a, $b) };
    (avx2, i32, max, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm256_max_epi32($a, $b) };
    (avx2, i16, mullo, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm256_mullo_epi16($a, $b) };
    (avx2, i32, mullo, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm256_mullo_epi32($a, $b) };
    (avx2, u32, mul_wide, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm256_mul_epu32($a, $b) };
    (avx2, i16, madd, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm256_madd_epi16($a, $b) };

    // --- Bitwise ---
    (avx2, si, and, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm256_and_si256($a, $b) };
    (avx2, si, andnot, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm256_andnot_si256($a, $b) };
    (avx2, si, or, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm256_or_si256($a, $b) };

    // --- Shifts & shuffles ---
    (avx2, i16, shl, $a:expr, $n:expr) => {
        ::std::arch::x86_64::_mm256_sll_epi16($a, ::std::arch::x86_64::_mm_cvtsi32_si128($n as i32))
    };
    (avx2, i16, shr_u, $a:expr, $n:expr) => {
        ::std::arch::x86_64::_mm256_srl_epi16($a, ::std::arch::x86_64::_mm_cvtsi32_si128($n as i32))
    };
    (avx2, i32, shuffle, $a:expr, $imm:tt) => { ::std::arch::x86_64::_mm256_shuffle_epi32::<$imm>($a) };
    (avx2, i32, unpacklo, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm256_unpacklo_epi32($a, $b) };

    // --- Float arithmetic ---
    (avx2, f32, add, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm256_add_ps($a, $b) };
    (avx2, f64, add, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm256_add_pd($a, $b) };
    (avx2, f32, sub, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm256_sub_ps($a, $b) };
    (avx2, f64, sub, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm256_sub_pd($a, $b) };
    (avx2, f32, mul, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm256_mul_ps($a, $b) };
    (avx2, f64, mul, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm256_mul_pd($a, $b) };
    (avx2, f32, div, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm256_div_ps($a, $b) };
    (avx2, f32, max, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm256_max_ps($a, $b) };
    (avx2, f64, max, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm256_max_pd($a, $b) };
    (avx2, f32, min, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm256_min_ps($a, $b) };
    (avx2, f32, recip, $a:expr) => { ::std::arch::x86_64::_mm256_rcp_ps($a) };
    (avx2, f32, floor, $a:expr) => { ::std::arch::x86_64::_mm256_floor_ps($a) };

    // --- Conversions ---
    (avx2, i32, cast_f32, $a:expr) => { ::std::arch::x86_64::_mm256_cvtepi32_ps($a) };
    (avx2, f32, cvt_nearest, $a:expr) => { ::std::arch::x86_64::_mm256_cvtps_epi32($a) };
    (avx2, f32, cvt_trunc, $a:expr) => { ::std::arch::x86_64::_mm256_cvttps_epi32($a) };

    // --- Compare / select / gather ---
    (avx2, f32, cmp_lt, $a:expr, $b:expr) => {
        ::std::arch::x86_64::_mm256_cmp_ps::<{ ::std::arch::x86_64::_CMP_LT_OQ }>($a, $b)
    };
    (avx2, f32, cmp_neq, $a:expr, $b:expr) => {
        ::std::arch::x86_64::_mm256_cmp_ps::<{ ::std::arch::x86_64::_CMP_NEQ_OQ }>($a, $b)
    };
    (avx2, mask, and, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm256_and_ps($a, $b) };
    (avx2, f32, blend, $m:expr, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm256_blendv_ps($a, $b, $m) };
    (avx2, f32, gather, $base:expr, $idx:expr) => {
        ::std::arch::x86_64::_mm256_i32gather_ps::<4>($base, $idx)
    };

    // ========================================================================
    // AVX-512BW (512-bit)
    // ========================================================================

    // --- Register types & constants ---
    (avx512, @vi) => { ::std::arch::x86_64::__m512i };
    (avx512, @vf) => { ::std::arch::x86_64::__m512 };
    (avx512, @vd) => { ::std::arch::x86_64::__m512d };
    (avx512, @mask) => { ::std::arch::x86_64::__mmask16 };
    (avx512, bytes) => { 64 };
    (avx512, detect) => {
        ::std::is_x86_feature_detected!("avx512f") && ::std::is_x86_feature_detected!("avx512bw")
    };

    // --- Set / zero ---
    (avx512, i8, splat, $v:expr) => { ::std::arch::x86_64::_mm512_set1_epi8($v) };
    (avx512, i16, splat, $v:expr) => { ::std::arch::x86_64::_mm512_set1_epi16($v) };
    (avx512, i32, splat, $v:expr) => { ::std::arch::x86_64::_mm512_set1_epi32($v) };
    (avx512, f32, splat, $v:expr) => { ::std::arch::x86_64::_mm512_set1_ps($v) };
    (avx512, f64, splat, $v:expr) => { ::std::arch::x86_64::_mm512_set1_pd($v) };
    (avx512, si, zero) => { ::std::arch::x86_64::_mm512_setzero_si512() };
    (avx512, f32, zero) => { ::std::arch::x86_64::_mm512_setzero_ps() };
    (avx512, f64, zero) => { ::std::arch::x86_64::_mm512_setzero_pd() };

    // --- Load / store (unaligned) ---
    (avx512, si, loadu, $p:expr) => { ::std::arch::x86_64::_mm512_loadu_si512(($p).cast()) };
    (avx512, si, storeu, $p:expr, $v:expr) => { ::std::arch::x86_64::_mm512_storeu_si512(($p).cast(), $v) };
    (avx512, f32, loadu, $p:expr) => { ::std::arch::x86_64::_mm512_loadu_ps($p) };
    (avx512, f32, storeu, $p:expr, $v:expr) => { ::std::arch::x86_64::_mm512_storeu_ps($p, $v) };
    (avx512, f64, loadu, $p:expr) => { ::std::arch::x86_64::_mm512_loadu_pd($p) };
    (avx512, f64, storeu, $p:expr, $v:expr) => { ::std::arch::x86_64::_mm512_storeu_pd($p, $v) };

    // --- Integer arithmetic ---
    (avx512, i8, abs, $a:expr) => { ::std::arch::x86_64::_mm512_abs_epi8($a) };
    (avx512, i8, add, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm512_add_epi8($a, $b) };
    (avx512, i16, add, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm512_add_epi16($a, $b) };
    (avx512, i32, add, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm512_add_epi32($a, $b) };
    (avx512, i16, adds, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm512_adds_epi16($a, $b) };
    (avx512, i8, max, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm512_max_epi8($a, $b) };
    (avx512, i16, max, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm512_max_epi16($a, $b) };
    (avx512, i32, max, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm512_max_epi32($a, $b) };
    (avx512, i16, mullo, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm512_mullo_epi16($a, $b) };
    (avx512, i32, mullo, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm512_mullo_epi32($a, $b) };
    (avx512, u32, mul_wide, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm512_mul_epu32($a, $b) };
    (avx512, i16, madd, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm512_madd_epi16($a, $b) };

    // --- Bitwise ---
    (avx512, si, and, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm512_and_si512($a, $b) };
    (avx512, si, andnot, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm512_andnot_si512($a, $b) };
    (avx512, si, or, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm512_or_si512($a, $b) };

    // --- Shifts & shuffles ---
    (avx512, i16, shl, $a:expr, $n:expr) => {
        ::std::arch::x86_64::_mm512_sll_epi16($a, ::std::arch::x86_64::_mm_cvtsi32_si128($n as i32))
    };
    (avx512, i16, shr_u, $a:expr, $n:expr) => {
        ::std::arch::x86_64::_mm512_srl_epi16($a, ::std::arch::x86_64::_mm_cvtsi32_si128($n as i32))
    };
    (avx512, i32, shuffle, $a:expr, $imm:tt) => { ::std::arch::x86_64::_mm512_shuffle_epi32::<$imm>($a) };
    (avx512, i32, unpacklo, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm512_unpacklo_epi32($a, $b) };

    // --- Float arithmetic ---
    (avx512, f32, add, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm512_add_ps($a, $b) };
    (avx512, f64, add, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm512_add_pd($a, $b) };
    (avx512, f32, sub, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm512_sub_ps($a, $b) };
    (avx512, f64, sub, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm512_sub_pd($a, $b) };
    (avx512, f32, mul, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm512_mul_ps($a, $b) };
    (avx512, f64, mul, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm512_mul_pd($a, $b) };
    (avx512, f32, div, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm512_div_ps($a, $b) };
    (avx512, f32, max, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm512_max_ps($a, $b) };
    (avx512, f64, max, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm512_max_pd($a, $b) };
    (avx512, f32, min, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm512_min_ps($a, $b) };
    (avx512, f32, recip, $a:expr) => { ::std::arch::x86_64::_mm512_rcp14_ps($a) };
    // roundscale with M=0: round toward -inf, exceptions suppressed
    (avx512, f32, floor, $a:expr) => {
        ::std::arch::x86_64::_mm512_roundscale_ps::<{
            ::std::arch::x86_64::_MM_FROUND_TO_NEG_INF | ::std::arch::x86_64::_MM_FROUND_NO_EXC
        }>($a)
    };

    // --- Conversions ---
    (avx512, i32, cast_f32, $a:expr) => { ::std::arch::x86_64::_mm512_cvtepi32_ps($a) };
    (avx512, f32, cvt_nearest, $a:expr) => { ::std::arch::x86_64::_mm512_cvtps_epi32($a) };
    (avx512, f32, cvt_trunc, $a:expr) => { ::std::arch::x86_64::_mm512_cvttps_epi32($a) };

    // --- Compare / select / gather ---
    (avx512, f32, cmp_lt, $a:expr, $b:expr) => {
        ::std::arch::x86_64::_mm512_cmp_ps_mask::<{ ::std::arch::x86_64::_CMP_LT_OQ }>($a, $b)
    };
    (avx512, f32, cmp_neq, $a:expr, $b:expr) => {
        ::std::arch::x86_64::_mm512_cmp_ps_mask::<{ ::std::arch::x86_64::_CMP_NEQ_OQ }>($a, $b)
    };
    (avx512, mask, and, $a:expr, $b:expr) => { $a & $b };
    (avx512, f32, blend, $m:expr, $a:expr, $b:expr) => { ::std::arch::x86_64::_mm512_mask_blend_ps($m, $a, $b) };
    (avx512, f32, gather, $base:expr, $idx:expr) => {
        ::std::arch::x86_64::_mm512_i32gather_ps::<4>($idx, ($base).cast())
    };
}
