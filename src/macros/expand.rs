/// Expands the `Isa` implementation for one instruction-set marker.
///
/// This macro is "Layer 4" of the architecture. It takes a marker type, the
/// `simd_primitive!` ISA identifier and the `target_feature` string, and
/// generates:
/// - `impl Isa for $marker`, every method forwarding to a Layer 1 arm
/// - the tile walker entry point, compiled under `#[target_feature]` so the
///   inlined kernels and callbacks are emitted with the ISA enabled
#[macro_export]
macro_rules! expand_isa_impls {
    (
        $marker:ident, $isa:ident,
        level = $level:ident,
        name = $name:literal,
        features = $features:literal
    ) => {
        impl $crate::cpu_kernels::Isa for $marker {
            const LEVEL: $crate::cpu_kernels::IsaLevel = $crate::cpu_kernels::IsaLevel::$level;
            const NAME: &'static str = $name;
            const BYTES: usize = $crate::simd_primitive!($isa, bytes);

            type Vi = $crate::simd_primitive!($isa, @vi);
            type Vf = $crate::simd_primitive!($isa, @vf);
            type Vd = $crate::simd_primitive!($isa, @vd);
            type Mask = $crate::simd_primitive!($isa, @mask);

            #[inline]
            fn cpu_supports() -> bool {
                $crate::simd_primitive!($isa, detect)
            }

            // --- Set / zero ---
            #[inline(always)]
            unsafe fn set1_epi8(v: i8) -> Self::Vi { $crate::simd_primitive!($isa, i8, splat, v) }
            #[inline(always)]
            unsafe fn set1_epi16(v: i16) -> Self::Vi { $crate::simd_primitive!($isa, i16, splat, v) }
            #[inline(always)]
            unsafe fn set1_epi32(v: i32) -> Self::Vi { $crate::simd_primitive!($isa, i32, splat, v) }
            #[inline(always)]
            unsafe fn set1_ps(v: f32) -> Self::Vf { $crate::simd_primitive!($isa, f32, splat, v) }
            #[inline(always)]
            unsafe fn set1_pd(v: f64) -> Self::Vd { $crate::simd_primitive!($isa, f64, splat, v) }
            #[inline(always)]
            unsafe fn setzero_si() -> Self::Vi { $crate::simd_primitive!($isa, si, zero) }
            #[inline(always)]
            unsafe fn setzero_ps() -> Self::Vf { $crate::simd_primitive!($isa, f32, zero) }
            #[inline(always)]
            unsafe fn setzero_pd() -> Self::Vd { $crate::simd_primitive!($isa, f64, zero) }

            // --- Load / store ---
            #[inline(always)]
            unsafe fn loadu_si(p: *const Self::Vi) -> Self::Vi { $crate::simd_primitive!($isa, si, loadu, p) }
            #[inline(always)]
            unsafe fn storeu_si(p: *mut Self::Vi, v: Self::Vi) { $crate::simd_primitive!($isa, si, storeu, p, v) }
            #[inline(always)]
            unsafe fn loadu_ps(p: *const f32) -> Self::Vf { $crate::simd_primitive!($isa, f32, loadu, p) }
            #[inline(always)]
            unsafe fn storeu_ps(p: *mut f32, v: Self::Vf) { $crate::simd_primitive!($isa, f32, storeu, p, v) }
            #[inline(always)]
            unsafe fn loadu_pd(p: *const f64) -> Self::Vd { $crate::simd_primitive!($isa, f64, loadu, p) }
            #[inline(always)]
            unsafe fn storeu_pd(p: *mut f64, v: Self::Vd) { $crate::simd_primitive!($isa, f64, storeu, p, v) }

            // --- Integer arithmetic ---
            #[inline(always)]
            unsafe fn abs_epi8(a: Self::Vi) -> Self::Vi { $crate::simd_primitive!($isa, i8, abs, a) }
            #[inline(always)]
            unsafe fn add_epi8(a: Self::Vi, b: Self::Vi) -> Self::Vi { $crate::simd_primitive!($isa, i8, add, a, b) }
            #[inline(always)]
            unsafe fn add_epi16(a: Self::Vi, b: Self::Vi) -> Self::Vi { $crate::simd_primitive!($isa, i16, add, a, b) }
            #[inline(always)]
            unsafe fn add_epi32(a: Self::Vi, b: Self::Vi) -> Self::Vi { $crate::simd_primitive!($isa, i32, add, a, b) }
            #[inline(always)]
            unsafe fn adds_epi16(a: Self::Vi, b: Self::Vi) -> Self::Vi { $crate::simd_primitive!($isa, i16, adds, a, b) }
            #[inline(always)]
            unsafe fn max_epi8(a: Self::Vi, b: Self::Vi) -> Self::Vi { $crate::simd_primitive!($isa, i8, max, a, b) }
            #[inline(always)]
            unsafe fn max_epi16(a: Self::Vi, b: Self::Vi) -> Self::Vi { $crate::simd_primitive!($isa, i16, max, a, b) }
            #[inline(always)]
            unsafe fn max_epi32(a: Self::Vi, b: Self::Vi) -> Self::Vi { $crate::simd_primitive!($isa, i32, max, a, b) }
            #[inline(always)]
            unsafe fn mullo_epi16(a: Self::Vi, b: Self::Vi) -> Self::Vi { $crate::simd_primitive!($isa, i16, mullo, a, b) }
            #[inline(always)]
            unsafe fn mullo_epi32(a: Self::Vi, b: Self::Vi) -> Self::Vi { $crate::simd_primitive!($isa, i32, mullo, a, b) }
            #[inline(always)]
            unsafe fn mul_epu32(a: Self::Vi, b: Self::Vi) -> Self::Vi { $crate::simd_primitive!($isa, u32, mul_wide, a, b) }
            #[inline(always)]
            unsafe fn madd_epi16(a: Self::Vi, b: Self::Vi) -> Self::Vi { $crate::simd_primitive!($isa, i16, madd, a, b) }

            // --- Bitwise ---
            #[inline(always)]
            unsafe fn and_si(a: Self::Vi, b: Self::Vi) -> Self::Vi { $crate::simd_primitive!($isa, si, and, a, b) }
            #[inline(always)]
            unsafe fn andnot_si(a: Self::Vi, b: Self::Vi) -> Self::Vi { $crate::simd_primitive!($isa, si, andnot, a, b) }
            #[inline(always)]
            unsafe fn or_si(a: Self::Vi, b: Self::Vi) -> Self::Vi { $crate::simd_primitive!($isa, si, or, a, b) }

            // --- Shifts & shuffles ---
            #[inline(always)]
            unsafe fn slli_epi16(a: Self::Vi, count: u32) -> Self::Vi { $crate::simd_primitive!($isa, i16, shl, a, count) }
            #[inline(always)]
            unsafe fn srli_epi16(a: Self::Vi, count: u32) -> Self::Vi { $crate::simd_primitive!($isa, i16, shr_u, a, count) }
            #[inline(always)]
            unsafe fn shuffle_epi32<const IMM: i32>(a: Self::Vi) -> Self::Vi { $crate::simd_primitive!($isa, i32, shuffle, a, IMM) }
            #[inline(always)]
            unsafe fn unpacklo_epi32(a: Self::Vi, b: Self::Vi) -> Self::Vi { $crate::simd_primitive!($isa, i32, unpacklo, a, b) }

            // --- Float arithmetic ---
            #[inline(always)]
            unsafe fn add_ps(a: Self::Vf, b: Self::Vf) -> Self::Vf { $crate::simd_primitive!($isa, f32, add, a, b) }
            #[inline(always)]
            unsafe fn add_pd(a: Self::Vd, b: Self::Vd) -> Self::Vd { $crate::simd_primitive!($isa, f64, add, a, b) }
            #[inline(always)]
            unsafe fn sub_ps(a: Self::Vf, b: Self::Vf) -> Self::Vf { $crate::simd_primitive!($isa, f32, sub, a, b) }
            #[inline(always)]
            unsafe fn sub_pd(a: Self::Vd, b: Self::Vd) -> Self::Vd { $crate::simd_primitive!($isa, f64, sub, a, b) }
            #[inline(always)]
            unsafe fn mul_ps(a: Self::Vf, b: Self::Vf) -> Self::Vf { $crate::simd_primitive!($isa, f32, mul, a, b) }
            #[inline(always)]
            unsafe fn mul_pd(a: Self::Vd, b: Self::Vd) -> Self::Vd { $crate::simd_primitive!($isa, f64, mul, a, b) }
            #[inline(always)]
            unsafe fn div_ps(a: Self::Vf, b: Self::Vf) -> Self::Vf { $crate::simd_primitive!($isa, f32, div, a, b) }
            #[inline(always)]
            unsafe fn max_ps(a: Self::Vf, b: Self::Vf) -> Self::Vf { $crate::simd_primitive!($isa, f32, max, a, b) }
            #[inline(always)]
            unsafe fn max_pd(a: Self::Vd, b: Self::Vd) -> Self::Vd { $crate::simd_primitive!($isa, f64, max, a, b) }
            #[inline(always)]
            unsafe fn min_ps(a: Self::Vf, b: Self::Vf) -> Self::Vf { $crate::simd_primitive!($isa, f32, min, a, b) }
            #[inline(always)]
            unsafe fn rcp_ps(a: Self::Vf) -> Self::Vf { $crate::simd_primitive!($isa, f32, recip, a) }
            #[inline(always)]
            unsafe fn floor_ps(a: Self::Vf) -> Self::Vf { $crate::simd_primitive!($isa, f32, floor, a) }

            // --- Conversions ---
            #[inline(always)]
            unsafe fn cvtepi32_ps(a: Self::Vi) -> Self::Vf { $crate::simd_primitive!($isa, i32, cast_f32, a) }
            #[inline(always)]
            unsafe fn cvtps_epi32(a: Self::Vf) -> Self::Vi { $crate::simd_primitive!($isa, f32, cvt_nearest, a) }
            #[inline(always)]
            unsafe fn cvttps_epi32(a: Self::Vf) -> Self::Vi { $crate::simd_primitive!($isa, f32, cvt_trunc, a) }

            // --- Compare / select ---
            #[inline(always)]
            unsafe fn cmplt_ps(a: Self::Vf, b: Self::Vf) -> Self::Mask { $crate::simd_primitive!($isa, f32, cmp_lt, a, b) }
            #[inline(always)]
            unsafe fn cmpneq_ps(a: Self::Vf, b: Self::Vf) -> Self::Mask { $crate::simd_primitive!($isa, f32, cmp_neq, a, b) }
            #[inline(always)]
            unsafe fn mask_and(a: Self::Mask, b: Self::Mask) -> Self::Mask { $crate::simd_primitive!($isa, mask, and, a, b) }
            #[inline(always)]
            unsafe fn blend_ps(mask: Self::Mask, a: Self::Vf, b: Self::Vf) -> Self::Vf {
                $crate::simd_primitive!($isa, f32, blend, mask, a, b)
            }

            #[inline]
            unsafe fn run_tiles<C: $crate::callbacks::OutputCallback<Self>>(
                acc: *const i32,
                rows: $crate::types::Index,
                cols: $crate::types::Index,
                callback: &C,
            ) {
                #[target_feature(enable = $features)]
                unsafe fn tiles<C: $crate::callbacks::OutputCallback<$marker>>(
                    acc: *const i32,
                    rows: $crate::types::Index,
                    cols: $crate::types::Index,
                    callback: &C,
                ) {
                    let lanes = <$marker as $crate::cpu_kernels::Isa>::LANES_I32;
                    for row_idx in 0..rows {
                        let row = acc.add(row_idx * cols);
                        let mut col_idx = 0;
                        while col_idx < cols {
                            let input = <$marker as $crate::cpu_kernels::Isa>::loadu_si(row.add(col_idx).cast());
                            let info = $crate::types::OutputBufferInfo::new(row_idx, col_idx, rows, cols);
                            callback.run(input, &info);
                            col_idx += lanes;
                        }
                    }
                }
                tiles(acc, rows, cols, callback)
            }
        }
    };
}

/// Expands `Gather` for an ISA that has a native 32-bit-index float gather.
#[macro_export]
macro_rules! expand_gather_impl {
    ($marker:ident, $isa:ident) => {
        impl $crate::cpu_kernels::Gather for $marker {
            #[inline(always)]
            unsafe fn i32gather_ps(base: *const f32, index: Self::Vi) -> Self::Vf {
                $crate::simd_primitive!($isa, f32, gather, base, index)
            }
        }
    };
}
