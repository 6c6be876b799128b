//! # CPU Kernel Macro Architecture
//!
//! Layered macro system for ISA-parameterized SIMD kernels:
//!
//! ## Layer 1: `simd_primitive!` (src/macros/simd_primitive.rs)
//! Maps abstract ops to hardware intrinsics: `simd_primitive!(avx2, i32, add, a, b)`.
//! Covers sse2/avx2/avx512 × i8/i16/i32/f32/f64 plus masks.
//!
//! ## Layer 2: the [`Isa`] trait (this file)
//! One method per primitive. Kernels and callbacks are written once against
//! `I: Isa` and monomorphized per instruction set.
//!
//! ## Layer 3: [`Lane`] (src/cpu_kernels/lane.rs)
//! Element-keyed dispatch for the generic kernels (`write`, `add_bias`,
//! `relu`, `multiply`).
//!
//! ## Layer 4: `expand_isa_impls!` (src/macros/expand.rs)
//! Generates `impl Isa for Sse2 / Avx2 / Avx512bw`, including the
//! `#[target_feature]` tile walker used by the epilogue driver.
//!
//! ## ISA selection
//! Callers pick the ISA statically (`run_epilogue::<Avx2, _>`). [`ensure_isa`]
//! checks CPU support and the `IGEMM_ISA_CEILING` override before any
//! vector code runs.

use crate::callbacks::OutputCallback;
use crate::error::{KernelError, KernelResult};
use crate::types::Index;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

pub mod lane;
pub mod sse2;
pub mod avx2;
pub mod avx512;

pub use avx2::Avx2;
pub use avx512::Avx512bw;
pub use lane::Lane;
pub use sse2::Sse2;

/// Environment variable that caps the highest ISA the crate will run.
pub const ISA_CEILING_ENV: &str = "IGEMM_ISA_CEILING";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IsaLevel {
    Sse2,
    Avx2,
    Avx512bw,
}

impl IsaLevel {
    pub const fn name(self) -> &'static str {
        match self {
            IsaLevel::Sse2 => "sse2",
            IsaLevel::Avx2 => "avx2",
            IsaLevel::Avx512bw => "avx512bw",
        }
    }
}

impl fmt::Display for IsaLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IsaLevel {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sse2" => Ok(IsaLevel::Sse2),
            "avx2" => Ok(IsaLevel::Avx2),
            "avx512" | "avx512bw" => Ok(IsaLevel::Avx512bw),
            other => Err(KernelError::InvalidIsaOverride(other.to_string())),
        }
    }
}

/// One x86 SIMD instruction set: register types plus the primitive operations
/// the kernels are written against.
///
/// # Safety contract
/// Every `unsafe fn` here requires that the CPU supports the ISA. Loads and
/// stores additionally require `BYTES` valid bytes at the pointer (no
/// alignment requirement).
pub trait Isa: Copy + Default + Send + Sync + fmt::Debug + 'static {
    const LEVEL: IsaLevel;
    const NAME: &'static str;
    /// Register width in bytes.
    const BYTES: usize;
    /// Number of 32-bit lanes per register; the tile width of the epilogue.
    const LANES_I32: usize = Self::BYTES / 4;

    type Vi: Copy + Send + Sync + 'static;
    type Vf: Copy + Send + Sync + 'static;
    type Vd: Copy + Send + Sync + 'static;
    /// Result of a float comparison: an all-ones lane vector below AVX-512,
    /// a `k` register on AVX-512.
    type Mask: Copy;

    /// Runtime CPUID check, ignoring the ceiling.
    fn cpu_supports() -> bool;

    unsafe fn set1_epi8(v: i8) -> Self::Vi;
    unsafe fn set1_epi16(v: i16) -> Self::Vi;
    unsafe fn set1_epi32(v: i32) -> Self::Vi;
    unsafe fn set1_ps(v: f32) -> Self::Vf;
    unsafe fn set1_pd(v: f64) -> Self::Vd;
    unsafe fn setzero_si() -> Self::Vi;
    unsafe fn setzero_ps() -> Self::Vf;
    unsafe fn setzero_pd() -> Self::Vd;

    unsafe fn loadu_si(p: *const Self::Vi) -> Self::Vi;
    unsafe fn storeu_si(p: *mut Self::Vi, v: Self::Vi);
    unsafe fn loadu_ps(p: *const f32) -> Self::Vf;
    unsafe fn storeu_ps(p: *mut f32, v: Self::Vf);
    unsafe fn loadu_pd(p: *const f64) -> Self::Vd;
    unsafe fn storeu_pd(p: *mut f64, v: Self::Vd);

    unsafe fn abs_epi8(a: Self::Vi) -> Self::Vi;
    unsafe fn add_epi8(a: Self::Vi, b: Self::Vi) -> Self::Vi;
    unsafe fn add_epi16(a: Self::Vi, b: Self::Vi) -> Self::Vi;
    unsafe fn add_epi32(a: Self::Vi, b: Self::Vi) -> Self::Vi;
    unsafe fn adds_epi16(a: Self::Vi, b: Self::Vi) -> Self::Vi;
    unsafe fn max_epi8(a: Self::Vi, b: Self::Vi) -> Self::Vi;
    unsafe fn max_epi16(a: Self::Vi, b: Self::Vi) -> Self::Vi;
    unsafe fn max_epi32(a: Self::Vi, b: Self::Vi) -> Self::Vi;
    unsafe fn mullo_epi16(a: Self::Vi, b: Self::Vi) -> Self::Vi;
    unsafe fn mullo_epi32(a: Self::Vi, b: Self::Vi) -> Self::Vi;
    /// Unsigned 32x32->64 multiply of the even 32-bit lanes.
    unsafe fn mul_epu32(a: Self::Vi, b: Self::Vi) -> Self::Vi;
    unsafe fn madd_epi16(a: Self::Vi, b: Self::Vi) -> Self::Vi;

    unsafe fn and_si(a: Self::Vi, b: Self::Vi) -> Self::Vi;
    /// `!a & b`
    unsafe fn andnot_si(a: Self::Vi, b: Self::Vi) -> Self::Vi;
    unsafe fn or_si(a: Self::Vi, b: Self::Vi) -> Self::Vi;

    unsafe fn slli_epi16(a: Self::Vi, count: u32) -> Self::Vi;
    unsafe fn srli_epi16(a: Self::Vi, count: u32) -> Self::Vi;
    /// Per-128-bit-lane 32-bit shuffle.
    unsafe fn shuffle_epi32<const IMM: i32>(a: Self::Vi) -> Self::Vi;
    unsafe fn unpacklo_epi32(a: Self::Vi, b: Self::Vi) -> Self::Vi;

    unsafe fn add_ps(a: Self::Vf, b: Self::Vf) -> Self::Vf;
    unsafe fn add_pd(a: Self::Vd, b: Self::Vd) -> Self::Vd;
    unsafe fn sub_ps(a: Self::Vf, b: Self::Vf) -> Self::Vf;
    unsafe fn sub_pd(a: Self::Vd, b: Self::Vd) -> Self::Vd;
    unsafe fn mul_ps(a: Self::Vf, b: Self::Vf) -> Self::Vf;
    unsafe fn mul_pd(a: Self::Vd, b: Self::Vd) -> Self::Vd;
    unsafe fn div_ps(a: Self::Vf, b: Self::Vf) -> Self::Vf;
    unsafe fn max_ps(a: Self::Vf, b: Self::Vf) -> Self::Vf;
    unsafe fn max_pd(a: Self::Vd, b: Self::Vd) -> Self::Vd;
    unsafe fn min_ps(a: Self::Vf, b: Self::Vf) -> Self::Vf;
    /// Approximate reciprocal (12-bit on SSE2/AVX2, 14-bit on AVX-512).
    unsafe fn rcp_ps(a: Self::Vf) -> Self::Vf;
    unsafe fn floor_ps(a: Self::Vf) -> Self::Vf;

    unsafe fn cvtepi32_ps(a: Self::Vi) -> Self::Vf;
    /// Round to nearest, ties to even (default MXCSR).
    unsafe fn cvtps_epi32(a: Self::Vf) -> Self::Vi;
    unsafe fn cvttps_epi32(a: Self::Vf) -> Self::Vi;

    unsafe fn cmplt_ps(a: Self::Vf, b: Self::Vf) -> Self::Mask;
    unsafe fn cmpneq_ps(a: Self::Vf, b: Self::Vf) -> Self::Mask;
    unsafe fn mask_and(a: Self::Mask, b: Self::Mask) -> Self::Mask;
    /// Lane-wise `mask ? b : a`.
    unsafe fn blend_ps(mask: Self::Mask, a: Self::Vf, b: Self::Vf) -> Self::Vf;

    /// Walk a row-major `rows x cols` i32 matrix in `LANES_I32`-wide tiles,
    /// invoking `callback` once per tile with the ISA enabled.
    ///
    /// # Safety
    /// `acc` must point to `rows * cols` readable values, `cols` must be a
    /// multiple of `LANES_I32`, and the callback's buffers must cover the
    /// offsets it is given.
    unsafe fn run_tiles<C: OutputCallback<Self>>(acc: *const i32, rows: Index, cols: Index, callback: &C);
}

/// ISAs with a native 32-bit-index float gather (AVX2 and up).
///
/// The transcendental kernels require it, so requesting them for SSE2 fails
/// to compile rather than at run time.
pub trait Gather: Isa {
    /// Load `base[index[i]]` per lane.
    unsafe fn i32gather_ps(base: *const f32, index: Self::Vi) -> Self::Vf;
}

static ISA_CEILING: OnceLock<Option<IsaLevel>> = OnceLock::new();

/// Parse a ceiling override value. `None`, an empty string and `"native"`
/// mean "no ceiling".
pub fn parse_isa_ceiling(value: Option<&str>) -> KernelResult<Option<IsaLevel>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) if v.eq_ignore_ascii_case("native") => Ok(None),
        Some(v) => v.parse().map(Some),
    }
}

fn read_isa_ceiling() -> Option<IsaLevel> {
    let raw = std::env::var(ISA_CEILING_ENV).ok();
    match parse_isa_ceiling(raw.as_deref()) {
        Ok(Some(level)) => {
            log::info!("{ISA_CEILING_ENV}={level}: capping kernel ISA");
            Some(level)
        }
        Ok(None) => None,
        Err(err) => {
            log::warn!("ignoring {ISA_CEILING_ENV}: {err}");
            None
        }
    }
}

/// Highest ISA allowed by `IGEMM_ISA_CEILING`, read once per process.
pub fn isa_ceiling() -> Option<IsaLevel> {
    *ISA_CEILING.get_or_init(read_isa_ceiling)
}

/// Check that `I` may run on this machine under the configured ceiling.
pub fn ensure_isa<I: Isa>() -> KernelResult<()> {
    if let Some(ceiling) = isa_ceiling() {
        if I::LEVEL > ceiling {
            return Err(KernelError::IsaAboveCeiling { isa: I::NAME, ceiling: ceiling.name() });
        }
    }
    if !I::cpu_supports() {
        return Err(KernelError::IsaUnavailable { isa: I::NAME });
    }
    Ok(())
}

/// `true` when [`ensure_isa`] would succeed.
pub fn isa_available<I: Isa>() -> bool {
    ensure_isa::<I>().is_ok()
}

/// Best ISA this process may use.
pub fn best_isa_level() -> IsaLevel {
    if isa_available::<Avx512bw>() {
        IsaLevel::Avx512bw
    } else if isa_available::<Avx2>() {
        IsaLevel::Avx2
    } else {
        IsaLevel::Sse2
    }
}
