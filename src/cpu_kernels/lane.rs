//! Element-keyed view of an ISA's registers.
//!
//! `Lane<I>` lets the element-generic kernels (`write`, `add_bias`, `relu`,
//! `multiply`) pick the right instruction for `i8`/`i16`/`i32`/`f32`/`f64`
//! at compile time. Elements without an impl are rejected by the compiler.

use super::Isa;

pub trait Lane<I: Isa>: Copy + Send + Sync + 'static {
    /// Register type holding `LANES` elements.
    type Reg: Copy;
    const LANES: usize = I::BYTES / std::mem::size_of::<Self>();

    unsafe fn setzero() -> Self::Reg;
    unsafe fn loadu(p: *const Self) -> Self::Reg;
    unsafe fn storeu(p: *mut Self, v: Self::Reg);
    /// Wrapping add for integers.
    unsafe fn add(a: Self::Reg, b: Self::Reg) -> Self::Reg;
    unsafe fn max(a: Self::Reg, b: Self::Reg) -> Self::Reg;
    /// Wrapping multiply for integers (low half of the product).
    unsafe fn mul(a: Self::Reg, b: Self::Reg) -> Self::Reg;
}

impl<I: Isa> Lane<I> for i8 {
    type Reg = I::Vi;

    #[inline(always)]
    unsafe fn setzero() -> I::Vi { I::setzero_si() }
    #[inline(always)]
    unsafe fn loadu(p: *const Self) -> I::Vi { I::loadu_si(p.cast()) }
    #[inline(always)]
    unsafe fn storeu(p: *mut Self, v: I::Vi) { I::storeu_si(p.cast(), v) }
    #[inline(always)]
    unsafe fn add(a: I::Vi, b: I::Vi) -> I::Vi { I::add_epi8(a, b) }
    #[inline(always)]
    unsafe fn max(a: I::Vi, b: I::Vi) -> I::Vi { I::max_epi8(a, b) }
    #[inline(always)]
    unsafe fn mul(a: I::Vi, b: I::Vi) -> I::Vi { crate::kernels::mullo_epi8::<I>(a, b) }
}

impl<I: Isa> Lane<I> for i16 {
    type Reg = I::Vi;

    #[inline(always)]
    unsafe fn setzero() -> I::Vi { I::setzero_si() }
    #[inline(always)]
    unsafe fn loadu(p: *const Self) -> I::Vi { I::loadu_si(p.cast()) }
    #[inline(always)]
    unsafe fn storeu(p: *mut Self, v: I::Vi) { I::storeu_si(p.cast(), v) }
    #[inline(always)]
    unsafe fn add(a: I::Vi, b: I::Vi) -> I::Vi { I::add_epi16(a, b) }
    #[inline(always)]
    unsafe fn max(a: I::Vi, b: I::Vi) -> I::Vi { I::max_epi16(a, b) }
    #[inline(always)]
    unsafe fn mul(a: I::Vi, b: I::Vi) -> I::Vi { I::mullo_epi16(a, b) }
}

impl<I: Isa> Lane<I> for i32 {
    type Reg = I::Vi;

    #[inline(always)]
    unsafe fn setzero() -> I::Vi { I::setzero_si() }
    #[inline(always)]
    unsafe fn loadu(p: *const Self) -> I::Vi { I::loadu_si(p.cast()) }
    #[inline(always)]
    unsafe fn storeu(p: *mut Self, v: I::Vi) { I::storeu_si(p.cast(), v) }
    #[inline(always)]
    unsafe fn add(a: I::Vi, b: I::Vi) -> I::Vi { I::add_epi32(a, b) }
    #[inline(always)]
    unsafe fn max(a: I::Vi, b: I::Vi) -> I::Vi { I::max_epi32(a, b) }
    #[inline(always)]
    unsafe fn mul(a: I::Vi, b: I::Vi) -> I::Vi { I::mullo_epi32(a, b) }
}

impl<I: Isa> Lane<I> for f32 {
    type Reg = I::Vf;

    #[inline(always)]
    unsafe fn setzero() -> I::Vf { I::setzero_ps() }
    #[inline(always)]
    unsafe fn loadu(p: *const Self) -> I::Vf { I::loadu_ps(p) }
    #[inline(always)]
    unsafe fn storeu(p: *mut Self, v: I::Vf) { I::storeu_ps(p, v) }
    #[inline(always)]
    unsafe fn add(a: I::Vf, b: I::Vf) -> I::Vf { I::add_ps(a, b) }
    #[inline(always)]
    unsafe fn max(a: I::Vf, b: I::Vf) -> I::Vf { I::max_ps(a, b) }
    #[inline(always)]
    unsafe fn mul(a: I::Vf, b: I::Vf) -> I::Vf { I::mul_ps(a, b) }
}

impl<I: Isa> Lane<I> for f64 {
    type Reg = I::Vd;

    #[inline(always)]
    unsafe fn setzero() -> I::Vd { I::setzero_pd() }
    #[inline(always)]
    unsafe fn loadu(p: *const Self) -> I::Vd { I::loadu_pd(p) }
    #[inline(always)]
    unsafe fn storeu(p: *mut Self, v: I::Vd) { I::storeu_pd(p, v) }
    #[inline(always)]
    unsafe fn add(a: I::Vd, b: I::Vd) -> I::Vd { I::add_pd(a, b) }
    #[inline(always)]
    unsafe fn max(a: I::Vd, b: I::Vd) -> I::Vd { I::max_pd(a, b) }
    #[inline(always)]
    unsafe fn mul(a: I::Vd, b: I::Vd) -> I::Vd { I::mul_pd(a, b) }
}
