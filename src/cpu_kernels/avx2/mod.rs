//! AVX2 (256-bit).

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Avx2;

crate::expand_isa_impls!(Avx2, avx2, level = Avx2, name = "avx2", features = "avx2");
crate::expand_gather_impl!(Avx2, avx2);
