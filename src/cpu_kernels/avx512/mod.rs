//! AVX-512 with the byte/word extension (512-bit).
//!
//! `avx512bw` is required for the 8- and 16-bit lane operations; the float
//! and 32-bit paths only need `avx512f`, but the marker enables both.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Avx512bw;

crate::expand_isa_impls!(
    Avx512bw,
    avx512,
    level = Avx512bw,
    name = "avx512bw",
    features = "avx512f,avx512bw"
);
crate::expand_gather_impl!(Avx512bw, avx512);
