//! SSE2 (128-bit). The x86_64 baseline: always available.

pub mod emulate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Sse2;

crate::expand_isa_impls!(Sse2, sse2, level = Sse2, name = "sse2", features = "sse2");
