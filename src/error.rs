use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KernelError {
    #[error("instruction set {isa} is not supported by this CPU")]
    IsaUnavailable { isa: &'static str },
    #[error("instruction set {isa} is above the configured ceiling {ceiling}")]
    IsaAboveCeiling { isa: &'static str, ceiling: &'static str },
    #[error("invalid ISA override: {0}")]
    InvalidIsaOverride(String),
    #[error("accumulator shape mismatch: expected {expected} values, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
    #[error("accumulator shape {rows} x {cols} overflows usize")]
    ShapeOverflow { rows: usize, cols: usize },
    #[error("column count {cols} is not a multiple of the {lanes}-lane tile width")]
    UnalignedColumns { cols: usize, lanes: usize },
    #[error("{what} buffer too small: need {needed} elements, have {actual}")]
    BufferTooSmall { what: &'static str, needed: usize, actual: usize },
}

pub type KernelResult<T> = Result<T, KernelError>;
