//! Epilogue driver: apply a callback to a whole row-major accumulator matrix.
//!
//! Stands in for the outer multiply loop. It checks the ISA and the shape,
//! builds the functor once, then walks the matrix tile by tile inside the
//! ISA's `#[target_feature]` region.

use crate::callbacks::CallbackConfig;
use crate::cpu_kernels::{ensure_isa, Isa};
use crate::error::{KernelError, KernelResult};
use crate::types::Index;

/// Run `config`'s callback over every `I::LANES_I32`-wide tile of `acc`.
///
/// `acc` is `rows x cols`, row-major, and `cols` must be a multiple of the
/// tile width. Slice-backed config buffers are length-checked; raw ones are
/// trusted.
pub fn run_epilogue<I: Isa, C: CallbackConfig>(
    acc: &[i32],
    rows: Index,
    cols: Index,
    config: C,
) -> KernelResult<()> {
    ensure_isa::<I>()?;

    let expected = rows.checked_mul(cols).ok_or(KernelError::ShapeOverflow { rows, cols })?;
    if acc.len() != expected {
        return Err(KernelError::ShapeMismatch { expected, actual: acc.len() });
    }
    if cols % I::LANES_I32 != 0 {
        return Err(KernelError::UnalignedColumns { cols, lanes: I::LANES_I32 });
    }
    config.validate(rows, cols)?;

    log::debug!(
        "epilogue: isa={} rows={} cols={} callback={}",
        I::NAME,
        rows,
        cols,
        std::any::type_name::<C>()
    );

    // SAFETY: ISA support, accumulator extent, tile alignment and every
    // slice-backed buffer were checked above.
    unsafe { run_epilogue_unchecked::<I, C>(acc.as_ptr(), rows, cols, config) };
    Ok(())
}

/// [`run_epilogue`] without any checks.
///
/// # Safety
/// The CPU must support `I`, `acc` must hold `rows * cols` values, `cols`
/// must be a multiple of `I::LANES_I32`, and the configured buffers must
/// cover the whole output.
pub unsafe fn run_epilogue_unchecked<I: Isa, C: CallbackConfig>(
    acc: *const i32,
    rows: Index,
    cols: Index,
    config: C,
) {
    let callback = config.build::<I>();
    I::run_tiles(acc, rows, cols, &callback);
}
