//! Index and tile-descriptor types shared by the callback layer and the
//! epilogue driver.

/// Row/column index type of the output matrix.
pub type Index = usize;

/// Position of one register-width output tile inside a row-major
/// `rows x cols` matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OutputBufferInfo {
    pub row_idx: Index,
    pub col_idx: Index,
    pub rows: Index,
    pub cols: Index,
}

impl OutputBufferInfo {
    #[inline(always)]
    pub const fn new(row_idx: Index, col_idx: Index, rows: Index, cols: Index) -> Self {
        Self { row_idx, col_idx, rows, cols }
    }

    /// Element offset of the tile's first lane: `row_idx * cols + col_idx`.
    #[inline(always)]
    pub const fn linear_offset(&self) -> Index {
        self.row_idx * self.cols + self.col_idx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_offset_is_row_major() {
        let info = OutputBufferInfo::new(2, 3, 4, 8);
        assert_eq!(info.linear_offset(), 19);
        assert_eq!(OutputBufferInfo::new(0, 0, 1, 16).linear_offset(), 0);
        assert_eq!(OutputBufferInfo::new(3, 8, 4, 16).linear_offset(), 56);
    }
}
