use super::MatrixOrder;

/// Element addressing for a dense `nrows x ncols` matrix.
///
/// Both storage orders reduce to `offset(i, j) = i*row_stride + j*col_stride`
/// with exactly one of the two strides equal to 1, so kernels never
/// need to branch on the storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixLayout {
    nrows: usize,
    ncols: usize,
    row_stride: usize,
    col_stride: usize,
}

impl MatrixLayout {
    /// Layout of a matrix with leading dimension `ld`.  The leading
    /// dimension should be at least [`min_leading_dim`](Self::min_leading_dim).
    pub fn new(order: MatrixOrder, nrows: usize, ncols: usize, ld: usize) -> Self {
        debug_assert!(ld >= Self::min_leading_dim(order, nrows, ncols));
        let (row_stride, col_stride) = match order {
            MatrixOrder::RowMajor => (ld, 1),
            MatrixOrder::ColMajor => (1, ld),
        };
        Self {
            nrows,
            ncols,
            row_stride,
            col_stride,
        }
    }

    /// Layout of a packed matrix, i.e. with the smallest legal leading dimension
    pub fn packed(order: MatrixOrder, nrows: usize, ncols: usize) -> Self {
        Self::new(order, nrows, ncols, Self::min_leading_dim(order, nrows, ncols))
    }

    /// Smallest legal leading dimension: the extent of the contiguous
    /// axis, but never less than one.
    pub fn min_leading_dim(order: MatrixOrder, nrows: usize, ncols: usize) -> usize {
        let extent = match order {
            MatrixOrder::RowMajor => ncols,
            MatrixOrder::ColMajor => nrows,
        };
        usize::max(1, extent)
    }

    #[inline]
    pub fn offset(&self, i: usize, j: usize) -> usize {
        i * self.row_stride + j * self.col_stride
    }

    pub fn size(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    pub fn strides(&self) -> (usize, usize) {
        (self.row_stride, self.col_stride)
    }

    /// Minimum slice length needed to hold every element of the matrix,
    /// or `None` if that length is not addressable.
    pub fn required_len(&self) -> Option<usize> {
        if self.nrows == 0 || self.ncols == 0 {
            return Some(0);
        }
        let last_row = (self.nrows - 1).checked_mul(self.row_stride)?;
        let last_col = (self.ncols - 1).checked_mul(self.col_stride)?;
        last_row.checked_add(last_col)?.checked_add(1)
    }
}
