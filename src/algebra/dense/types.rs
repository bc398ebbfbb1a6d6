#![allow(non_snake_case)]

use crate::algebra::*;
use std::ops::{Index, IndexMut};

// core dense matrix type for borrowed and mutably borrowed matrices.
// Kernels never own matrix storage, so there is no owned variant.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
{
    /// element addressing
    pub layout: MatrixLayout,
    /// caller owned data, in the order described by `layout`
    pub data: S,
    pub(crate) phantom: std::marker::PhantomData<T>,
}

/// Read-only dense matrix over a borrowed slice
pub type MatrixView<'a, T> = DenseStorageMatrix<&'a [T], T>;
/// Mutable dense matrix over a borrowed slice
pub type MatrixViewMut<'a, T> = DenseStorageMatrix<&'a mut [T], T>;

/// Matrices with known dimensions
pub trait ShapedMatrix {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn size(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}

//NB: the storage type and every view over it implement "DenseMatrix",
//so kernels can read entries of A, op(A) or an implicitly stored
//triangle in the same way.  Elements are returned by value since views
//may produce values (conjugates, unit diagonals, implicit zeros) that
//are not stored anywhere.
pub trait DenseMatrix<T>: ShapedMatrix {
    /// the value of logical entry (i, j)
    fn elem(&self, i: usize, j: usize) -> T;
}

impl<S, T> DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
{
    /// Wraps `data` as an `nrows x ncols` matrix with leading dimension `ld`.
    ///
    /// # Panics
    /// Panics if `data` is too short for the described matrix.  Kernels
    /// check the leading dimension and the slice length before
    /// constructing a view.
    pub fn new(order: MatrixOrder, nrows: usize, ncols: usize, ld: usize, data: S) -> Self {
        let layout = MatrixLayout::new(order, nrows, ncols, ld);
        assert!(layout
            .required_len()
            .is_some_and(|r| data.as_ref().len() >= r));
        Self {
            layout,
            data,
            phantom: std::marker::PhantomData::<T>,
        }
    }

    #[inline]
    pub fn index_linear(&self, idx: (usize, usize)) -> usize {
        debug_assert!(idx.0 < self.nrows() && idx.1 < self.ncols());
        self.layout.offset(idx.0, idx.1)
    }

    pub fn data(&self) -> &[T] {
        self.data.as_ref()
    }
}

impl<S, T> DenseStorageMatrix<S, T>
where
    S: AsRef<[T]> + AsMut<[T]>,
{
    pub fn data_mut(&mut self) -> &mut [T] {
        self.data.as_mut()
    }
}

impl<S, T> ShapedMatrix for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
{
    fn nrows(&self) -> usize {
        self.layout.size().0
    }
    fn ncols(&self) -> usize {
        self.layout.size().1
    }
}

impl<S, T> DenseMatrix<T> for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
    T: Copy,
{
    #[inline]
    fn elem(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }
}

impl<S, T> Index<(usize, usize)> for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &T {
        let lidx = self.index_linear(idx);
        &self.data()[lidx]
    }
}

impl<S, T> IndexMut<(usize, usize)> for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]> + AsMut<[T]>,
{
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        let lidx = self.index_linear(idx);
        &mut self.data_mut()[lidx]
    }
}

impl<S, T> DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
    T: BlasScalar,
{
    /// `op(A)` view of the matrix
    pub fn op(&self, shape: MatrixShape) -> Op<'_, Self> {
        Op { src: self, shape }
    }

    /// Symmetric view reading only the `uplo` triangle
    pub fn sym(&self, uplo: MatrixTriangle) -> Symmetric<'_, Self> {
        Symmetric { src: self, uplo }
    }

    /// Hermitian view reading only the `uplo` triangle
    pub fn herm(&self, uplo: MatrixTriangle) -> Hermitian<'_, Self> {
        Hermitian { src: self, uplo }
    }

    /// `op(A)` view of the triangular matrix stored in the `uplo` triangle
    pub fn triangular(
        &self,
        uplo: MatrixTriangle,
        shape: MatrixShape,
        diag: MatrixDiagonal,
    ) -> TriangularOp<'_, Self> {
        TriangularOp {
            src: self,
            uplo,
            shape,
            diag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_and_col_major_index() {
        #[rustfmt::skip]
        let data = [1., 2., 3.,
                    4., 5., 6.];

        let A = MatrixView::new(MatrixOrder::RowMajor, 2, 3, 3, &data[..]);
        assert_eq!(A[(1, 0)], 4.);
        assert_eq!(A.elem(0, 2), 3.);

        // the same buffer read as a 3x2 column-major matrix is the transpose
        let B = MatrixView::new(MatrixOrder::ColMajor, 3, 2, 3, &data[..]);
        assert_eq!(B.size(), (3, 2));
        assert_eq!(B[(0, 1)], 4.);
        assert_eq!(B[(2, 0)], 3.);
    }

    #[test]
    fn test_padded_leading_dimension() {
        // 2x2 column-major with ld = 3; padding marked with NaN
        let mut data = [1., 2., f64::NAN, 3., 4.];
        let mut A = MatrixViewMut::new(MatrixOrder::ColMajor, 2, 2, 3, &mut data[..]);
        A[(1, 1)] += 10.;
        assert_eq!(A.elem(0, 1), 3.);
        assert_eq!(data[4], 14.);
        assert!(data[2].is_nan());
    }
}
