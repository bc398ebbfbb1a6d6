#![allow(non_snake_case)]

// ------------------------------------------------
// Read-only views over a dense matrix.  Each view implements
// DenseMatrix by remapping (i, j) onto the source matrix, so that
// transposition, implicit triangles and unit diagonals cost nothing
// beyond an index swap or a conjugation.

use crate::algebra::*;

/// `op(A)` for `op` in {N, T, H}
#[derive(Debug, Clone, Copy)]
pub struct Op<'a, M> {
    pub src: &'a M,
    pub shape: MatrixShape,
}

/// Symmetric matrix stored in one triangle of its source
#[derive(Debug, Clone, Copy)]
pub struct Symmetric<'a, M> {
    pub src: &'a M,
    pub uplo: MatrixTriangle,
}

/// Hermitian matrix stored in one triangle of its source
#[derive(Debug, Clone, Copy)]
pub struct Hermitian<'a, M> {
    pub src: &'a M,
    pub uplo: MatrixTriangle,
}

/// `op(A)` for a triangular `A` stored in one triangle of its source
#[derive(Debug, Clone, Copy)]
pub struct TriangularOp<'a, M> {
    pub src: &'a M,
    pub uplo: MatrixTriangle,
    pub shape: MatrixShape,
    pub diag: MatrixDiagonal,
}

#[inline]
fn op_elem<T, M>(src: &M, shape: MatrixShape, i: usize, j: usize) -> T
where
    T: BlasScalar,
    M: DenseMatrix<T>,
{
    match shape {
        MatrixShape::N => src.elem(i, j),
        MatrixShape::T => src.elem(j, i),
        MatrixShape::H => src.elem(j, i).conj(),
    }
}

impl<M> ShapedMatrix for Op<'_, M>
where
    M: ShapedMatrix,
{
    fn nrows(&self) -> usize {
        match self.shape {
            MatrixShape::N => self.src.nrows(),
            _ => self.src.ncols(),
        }
    }
    fn ncols(&self) -> usize {
        match self.shape {
            MatrixShape::N => self.src.ncols(),
            _ => self.src.nrows(),
        }
    }
}

impl<T, M> DenseMatrix<T> for Op<'_, M>
where
    T: BlasScalar,
    M: DenseMatrix<T>,
{
    #[inline]
    fn elem(&self, i: usize, j: usize) -> T {
        op_elem(self.src, self.shape, i, j)
    }
}

impl<M> ShapedMatrix for Symmetric<'_, M>
where
    M: ShapedMatrix,
{
    fn nrows(&self) -> usize {
        self.src.nrows()
    }
    fn ncols(&self) -> usize {
        self.src.ncols()
    }
}

impl<T, M> DenseMatrix<T> for Symmetric<'_, M>
where
    T: BlasScalar,
    M: DenseMatrix<T>,
{
    #[inline]
    fn elem(&self, i: usize, j: usize) -> T {
        if self.uplo.contains(i, j) {
            //populated triangular part
            self.src.elem(i, j)
        } else {
            //reflected triangular part
            self.src.elem(j, i)
        }
    }
}

impl<M> ShapedMatrix for Hermitian<'_, M>
where
    M: ShapedMatrix,
{
    fn nrows(&self) -> usize {
        self.src.nrows()
    }
    fn ncols(&self) -> usize {
        self.src.ncols()
    }
}

impl<T, M> DenseMatrix<T> for Hermitian<'_, M>
where
    T: BlasScalar,
    M: DenseMatrix<T>,
{
    #[inline]
    fn elem(&self, i: usize, j: usize) -> T {
        if i == j {
            // imaginary part of the diagonal is never read
            T::from_real(self.src.elem(i, i).re())
        } else if self.uplo.contains(i, j) {
            self.src.elem(i, j)
        } else {
            self.src.elem(j, i).conj()
        }
    }
}

impl<M> TriangularOp<'_, M> {
    /// The triangle populated by `op(A)`.  Transposing swaps the triangle.
    pub fn effective_uplo(&self) -> MatrixTriangle {
        match self.shape {
            MatrixShape::N => self.uplo,
            _ => self.uplo.flip(),
        }
    }
}

impl<M> ShapedMatrix for TriangularOp<'_, M>
where
    M: ShapedMatrix,
{
    fn nrows(&self) -> usize {
        self.src.nrows()
    }
    fn ncols(&self) -> usize {
        self.src.ncols()
    }
}

impl<T, M> DenseMatrix<T> for TriangularOp<'_, M>
where
    T: BlasScalar,
    M: DenseMatrix<T>,
{
    #[inline]
    fn elem(&self, i: usize, j: usize) -> T {
        if i == j && self.diag == MatrixDiagonal::Unit {
            T::one()
        } else if self.effective_uplo().contains(i, j) {
            op_elem(self.src, self.shape, i, j)
        } else {
            T::zero()
        }
    }
}
