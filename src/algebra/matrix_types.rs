// Option enumerations shared by all kernels.  Discriminants
// match the CBLAS enum codes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Physical storage order of a dense matrix
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u32)]
pub enum MatrixOrder {
    /// Row-major (C-style): elements in a row are contiguous
    #[default]
    RowMajor = 101,
    /// Column-major (Fortran-style): elements in a column are contiguous
    ColMajor = 102,
}

/// Matrix orientation marker, i.e. the `op` in `op(A)`
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u32)]
pub enum MatrixShape {
    /// Normal matrix orientation
    #[default]
    N = 111,
    /// Transposed matrix orientation
    T = 112,
    /// Conjugate transposed (adjoint) orientation.  Complex types only.
    H = 113,
}

/// Matrix shape marker for triangular, symmetric and Hermitian matrices
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u32)]
pub enum MatrixTriangle {
    /// Upper triangular matrix
    #[default]
    Triu = 121,
    /// Lower triangular matrix
    Tril = 122,
}

/// Diagonal marker for triangular matrices
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u32)]
pub enum MatrixDiagonal {
    /// diagonal entries are read from the matrix
    #[default]
    NonUnit = 131,
    /// diagonal entries are taken to be one and never read
    Unit = 132,
}

impl MatrixShape {
    /// Fortran BLAS character for this option
    pub fn as_blas_char(&self) -> u8 {
        match self {
            MatrixShape::N => b'N',
            MatrixShape::T => b'T',
            MatrixShape::H => b'C',
        }
    }
    /// true for `T` and `H`
    pub fn is_transposed(&self) -> bool {
        *self != MatrixShape::N
    }
}

impl MatrixTriangle {
    /// Fortran BLAS character for this option
    pub fn as_blas_char(&self) -> u8 {
        match self {
            MatrixTriangle::Triu => b'U',
            MatrixTriangle::Tril => b'L',
        }
    }
    /// the opposite triangle
    pub fn flip(&self) -> Self {
        match self {
            MatrixTriangle::Triu => MatrixTriangle::Tril,
            MatrixTriangle::Tril => MatrixTriangle::Triu,
        }
    }
    /// true if (row, col) lies in this triangle, diagonal included
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        match self {
            MatrixTriangle::Triu => row <= col,
            MatrixTriangle::Tril => row >= col,
        }
    }
}

impl MatrixDiagonal {
    /// Fortran BLAS character for this option
    pub fn as_blas_char(&self) -> u8 {
        match self {
            MatrixDiagonal::NonUnit => b'N',
            MatrixDiagonal::Unit => b'U',
        }
    }
}

impl MatrixOrder {
    /// the opposite storage order
    pub fn flip(&self) -> Self {
        match self {
            MatrixOrder::RowMajor => MatrixOrder::ColMajor,
            MatrixOrder::ColMajor => MatrixOrder::RowMajor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cblas_codes() {
        assert_eq!(MatrixOrder::ColMajor as u32, 102);
        assert_eq!(MatrixShape::H as u32, 113);
        assert_eq!(MatrixTriangle::Tril as u32, 122);
        assert_eq!(MatrixDiagonal::Unit as u32, 132);
    }

    #[test]
    fn test_blas_chars() {
        assert_eq!(MatrixShape::H.as_blas_char(), b'C');
        assert_eq!(MatrixTriangle::Tril.as_blas_char(), b'L');
        assert_eq!(MatrixDiagonal::Unit.as_blas_char(), b'U');
    }

    #[test]
    fn test_triangle_contains() {
        assert!(MatrixTriangle::Triu.contains(0, 2));
        assert!(!MatrixTriangle::Triu.contains(2, 0));
        assert!(MatrixTriangle::Tril.contains(1, 1));
        assert_eq!(MatrixTriangle::Triu.flip(), MatrixTriangle::Tril);
        assert_eq!(MatrixOrder::RowMajor.flip(), MatrixOrder::ColMajor);
    }
}
