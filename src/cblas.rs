//! Precision-specific entry points with CBLAS names.
//!
//! Each function forwards to the generic kernel of the same family in
//! [`level2`](crate::level2) with default settings.  Complex routines take
//! `Complex<f32>` / `Complex<f64>` buffers, which have the same memory
//! layout as interleaved `(re, im)` pairs.  Use [`as_complex`] and
//! [`as_complex_mut`] to view an interleaved real buffer without copying.
//!
//! ```
//! use refblas2::cblas::{as_complex, as_complex_mut, zgemv};
//! use refblas2::{MatrixOrder, MatrixShape};
//! use num_complex::Complex64;
//!
//! // 2x2 identity and x = [1, i], stored interleaved
//! let a = [1., 0., 0., 0., 0., 0., 1., 0.];
//! let x = [1., 0., 0., 1.];
//! let mut y = [0.; 4];
//!
//! zgemv(
//!     MatrixOrder::RowMajor, MatrixShape::N, 2, 2,
//!     Complex64::new(1., 0.), as_complex(&a).unwrap(), 2,
//!     as_complex(&x).unwrap(), 1,
//!     Complex64::new(0., 0.), as_complex_mut(&mut y).unwrap(), 1,
//! )?;
//! assert_eq!(y, [1., 0., 0., 1.]);
//! # Ok::<(), refblas2::BlasError>(())
//! ```

#![allow(clippy::too_many_arguments)]

use crate::algebra::*;
use crate::level2;
use bytemuck::{Pod, PodCastError};
use num_complex::{Complex, Complex32, Complex64};

/// View an interleaved `(re, im)` buffer as complex numbers.
///
/// Fails if the buffer has odd length or is not aligned for `Complex<T>`.
pub fn as_complex<T: Pod>(data: &[T]) -> Result<&[Complex<T>], PodCastError>
where
    Complex<T>: Pod,
{
    bytemuck::try_cast_slice(data)
}

/// Mutable counterpart of [`as_complex`].
pub fn as_complex_mut<T: Pod>(data: &mut [T]) -> Result<&mut [Complex<T>], PodCastError>
where
    Complex<T>: Pod,
{
    bytemuck::try_cast_slice_mut(data)
}

macro_rules! impl_cblas_gemv {
    ($name:ident, $T:ty) => {
        #[doc = concat!("`", stringify!($T), "` instance of [`level2::gemv`]")]
        pub fn $name(
            order: MatrixOrder,
            trans: MatrixShape,
            m: usize,
            n: usize,
            alpha: $T,
            a: &[$T],
            lda: usize,
            x: &[$T],
            incx: isize,
            beta: $T,
            y: &mut [$T],
            incy: isize,
        ) -> Result<(), BlasError> {
            level2::gemv(order, trans, m, n, alpha, a, lda, x, incx, beta, y, incy)
        }
    };
}

// ger, geru and gerc
macro_rules! impl_cblas_ger {
    ($name:ident, $kernel:ident, $T:ty) => {
        #[doc = concat!("`", stringify!($T), "` instance of [`level2::", stringify!($kernel), "`]")]
        pub fn $name(
            order: MatrixOrder,
            m: usize,
            n: usize,
            alpha: $T,
            x: &[$T],
            incx: isize,
            y: &[$T],
            incy: isize,
            a: &mut [$T],
            lda: usize,
        ) -> Result<(), BlasError> {
            level2::$kernel(order, m, n, alpha, x, incx, y, incy, a, lda)
        }
    };
}

// symv and hemv
macro_rules! impl_cblas_symv {
    ($name:ident, $kernel:ident, $T:ty) => {
        #[doc = concat!("`", stringify!($T), "` instance of [`level2::", stringify!($kernel), "`]")]
        pub fn $name(
            order: MatrixOrder,
            uplo: MatrixTriangle,
            n: usize,
            alpha: $T,
            a: &[$T],
            lda: usize,
            x: &[$T],
            incx: isize,
            beta: $T,
            y: &mut [$T],
            incy: isize,
        ) -> Result<(), BlasError> {
            level2::$kernel(order, uplo, n, alpha, a, lda, x, incx, beta, y, incy)
        }
    };
}

// syr and her.  α is real in both cases.
macro_rules! impl_cblas_syr {
    ($name:ident, $kernel:ident, $T:ty, $R:ty) => {
        #[doc = concat!("`", stringify!($T), "` instance of [`level2::", stringify!($kernel), "`]")]
        pub fn $name(
            order: MatrixOrder,
            uplo: MatrixTriangle,
            n: usize,
            alpha: $R,
            x: &[$T],
            incx: isize,
            a: &mut [$T],
            lda: usize,
        ) -> Result<(), BlasError> {
            level2::$kernel(order, uplo, n, alpha, x, incx, a, lda)
        }
    };
}

// syr2 and her2
macro_rules! impl_cblas_syr2 {
    ($name:ident, $kernel:ident, $T:ty) => {
        #[doc = concat!("`", stringify!($T), "` instance of [`level2::", stringify!($kernel), "`]")]
        pub fn $name(
            order: MatrixOrder,
            uplo: MatrixTriangle,
            n: usize,
            alpha: $T,
            x: &[$T],
            incx: isize,
            y: &[$T],
            incy: isize,
            a: &mut [$T],
            lda: usize,
        ) -> Result<(), BlasError> {
            level2::$kernel(order, uplo, n, alpha, x, incx, y, incy, a, lda)
        }
    };
}

// trmv and trsv
macro_rules! impl_cblas_tr {
    ($name:ident, $kernel:ident, $T:ty) => {
        #[doc = concat!("`", stringify!($T), "` instance of [`level2::", stringify!($kernel), "`]")]
        pub fn $name(
            order: MatrixOrder,
            uplo: MatrixTriangle,
            trans: MatrixShape,
            diag: MatrixDiagonal,
            n: usize,
            a: &[$T],
            lda: usize,
            x: &mut [$T],
            incx: isize,
        ) -> Result<(), BlasError> {
            level2::$kernel(order, uplo, trans, diag, n, a, lda, x, incx)
        }
    };
}

impl_cblas_gemv!(sgemv, f32);
impl_cblas_gemv!(dgemv, f64);
impl_cblas_gemv!(cgemv, Complex32);
impl_cblas_gemv!(zgemv, Complex64);

impl_cblas_ger!(sger, ger, f32);
impl_cblas_ger!(dger, ger, f64);
impl_cblas_ger!(cgeru, geru, Complex32);
impl_cblas_ger!(zgeru, geru, Complex64);
impl_cblas_ger!(cgerc, gerc, Complex32);
impl_cblas_ger!(zgerc, gerc, Complex64);

impl_cblas_symv!(ssymv, symv, f32);
impl_cblas_symv!(dsymv, symv, f64);
impl_cblas_symv!(chemv, hemv, Complex32);
impl_cblas_symv!(zhemv, hemv, Complex64);

impl_cblas_syr!(ssyr, syr, f32, f32);
impl_cblas_syr!(dsyr, syr, f64, f64);
impl_cblas_syr!(cher, her, Complex32, f32);
impl_cblas_syr!(zher, her, Complex64, f64);

impl_cblas_syr2!(ssyr2, syr2, f32);
impl_cblas_syr2!(dsyr2, syr2, f64);
impl_cblas_syr2!(cher2, her2, Complex32);
impl_cblas_syr2!(zher2, her2, Complex64);

impl_cblas_tr!(strmv, trmv, f32);
impl_cblas_tr!(dtrmv, trmv, f64);
impl_cblas_tr!(ctrmv, trmv, Complex32);
impl_cblas_tr!(ztrmv, trmv, Complex64);

impl_cblas_tr!(strsv, trsv, f32);
impl_cblas_tr!(dtrsv, trsv, f64);
impl_cblas_tr!(ctrsv, trsv, Complex32);
impl_cblas_tr!(ztrsv, trsv, Complex64);
