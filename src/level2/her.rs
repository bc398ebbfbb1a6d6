#![allow(non_snake_case)]

use super::checks::ArgCheck;
use super::syr::{check_rank1_args, check_rank2_args, stored_triangle};
use crate::algebra::*;
use crate::settings::Level2Settings;
use num_traits::Zero;

/// Hermitian rank-1 update `A := α*x*xᴴ + A` with real `α`.
///
/// Only the `uplo` triangle of `A` is read or written.  Diagonal
/// entries are written with an imaginary part of exactly zero, and the
/// imaginary part they held on entry is ignored.
pub fn her<T: BlasComplex>(
    order: MatrixOrder,
    uplo: MatrixTriangle,
    n: usize,
    α: T::Real,
    x: &[T],
    incx: isize,
    a: &mut [T],
    lda: usize,
) -> Result<(), BlasError> {
    _her(
        &Level2Settings::default(),
        order,
        uplo,
        n,
        α,
        x,
        incx,
        a,
        lda,
    )
}

/// Hermitian rank-2 update `A := α*x*yᴴ + conj(α)*y*xᴴ + A`.
///
/// Only the `uplo` triangle of `A` is read or written.  Diagonal
/// entries are written with an imaginary part of exactly zero.
pub fn her2<T: BlasComplex>(
    order: MatrixOrder,
    uplo: MatrixTriangle,
    n: usize,
    α: T,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
    a: &mut [T],
    lda: usize,
) -> Result<(), BlasError> {
    _her2(
        &Level2Settings::default(),
        order,
        uplo,
        n,
        α,
        x,
        incx,
        y,
        incy,
        a,
        lda,
    )
}

pub(crate) fn _her<T: BlasScalar>(
    _settings: &Level2Settings,
    order: MatrixOrder,
    uplo: MatrixTriangle,
    n: usize,
    α: T::Real,
    x: &[T],
    incx: isize,
    a: &mut [T],
    lda: usize,
) -> Result<(), BlasError> {
    let chk = ArgCheck::new::<T>("her");
    check_rank1_args(&chk, order, n, x, incx, a, lda)?;

    if n == 0 || α.is_zero() {
        return Ok(());
    }

    let x = StridedVector::new(x, n, incx);
    let mut A = MatrixViewMut::new(order, n, n, lda, a);

    for (i, j) in stored_triangle(uplo, n) {
        if i == j {
            let d = A[(i, i)].re() + α * x[i].abs_sqr();
            A[(i, i)] = T::from_real(d);
        } else {
            let t = x[j].conj().scale_real(α);
            A[(i, j)] += x[i] * t;
        }
    }
    Ok(())
}

pub(crate) fn _her2<T: BlasScalar>(
    _settings: &Level2Settings,
    order: MatrixOrder,
    uplo: MatrixTriangle,
    n: usize,
    α: T,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
    a: &mut [T],
    lda: usize,
) -> Result<(), BlasError> {
    let chk = ArgCheck::new::<T>("her2");
    check_rank2_args(&chk, order, n, x, incx, y, incy, a, lda)?;

    if n == 0 || α == T::zero() {
        return Ok(());
    }

    let x = StridedVector::new(x, n, incx);
    let y = StridedVector::new(y, n, incy);
    let mut A = MatrixViewMut::new(order, n, n, lda, a);

    for (i, j) in stored_triangle(uplo, n) {
        let t1 = α * y[j].conj();
        let t2 = (α * x[j]).conj();
        let update = x[i] * t1 + y[i] * t2;
        if i == j {
            // update is 2*Re(α*x_i*conj(y_i)) up to rounding in its imaginary part
            A[(i, i)] = T::from_real(A[(i, i)].re() + update.re());
        } else {
            A[(i, j)] += update;
        }
    }
    Ok(())
}
