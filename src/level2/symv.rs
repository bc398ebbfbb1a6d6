#![allow(non_snake_case)]

use super::checks::ArgCheck;
use super::gemv::mv;
use crate::algebra::*;
use crate::settings::Level2Settings;

/// Symmetric matrix-vector product `y := α*A*x + β*y`.
///
/// Only the `uplo` triangle of the `n x n` matrix `A` is read.  For
/// complex element types `A` is complex symmetric, i.e. no entry is
/// conjugated.
pub fn symv<T: BlasScalar>(
    order: MatrixOrder,
    uplo: MatrixTriangle,
    n: usize,
    α: T,
    a: &[T],
    lda: usize,
    x: &[T],
    incx: isize,
    β: T,
    y: &mut [T],
    incy: isize,
) -> Result<(), BlasError> {
    _symv(
        &Level2Settings::default(),
        order,
        uplo,
        n,
        α,
        a,
        lda,
        x,
        incx,
        β,
        y,
        incy,
    )
}

/// Hermitian matrix-vector product `y := α*A*x + β*y`.
///
/// Only the `uplo` triangle of `A` is read, and the imaginary parts of
/// its diagonal are taken to be zero.
pub fn hemv<T: BlasComplex>(
    order: MatrixOrder,
    uplo: MatrixTriangle,
    n: usize,
    α: T,
    a: &[T],
    lda: usize,
    x: &[T],
    incx: isize,
    β: T,
    y: &mut [T],
    incy: isize,
) -> Result<(), BlasError> {
    _hemv(
        &Level2Settings::default(),
        order,
        uplo,
        n,
        α,
        a,
        lda,
        x,
        incx,
        β,
        y,
        incy,
    )
}

pub(crate) fn _symv<T: BlasScalar>(
    settings: &Level2Settings,
    order: MatrixOrder,
    uplo: MatrixTriangle,
    n: usize,
    α: T,
    a: &[T],
    lda: usize,
    x: &[T],
    incx: isize,
    β: T,
    y: &mut [T],
    incy: isize,
) -> Result<(), BlasError> {
    let chk = ArgCheck::new::<T>("symv");
    check_args(&chk, order, n, a, lda, x, incx, y, incy)?;

    if n == 0 || (α == T::zero() && β == T::one()) {
        return Ok(());
    }

    let A = MatrixView::new(order, n, n, lda, a);
    let x = StridedVector::new(x, n, incx);
    let mut y = StridedVectorMut::new(y, n, incy);
    mv(settings, &A.sym(uplo), α, &x, β, &mut y);
    Ok(())
}

pub(crate) fn _hemv<T: BlasScalar>(
    settings: &Level2Settings,
    order: MatrixOrder,
    uplo: MatrixTriangle,
    n: usize,
    α: T,
    a: &[T],
    lda: usize,
    x: &[T],
    incx: isize,
    β: T,
    y: &mut [T],
    incy: isize,
) -> Result<(), BlasError> {
    let chk = ArgCheck::new::<T>("hemv");
    check_args(&chk, order, n, a, lda, x, incx, y, incy)?;

    if n == 0 || (α == T::zero() && β == T::one()) {
        return Ok(());
    }

    let A = MatrixView::new(order, n, n, lda, a);
    let x = StridedVector::new(x, n, incx);
    let mut y = StridedVectorMut::new(y, n, incy);
    mv(settings, &A.herm(uplo), α, &x, β, &mut y);
    Ok(())
}

// symv and hemv share a calling sequence:
// order(1) uplo(2) n(3) α(4) a(5) lda(6) x(7) incx(8) β(9) y(10) incy(11)
fn check_args<T>(
    chk: &ArgCheck,
    order: MatrixOrder,
    n: usize,
    a: &[T],
    lda: usize,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
) -> Result<(), BlasError> {
    chk.ld(order, n, n, lda, 6)?;
    chk.inc(incx, 8)?;
    chk.inc(incy, 11)?;
    chk.matrix_len(order, n, n, lda, a.len(), 5)?;
    chk.vector_len(n, incx, x.len(), 7)?;
    chk.vector_len(n, incy, y.len(), 10)?;
    Ok(())
}
