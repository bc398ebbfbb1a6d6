#![allow(non_snake_case)]

use super::checks::ArgCheck;
use crate::algebra::*;
use crate::settings::Level2Settings;

/// Symmetric rank-1 update `A := α*x*xᵀ + A`.
///
/// Only the `uplo` triangle of `A` is read or written.
pub fn syr<T: BlasScalar>(
    order: MatrixOrder,
    uplo: MatrixTriangle,
    n: usize,
    α: T,
    x: &[T],
    incx: isize,
    a: &mut [T],
    lda: usize,
) -> Result<(), BlasError> {
    _syr(
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

/// Symmetric rank-2 update `A := α*x*yᵀ + α*y*xᵀ + A`.
///
/// Only the `uplo` triangle of `A` is read or written.
pub fn syr2<T: BlasScalar>(
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
    _syr2(
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

/// (row, col) pairs of the `uplo` triangle of an `n x n` matrix,
/// diagonal included, visited column by column.
pub(super) fn stored_triangle(
    uplo: MatrixTriangle,
    n: usize,
) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |j| {
        let rows = match uplo {
            MatrixTriangle::Triu => 0..(j + 1),
            MatrixTriangle::Tril => j..n,
        };
        rows.map(move |i| (i, j))
    })
}

pub(crate) fn _syr<T: BlasScalar>(
    _settings: &Level2Settings,
    order: MatrixOrder,
    uplo: MatrixTriangle,
    n: usize,
    α: T,
    x: &[T],
    incx: isize,
    a: &mut [T],
    lda: usize,
) -> Result<(), BlasError> {
    let chk = ArgCheck::new::<T>("syr");
    check_rank1_args(&chk, order, n, x, incx, a, lda)?;

    if n == 0 || α == T::zero() {
        return Ok(());
    }

    let x = StridedVector::new(x, n, incx);
    let mut A = MatrixViewMut::new(order, n, n, lda, a);

    for (i, j) in stored_triangle(uplo, n) {
        A[(i, j)] += x[i] * (α * x[j]);
    }
    Ok(())
}

pub(crate) fn _syr2<T: BlasScalar>(
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
    let chk = ArgCheck::new::<T>("syr2");
    check_rank2_args(&chk, order, n, x, incx, y, incy, a, lda)?;

    if n == 0 || α == T::zero() {
        return Ok(());
    }

    let x = StridedVector::new(x, n, incx);
    let y = StridedVector::new(y, n, incy);
    let mut A = MatrixViewMut::new(order, n, n, lda, a);

    for (i, j) in stored_triangle(uplo, n) {
        let t1 = α * y[j];
        let t2 = α * x[j];
        A[(i, j)] += x[i] * t1 + y[i] * t2;
    }
    Ok(())
}

// syr / her: order(1) uplo(2) n(3) α(4) x(5) incx(6) a(7) lda(8)
pub(super) fn check_rank1_args<T>(
    chk: &ArgCheck,
    order: MatrixOrder,
    n: usize,
    x: &[T],
    incx: isize,
    a: &[T],
    lda: usize,
) -> Result<(), BlasError> {
    chk.inc(incx, 6)?;
    chk.ld(order, n, n, lda, 8)?;
    chk.vector_len(n, incx, x.len(), 5)?;
    chk.matrix_len(order, n, n, lda, a.len(), 7)?;
    Ok(())
}

// syr2 / her2: order(1) uplo(2) n(3) α(4) x(5) incx(6) y(7) incy(8) a(9) lda(10)
pub(super) fn check_rank2_args<T>(
    chk: &ArgCheck,
    order: MatrixOrder,
    n: usize,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
    a: &[T],
    lda: usize,
) -> Result<(), BlasError> {
    chk.inc(incx, 6)?;
    chk.inc(incy, 8)?;
    chk.ld(order, n, n, lda, 10)?;
    chk.vector_len(n, incx, x.len(), 5)?;
    chk.vector_len(n, incy, y.len(), 7)?;
    chk.matrix_len(order, n, n, lda, a.len(), 9)?;
    Ok(())
}
