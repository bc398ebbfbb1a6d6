#![allow(non_snake_case)]

use super::checks::ArgCheck;
use crate::algebra::*;
use crate::settings::Level2Settings;

/// Real rank-1 update `A := α*x*yᵀ + A`, with `A` of size `m x n`.
pub fn ger<T: BlasReal>(
    order: MatrixOrder,
    m: usize,
    n: usize,
    α: T,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
    a: &mut [T],
    lda: usize,
) -> Result<(), BlasError> {
    _ger(
        &Level2Settings::default(),
        "ger",
        false,
        order,
        m,
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

/// Unconjugated complex rank-1 update `A := α*x*yᵀ + A`.
pub fn geru<T: BlasComplex>(
    order: MatrixOrder,
    m: usize,
    n: usize,
    α: T,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
    a: &mut [T],
    lda: usize,
) -> Result<(), BlasError> {
    _ger(
        &Level2Settings::default(),
        "geru",
        false,
        order,
        m,
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

/// Conjugated complex rank-1 update `A := α*x*yᴴ + A`.
///
/// For real-valued `x` and `y` this gives the same result as [`geru`].
pub fn gerc<T: BlasComplex>(
    order: MatrixOrder,
    m: usize,
    n: usize,
    α: T,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
    a: &mut [T],
    lda: usize,
) -> Result<(), BlasError> {
    _ger(
        &Level2Settings::default(),
        "gerc",
        true,
        order,
        m,
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

// ger, geru and gerc share one kernel.  `conjugate_y` selects gerc.
pub(crate) fn _ger<T: BlasScalar>(
    _settings: &Level2Settings,
    name: &'static str,
    conjugate_y: bool,
    order: MatrixOrder,
    m: usize,
    n: usize,
    α: T,
    x: &[T],
    incx: isize,
    y: &[T],
    incy: isize,
    a: &mut [T],
    lda: usize,
) -> Result<(), BlasError> {
    let chk = ArgCheck::new::<T>(name);
    chk.inc(incx, 6)?;
    chk.inc(incy, 8)?;
    chk.ld(order, m, n, lda, 10)?;
    chk.vector_len(m, incx, x.len(), 5)?;
    chk.vector_len(n, incy, y.len(), 7)?;
    chk.matrix_len(order, m, n, lda, a.len(), 9)?;

    if m == 0 || n == 0 || α == T::zero() {
        return Ok(());
    }

    let x = StridedVector::new(x, m, incx);
    let y = StridedVector::new(y, n, incy);
    let mut A = MatrixViewMut::new(order, m, n, lda, a);

    for j in 0..n {
        let yj = if conjugate_y { y[j].conj() } else { y[j] };
        let t = α * yj;
        for i in 0..m {
            A[(i, j)] += x[i] * t;
        }
    }
    Ok(())
}
