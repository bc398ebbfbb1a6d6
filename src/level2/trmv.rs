#![allow(non_snake_case)]

use super::checks::ArgCheck;
use crate::algebra::*;
use crate::settings::Level2Settings;

/// Triangular matrix-vector product `x := op(A)*x`, in place.
///
/// `A` is `n x n` and triangular in its `uplo` triangle; the other
/// triangle is never read.  With `MatrixDiagonal::Unit` the diagonal is
/// taken to be one and is not read either.
pub fn trmv<T: BlasScalar>(
    order: MatrixOrder,
    uplo: MatrixTriangle,
    trans: MatrixShape,
    diag: MatrixDiagonal,
    n: usize,
    a: &[T],
    lda: usize,
    x: &mut [T],
    incx: isize,
) -> Result<(), BlasError> {
    _trmv(
        &Level2Settings::default(),
        order,
        uplo,
        trans,
        diag,
        n,
        a,
        lda,
        x,
        incx,
    )
}

pub(crate) fn _trmv<T: BlasScalar>(
    _settings: &Level2Settings,
    order: MatrixOrder,
    uplo: MatrixTriangle,
    trans: MatrixShape,
    diag: MatrixDiagonal,
    n: usize,
    a: &[T],
    lda: usize,
    x: &mut [T],
    incx: isize,
) -> Result<(), BlasError> {
    let chk = ArgCheck::new::<T>("trmv");
    check_triangular_args::<T>(&chk, order, trans, n, a, lda, x, incx)?;

    if n == 0 {
        return Ok(());
    }

    let A = MatrixView::new(order, n, n, lda, a);
    let mut x = StridedVectorMut::new(x, n, incx);
    let L = A.triangular(uplo, trans, diag);

    // x_i depends on x_j for j on the populated side of the diagonal
    // only, so sweeping towards that side never reads an updated entry.
    match L.effective_uplo() {
        MatrixTriangle::Triu => {
            for i in 0..n {
                let mut acc = T::zero();
                for j in i..n {
                    acc = acc.mul_acc(L.elem(i, j), x[j]);
                }
                x[i] = acc;
            }
        }
        MatrixTriangle::Tril => {
            for i in (0..n).rev() {
                let mut acc = T::zero();
                for j in 0..=i {
                    acc = acc.mul_acc(L.elem(i, j), x[j]);
                }
                x[i] = acc;
            }
        }
    }
    Ok(())
}

// trmv / trsv: order(1) uplo(2) trans(3) diag(4) n(5) a(6) lda(7) x(8) incx(9)
pub(super) fn check_triangular_args<T: BlasScalar>(
    chk: &ArgCheck,
    order: MatrixOrder,
    trans: MatrixShape,
    n: usize,
    a: &[T],
    lda: usize,
    x: &[T],
    incx: isize,
) -> Result<(), BlasError> {
    chk.shape::<T>(trans, 3)?;
    chk.ld(order, n, n, lda, 7)?;
    chk.inc(incx, 9)?;
    chk.matrix_len(order, n, n, lda, a.len(), 6)?;
    chk.vector_len(n, incx, x.len(), 8)?;
    Ok(())
}
