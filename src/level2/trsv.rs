#![allow(non_snake_case)]

use super::checks::ArgCheck;
use super::trmv::check_triangular_args;
use crate::algebra::*;
use crate::settings::Level2Settings;

/// Triangular solve `op(A)*x_new = x`, in place.
///
/// No pivoting is performed.  An exactly zero diagonal entry produces
/// IEEE infinities or NaNs in `x`, unless singularity checks are enabled
/// on a [`Level2`](crate::level2::Level2) engine, in which case
/// [`BlasError::SingularMatrix`] is returned and `x` is left unchanged.
///
/// ```
/// use refblas2::{level2, MatrixDiagonal, MatrixOrder, MatrixShape, MatrixTriangle};
///
/// let a = [1., 2., 0., 1.];
/// let mut x = [3., 1.];
/// level2::trsv(
///     MatrixOrder::RowMajor,
///     MatrixTriangle::Triu,
///     MatrixShape::N,
///     MatrixDiagonal::NonUnit,
///     2, &a, 2, &mut x, 1,
/// )?;
/// assert_eq!(x, [1., 1.]);
/// # Ok::<(), refblas2::BlasError>(())
/// ```
pub fn trsv<T: BlasScalar>(
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
    _trsv(
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

pub(crate) fn _trsv<T: BlasScalar>(
    settings: &Level2Settings,
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
    let chk = ArgCheck::new::<T>("trsv");
    check_triangular_args::<T>(&chk, order, trans, n, a, lda, x, incx)?;

    if n == 0 {
        return Ok(());
    }

    let A = MatrixView::new(order, n, n, lda, a);
    let L = A.triangular(uplo, trans, diag);

    if settings.check_singular && diag == MatrixDiagonal::NonUnit {
        if let Some(k) = (0..n).find(|&k| L.elem(k, k) == T::zero()) {
            return Err(chk.singular(k));
        }
    }

    let mut x = StridedVectorMut::new(x, n, incx);
    let nonunit = diag == MatrixDiagonal::NonUnit;

    // back substitution for upper, forward substitution for lower
    match L.effective_uplo() {
        MatrixTriangle::Triu => {
            for i in (0..n).rev() {
                let mut acc = x[i];
                for j in (i + 1)..n {
                    acc -= L.elem(i, j) * x[j];
                }
                if nonunit {
                    acc = acc / L.elem(i, i);
                }
                x[i] = acc;
            }
        }
        MatrixTriangle::Tril => {
            for i in 0..n {
                let mut acc = x[i];
                for j in 0..i {
                    acc -= L.elem(i, j) * x[j];
                }
                if nonunit {
                    acc = acc / L.elem(i, i);
                }
                x[i] = acc;
            }
        }
    }
    Ok(())
}
