#![allow(non_snake_case)]

use super::checks::ArgCheck;
use crate::algebra::*;
use crate::settings::Level2Settings;

/// General matrix-vector product `y := α*op(A)*x + β*y`.
///
/// `A` is `m x n`.  For `trans == N`, `x` has `n` elements and `y` has `m`.
/// Otherwise the two lengths swap.  `MatrixShape::H` is accepted only for
/// complex element types.
///
/// ```
/// use refblas2::{level2, MatrixOrder, MatrixShape};
///
/// let a = [1., 2., 3., 4.];
/// let x = [1., 1.];
/// let mut y = [0., 0.];
/// level2::gemv(MatrixOrder::RowMajor, MatrixShape::T, 2, 2, 1.0, &a, 2, &x, 1, 0.0, &mut y, 1)?;
/// assert_eq!(y, [4., 6.]);
/// # Ok::<(), refblas2::BlasError>(())
/// ```
pub fn gemv<T: BlasScalar>(
    order: MatrixOrder,
    trans: MatrixShape,
    m: usize,
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
    _gemv(
        &Level2Settings::default(),
        order,
        trans,
        m,
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

pub(crate) fn _gemv<T: BlasScalar>(
    settings: &Level2Settings,
    order: MatrixOrder,
    trans: MatrixShape,
    m: usize,
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
    let (lenx, leny) = match trans {
        MatrixShape::N => (n, m),
        _ => (m, n),
    };

    let chk = ArgCheck::new::<T>("gemv");
    chk.shape::<T>(trans, 2)?;
    chk.ld(order, m, n, lda, 7)?;
    chk.inc(incx, 9)?;
    chk.inc(incy, 12)?;
    chk.matrix_len(order, m, n, lda, a.len(), 6)?;
    chk.vector_len(lenx, incx, x.len(), 8)?;
    chk.vector_len(leny, incy, y.len(), 11)?;

    if m == 0 || n == 0 || (α == T::zero() && β == T::one()) {
        return Ok(());
    }

    let A = MatrixView::new(order, m, n, lda, a);
    let x = StridedVector::new(x, lenx, incx);
    let mut y = StridedVectorMut::new(y, leny, incy);
    mv(settings, &A.op(trans), α, &x, β, &mut y);
    Ok(())
}

/// `y := β*y` under the configured β = 0 policy
pub(super) fn scale_by_beta<T: BlasScalar>(
    settings: &Level2Settings,
    y: &mut StridedVectorMut<T>,
    β: T,
) {
    if β == T::zero() && settings.beta_zero_overwrite {
        y.fill(T::zero());
    } else if β != T::one() {
        y.scale(β);
    }
}

// y := α*M*x + β*y for any readable M.  Shared by gemv, symv and hemv,
// which differ only in the view they pass.
pub(super) fn mv<T, M>(
    settings: &Level2Settings,
    M: &M,
    α: T,
    x: &StridedVector<T>,
    β: T,
    y: &mut StridedVectorMut<T>,
) where
    T: BlasScalar,
    M: DenseMatrix<T>,
{
    let (rows, cols) = M.size();
    debug_assert!(x.len() == cols && y.len() == rows);

    scale_by_beta(settings, y, β);
    if α == T::zero() {
        return;
    }

    for i in 0..rows {
        let mut acc = T::zero();
        for j in 0..cols {
            acc = acc.mul_acc(M.elem(i, j), x[j]);
        }
        y[i] += α * acc;
    }
}
