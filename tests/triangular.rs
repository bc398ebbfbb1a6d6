#![allow(non_snake_case)]

mod common;
use common::*;

use num_complex::{Complex32, Complex64};
use refblas2::cblas::*;
use refblas2::{level2, MatrixDiagonal, MatrixOrder, MatrixShape, MatrixTriangle};

use MatrixDiagonal::{NonUnit, Unit};
use MatrixOrder::{ColMajor, RowMajor};
use MatrixShape::{H, N, T};
use MatrixTriangle::{Tril, Triu};

// ---------------------------------------------------
// trmv

#[test]
fn test_strmv_upper_notrans() {
    let A = [2.0f32, 3.0, 0.0, 4.0];
    let mut x = [1.0, 1.0];
    strmv(RowMajor, Triu, N, NonUnit, 2, &A, 2, &mut x, 1).unwrap();
    assert_close(&x, &[5.0, 4.0], TOL_F32);
}

#[test]
fn test_strmv_upper_trans() {
    let A = [2.0f32, 3.0, 0.0, 4.0];
    let mut x = [1.0, 1.0];
    strmv(RowMajor, Triu, T, NonUnit, 2, &A, 2, &mut x, 1).unwrap();
    assert_close(&x, &[2.0, 7.0], TOL_F32);
}

#[test]
fn test_strmv_lower_notrans() {
    let A = [2.0f32, 0.0, 3.0, 4.0];
    let mut x = [1.0, 1.0];
    strmv(RowMajor, Tril, N, NonUnit, 2, &A, 2, &mut x, 1).unwrap();
    assert_close(&x, &[2.0, 7.0], TOL_F32);
}

#[test]
fn test_strmv_unit_diagonal() {
    // stored diagonal is never read
    let A = [99.0f32, 5.0, 0.0, 99.0];
    let mut x = [1.0, 1.0];
    strmv(RowMajor, Triu, N, Unit, 2, &A, 2, &mut x, 1).unwrap();
    assert_close(&x, &[6.0, 1.0], TOL_F32);
}

#[test]
fn test_strmv_incx() {
    let A = [1.0f32, 0.0, 0.0, 1.0];
    let mut x = [3.0, 99.0, 4.0, 99.0];
    strmv(RowMajor, Triu, N, NonUnit, 2, &A, 2, &mut x, 2).unwrap();
    assert_close(&x, &[3.0, 99.0, 4.0, 99.0], TOL_F32);
}

#[test]
fn test_strmv_col_major() {
    let A = [2.0f32, 0.0, 3.0, 4.0];
    let mut x = [1.0, 1.0];
    strmv(ColMajor, Triu, N, NonUnit, 2, &A, 2, &mut x, 1).unwrap();
    assert_close(&x, &[5.0, 4.0], TOL_F32);
}

#[test]
fn test_dtrmv_upper() {
    let A = [2.0, 3.0, 0.0, 4.0];
    let mut x = [1.0, 1.0];
    dtrmv(RowMajor, Triu, N, NonUnit, 2, &A, 2, &mut x, 1).unwrap();
    assert_close(&x, &[5.0, 4.0], TOL_F64);
}

#[test]
fn test_dtrmv_lower() {
    let A = [2.0, 0.0, 3.0, 4.0];
    let mut x = [1.0, 1.0];
    dtrmv(RowMajor, Tril, N, NonUnit, 2, &A, 2, &mut x, 1).unwrap();
    assert_close(&x, &[2.0, 7.0], TOL_F64);
}

#[test]
fn test_ctrmv_upper() {
    let A = [2.0f32, 0., 1., 1., 0., 0., 3., 0.];
    let mut x = [1.0f32, 0., 0., 1.];
    ctrmv(
        RowMajor,
        Triu,
        N,
        NonUnit,
        2,
        as_complex(&A).unwrap(),
        2,
        as_complex_mut(&mut x).unwrap(),
        1,
    )
    .unwrap();
    assert_close(&x, &[1., 1., 0., 3.], TOL_F32);
}

#[test]
fn test_ctrmv_conj_trans() {
    // [[2, 1+i], [0, 3]]^H [1, 1] = [2, 4-i]
    let c = Complex32::new;
    let A = [c(2., 0.), c(1., 1.), c(0., 0.), c(3., 0.)];
    let mut x = [c(1., 0.), c(1., 0.)];
    ctrmv(RowMajor, Triu, H, NonUnit, 2, &A, 2, &mut x, 1).unwrap();
    assert_eq!(x, [c(2., 0.), c(4., -1.)]);
}

#[test]
fn test_ztrmv_upper() {
    let c = Complex64::new;
    let A = [c(2., 0.), c(3., 0.), c(0., 0.), c(4., 0.)];
    let mut x = [c(1., 0.), c(1., 0.)];
    ztrmv(RowMajor, Triu, N, NonUnit, 2, &A, 2, &mut x, 1).unwrap();
    assert_eq!(x, [c(5., 0.), c(4., 0.)]);
}

// ---------------------------------------------------
// trsv

#[test]
fn test_strsv_upper_notrans() {
    let A = [2.0f32, 4.0, 0.0, 3.0];
    let mut x = [10.0, 6.0];
    strsv(RowMajor, Triu, N, NonUnit, 2, &A, 2, &mut x, 1).unwrap();
    assert_close(&x, &[1.0, 2.0], TOL_F32);
}

#[test]
fn test_strsv_lower_notrans() {
    let A = [2.0f32, 0.0, 3.0, 5.0];
    let mut x = [4.0, 13.0];
    strsv(RowMajor, Tril, N, NonUnit, 2, &A, 2, &mut x, 1).unwrap();
    assert_close(&x, &[2.0, 1.4], TOL_F32);
}

#[test]
fn test_strsv_upper_trans() {
    let A = [2.0f32, 4.0, 0.0, 3.0];
    let mut x = [2.0, 11.0];
    strsv(RowMajor, Triu, T, NonUnit, 2, &A, 2, &mut x, 1).unwrap();
    assert_close(&x, &[1.0, 7.0 / 3.0], TOL_F32);
}

#[test]
fn test_strsv_unit_diagonal() {
    let A = [99.0f32, 2.0, 0.0, 99.0];
    let mut x = [5.0, 3.0];
    strsv(RowMajor, Triu, N, Unit, 2, &A, 2, &mut x, 1).unwrap();
    assert_close(&x, &[-1.0, 3.0], TOL_F32);
}

#[test]
fn test_strsv_incx() {
    let A = [2.0f32, 0.0, 0.0, 2.0];
    let mut x = [4.0, 99.0, 6.0, 99.0];
    strsv(RowMajor, Triu, N, NonUnit, 2, &A, 2, &mut x, 2).unwrap();
    assert_close(&x, &[2.0, 99.0, 3.0, 99.0], TOL_F32);
}

#[test]
fn test_strsv_3x3() {
    #[rustfmt::skip]
    let A = [1.0f32, 2.0, 3.0,
             0.0,    1.0, 2.0,
             0.0,    0.0, 2.0];
    let mut x = [14.0, 8.0, 6.0];
    strsv(RowMajor, Triu, N, NonUnit, 3, &A, 3, &mut x, 1).unwrap();
    assert_close(&x, &[1.0, 2.0, 3.0], TOL_F32);
}

#[test]
fn test_dtrsv_upper() {
    let A = [2.0, 4.0, 0.0, 3.0];
    let mut x = [10.0, 6.0];
    dtrsv(RowMajor, Triu, N, NonUnit, 2, &A, 2, &mut x, 1).unwrap();
    assert_close(&x, &[1.0, 2.0], TOL_F64);
}

#[test]
fn test_dtrsv_lower() {
    let A = [2.0, 0.0, 3.0, 5.0];
    let mut x = [4.0, 13.0];
    dtrsv(RowMajor, Tril, N, NonUnit, 2, &A, 2, &mut x, 1).unwrap();
    assert_close(&x, &[2.0, 1.4], TOL_F64);
}

#[test]
fn test_ctrsv_upper() {
    let A = [2.0f32, 0., 0., 0., 0., 0., 2., 0.];
    let mut x = [4.0f32, 0., 6., 0.];
    ctrsv(
        RowMajor,
        Triu,
        N,
        NonUnit,
        2,
        as_complex(&A).unwrap(),
        2,
        as_complex_mut(&mut x).unwrap(),
        1,
    )
    .unwrap();
    assert_entries(&x, &[(0, 2.), (2, 3.)], TOL_F32);
}

#[test]
fn test_ztrsv_upper() {
    let c = Complex64::new;
    let A = [c(3., 0.), c(0., 0.), c(0., 0.), c(3., 0.)];
    let mut x = [c(6., 0.), c(9., 0.)];
    ztrsv(RowMajor, Triu, N, NonUnit, 2, &A, 2, &mut x, 1).unwrap();
    assert_eq!(x, [c(2., 0.), c(3., 0.)]);
}

#[test]
fn test_trsv_zero_pivot_propagates() {
    let A: [f64; 4] = [0.0, 1.0, 0.0, 1.0];
    let mut x = [1.0, 1.0];
    level2::trsv(RowMajor, Triu, N, NonUnit, 2, &A, 2, &mut x, 1).unwrap();
    assert_eq!(x[1], 1.0);
    assert!(!x[0].is_finite());
}

#[test]
fn test_trmv_empty_is_noop() {
    let A: [f64; 0] = [];
    let mut x: [f64; 0] = [];
    dtrmv(RowMajor, Triu, N, NonUnit, 0, &A, 1, &mut x, 1).unwrap();
    dtrsv(RowMajor, Triu, N, NonUnit, 0, &A, 1, &mut x, 1).unwrap();
}
