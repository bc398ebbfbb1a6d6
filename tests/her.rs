#![allow(non_snake_case)]

mod common;
use common::*;

use num_complex::{Complex32, Complex64};
use refblas2::cblas::*;
use refblas2::MatrixOrder::RowMajor;
use refblas2::MatrixTriangle::{self, Tril, Triu};

fn cher_interleaved(uplo: MatrixTriangle, n: usize, alpha: f32, x: &[f32], incx: isize, A: &mut [f32]) {
    cher(
        RowMajor,
        uplo,
        n,
        alpha,
        as_complex(x).unwrap(),
        incx,
        as_complex_mut(A).unwrap(),
        n,
    )
    .unwrap();
}

fn cher2_interleaved(
    uplo: MatrixTriangle,
    n: usize,
    alpha: Complex32,
    x: &[f32],
    y: &[f32],
    inc: isize,
    A: &mut [f32],
) {
    cher2(
        RowMajor,
        uplo,
        n,
        alpha,
        as_complex(x).unwrap(),
        inc,
        as_complex(y).unwrap(),
        inc,
        as_complex_mut(A).unwrap(),
        n,
    )
    .unwrap();
}

// ---------------------------------------------------
// her

#[test]
fn test_cher_upper_basic() {
    let mut A = [0.0f32; 8];
    let x = [1.0f32, 0., 0., 1.];
    cher_interleaved(Triu, 2, 1.0, &x, 1, &mut A);
    // strictly lower entry stays zero
    assert_close(&A, &[1., 0., 0., -1., 0., 0., 1., 0.], TOL_F32);
}

#[test]
fn test_cher_lower_basic() {
    let mut A = [0.0f32; 8];
    let x = [1.0f32, 0., 0., 1.];
    cher_interleaved(Tril, 2, 1.0, &x, 1, &mut A);
    assert_close(&A, &[1., 0., 0., 0., 0., 1., 1., 0.], TOL_F32);
}

#[test]
fn test_cher_real_vector() {
    let mut A = [0.0f32; 8];
    let x = [2.0f32, 0., 3., 0.];
    cher_interleaved(Triu, 2, 1.0, &x, 1, &mut A);
    assert_entries(&A, &[(0, 4.), (2, 6.), (6, 9.)], TOL_F32);
}

#[test]
fn test_cher_alpha_scale() {
    let mut A = [0.0f32; 2];
    cher_interleaved(Triu, 1, 2.0, &[1.0, 0.], 1, &mut A);
    assert_close(&A, &[2., 0.], TOL_F32);
}

#[test]
fn test_cher_accumulate() {
    let mut A = [1.0f32, 0., 0., 0., 0., 0., 1., 0.];
    let x = [1.0f32, 0., 0., 0.];
    cher_interleaved(Triu, 2, 1.0, &x, 1, &mut A);
    assert_entries(&A, &[(0, 2.), (6, 1.)], TOL_F32);
}

#[test]
fn test_cher_incx() {
    let mut A = [0.0f32; 8];
    let x = [1.0f32, 0., 99., 99., 2., 0., 99., 99.];
    cher_interleaved(Triu, 2, 1.0, &x, 2, &mut A);
    assert_entries(&A, &[(0, 1.), (2, 2.), (6, 4.)], TOL_F32);
}

#[test]
fn test_cher_zeroes_diagonal_imaginary_part() {
    let mut A = [Complex32::new(1., 5.)];
    cher(RowMajor, Triu, 1, 1.0, &[Complex32::new(0., 2.)], 1, &mut A, 1).unwrap();
    assert_eq!(A, [Complex32::new(5., 0.)]);
}

#[test]
fn test_zher_upper_basic() {
    let c = Complex64::new;
    let x = [c(1., 0.), c(0., 1.)];
    let mut A = [c(0., 0.); 4];
    zher(RowMajor, Triu, 2, 1.0, &x, 1, &mut A, 2).unwrap();
    assert_eq!(A, [c(1., 0.), c(0., -1.), c(0., 0.), c(1., 0.)]);
}

#[test]
fn test_zher_lower() {
    let c = Complex64::new;
    let x = [c(1., 0.), c(0., 1.)];
    let mut A = [c(0., 0.); 4];
    zher(RowMajor, Tril, 2, 1.0, &x, 1, &mut A, 2).unwrap();
    assert_eq!(A, [c(1., 0.), c(0., 0.), c(0., 1.), c(1., 0.)]);
}

// ---------------------------------------------------
// her2

#[test]
fn test_cher2_real_upper() {
    let mut A = [0.0f32; 8];
    let x = [2.0f32, 0., 3., 0.];
    let y = [1.0f32, 0., 4., 0.];
    cher2_interleaved(Triu, 2, Complex32::new(1., 0.), &x, &y, 1, &mut A);
    assert_close(&A, &[4., 0., 11., 0., 0., 0., 24., 0.], TOL_F32);
}

#[test]
fn test_cher2_lower_real() {
    let mut A = [0.0f32; 8];
    let x = [2.0f32, 0., 3., 0.];
    let y = [1.0f32, 0., 4., 0.];
    cher2_interleaved(Tril, 2, Complex32::new(1., 0.), &x, &y, 1, &mut A);
    assert_entries(&A, &[(0, 4.), (2, 0.), (4, 11.), (6, 24.)], TOL_F32);
}

#[test]
fn test_cher2_complex_diagonal_real() {
    let mut A = [0.0f32; 2];
    cher2_interleaved(Triu, 1, Complex32::new(1., 0.), &[1., 1.], &[1., 0.], 1, &mut A);
    assert_close(&A, &[2., 0.], TOL_F32);
}

#[test]
fn test_cher2_complex_alpha() {
    // α x y^H + conj(α) y x^H vanishes for α = i and x = y = 1
    let mut A = [0.0f32; 2];
    cher2_interleaved(Triu, 1, Complex32::new(0., 1.), &[1., 0.], &[1., 0.], 1, &mut A);
    assert_close(&A, &[0., 0.], TOL_F32);
}

#[test]
fn test_cher2_accumulate() {
    let mut A = [1.0f32, 0., 0., 0., 0., 0., 1., 0.];
    let x = [1.0f32, 0., 0., 0.];
    let y = [0.0f32, 0., 1., 0.];
    cher2_interleaved(Triu, 2, Complex32::new(1., 0.), &x, &y, 1, &mut A);
    assert_close(&A, &[1., 0., 1., 0., 0., 0., 1., 0.], TOL_F32);
}

#[test]
fn test_cher2_incx_incy() {
    let mut A = [0.0f32; 8];
    let x = [2.0f32, 0., 99., 99., 3., 0., 99., 99.];
    let y = [1.0f32, 0., 99., 99., 4., 0., 99., 99.];
    cher2_interleaved(Triu, 2, Complex32::new(1., 0.), &x, &y, 2, &mut A);
    assert_entries(&A, &[(0, 4.), (2, 11.), (6, 24.)], TOL_F32);
}

#[test]
fn test_zher2_real_upper() {
    let c = Complex64::new;
    let x = [c(2., 0.), c(3., 0.)];
    let y = [c(1., 0.), c(4., 0.)];
    let mut A = [c(0., 0.); 4];
    zher2(RowMajor, Triu, 2, c(1., 0.), &x, 1, &y, 1, &mut A, 2).unwrap();
    assert_eq!(A, [c(4., 0.), c(11., 0.), c(0., 0.), c(24., 0.)]);
}

#[test]
fn test_zher2_lower() {
    let c = Complex64::new;
    let x = [c(2., 0.), c(3., 0.)];
    let y = [c(1., 0.), c(4., 0.)];
    let mut A = [c(0., 0.); 4];
    zher2(RowMajor, Tril, 2, c(1., 0.), &x, 1, &y, 1, &mut A, 2).unwrap();
    assert_eq!(A, [c(4., 0.), c(0., 0.), c(11., 0.), c(24., 0.)]);
}

#[test]
fn test_zher2_complex_off_diagonal() {
    // x = [1, i], y = [1, 1]: A01 = x0 conj(y1) + y0 conj(x1) = 1 - i
    let c = Complex64::new;
    let x = [c(1., 0.), c(0., 1.)];
    let y = [c(1., 0.), c(1., 0.)];
    let mut A = [c(0., 0.); 4];
    zher2(RowMajor, Triu, 2, c(1., 0.), &x, 1, &y, 1, &mut A, 2).unwrap();
    assert_eq!(A, [c(2., 0.), c(1., -1.), c(0., 0.), c(0., 0.)]);
}
