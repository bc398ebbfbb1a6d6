#![allow(dead_code)]

use refblas2::algebra::FloatT;

pub const TOL_F32: f32 = 1e-5;
pub const TOL_F64: f64 = 1e-10;

/// elementwise comparison with an absolute tolerance
pub fn assert_close<T: FloatT>(actual: &[T], expected: &[T], tol: T) {
    assert_eq!(actual.len(), expected.len());
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (*a - *e).abs() < tol,
            "entry {i}: got {a}, expected {e}"
        );
    }
}

/// compare selected entries of a buffer
pub fn assert_entries<T: FloatT>(actual: &[T], expected: &[(usize, T)], tol: T) {
    for &(i, e) in expected {
        assert!(
            (actual[i] - e).abs() < tol,
            "entry {i}: got {}, expected {e}",
            actual[i]
        );
    }
}
