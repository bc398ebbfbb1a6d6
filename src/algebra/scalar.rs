use super::FloatT;
use num_complex::Complex;
use num_traits::{One, Zero};
use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

// All element arithmetic inside the Level-2 kernels goes through
// this trait, so that each kernel is written once and instantiated
// for s/d/c/z precisions.

/// Element type of a Level-2 kernel: `f32`, `f64`, `Complex<f32>` or `Complex<f64>`.
///
/// For real types, [`conj`](BlasScalar::conj) is the identity and
/// [`im`](BlasScalar::im) is always zero.
pub trait BlasScalar:
    'static
    + Copy
    + Send
    + Sync
    + Debug
    + PartialEq
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
{
    /// The underlying real field
    type Real: FloatT;

    /// true for complex element types
    const IS_COMPLEX: bool;

    /// BLAS routine prefix (`s`, `d`, `c` or `z`)
    const PREFIX: char;

    /// complex conjugate
    fn conj(self) -> Self;

    /// real part
    fn re(self) -> Self::Real;

    /// imaginary part
    fn im(self) -> Self::Real;

    /// embed a real value
    fn from_real(re: Self::Real) -> Self;

    /// squared modulus `|self|^2`, always real
    fn abs_sqr(self) -> Self::Real;

    /// multiplication by a real scalar
    fn scale_real(self, c: Self::Real) -> Self;

    /// `self + a*b`
    #[inline]
    fn mul_acc(self, a: Self, b: Self) -> Self {
        self + a * b
    }

    /// `self + a*conj(b)`
    #[inline]
    fn mul_acc_conj(self, a: Self, b: Self) -> Self {
        self + a * b.conj()
    }
}

/// Marker for the real element types `f32` and `f64`.
pub trait BlasReal: BlasScalar<Real = Self> + FloatT {}

/// Marker for the complex element types `Complex<f32>` and `Complex<f64>`.
pub trait BlasComplex: BlasScalar {}

macro_rules! impl_blas_scalar_real {
    ($T:ty, $prefix:literal) => {
        impl BlasScalar for $T {
            type Real = $T;
            const IS_COMPLEX: bool = false;
            const PREFIX: char = $prefix;

            #[inline]
            fn conj(self) -> Self {
                self
            }
            #[inline]
            fn re(self) -> $T {
                self
            }
            #[inline]
            fn im(self) -> $T {
                0.0
            }
            #[inline]
            fn from_real(re: $T) -> Self {
                re
            }
            #[inline]
            fn abs_sqr(self) -> $T {
                self * self
            }
            #[inline]
            fn scale_real(self, c: $T) -> Self {
                self * c
            }
        }
        impl BlasReal for $T {}
    };
}

macro_rules! impl_blas_scalar_complex {
    ($T:ty, $prefix:literal) => {
        impl BlasScalar for Complex<$T> {
            type Real = $T;
            const IS_COMPLEX: bool = true;
            const PREFIX: char = $prefix;

            #[inline]
            fn conj(self) -> Self {
                Complex::conj(&self)
            }
            #[inline]
            fn re(self) -> $T {
                self.re
            }
            #[inline]
            fn im(self) -> $T {
                self.im
            }
            #[inline]
            fn from_real(re: $T) -> Self {
                Complex::new(re, 0.0)
            }
            #[inline]
            fn abs_sqr(self) -> $T {
                self.norm_sqr()
            }
            #[inline]
            fn scale_real(self, c: $T) -> Self {
                Complex::new(self.re * c, self.im * c)
            }
        }
        impl BlasComplex for Complex<$T> {}
    };
}

impl_blas_scalar_real!(f32, 's');
impl_blas_scalar_real!(f64, 'd');
impl_blas_scalar_complex!(f32, 'c');
impl_blas_scalar_complex!(f64, 'z');

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::{Complex32, Complex64};

    #[test]
    fn test_real_conj_is_identity() {
        assert_eq!((-3.5f64).conj(), -3.5);
        assert_eq!(2.0f32.im(), 0.0);
        assert_eq!((-3.0f64).abs_sqr(), 9.0);
        assert_eq!(<f32 as BlasScalar>::PREFIX, 's');
    }

    #[test]
    fn test_complex_conj_and_modulus() {
        let z = Complex64::new(1.0, -2.0);
        assert_eq!(z.conj(), Complex64::new(1.0, 2.0));
        assert_eq!(z.abs_sqr(), 5.0);
        assert_eq!(z.scale_real(2.0), Complex64::new(2.0, -4.0));
        assert_eq!(<Complex32 as BlasScalar>::PREFIX, 'c');
    }

    #[test]
    fn test_mul_acc_conj() {
        // 1 + i * conj(i) = 1 + 1 = 2
        let i = Complex32::new(0.0, 1.0);
        let acc = Complex32::one().mul_acc_conj(i, i);
        assert_eq!(acc, Complex32::new(2.0, 0.0));

        // unconjugated: 1 + i*i = 0
        let acc = Complex32::one().mul_acc(i, i);
        assert_eq!(acc, Complex32::zero());
    }
}
