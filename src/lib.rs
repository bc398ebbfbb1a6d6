//! __refblas2__ is a reference implementation of the Level-2 BLAS kernels
//! in pure Rust, for single and double precision real and complex data.
//!
//! The kernels implement the dense matrix-vector operations
//!
//! | routine | operation |
//! |---|---|
//! | `gemv` | $y \leftarrow \alpha\\,\mathrm{op}(A)x + \beta y$ |
//! | `ger`, `geru` | $A \leftarrow \alpha x y^\top + A$ |
//! | `gerc` | $A \leftarrow \alpha x y^H + A$ |
//! | `symv`, `hemv` | $y \leftarrow \alpha A x + \beta y$, $A$ symmetric / Hermitian |
//! | `syr`, `her` | $A \leftarrow \alpha x x^\top + A$ / $A \leftarrow \alpha x x^H + A$ |
//! | `syr2` | $A \leftarrow \alpha (x y^\top + y x^\top) + A$ |
//! | `her2` | $A \leftarrow \alpha x y^H + \bar\alpha y x^H + A$ |
//! | `trmv` | $x \leftarrow \mathrm{op}(A)x$, $A$ triangular |
//! | `trsv` | $x \leftarrow \mathrm{op}(A)^{-1}x$, $A$ triangular |
//!
//! with the numerical conventions of the reference BLAS: row-major and
//! column-major storage with arbitrary leading dimensions, strided
//! vectors with positive or negative increments, and symmetric,
//! Hermitian and triangular matrices stored in one triangle only.
//!
//! ## Interfaces
//!
//! * [`level2`] provides one generic function per kernel family, over any
//!   [`BlasScalar`] (`f32`, `f64`, `Complex<f32>`, `Complex<f64>`).
//!   Hermitian kernels accept complex types only.
//!
//! * [`cblas`] provides precision-specific functions with the usual CBLAS
//!   names (`dgemv`, `zher2`, ...).
//!
//! * [`Level2`] is an engine that applies non-default [`Level2Settings`]
//!   and can report argument errors to a configurable print target.
//!
//! All functions return a [`BlasError`] identifying the routine and the
//! CBLAS position of the first invalid argument.  Nothing is written when
//! an error is returned.
//!
//! ```
//! use refblas2::{level2, MatrixOrder, MatrixShape};
//!
//! #[rustfmt::skip]
//! let a = [1., 2.,
//!          3., 4.];
//! let x = [1., 1.];
//! let mut y = [0., 0.];
//!
//! level2::gemv(MatrixOrder::RowMajor, MatrixShape::N, 2, 2, 1.0, &a, 2, &x, 1, 0.0, &mut y, 1)?;
//! assert_eq!(y, [3., 7.]);
//! # Ok::<(), refblas2::BlasError>(())
//! ```

//Rust hates greek characters
#![allow(confusable_idents)]

pub mod algebra;
pub mod cblas;
pub mod io;
pub mod level2;
mod settings;

pub use algebra::{
    BlasComplex, BlasError, BlasReal, BlasScalar, MatrixDiagonal, MatrixOrder, MatrixShape,
    MatrixTriangle, Routine,
};
#[cfg(feature = "serde")]
pub use algebra::SettingsError;
pub use io::ConfigurablePrintTarget;
pub use level2::Level2;
pub use settings::{Level2Settings, Level2SettingsBuilder};
