//! Scalar traits, storage views and option types used by the kernels.
//!
//! Kernels are written once against the [`BlasScalar`] trait and read
//! matrix entries through [`DenseMatrix`] views, so that storage order,
//! transposition and implicit triangles never appear in the kernel loops.

mod dense;
mod error_types;
mod floats;
mod layout;
mod matrix_types;
mod scalar;
mod strided;

pub use dense::*;
pub use error_types::*;
pub use floats::*;
pub use layout::*;
pub use matrix_types::*;
pub use scalar::*;
pub use strided::*;
