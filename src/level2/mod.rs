//! Level-2 kernels, generic over the element type.
//!
//! Every function takes CBLAS-ordered arguments, with `usize` dimensions
//! and leading dimensions and signed `isize` increments.  A negative
//! increment walks the vector from the high end of its buffer.
//! Arguments are validated before anything is written, and the first
//! invalid argument is reported by its CBLAS position.
//!
//! These functions always use the default [`Level2Settings`](crate::Level2Settings).
//! Use a [`Level2`] engine to change the β = 0 policy, enable singularity
//! checks in `trsv` or report errors to a print target.

#![allow(clippy::too_many_arguments)]

mod checks;
mod engine;
mod gemv;
mod ger;
mod her;
mod symv;
mod syr;
mod trmv;
mod trsv;

pub use engine::Level2;
pub use gemv::gemv;
pub use ger::{ger, gerc, geru};
pub use her::{her, her2};
pub use symv::{hemv, symv};
pub use syr::{syr, syr2};
pub use trmv::trmv;
pub use trsv::trsv;
