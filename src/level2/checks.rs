// Argument validation shared by all kernels.  Every check returns the
// error for the 1-based CBLAS position of the argument it inspects, and
// kernels call them in positional order so that the first bad argument
// is the one reported.

use crate::algebra::*;

pub(crate) struct ArgCheck {
    routine: Routine,
}

impl ArgCheck {
    pub(crate) fn new<T: BlasScalar>(name: &'static str) -> Self {
        Self {
            routine: Routine {
                prefix: T::PREFIX,
                name,
            },
        }
    }

    /// conjugate transposition is only meaningful for complex data
    pub(crate) fn shape<T: BlasScalar>(
        &self,
        shape: MatrixShape,
        position: usize,
    ) -> Result<(), BlasError> {
        if shape == MatrixShape::H && !T::IS_COMPLEX {
            return Err(BlasError::InvalidOption {
                routine: self.routine,
                position,
            });
        }
        Ok(())
    }

    pub(crate) fn ld(
        &self,
        order: MatrixOrder,
        nrows: usize,
        ncols: usize,
        ld: usize,
        position: usize,
    ) -> Result<(), BlasError> {
        let min = MatrixLayout::min_leading_dim(order, nrows, ncols);
        if ld < min {
            return Err(BlasError::InvalidLeadingDimension {
                routine: self.routine,
                position,
                ld,
                min,
            });
        }
        Ok(())
    }

    pub(crate) fn inc(&self, inc: isize, position: usize) -> Result<(), BlasError> {
        if inc == 0 {
            return Err(BlasError::InvalidIncrement {
                routine: self.routine,
                position,
            });
        }
        Ok(())
    }

    /// must follow a successful `ld` check for the same matrix
    pub(crate) fn matrix_len(
        &self,
        order: MatrixOrder,
        nrows: usize,
        ncols: usize,
        ld: usize,
        found: usize,
        position: usize,
    ) -> Result<(), BlasError> {
        let required = MatrixLayout::new(order, nrows, ncols, ld).required_len();
        self.len(required, found, position)
    }

    pub(crate) fn vector_len(
        &self,
        n: usize,
        inc: isize,
        found: usize,
        position: usize,
    ) -> Result<(), BlasError> {
        self.len(strided_len(n, inc), found, position)
    }

    // an unaddressable length is reported as required = usize::MAX
    fn len(
        &self,
        required: Option<usize>,
        found: usize,
        position: usize,
    ) -> Result<(), BlasError> {
        match required {
            Some(required) if found >= required => Ok(()),
            _ => Err(BlasError::BufferTooShort {
                routine: self.routine,
                position,
                required: required.unwrap_or(usize::MAX),
                found,
            }),
        }
    }

    pub(crate) fn singular(&self, index: usize) -> BlasError {
        BlasError::SingularMatrix {
            routine: self.routine,
            index,
        }
    }
}
