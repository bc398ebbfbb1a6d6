use std::fmt;
use thiserror::Error;

/// Name of a precision-specific kernel, e.g. `dgemv` or `cher2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Routine {
    /// precision prefix: `s`, `d`, `c` or `z`
    pub prefix: char,
    /// precision independent part of the name
    pub name: &'static str,
}

impl fmt::Display for Routine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.name)
    }
}

/// Error type returned by the Level-2 kernels.
///
/// Argument errors carry the 1-based position of the offending
/// parameter in the CBLAS calling sequence (the storage order is
/// parameter 1).  When an error is returned, no output has been modified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlasError {
    /// Leading dimension smaller than the contiguous extent of the matrix
    #[error("{routine}: parameter {position} (leading dimension) is {ld}, but must be at least {min}")]
    InvalidLeadingDimension {
        routine: Routine,
        position: usize,
        ld: usize,
        min: usize,
    },
    /// Vector increment is zero
    #[error("{routine}: parameter {position} (increment) must be nonzero")]
    InvalidIncrement { routine: Routine, position: usize },
    /// Option not supported for this element type
    #[error("{routine}: parameter {position} is not a valid option for this routine")]
    InvalidOption { routine: Routine, position: usize },
    /// Slice too short to hold the matrix or vector described by the arguments.
    /// `required` saturates at `usize::MAX` when the described extent overflows.
    #[error("{routine}: parameter {position} needs at least {required} elements, but has {found}")]
    BufferTooShort {
        routine: Routine,
        position: usize,
        required: usize,
        found: usize,
    },
    /// Exactly zero pivot in a triangular solve.  Only reported when
    /// singularity checks are enabled in the settings.
    #[error("{routine}: zero pivot at diagonal index {index}")]
    SingularMatrix { routine: Routine, index: usize },
}

impl BlasError {
    /// the routine that raised the error
    pub fn routine(&self) -> Routine {
        match self {
            BlasError::InvalidLeadingDimension { routine, .. }
            | BlasError::InvalidIncrement { routine, .. }
            | BlasError::InvalidOption { routine, .. }
            | BlasError::BufferTooShort { routine, .. }
            | BlasError::SingularMatrix { routine, .. } => *routine,
        }
    }

    /// position of the offending parameter, if this is an argument error
    pub fn position(&self) -> Option<usize> {
        match self {
            BlasError::InvalidLeadingDimension { position, .. }
            | BlasError::InvalidIncrement { position, .. }
            | BlasError::InvalidOption { position, .. }
            | BlasError::BufferTooShort { position, .. } => Some(*position),
            BlasError::SingularMatrix { .. } => None,
        }
    }

    /// Reference BLAS `xerbla` style report line
    pub fn xerbla_message(&self) -> String {
        let name = self.routine().to_string().to_uppercase();
        match (self, self.position()) {
            (BlasError::SingularMatrix { index, .. }, _) => {
                format!(" ** {name}: zero pivot at diagonal index {index}")
            }
            (_, Some(k)) => {
                format!(" ** On entry to {name} parameter number {k} had an illegal value")
            }
            (_, None) => format!(" ** {name}: {self}"),
        }
    }
}

#[cfg(feature = "serde")]
#[derive(Error, Debug)]
/// Error type returned when loading or saving settings.
pub enum SettingsError {
    /// Settings could not be parsed or serialized
    #[error("Malformed settings: {0}")]
    Json(#[from] serde_json::Error),
    /// Underlying reader or writer failed
    #[error("Settings I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
