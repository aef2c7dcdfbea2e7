use std::fmt;

use crate::domain::ModelKind;

/// Failure taxonomy of the fitting core.
///
/// All three conditions are detected at the kernel/cleaning boundary and
/// propagated to the caller; nothing in the core panics on bad data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FitError {
    /// Fewer than two samples reached the kernel (originally, or after
    /// zero-pair removal).
    InsufficientData { got: usize },
    /// All x values identical: the slope denominator is zero and the
    /// closed-form solution is undefined.
    DegenerateFit,
    /// A non-positive value would have entered a logarithmic transform.
    InvalidDomain {
        model: ModelKind,
        axis: &'static str,
        value: f64,
    },
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientData { got } => {
                write!(f, "insufficient data: need at least 2 samples, got {got}")
            }
            Self::DegenerateFit => {
                write!(f, "degenerate fit: all x values are identical (zero variance)")
            }
            Self::InvalidDomain { model, axis, value } => {
                write!(
                    f,
                    "invalid domain for {} fit: {axis} = {value} cannot be log-transformed",
                    model.display_name()
                )
            }
        }
    }
}

impl std::error::Error for FitError {}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<FitError> for AppError {
    fn from(err: FitError) -> Self {
        // Data problems exit 3, numeric degeneracy exits 4.
        let exit_code = match err {
            FitError::InsufficientData { .. } | FitError::InvalidDomain { .. } => 3,
            FitError::DegenerateFit => 4,
        };
        Self::new(exit_code, err.to_string())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
