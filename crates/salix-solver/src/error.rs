//! Solver error types.

/// Error type for solver operations.
///
/// Infeasible, unbounded, timeout, and abort outcomes are not errors;
/// they are reported through `LinearResult`.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Model has no variables.
    EmptyModel,
    /// The engine could not allocate a native model.
    NativeCreation { message: String },
    /// Unknown key on the statistics query surface.
    UnsupportedProperty { name: String },
    /// The native model has already been released.
    Disposed,
    /// Engine-level failure (bad lengths, export failure, ...).
    Engine { message: String },
}

impl SolverError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::EmptyModel => "MODEL_EMPTY",
            SolverError::NativeCreation { .. } => "NATIVE_CREATION_FAILED",
            SolverError::UnsupportedProperty { .. } => "PROPERTY_UNSUPPORTED",
            SolverError::Disposed => "SOLVER_DISPOSED",
            SolverError::Engine { .. } => "ENGINE_FAILURE",
        }
    }
}

impl std::fmt::Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverError::EmptyModel => write!(f, "[{}] Model has no variables", self.code()),
            SolverError::NativeCreation { message } => {
                write!(f, "[{}] Native model creation failed: {}", self.code(), message)
            }
            SolverError::UnsupportedProperty { name } => {
                write!(f, "[{}] Property {:?} is not supported", self.code(), name)
            }
            SolverError::Disposed => {
                write!(f, "[{}] Native model has been released", self.code())
            }
            SolverError::Engine { message } => {
                write!(f, "[{}] Engine failure: {}", self.code(), message)
            }
        }
    }
}

impl std::error::Error for SolverError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_empty_model() {
        let msg = SolverError::EmptyModel.to_string();
        assert!(msg.contains("MODEL_EMPTY"));
        assert!(msg.contains("no variables"));
    }

    #[test]
    fn test_error_display_unsupported_property() {
        let err = SolverError::UnsupportedProperty {
            name: "WarmStarts".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("PROPERTY_UNSUPPORTED"));
        assert!(msg.contains("WarmStarts"));
    }

    #[test]
    fn test_error_code() {
        assert_eq!(SolverError::Disposed.code(), "SOLVER_DISPOSED");
        assert_eq!(
            SolverError::NativeCreation {
                message: String::new()
            }
            .code(),
            "NATIVE_CREATION_FAILED"
        );
    }
}
