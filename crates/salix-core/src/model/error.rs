//! Model error types.

use crate::ids::Vid;

/// Errors that can occur during model operations
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Id does not name a variable
    UnknownVariable(Vid),
    /// Id does not name a row
    UnknownRow(Vid),
    /// Invalid bounds (NaN or lower > upper)
    InvalidBounds { lower: f64, upper: f64 },
    /// Coefficient is NaN or infinite
    InvalidCoefficient { coefficient: f64 },
    /// A goal is already present
    GoalAlreadySet,
}

impl ModelError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            ModelError::UnknownVariable(_) => "VARIABLE_UNKNOWN_ID",
            ModelError::UnknownRow(_) => "ROW_UNKNOWN_ID",
            ModelError::InvalidBounds { .. } => "BOUNDS_INVALID",
            ModelError::InvalidCoefficient { .. } => "COEFFICIENT_INVALID",
            ModelError::GoalAlreadySet => "GOAL_ALREADY_SET",
        }
    }
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::UnknownVariable(id) => write!(
                f,
                "[{}] Id {} does not name a variable",
                self.code(),
                id.inner()
            ),
            ModelError::UnknownRow(id) => {
                write!(f, "[{}] Id {} does not name a row", self.code(), id.inner())
            }
            ModelError::InvalidBounds { lower, upper } => write!(
                f,
                "[{}] Bounds invalid: lower ({}) > upper ({})",
                self.code(),
                lower,
                upper
            ),
            ModelError::InvalidCoefficient { coefficient } => write!(
                f,
                "[{}] Coefficient must be finite (got {})",
                self.code(),
                coefficient
            ),
            ModelError::GoalAlreadySet => {
                write!(f, "[{}] Model allows only one goal", self.code())
            }
        }
    }
}

impl std::error::Error for ModelError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unknown_variable() {
        let err = ModelError::UnknownVariable(Vid::new(42));
        let msg = format!("{}", err);
        assert!(msg.contains("VARIABLE_UNKNOWN_ID"));
        assert!(msg.contains("42"));
    }

    #[test]
    fn test_error_display_invalid_bounds() {
        let err = ModelError::InvalidBounds {
            lower: 5.0,
            upper: 1.0,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("BOUNDS_INVALID"));
    }

    #[test]
    fn test_error_code() {
        assert_eq!(ModelError::GoalAlreadySet.code(), "GOAL_ALREADY_SET");
        assert_eq!(
            ModelError::InvalidCoefficient { coefficient: f64::NAN }.code(),
            "COEFFICIENT_INVALID"
        );
    }
}
