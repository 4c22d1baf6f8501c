//! Normalized solve outcome taxonomy.

/// Outcome of a solve, normalized from the engine's return code and the
/// simplex direction it ran with.
///
/// When the first phase is dual simplex, a primal-infeasible report cannot
/// be told apart from an unbounded one, hence `InfeasibleOrUnbounded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinearResult {
    /// An optimal solution was found.
    Optimal,
    /// The primal problem is infeasible.
    InfeasiblePrimal,
    /// Either infeasible or unbounded; the engine cannot distinguish.
    InfeasibleOrUnbounded,
    /// The primal problem is unbounded.
    UnboundedPrimal,
    /// The dual problem is unbounded.
    UnboundedDual,
    /// No classification applies (abort, timeout, numeric failure, or no
    /// solve has completed).
    Invalid,
}

impl LinearResult {
    /// True only for a proven optimum.
    pub fn is_optimal(self) -> bool {
        matches!(self, LinearResult::Optimal)
    }

    /// Result as a stable lowercase string.
    pub fn as_str(self) -> &'static str {
        match self {
            LinearResult::Optimal => "optimal",
            LinearResult::InfeasiblePrimal => "infeasible_primal",
            LinearResult::InfeasibleOrUnbounded => "infeasible_or_unbounded",
            LinearResult::UnboundedPrimal => "unbounded_primal",
            LinearResult::UnboundedDual => "unbounded_dual",
            LinearResult::Invalid => "invalid",
        }
    }
}

impl std::fmt::Display for LinearResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_optimal() {
        assert!(LinearResult::Optimal.is_optimal());
        assert!(!LinearResult::InfeasiblePrimal.is_optimal());
        assert!(!LinearResult::Invalid.is_optimal());
    }

    #[test]
    fn test_display_strings() {
        assert_eq!(LinearResult::Optimal.to_string(), "optimal");
        assert_eq!(
            LinearResult::InfeasibleOrUnbounded.to_string(),
            "infeasible_or_unbounded"
        );
        assert_eq!(LinearResult::UnboundedDual.to_string(), "unbounded_dual");
    }
}
