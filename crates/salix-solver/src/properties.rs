//! String keys for the statistics query surface.
//!
//! Callers pass these to `get_property`; unknown keys are rejected with
//! `SolverError::UnsupportedProperty`.

/// Total simplex iterations over the last solve.
pub const ITERATION_COUNT: &str = "IterationCount";
/// Branch-and-bound nodes explored.
pub const NODE_COUNT: &str = "NodeCount";
/// Current objective bound used for branch cutoff.
pub const GOAL_BOUND: &str = "GoalBound";
/// Working objective value.
pub const GOAL_VALUE: &str = "GoalValue";
/// Maximum pivots between refactorizations.
pub const PIVOT_COUNT: &str = "PivotCount";
/// Wall-clock seconds spent in the last solve.
pub const ELAPSED_TIME: &str = "ElapsedTime";
/// Presolve loops performed.
pub const PRESOLVE_LOOPS: &str = "PresolveLoops";
/// Achieved MIP gap.
pub const MIP_GAP: &str = "MipGap";
/// Lower bound of a variable (requires an id).
pub const VARIABLE_LOWER_BOUND: &str = "VariableLowerBound";
/// Upper bound of a variable (requires an id).
pub const VARIABLE_UPPER_BOUND: &str = "VariableUpperBound";
