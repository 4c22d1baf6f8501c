//! Interface boundary to the native simplex/branch-and-bound engine.
//!
//! The trait mirrors the slice of the lp_solve C surface the adapter
//! needs. Columns and rows are 1-based, matching the engine; the ranging
//! vectors returned by [`LpEngine::rhs_ranging`] and
//! [`LpEngine::objective_ranging`] are 0-based (native index minus one).

use salix_core::Sense;
use salix_solver::LpConfig;

/// Native constraint forms, using the engine's own codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ConstraintKind {
    /// Unrestricted row; keeps row numbering aligned when a model row has
    /// no finite bound.
    Free = 0,
    LessEqual = 1,
    GreaterEqual = 2,
    Equal = 3,
}

/// Special-ordered-set type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum SosType {
    Type1 = 1,
    Type2 = 2,
}

/// Raw engine return codes, normalized from the C integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveReturn {
    Optimal,
    Suboptimal,
    Infeasible,
    Unbounded,
    Degenerate,
    NumericalFailure,
    UserAbort,
    Timeout,
    OutOfMemory,
    Presolved,
    ProcedureFailure,
    ProcedureBreak,
    FeasibleFound,
    NoFeasibleFound,
    Unknown(i32),
}

impl SolveReturn {
    /// Map a raw engine return code.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => SolveReturn::Optimal,
            1 => SolveReturn::Suboptimal,
            2 => SolveReturn::Infeasible,
            3 => SolveReturn::Unbounded,
            4 => SolveReturn::Degenerate,
            5 => SolveReturn::NumericalFailure,
            6 => SolveReturn::UserAbort,
            7 => SolveReturn::Timeout,
            -2 => SolveReturn::OutOfMemory,
            9 => SolveReturn::Presolved,
            10 => SolveReturn::ProcedureFailure,
            11 => SolveReturn::ProcedureBreak,
            12 => SolveReturn::FeasibleFound,
            13 => SolveReturn::NoFeasibleFound,
            other => SolveReturn::Unknown(other),
        }
    }
}

/// Simplex direction for phase 1 and phase 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum SimplexType {
    PrimalPrimal = 5,
    DualPrimal = 6,
    PrimalDual = 9,
    DualDual = 10,
}

impl SimplexType {
    /// True when phase 1 runs the primal simplex on the primal problem.
    pub fn is_primal_primal(self) -> bool {
        matches!(self, SimplexType::PrimalPrimal)
    }
}

/// Statistics readable from the engine after a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineStatistic {
    TotalIterations,
    TotalNodes,
    ObjectiveBound,
    WorkingObjective,
    MaxPivot,
    ElapsedSeconds,
    PresolveLoops,
    MipGap,
    SolutionCount,
}

/// Dual values and right-hand-side ranging arrays, rows first then
/// columns, 0-based.
#[derive(Debug, Clone, Default)]
pub struct RhsRanging {
    pub duals: Vec<f64>,
    pub lowers: Vec<f64>,
    pub uppers: Vec<f64>,
}

/// Model export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    Lp,
    Mps,
    FreeMps,
}

/// Errors raised at the engine boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// The engine could not allocate a model.
    CreationFailed { columns: usize },
    /// Index and value slices differ in length.
    LengthMismatch { indices: usize, values: usize },
    /// A column index is outside the model.
    ColumnOutOfBounds { column: usize, count: usize },
    /// An export or parameter-file call failed.
    ExportFailed { target: String },
}

impl EngineError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::CreationFailed { .. } => "ENGINE_CREATION_FAILED",
            EngineError::LengthMismatch { .. } => "ENGINE_LENGTH_MISMATCH",
            EngineError::ColumnOutOfBounds { .. } => "ENGINE_COLUMN_OUT_OF_BOUNDS",
            EngineError::ExportFailed { .. } => "ENGINE_EXPORT_FAILED",
        }
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::CreationFailed { columns } => write!(
                f,
                "[{}] Engine could not allocate a model with {} columns",
                self.code(),
                columns
            ),
            EngineError::LengthMismatch { indices, values } => write!(
                f,
                "[{}] Index slice ({}) and value slice ({}) differ in length",
                self.code(),
                indices,
                values
            ),
            EngineError::ColumnOutOfBounds { column, count } => write!(
                f,
                "[{}] Column {} outside model of {} columns",
                self.code(),
                column,
                count
            ),
            EngineError::ExportFailed { target } => {
                write!(f, "[{}] Export to {:?} failed", self.code(), target)
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// The native engine, specified at its interface boundary.
///
/// Implementations must tolerate the call order the translator uses: bulk
/// row mode on, variables configured, objective and constraints added,
/// bulk row mode off, then configure and solve.
pub trait LpEngine: Send + 'static {
    /// Allocate a model with the given number of columns and no rows.
    fn create(columns: usize) -> Result<Self, EngineError>
    where
        Self: Sized;

    /// The value this engine instance treats as infinity.
    fn infinite(&self) -> f64;

    /// Toggle bulk row insertion mode.
    fn set_row_mode(&mut self, enabled: bool);

    fn set_integer(&mut self, column: usize, integral: bool);
    fn is_integer(&self, column: usize) -> bool;

    fn set_bounds(&mut self, column: usize, lower: f64, upper: f64);
    fn set_lower_bound(&mut self, column: usize, lower: f64);
    fn set_upper_bound(&mut self, column: usize, upper: f64);
    fn set_unbounded(&mut self, column: usize);
    fn lower_bound(&self, column: usize) -> f64;
    fn upper_bound(&self, column: usize) -> f64;

    fn set_direction(&mut self, sense: Sense);
    fn is_maximizing(&self) -> bool;

    /// Replace the objective with the given sparse coefficients.
    fn set_objective(&mut self, columns: &[usize], values: &[f64]) -> Result<(), EngineError>;

    /// Append a constraint row; returns its 1-based row index.
    fn add_constraint(
        &mut self,
        columns: &[usize],
        values: &[f64],
        kind: ConstraintKind,
        rhs: f64,
    ) -> Result<usize, EngineError>;

    /// Widen a one-sided constraint into a range of the given width.
    fn set_rhs_range(&mut self, row: usize, range: f64);

    /// Append a special ordered set with the given sequence number.
    fn add_sos(
        &mut self,
        kind: SosType,
        sequence: usize,
        columns: &[usize],
        weights: &[f64],
    ) -> Result<(), EngineError>;

    /// Apply tuning parameters; `None` fields are left at engine defaults.
    fn configure(&mut self, config: &LpConfig);

    /// Run the solve. The abort callback is polled periodically; a `true`
    /// return makes the engine stop with [`SolveReturn::UserAbort`].
    fn solve(&mut self, abort: &mut dyn FnMut() -> bool) -> SolveReturn;

    fn row_count(&self) -> usize;
    fn column_count(&self) -> usize;
    /// Row count before presolve reductions.
    fn original_row_count(&self) -> usize;
    /// Column count before presolve reductions.
    fn original_column_count(&self) -> usize;

    /// Primal solution in the layout `[objective, rows 1..=R, columns
    /// 1..=C]`, or `None` when no solution is available.
    fn primal_solution(&self) -> Option<Vec<f64>>;

    /// Objective value of the last solution.
    fn objective_value(&self) -> f64;

    /// Dual value at a 1-based index (rows first, then columns offset by
    /// the row count).
    fn dual_result(&self, index: usize) -> Option<f64>;

    /// Objective-coefficient ranging arrays (lowers, uppers), or `None`
    /// when sensitivity data was not computed.
    fn objective_ranging(&self) -> Option<(Vec<f64>, Vec<f64>)>;

    /// Right-hand-side ranging arrays, or `None` when sensitivity data
    /// was not computed.
    fn rhs_ranging(&self) -> Option<RhsRanging>;

    /// Current objective coefficient of a column.
    fn objective_coefficient(&self, column: usize) -> f64;

    fn rhs(&self, row: usize) -> f64;
    fn rhs_range(&self, row: usize) -> f64;
    fn constraint_kind(&self, row: usize) -> ConstraintKind;

    fn simplex_type(&self) -> SimplexType;

    fn statistic(&self, statistic: EngineStatistic) -> f64;

    fn write_model(&self, format: ModelFormat, path: &str) -> Result<(), EngineError>;
    fn write_params(&self, path: &str, options: &str) -> Result<(), EngineError>;
    fn read_params(&mut self, path: &str, options: &str) -> Result<(), EngineError>;
    /// Export through an external language interface library.
    fn write_external(&self, library: &str, path: &str, options: &str)
        -> Result<(), EngineError>;
    fn debug_dump(&self, path: &str) -> Result<(), EngineError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_return_from_code() {
        assert_eq!(SolveReturn::from_code(0), SolveReturn::Optimal);
        assert_eq!(SolveReturn::from_code(2), SolveReturn::Infeasible);
        assert_eq!(SolveReturn::from_code(3), SolveReturn::Unbounded);
        assert_eq!(SolveReturn::from_code(6), SolveReturn::UserAbort);
        assert_eq!(SolveReturn::from_code(7), SolveReturn::Timeout);
        assert_eq!(SolveReturn::from_code(-2), SolveReturn::OutOfMemory);
        assert_eq!(SolveReturn::from_code(13), SolveReturn::NoFeasibleFound);
        assert_eq!(SolveReturn::from_code(99), SolveReturn::Unknown(99));
    }

    #[test]
    fn test_simplex_type_direction() {
        assert!(SimplexType::PrimalPrimal.is_primal_primal());
        assert!(!SimplexType::DualPrimal.is_primal_primal());
        assert!(!SimplexType::PrimalDual.is_primal_primal());
        assert!(!SimplexType::DualDual.is_primal_primal());
    }

    #[test]
    fn test_engine_error_display() {
        let err = EngineError::LengthMismatch {
            indices: 3,
            values: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("ENGINE_LENGTH_MISMATCH"));
        assert!(msg.contains('3'));
    }
}
