//! Scripted in-memory engine for tests.
//!
//! Records every call, mirrors the real engine's defaults (columns start
//! at `[0, +inf)`, rows append 1-based), and computes row activities and
//! the objective honestly from a scripted primal point. Solve outcomes,
//! duals, and ranging arrays come from the script.

use crate::engine::{
    ConstraintKind, EngineError, EngineStatistic, LpEngine, ModelFormat, RhsRanging, SimplexType,
    SolveReturn, SosType,
};
use salix_core::Sense;
use salix_solver::LpConfig;

const FIXTURE_INFINITE: f64 = 1.0e30;

/// What the fixture should do when solved.
#[derive(Debug, Clone)]
pub struct FixtureScript {
    /// Return code handed back by `solve`.
    pub return_code: SolveReturn,
    /// Simplex direction the engine reports.
    pub simplex: SimplexType,
    /// Primal point per column; zeros when absent.
    pub primal: Option<Vec<f64>>,
    /// Force `primal_solution` to report nothing even after an optimal
    /// return.
    pub fail_primal: bool,
    /// Dual values, rows first then columns, 0-based.
    pub duals: Option<Vec<f64>>,
    /// Objective-coefficient ranging (lowers, uppers), 0-based by column.
    pub objective_ranging: Option<(Vec<f64>, Vec<f64>)>,
    /// Right-hand-side ranging arrays.
    pub rhs_ranging: Option<RhsRanging>,
    /// How often the abort callback is polled during a normal solve.
    pub abort_polls: usize,
    /// Keep polling the abort callback until it returns true.
    pub solve_until_abort: bool,
    /// Statistic values served by `statistic`.
    pub statistics: Vec<(EngineStatistic, f64)>,
}

impl Default for FixtureScript {
    fn default() -> Self {
        Self {
            return_code: SolveReturn::Optimal,
            simplex: SimplexType::DualPrimal,
            primal: None,
            fail_primal: false,
            duals: None,
            objective_ranging: None,
            rhs_ranging: None,
            abort_polls: 1,
            solve_until_abort: false,
            statistics: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
struct ColumnRec {
    lower: f64,
    upper: f64,
    integer: bool,
}

impl Default for ColumnRec {
    fn default() -> Self {
        Self {
            lower: 0.0,
            upper: f64::INFINITY,
            integer: false,
        }
    }
}

/// A recorded constraint row.
#[derive(Debug, Clone)]
pub struct ConstraintRec {
    pub columns: Vec<usize>,
    pub values: Vec<f64>,
    pub kind: ConstraintKind,
    pub rhs: f64,
    pub range: f64,
}

/// A recorded special ordered set.
#[derive(Debug, Clone)]
pub struct SosRec {
    pub kind: SosType,
    pub sequence: usize,
    pub columns: Vec<usize>,
    pub weights: Vec<f64>,
}

/// Scripted engine double.
#[derive(Debug)]
pub struct FixtureEngine {
    columns: Vec<ColumnRec>,
    pub constraints: Vec<ConstraintRec>,
    pub sos: Vec<SosRec>,
    objective: Vec<f64>,
    maximize: bool,
    solved: bool,
    script: FixtureScript,
    /// Call log for order-sensitive assertions.
    pub calls: Vec<String>,
    /// Timeout the last `configure` applied, after the guard.
    pub applied_timeout: Option<u64>,
    /// Whether the last `configure` requested sensitivity data.
    pub sensitivity_requested: bool,
}

impl FixtureEngine {
    /// Engine with the given column count and a script of choice.
    pub fn scripted(columns: usize, script: FixtureScript) -> Self {
        Self {
            columns: vec![ColumnRec::default(); columns],
            constraints: Vec::new(),
            sos: Vec::new(),
            objective: vec![0.0; columns],
            maximize: false,
            solved: false,
            script,
            calls: Vec::new(),
            applied_timeout: None,
            sensitivity_requested: false,
        }
    }

    fn record(&mut self, call: String) {
        self.calls.push(call);
    }

    fn column(&self, column: usize) -> &ColumnRec {
        &self.columns[column - 1]
    }

    fn check_entries(&self, columns: &[usize], values: &[f64]) -> Result<(), EngineError> {
        if columns.len() != values.len() {
            return Err(EngineError::LengthMismatch {
                indices: columns.len(),
                values: values.len(),
            });
        }
        for &column in columns {
            if column == 0 || column > self.columns.len() {
                return Err(EngineError::ColumnOutOfBounds {
                    column,
                    count: self.columns.len(),
                });
            }
        }
        Ok(())
    }

    fn primal_point(&self) -> Vec<f64> {
        match &self.script.primal {
            Some(point) => point.clone(),
            None => vec![0.0; self.columns.len()],
        }
    }

    fn has_solution(&self) -> bool {
        self.solved
            && !self.script.fail_primal
            && matches!(
                self.script.return_code,
                SolveReturn::Optimal | SolveReturn::Suboptimal | SolveReturn::FeasibleFound
            )
    }
}

impl LpEngine for FixtureEngine {
    fn create(columns: usize) -> Result<Self, EngineError> {
        Ok(Self::scripted(columns, FixtureScript::default()))
    }

    fn infinite(&self) -> f64 {
        FIXTURE_INFINITE
    }

    fn set_row_mode(&mut self, enabled: bool) {
        self.record(format!("set_row_mode({enabled})"));
    }

    fn set_integer(&mut self, column: usize, integral: bool) {
        self.record(format!("set_integer({column}, {integral})"));
        self.columns[column - 1].integer = integral;
    }

    fn is_integer(&self, column: usize) -> bool {
        self.column(column).integer
    }

    fn set_bounds(&mut self, column: usize, lower: f64, upper: f64) {
        self.record(format!("set_bounds({column}, {lower}, {upper})"));
        self.columns[column - 1].lower = lower;
        self.columns[column - 1].upper = upper;
    }

    fn set_lower_bound(&mut self, column: usize, lower: f64) {
        self.record(format!("set_lower_bound({column}, {lower})"));
        self.columns[column - 1].lower = lower;
    }

    fn set_upper_bound(&mut self, column: usize, upper: f64) {
        self.record(format!("set_upper_bound({column}, {upper})"));
        self.columns[column - 1].upper = upper;
    }

    fn set_unbounded(&mut self, column: usize) {
        self.record(format!("set_unbounded({column})"));
        self.columns[column - 1].lower = f64::NEG_INFINITY;
        self.columns[column - 1].upper = f64::INFINITY;
    }

    fn lower_bound(&self, column: usize) -> f64 {
        self.column(column).lower
    }

    fn upper_bound(&self, column: usize) -> f64 {
        self.column(column).upper
    }

    fn set_direction(&mut self, sense: Sense) {
        self.record(format!("set_direction({sense:?})"));
        self.maximize = sense == Sense::Maximize;
    }

    fn is_maximizing(&self) -> bool {
        self.maximize
    }

    fn set_objective(&mut self, columns: &[usize], values: &[f64]) -> Result<(), EngineError> {
        self.check_entries(columns, values)?;
        self.record(format!("set_objective({columns:?})"));
        self.objective = vec![0.0; self.columns.len()];
        for (column, value) in columns.iter().zip(values) {
            self.objective[column - 1] = *value;
        }
        Ok(())
    }

    fn add_constraint(
        &mut self,
        columns: &[usize],
        values: &[f64],
        kind: ConstraintKind,
        rhs: f64,
    ) -> Result<usize, EngineError> {
        self.check_entries(columns, values)?;
        self.record(format!("add_constraint({columns:?}, {kind:?}, {rhs})"));
        self.constraints.push(ConstraintRec {
            columns: columns.to_vec(),
            values: values.to_vec(),
            kind,
            rhs,
            range: FIXTURE_INFINITE,
        });
        Ok(self.constraints.len())
    }

    fn set_rhs_range(&mut self, row: usize, range: f64) {
        self.record(format!("set_rhs_range({row}, {range})"));
        self.constraints[row - 1].range = range;
    }

    fn add_sos(
        &mut self,
        kind: SosType,
        sequence: usize,
        columns: &[usize],
        weights: &[f64],
    ) -> Result<(), EngineError> {
        self.check_entries(columns, weights)?;
        self.record(format!("add_sos({kind:?}, {sequence}, {columns:?})"));
        self.sos.push(SosRec {
            kind,
            sequence,
            columns: columns.to_vec(),
            weights: weights.to_vec(),
        });
        Ok(())
    }

    fn configure(&mut self, config: &LpConfig) {
        self.record("configure".to_string());
        self.applied_timeout = config.effective_timeout();
        self.sensitivity_requested = config.sensitivity;
    }

    fn solve(&mut self, abort: &mut dyn FnMut() -> bool) -> SolveReturn {
        self.record("solve".to_string());
        if self.script.solve_until_abort {
            loop {
                if abort() {
                    return SolveReturn::UserAbort;
                }
                std::thread::yield_now();
            }
        }
        for _ in 0..self.script.abort_polls {
            if abort() {
                return SolveReturn::UserAbort;
            }
        }
        self.solved = true;
        self.script.return_code
    }

    fn row_count(&self) -> usize {
        self.constraints.len()
    }

    fn column_count(&self) -> usize {
        self.columns.len()
    }

    fn original_row_count(&self) -> usize {
        self.constraints.len()
    }

    fn original_column_count(&self) -> usize {
        self.columns.len()
    }

    fn primal_solution(&self) -> Option<Vec<f64>> {
        if !self.has_solution() {
            return None;
        }
        let point = self.primal_point();
        let mut solution = Vec::with_capacity(1 + self.constraints.len() + point.len());
        solution.push(self.objective_value());
        for constraint in &self.constraints {
            let activity: f64 = constraint
                .columns
                .iter()
                .zip(&constraint.values)
                .map(|(column, value)| value * point[column - 1])
                .sum();
            solution.push(activity);
        }
        solution.extend_from_slice(&point);
        Some(solution)
    }

    fn objective_value(&self) -> f64 {
        if !self.solved {
            return 0.0;
        }
        self.primal_point()
            .iter()
            .zip(&self.objective)
            .map(|(x, c)| x * c)
            .sum()
    }

    fn dual_result(&self, index: usize) -> Option<f64> {
        self.script.duals.as_ref()?.get(index - 1).copied()
    }

    fn objective_ranging(&self) -> Option<(Vec<f64>, Vec<f64>)> {
        self.script.objective_ranging.clone()
    }

    fn rhs_ranging(&self) -> Option<RhsRanging> {
        self.script.rhs_ranging.clone()
    }

    fn objective_coefficient(&self, column: usize) -> f64 {
        self.objective[column - 1]
    }

    fn rhs(&self, row: usize) -> f64 {
        self.constraints[row - 1].rhs
    }

    fn rhs_range(&self, row: usize) -> f64 {
        self.constraints[row - 1].range
    }

    fn constraint_kind(&self, row: usize) -> ConstraintKind {
        self.constraints[row - 1].kind
    }

    fn simplex_type(&self) -> SimplexType {
        self.script.simplex
    }

    fn statistic(&self, statistic: EngineStatistic) -> f64 {
        self.script
            .statistics
            .iter()
            .find(|(key, _)| *key == statistic)
            .map(|(_, value)| *value)
            .unwrap_or(0.0)
    }

    fn write_model(&self, format: ModelFormat, path: &str) -> Result<(), EngineError> {
        // fixture never touches the filesystem
        let _ = (format, path);
        Ok(())
    }

    fn write_params(&self, _path: &str, _options: &str) -> Result<(), EngineError> {
        Ok(())
    }

    fn read_params(&mut self, path: &str, options: &str) -> Result<(), EngineError> {
        self.record(format!("read_params({path}, {options})"));
        Ok(())
    }

    fn write_external(
        &self,
        _library: &str,
        _path: &str,
        _options: &str,
    ) -> Result<(), EngineError> {
        Ok(())
    }

    fn debug_dump(&self, _path: &str) -> Result<(), EngineError> {
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_start_at_engine_defaults() {
        let engine = FixtureEngine::create(2).unwrap();
        assert_eq!(engine.lower_bound(1), 0.0);
        assert_eq!(engine.upper_bound(1), f64::INFINITY);
        assert!(!engine.is_integer(2));
    }

    #[test]
    fn test_primal_layout_and_activities() {
        let mut engine = FixtureEngine::scripted(
            2,
            FixtureScript {
                primal: Some(vec![2.0, 3.0]),
                ..FixtureScript::default()
            },
        );
        engine.set_objective(&[1, 2], &[1.0, 1.0]).unwrap();
        engine
            .add_constraint(&[1, 2], &[1.0, 2.0], ConstraintKind::LessEqual, 10.0)
            .unwrap();
        let code = engine.solve(&mut || false);
        assert_eq!(code, SolveReturn::Optimal);

        let solution = engine.primal_solution().unwrap();
        assert_eq!(solution.len(), 1 + 1 + 2);
        assert_eq!(solution[0], 5.0); // objective
        assert_eq!(solution[1], 8.0); // row activity
        assert_eq!(&solution[2..], &[2.0, 3.0]);
    }

    #[test]
    fn test_no_solution_before_solve() {
        let engine = FixtureEngine::create(1).unwrap();
        assert!(engine.primal_solution().is_none());
    }

    #[test]
    fn test_infeasible_return_has_no_solution() {
        let mut engine = FixtureEngine::scripted(
            1,
            FixtureScript {
                return_code: SolveReturn::Infeasible,
                ..FixtureScript::default()
            },
        );
        assert_eq!(engine.solve(&mut || false), SolveReturn::Infeasible);
        assert!(engine.primal_solution().is_none());
    }

    #[test]
    fn test_abort_poll_stops_solve() {
        let mut engine = FixtureEngine::scripted(
            1,
            FixtureScript {
                abort_polls: 3,
                ..FixtureScript::default()
            },
        );
        let mut polls = 0;
        let code = engine.solve(&mut || {
            polls += 1;
            polls == 2
        });
        assert_eq!(code, SolveReturn::UserAbort);
        assert_eq!(polls, 2);
        assert!(engine.primal_solution().is_none());
    }

    #[test]
    fn test_entry_validation() {
        let mut engine = FixtureEngine::create(2).unwrap();
        let err = engine.set_objective(&[1, 2], &[1.0]).unwrap_err();
        assert!(matches!(err, EngineError::LengthMismatch { .. }));
        let err = engine
            .add_constraint(&[3], &[1.0], ConstraintKind::Equal, 0.0)
            .unwrap_err();
        assert!(matches!(err, EngineError::ColumnOutOfBounds { .. }));
    }
}
