//! Solver configuration types.

use std::sync::Arc;

/// Caller-supplied abort predicate, polled by the engine during a solve.
pub type AbortCallback = Arc<dyn Fn() -> bool + Send + Sync>;

/// Caller-supplied sink for engine log lines.
pub type LogCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Caller-supplied sink for engine event codes.
pub type MessageCallback = Arc<dyn Fn(i32) + Send + Sync>;

/// Flat tuning-parameter surface for the native engine.
///
/// Every field is passed through uninterpreted; `None` leaves the engine
/// default in place. Numeric codes (pivoting, scaling, improve, ...) use
/// the engine's own encoding.
#[derive(Clone, Default)]
pub struct LpConfig {
    /// Anti-degeneracy handling mask.
    pub anti_degen: Option<i32>,
    /// Basis crash mode.
    pub basis_crash: Option<i32>,
    /// Branch-and-bound depth limit.
    pub bb_depth_limit: Option<i32>,
    /// Branch-and-bound rounding preference.
    pub bb_floor_first: Option<i32>,
    /// Branch-and-bound node selection rule.
    pub bb_rule: Option<i32>,
    /// Stop at the first improved solution.
    pub break_at_first: Option<bool>,
    /// Stop once the objective reaches this value.
    pub break_at_value: Option<f64>,
    /// Engine debug output.
    pub debug: Option<bool>,
    /// Epsilon for bound comparisons.
    pub eps_basic: Option<f64>,
    /// Epsilon for reduced-cost comparisons.
    pub eps_dual: Option<f64>,
    /// General rounding epsilon.
    pub eps_general: Option<f64>,
    /// Integrality tolerance.
    pub eps_int: Option<f64>,
    /// Perturbation epsilon.
    pub eps_perturb: Option<f64>,
    /// Pivot element threshold.
    pub eps_pivot: Option<f64>,
    /// Iterative improvement mask.
    pub improve: Option<i32>,
    /// Value the engine treats as infinity.
    pub infinite: Option<f64>,
    /// Maximum pivots between refactorizations.
    pub max_pivot: Option<i32>,
    /// Absolute MIP gap.
    pub mip_gap_abs: Option<f64>,
    /// Relative MIP gap.
    pub mip_gap_rel: Option<f64>,
    /// Negative value range threshold.
    pub neg_range: Option<f64>,
    /// Objective bound for branch cutoff.
    pub obj_bound: Option<f64>,
    /// Keep the objective function in the basis matrix.
    pub obj_in_basis: Option<bool>,
    /// Pivoting rule and flags.
    pub pivoting: Option<i32>,
    /// Presolve mask.
    pub presolve: Option<i32>,
    /// Maximum presolve loops.
    pub presolve_max_loops: Option<i32>,
    /// Scaling convergence limit.
    pub scale_limit: Option<f64>,
    /// Scaling mode mask.
    pub scaling: Option<i32>,
    /// Simplex direction for phase 1 and phase 2.
    pub simplex_type: Option<i32>,
    /// Number of improved solutions before stopping.
    pub solution_limit: Option<i32>,
    /// Solve timeout in seconds. Values of 24 hours or more are ignored.
    pub timeout: Option<u64>,
    /// Engine trace output.
    pub trace: Option<bool>,
    /// Engine verbosity level.
    pub verbosity: Option<i32>,
    /// Redirect engine output to this file.
    pub log_file: Option<String>,
    /// Compute sensitivity data during the solve. Ranging and dual queries
    /// return nothing unless this is set.
    pub sensitivity: bool,
    /// Abort predicate polled during the solve.
    pub abort: Option<AbortCallback>,
    /// Sink for engine log lines.
    pub log: Option<LogCallback>,
    /// Sink for engine event codes.
    pub message: Option<MessageCallback>,
}

const TIMEOUT_IGNORE_THRESHOLD: u64 = 24 * 60 * 60;

impl LpConfig {
    /// Create a new configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Timeout to hand to the engine, with the 24-hour guard applied.
    pub fn effective_timeout(&self) -> Option<u64> {
        self.timeout.filter(|t| *t < TIMEOUT_IGNORE_THRESHOLD)
    }

    /// Set the solve timeout in seconds.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    /// Request sensitivity data.
    pub fn with_sensitivity(mut self) -> Self {
        self.sensitivity = true;
        self
    }

    /// Set the abort predicate.
    pub fn with_abort(mut self, abort: AbortCallback) -> Self {
        self.abort = Some(abort);
        self
    }

    /// Set the log-line sink.
    pub fn with_log(mut self, log: LogCallback) -> Self {
        self.log = Some(log);
        self
    }

    /// Set the event-code sink.
    pub fn with_message(mut self, message: MessageCallback) -> Self {
        self.message = Some(message);
        self
    }

    /// Set the integrality tolerance.
    pub fn with_eps_int(mut self, eps: f64) -> Self {
        self.eps_int = Some(eps);
        self
    }

    /// Set the relative MIP gap.
    pub fn with_mip_gap_rel(mut self, gap: f64) -> Self {
        self.mip_gap_rel = Some(gap);
        self
    }

    /// Set the absolute MIP gap.
    pub fn with_mip_gap_abs(mut self, gap: f64) -> Self {
        self.mip_gap_abs = Some(gap);
        self
    }

    /// Set the presolve mask.
    pub fn with_presolve(mut self, mask: i32) -> Self {
        self.presolve = Some(mask);
        self
    }

    /// Set the scaling mode mask.
    pub fn with_scaling(mut self, mask: i32) -> Self {
        self.scaling = Some(mask);
        self
    }

    /// Set the simplex direction code.
    pub fn with_simplex_type(mut self, code: i32) -> Self {
        self.simplex_type = Some(code);
        self
    }

    /// Set the verbosity level.
    pub fn with_verbosity(mut self, level: i32) -> Self {
        self.verbosity = Some(level);
        self
    }

    /// Redirect engine output to a file.
    pub fn with_log_file(mut self, path: impl Into<String>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Stop at the first improved solution.
    pub fn with_break_at_first(mut self, enabled: bool) -> Self {
        self.break_at_first = Some(enabled);
        self
    }

    /// Stop once the objective reaches a value.
    pub fn with_break_at_value(mut self, value: f64) -> Self {
        self.break_at_value = Some(value);
        self
    }

    /// Set the branch-and-bound depth limit.
    pub fn with_bb_depth_limit(mut self, limit: i32) -> Self {
        self.bb_depth_limit = Some(limit);
        self
    }

    /// Set the value the engine treats as infinity.
    pub fn with_infinite(mut self, value: f64) -> Self {
        self.infinite = Some(value);
        self
    }

    /// Check if this configuration is completely empty (all defaults).
    pub fn is_empty(&self) -> bool {
        self.anti_degen.is_none()
            && self.basis_crash.is_none()
            && self.bb_depth_limit.is_none()
            && self.bb_floor_first.is_none()
            && self.bb_rule.is_none()
            && self.break_at_first.is_none()
            && self.break_at_value.is_none()
            && self.debug.is_none()
            && self.eps_basic.is_none()
            && self.eps_dual.is_none()
            && self.eps_general.is_none()
            && self.eps_int.is_none()
            && self.eps_perturb.is_none()
            && self.eps_pivot.is_none()
            && self.improve.is_none()
            && self.infinite.is_none()
            && self.max_pivot.is_none()
            && self.mip_gap_abs.is_none()
            && self.mip_gap_rel.is_none()
            && self.neg_range.is_none()
            && self.obj_bound.is_none()
            && self.obj_in_basis.is_none()
            && self.pivoting.is_none()
            && self.presolve.is_none()
            && self.presolve_max_loops.is_none()
            && self.scale_limit.is_none()
            && self.scaling.is_none()
            && self.simplex_type.is_none()
            && self.solution_limit.is_none()
            && self.timeout.is_none()
            && self.trace.is_none()
            && self.verbosity.is_none()
            && self.log_file.is_none()
            && !self.sensitivity
            && self.abort.is_none()
            && self.log.is_none()
            && self.message.is_none()
    }
}

impl std::fmt::Debug for LpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LpConfig")
            .field("anti_degen", &self.anti_degen)
            .field("basis_crash", &self.basis_crash)
            .field("bb_depth_limit", &self.bb_depth_limit)
            .field("bb_floor_first", &self.bb_floor_first)
            .field("bb_rule", &self.bb_rule)
            .field("break_at_first", &self.break_at_first)
            .field("break_at_value", &self.break_at_value)
            .field("debug", &self.debug)
            .field("eps_basic", &self.eps_basic)
            .field("eps_dual", &self.eps_dual)
            .field("eps_general", &self.eps_general)
            .field("eps_int", &self.eps_int)
            .field("eps_perturb", &self.eps_perturb)
            .field("eps_pivot", &self.eps_pivot)
            .field("improve", &self.improve)
            .field("infinite", &self.infinite)
            .field("max_pivot", &self.max_pivot)
            .field("mip_gap_abs", &self.mip_gap_abs)
            .field("mip_gap_rel", &self.mip_gap_rel)
            .field("neg_range", &self.neg_range)
            .field("obj_bound", &self.obj_bound)
            .field("obj_in_basis", &self.obj_in_basis)
            .field("pivoting", &self.pivoting)
            .field("presolve", &self.presolve)
            .field("presolve_max_loops", &self.presolve_max_loops)
            .field("scale_limit", &self.scale_limit)
            .field("scaling", &self.scaling)
            .field("simplex_type", &self.simplex_type)
            .field("solution_limit", &self.solution_limit)
            .field("timeout", &self.timeout)
            .field("trace", &self.trace)
            .field("verbosity", &self.verbosity)
            .field("log_file", &self.log_file)
            .field("sensitivity", &self.sensitivity)
            .field("abort", &self.abort.as_ref().map(|_| "<fn>"))
            .field("log", &self.log.as_ref().map(|_| "<fn>"))
            .field("message", &self.message.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
