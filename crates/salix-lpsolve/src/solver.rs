//! Solver facade: lifecycle, queries, and export pass-through.

use crate::engine::{EngineError, EngineStatistic, LpEngine, ModelFormat, SimplexType, SolveReturn};
use crate::lifecycle::{SolverState, StateCell};
use crate::sensitivity::{self, SensitivityRange};
use crate::solution::extract_results;
use crate::status::{lp_result, mip_result};
use crate::translate::{build_native, NativeModel};
use salix_core::{Model, Sense, Vid};
use salix_solver::{properties, LinearResult, LpConfig, SolverError};
use std::sync::{Mutex, MutexGuard, PoisonError};

type Factory<E> = Box<dyn FnOnce(usize) -> Result<E, EngineError> + Send>;

/// Goal metadata after a solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolvedGoal {
    pub row: Vid,
    pub sense: Sense,
    pub optimal: bool,
}

#[derive(Debug, Clone, Copy)]
struct Outcome {
    code: SolveReturn,
    simplex: SimplexType,
    mip: bool,
}

struct Inner<E: LpEngine> {
    model: Model,
    config: LpConfig,
    factory: Option<Factory<E>>,
    native: Option<NativeModel<E>>,
    outcome: Option<Outcome>,
}

/// Solver over a translated model.
///
/// `solve` and `shutdown` may be called from different threads; the state
/// cell arbitrates. A solve runs at most once: later calls return the
/// stored result. Shutdown waits for an in-flight solve, releases the
/// engine and the id maps, and is idempotent.
pub struct LpSolver<E: LpEngine> {
    state: StateCell,
    inner: Mutex<Inner<E>>,
}

impl<E: LpEngine> LpSolver<E> {
    /// Solver backed by the engine's own constructor.
    pub fn new(model: Model, config: LpConfig) -> Self {
        Self::with_factory(model, config, E::create)
    }

    /// Solver with a caller-supplied engine factory.
    pub fn with_factory<F>(model: Model, config: LpConfig, factory: F) -> Self
    where
        F: FnOnce(usize) -> Result<E, EngineError> + Send + 'static,
    {
        Self {
            state: StateCell::new(),
            inner: Mutex::new(Inner {
                model,
                config,
                factory: Some(Box::new(factory)),
                native: None,
                outcome: None,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<E>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SolverState {
        self.state.load()
    }

    /// Translate, solve, extract, and classify.
    ///
    /// Exactly one caller claims the solve; once the solver is settled or
    /// shut down, further calls return the stored result without touching
    /// the engine. Translation or engine errors leave the solver
    /// `Aborted` and propagate.
    pub fn solve(&self) -> Result<LinearResult, SolverError> {
        loop {
            match self.state.transition(SolverState::Start, SolverState::Solving) {
                Ok(()) => break,
                Err(SolverState::Solving) | Err(SolverState::Aborting) => {
                    std::thread::yield_now();
                }
                Err(_) => return Ok(self.result()),
            }
        }

        let mut inner = self.lock();
        if let Err(error) = Self::load_native(&mut inner) {
            drop(inner);
            self.state.store(SolverState::Aborted);
            tracing::error!(
                component = "lpsolve",
                operation = "solve",
                status = "error",
                error = %error,
                "Translation failed"
            );
            return Err(error);
        }

        let Inner {
            model,
            config,
            native,
            outcome,
            ..
        } = &mut *inner;
        let Some(native) = native.as_mut() else {
            drop(inner);
            self.state.store(SolverState::Aborted);
            return Err(SolverError::Disposed);
        };

        native.engine.configure(config);
        let predicate = config.abort.clone();
        let state = &self.state;
        let mut abort = move || {
            if let Some(predicate) = &predicate {
                if predicate() {
                    state.store(SolverState::Aborting);
                }
            }
            state.load() == SolverState::Aborting
        };

        let code = native.engine.solve(&mut abort);
        extract_results(model, native);
        *outcome = Some(Outcome {
            code,
            simplex: native.engine.simplex_type(),
            mip: model.is_mip(),
        });
        let result = Self::classify(*outcome);
        drop(inner);

        if self.state.load() == SolverState::Aborting {
            self.state.store(SolverState::Aborted);
        } else {
            self.state.store(SolverState::Solved);
        }

        tracing::debug!(
            component = "lpsolve",
            operation = "solve",
            status = "success",
            code = ?code,
            result = %result,
            "Solve finished"
        );
        Ok(result)
    }

    fn load_native(inner: &mut Inner<E>) -> Result<(), SolverError> {
        if inner.native.is_some() {
            return Ok(());
        }
        let factory = inner.factory.take().ok_or(SolverError::Disposed)?;
        inner.native = Some(build_native(&inner.model, factory)?);
        Ok(())
    }

    fn classify(outcome: Option<Outcome>) -> LinearResult {
        match outcome {
            None => LinearResult::Invalid,
            Some(outcome) if outcome.mip => mip_result(outcome.code, outcome.simplex),
            Some(outcome) => lp_result(outcome.code, outcome.simplex),
        }
    }

    /// Result of the last solve; `Invalid` before any solve completes.
    pub fn result(&self) -> LinearResult {
        Self::classify(self.lock().outcome)
    }

    /// Release the engine and id maps. Waits for an in-flight solve;
    /// idempotent and safe to race with other shutdown callers.
    pub fn shutdown(&self) {
        if self.state.load() == SolverState::Disposed {
            return;
        }
        loop {
            match self
                .state
                .transition(SolverState::Start, SolverState::Disposing)
            {
                Ok(()) => break,
                Err(SolverState::Solving) | Err(SolverState::Aborting) => {
                    std::thread::yield_now();
                }
                Err(SolverState::Solved) | Err(SolverState::Aborted) => {
                    self.state.store(SolverState::Disposing);
                    break;
                }
                Err(SolverState::Disposing) => {
                    while self.state.load() != SolverState::Disposed {
                        std::thread::yield_now();
                    }
                    return;
                }
                Err(SolverState::Disposed) => return,
                Err(SolverState::Start) => continue,
            }
        }

        let mut inner = self.lock();
        inner.native = None;
        inner.factory = None;
        drop(inner);
        self.state.store(SolverState::Disposed);
        tracing::debug!(
            component = "lpsolve",
            operation = "shutdown",
            status = "success",
            "Released native model"
        );
    }

    /// Solution value of a variable or row, written back by the last
    /// successful solve.
    pub fn value(&self, id: Vid) -> f64 {
        self.lock().model.value(id)
    }

    /// Dual value (shadow price or reduced cost); zero for unknown ids or
    /// when no dual data exists.
    pub fn dual_value(&self, id: Vid) -> f64 {
        let inner = self.lock();
        match &inner.native {
            Some(native) => sensitivity::dual_value(native, id),
            None => 0.0,
        }
    }

    /// Objective-coefficient validity range for a variable. `None` unless
    /// sensitivity data was requested and computed.
    pub fn objective_coefficient_range(&self, id: Vid) -> Option<SensitivityRange> {
        let inner = self.lock();
        if !inner.config.sensitivity {
            return None;
        }
        sensitivity::objective_coefficient_range(inner.native.as_ref()?, id)
    }

    /// Right-hand-side (row) or bound (variable) validity range. `None`
    /// unless sensitivity data was requested and computed.
    pub fn variable_range(&self, id: Vid) -> Option<SensitivityRange> {
        let inner = self.lock();
        if !inner.config.sensitivity {
            return None;
        }
        sensitivity::variable_or_row_range(inner.native.as_ref()?, id)
    }

    /// Goal metadata after a solve.
    pub fn solved_goal(&self) -> Option<SolvedGoal> {
        let inner = self.lock();
        let goal = inner.model.goal()?;
        Some(SolvedGoal {
            row: goal.row,
            sense: goal.sense,
            optimal: Self::classify(inner.outcome).is_optimal(),
        })
    }

    /// Number of improved solutions the engine recorded, if it is still
    /// loaded.
    pub fn solution_count(&self) -> Option<f64> {
        let inner = self.lock();
        let native = inner.native.as_ref()?;
        Some(native.engine.statistic(EngineStatistic::SolutionCount))
    }

    /// Statistics and bound queries by string key.
    pub fn get_property(&self, name: &str, id: Option<Vid>) -> Result<f64, SolverError> {
        let inner = self.lock();
        let statistic = match name {
            properties::ITERATION_COUNT => Some(EngineStatistic::TotalIterations),
            properties::NODE_COUNT => Some(EngineStatistic::TotalNodes),
            properties::GOAL_BOUND => Some(EngineStatistic::ObjectiveBound),
            properties::GOAL_VALUE => Some(EngineStatistic::WorkingObjective),
            properties::PIVOT_COUNT => Some(EngineStatistic::MaxPivot),
            properties::ELAPSED_TIME => Some(EngineStatistic::ElapsedSeconds),
            properties::PRESOLVE_LOOPS => Some(EngineStatistic::PresolveLoops),
            properties::MIP_GAP => Some(EngineStatistic::MipGap),
            _ => None,
        };
        if let Some(statistic) = statistic {
            let native = inner.native.as_ref().ok_or(SolverError::Disposed)?;
            return Ok(native.engine.statistic(statistic));
        }

        match name {
            properties::VARIABLE_LOWER_BOUND | properties::VARIABLE_UPPER_BOUND => {
                let variable = id
                    .and_then(|id| inner.model.variable(id))
                    .ok_or_else(|| SolverError::Engine {
                        message: format!("{name} requires a variable id"),
                    })?;
                if name == properties::VARIABLE_LOWER_BOUND {
                    Ok(variable.bounds.lower)
                } else {
                    Ok(variable.bounds.upper)
                }
            }
            _ => Err(SolverError::UnsupportedProperty {
                name: name.to_string(),
            }),
        }
    }

    /// Inspect the live engine, for diagnostics. `None` once released.
    pub fn with_engine<R>(&self, f: impl FnOnce(&E) -> R) -> Option<R> {
        let inner = self.lock();
        inner.native.as_ref().map(|native| f(&native.engine))
    }

    /// Export the model in LP format.
    pub fn write_lp(&self, path: &str) -> Result<(), SolverError> {
        self.export(|native| native.engine.write_model(ModelFormat::Lp, path))
    }

    /// Export the model in fixed or free MPS format.
    pub fn write_mps(&self, path: &str, free: bool) -> Result<(), SolverError> {
        let format = if free {
            ModelFormat::FreeMps
        } else {
            ModelFormat::Mps
        };
        self.export(|native| native.engine.write_model(format, path))
    }

    /// Write the active tuning parameters to a parameter file.
    pub fn write_params(&self, path: &str, options: &str) -> Result<(), SolverError> {
        self.export(|native| native.engine.write_params(path, options))
    }

    /// Load tuning parameters from a parameter file.
    pub fn read_params(&self, path: &str, options: &str) -> Result<(), SolverError> {
        let mut inner = self.lock();
        let native = inner.native.as_mut().ok_or(SolverError::Disposed)?;
        native
            .engine
            .read_params(path, options)
            .map_err(|e| SolverError::Engine {
                message: e.to_string(),
            })
    }

    /// Export through an external language interface library.
    pub fn write_external(
        &self,
        library: &str,
        path: &str,
        options: &str,
    ) -> Result<(), SolverError> {
        self.export(|native| native.engine.write_external(library, path, options))
    }

    /// Dump engine internals for debugging.
    pub fn debug_dump(&self, path: &str) -> Result<(), SolverError> {
        self.export(|native| native.engine.debug_dump(path))
    }

    fn export(
        &self,
        f: impl FnOnce(&NativeModel<E>) -> Result<(), EngineError>,
    ) -> Result<(), SolverError> {
        let inner = self.lock();
        let native = inner.native.as_ref().ok_or(SolverError::Disposed)?;
        f(native).map_err(|e| SolverError::Engine {
            message: e.to_string(),
        })
    }
}

impl<E: LpEngine> Drop for LpSolver<E> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
