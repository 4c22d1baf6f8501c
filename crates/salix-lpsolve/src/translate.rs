//! Model translation into the engine's 1-based column/row form.

use crate::engine::{ConstraintKind, EngineError, LpEngine, SosType};
use salix_core::{Model, RowKind, Vid};
use salix_solver::SolverError;
use std::collections::BTreeMap;

/// A translated model: the engine instance plus the id maps needed to
/// route queries back into model-id space. Held until shutdown.
#[derive(Debug)]
pub struct NativeModel<E: LpEngine> {
    pub(crate) engine: E,
    /// Variable id to 1-based engine column.
    pub(crate) columns: BTreeMap<Vid, usize>,
    /// Ordinary-row id to 1-based engine row. Goal and SOS rows have no
    /// engine row and are absent.
    pub(crate) rows: BTreeMap<Vid, usize>,
    /// Engine infinity sentinel, captured at creation.
    pub(crate) infinite: f64,
}

impl<E: LpEngine> NativeModel<E> {
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// 1-based engine column for a variable id.
    pub fn column_index(&self, id: Vid) -> Option<usize> {
        self.columns.get(&id).copied()
    }

    /// 1-based engine row for an ordinary-row id.
    pub fn row_index(&self, id: Vid) -> Option<usize> {
        self.rows.get(&id).copied()
    }

    /// The infinity sentinel this instance was created with.
    pub fn infinite(&self) -> f64 {
        self.infinite
    }
}

fn engine_failure(error: EngineError) -> SolverError {
    SolverError::Engine {
        message: error.to_string(),
    }
}

/// Translate a model into a freshly created engine instance.
///
/// Variables become columns 1..=C in id order; ordinary rows become engine
/// rows 1..=R in id order. Goal and SOS rows do not consume engine rows.
pub fn build_native<E, F>(model: &Model, factory: F) -> Result<NativeModel<E>, SolverError>
where
    E: LpEngine,
    F: FnOnce(usize) -> Result<E, EngineError>,
{
    if model.variable_count() == 0 {
        return Err(SolverError::EmptyModel);
    }

    let mut engine = factory(model.variable_count()).map_err(|e| SolverError::NativeCreation {
        message: e.to_string(),
    })?;
    let infinite = engine.infinite();

    engine.set_row_mode(true);

    let mut columns = BTreeMap::new();
    for (index, (id, variable)) in model.variables().enumerate() {
        let column = index + 1;
        if variable.integer {
            engine.set_integer(column, true);
        }
        let bounds = variable.bounds;
        if variable.ignore_bounds {
            engine.set_unbounded(column);
        } else if bounds.lower.is_finite() && bounds.upper.is_finite() {
            engine.set_bounds(column, bounds.lower, bounds.upper);
        } else if bounds.lower.is_finite() {
            engine.set_lower_bound(column, bounds.lower);
        } else {
            engine.set_unbounded(column);
            if bounds.upper.is_finite() {
                engine.set_upper_bound(column, bounds.upper);
            }
        }
        columns.insert(id, column);
    }

    let mut rows = BTreeMap::new();
    let mut sos_sequence = 0;
    for (id, row) in model.rows() {
        let (entry_columns, entry_values) = compact(model, id, &columns);

        if model.is_goal(id) {
            // Only the goal row carries the objective; sense first so the
            // engine interprets coefficients consistently.
            let goal = model.goal().copied();
            if let Some(goal) = goal {
                engine.set_direction(goal.sense);
            }
            engine
                .set_objective(&entry_columns, &entry_values)
                .map_err(engine_failure)?;
            continue;
        }

        match row.kind {
            RowKind::Sos1 | RowKind::Sos2 => {
                if entry_columns.is_empty() {
                    continue;
                }
                let kind = if row.kind == RowKind::Sos1 {
                    SosType::Type1
                } else {
                    SosType::Type2
                };
                sos_sequence += 1;
                engine
                    .add_sos(kind, sos_sequence, &entry_columns, &entry_values)
                    .map_err(engine_failure)?;
            }
            RowKind::Linear => {
                let index =
                    add_linear_row(&mut engine, &entry_columns, &entry_values, row.bounds)?;
                rows.insert(id, index);
            }
        }
    }

    engine.set_row_mode(false);

    tracing::debug!(
        component = "lpsolve",
        operation = "translate",
        status = "success",
        columns = columns.len(),
        rows = rows.len(),
        sos = sos_sequence,
        "Translated model into engine form"
    );

    Ok(NativeModel {
        engine,
        columns,
        rows,
        infinite,
    })
}

/// Nonzero row entries as parallel (columns, values) arrays, restricted to
/// mapped variables.
fn compact(
    model: &Model,
    row: Vid,
    columns: &BTreeMap<Vid, usize>,
) -> (Vec<usize>, Vec<f64>) {
    let mut entry_columns = Vec::new();
    let mut entry_values = Vec::new();
    for (variable, coefficient) in model.row_entries(row) {
        if let Some(&column) = columns.get(&variable) {
            entry_columns.push(column);
            entry_values.push(coefficient);
        }
    }
    (entry_columns, entry_values)
}

/// Classify a row's bounds into the engine's constraint form and append
/// it. A row with no finite bound is added as a free constraint so that
/// engine row numbers stay in step with the row map.
fn add_linear_row<E: LpEngine>(
    engine: &mut E,
    columns: &[usize],
    values: &[f64],
    bounds: salix_core::Bounds,
) -> Result<usize, SolverError> {
    let lower_finite = bounds.lower.is_finite();
    let upper_finite = bounds.upper.is_finite();

    let index = if lower_finite && upper_finite && bounds.lower == bounds.upper {
        engine
            .add_constraint(columns, values, ConstraintKind::Equal, bounds.lower)
            .map_err(engine_failure)?
    } else if lower_finite && upper_finite {
        let index = engine
            .add_constraint(columns, values, ConstraintKind::LessEqual, bounds.upper)
            .map_err(engine_failure)?;
        engine.set_rhs_range(index, bounds.upper - bounds.lower);
        index
    } else if lower_finite {
        engine
            .add_constraint(columns, values, ConstraintKind::GreaterEqual, bounds.lower)
            .map_err(engine_failure)?
    } else if upper_finite {
        engine
            .add_constraint(columns, values, ConstraintKind::LessEqual, bounds.upper)
            .map_err(engine_failure)?
    } else {
        engine
            .add_constraint(columns, values, ConstraintKind::Free, 0.0)
            .map_err(engine_failure)?
    };
    Ok(index)
}
