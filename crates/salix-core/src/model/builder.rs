//! Model builder methods for adding variables, rows, and the goal.

use crate::ids::Vid;
use crate::model::{Model, ModelError};
use crate::types::{Bounds, Goal, Row, Sense, Variable};
use serde_json::Value;

fn validate_bounds(bounds: Bounds) -> Result<(), ModelError> {
    if bounds.lower.is_nan() || bounds.upper.is_nan() || bounds.lower > bounds.upper {
        return Err(ModelError::InvalidBounds {
            lower: bounds.lower,
            upper: bounds.upper,
        });
    }
    Ok(())
}

impl Model {
    fn next_id(&mut self) -> Vid {
        let id = Vid::new(self.next_vid);
        self.next_vid += 1;
        id
    }

    /// Add a variable to the model.
    pub fn add_variable(&mut self, variable: Variable) -> Result<Vid, ModelError> {
        validate_bounds(variable.bounds)?;
        let id = self.next_id();
        self.variables.insert(id, variable);
        Ok(id)
    }

    /// Add a row to the model.
    pub fn add_row(&mut self, row: Row) -> Result<Vid, ModelError> {
        validate_bounds(row.bounds)?;
        let id = self.next_id();
        self.rows.insert(id, row);
        Ok(id)
    }

    /// Add the goal: a fresh row marked as the objective.
    ///
    /// Returns an error if the model already has a goal.
    pub fn add_goal(
        &mut self,
        key: Option<Value>,
        priority: i32,
        sense: Sense,
    ) -> Result<Vid, ModelError> {
        if self.goal.is_some() {
            return Err(ModelError::GoalAlreadySet);
        }
        let mut row = Row::linear();
        row.key = key;
        let id = self.add_row(row)?;
        self.goal = Some(Goal {
            row: id,
            priority,
            sense,
        });
        tracing::debug!(
            component = "model",
            operation = "add_goal",
            status = "success",
            row = id.inner(),
            sense = ?sense,
            priority,
            "Added goal row"
        );
        Ok(id)
    }

    /// Remove the goal and its row.
    pub fn clear_goal(&mut self) {
        if let Some(goal) = self.goal.take() {
            self.rows.remove(&goal.row);
            self.coefficients.remove(&goal.row);
            self.values.remove(&goal.row);
        }
    }

    /// Set a coefficient at the intersection of a row and a variable.
    ///
    /// A zero coefficient removes the stored entry. Returns an error when
    /// either id is unknown or the coefficient is not finite.
    pub fn set_coefficient(
        &mut self,
        row: Vid,
        variable: Vid,
        coefficient: f64,
    ) -> Result<(), ModelError> {
        if !coefficient.is_finite() {
            return Err(ModelError::InvalidCoefficient { coefficient });
        }
        if !self.rows.contains_key(&row) {
            return Err(ModelError::UnknownRow(row));
        }
        if !self.variables.contains_key(&variable) {
            return Err(ModelError::UnknownVariable(variable));
        }

        if coefficient == 0.0 {
            if let Some(entries) = self.coefficients.get_mut(&row) {
                entries.remove(&variable);
                if entries.is_empty() {
                    self.coefficients.remove(&row);
                }
            }
        } else {
            self.coefficients
                .entry(row)
                .or_default()
                .insert(variable, coefficient);
        }
        Ok(())
    }

    /// Replace the bounds of a variable or row.
    pub fn set_bounds(&mut self, id: Vid, bounds: Bounds) -> Result<(), ModelError> {
        validate_bounds(bounds)?;
        if let Some(variable) = self.variables.get_mut(&id) {
            variable.bounds = bounds;
            return Ok(());
        }
        if let Some(row) = self.rows.get_mut(&id) {
            row.bounds = bounds;
            return Ok(());
        }
        Err(ModelError::UnknownVariable(id))
    }

    /// Mark a variable as integral or continuous.
    pub fn set_integer(&mut self, id: Vid, integer: bool) -> Result<(), ModelError> {
        let variable = self
            .variables
            .get_mut(&id)
            .ok_or(ModelError::UnknownVariable(id))?;
        variable.integer = integer;
        Ok(())
    }

    /// Toggle whether a variable's bounds are handed to the engine.
    pub fn set_ignore_bounds(&mut self, id: Vid, ignore: bool) -> Result<(), ModelError> {
        let variable = self
            .variables
            .get_mut(&id)
            .ok_or(ModelError::UnknownVariable(id))?;
        variable.ignore_bounds = ignore;
        Ok(())
    }

    /// Write a solution value back for a variable or row.
    pub fn set_value(&mut self, id: Vid, value: f64) {
        self.values.insert(id, value);
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_add_variable_rejects_nan_bounds() {
        let mut model = Model::new();
        let err = model
            .add_variable(Variable::continuous().with_bounds(f64::NAN, 1.0))
            .unwrap_err();
        assert_eq!(err.code(), "BOUNDS_INVALID");
    }

    #[test]
    fn test_add_variable_rejects_inverted_bounds() {
        let mut model = Model::new();
        let err = model
            .add_variable(Variable::continuous().with_bounds(2.0, 1.0))
            .unwrap_err();
        assert!(matches!(err, ModelError::InvalidBounds { .. }));
    }

    #[test]
    fn test_second_goal_rejected() {
        let mut model = Model::new();
        model.add_goal(None, 1, Sense::Minimize).unwrap();
        let err = model.add_goal(None, 2, Sense::Maximize).unwrap_err();
        assert_eq!(err, ModelError::GoalAlreadySet);
    }

    #[test]
    fn test_clear_goal_allows_new_goal() {
        let mut model = Model::new();
        let g = model.add_goal(None, 1, Sense::Minimize).unwrap();
        model.clear_goal();
        assert!(!model.is_row(g));
        assert_eq!(model.goal_count(), 0);
        model.add_goal(None, 1, Sense::Maximize).unwrap();
    }

    #[test]
    fn test_zero_coefficient_removes_entry() {
        let mut model = Model::new();
        let x = model.add_variable(Variable::continuous()).unwrap();
        let r = model.add_row(Row::linear()).unwrap();
        model.set_coefficient(r, x, 3.0).unwrap();
        assert_eq!(model.coefficient_count(), 1);
        model.set_coefficient(r, x, 0.0).unwrap();
        assert_eq!(model.coefficient_count(), 0);
        assert_eq!(model.coefficient(r, x), 0.0);
    }

    #[test]
    fn test_set_coefficient_validates_ids() {
        let mut model = Model::new();
        let x = model.add_variable(Variable::continuous()).unwrap();
        let r = model.add_row(Row::linear()).unwrap();
        // row and variable swapped
        let err = model.set_coefficient(x, r, 1.0).unwrap_err();
        assert_eq!(err, ModelError::UnknownRow(x));
    }

    #[test]
    fn test_set_coefficient_rejects_non_finite() {
        let mut model = Model::new();
        let x = model.add_variable(Variable::continuous()).unwrap();
        let r = model.add_row(Row::linear()).unwrap();
        let err = model.set_coefficient(r, x, f64::INFINITY).unwrap_err();
        assert!(matches!(err, ModelError::InvalidCoefficient { .. }));
    }

    #[test]
    fn test_set_bounds_on_row_and_variable() {
        let mut model = Model::new();
        let x = model.add_variable(Variable::continuous()).unwrap();
        let r = model.add_row(Row::linear()).unwrap();
        model.set_bounds(x, Bounds::new(0.0, 10.0)).unwrap();
        model.set_bounds(r, Bounds::new(1.0, 1.0)).unwrap();
        assert_eq!(model.variable(x).unwrap().bounds.upper, 10.0);
        assert!(model.row(r).unwrap().bounds.is_fixed());
    }
}
