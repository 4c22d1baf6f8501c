//! Model storage and query methods.

mod builder;
mod error;

pub use error::ModelError;

use crate::ids::Vid;
use crate::types::{Goal, Row, Variable};
use serde_json::Value;
use std::collections::BTreeMap;

/// Sparse LP/MIP model.
///
/// Variables and rows draw ids from one shared counter, so an id never
/// names both at once. Coefficients are stored row-major; entries set to
/// zero are removed. Solution values are written back per id after a
/// successful solve.
#[derive(Debug, Clone, Default)]
pub struct Model {
    pub(crate) next_vid: u32,
    pub(crate) variables: BTreeMap<Vid, Variable>,
    pub(crate) rows: BTreeMap<Vid, Row>,
    pub(crate) coefficients: BTreeMap<Vid, BTreeMap<Vid, f64>>,
    pub(crate) goal: Option<Goal>,
    pub(crate) values: BTreeMap<Vid, f64>,
}

impl Model {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of variables.
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    /// Number of rows (including SOS rows and the goal row).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of stored (nonzero) coefficients.
    pub fn coefficient_count(&self) -> usize {
        self.coefficients.values().map(BTreeMap::len).sum()
    }

    /// Number of goals (0 or 1).
    pub fn goal_count(&self) -> usize {
        usize::from(self.goal.is_some())
    }

    /// True when any variable is integral.
    pub fn is_mip(&self) -> bool {
        self.variables.values().any(|v| v.integer)
    }

    /// True when the id names a variable.
    pub fn is_variable(&self, id: Vid) -> bool {
        self.variables.contains_key(&id)
    }

    /// True when the id names a row.
    pub fn is_row(&self, id: Vid) -> bool {
        self.rows.contains_key(&id)
    }

    /// True when the id names the goal row.
    pub fn is_goal(&self, id: Vid) -> bool {
        self.goal.map(|g| g.row == id).unwrap_or(false)
    }

    /// The goal, if one has been added.
    pub fn goal(&self) -> Option<&Goal> {
        self.goal.as_ref()
    }

    /// Look up a variable by id.
    pub fn variable(&self, id: Vid) -> Option<&Variable> {
        self.variables.get(&id)
    }

    /// Look up a row by id.
    pub fn row(&self, id: Vid) -> Option<&Row> {
        self.rows.get(&id)
    }

    /// Iterate variables in id order.
    pub fn variables(&self) -> impl Iterator<Item = (Vid, &Variable)> {
        self.variables.iter().map(|(id, v)| (*id, v))
    }

    /// Iterate rows in id order.
    pub fn rows(&self) -> impl Iterator<Item = (Vid, &Row)> {
        self.rows.iter().map(|(id, r)| (*id, r))
    }

    /// Coefficient at (row, variable); zero when absent.
    pub fn coefficient(&self, row: Vid, variable: Vid) -> f64 {
        self.coefficients
            .get(&row)
            .and_then(|entries| entries.get(&variable))
            .copied()
            .unwrap_or(0.0)
    }

    /// Iterate the nonzero entries of a row in variable-id order.
    pub fn row_entries(&self, row: Vid) -> impl Iterator<Item = (Vid, f64)> + '_ {
        self.coefficients
            .get(&row)
            .into_iter()
            .flat_map(|entries| entries.iter().map(|(id, c)| (*id, *c)))
    }

    /// Reverse lookup of a variable or row by its caller-supplied key.
    pub fn find_by_key(&self, key: &Value) -> Option<Vid> {
        self.variables
            .iter()
            .find(|(_, v)| v.key.as_ref() == Some(key))
            .map(|(id, _)| *id)
            .or_else(|| {
                self.rows
                    .iter()
                    .find(|(_, r)| r.key.as_ref() == Some(key))
                    .map(|(id, _)| *id)
            })
    }

    /// Current solution value for a variable or row; zero until a solve
    /// has written values back.
    pub fn value(&self, id: Vid) -> f64 {
        self.values.get(&id).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::types::{RowKind, Sense};
    use serde_json::json;

    #[test]
    fn test_empty_model_counts() {
        let model = Model::new();
        assert_eq!(model.variable_count(), 0);
        assert_eq!(model.row_count(), 0);
        assert_eq!(model.coefficient_count(), 0);
        assert_eq!(model.goal_count(), 0);
        assert!(!model.is_mip());
    }

    #[test]
    fn test_shared_id_space() {
        let mut model = Model::new();
        let x = model.add_variable(Variable::continuous()).unwrap();
        let r = model.add_row(Row::linear()).unwrap();
        assert_ne!(x, r);
        assert!(model.is_variable(x));
        assert!(!model.is_row(x));
        assert!(model.is_row(r));
        assert!(!model.is_variable(r));
    }

    #[test]
    fn test_is_mip_tracks_integrality() {
        let mut model = Model::new();
        model.add_variable(Variable::continuous()).unwrap();
        assert!(!model.is_mip());
        model.add_variable(Variable::integer()).unwrap();
        assert!(model.is_mip());
    }

    #[test]
    fn test_find_by_key() {
        let mut model = Model::new();
        let x = model
            .add_variable(Variable::continuous().with_key(json!("x")))
            .unwrap();
        let r = model
            .add_row(Row::linear().with_key(json!({"name": "cap"})))
            .unwrap();
        assert_eq!(model.find_by_key(&json!("x")), Some(x));
        assert_eq!(model.find_by_key(&json!({"name": "cap"})), Some(r));
        assert_eq!(model.find_by_key(&json!("missing")), None);
    }

    #[test]
    fn test_goal_marks_its_row() {
        let mut model = Model::new();
        model.add_variable(Variable::continuous()).unwrap();
        let g = model.add_goal(None, 1, Sense::Minimize).unwrap();
        assert!(model.is_goal(g));
        assert!(model.is_row(g));
        assert_eq!(model.row(g).unwrap().kind, RowKind::Linear);
        assert_eq!(model.goal_count(), 1);
    }

    #[test]
    fn test_value_defaults_to_zero() {
        let mut model = Model::new();
        let x = model.add_variable(Variable::continuous()).unwrap();
        assert_eq!(model.value(x), 0.0);
        model.set_value(x, 2.5);
        assert_eq!(model.value(x), 2.5);
    }
}
