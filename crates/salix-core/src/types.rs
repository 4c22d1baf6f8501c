//! Core value types shared across the model.

use crate::ids::Vid;
use serde_json::Value;

/// Optimization direction for the goal row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    Minimize,
    Maximize,
}

/// Lower/upper bound pair. Infinite bounds are expressed with
/// `f64::NEG_INFINITY` / `f64::INFINITY`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

impl Bounds {
    /// Create bounds from explicit lower and upper values.
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Bounds that do not restrict the value in either direction.
    pub fn free() -> Self {
        Self {
            lower: f64::NEG_INFINITY,
            upper: f64::INFINITY,
        }
    }

    /// True when neither side is finite.
    pub fn is_free(&self) -> bool {
        self.lower == f64::NEG_INFINITY && self.upper == f64::INFINITY
    }

    /// True when both sides are finite and equal.
    pub fn is_fixed(&self) -> bool {
        self.lower.is_finite() && self.lower == self.upper
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::free()
    }
}

/// A decision variable.
#[derive(Debug, Clone, Default)]
pub struct Variable {
    /// Optional caller-supplied key for reverse lookup.
    pub key: Option<Value>,
    pub bounds: Bounds,
    /// Integrality marker; any integral variable makes the model a MIP.
    pub integer: bool,
    /// When set, the variable is handed to the engine as unbounded
    /// regardless of `bounds`.
    pub ignore_bounds: bool,
}

impl Variable {
    /// Continuous variable with free bounds.
    pub fn continuous() -> Self {
        Self::default()
    }

    /// Integer variable with free bounds.
    pub fn integer() -> Self {
        Self {
            integer: true,
            ..Self::default()
        }
    }

    /// Binary variable (integer in [0, 1]).
    pub fn binary() -> Self {
        Self {
            integer: true,
            bounds: Bounds::new(0.0, 1.0),
            ..Self::default()
        }
    }

    pub fn with_bounds(mut self, lower: f64, upper: f64) -> Self {
        self.bounds = Bounds::new(lower, upper);
        self
    }

    pub fn with_key(mut self, key: Value) -> Self {
        self.key = Some(key);
        self
    }

    pub fn with_ignored_bounds(mut self) -> Self {
        self.ignore_bounds = true;
        self
    }
}

/// Classification of a row. SOS rows carry their members as coefficient
/// entries whose values are the member weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowKind {
    #[default]
    Linear,
    Sos1,
    Sos2,
}

/// A row: an ordinary linear constraint, an SOS set, or the body of the
/// goal. Row bounds select the native constraint form (equality, ranged,
/// or one-sided).
#[derive(Debug, Clone, Default)]
pub struct Row {
    pub key: Option<Value>,
    pub kind: RowKind,
    pub bounds: Bounds,
}

impl Row {
    /// Ordinary linear row with free bounds.
    pub fn linear() -> Self {
        Self::default()
    }

    /// Special ordered set of type 1 (at most one nonzero member).
    pub fn sos1() -> Self {
        Self {
            kind: RowKind::Sos1,
            ..Self::default()
        }
    }

    /// Special ordered set of type 2 (at most two adjacent nonzero members).
    pub fn sos2() -> Self {
        Self {
            kind: RowKind::Sos2,
            ..Self::default()
        }
    }

    pub fn with_bounds(mut self, lower: f64, upper: f64) -> Self {
        self.bounds = Bounds::new(lower, upper);
        self
    }

    pub fn with_key(mut self, key: Value) -> Self {
        self.key = Some(key);
        self
    }
}

/// The single goal of the model, pointing at the row that holds its
/// coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Goal {
    pub row: Vid,
    pub priority: i32,
    pub sense: Sense,
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_default_is_free() {
        let bounds = Bounds::default();
        assert!(bounds.is_free());
        assert!(!bounds.is_fixed());
    }

    #[test]
    fn test_bounds_fixed() {
        let bounds = Bounds::new(3.0, 3.0);
        assert!(bounds.is_fixed());
        assert!(!bounds.is_free());
    }

    #[test]
    fn test_variable_constructors() {
        let x = Variable::continuous();
        assert!(!x.integer);
        assert!(x.bounds.is_free());

        let y = Variable::binary();
        assert!(y.integer);
        assert_eq!(y.bounds.lower, 0.0);
        assert_eq!(y.bounds.upper, 1.0);

        let z = Variable::integer().with_bounds(-2.0, 5.0);
        assert!(z.integer);
        assert_eq!(z.bounds.lower, -2.0);
    }

    #[test]
    fn test_row_kinds() {
        assert_eq!(Row::linear().kind, RowKind::Linear);
        assert_eq!(Row::sos1().kind, RowKind::Sos1);
        assert_eq!(Row::sos2().kind, RowKind::Sos2);
    }
}
