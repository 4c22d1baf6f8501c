//! Sensitivity ranges and dual values in model-id space.
//!
//! Ranging values at or beyond the engine's infinity sentinel are
//! normalized to `f64::NEG_INFINITY` / `f64::INFINITY`. Dual signs flip
//! under maximization, so classification uses `dual * sign` with
//! `sign = -1` for a maximizing goal.

use crate::engine::{ConstraintKind, LpEngine};
use crate::translate::NativeModel;
use salix_core::Vid;

/// Validity range of a model quantity: the current value plus the lower
/// and upper limits within which the solution basis stays optimal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensitivityRange {
    pub current: f64,
    pub lower: f64,
    pub upper: f64,
}

fn normalize_lower(value: f64, infinite: f64) -> f64 {
    if value <= -infinite {
        f64::NEG_INFINITY
    } else {
        value
    }
}

fn normalize_upper(value: f64, infinite: f64) -> f64 {
    if value >= infinite {
        f64::INFINITY
    } else {
        value
    }
}

/// Objective-coefficient range for a variable.
pub(crate) fn objective_coefficient_range<E: LpEngine>(
    native: &NativeModel<E>,
    id: Vid,
) -> Option<SensitivityRange> {
    let column = native.column_index(id)?;
    let (lowers, uppers) = native.engine.objective_ranging()?;
    Some(SensitivityRange {
        current: native.engine.objective_coefficient(column),
        lower: normalize_lower(*lowers.get(column - 1)?, native.infinite),
        upper: normalize_upper(*uppers.get(column - 1)?, native.infinite),
    })
}

/// Right-hand-side range for a row, or bound range for a variable.
///
/// Rows are checked first; variables share the ranging arrays at an
/// offset of the engine row count. The reported current value follows
/// the active side of the constraint or bound, selected by the sign of
/// the direction-corrected dual.
pub(crate) fn variable_or_row_range<E: LpEngine>(
    native: &NativeModel<E>,
    id: Vid,
) -> Option<SensitivityRange> {
    let ranging = native.engine.rhs_ranging()?;
    let sign = if native.engine.is_maximizing() {
        -1.0
    } else {
        1.0
    };

    if let Some(row) = native.row_index(id) {
        let dual = *ranging.duals.get(row - 1)? * sign;
        let mut current = native.engine.rhs(row);
        let kind = native.engine.constraint_kind(row);
        let range = native.engine.rhs_range(row);
        // A ranged row is stored one-sided; shift to the binding side.
        if dual >= 0.0 && kind == ConstraintKind::LessEqual && range < native.infinite {
            current -= range;
        } else if dual < 0.0 && kind == ConstraintKind::GreaterEqual && range < native.infinite {
            current += range;
        }
        return Some(SensitivityRange {
            current,
            lower: normalize_lower(*ranging.lowers.get(row - 1)?, native.infinite),
            upper: normalize_upper(*ranging.uppers.get(row - 1)?, native.infinite),
        });
    }

    let column = native.column_index(id)?;
    let index = native.engine.row_count() + column;
    let dual = *ranging.duals.get(index - 1)? * sign;
    let lower_bound = native.engine.lower_bound(column);
    let upper_bound = native.engine.upper_bound(column);
    let current = if dual >= 0.0 {
        lower_bound
    } else {
        lower_bound + upper_bound
    };
    Some(SensitivityRange {
        current,
        lower: normalize_lower(*ranging.lowers.get(index - 1)?, native.infinite),
        upper: normalize_upper(*ranging.uppers.get(index - 1)?, native.infinite),
    })
}

/// Dual value (shadow price or reduced cost) for a row or variable id.
/// Unrecognized ids report zero.
pub(crate) fn dual_value<E: LpEngine>(native: &NativeModel<E>, id: Vid) -> f64 {
    let index = if let Some(row) = native.row_index(id) {
        row
    } else if let Some(column) = native.column_index(id) {
        native.engine.row_count() + column
    } else {
        return 0.0;
    };
    native.engine.dual_result(index).unwrap_or(0.0)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::engine::{LpEngine, RhsRanging, SolveReturn};
    use crate::fixture::{FixtureEngine, FixtureScript};
    use crate::translate::build_native;
    use salix_core::{Model, Row, Sense, Variable};

    const INF: f64 = 1.0e30;

    /// One variable in [1, 6], one <= row at 8 with range 5 (bounds 3..8),
    /// minimize.
    fn native_with(script: FixtureScript) -> (NativeModel<FixtureEngine>, Vid, Vid) {
        let mut model = Model::new();
        let x = model
            .add_variable(Variable::continuous().with_bounds(1.0, 6.0))
            .unwrap();
        let r = model.add_row(Row::linear().with_bounds(3.0, 8.0)).unwrap();
        model.set_coefficient(r, x, 1.0).unwrap();
        let goal = model.add_goal(None, 1, Sense::Minimize).unwrap();
        model.set_coefficient(goal, x, 1.0).unwrap();
        let mut native =
            build_native(&model, move |n| Ok(FixtureEngine::scripted(n, script))).unwrap();
        native.engine.solve(&mut || false);
        (native, x, r)
    }

    #[test]
    fn test_objective_range_normalizes_sentinels() {
        let script = FixtureScript {
            objective_ranging: Some((vec![-2.0 * INF], vec![INF])),
            ..FixtureScript::default()
        };
        let (native, x, _) = native_with(script);
        let range = objective_coefficient_range(&native, x).unwrap();
        assert_eq!(range.current, 1.0);
        assert_eq!(range.lower, f64::NEG_INFINITY);
        assert_eq!(range.upper, f64::INFINITY);
    }

    #[test]
    fn test_objective_range_keeps_finite_values() {
        let script = FixtureScript {
            objective_ranging: Some((vec![0.5], vec![2.5])),
            ..FixtureScript::default()
        };
        let (native, x, _) = native_with(script);
        let range = objective_coefficient_range(&native, x).unwrap();
        assert_eq!(range.lower, 0.5);
        assert_eq!(range.upper, 2.5);
    }

    #[test]
    fn test_objective_range_none_without_sensitivity_data() {
        let (native, x, _) = native_with(FixtureScript::default());
        assert!(objective_coefficient_range(&native, x).is_none());
    }

    #[test]
    fn test_objective_range_none_for_unknown_id() {
        let script = FixtureScript {
            objective_ranging: Some((vec![0.0], vec![1.0])),
            ..FixtureScript::default()
        };
        let (native, _, r) = native_with(script);
        // a row id has no objective coefficient
        assert!(objective_coefficient_range(&native, r).is_none());
    }

    #[test]
    fn test_row_range_binding_side_nonnegative_dual() {
        // duals: [row, column]; row dual +2 under minimize keeps sign.
        let script = FixtureScript {
            rhs_ranging: Some(RhsRanging {
                duals: vec![2.0, 0.0],
                lowers: vec![4.0, 0.0],
                uppers: vec![9.0, 0.0],
            }),
            ..FixtureScript::default()
        };
        let (native, _, r) = native_with(script);
        let range = variable_or_row_range(&native, r).unwrap();
        // <= row at 8 with range 5; nonnegative dual shifts to lower side 3
        assert_eq!(range.current, 3.0);
        assert_eq!(range.lower, 4.0);
        assert_eq!(range.upper, 9.0);
    }

    #[test]
    fn test_row_range_negative_dual_keeps_upper_side() {
        let script = FixtureScript {
            rhs_ranging: Some(RhsRanging {
                duals: vec![-2.0, 0.0],
                lowers: vec![4.0, 0.0],
                uppers: vec![9.0, 0.0],
            }),
            ..FixtureScript::default()
        };
        let (native, _, r) = native_with(script);
        let range = variable_or_row_range(&native, r).unwrap();
        assert_eq!(range.current, 8.0);
    }

    #[test]
    fn test_maximization_flips_dual_sign() {
        let mut model = Model::new();
        let x = model
            .add_variable(Variable::continuous().with_bounds(1.0, 6.0))
            .unwrap();
        let r = model.add_row(Row::linear().with_bounds(3.0, 8.0)).unwrap();
        model.set_coefficient(r, x, 1.0).unwrap();
        let goal = model.add_goal(None, 1, Sense::Maximize).unwrap();
        model.set_coefficient(goal, x, 1.0).unwrap();
        let script = FixtureScript {
            rhs_ranging: Some(RhsRanging {
                duals: vec![2.0, 0.0],
                lowers: vec![4.0, 0.0],
                uppers: vec![9.0, 0.0],
            }),
            ..FixtureScript::default()
        };
        let mut native =
            build_native(&model, move |n| Ok(FixtureEngine::scripted(n, script))).unwrap();
        native.engine.solve(&mut || false);
        let range = variable_or_row_range(&native, r).unwrap();
        // raw dual +2 becomes -2 under maximize, so the upper side stays
        assert_eq!(range.current, 8.0);
    }

    #[test]
    fn test_variable_range_uses_offset_slot() {
        let script = FixtureScript {
            rhs_ranging: Some(RhsRanging {
                duals: vec![0.0, 1.5],
                lowers: vec![0.0, 0.5],
                uppers: vec![0.0, INF],
            }),
            ..FixtureScript::default()
        };
        let (native, x, _) = native_with(script);
        let range = variable_or_row_range(&native, x).unwrap();
        // nonnegative reduced cost reports the lower bound
        assert_eq!(range.current, 1.0);
        assert_eq!(range.lower, 0.5);
        assert_eq!(range.upper, f64::INFINITY);
    }

    #[test]
    fn test_variable_range_negative_reduced_cost() {
        let script = FixtureScript {
            rhs_ranging: Some(RhsRanging {
                duals: vec![0.0, -1.5],
                lowers: vec![0.0, 0.5],
                uppers: vec![0.0, 7.0],
            }),
            ..FixtureScript::default()
        };
        let (native, x, _) = native_with(script);
        let range = variable_or_row_range(&native, x).unwrap();
        // negative reduced cost reports lower + upper
        assert_eq!(range.current, 7.0);
    }

    #[test]
    fn test_dual_value_routing() {
        let script = FixtureScript {
            duals: Some(vec![3.5, -0.25]),
            ..FixtureScript::default()
        };
        let (native, x, r) = native_with(script);
        assert_eq!(dual_value(&native, r), 3.5);
        assert_eq!(dual_value(&native, x), -0.25);
        assert_eq!(dual_value(&native, Vid::new(999)), 0.0);
    }

    #[test]
    fn test_dual_value_zero_without_data() {
        let script = FixtureScript {
            return_code: SolveReturn::Optimal,
            ..FixtureScript::default()
        };
        let (native, x, _) = native_with(script);
        assert_eq!(dual_value(&native, x), 0.0);
    }
}
