//! Write-back of engine results into model-id space.

use crate::engine::LpEngine;
use crate::translate::NativeModel;
use salix_core::Model;

/// Copy the primal solution back into the model.
///
/// All-or-nothing: when the engine has no primal solution (abort,
/// infeasibility, numeric failure) the model keeps its previous values.
/// Ordinary rows receive their activities, variables their primal values,
/// and the goal row the engine's objective value.
pub(crate) fn extract_results<E: LpEngine>(model: &mut Model, native: &NativeModel<E>) {
    let Some(solution) = native.engine.primal_solution() else {
        tracing::warn!(
            component = "lpsolve",
            operation = "extract_results",
            status = "warn",
            "No primal solution available; model values left untouched"
        );
        return;
    };

    let row_count = native.engine.row_count();
    let expected = 1 + native.engine.original_row_count() + native.engine.original_column_count();
    if solution.len() < expected {
        tracing::warn!(
            component = "lpsolve",
            operation = "extract_results",
            status = "warn",
            got = solution.len(),
            expected,
            "Engine returned a short solution vector; skipping write-back"
        );
        return;
    }

    for (&id, &column) in &native.columns {
        model.set_value(id, solution[row_count + column]);
    }
    for (&id, &row) in &native.rows {
        model.set_value(id, solution[row]);
    }
    if let Some(goal) = model.goal().copied() {
        model.set_value(goal.row, native.engine.objective_value());
    }

    tracing::debug!(
        component = "lpsolve",
        operation = "extract_results",
        status = "success",
        variables = native.columns.len(),
        rows = native.rows.len(),
        "Wrote solution values back into the model"
    );
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::fixture::{FixtureEngine, FixtureScript};
    use crate::translate::build_native;
    use salix_core::{Row, Sense, Variable};

    fn ranged_model() -> (Model, salix_core::Vid, salix_core::Vid, salix_core::Vid) {
        let mut model = Model::new();
        let x = model.add_variable(Variable::continuous()).unwrap();
        let y = model.add_variable(Variable::continuous()).unwrap();
        let r = model.add_row(Row::linear().with_bounds(0.0, 10.0)).unwrap();
        model.set_coefficient(r, x, 1.0).unwrap();
        model.set_coefficient(r, y, 2.0).unwrap();
        (model, x, y, r)
    }

    #[test]
    fn test_values_written_back() {
        let (mut model, x, y, r) = ranged_model();
        let goal = model.add_goal(None, 1, Sense::Minimize).unwrap();
        model.set_coefficient(goal, x, 1.0).unwrap();
        model.set_coefficient(goal, y, 3.0).unwrap();

        let script = FixtureScript {
            primal: Some(vec![2.0, 3.0]),
            ..FixtureScript::default()
        };
        let mut native =
            build_native(&model, move |n| Ok(FixtureEngine::scripted(n, script))).unwrap();
        native.engine.solve(&mut || false);

        extract_results(&mut model, &native);
        assert_eq!(model.value(x), 2.0);
        assert_eq!(model.value(y), 3.0);
        assert_eq!(model.value(r), 8.0); // 1*2 + 2*3
        assert_eq!(model.value(goal), 11.0); // 1*2 + 3*3
    }

    #[test]
    fn test_failed_primal_is_a_full_no_op() {
        let (mut model, x, _, r) = ranged_model();
        model.set_value(x, 99.0);
        model.set_value(r, 42.0);

        let script = FixtureScript {
            primal: Some(vec![2.0, 3.0]),
            fail_primal: true,
            ..FixtureScript::default()
        };
        let mut native =
            build_native(&model, move |n| Ok(FixtureEngine::scripted(n, script))).unwrap();
        native.engine.solve(&mut || false);

        extract_results(&mut model, &native);
        assert_eq!(model.value(x), 99.0);
        assert_eq!(model.value(r), 42.0);
    }

    #[test]
    fn test_infeasible_outcome_is_a_full_no_op() {
        let (mut model, x, _, _) = ranged_model();
        let script = FixtureScript {
            return_code: crate::engine::SolveReturn::Infeasible,
            ..FixtureScript::default()
        };
        let mut native =
            build_native(&model, move |n| Ok(FixtureEngine::scripted(n, script))).unwrap();
        native.engine.solve(&mut || false);

        extract_results(&mut model, &native);
        assert_eq!(model.value(x), 0.0);
    }
}
