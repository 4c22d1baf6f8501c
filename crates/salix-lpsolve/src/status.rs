//! Engine return-code to result mapping.

use crate::engine::{SimplexType, SolveReturn};
use salix_solver::LinearResult;

/// Classify an LP outcome from the return code and the simplex direction
/// the engine ran with.
///
/// Under a primal first phase, infeasible and unbounded reports refer to
/// the primal problem. Under a dual first phase, a dual-infeasible report
/// only proves the primal is infeasible or unbounded, and a dual-unbounded
/// report is surfaced as `UnboundedDual`.
pub(crate) fn lp_result(code: SolveReturn, simplex: SimplexType) -> LinearResult {
    if simplex.is_primal_primal() {
        match code {
            SolveReturn::Optimal => LinearResult::Optimal,
            SolveReturn::Infeasible => LinearResult::InfeasiblePrimal,
            SolveReturn::Unbounded => LinearResult::UnboundedPrimal,
            _ => LinearResult::Invalid,
        }
    } else {
        match code {
            SolveReturn::Optimal => LinearResult::Optimal,
            SolveReturn::Infeasible => LinearResult::InfeasibleOrUnbounded,
            SolveReturn::Unbounded => LinearResult::UnboundedDual,
            _ => LinearResult::Invalid,
        }
    }
}

/// Classify a MIP outcome. Unboundedness is not distinguished once
/// branch-and-bound is involved.
pub(crate) fn mip_result(code: SolveReturn, simplex: SimplexType) -> LinearResult {
    match code {
        SolveReturn::Optimal => LinearResult::Optimal,
        SolveReturn::Infeasible => {
            if simplex.is_primal_primal() {
                LinearResult::InfeasiblePrimal
            } else {
                LinearResult::InfeasibleOrUnbounded
            }
        }
        _ => LinearResult::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_SIMPLEX: [SimplexType; 4] = [
        SimplexType::PrimalPrimal,
        SimplexType::DualPrimal,
        SimplexType::PrimalDual,
        SimplexType::DualDual,
    ];

    #[test]
    fn test_lp_optimal_regardless_of_direction() {
        for simplex in ALL_SIMPLEX {
            assert_eq!(
                lp_result(SolveReturn::Optimal, simplex),
                LinearResult::Optimal
            );
        }
    }

    #[test]
    fn test_lp_primal_primal_mapping() {
        assert_eq!(
            lp_result(SolveReturn::Infeasible, SimplexType::PrimalPrimal),
            LinearResult::InfeasiblePrimal
        );
        assert_eq!(
            lp_result(SolveReturn::Unbounded, SimplexType::PrimalPrimal),
            LinearResult::UnboundedPrimal
        );
    }

    #[test]
    fn test_lp_dual_phase_mapping() {
        for simplex in [
            SimplexType::DualPrimal,
            SimplexType::PrimalDual,
            SimplexType::DualDual,
        ] {
            assert_eq!(
                lp_result(SolveReturn::Infeasible, simplex),
                LinearResult::InfeasibleOrUnbounded
            );
            assert_eq!(
                lp_result(SolveReturn::Unbounded, simplex),
                LinearResult::UnboundedDual
            );
        }
    }

    #[test]
    fn test_lp_other_codes_are_invalid() {
        let others = [
            SolveReturn::Suboptimal,
            SolveReturn::Degenerate,
            SolveReturn::NumericalFailure,
            SolveReturn::UserAbort,
            SolveReturn::Timeout,
            SolveReturn::OutOfMemory,
            SolveReturn::Presolved,
            SolveReturn::ProcedureFailure,
            SolveReturn::ProcedureBreak,
            SolveReturn::FeasibleFound,
            SolveReturn::NoFeasibleFound,
            SolveReturn::Unknown(42),
        ];
        for code in others {
            for simplex in ALL_SIMPLEX {
                assert_eq!(lp_result(code, simplex), LinearResult::Invalid);
            }
        }
    }

    #[test]
    fn test_mip_mapping() {
        for simplex in ALL_SIMPLEX {
            assert_eq!(
                mip_result(SolveReturn::Optimal, simplex),
                LinearResult::Optimal
            );
        }
        assert_eq!(
            mip_result(SolveReturn::Infeasible, SimplexType::PrimalPrimal),
            LinearResult::InfeasiblePrimal
        );
        assert_eq!(
            mip_result(SolveReturn::Infeasible, SimplexType::DualDual),
            LinearResult::InfeasibleOrUnbounded
        );
        assert_eq!(
            mip_result(SolveReturn::Unbounded, SimplexType::PrimalPrimal),
            LinearResult::Invalid
        );
        assert_eq!(
            mip_result(SolveReturn::Timeout, SimplexType::DualPrimal),
            LinearResult::Invalid
        );
    }
}
