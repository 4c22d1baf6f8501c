//! lp_solve adapter for salix models.
//!
//! Translates a [`salix_core::Model`] into the engine's contiguous 1-based
//! column/row form, drives the solve through an atomic lifecycle that
//! tolerates concurrent shutdown, writes primal values back into the model,
//! and exposes dual values and sensitivity ranges in model-id space.
//!
//! The engine is reached through the [`LpEngine`] trait. The native
//! lp_solve backend is compiled behind the `lpsolve` feature; the scripted
//! [`FixtureEngine`] backs the test suite without the native library.

pub mod engine;
#[cfg(feature = "lpsolve")]
pub mod ffi;
pub mod fixture;
mod lifecycle;
mod sensitivity;
mod solution;
pub mod solver;
mod status;
pub mod translate;

pub use engine::{
    ConstraintKind, EngineError, EngineStatistic, LpEngine, ModelFormat, RhsRanging, SimplexType,
    SolveReturn, SosType,
};
#[cfg(feature = "lpsolve")]
pub use ffi::LpSolveEngine;
pub use fixture::{FixtureEngine, FixtureScript};
pub use lifecycle::SolverState;
pub use sensitivity::SensitivityRange;
pub use solver::{LpSolver, SolvedGoal};
pub use translate::NativeModel;
