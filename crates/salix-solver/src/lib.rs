//! Shared solver abstractions for the salix LP/MIP adapter.
//!
//! # Overview
//!
//! - [`LpConfig`]: Flat tuning-parameter surface passed through to the engine
//! - [`LinearResult`]: Normalized outcome taxonomy
//! - [`SolverError`]: Error types for solver operations
//! - [`properties`]: String keys for the statistics query surface

mod config;
mod error;
pub mod properties;
mod result;

pub use config::{AbortCallback, LogCallback, LpConfig, MessageCallback};
pub use error::SolverError;
pub use result::LinearResult;
