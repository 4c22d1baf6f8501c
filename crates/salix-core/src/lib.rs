//! Abstract LP/MIP model with a single id space for variables and rows.

pub mod ids;
pub mod model;
pub mod types;

pub use ids::Vid;
pub use model::{Model, ModelError};
pub use types::{Bounds, Goal, Row, RowKind, Sense, Variable};
