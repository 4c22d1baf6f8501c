//! Atomic solve lifecycle state.

use std::sync::atomic::{AtomicU8, Ordering};

/// Lifecycle of a solver instance.
///
/// `Start → Solving → {Solved | Aborting → Aborted}`, and any state may
/// move to `Disposing → Disposed` through shutdown. Transitions out of
/// `Start` race between a solving thread and a disposing thread and are
/// claimed with compare-and-exchange; the remaining transitions belong to
/// a single thread and use plain stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SolverState {
    Start = 0,
    Solving = 1,
    Solved = 2,
    Aborting = 3,
    Aborted = 4,
    Disposing = 5,
    Disposed = 6,
}

impl SolverState {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => SolverState::Start,
            1 => SolverState::Solving,
            2 => SolverState::Solved,
            3 => SolverState::Aborting,
            4 => SolverState::Aborted,
            5 => SolverState::Disposing,
            _ => SolverState::Disposed,
        }
    }

    /// True once a solve has finished, successfully or not.
    pub fn is_settled(self) -> bool {
        matches!(self, SolverState::Solved | SolverState::Aborted)
    }
}

/// Shared state cell.
#[derive(Debug)]
pub(crate) struct StateCell(AtomicU8);

impl StateCell {
    pub(crate) fn new() -> Self {
        Self(AtomicU8::new(SolverState::Start as u8))
    }

    pub(crate) fn load(&self) -> SolverState {
        SolverState::from_u8(self.0.load(Ordering::SeqCst))
    }

    pub(crate) fn store(&self, state: SolverState) {
        self.0.store(state as u8, Ordering::SeqCst);
    }

    /// Attempt `current → next`; on failure returns the observed state.
    pub(crate) fn transition(
        &self,
        current: SolverState,
        next: SolverState,
    ) -> Result<(), SolverState> {
        self.0
            .compare_exchange(
                current as u8,
                next as u8,
                Ordering::SeqCst,
                Ordering::SeqCst,
            )
            .map(|_| ())
            .map_err(SolverState::from_u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_start() {
        let cell = StateCell::new();
        assert_eq!(cell.load(), SolverState::Start);
    }

    #[test]
    fn test_transition_claims_once() {
        let cell = StateCell::new();
        assert!(cell.transition(SolverState::Start, SolverState::Solving).is_ok());
        assert_eq!(
            cell.transition(SolverState::Start, SolverState::Solving),
            Err(SolverState::Solving)
        );
    }

    #[test]
    fn test_settled_states() {
        assert!(SolverState::Solved.is_settled());
        assert!(SolverState::Aborted.is_settled());
        assert!(!SolverState::Solving.is_settled());
        assert!(!SolverState::Disposed.is_settled());
    }
}
