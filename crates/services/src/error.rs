//! Shared error types for the quiz engine.
//!
//! Invalid transitions are contract violations: the presenter is expected to
//! gate intents by the current phase, so these errors reject the call without
//! mutating any state.

use thiserror::Error;

use quiz_core::model::Phase;

/// Errors emitted by session transitions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no game is running")]
    NoActiveGame,

    #[error("cannot answer while in {phase:?}")]
    NotAwaitingAnswer { phase: Phase },

    #[error("cannot advance while in {phase:?}")]
    NotInFeedback { phase: Phase },

    #[error("answer choice index {index} is out of range")]
    ChoiceOutOfRange { index: usize },
}
