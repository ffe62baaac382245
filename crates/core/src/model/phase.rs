use serde::{Deserialize, Serialize};

//
// ─── EVALUATION ───────────────────────────────────────────────────────────────
//

/// Immediate outcome of evaluating a selected answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Evaluation {
    /// The selected value matches the current question's product.
    Correct,
    /// The selected value does not match. The same question is replayed.
    Wrong,
}

//
// ─── PHASE ────────────────────────────────────────────────────────────────────
//

/// Authoritative stage of a game session.
///
/// One enumerated phase replaces the boolean flag combinations of a typical
/// UI state blob, so "correct", "wrong" and "won" can never be true at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No game running; table and count are being chosen.
    #[default]
    Setup,
    /// A question is on screen and awaiting an answer.
    Playing,
    /// An answer was evaluated; the presenter shows the result until the
    /// player dismisses it.
    Feedback(Evaluation),
    /// The requested number of correct answers was reached. Terminal for
    /// answering; the score is frozen.
    Won,
}

impl Phase {
    /// Returns true while an answer result is being shown.
    #[must_use]
    pub fn is_feedback(self) -> bool {
        matches!(self, Phase::Feedback(_))
    }

    /// Returns true once the game has been won.
    #[must_use]
    pub fn is_won(self) -> bool {
        matches!(self, Phase::Won)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
