use serde::{Deserialize, Serialize};

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A single multiplication fact, immutable once created.
///
/// The prompt is the exact text the presenter displays; the answer is the
/// product the player must pick. Answer evaluation compares products by
/// value, never question identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    prompt: String,
    answer: u32,
}

impl Question {
    /// Builds the fact `i x j`.
    #[must_use]
    pub fn fact(i: u32, j: u32) -> Self {
        Self {
            prompt: format!("How much is: {i} x {j} = ?"),
            answer: i * j,
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn answer(&self) -> u32 {
        self.answer
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
