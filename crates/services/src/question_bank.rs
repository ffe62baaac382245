use rand::Rng;
use rand::rng;
use rand::seq::SliceRandom;

use quiz_core::model::{FACTS_PER_TABLE, Question, Table};

//
// ─── QUESTION BANK ────────────────────────────────────────────────────────────
//

/// Generates the shuffled question set for a table.
///
/// Stateless: every call produces a fresh, independently shuffled set.
pub struct QuestionBank;

impl QuestionBank {
    /// Emits every fact `i x j` (i in 1..=table, j in 1..=4), then shuffles
    /// the set once. The shuffled order is the presentation order for the
    /// whole game.
    #[must_use]
    pub fn generate(table: Table) -> Vec<Question> {
        Self::generate_with(table, &mut rng())
    }

    /// Same as [`QuestionBank::generate`] with a caller-supplied RNG, so
    /// tests can seed the shuffle.
    pub fn generate_with<R: Rng + ?Sized>(table: Table, rng: &mut R) -> Vec<Question> {
        let mut questions = Vec::with_capacity(table.question_total());
        for i in 1..=u32::from(table.value()) {
            for j in 1..=FACTS_PER_TABLE as u32 {
                questions.push(Question::fact(i, j));
            }
        }
        questions.shuffle(rng);
        questions
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
