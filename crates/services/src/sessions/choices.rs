use rand::Rng;
use rand::rng;
use rand::seq::SliceRandom;

use quiz_core::model::Question;

/// Number of candidate answers offered per question.
pub const CHOICE_COUNT: usize = 4;

/// Picks the four candidate answers for the question at `current`.
///
/// Takes the four consecutive questions starting at `current`, or the last
/// four when that window would overrun the set, then shuffles the window
/// independently of the presentation order. Either branch contains the
/// current question itself, so at least one choice always matches its answer
/// value without any extra lookup.
#[must_use]
pub fn choice_window(questions: &[Question], current: usize) -> Vec<Question> {
    choice_window_with(questions, current, &mut rng())
}

/// Same as [`choice_window`] with a caller-supplied RNG.
pub fn choice_window_with<R: Rng + ?Sized>(
    questions: &[Question],
    current: usize,
    rng: &mut R,
) -> Vec<Question> {
    debug_assert!(questions.len() >= CHOICE_COUNT, "question set below window size");
    debug_assert!(current < questions.len(), "current index out of bounds");

    let start = if current + CHOICE_COUNT < questions.len() {
        current
    } else {
        questions.len().saturating_sub(CHOICE_COUNT)
    };
    let end = questions.len().min(start + CHOICE_COUNT);

    let mut window = questions[start..end].to_vec();
    window.shuffle(rng);
    window
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
