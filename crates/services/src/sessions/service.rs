use chrono::{DateTime, Utc};
use rand::Rng;
use rand::rng;
use std::fmt;

use quiz_core::model::{Evaluation, GameSettings, Phase, Question};

use super::choices::{CHOICE_COUNT, choice_window_with};
use crate::error::SessionError;
use crate::question_bank::QuestionBank;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz session for one game.
///
/// Steps through a shuffled question set, evaluating picked answers by value
/// and counting down `remaining` on each correct one. The phase of a running
/// session is never `Setup`; only [`Phase::Won`] is terminal.
#[derive(Clone)]
pub struct SessionService {
    settings: GameSettings,
    questions: Vec<Question>,
    current: usize,
    choices: Vec<Question>,
    score: u32,
    remaining: usize,
    phase: Phase,
    started_at: DateTime<Utc>,
}

impl SessionService {
    /// Start a new game for the given settings.
    ///
    /// `started_at` should come from the workflow layer clock to keep time
    /// deterministic in tests.
    #[must_use]
    pub fn start(settings: GameSettings, started_at: DateTime<Utc>) -> Self {
        Self::start_with_rng(settings, started_at, &mut rng())
    }

    /// Same as [`SessionService::start`] with a caller-supplied RNG, so tests
    /// can seed both the question shuffle and the first answer window.
    pub fn start_with_rng<R: Rng + ?Sized>(
        settings: GameSettings,
        started_at: DateTime<Utc>,
        rng: &mut R,
    ) -> Self {
        let questions = QuestionBank::generate_with(settings.table(), rng);
        let remaining = settings.count().resolve(questions.len());
        let choices = choice_window_with(&questions, 0, rng);

        Self {
            settings,
            questions,
            current: 0,
            choices,
            score: 0,
            remaining,
            phase: Phase::Playing,
            started_at,
        }
    }

    #[must_use]
    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Correct answers still needed to win.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Size of the shuffled question set (`table * 4`).
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// The question currently on screen.
    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    /// The four candidate answers, in display order.
    #[must_use]
    pub fn choices(&self) -> &[Question] {
        &self.choices
    }

    /// Index of a choice whose value matches the current question.
    ///
    /// Present by construction: the answer window always includes the
    /// current question.
    #[must_use]
    pub fn correct_choice_index(&self) -> Option<usize> {
        let expected = self.current_question().answer();
        self.choices.iter().position(|q| q.answer() == expected)
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.phase.is_won()
    }

    /// Evaluate the choice at `choice_index` against the current question.
    ///
    /// The result is returned immediately; the presenter owns any reveal
    /// delay and calls [`SessionService::advance`] once the player dismisses
    /// the feedback.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotAwaitingAnswer` outside `Playing` and
    /// `SessionError::ChoiceOutOfRange` for an index outside the window;
    /// neither mutates any state.
    pub fn answer(&mut self, choice_index: usize) -> Result<Evaluation, SessionError> {
        if self.phase != Phase::Playing {
            return Err(SessionError::NotAwaitingAnswer { phase: self.phase });
        }
        if choice_index >= CHOICE_COUNT {
            return Err(SessionError::ChoiceOutOfRange {
                index: choice_index,
            });
        }

        // Value equality, not question identity: distinct facts sharing a
        // product (2 x 2 and 4 x 1) both count as correct.
        let picked = self.choices[choice_index].answer();
        let expected = self.current_question().answer();

        if picked == expected {
            self.score += 1;
            self.remaining -= 1;
            self.phase = if self.remaining == 0 {
                Phase::Won
            } else {
                Phase::Feedback(Evaluation::Correct)
            };
            Ok(Evaluation::Correct)
        } else {
            self.phase = Phase::Feedback(Evaluation::Wrong);
            Ok(Evaluation::Wrong)
        }
    }

    /// Dismiss the feedback and return to `Playing`.
    ///
    /// After a correct answer the session moves to the next question; after
    /// a wrong one the same question is replayed. Either way the answer
    /// window is freshly reshuffled.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotInFeedback` outside `Feedback`. A won game
    /// is restarted by the workflow layer, not advanced here.
    pub fn advance(&mut self) -> Result<(), SessionError> {
        self.advance_with_rng(&mut rng())
    }

    /// Same as [`SessionService::advance`] with a caller-supplied RNG.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotInFeedback` outside `Feedback`.
    pub fn advance_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), SessionError> {
        match self.phase {
            Phase::Feedback(Evaluation::Correct) => {
                // The win condition is remaining == 0, never index
                // exhaustion, so the index wraps when the requested count
                // exceeds the question set.
                self.current = (self.current + 1) % self.questions.len();
            }
            Phase::Feedback(Evaluation::Wrong) => {
                // Replay the identical question.
            }
            _ => return Err(SessionError::NotInFeedback { phase: self.phase }),
        }

        self.choices = choice_window_with(&self.questions, self.current, rng);
        self.phase = Phase::Playing;
        Ok(())
    }
}

impl fmt::Debug for SessionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionService")
            .field("settings", &self.settings)
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("score", &self.score)
            .field("remaining", &self.remaining)
            .field("phase", &self.phase)
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{QuestionCount, Table};
    use quiz_core::time::fixed_now;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn settings(table: u8, count: QuestionCount) -> GameSettings {
        GameSettings::new(Table::new(table).unwrap(), count)
    }

    fn start(table: u8, count: QuestionCount, seed: u64) -> SessionService {
        SessionService::start_with_rng(
            settings(table, count),
            fixed_now(),
            &mut StdRng::seed_from_u64(seed),
        )
    }

    fn wrong_choice_index(session: &SessionService) -> Option<usize> {
        let expected = session.current_question().answer();
        session
            .choices()
            .iter()
            .position(|q| q.answer() != expected)
    }

    #[test]
    fn start_resolves_count_and_selects_choices() {
        let session = start(3, QuestionCount::All, 1);
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.total_questions(), 12);
        assert_eq!(session.remaining(), 12);
        assert_eq!(session.score(), 0);
        assert_eq!(session.choices().len(), CHOICE_COUNT);
        assert_eq!(session.started_at(), fixed_now());
        assert!(session.correct_choice_index().is_some());
    }

    #[test]
    fn numeric_count_overrides_set_size() {
        let session = start(12, QuestionCount::Five, 1);
        assert_eq!(session.total_questions(), 48);
        assert_eq!(session.remaining(), 5);
    }

    #[test]
    fn correct_answer_scores_and_enters_feedback() {
        let mut session = start(4, QuestionCount::Ten, 5);
        let index = session.correct_choice_index().unwrap();

        let evaluation = session.answer(index).unwrap();

        assert_eq!(evaluation, Evaluation::Correct);
        assert_eq!(session.phase(), Phase::Feedback(Evaluation::Correct));
        assert_eq!(session.score(), 1);
        assert_eq!(session.remaining(), 9);
    }

    #[test]
    fn wrong_answer_changes_only_the_phase() {
        let mut session = start(4, QuestionCount::Ten, 5);
        let prompt_before = session.current_question().prompt().to_owned();
        let index = wrong_choice_index(&session).expect("window has a wrong value");

        let evaluation = session.answer(index).unwrap();

        assert_eq!(evaluation, Evaluation::Wrong);
        assert_eq!(session.phase(), Phase::Feedback(Evaluation::Wrong));
        assert_eq!(session.score(), 0);
        assert_eq!(session.remaining(), 10);
        assert_eq!(session.current_question().prompt(), prompt_before);
    }

    #[test]
    fn advance_after_wrong_replays_the_same_question() {
        let mut session = start(4, QuestionCount::Ten, 5);
        let prompt_before = session.current_question().prompt().to_owned();
        let index = wrong_choice_index(&session).unwrap();
        session.answer(index).unwrap();

        session.advance().unwrap();

        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.current_question().prompt(), prompt_before);
        // The replayed question still has a correct choice in its fresh window.
        assert!(session.correct_choice_index().is_some());
    }

    #[test]
    fn advance_after_correct_moves_to_the_next_question() {
        let mut session = start(4, QuestionCount::Ten, 5);
        let first_prompt = session.current_question().prompt().to_owned();
        let index = session.correct_choice_index().unwrap();
        session.answer(index).unwrap();

        session.advance().unwrap();

        assert_eq!(session.phase(), Phase::Playing);
        assert_ne!(session.current_question().prompt(), first_prompt);
    }

    #[test]
    fn drains_to_won_with_score_equal_to_count() {
        let mut session = start(3, QuestionCount::All, 8);
        let total = session.remaining();

        for step in 0..total {
            let index = session.correct_choice_index().unwrap();
            session.answer(index).unwrap();
            if step + 1 < total {
                session.advance().unwrap();
            }
        }

        assert!(session.is_won());
        assert_eq!(session.score(), u32::try_from(total).unwrap());
        assert_eq!(session.remaining(), 0);
    }

    #[test]
    fn requested_count_beyond_set_wraps_the_index() {
        // Table 1 has four questions but five correct answers are requested;
        // the index must cycle back to the start instead of overrunning.
        let mut session = start(1, QuestionCount::Five, 2);
        assert_eq!(session.total_questions(), 4);
        assert_eq!(session.remaining(), 5);

        for step in 0..5 {
            let index = session.correct_choice_index().unwrap();
            session.answer(index).unwrap();
            if step < 4 {
                session.advance().unwrap();
            }
        }

        assert!(session.is_won());
        assert_eq!(session.score(), 5);
    }

    #[test]
    fn won_rejects_further_answers() {
        let mut session = start(1, QuestionCount::All, 2);
        for step in 0..4 {
            let index = session.correct_choice_index().unwrap();
            session.answer(index).unwrap();
            if step < 3 {
                session.advance().unwrap();
            }
        }
        assert!(session.is_won());

        let err = session.answer(0).unwrap_err();
        assert_eq!(err, SessionError::NotAwaitingAnswer { phase: Phase::Won });
        assert_eq!(session.score(), 4);
    }

    #[test]
    fn answer_rejects_out_of_range_index_without_mutation() {
        let mut session = start(2, QuestionCount::Five, 3);
        let err = session.answer(CHOICE_COUNT).unwrap_err();
        assert_eq!(err, SessionError::ChoiceOutOfRange { index: 4 });
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.score(), 0);
        assert_eq!(session.remaining(), 5);
    }

    #[test]
    fn answer_rejects_feedback_phase() {
        let mut session = start(2, QuestionCount::Five, 3);
        let index = session.correct_choice_index().unwrap();
        session.answer(index).unwrap();

        let err = session.answer(0).unwrap_err();
        assert_eq!(
            err,
            SessionError::NotAwaitingAnswer {
                phase: Phase::Feedback(Evaluation::Correct)
            }
        );
    }

    #[test]
    fn advance_rejects_playing_and_won() {
        let mut session = start(1, QuestionCount::All, 6);
        let err = session.advance().unwrap_err();
        assert_eq!(err, SessionError::NotInFeedback { phase: Phase::Playing });

        for step in 0..4 {
            let index = session.correct_choice_index().unwrap();
            session.answer(index).unwrap();
            if step < 3 {
                session.advance().unwrap();
            }
        }
        let err = session.advance().unwrap_err();
        assert_eq!(err, SessionError::NotInFeedback { phase: Phase::Won });
    }
}
