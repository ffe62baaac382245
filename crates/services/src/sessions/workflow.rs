use quiz_core::Clock;
use quiz_core::model::{Evaluation, GameSettings, Phase, QuestionCount, Table};

use super::service::SessionService;
use super::view::GameView;
use crate::error::SessionError;

//
// ─── GAME WORKFLOW ────────────────────────────────────────────────────────────
//

/// Routes presenter intents into the session state machine.
///
/// Owns the clock, the sticky settings carried across games, and the running
/// session when one exists (none means `Setup`). All mutation goes through
/// `&mut self`: one logical writer, no interior locking.
#[derive(Debug, Clone)]
pub struct GameService {
    clock: Clock,
    defaults: GameSettings,
    session: Option<SessionService>,
}

impl GameService {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            defaults: GameSettings::default(),
            session: None,
        }
    }

    /// Seeds the setup-screen defaults shown before the first game.
    #[must_use]
    pub fn with_defaults(mut self, settings: GameSettings) -> Self {
        self.defaults = settings;
        self
    }

    /// The current phase; `Setup` when no game is running.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.session.as_ref().map_or(Phase::Setup, SessionService::phase)
    }

    /// Settings that the setup pickers should show.
    #[must_use]
    pub fn defaults(&self) -> GameSettings {
        self.defaults
    }

    #[must_use]
    pub fn session(&self) -> Option<&SessionService> {
        self.session.as_ref()
    }

    /// Starts a new game, replacing any session in progress.
    ///
    /// An explicit restart is always allowed; the chosen settings become the
    /// defaults for the games after this one.
    pub fn start_game(&mut self, table: Table, count: QuestionCount) {
        let settings = GameSettings::new(table, count);
        self.defaults = settings;
        self.session = Some(SessionService::start(settings, self.clock.now()));
    }

    /// Evaluates the answer at `index` for the current question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotAwaitingAnswer` outside `Playing` (including
    /// `Setup`) and `SessionError::ChoiceOutOfRange` for an index outside the
    /// four-choice window.
    pub fn select_answer(&mut self, index: usize) -> Result<Evaluation, SessionError> {
        match self.session.as_mut() {
            Some(session) => session.answer(index),
            None => Err(SessionError::NotAwaitingAnswer {
                phase: Phase::Setup,
            }),
        }
    }

    /// Dismisses the feedback alert.
    ///
    /// In `Feedback` this moves to the next question (or replays the current
    /// one after a wrong answer). From `Won` it plays again: a fresh game
    /// with the same settings and a reset score.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotInFeedback` in `Setup` or `Playing`.
    pub fn advance_after_feedback(&mut self) -> Result<(), SessionError> {
        let Some(session) = self.session.as_mut() else {
            return Err(SessionError::NotInFeedback {
                phase: Phase::Setup,
            });
        };

        if session.phase() == Phase::Won {
            self.session = Some(SessionService::start(self.defaults, self.clock.now()));
            return Ok(());
        }
        session.advance()
    }

    /// Ends the running game and returns to `Setup`.
    ///
    /// The stored settings survive as the next defaults. Allowed at any point
    /// of a game, including while feedback is pending.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoActiveGame` when already in `Setup`.
    pub fn end_game(&mut self) -> Result<(), SessionError> {
        if self.session.take().is_none() {
            return Err(SessionError::NoActiveGame);
        }
        Ok(())
    }

    /// Read-only snapshot for the presenter.
    #[must_use]
    pub fn view(&self) -> GameView {
        match &self.session {
            Some(session) => GameView::from_session(session),
            None => GameView::setup(self.defaults),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
