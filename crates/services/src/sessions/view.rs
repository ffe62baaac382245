use serde::Serialize;

use quiz_core::model::{Evaluation, GameSettings, Phase};

use super::service::SessionService;

//
// ─── GAME VIEW ────────────────────────────────────────────────────────────────
//

/// Read-only snapshot of the game for the presenter.
///
/// Carries everything a UI needs to render a frame: the phase, the prompt and
/// the four candidate answer values in display order, the running totals, and
/// the feedback message with its dismiss-button label while an alert is up.
/// In `Setup` the sticky settings let pickers show the previous selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub phase: Phase,
    pub settings: GameSettings,
    pub prompt: Option<String>,
    pub choices: Vec<u32>,
    pub score: u32,
    pub remaining: usize,
    pub message: Option<String>,
    pub dismiss_label: Option<&'static str>,
}

impl GameView {
    /// Snapshot of the setup screen, before or between games.
    #[must_use]
    pub fn setup(settings: GameSettings) -> Self {
        Self {
            phase: Phase::Setup,
            settings,
            prompt: None,
            choices: Vec::new(),
            score: 0,
            remaining: 0,
            message: None,
            dismiss_label: None,
        }
    }

    /// Snapshot of a running session.
    #[must_use]
    pub fn from_session(session: &SessionService) -> Self {
        let (message, dismiss_label) = match session.phase() {
            Phase::Feedback(Evaluation::Correct) => {
                (Some("Correct!".to_owned()), Some("New Question"))
            }
            Phase::Feedback(Evaluation::Wrong) => (Some("Wrong!".to_owned()), Some("Try again")),
            Phase::Won => (
                Some(format!(
                    "You win — Your score is: {}",
                    session.score()
                )),
                Some("Start new game"),
            ),
            Phase::Setup | Phase::Playing => (None, None),
        };

        Self {
            phase: session.phase(),
            settings: session.settings(),
            prompt: Some(session.current_question().prompt().to_owned()),
            choices: session.choices().iter().map(|q| q.answer()).collect(),
            score: session.score(),
            remaining: session.remaining(),
            message,
            dismiss_label,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
