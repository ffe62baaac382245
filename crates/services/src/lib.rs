#![forbid(unsafe_code)]

pub mod error;
pub mod question_bank;
pub mod sessions;

pub use quiz_core::Clock;
pub use sessions as session;

pub use error::SessionError;
pub use question_bank::QuestionBank;

pub use sessions::{CHOICE_COUNT, GameService, GameView, SessionService};
