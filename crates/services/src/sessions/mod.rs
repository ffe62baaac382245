mod choices;
mod service;
mod view;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use choices::{CHOICE_COUNT, choice_window, choice_window_with};
pub use service::SessionService;
pub use view::GameView;
pub use workflow::GameService;
