mod phase;
mod question;
mod settings;

pub use phase::{Evaluation, Phase};
pub use question::Question;
pub use settings::{FACTS_PER_TABLE, GameSettings, QuestionCount, Table, TableError};
