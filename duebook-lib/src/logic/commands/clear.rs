use super::{CommandResult, Result};
use crate::model::{Model, Predicate};

/// Empties the canonical list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearCommand;

impl ClearCommand {
    pub const COMMAND_WORD: &'static str = "clear";
    const MESSAGE_SUCCESS: &'static str = "Your assignment list has been cleared!";

    pub(super) fn execute(&self, model: &mut Model) -> Result<CommandResult> {
        model.clear();
        model.set_filter(Predicate::ShowAll);

        Ok(CommandResult::message(Self::MESSAGE_SUCCESS))
    }
}
