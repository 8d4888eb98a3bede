use super::{CommandResult, Result};
use crate::model::{Assignment, Model};

/// Appends a new assignment to the canonical list.
#[derive(Debug, Clone, PartialEq)]
pub struct AddCommand {
    assignment: Assignment,
}

impl AddCommand {
    pub const COMMAND_WORD: &'static str = "add";
    pub const MESSAGE_USAGE: &'static str = "add: Adds an assignment to your assignment list.\n\
        Parameters: n/NAME d/DEADLINE (dd-MM-yyyy HHmm) mod/MODULE_CODE [priority/PRIORITY]\n\
        Example: add n/Lab Report 3 d/23-10-2020 1200 mod/CS2100 priority/HIGH";

    pub fn new(assignment: Assignment) -> Self {
        Self { assignment }
    }

    pub(super) fn execute(&self, model: &mut Model) -> Result<CommandResult> {
        model.add(self.assignment.clone())?;

        Ok(CommandResult::message(format!(
            "New assignment added: {}",
            self.assignment
        )))
    }
}
