use super::{CommandResult, Result};
use crate::model::{Model, Predicate};

/// Shows all assignments, or only those due within a number of days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCommand {
    days: Option<u32>,
}

impl ListCommand {
    pub const COMMAND_WORD: &'static str = "list";
    pub const MESSAGE_USAGE: &'static str = "list: Lists all your assignments, or only those due \
        within the given number of days.\n\
        Parameters: [NUMBER_OF_DAYS] (must be a positive integer between 1 and 50)\n\
        Examples: \nlist\nlist 3";

    pub fn show_all() -> Self {
        Self { days: None }
    }

    pub fn due_within(days: u32) -> Self {
        Self { days: Some(days) }
    }

    pub(super) fn execute(&self, model: &mut Model) -> Result<CommandResult> {
        match self.days {
            None => {
                model.set_filter(Predicate::ShowAll);
                Ok(CommandResult::message("Listed all assignments"))
            }
            Some(days) => {
                model.set_filter(Predicate::DueWithinDays(days));
                Ok(CommandResult::message(format!(
                    "Listed all assignments due in {days} day(s)"
                )))
            }
        }
    }
}
