use super::{CommandResult, Result};
use crate::model::{Model, Predicate};

/// Installs a single-field keyword predicate as the active filter.
///
/// Non-destructive and idempotent: the canonical list is untouched and
/// reapplying the same predicate yields the same view.
#[derive(Debug, Clone, PartialEq)]
pub struct FindCommand {
    predicate: Predicate,
}

impl FindCommand {
    pub const COMMAND_WORD: &'static str = "find";
    pub const MESSAGE_USAGE: &'static str = "find: Finds all assignments whose chosen field matches \
        any of the specified keywords and displays them as a list with index numbers.\n\
        Exactly one field prefix must be given.\n\
        Parameters: n/NAME [MORE NAMES] | mod/MODULE_CODE [MORE MODULE_CODES] | \
        d/DEADLINE [MORE DEADLINES] | priority/PRIORITY [MORE PRIORITIES]\n\
        Example: find n/lab tutorial";
    pub const MORE_THAN_ONE_PREFIX_MESSAGE: &'static str =
        "Only one field can be searched at a time. Please provide exactly one prefix.";
    pub const INVALID_DATE_OR_TIME_MESSAGE: &'static str = "Invalid date or time provided. \
        The date should be in dd-MM-yyyy format and the time should be a 4-digit 24-hour clock time, \
        e.g. 23-10-2020, 1200";

    pub fn new(predicate: Predicate) -> Self {
        Self { predicate }
    }

    pub(super) fn execute(&self, model: &mut Model) -> Result<CommandResult> {
        model.set_filter(self.predicate.clone());
        let matched = model.filtered_view().len();

        Ok(CommandResult::message(format!("{matched} assignments listed!")))
    }
}
