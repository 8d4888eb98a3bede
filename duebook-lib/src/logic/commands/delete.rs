use super::{CommandResult, Result, validation};
use crate::logic::Index;
use crate::model::Model;

/// Deletes one or more assignments addressed by their positions in the
/// currently displayed filtered view.
///
/// All-or-nothing: every index is validated before the first removal.
/// Removal then runs highest index first so earlier removals cannot shift
/// a not-yet-processed position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    indexes: Vec<Index>,
}

impl DeleteCommand {
    pub const COMMAND_WORD: &'static str = "delete";
    pub const MESSAGE_USAGE: &'static str =
        "delete: Deletes the assignment identified by the index number(s) used in the displayed assignment list.\n\
        Parameters: INDEX [MORE INDEXES] (must be a positive integer, must not contain duplicates \
        and cannot be greater than the size of the current assignment list)\n\
        Examples: \ndelete 1\ndelete 1 2";

    pub fn new(indexes: Vec<Index>) -> Self {
        Self { indexes }
    }

    pub(super) fn execute(&self, model: &mut Model) -> Result<CommandResult> {
        let view = model.filtered_view();

        validation::check_no_duplicate_indexes(&self.indexes)?;
        validation::check_indexes_in_bounds(&self.indexes, view.len(), Self::MESSAGE_USAGE)?;

        let mut sorted = self.indexes.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));

        let mut deleted = Vec::with_capacity(sorted.len());

        for index in &sorted {
            if let Some(target) = view.get(index.zero_based()) {
                model.delete(target)?;
                deleted.push(target.to_string());
            }
        }

        Ok(CommandResult::message(format!(
            "Deleted Assignment(s): {}",
            deleted.join("; ")
        )))
    }
}
