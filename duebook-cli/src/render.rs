use colored::Colorize;
use duebook_lib::Model;
use duebook_lib::logic::commands::{
    AddCommand, DeleteCommand, EditCommand, FindCommand, ListCommand, Toggle,
};

/// Prints the displayed assignment list and, when any reminders are set,
/// the reminders list. Both are numbered one-based, matching the indexes
/// commands accept.
pub fn view(model: &Model) {
    let assignments = model.filtered_view();

    if assignments.is_empty() {
        println!("{}", "No assignments to show.".dimmed());
    } else {
        println!("{}", "Your assignments:".bold());
        for (slot, assignment) in assignments.iter().enumerate() {
            println!("  {}. {assignment}", slot.saturating_add(1));
        }
    }

    let reminders = model.reminded_view();
    if !reminders.is_empty() {
        println!("{}", "Your reminders:".bold());
        for (slot, assignment) in reminders.iter().enumerate() {
            println!("  {}. {assignment}", slot.saturating_add(1));
        }
    }
}

pub fn help() {
    let usages = [
        AddCommand::MESSAGE_USAGE,
        EditCommand::MESSAGE_USAGE,
        DeleteCommand::MESSAGE_USAGE,
        FindCommand::MESSAGE_USAGE,
        ListCommand::MESSAGE_USAGE,
        Toggle::MarkDone.usage(),
        Toggle::MarkUndone.usage(),
        Toggle::SetRemind.usage(),
        Toggle::ClearRemind.usage(),
        "clear: Removes every assignment from your assignment list.",
        "help: Shows this message.",
        "exit: Quits duebook.",
    ];

    for usage in usages {
        println!("{usage}\n");
    }
}
