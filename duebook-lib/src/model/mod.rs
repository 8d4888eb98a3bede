//! The in-memory assignment collection and its derived views.

use chrono::{Duration, Local, NaiveDateTime};
use thiserror::Error;
use tracing::debug;

use crate::model::fields::Priority;

pub mod assignment;
pub mod fields;

pub use assignment::Assignment;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("This assignment already exists in your assignment list")]
    DuplicateAssignment,
    #[error("This assignment is no longer in your assignment list")]
    MissingAssignment,
}

/// Selects which assignments appear in the filtered view.
///
/// Keyword variants hold the validated keywords of a single field and match
/// when ANY keyword matches that field, using the field's own comparison
/// rule. The predicate is an explicit piece of model state; only commands
/// change it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Predicate {
    #[default]
    ShowAll,
    /// Due between now and this many days from now.
    DueWithinDays(u32),
    NameContains(Vec<String>),
    ModuleCodeIs(Vec<String>),
    DeadlineMatches(Vec<String>),
    PriorityIs(Vec<Priority>),
}

impl Predicate {
    fn matches(&self, assignment: &Assignment, now: NaiveDateTime) -> bool {
        match self {
            Self::ShowAll => true,
            Self::DueWithinDays(days) => {
                let due = assignment.deadline().date_time();
                due >= now && due <= now + Duration::days(i64::from(*days))
            }
            Self::NameContains(keywords) => keywords
                .iter()
                .any(|keyword| assignment.name().contains_word(keyword)),
            Self::ModuleCodeIs(keywords) => keywords
                .iter()
                .any(|keyword| assignment.module_code().matches(keyword)),
            Self::DeadlineMatches(keywords) => keywords
                .iter()
                .any(|keyword| assignment.deadline().matches_keyword(keyword)),
            Self::PriorityIs(levels) => levels
                .iter()
                .any(|level| assignment.priority() == Some(*level)),
        }
    }
}

/// Owns the canonical assignment list and the active filter predicate.
///
/// The filtered and reminded views are recomputed from those two pieces on
/// every call; they are never stored, so they cannot drift from the
/// canonical list.
#[derive(Debug, Default)]
pub struct Model {
    assignments: Vec<Assignment>,
    filter: Predicate,
}

impl Model {
    /// Builds a model from a loaded assignment list. Value-duplicates are
    /// dropped, keeping the first occurrence.
    pub fn new(assignments: Vec<Assignment>) -> Self {
        let mut unique: Vec<Assignment> = Vec::with_capacity(assignments.len());

        for assignment in assignments {
            if unique.contains(&assignment) {
                debug!(%assignment, "dropping duplicate assignment from loaded data");
            } else {
                unique.push(assignment);
            }
        }

        Self {
            assignments: unique,
            filter: Predicate::ShowAll,
        }
    }

    /// The canonical, unfiltered list in insertion order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn contains(&self, assignment: &Assignment) -> bool {
        self.assignments.contains(assignment)
    }

    pub fn add(&mut self, assignment: Assignment) -> Result<()> {
        if self.contains(&assignment) {
            return Err(Error::DuplicateAssignment);
        }

        debug!(%assignment, "added assignment");
        self.assignments.push(assignment);

        Ok(())
    }

    /// Removes an assignment, located by structural equality.
    pub fn delete(&mut self, assignment: &Assignment) -> Result<()> {
        let position = self
            .assignments
            .iter()
            .position(|existing| existing == assignment)
            .ok_or(Error::MissingAssignment)?;

        self.assignments.remove(position);
        debug!(%assignment, "deleted assignment");

        Ok(())
    }

    /// Swaps `old` for `new`, locating `old` by structural equality. Fails
    /// if `old` is gone or if `new` would duplicate another assignment.
    pub fn replace(&mut self, old: &Assignment, new: Assignment) -> Result<()> {
        let position = self
            .assignments
            .iter()
            .position(|existing| existing == old)
            .ok_or(Error::MissingAssignment)?;

        if new != *old && self.contains(&new) {
            return Err(Error::DuplicateAssignment);
        }

        if let Some(slot) = self.assignments.get_mut(position) {
            *slot = new;
        }

        Ok(())
    }

    pub fn clear(&mut self) {
        debug!("cleared all assignments");
        self.assignments.clear();
    }

    pub fn filter(&self) -> &Predicate {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: Predicate) {
        self.filter = filter;
    }

    /// The assignments selected by the active predicate, in canonical order.
    pub fn filtered_view(&self) -> Vec<Assignment> {
        let now = Local::now().naive_local();

        self.assignments
            .iter()
            .filter(|assignment| self.filter.matches(assignment, now))
            .cloned()
            .collect()
    }

    /// The assignments with an active reminder, in canonical order. Derived
    /// from the canonical list alone; the filter predicate plays no part.
    pub fn reminded_view(&self) -> Vec<Assignment> {
        self.assignments
            .iter()
            .filter(|assignment| assignment.remind().is_active())
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;

    use super::*;
    use crate::model::fields::Remind;
    use crate::testutil::AssignmentBuilder;

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 10, 20)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_add_rejects_duplicate() {
        let mut model = Model::default();
        model.add(AssignmentBuilder::new().build()).unwrap();

        assert_eq!(
            model.add(AssignmentBuilder::new().build()),
            Err(Error::DuplicateAssignment)
        );
        assert_eq!(model.assignments().len(), 1);
    }

    #[test]
    fn test_new_drops_loaded_duplicates() {
        let model = Model::new(vec![
            AssignmentBuilder::new().build(),
            AssignmentBuilder::new().build(),
        ]);

        assert_eq!(model.assignments().len(), 1);
    }

    #[test]
    fn test_delete_by_value() {
        let mut model = Model::default();
        let assignment = AssignmentBuilder::new().build();
        model.add(assignment.clone()).unwrap();

        model.delete(&assignment).unwrap();

        assert!(model.assignments().is_empty());
        assert_eq!(model.delete(&assignment), Err(Error::MissingAssignment));
    }

    #[test]
    fn test_replace_locates_by_structural_equality() {
        let mut model = Model::default();
        let original = AssignmentBuilder::new().build();
        model.add(original.clone()).unwrap();

        let updated = original.with_remind(Remind::set_now());
        model.replace(&original, updated.clone()).unwrap();

        assert_eq!(model.assignments(), [updated]);
    }

    #[test]
    fn test_replace_rejects_duplicate_of_third_assignment() {
        let mut model = Model::default();
        let first = AssignmentBuilder::new().name("First").build();
        let second = AssignmentBuilder::new().name("Second").build();
        model.add(first.clone()).unwrap();
        model.add(second.clone()).unwrap();

        assert_eq!(
            model.replace(&second, first.clone()),
            Err(Error::DuplicateAssignment)
        );
        assert_eq!(model.assignments(), [first, second]);
    }

    #[test]
    fn test_filtered_view_follows_predicate() {
        let mut model = Model::default();
        model
            .add(AssignmentBuilder::new().name("Lab Report").module_code("CS2100").build())
            .unwrap();
        model
            .add(AssignmentBuilder::new().name("Tutorial 5").module_code("MA1101R").build())
            .unwrap();

        model.set_filter(Predicate::NameContains(vec!["lab".to_string()]));

        let view = model.filtered_view();
        assert_eq!(view.len(), 1);
        assert_eq!(view.first().unwrap().name().as_ref(), "Lab Report");

        model.set_filter(Predicate::ShowAll);
        assert_eq!(model.filtered_view().len(), 2);
    }

    #[test]
    fn test_reminded_view_ignores_filter() {
        let mut model = Model::default();
        model
            .add(AssignmentBuilder::new().name("Quiet One").build())
            .unwrap();
        model
            .add(AssignmentBuilder::new().name("Loud One").reminded().build())
            .unwrap();

        model.set_filter(Predicate::NameContains(vec!["quiet".to_string()]));

        let reminded = model.reminded_view();
        assert_eq!(reminded.len(), 1);
        assert_eq!(reminded.first().unwrap().name().as_ref(), "Loud One");
    }

    #[test]
    fn test_predicate_module_code_exact_ignore_case() {
        let assignment = AssignmentBuilder::new().module_code("CS2103T").build();
        let predicate = Predicate::ModuleCodeIs(vec!["cs2103t".to_string()]);

        assert!(predicate.matches(&assignment, fixed_now()));
        assert!(!Predicate::ModuleCodeIs(vec!["CS2103".to_string()]).matches(&assignment, fixed_now()));
    }

    #[test]
    fn test_predicate_deadline_date_and_time_keywords() {
        let assignment = AssignmentBuilder::new().deadline("23-10-2020 1200").build();

        assert!(Predicate::DeadlineMatches(vec!["23-10-2020".to_string()]).matches(&assignment, fixed_now()));
        assert!(Predicate::DeadlineMatches(vec!["1200".to_string()]).matches(&assignment, fixed_now()));
        assert!(!Predicate::DeadlineMatches(vec!["1300".to_string()]).matches(&assignment, fixed_now()));
    }

    #[test]
    fn test_predicate_priority_unset_matches_nothing() {
        let assignment = AssignmentBuilder::new().build();

        assert!(!Predicate::PriorityIs(vec![Priority::High]).matches(&assignment, fixed_now()));
    }

    #[test]
    fn test_predicate_due_within_days() {
        let due_soon = AssignmentBuilder::new().deadline("21-10-2020 1200").build();
        let due_later = AssignmentBuilder::new().deadline("30-10-2020 1200").build();
        let overdue = AssignmentBuilder::new().deadline("19-10-2020 1200").build();

        let predicate = Predicate::DueWithinDays(3);
        assert!(predicate.matches(&due_soon, fixed_now()));
        assert!(!predicate.matches(&due_later, fixed_now()));
        assert!(!predicate.matches(&overdue, fixed_now()));
    }
}
