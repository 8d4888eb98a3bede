//! Validated field values that make up an [`Assignment`](super::Assignment).
//!
//! Construction is the single point of validation: a value of one of these
//! types always holds well-formed data, so the rest of the engine never
//! re-checks field contents.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use derive_more::{AsRef, Display};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Constraint violations, one per field kind. The messages double as the
/// user-facing text attached to parse failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Names should only contain alphanumeric characters and spaces, and it should not be blank")]
    InvalidName,
    #[error("Module codes should start with capital letters, followed by 4 digits and an optional capital letter, e.g. CS2103T")]
    InvalidModuleCode,
    #[error("Deadlines should be in the format dd-MM-yyyy HHmm, e.g. 23-10-2020 1200")]
    InvalidDeadline,
    #[error("Priority should be either LOW, MEDIUM or HIGH")]
    InvalidPriority,
}

const DEADLINE_INPUT_FORMAT: &str = "%d-%m-%Y %H%M";
const DATE_FORMAT: &str = "%d-%m-%Y";
const TIME_FORMAT: &str = "%H%M";

/// An assignment's display name. Non-blank, alphanumeric and spaces only,
/// and it must start with an alphanumeric character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, AsRef, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn new(value: &str) -> Result<Self> {
        let trimmed = value.trim();

        let starts_alphanumeric = trimmed
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric());
        let body_valid = trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == ' ');

        if starts_alphanumeric && body_valid {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(Error::InvalidName)
        }
    }

    /// Case-insensitive whole-word match, the comparison rule used when
    /// finding assignments by name.
    pub fn contains_word(&self, keyword: &str) -> bool {
        self.0
            .split_whitespace()
            .any(|word| word.eq_ignore_ascii_case(keyword))
    }
}

/// A module code such as `CS2103T`: capital letters, then exactly four
/// digits, then an optional trailing capital letter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, AsRef, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleCode(String);

impl ModuleCode {
    pub fn new(value: &str) -> Result<Self> {
        let trimmed = value.trim();

        if Self::is_valid(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(Error::InvalidModuleCode)
        }
    }

    fn is_valid(value: &str) -> bool {
        let letters: String = value.chars().take_while(char::is_ascii_uppercase).collect();
        let rest = value.strip_prefix(letters.as_str()).unwrap_or(value);

        if !(2..=4).contains(&letters.len()) {
            return false;
        }

        let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
        let suffix = rest.strip_prefix(digits.as_str()).unwrap_or(rest);

        digits.len() == 4 && (suffix.is_empty() || (suffix.len() == 1 && suffix.chars().all(|c| c.is_ascii_uppercase())))
    }

    /// Case-insensitive exact match, the comparison rule used when finding
    /// assignments by module code.
    pub fn matches(&self, keyword: &str) -> bool {
        self.0.eq_ignore_ascii_case(keyword)
    }
}

/// When an assignment is due. Accepted input shape is `dd-MM-yyyy HHmm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deadline(NaiveDateTime);

impl Deadline {
    pub fn new(value: &str) -> Result<Self> {
        NaiveDateTime::parse_from_str(value.trim(), DEADLINE_INPUT_FORMAT)
            .map(Self)
            .map_err(|_| Error::InvalidDeadline)
    }

    pub fn date_time(&self) -> NaiveDateTime {
        self.0
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    pub fn time(&self) -> NaiveTime {
        self.0.time()
    }

    /// Matches a find keyword, which is either a `dd-MM-yyyy` date or a bare
    /// 4-digit 24-hour time. The keyword's shape has already been validated
    /// by the parser; here only the comparison happens.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        if keyword.len() == 4 {
            self.0.format(TIME_FORMAT).to_string() == keyword
        } else {
            self.0.format(DATE_FORMAT).to_string() == keyword
        }
    }
}

impl std::fmt::Display for Deadline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DEADLINE_INPUT_FORMAT))
    }
}

/// Urgency level. Text form is the uppercase variant name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn new(value: &str) -> Result<Self> {
        value.trim().parse().map_err(|_| Error::InvalidPriority)
    }
}

/// Reminder state: a flag plus the moment the reminder was set. Only the
/// flag takes part in equality; the timestamp is internal identity and two
/// cleared (or two set) reminders always compare equal.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Remind {
    active: bool,
    set_at: Option<NaiveDateTime>,
}

impl Remind {
    pub fn cleared() -> Self {
        Self::default()
    }

    pub fn set_now() -> Self {
        Self {
            active: true,
            set_at: Some(Local::now().naive_local()),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl PartialEq for Remind {
    fn eq(&self, other: &Self) -> bool {
        self.active == other.active
    }
}

impl Eq for Remind {}

/// Completion marker. Same identity rule as [`Remind`]: equality is the
/// flag alone.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Done {
    marked: bool,
    marked_at: Option<NaiveDateTime>,
}

impl Done {
    pub fn cleared() -> Self {
        Self::default()
    }

    pub fn marked_now() -> Self {
        Self {
            marked: true,
            marked_at: Some(Local::now().naive_local()),
        }
    }

    pub fn is_marked(&self) -> bool {
        self.marked
    }
}

impl PartialEq for Done {
    fn eq(&self, other: &Self) -> bool {
        self.marked == other.marked
    }
}

impl Eq for Done {}

/// A suggested working slot. No command in this engine sets it; the value
/// is carried and persisted for the external timetable collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    slot: Option<WorkSlot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSlot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Schedule {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn slot(&self) -> Option<WorkSlot> {
        self.slot
    }
}
