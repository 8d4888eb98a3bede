//! Parsers for individual argument substrings.
//!
//! Each converts one substring into a typed value or fails with a
//! [`ParseError`](Error) carrying the field's constraint message.

use super::{Error, Result};
use crate::logic::Index;
use crate::logic::commands::FindCommand;
use crate::model::fields::{Deadline, ModuleCode, Name, Priority};

pub fn parse_name(value: &str) -> Result<Name> {
    Ok(Name::new(value)?)
}

pub fn parse_module_code(value: &str) -> Result<ModuleCode> {
    Ok(ModuleCode::new(value)?)
}

pub fn parse_deadline(value: &str) -> Result<Deadline> {
    Ok(Deadline::new(value)?)
}

pub fn parse_priority(value: &str) -> Result<Priority> {
    Ok(Priority::new(value)?)
}

/// Parses a one-based index. Only plain digit sequences count; anything
/// else, including zero, is rejected.
pub fn parse_index(value: &str) -> Result<Index> {
    let trimmed = value.trim();

    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidIndex);
    }

    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or(Error::InvalidIndex)
}

/// Parses a whitespace-separated list of one-based indexes, preserving the
/// order given. The list must not be empty; duplicates are allowed here and
/// rejected at execution time.
pub fn parse_indexes(value: &str) -> Result<Vec<Index>> {
    let indexes: Vec<Index> = value
        .split_whitespace()
        .map(parse_index)
        .collect::<Result<_>>()?;

    if indexes.is_empty() {
        return Err(Error::InvalidIndex);
    }

    Ok(indexes)
}

/// Validates a find-by-deadline keyword: either a `dd-MM-yyyy` date shape
/// or a bare 4-digit 24-hour time. Returns the keyword unchanged.
pub fn parse_deadline_keyword(value: &str) -> Result<String> {
    let keyword = value.trim();

    if is_date_shape(keyword) || is_time_shape(keyword) {
        Ok(keyword.to_string())
    } else {
        Err(Error::InvalidFormat(FindCommand::INVALID_DATE_OR_TIME_MESSAGE))
    }
}

// Shape checks only, mirroring the comparison rule: a keyword like
// 99-99-2020 is well-formed but will simply never match anything.
fn is_date_shape(keyword: &str) -> bool {
    let mut parts = keyword.split('-');
    let day = parts.next();
    let month = parts.next();
    let year = parts.next();

    parts.next().is_none()
        && digits_of_len(day, 2)
        && digits_of_len(month, 2)
        && digits_of_len(year, 4)
}

fn is_time_shape(keyword: &str) -> bool {
    digits_of_len(Some(keyword), 4)
}

fn digits_of_len(part: Option<&str>, len: usize) -> bool {
    part.is_some_and(|p| p.len() == len && p.chars().all(|c| c.is_ascii_digit()))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_index_one_based() {
        assert_eq!(parse_index("1").unwrap().zero_based(), 0);
        assert_eq!(parse_index(" 12 ").unwrap().zero_based(), 11);
    }

    #[test]
    fn test_parse_index_rejects_non_positive() {
        assert_eq!(parse_index("0"), Err(Error::InvalidIndex));
        assert_eq!(parse_index("-1"), Err(Error::InvalidIndex));
        assert_eq!(parse_index("a"), Err(Error::InvalidIndex));
        assert_eq!(parse_index(""), Err(Error::InvalidIndex));
    }

    #[test]
    fn test_parse_indexes_preserves_order() {
        let indexes = parse_indexes("3 1 2").unwrap();
        let zero_based: Vec<usize> = indexes.iter().map(|i| i.zero_based()).collect();

        assert_eq!(zero_based, [2, 0, 1]);
    }

    #[test]
    fn test_parse_indexes_rejects_empty_and_garbage() {
        assert_eq!(parse_indexes("   "), Err(Error::InvalidIndex));
        assert_eq!(parse_indexes("% ^ &"), Err(Error::InvalidIndex));
        assert_eq!(parse_indexes("1 a"), Err(Error::InvalidIndex));
    }

    #[test]
    fn test_deadline_keyword_accepts_date_and_time() {
        assert_eq!(parse_deadline_keyword("23-10-2020").unwrap(), "23-10-2020");
        assert_eq!(parse_deadline_keyword("1200").unwrap(), "1200");
    }

    #[test]
    fn test_deadline_keyword_rejects_other_text() {
        assert_eq!(
            parse_deadline_keyword("abc"),
            Err(Error::InvalidFormat(FindCommand::INVALID_DATE_OR_TIME_MESSAGE))
        );
        assert!(parse_deadline_keyword("23-10-20").is_err());
        assert!(parse_deadline_keyword("120").is_err());
    }

    #[test]
    fn test_field_parsers_surface_constraint_messages() {
        assert!(parse_name("valid name").is_ok());
        assert!(parse_name("*").is_err());
        assert!(parse_priority("LOW").is_ok());
        assert!(parse_deadline("23-10-2020 1200").is_ok());
    }
}
