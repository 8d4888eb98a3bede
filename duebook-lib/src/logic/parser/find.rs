use super::tokenizer::{
    ArgumentMap, PREFIX_DEADLINE, PREFIX_MODULE_CODE, PREFIX_NAME, PREFIX_PRIORITY, Prefix,
    tokenize,
};
use super::{Error, Result, fields};
use crate::logic::commands::{Command, FindCommand};
use crate::model::Predicate;

const SEARCHABLE: [Prefix; 4] = [
    PREFIX_NAME,
    PREFIX_MODULE_CODE,
    PREFIX_DEADLINE,
    PREFIX_PRIORITY,
];

/// Parses the arguments of a `find` command.
///
/// Exactly one searchable prefix must be present: none cites the usage
/// text, two or more is rejected as ambiguous. Every keyword is validated
/// with its field's parser before the command exists.
pub(super) fn parse(args: &str) -> Result<Command> {
    if args.trim().is_empty() {
        return Err(Error::InvalidFormat(FindCommand::MESSAGE_USAGE));
    }

    let map = tokenize(args, &SEARCHABLE);

    let present = SEARCHABLE
        .iter()
        .filter(|&&prefix| map.contains(prefix))
        .count();
    if present > 1 {
        return Err(Error::InvalidFormat(FindCommand::MORE_THAN_ONE_PREFIX_MESSAGE));
    }
    if present == 0 || !map.preamble().is_empty() {
        return Err(Error::InvalidFormat(FindCommand::MESSAGE_USAGE));
    }

    let predicate = if map.contains(PREFIX_NAME) {
        let keywords = keywords_of(&map, PREFIX_NAME);
        for keyword in &keywords {
            fields::parse_name(keyword)?;
        }
        Predicate::NameContains(keywords)
    } else if map.contains(PREFIX_MODULE_CODE) {
        let keywords = keywords_of(&map, PREFIX_MODULE_CODE);
        for keyword in &keywords {
            fields::parse_module_code(keyword)?;
        }
        Predicate::ModuleCodeIs(keywords)
    } else if map.contains(PREFIX_DEADLINE) {
        let keywords = keywords_of(&map, PREFIX_DEADLINE);
        for keyword in &keywords {
            fields::parse_deadline_keyword(keyword)?;
        }
        Predicate::DeadlineMatches(keywords)
    } else {
        let levels = keywords_of(&map, PREFIX_PRIORITY)
            .iter()
            .map(|keyword| fields::parse_priority(keyword))
            .collect::<Result<_>>()?;
        Predicate::PriorityIs(levels)
    };

    Ok(Command::Find(FindCommand::new(predicate)))
}

/// Splits the prefix's (last) value into whitespace-separated keywords.
/// A blank value still yields one (empty) keyword, so the field's parser
/// rejects it rather than installing a predicate with nothing to match.
fn keywords_of(map: &ArgumentMap, prefix: Prefix) -> Vec<String> {
    let keywords: Vec<String> = map
        .last(prefix)
        .unwrap_or_default()
        .split_whitespace()
        .map(str::to_string)
        .collect();

    if keywords.is_empty() {
        vec![String::new()]
    } else {
        keywords
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::fields::{self, Priority};

    #[test]
    fn test_find_by_name_keywords() {
        let expected = Command::Find(FindCommand::new(Predicate::NameContains(vec![
            "lab".to_string(),
            "tutorial".to_string(),
        ])));

        assert_eq!(parse("n/lab tutorial"), Ok(expected));
    }

    #[test]
    fn test_find_by_deadline_accepts_date_and_time() {
        let expected = Command::Find(FindCommand::new(Predicate::DeadlineMatches(vec![
            "23-10-2020".to_string(),
            "1200".to_string(),
        ])));

        assert_eq!(parse("d/23-10-2020 1200"), Ok(expected));
    }

    #[test]
    fn test_find_by_deadline_rejects_other_text() {
        assert_eq!(
            parse("d/abc"),
            Err(Error::InvalidFormat(FindCommand::INVALID_DATE_OR_TIME_MESSAGE))
        );
    }

    #[test]
    fn test_find_by_priority_parses_levels() {
        let expected = Command::Find(FindCommand::new(Predicate::PriorityIs(vec![
            Priority::High,
            Priority::Low,
        ])));

        assert_eq!(parse("priority/HIGH LOW"), Ok(expected));
    }

    #[test]
    fn test_two_prefixes_is_ambiguous() {
        assert_eq!(
            parse("n/lab priority/HIGH"),
            Err(Error::InvalidFormat(FindCommand::MORE_THAN_ONE_PREFIX_MESSAGE))
        );
    }

    #[test]
    fn test_zero_prefixes_cites_usage() {
        assert_eq!(
            parse("lab"),
            Err(Error::InvalidFormat(FindCommand::MESSAGE_USAGE))
        );
        assert_eq!(
            parse(""),
            Err(Error::InvalidFormat(FindCommand::MESSAGE_USAGE))
        );
    }

    #[test]
    fn test_empty_prefix_value_fails_field_validation() {
        assert_eq!(
            parse("n/"),
            Err(Error::InvalidField(fields::Error::InvalidName))
        );
        assert_eq!(
            parse("mod/"),
            Err(Error::InvalidField(fields::Error::InvalidModuleCode))
        );
        assert_eq!(
            parse("d/"),
            Err(Error::InvalidFormat(FindCommand::INVALID_DATE_OR_TIME_MESSAGE))
        );
        assert_eq!(
            parse("priority/"),
            Err(Error::InvalidField(fields::Error::InvalidPriority))
        );
    }

    #[test]
    fn test_preamble_before_prefix_cites_usage() {
        assert_eq!(
            parse("oops n/lab"),
            Err(Error::InvalidFormat(FindCommand::MESSAGE_USAGE))
        );
    }
}
