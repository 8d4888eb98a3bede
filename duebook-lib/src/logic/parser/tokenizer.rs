//! Splits raw argument text into prefixed values and a preamble.

use std::collections::HashMap;

use derive_more::Display;

/// A short literal marker introducing a named argument, e.g. `n/`.
///
/// A marker only counts as a prefix when it sits at the start of the
/// argument text or right after whitespace; `d/` inside `mod/` is plain
/// text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

pub const PREFIX_NAME: Prefix = Prefix("n/");
pub const PREFIX_DEADLINE: Prefix = Prefix("d/");
pub const PREFIX_MODULE_CODE: Prefix = Prefix("mod/");
pub const PREFIX_PRIORITY: Prefix = Prefix("priority/");

/// The tokenized form of one command's arguments: every recognized prefix
/// mapped to the ordered values that followed it, plus the untagged leading
/// text.
#[derive(Debug, Default)]
pub struct ArgumentMap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMap {
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// All values for a prefix, in the order they appeared.
    pub fn all(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map_or(&[], Vec::as_slice)
    }

    /// The final occurrence's value, the one that wins when a prefix is
    /// repeated.
    pub fn last(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        !self.all(prefix).is_empty()
    }
}

/// Tokenizes `args` against the given prefix set.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMap {
    let mut occurrences: Vec<(usize, Prefix)> = Vec::new();

    for &prefix in prefixes {
        for (position, _) in args.match_indices(prefix.as_str()) {
            if starts_token(args, position) {
                occurrences.push((position, prefix));
            }
        }
    }

    occurrences.sort_unstable_by_key(|&(position, _)| position);

    let preamble_end = occurrences
        .first()
        .map_or(args.len(), |&(position, _)| position);
    let preamble = args.get(..preamble_end).unwrap_or_default().trim().to_string();

    let mut values: HashMap<Prefix, Vec<String>> = HashMap::new();

    for (slot, &(position, prefix)) in occurrences.iter().enumerate() {
        let value_start = position.saturating_add(prefix.as_str().len());
        let value_end = occurrences
            .get(slot.saturating_add(1))
            .map_or(args.len(), |&(next, _)| next);
        let value = args
            .get(value_start..value_end)
            .unwrap_or_default()
            .trim()
            .to_string();

        values.entry(prefix).or_default().push(value);
    }

    ArgumentMap { preamble, values }
}

fn starts_token(args: &str, position: usize) -> bool {
    position == 0
        || args
            .get(..position)
            .and_then(|before| before.chars().last())
            .is_some_and(char::is_whitespace)
}
