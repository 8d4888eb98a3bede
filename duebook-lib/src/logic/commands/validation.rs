//! Index checks shared by multi-target commands.

use std::collections::HashSet;

use super::{Error, Result};
use crate::logic::Index;

/// Fails if any zero-based index value repeats.
pub fn check_no_duplicate_indexes(indexes: &[Index]) -> Result<()> {
    let mut seen = HashSet::new();

    for index in indexes {
        if !seen.insert(index.zero_based()) {
            return Err(Error::DuplicateIndexes);
        }
    }

    Ok(())
}

/// Fails on the first index outside the displayed view, attaching the
/// calling command's usage text.
pub fn check_indexes_in_bounds(
    indexes: &[Index],
    view_len: usize,
    usage: &'static str,
) -> Result<()> {
    for index in indexes {
        if index.zero_based() >= view_len {
            return Err(Error::InvalidIndexWithUsage(usage));
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn indexes(one_based: &[usize]) -> Vec<Index> {
        one_based
            .iter()
            .map(|&i| Index::from_one_based(i).unwrap())
            .collect()
    }

    #[test]
    fn test_duplicates_rejected() {
        assert_eq!(
            check_no_duplicate_indexes(&indexes(&[1, 2, 1])),
            Err(Error::DuplicateIndexes)
        );
    }

    #[test]
    fn test_unique_indexes_pass() {
        assert!(check_no_duplicate_indexes(&indexes(&[3, 1, 2])).is_ok());
        assert!(check_no_duplicate_indexes(&[]).is_ok());
    }

    #[test]
    fn test_bounds_attach_usage() {
        assert_eq!(
            check_indexes_in_bounds(&indexes(&[1, 3]), 2, "usage text"),
            Err(Error::InvalidIndexWithUsage("usage text"))
        );
        assert!(check_indexes_in_bounds(&indexes(&[1, 2]), 2, "usage text").is_ok());
    }
}
