//! Value checks applied before anything reaches an aggregate.

use crate::error::{EntityKind, FranchiseError};
use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

/// Accepts a name only if it has at least one non-whitespace character.
///
/// The name is stored as given; surrounding whitespace is not trimmed.
pub fn validate_name(name: impl Into<String>) -> Result<String, FranchiseError> {
    let name = name.into();
    if name.trim().is_empty() {
        return Err(FranchiseError::InvalidName);
    }
    Ok(name)
}

/// Accepts a stock value only if it is present, non-negative and fits in `u32`.
pub fn validate_stock(value: Option<i64>) -> Result<u32, FranchiseError> {
    value
        .and_then(|stock| u32::try_from(stock).ok())
        .ok_or(FranchiseError::InvalidStock { value })
}

/// Fails on the first id that appears twice among siblings.
pub(crate) fn ensure_unique<'a, I>(
    kind: EntityKind,
    ids: impl IntoIterator<Item = &'a I>,
) -> Result<(), FranchiseError>
where
    I: Eq + Hash + Display + 'a,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(FranchiseError::InvalidDocument(format!(
                "duplicate {} id {}",
                kind, id
            )));
        }
    }
    Ok(())
}
