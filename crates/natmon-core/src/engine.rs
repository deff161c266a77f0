//! Category derivation, record selection and wrap-around navigation

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::date::ordering_instant;
use crate::record::Monument;

/// Substring marking a legislative (non-presidential) designation
pub const LEGISLATIVE_MARKER: &str = "Congress";

/// The three navigation axes of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    President,
    State,
    Year,
}

impl Dimension {
    /// Path segment / display noun for this dimension
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::President => "president",
            Dimension::State => "state",
            Dimension::Year => "year",
        }
    }
}

/// A single value within a dimension
///
/// President and state keys are text; year keys are numeric. A dimension's
/// derived key list is always homogeneous.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    Text(String),
    Year(i32),
}

impl Key {
    pub fn text(value: impl Into<String>) -> Self {
        Key::Text(value.into())
    }

    pub fn year(value: i32) -> Self {
        Key::Year(value)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Text(value) => f.write_str(value),
            Key::Year(value) => write!(f, "{value}"),
        }
    }
}

/// How state pages match a key against the comma-separated state list
///
/// The site this dataset came from matched by raw substring, so "Ida" would
/// match "Idaho". `Exact` compares against the split-and-trimmed fragments
/// instead; `LegacySubstring` preserves the old behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateMatch {
    #[default]
    Exact,
    LegacySubstring,
}

/// Split a comma-separated state list into trimmed, non-empty fragments
pub fn split_states(field: &str) -> impl Iterator<Item = &str> {
    field.split(',').map(str::trim).filter(|f| !f.is_empty())
}

/// Derive the deduplicated, ascending key list for a dimension
///
/// President keys exclude legislative designations; year keys exclude the
/// 0 sentinel. An empty result is valid and means "no data" for the caller.
pub fn derive_category_keys(records: &[Monument], dimension: Dimension) -> Vec<Key> {
    let keys: BTreeSet<Key> = match dimension {
        Dimension::President => records
            .iter()
            .map(|r| r.president.trim())
            .filter(|p| !p.is_empty() && !p.contains(LEGISLATIVE_MARKER))
            .map(Key::text)
            .collect(),
        Dimension::State => records
            .iter()
            .flat_map(|r| split_states(&r.states))
            .map(Key::text)
            .collect(),
        Dimension::Year => records
            .iter()
            .map(|r| r.year)
            .filter(|y| *y != 0)
            .map(Key::Year)
            .collect(),
    };
    keys.into_iter().collect()
}

fn record_matches(
    record: &Monument,
    dimension: Dimension,
    key: &Key,
    state_match: StateMatch,
) -> bool {
    match (dimension, key) {
        (Dimension::President, Key::Text(name)) => record.president.trim() == name,
        (Dimension::Year, Key::Year(year)) => record.year == *year,
        (Dimension::State, Key::Text(state)) => match state_match {
            StateMatch::Exact => split_states(&record.states).any(|s| s == state),
            StateMatch::LegacySubstring => record.states.contains(state.as_str()),
        },
        _ => false,
    }
}

/// Select the records matching a key, newest first
///
/// The sort is stable, so records with identical instants keep their
/// snapshot order.
pub fn select_records(
    records: &[Monument],
    dimension: Dimension,
    key: &Key,
    state_match: StateMatch,
) -> Vec<Monument> {
    let mut selected: Vec<Monument> = records
        .iter()
        .filter(|r| record_matches(r, dimension, key, state_match))
        .cloned()
        .collect();
    selected.sort_by_key(|r| std::cmp::Reverse(ordering_instant(r.year, &r.date)));
    selected
}

/// Wrap-around previous/next keys for `current` within `keys`
///
/// Returns `None` when the list is empty or the key is absent; callers treat
/// that as not-found. A single-element list yields `(current, current)`.
pub fn neighbors<'a>(keys: &'a [Key], current: &Key) -> Option<(&'a Key, &'a Key)> {
    let index = keys.iter().position(|k| k == current)?;
    let len = keys.len();
    Some((&keys[(index + len - 1) % len], &keys[(index + 1) % len]))
}
