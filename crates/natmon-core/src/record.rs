//! The monument record type

use serde::{Deserialize, Serialize};

/// One monument entry from the dataset
///
/// Records are read-only: the data layer produces them from a snapshot query
/// and the engine never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monument {
    /// Monument name
    pub name: String,
    /// Managing agency (display only)
    pub agency: String,
    /// Proclaiming president, or a legislative designation such as
    /// "Congress" for monuments established by statute
    pub president: String,
    /// Comma-separated list of affiliated states; may be empty
    pub states: String,
    /// Partial "month/day" date; may be empty or malformed
    pub date: String,
    /// Proclamation year; 0 means unknown
    pub year: i32,
    /// Acres affected
    pub acres: f64,
}
