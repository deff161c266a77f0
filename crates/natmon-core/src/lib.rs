//! Core engine for the national monuments site
//!
//! This crate provides the category derivation, chronological ordering and
//! wrap-around navigation logic shared by all pages, plus the record type
//! and the snapshot-source abstraction the data layer implements.

pub mod date;
pub mod engine;
pub mod record;
pub mod timeline;

// Re-export commonly used types
pub use engine::{
    derive_category_keys, neighbors, select_records, split_states, Dimension, Key, StateMatch,
    LEGISLATIVE_MARKER,
};
pub use record::Monument;
pub use timeline::{cumulative_timeline, TimelinePoint};

pub mod data {
    use crate::record::Monument;

    /// Trait for record snapshot providers
    ///
    /// Handlers fetch one snapshot per request and feed it to every engine
    /// call in that request, so derived keys, selections and neighbors always
    /// agree with each other.
    #[async_trait::async_trait]
    pub trait SnapshotSource: Send + Sync {
        /// Fetch the full record snapshot
        async fn fetch_all(&self) -> anyhow::Result<Vec<Monument>>;

        /// Get total row count
        async fn row_count(&self) -> anyhow::Result<usize>;

        /// Get the source name/path
        fn source_name(&self) -> &str;
    }
}
