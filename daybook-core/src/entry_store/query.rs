use super::entry::Entry;
use std::{collections::BTreeSet, path::PathBuf};
use thiserror::Error;

/// Filters for [`EntryStore::list`](crate::EntryStore::list).
#[derive(Clone, Debug, Default)]
pub struct ListOptions<'a> {
    /// Stop after this many matches; `0` means no limit.
    pub max_entries: usize,
    /// Comma-delimited tag names; an entry matches when it contains any of them.
    pub with_tags: Option<&'a str>,
    pub with_text: Option<&'a str>,
    /// Passed to the history query as `--since`.
    pub after_date: Option<&'a str>,
    /// Passed to the history query as `--until`.
    pub before_date: Option<&'a str>,
}

/// Represents a non-critical issue that occurred during a query.
///
/// These are reported alongside the entries that could be listed instead of
/// stopping the whole query.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("history query failed: {reason}")]
    History { reason: String },
    #[error("skipped {}: not a daybook entry file", .path.display())]
    UnrecognizedFile { path: PathBuf },
}

/// The complete result of a query, most recent entry first.
#[derive(Debug)]
pub struct QueryResult {
    pub entries: Vec<Entry>,
    pub errors: Vec<QueryError>,
}

/// The complete result of a tag query.
#[derive(Debug)]
pub struct QueryTagsResult {
    pub tags: BTreeSet<String>,
    pub errors: Vec<QueryError>,
}
