pub mod cipher;
pub mod config;
pub mod entry_store;
pub mod error;
pub mod history;
pub mod remote_sync;
pub mod utils;

#[cfg(test)]
mod tests;

pub use cipher::Cipher;
pub use config::{Config, DaybookConfig};
pub use entry_store::{
    CommitReceipt, Entry, EntryStore, ListOptions, Project, QueryError, QueryResult,
    QueryTagsResult, entry_title,
};
pub use error::{DaybookError, Result};
pub use history::{CommandOutcome, GitCli, HistoryError, LogQuery, VersionedHistory};
