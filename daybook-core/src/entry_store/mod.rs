mod commit;
mod entry;
mod entry_store;
mod project;
mod query;

pub use commit::CommitReceipt;
pub use entry::{Entry, EntryContent, entry_title};
pub use entry_store::{EntryStore, UNTITLED};
pub use project::Project;
pub use query::{ListOptions, QueryError, QueryResult, QueryTagsResult};
