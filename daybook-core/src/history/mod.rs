mod git_cli;
mod history;

pub use git_cli::GitCli;
pub use history::{CommandOutcome, HistoryError, LogQuery, VersionedHistory, args};
