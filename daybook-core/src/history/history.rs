use std::{fmt, io};
use thiserror::Error;

/// Raised by a [`VersionedHistory`] implementation when a command cannot run or
/// exits unsuccessfully.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("could not run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("`{command}` exited with {status}: {stderr}")]
    Exit {
        command: String,
        status: String,
        stderr: String,
    },
}

/// Date bounds and path restriction for a history query.
///
/// `since` and `until` are passed through to the history tool untouched, so they
/// accept whatever date syntax it understands (`yesterday`, `2025-08-01`, `2 weeks ago`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogQuery {
    pub since: Option<String>,
    pub until: Option<String>,
    /// Restricts the query to files below this path, relative to the repository root.
    pub pathspec: Option<String>,
}

/// The versioned history an [`EntryStore`](crate::EntryStore) commits into.
pub trait VersionedHistory {
    /// Runs one history command and returns its standard output split into lines.
    fn run(&self, args: &[String]) -> Result<Vec<String>, HistoryError>;

    /// Returns the filenames touched by commits matching `query`, relative to the
    /// repository root. A file appears once per commit that touched it; order is
    /// unspecified.
    fn query_log(&self, query: &LogQuery) -> Result<Vec<String>, HistoryError>;
}

/// What came out of a history command whose failure is deliberately absorbed.
///
/// Lets callers tell "the command legitimately printed nothing" from "the command failed".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    Completed(Vec<String>),
    Failed { command: String, reason: String },
}

impl CommandOutcome {
    /// Output lines, empty when the command failed.
    pub fn lines(&self) -> &[String] {
        match self {
            CommandOutcome::Completed(lines) => lines,
            CommandOutcome::Failed { .. } => &[],
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CommandOutcome::Completed(_))
    }

    pub(crate) fn from_result(args: &[String], result: Result<Vec<String>, HistoryError>) -> Self {
        match result {
            Ok(lines) => CommandOutcome::Completed(lines),
            Err(error) => {
                let command = args.join(" ");
                log::warn!("history command `{command}` failed: {error}");
                CommandOutcome::Failed {
                    command,
                    reason: error.to_string(),
                }
            }
        }
    }
}

impl fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandOutcome::Completed(lines) => write!(f, "{}", lines.join("\n")),
            CommandOutcome::Failed { command, reason } => {
                write!(f, "`{command}` failed: {reason}")
            }
        }
    }
}

/// Turns a list of string-ish arguments into the owned form [`VersionedHistory::run`] takes.
pub fn args<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}
