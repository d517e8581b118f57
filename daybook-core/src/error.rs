use crate::history::HistoryError;
use std::{io, path::PathBuf};
use thiserror::Error;

pub type Result<T, E = DaybookError> = std::result::Result<T, E>;

/// Every failure the entry store can surface to its caller.
///
/// History command failures during normal operation are *not* in here: those are
/// absorbed into [`CommandOutcome`](crate::CommandOutcome) and
/// [`QueryError`](crate::QueryError).
#[derive(Debug, Error)]
pub enum DaybookError {
    /// The daybook name is not present in the configuration.
    #[error("unknown daybook `{0}`, you must install your diary first")]
    UnknownDaybook(String),

    /// User input rejected before anything is written, e.g. a boolean-like flag that
    /// is neither `True` nor `False`.
    #[error("{field} must be {expected}, got `{input}`")]
    Validation {
        field: &'static str,
        expected: &'static str,
        input: String,
    },

    #[error("{action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Only raised where a history failure cannot be absorbed, i.e. while
    /// initializing a repository.
    #[error(transparent)]
    History(#[from] HistoryError),

    #[error("{0} is not supported")]
    Unsupported(&'static str),

    #[error("not a daybook entry file: {}", .0.display())]
    InvalidFileName(PathBuf),
}

impl DaybookError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        DaybookError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
