use crate::history::CommandOutcome;
use std::{
    fmt,
    path::{Path, PathBuf},
};

/// What a write operation did: the files it touched, the commit message it used and
/// how the history tool responded.
///
/// A failed commit does not undo the file changes; check [`is_committed`](Self::is_committed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitReceipt {
    pub paths: Vec<PathBuf>,
    pub message: String,
    pub outcome: CommandOutcome,
}

impl CommitReceipt {
    pub fn path(&self) -> Option<&Path> {
        self.paths.first().map(PathBuf::as_path)
    }

    pub fn is_committed(&self) -> bool {
        self.outcome.is_success()
    }
}

impl fmt::Display for CommitReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let paths = self
            .paths
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        match &self.outcome {
            CommandOutcome::Completed(_) => write!(f, "Committed \"{}\": {paths}", self.message),
            failed @ CommandOutcome::Failed { .. } => write!(
                f,
                "Saved {paths} on disk, but committing \"{}\" failed: {failed}",
                self.message
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_names_file_and_title() {
        let receipt = CommitReceipt {
            paths: vec![PathBuf::from("/j/p/08_15_2025/1.000000.txt")],
            message: "Quiet morning".to_string(),
            outcome: CommandOutcome::Completed(vec![]),
        };
        assert!(receipt.is_committed());
        assert_eq!(
            receipt.to_string(),
            "Committed \"Quiet morning\": /j/p/08_15_2025/1.000000.txt"
        );
    }

    #[test]
    fn failed_commit_is_spelled_out() {
        let receipt = CommitReceipt {
            paths: vec![PathBuf::from("/j/p/a.txt")],
            message: "t".to_string(),
            outcome: CommandOutcome::Failed {
                command: "commit -m t".to_string(),
                reason: "no identity".to_string(),
            },
        };
        assert!(!receipt.is_committed());
        let s = receipt.to_string();
        assert!(s.starts_with("Saved /j/p/a.txt on disk"));
        assert!(s.contains("no identity"));
    }
}
