//! [`VersionedHistory`] backed by the `git` command-line tool.

use super::history::{HistoryError, LogQuery, VersionedHistory, args};
use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
    process::Command,
};

const GIT: &str = "git";

/// A git working directory driven through the `git` binary.
#[derive(Debug, Clone)]
pub struct GitCli {
    work_dir: PathBuf,
}

impl GitCli {
    /// Whether `path` is the root of a git working directory.
    pub fn is_repository(path: &Path) -> bool {
        path.join(".git").exists()
    }

    /// Binds to an existing working directory.
    pub fn open(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
        }
    }

    /// Runs `git init` in `work_dir` and, when given, records `remote_url` as `origin`.
    pub fn init(work_dir: impl Into<PathBuf>, remote_url: Option<&str>) -> Result<Self, HistoryError> {
        let git = Self::open(work_dir);
        git.run(&args(["init"]))?;
        if let Some(url) = remote_url.filter(|u| !u.trim().is_empty()) {
            git.run(&args(["remote", "add", "origin", url]))?;
        }
        log::info!("initialized git repository in {}", git.work_dir.display());
        Ok(git)
    }
}

impl VersionedHistory for GitCli {
    fn run(&self, args: &[String]) -> Result<Vec<String>, HistoryError> {
        log::debug!("git {} (in {})", args.join(" "), self.work_dir.display());
        let mut full_args: Vec<&OsStr> = vec![
            OsStr::new("-C"),
            self.work_dir.as_os_str(),
            OsStr::new("-c"),
            OsStr::new("core.quotepath=off"),
        ];
        full_args.extend(args.iter().map(OsStr::new));
        syscall(GIT, &full_args, args)
    }

    fn query_log(&self, query: &LogQuery) -> Result<Vec<String>, HistoryError> {
        let mut log_args = args(["log", "--name-only", "--pretty=format:"]);
        if let Some(until) = &query.until {
            log_args.push(format!("--until={until}"));
        }
        if let Some(since) = &query.since {
            log_args.push(format!("--since={since}"));
        }
        if let Some(pathspec) = &query.pathspec {
            log_args.push("--".to_string());
            log_args.push(pathspec.clone());
        }
        let lines = self.run(&log_args)?;
        Ok(lines
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect())
    }
}

fn syscall(cmd: &str, full_args: &[&OsStr], display_args: &[String]) -> Result<Vec<String>, HistoryError> {
    let command = format!("{cmd} {}", display_args.join(" "));
    let output = Command::new(cmd)
        .args(full_args)
        .output()
        .map_err(|source| HistoryError::Spawn {
            command: command.clone(),
            source,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(HistoryError::Exit {
            command,
            status: output.status.to_string(),
            stderr,
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout.lines().map(str::to_string).collect())
}
