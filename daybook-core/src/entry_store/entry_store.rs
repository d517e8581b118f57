//! The `EntryStore`: the read/write path for the entries of one daybook.

use super::commit::CommitReceipt;
use super::entry::{Entry, EntryContent};
use super::project::Project;
use super::query::{ListOptions, QueryError, QueryResult, QueryTagsResult};
use crate::cipher::Cipher;
use crate::config::Config;
use crate::error::{DaybookError, Result};
use crate::history::{CommandOutcome, GitCli, LogQuery, VersionedHistory, args};
use crate::remote_sync::sync_history;
use crate::utils::entry_paths::{EntryFileName, EntryStamp};
use crate::utils::tags::{contains_any_tag, contains_text, extract_tags, split_tag_names};
use chrono::Local;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Commit message for entries created without a title.
pub const UNTITLED: &str = "untitled entry";

/// Owns the date-partitioned tree under a project directory and commits every change
/// to its versioned history.
///
/// Entry files are written directly; the history only records them. Failures of the
/// history tool are reported back (see [`CommandOutcome`]) but never undo a write.
pub struct EntryStore<H = GitCli> {
    project: Project,
    history: H,
    cipher: Option<Box<dyn Cipher>>,
}

impl EntryStore<GitCli> {
    /// Opens the daybook `name` under `base_dir`, initializing a git repository there
    /// (with `remote_url` as `origin`) when there is none yet.
    ///
    /// Existing content is never removed.
    pub fn open(name: &str, base_dir: &Path, remote_url: Option<&str>) -> Result<Self> {
        let project = Project::new(name, base_dir)?;
        let history = if GitCli::is_repository(&project.base_dir) {
            GitCli::open(&project.base_dir)
        } else {
            log::info!(
                "Creating project {} within {}",
                project.name,
                project.base_dir.display()
            );
            fs::create_dir_all(&project.base_dir)
                .map_err(|source| DaybookError::io("creating", &project.base_dir, source))?;
            GitCli::init(&project.base_dir, remote_url)?
        };
        Self::with_history(project, history)
    }

    /// Opens an installed daybook by name.
    pub fn from_config(config: &Config, name: &str) -> Result<Self> {
        let daybook = config.daybook(name)?;
        Self::open(name, &daybook.base_dir, daybook.remote_url.as_deref())
    }
}

impl<H: VersionedHistory> EntryStore<H> {
    /// Creates a store over an already established history.
    ///
    /// This also ensures that the project directory exists.
    pub fn with_history(project: Project, history: H) -> Result<Self> {
        fs::create_dir_all(&project.project_dir)
            .map_err(|source| DaybookError::io("creating", &project.project_dir, source))?;
        Ok(Self {
            project,
            history,
            cipher: None,
        })
    }

    pub fn with_cipher(mut self, cipher: Box<dyn Cipher>) -> Self {
        self.cipher = Some(cipher);
        self
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Writes `body` verbatim to a new entry file named after the current instant and
    /// commits it with `title` as the message.
    ///
    /// `is_encrypted` only picks the file suffix; encrypt the body beforehand
    /// (see [`encrypt`](Self::encrypt)).
    pub fn create(
        &self,
        body: impl AsRef<[u8]>,
        title: Option<&str>,
        is_encrypted: bool,
    ) -> Result<CommitReceipt> {
        let now = Local::now();
        let file_name = EntryFileName::new(
            now.date_naive(),
            EntryStamp::from_datetime(&now),
            is_encrypted,
        );
        let path = file_name.path_in(&self.project.project_dir);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|source| DaybookError::io("creating", parent, source))?;
        }
        fs::write(&path, body).map_err(|source| DaybookError::io("writing", &path, source))?;
        log::debug!("wrote new entry {}", path.display());

        let message = title.filter(|t| !t.trim().is_empty()).unwrap_or(UNTITLED);
        Ok(self.commit_paths("add", vec![path], message))
    }

    /// Replaces the content of an existing entry and commits the change.
    /// The file keeps its name.
    pub fn edit(&self, path: &Path, title: &str, new_body: impl AsRef<[u8]>) -> Result<CommitReceipt> {
        self.entry_file_name(path)?;
        if !path.is_file() {
            return Err(DaybookError::io(
                "editing",
                path,
                io::Error::new(io::ErrorKind::NotFound, "entry file does not exist"),
            ));
        }
        fs::write(path, new_body).map_err(|source| DaybookError::io("writing", path, source))?;

        let message = if title.trim().is_empty() { UNTITLED } else { title };
        Ok(self.commit_paths("add", vec![path.to_path_buf()], message))
    }

    /// Removes entries from disk and history in a single commit.
    pub fn delete(&self, paths: &[PathBuf]) -> Result<CommitReceipt> {
        for path in paths {
            self.entry_file_name(path)?;
        }
        let message = format!(
            "deletion of entries: {}",
            paths
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        if paths.is_empty() {
            return Ok(CommitReceipt {
                paths: Vec::new(),
                message,
                outcome: CommandOutcome::Completed(Vec::new()),
            });
        }
        Ok(self.commit_paths("rm", paths.to_vec(), &message))
    }

    /// Lists committed entries that still exist, most recent first.
    ///
    /// Selection runs as: history date range, then tags, then text, then the
    /// `max_entries` cap. Encrypted matches are decoded last; without a cipher that
    /// fails the whole call.
    pub fn list(&self, options: &ListOptions) -> Result<QueryResult> {
        let mut errors = Vec::new();

        let query = LogQuery {
            since: non_blank(options.after_date).map(str::to_string),
            until: non_blank(options.before_date).map(str::to_string),
            pathspec: Some(self.project.name.clone()),
        };
        let names = match self.history.query_log(&query) {
            Ok(names) => names,
            Err(error) => {
                log::warn!("listing {}: {error}", self.project.name);
                errors.push(QueryError::History {
                    reason: error.to_string(),
                });
                Vec::new()
            }
        };

        let unique: BTreeSet<PathBuf> = names
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(|name| self.project.base_dir.join(name))
            .collect();

        let mut candidates = Vec::new();
        for path in unique.into_iter().filter(|p| p.is_file()) {
            match EntryFileName::from_path(&path) {
                Ok(file_name) => candidates.push((file_name, path)),
                Err(_) => {
                    log::warn!("skipping {}: not an entry file", path.display());
                    errors.push(QueryError::UnrecognizedFile { path });
                }
            }
        }
        candidates.sort_by(|(a, _), (b, _)| b.sort_key().cmp(&a.sort_key()));

        let tag_names = non_blank(options.with_tags).map(split_tag_names);
        let with_text = non_blank(options.with_text);

        let mut matches = Vec::new();
        for (file_name, path) in candidates {
            let raw = fs::read(&path).map_err(|source| DaybookError::io("reading", &path, source))?;
            let content = EntryContent::load(&file_name, raw)
                .map_err(|source| DaybookError::io("reading", &path, source))?;
            let selected = {
                let text = content.searchable_text();
                tag_names
                    .as_ref()
                    .is_none_or(|tags| contains_any_tag(&text, tags))
                    && with_text.is_none_or(|needle| contains_text(&text, needle))
            };
            if !selected {
                continue;
            }
            matches.push((file_name, path, content));
            if options.max_entries > 0 && matches.len() >= options.max_entries {
                break;
            }
        }

        let entries = matches
            .into_iter()
            .map(|(file_name, path, content)| {
                let body = self.decode(content)?;
                Ok(Entry {
                    path,
                    file_name,
                    body,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(QueryResult { entries, errors })
    }

    /// Every `@@tag` used across all listed entries.
    pub fn list_tags(&self) -> Result<QueryTagsResult> {
        let result = self.list(&ListOptions::default())?;
        let tags = result
            .entries
            .iter()
            .flat_map(|e| extract_tags(&e.body))
            .collect();
        Ok(QueryTagsResult {
            tags,
            errors: result.errors,
        })
    }

    /// Runs a raw history command. A failure comes back as [`CommandOutcome::Failed`],
    /// never as an error.
    pub fn execute(&self, command: &[String]) -> CommandOutcome {
        CommandOutcome::from_result(command, self.history.run(command))
    }

    /// Pulls, rebases onto and pushes `remote`/`branch`.
    pub fn sync(&self, remote: &str, branch: &str) -> Vec<CommandOutcome> {
        sync_history(&self.history, remote, branch)
    }

    pub fn supports_encryption(&self) -> bool {
        self.cipher.is_some()
    }

    pub fn encrypt(&self, plaintext: &str) -> Result<Vec<u8>> {
        match &self.cipher {
            Some(cipher) => cipher.encrypt(plaintext),
            None => Err(DaybookError::Unsupported("encrypting entries")),
        }
    }

    fn decode(&self, content: EntryContent) -> Result<String> {
        match content {
            EntryContent::Plain(body) => Ok(body),
            EntryContent::Encrypted(ciphertext) => match &self.cipher {
                Some(cipher) => cipher.decrypt(&ciphertext),
                None => Err(DaybookError::Unsupported("decrypting encrypted entries")),
            },
        }
    }

    /// Validates that `path` names an entry file of this project.
    fn entry_file_name(&self, path: &Path) -> Result<EntryFileName> {
        if !self.project.contains(path) {
            return Err(DaybookError::InvalidFileName(path.to_path_buf()));
        }
        EntryFileName::from_path(path)
    }

    /// Stages `paths` with `stage_command` (`add` or `rm`) and commits them. A failed
    /// stage skips the commit.
    fn commit_paths(&self, stage_command: &str, paths: Vec<PathBuf>, message: &str) -> CommitReceipt {
        let mut stage = args([stage_command, "--"]);
        stage.extend(
            paths
                .iter()
                .map(|p| self.project.relative(p).to_string_lossy().into_owned()),
        );

        let staged = self.execute(&stage);
        let outcome = if staged.is_success() {
            self.execute(&args(["commit", "-m", message]))
        } else {
            staged
        };
        if outcome.is_success() {
            log::info!("committed \"{message}\" in {}", self.project.name);
        }

        CommitReceipt {
            paths,
            message: message.to_string(),
            outcome,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
