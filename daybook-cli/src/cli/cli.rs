use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::render::ColorMode;

/// daybook — a journal kept in git
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, global = true, value_enum, env = "DAYBOOK_COLOR", default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Registers a daybook in the configuration file
    Install(InstallArgs),
    /// Prints the names of all installed daybooks
    Daybooks,
    /// Writes a new entry in your editor and commits it
    Create(CreateArgs),
    /// Prints entries, most recent first
    List(ListArgs),
    /// Opens an existing entry in your editor and commits the change
    Edit(EditArgs),
    /// Removes entries after confirmation
    Delete(DeleteArgs),
    /// Prints every `@@tag` used in a daybook
    Tags {
        /// Name of an installed daybook
        name: String,
    },
    /// Pulls, rebases and pushes every installed base directory
    Sync,
}

#[derive(Args, Debug)]
pub struct InstallArgs {
    /// Name of the daybook; also the directory holding its entries
    pub name: String,
    /// Git working directory (e.g. `~/journals`). Created on first use.
    pub base_dir: PathBuf,
    /// Recorded as `origin` when the repository is created
    #[arg(long)]
    pub remote_url: Option<String>,
    /// File whose content seeds the editor for every new entry
    #[arg(long)]
    pub default_template: Option<PathBuf>,
}

/// Filters shared by every command that looks entries up.
#[derive(Args, Debug, Default)]
pub struct Selection {
    /// Only entries containing any of these comma-separated tags (e.g. `-t work,home`)
    #[arg(long = "with-tags", short = 't')]
    pub with_tags: Option<String>,
    /// Only entries committed after this date; anything `git log --since` accepts
    #[arg(long)]
    pub after: Option<String>,
    /// Only entries committed before this date; anything `git log --until` accepts
    #[arg(long)]
    pub before: Option<String>,
}

/// Title and tags used to seed a new entry.
#[derive(Args, Debug, Default)]
pub struct EntrySeed {
    /// First line of the new entry
    #[arg(long)]
    pub title: Option<String>,
    /// Comma-separated tags written as `@@tag` markers (e.g. `--tags work,home`)
    #[arg(long)]
    pub tags: Option<String>,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Name of an installed daybook
    pub name: String,
    #[command(flatten)]
    pub seed: EntrySeed,
    /// `True` or `False`
    #[arg(long, default_value = "False")]
    pub is_encrypted: String,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Name of an installed daybook
    pub name: String,
    /// Stop after this many entries; 0 prints all of them
    #[arg(long, short, default_value_t = 0)]
    pub max_entries: usize,
    #[command(flatten)]
    pub selection: Selection,
    /// Only entries containing this text
    #[arg(long = "with-text", short = 'T')]
    pub with_text: Option<String>,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Name of an installed daybook
    pub name: String,
    /// Which match to edit: 0 is the most recent, 1 the one before, and so on
    #[arg(long = "entries-back", short = 'n', default_value_t = 0)]
    pub entries_back: usize,
    #[command(flatten)]
    pub selection: Selection,
    /// Write a new entry when nothing matches
    #[arg(long)]
    pub create_if_missing: bool,
    /// `True` or `False`; required together with `--create-if-missing`
    #[arg(long)]
    pub is_encrypted: Option<String>,
    #[command(flatten)]
    pub seed: EntrySeed,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Name of an installed daybook
    pub name: String,
    /// How many of the most recent matches to delete; 0 deletes all of them
    #[arg(long, short, default_value_t = 1)]
    pub max_entries: usize,
    #[command(flatten)]
    pub selection: Selection,
    /// Skip the confirmation prompt
    #[arg(long, short)]
    pub yes: bool,
}
