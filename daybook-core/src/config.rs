use crate::error::DaybookError;
use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

/// Where a single daybook lives and how it syncs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaybookConfig {
    /// Root of the git working directory. May start with `~`.
    pub base_dir: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_url: Option<String>,
    /// File whose content seeds the editor for every new entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_template: Option<PathBuf>,
    /// Remote used by `sync`. Defaults to `origin`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<String>,
    /// Branch used by `sync`. Defaults to `master`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

impl DaybookConfig {
    pub fn new(base_dir: impl Into<PathBuf>, remote_url: Option<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
            remote_url,
            default_template: None,
            remote: None,
            branch: None,
        }
    }

    pub fn remote(&self) -> &str {
        self.remote.as_deref().unwrap_or("origin")
    }

    pub fn branch(&self) -> &str {
        self.branch.as_deref().unwrap_or("master")
    }

    /// Reads the default template, if one is configured.
    pub fn read_template(&self) -> Result<Option<String>> {
        match &self.default_template {
            Some(path) => {
                let path = expand_home(path);
                let template = fs::read_to_string(&path)
                    .with_context(|| format!("reading template {}", path.display()))?;
                Ok(Some(template))
            }
            None => Ok(None),
        }
    }
}

/// Process-wide settings, loaded once at startup and handed to whoever needs them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Preferred editor name/binary (e.g. hx for Helix). Optional; the CLI will fall back to $VISUAL/$EDITOR.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
    #[serde(default)]
    pub daybooks: BTreeMap<String, DaybookConfig>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native).
    /// No config file at all means no daybooks are installed yet.
    pub fn load() -> Result<Self> {
        match Self::config_file_paths().into_iter().find(|p| p.exists()) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let s = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()))
    }

    /// Writes the whole configuration back, replacing the existing file.
    pub fn save(&self) -> Result<PathBuf> {
        let candidates = Self::config_file_paths();
        let path = candidates
            .iter()
            .find(|p| p.exists())
            .or_else(|| candidates.first())
            .cloned()
            .context("cannot determine a configuration directory")?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating config dir {}", parent.display()))?;
        }
        let s = toml::to_string_pretty(self).context("serializing configuration")?;
        fs::write(path, s).with_context(|| format!("writing {}", path.display()))
    }

    /// Looks up an installed daybook.
    pub fn daybook(&self, name: &str) -> Result<&DaybookConfig, DaybookError> {
        self.daybooks
            .get(name)
            .ok_or_else(|| DaybookError::UnknownDaybook(name.to_string()))
    }

    /// Adds or replaces a daybook entry.
    pub fn install(&mut self, name: &str, daybook: DaybookConfig) {
        self.daybooks.insert(name.to_string(), daybook);
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b.home_dir().join(".config").join("daybook").join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("daybook").join("config.toml");
            if !v.contains(&native) {
                v.push(native);
            }
        }
        v
    }

    fn parse_file(s: &str) -> Result<Config> {
        Ok(toml::from_str::<Config>(s)?)
    }
}

/// Expands a leading `~` to the user's home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match BaseDirs::new() {
        Some(b) => b.home_dir().join(rest),
        None => path.to_path_buf(),
    }
}
