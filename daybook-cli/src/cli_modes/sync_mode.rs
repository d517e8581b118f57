use crate::render::Renderer;
use anyhow::Result;
use daybook_core::{Config, GitCli, config::expand_home, remote_sync::sync_history};
use std::{collections::BTreeMap, path::PathBuf};

/// Remote and branch per distinct base directory. Daybooks sharing a repository are
/// synced once, with the settings of the first one by name.
fn sync_targets(config: &Config) -> BTreeMap<PathBuf, (&str, &str)> {
    let mut targets = BTreeMap::new();
    for daybook in config.daybooks.values() {
        targets
            .entry(expand_home(&daybook.base_dir))
            .or_insert((daybook.remote(), daybook.branch()));
    }
    targets
}

pub fn sync_mode(renderer: &Renderer, config: &Config) -> Result<()> {
    let mut failed = Vec::new();
    for (base_dir, (remote, branch)) in sync_targets(config) {
        renderer.print_info(&format!("Syncing {} with {remote}/{branch}", base_dir.display()));
        if !GitCli::is_repository(&base_dir) {
            log::warn!("{} is not a git repository yet", base_dir.display());
            failed.push(base_dir);
            continue;
        }
        let outcomes = sync_history(&GitCli::open(&base_dir), remote, branch);
        for outcome in &outcomes {
            renderer.print_outcome(outcome);
        }
        if outcomes.iter().any(|o| !o.is_success()) {
            failed.push(base_dir);
        }
    }

    if !failed.is_empty() {
        let dirs = failed
            .iter()
            .map(|d| d.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        anyhow::bail!("sync failed for {dirs}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use daybook_core::DaybookConfig;

    #[test]
    fn shared_base_dirs_sync_once() {
        let mut config = Config::default();
        let mut personal = DaybookConfig::new("/srv/journals", None);
        personal.branch = Some("main".to_string());
        config.install("personal", personal);
        config.install("work", DaybookConfig::new("/srv/journals", None));
        config.install("dreams", DaybookConfig::new("/srv/dreams", None));

        let targets = sync_targets(&config);
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[&PathBuf::from("/srv/journals")], ("origin", "main"));
        assert_eq!(targets[&PathBuf::from("/srv/dreams")], ("origin", "master"));
    }
}
