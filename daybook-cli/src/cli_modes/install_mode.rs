use crate::{cli::InstallArgs, render::Renderer};
use anyhow::Result;
use daybook_core::{Config, DaybookConfig, Project};

/// Records the daybook in the configuration file. The repository itself is created the
/// first time the daybook is used.
pub fn install_mode(args: &InstallArgs, renderer: &Renderer, config: &mut Config) -> Result<()> {
    // Rejects names that are not a single directory before anything is saved.
    Project::new(&args.name, &args.base_dir)?;

    let mut daybook = DaybookConfig::new(&args.base_dir, args.remote_url.clone());
    daybook.default_template = args.default_template.clone();
    config.install(&args.name, daybook);
    let path = config.save()?;

    renderer.print_info(&format!(
        "Installed daybook {} in {} ({})",
        args.name,
        args.base_dir.display(),
        path.display()
    ));
    Ok(())
}

pub fn daybooks_mode(renderer: &Renderer, config: &Config) -> Result<()> {
    if config.daybooks.is_empty() {
        renderer.print_info("No daybooks installed");
        return Ok(());
    }
    for name in config.daybooks.keys() {
        println!("{name}");
    }
    Ok(())
}
