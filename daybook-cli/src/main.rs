mod cli;
mod cli_modes;
mod common;
mod render;

use anyhow::Result;
use cli::{Cli, Command};
use daybook_core::Config;
use render::{RenderOptions, Renderer};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("DAYBOOK_LOG", "warn"))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("daybook: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::new();
    let mut config = Config::load()?;
    let renderer = Renderer::new(RenderOptions {
        use_color: cli.color.use_color(),
    });

    match &cli.command {
        Command::Install(args) => cli_modes::install_mode(args, &renderer, &mut config),
        Command::Daybooks => cli_modes::daybooks_mode(&renderer, &config),
        Command::Create(args) => cli_modes::create_mode(args, &renderer, &config),
        Command::List(args) => cli_modes::list_mode(args, &renderer, &config),
        Command::Edit(args) => cli_modes::edit_mode(args, &renderer, &config),
        Command::Delete(args) => cli_modes::delete_mode(args, &renderer, &config),
        Command::Tags { name } => cli_modes::tags_mode(name, &renderer, &config),
        Command::Sync => cli_modes::sync_mode(&renderer, &config),
    }
}
