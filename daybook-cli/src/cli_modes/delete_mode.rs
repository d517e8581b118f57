use crate::{cli::DeleteArgs, render::Renderer};
use anyhow::{Context, Result};
use daybook_core::{Config, EntryStore, ListOptions};
use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

pub fn delete_mode(args: &DeleteArgs, renderer: &Renderer, config: &Config) -> Result<()> {
    let store = EntryStore::from_config(config, &args.name)?;
    let options = ListOptions {
        max_entries: args.max_entries,
        with_tags: args.selection.with_tags.as_deref(),
        after_date: args.selection.after.as_deref(),
        before_date: args.selection.before.as_deref(),
        ..Default::default()
    };
    let result = store.list(&options)?;
    renderer.print_errors(&result.errors);
    if result.entries.is_empty() {
        renderer.print_info("No entry/entries found");
        return Ok(());
    }

    let count = result.entries.len();
    println!("You are about to delete the following {count} entries.");
    renderer.print_entry_bodies(&result.entries);
    if !args.yes {
        print!("Confirm deletion -- y/n ");
        io::stdout().flush()?;
        if !confirmed(io::stdin().lock())? {
            renderer.print_info("Nothing deleted.");
            return Ok(());
        }
    }

    println!("Deleting {count} entries.");
    let paths: Vec<PathBuf> = result.entries.into_iter().map(|e| e.path).collect();
    let receipt = store.delete(&paths)?;
    renderer.print_receipt(&receipt);
    Ok(())
}

/// Only an exact `y` confirms.
fn confirmed(mut input: impl BufRead) -> Result<bool> {
    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .context("reading confirmation")?;
    Ok(answer.trim() == "y")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_y_confirms() {
        assert!(confirmed("y\n".as_bytes()).unwrap());
        assert!(confirmed(" y \n".as_bytes()).unwrap());
        assert!(!confirmed("yes\n".as_bytes()).unwrap());
        assert!(!confirmed("n\n".as_bytes()).unwrap());
        assert!(!confirmed("".as_bytes()).unwrap());
    }
}
