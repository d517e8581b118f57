use crate::{cli::ListArgs, render::Renderer};
use anyhow::Result;
use daybook_core::{Config, EntryStore, ListOptions};

pub fn list_mode(args: &ListArgs, renderer: &Renderer, config: &Config) -> Result<()> {
    let store = EntryStore::from_config(config, &args.name)?;
    let options = ListOptions {
        max_entries: args.max_entries,
        with_tags: args.selection.with_tags.as_deref(),
        with_text: args.with_text.as_deref(),
        after_date: args.selection.after.as_deref(),
        before_date: args.selection.before.as_deref(),
    };
    let result = store.list(&options)?;

    if result.entries.is_empty() {
        renderer.print_info("No entries found");
    } else {
        renderer.print_entries(&result.entries);
    }
    renderer.print_errors(&result.errors);
    Ok(())
}

pub fn tags_mode(name: &str, renderer: &Renderer, config: &Config) -> Result<()> {
    let store = EntryStore::from_config(config, name)?;
    let result = store.list_tags()?;

    if result.tags.is_empty() {
        renderer.print_info("No tags found");
    } else {
        renderer.print_tags(&result.tags);
    }
    renderer.print_errors(&result.errors);
    Ok(())
}
