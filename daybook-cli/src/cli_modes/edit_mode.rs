use super::create_mode::write_new_entry;
use crate::{
    cli::EditArgs,
    common::{create_editor_buffer, resolve_editor},
    render::Renderer,
};
use anyhow::Result;
use daybook_core::{Config, EntryStore, ListOptions, utils::switch::parse_optional_switch};

/// What came back from the editor, compared with the stored body.
#[derive(Debug, PartialEq, Eq)]
enum Revision {
    Emptied,
    Unchanged,
    Changed,
}

fn revision(original: &str, edited: &str) -> Revision {
    if edited.trim().is_empty() {
        Revision::Emptied
    } else if edited == original {
        Revision::Unchanged
    } else {
        Revision::Changed
    }
}

pub fn edit_mode(args: &EditArgs, renderer: &Renderer, config: &Config) -> Result<()> {
    let is_encrypted_on_create = parse_optional_switch("is_encrypted", args.is_encrypted.as_deref())?;
    let store = EntryStore::from_config(config, &args.name)?;

    let options = ListOptions {
        max_entries: args.entries_back + 1,
        with_tags: args.selection.with_tags.as_deref(),
        after_date: args.selection.after.as_deref(),
        before_date: args.selection.before.as_deref(),
        ..Default::default()
    };
    let result = store.list(&options)?;
    renderer.print_errors(&result.errors);

    // Fewer matches than requested: the oldest one found is edited.
    let Some(entry) = result.entries.last() else {
        if !args.create_if_missing {
            renderer.print_info("No entry found");
            return Ok(());
        }
        let Some(is_encrypted) = is_encrypted_on_create else {
            anyhow::bail!(
                "You must pass in either True or False for --is-encrypted when creating a new entry implicitly."
            );
        };
        return write_new_entry(&store, config, &args.name, &args.seed, is_encrypted, renderer);
    };

    let editor = resolve_editor(config.editor.as_deref());
    let edited = create_editor_buffer(&editor, &entry.body)?;
    match revision(&entry.body, &edited) {
        Revision::Emptied => renderer.print_info("No entry. Nothing committed."),
        Revision::Unchanged => renderer.print_info("No changes. Nothing committed."),
        Revision::Changed => {
            let new_body = if entry.is_encrypted() {
                store.encrypt(&edited)?
            } else {
                edited.into_bytes()
            };
            let title = entry.title().unwrap_or_default();
            let receipt = store.edit(&entry.path, title, &new_body)?;
            renderer.print_receipt(&receipt);
        }
    }
    Ok(())
}
