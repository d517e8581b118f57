use crate::{
    cli::{CreateArgs, EntrySeed},
    common::{compose_seed, create_editor_buffer, resolve_editor},
    render::Renderer,
};
use anyhow::Result;
use daybook_core::{
    Config, DaybookError, EntryStore, VersionedHistory, entry_title, utils::switch::parse_switch,
};

pub fn create_mode(args: &CreateArgs, renderer: &Renderer, config: &Config) -> Result<()> {
    let is_encrypted = parse_switch("is_encrypted", &args.is_encrypted)?;
    let store = EntryStore::from_config(config, &args.name)?;
    write_new_entry(&store, config, &args.name, &args.seed, is_encrypted, renderer)
}

/// Opens the editor on a seeded buffer and commits whatever comes back.
pub(super) fn write_new_entry<H: VersionedHistory>(
    store: &EntryStore<H>,
    config: &Config,
    name: &str,
    seed: &EntrySeed,
    is_encrypted: bool,
    renderer: &Renderer,
) -> Result<()> {
    if is_encrypted && !store.supports_encryption() {
        return Err(DaybookError::Unsupported("encrypting entries").into());
    }
    let template = config.daybook(name)?.read_template()?;
    let seed = compose_seed(
        seed.title.as_deref(),
        seed.tags.as_deref(),
        template.as_deref(),
    );

    let editor = resolve_editor(config.editor.as_deref());
    let text = create_editor_buffer(&editor, &seed)?;
    if text.trim().is_empty() {
        renderer.print_info("No entry. Nothing committed.");
        return Ok(());
    }

    let body = if is_encrypted {
        store.encrypt(&text)?
    } else {
        text.clone().into_bytes()
    };
    let receipt = store.create(&body, entry_title(&text), is_encrypted)?;
    renderer.print_receipt(&receipt);
    Ok(())
}
