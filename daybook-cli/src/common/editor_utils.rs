use anyhow::{Context, Result};
use daybook_core::utils::tags::{format_tag_line, split_tag_names};
use std::{fs, path::Path, process::Command};

/// Editor from the config, then `$VISUAL`, then `$EDITOR`, then `vim`.
pub fn resolve_editor(editor: Option<&str>) -> String {
    editor
        .map(str::to_string)
        .or_else(|| std::env::var("VISUAL").ok())
        .or_else(|| std::env::var("EDITOR").ok())
        .unwrap_or_else(|| "vim".into())
}

/// Initial buffer for a new entry: the title, a blank line, the `@@tag` line, then the
/// template. Missing parts are left out.
pub fn compose_seed(title: Option<&str>, tags: Option<&str>, template: Option<&str>) -> String {
    let title = title.map(str::trim).filter(|t| !t.is_empty());
    let tag_line = tags
        .map(split_tag_names)
        .filter(|names| !names.is_empty())
        .map(|names| format_tag_line(&names));

    let header = match (title, tag_line) {
        (Some(title), Some(tags)) => format!("{title}\n\n{tags}"),
        (Some(title), None) => title.to_string(),
        (None, Some(tags)) => tags,
        (None, None) => String::new(),
    };
    match template {
        Some(template) if header.is_empty() => template.to_string(),
        Some(template) => format!("{header}\n\n{template}"),
        None => header,
    }
}

/// Writes `seed` to a temporary file, lets the user edit it and returns what was saved.
pub fn create_editor_buffer(editor_cmd: &str, seed: &str) -> Result<String> {
    let file = tempfile::Builder::new()
        .prefix("daybook")
        .suffix(".tmp")
        .tempfile()?;

    let path = file.path().to_path_buf();
    fs::write(&path, seed).with_context(|| format!("writing {}", path.display()))?;
    open_file_in_editor(editor_cmd, &path)?;
    Ok(fs::read_to_string(&path)?)
}

pub fn open_file_in_editor(editor_cmd: &str, path: &Path) -> Result<()> {
    let (program, args) = editor_command(editor_cmd);
    log::debug!("launching {program} {}", args.join(" "));
    let status = Command::new(program)
        .args(args)
        .arg(path)
        .status()
        .with_context(|| format!("launching editor `{editor_cmd}`"))?;
    if !status.success() {
        anyhow::bail!("Editor exited with status {}", status);
    }
    Ok(())
}

/// Splits a configured editor such as `code --wait` into program and arguments.
/// vim-family editors are asked to start at the end of the file.
fn editor_command(editor_cmd: &str) -> (&str, Vec<&str>) {
    let mut parts = editor_cmd.split_whitespace();
    let program = parts.next().unwrap_or("vim");
    let mut args: Vec<&str> = parts.collect();
    if program.contains("vim") {
        args.push("+");
    }
    (program, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_editor_wins() {
        assert_eq!(resolve_editor(Some("hx")), "hx");
    }

    #[test]
    fn seed_with_title_and_tags() {
        assert_eq!(
            compose_seed(Some("Morning"), Some("work, home"), None),
            "Morning\n\n@@work @@home"
        );
        assert_eq!(compose_seed(Some("Morning"), None, None), "Morning");
        assert_eq!(compose_seed(None, Some("work"), None), "@@work");
        assert_eq!(compose_seed(None, None, None), "");
    }

    #[test]
    fn seed_appends_template() {
        assert_eq!(
            compose_seed(Some("Morning"), Some("work"), Some("Mood:\n")),
            "Morning\n\n@@work\n\nMood:\n"
        );
        assert_eq!(compose_seed(None, Some(" , "), Some("Mood:\n")), "Mood:\n");
    }

    #[test]
    fn vim_starts_at_end_of_file() {
        assert_eq!(editor_command("vim"), ("vim", vec!["+"]));
        assert_eq!(editor_command("nvim -u NONE"), ("nvim", vec!["-u", "NONE", "+"]));
        assert_eq!(editor_command("code --wait"), ("code", vec!["--wait"]));
        assert_eq!(editor_command("hx"), ("hx", vec![]));
    }

    #[test]
    fn buffer_returns_what_the_editor_left() {
        // `true` exits without touching the file, so the seed comes back unchanged.
        let text = create_editor_buffer("true", "Title\n\n@@work").unwrap();
        assert_eq!(text, "Title\n\n@@work");
    }
}
