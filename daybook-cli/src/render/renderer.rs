use super::theme::OneDark;
use daybook_core::{CommandOutcome, CommitReceipt, Entry, QueryError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@@\S+").expect("valid regex"));

const INDENT: &str = "    ";
const RULE_WIDTH: usize = 50;

#[derive(Clone)]
pub struct RenderOptions {
    pub use_color: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self {
            skin: OneDark::skin(),
            opts,
        }
    }

    pub fn print_md(&self, md: &str) {
        self.skin.print_text(md);
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.print_md(&md);
        } else {
            println!("{message}");
        }
    }

    /// Each entry under a `----- <path> (<position>) -----` header, its lines indented.
    pub fn print_entries(&self, entries: &[Entry]) {
        for (back, entry) in entries.iter().enumerate() {
            println!("{}", self.paint(&entry_header(entry, back), OneDark::BLUE));
            for line in entry.lines() {
                println!("{INDENT}{}", self.highlight_tags(line.trim()));
            }
        }
    }

    /// Entries about to be removed, framed by rules.
    pub fn print_entry_bodies(&self, entries: &[Entry]) {
        let rule = "-".repeat(RULE_WIDTH);
        println!("{rule}");
        for entry in entries {
            for line in entry.lines() {
                println!("{}", self.highlight_tags(line.trim()));
            }
        }
        println!("{rule}");
    }

    pub fn print_tags(&self, tags: &BTreeSet<String>) {
        for tag in tags {
            println!("{}", self.paint(tag, OneDark::GREEN));
        }
    }

    pub fn print_receipt(&self, receipt: &CommitReceipt) {
        let color = if receipt.is_committed() {
            OneDark::YELLOW
        } else {
            OneDark::RED
        };
        println!("{}", self.paint(&receipt.to_string(), color));
    }

    pub fn print_outcome(&self, outcome: &CommandOutcome) {
        match outcome {
            CommandOutcome::Completed(lines) => {
                for line in lines {
                    println!("{INDENT}{line}");
                }
            }
            CommandOutcome::Failed { .. } => {
                println!("{}", self.paint(&outcome.to_string(), OneDark::RED));
            }
        }
    }

    pub fn print_errors(&self, errors: &[QueryError]) {
        if errors.is_empty() {
            return;
        }
        let mut md = String::from("\n# Errors:\n");
        for error in errors {
            md.push_str(&format!("* {error}\n"));
        }
        if self.opts.use_color {
            self.print_md(&md);
        } else {
            print!("{md}");
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.opts.use_color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn highlight_tags(&self, line: &str) -> String {
        if !self.opts.use_color {
            return line.to_string();
        }
        TAG_RE
            .replace_all(line, |caps: &regex::Captures| {
                caps[0].with(OneDark::GREEN).to_string()
            })
            .into_owned()
    }
}

fn entry_header(entry: &Entry, back: usize) -> String {
    let position = if back == 0 {
        "most recent".to_string()
    } else {
        format!("{back} back")
    };
    format!("----- {} ({position}) -----", entry.path.display())
}
