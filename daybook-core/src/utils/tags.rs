//! Inline `@@tag` markers.
//!
//! Extraction is marker-aware, while [`contains_any_tag`] is a plain substring test
//! over the tag names, so `--with-tags work` also matches an entry that merely
//! mentions "homework".

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

pub const TAG_MARKER: &str = "@@";

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@@(\S+)").expect("valid regex"));

/// All distinct tag names in `text`, without the `@@` marker.
pub fn extract_tags(text: &str) -> BTreeSet<String> {
    TAG_RE
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}

pub fn contains_any_tag<S: AsRef<str>>(text: &str, tag_names: &[S]) -> bool {
    tag_names.iter().any(|tag| text.contains(tag.as_ref()))
}

pub fn contains_text(text: &str, needle: &str) -> bool {
    text.contains(needle)
}

/// Splits a comma-delimited tag list (`"work, home"`), dropping blank pieces.
pub fn split_tag_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Renders tag names as the marker line seeded into a new entry: `@@work @@home`.
pub fn format_tag_line<S: AsRef<str>>(tag_names: &[S]) -> String {
    tag_names
        .iter()
        .map(|t| format!("{TAG_MARKER}{}", t.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_distinct_marker_tags() {
        let text = "Title A\n@@work content @@home\nmore @@work and @@Work";
        let tags = extract_tags(text);
        let expected: BTreeSet<String> = ["work", "home", "Work"].iter().map(|s| s.to_string()).collect();
        assert_eq!(tags, expected);
    }

    #[test]
    fn bare_marker_is_not_a_tag() {
        assert!(extract_tags("an email like me@@ or @@ alone").is_empty());
    }

    #[test]
    fn tag_filter_is_a_substring_test() {
        let text = "finished my homework";
        assert!(contains_any_tag(text, &["work"]));
        assert!(extract_tags(text).is_empty());
        assert!(!contains_any_tag(text, &["gym", "travel"]));
        assert!(contains_any_tag(text, &["gym", "home"]));
    }

    #[test]
    fn text_filter() {
        assert!(contains_text("line one\nline two", "one\nline"));
        assert!(!contains_text("line one", "three"));
    }

    #[test]
    fn splits_and_formats_tag_lists() {
        let names = split_tag_names(" work, home,,  ");
        assert_eq!(names, vec!["work", "home"]);
        assert_eq!(format_tag_line(&names), "@@work @@home");
        assert!(split_tag_names("").is_empty());
    }
}
