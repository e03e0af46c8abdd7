//! Text-level rewrite of the manifest `version = "..."` line.
//!
//! The manifest is treated as plain text rather than parsed TOML so that
//! every byte outside the version value survives the rewrite.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// First line starting with `version`, `=`, then a single- or double-quoted value.
static VERSION_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^version[ \t]*=[ \t]*(?:"(?P<double>[^"\r\n]*)"|'(?P<single>[^'\r\n]*)')"#)
        .expect("version line regex is valid")
});

/// Result of rewriting manifest text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionLinePatch {
    /// Manifest text after the rewrite
    pub content: String,
    /// Value that was replaced, `None` when no version line exists
    pub previous: Option<String>,
}

impl VersionLinePatch {
    /// Whether a version line was found
    pub fn matched(&self) -> bool {
        self.previous.is_some()
    }
}

/// Byte range of the first version value (inside the quotes)
fn find_version_value(content: &str) -> Option<Range<usize>> {
    let caps = VERSION_LINE_RE.captures(content)?;
    caps.name("double")
        .or_else(|| caps.name("single"))
        .map(|m| m.range())
}

/// Replace the value of the first `version = ...` line with `new_version`.
///
/// Quote style and everything around the value are kept. Later matching
/// lines are left alone. Text without a version line comes back unchanged.
pub fn set_version_line(content: &str, new_version: &str) -> VersionLinePatch {
    match find_version_value(content) {
        Some(range) => {
            let mut patched = String::with_capacity(content.len() + new_version.len());
            patched.push_str(&content[..range.start]);
            patched.push_str(new_version);
            patched.push_str(&content[range.end..]);

            VersionLinePatch {
                content: patched,
                previous: Some(content[range].to_string()),
            }
        }
        None => VersionLinePatch {
            content: content.to_string(),
            previous: None,
        },
    }
}
