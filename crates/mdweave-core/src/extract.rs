//! Tag extraction from comment lines.
//!
//! Two independent rules applied to every comment line: Markdown image tags
//! and Tumult-Hype-style animation tags. Both recognize at most one tag per
//! line; a second tag on the same line is ignored. That limitation is part
//! of the contract, not an oversight.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ConvertError;

/// Matches `![alt](path)` and `![alt](path "title")`. The path may contain
/// spaces but neither `"` nor `)`. A backtick or backslash immediately before
/// the `!` suppresses the match (quoted/escaped tag).
static IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:^|[^\\`])!\[[^\]]*\]\(([^")]*?)\s*(?:"[^"]*")?\)"#).unwrap()
});

/// Matches `HYPE[description](path)` animation references.
static ANIMATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"HYPE\[[^\]]*\]\(([^)]+)\)").unwrap());

/// Extension of the sibling resources directory next to a Hype export file
/// (`anim.html` ships with `anim.hyperesources/`).
const RESOURCES_EXTENSION: &str = "hyperesources";

/// An animation reference found on a comment line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationTag {
    /// Path of the export file, as written in the comment.
    pub export_path: String,
    /// Path of the resources directory belonging to the export file.
    pub resources_dir: String,
}

/// Find the first image tag on a line and return its trimmed path.
///
/// Returns `Ok(None)` when the line carries no image tag and
/// [`ConvertError::MalformedTag`] when a tag is structurally present but its
/// path is empty.
pub fn image_path(line: &str) -> Result<Option<String>, ConvertError> {
    let Some(caps) = IMAGE.captures(line) else {
        return Ok(None);
    };
    let path = caps.get(1).map_or("", |m| m.as_str()).trim();
    if path.is_empty() {
        return Err(ConvertError::MalformedTag {
            line: line.to_owned(),
        });
    }
    Ok(Some(path.to_owned()))
}

/// Find the first animation tag on a line.
///
/// The resources directory path is derived from the export path by replacing
/// its file extension with `hyperesources`.
#[must_use]
pub fn animation(line: &str) -> Option<AnimationTag> {
    let caps = ANIMATION.captures(line)?;
    let export_path = caps[1].trim().to_owned();
    if export_path.is_empty() {
        return None;
    }
    let resources_dir = Path::new(&export_path)
        .with_extension(RESOURCES_EXTENSION)
        .to_string_lossy()
        .into_owned();
    Some(AnimationTag {
        export_path,
        resources_dir,
    })
}
