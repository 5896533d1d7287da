//! Line-oriented conversion of commented source text to Markdown.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::classify::{
    BLOCK_CLOSE_PATTERN, BLOCK_OPEN_PATTERN, Classifier, LINE_COMMENT_PATTERN, LineKind,
};
use crate::error::ConvertError;
use crate::extract;
use crate::snippet::load_snippet;

/// Alternation of all three comment delimiter patterns, used to strip
/// delimiters from emitted comment lines.
static COMMENT_DELIMS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "{LINE_COMMENT_PATTERN}|{BLOCK_OPEN_PATTERN}|{BLOCK_CLOSE_PATTERN}"
    ))
    .unwrap()
});

/// Segment the scan is currently emitting into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    Neither,
    InComment,
    InCode,
}

/// Result of converting one document.
///
/// Owned by the caller; the media set holds unique, trimmed, relative paths
/// referenced from comments (image files and animation resources
/// directories).
#[derive(Debug, Clone, Default)]
pub struct Conversion {
    /// Generated Markdown text.
    pub markdown: String,
    /// Media paths to copy next to the generated document.
    pub media: BTreeSet<String>,
}

/// Document converter.
///
/// Stateless across documents; each [`convert`](Self::convert) call owns a
/// fresh [`Classifier`], so one converter may be shared between parallel
/// conversions.
#[derive(Debug, Clone)]
pub struct Converter {
    fence_language: String,
    base_dir: PathBuf,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    /// Create a converter with the default `go` fence language and animation
    /// paths resolved against the current directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fence_language: "go".to_owned(),
            base_dir: PathBuf::from("."),
        }
    }

    /// Set the language tag emitted on opening code fences.
    #[must_use]
    pub fn fence_language(mut self, language: impl Into<String>) -> Self {
        self.fence_language = language.into();
        self
    }

    /// Set the directory animation export paths are resolved against,
    /// normally the directory of the source file.
    #[must_use]
    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    /// Convert commented source text to Markdown.
    ///
    /// Comment lines become prose with their delimiters stripped, code lines
    /// are wrapped in fenced blocks, directive lines are dropped, and media
    /// references found in comments are collected. An opening fence is
    /// deferred until a non-empty code line so that a blank line between two
    /// comment blocks does not produce an empty code block.
    ///
    /// # Errors
    ///
    /// Propagates [`ConvertError::MalformedTag`] for broken image tags and
    /// [`ConvertError::Snippet`] when an animation export cannot be read;
    /// both carry the offending line.
    pub fn convert(&self, source: &str) -> Result<Conversion, ConvertError> {
        let source = source.replace('\r', "");
        let mut classifier = Classifier::new();
        let mut segment = Segment::Neither;
        let mut markdown = String::new();
        let mut media = BTreeSet::new();

        for line in source.split('\n') {
            match classifier.classify(line) {
                LineKind::Directive => {}
                LineKind::Comment => {
                    if segment == Segment::InCode {
                        markdown.push_str("```\n");
                    }
                    segment = Segment::InComment;

                    if let Some(path) = extract::image_path(line)? {
                        debug!(path = %path, "collected image reference");
                        media.insert(path);
                    }
                    if let Some(tag) = extract::animation(line) {
                        let text = load_snippet(&self.base_dir.join(&tag.export_path)).map_err(
                            |source| ConvertError::Snippet {
                                line: line.to_owned(),
                                source,
                            },
                        )?;
                        markdown.push_str(&text);
                        debug!(path = %tag.resources_dir, "collected animation resources");
                        media.insert(tag.resources_dir);
                    } else {
                        markdown.push_str(COMMENT_DELIMS.replace_all(line, "").as_ref());
                        markdown.push('\n');
                    }
                }
                LineKind::Code => {
                    if segment != Segment::InCode && !line.is_empty() {
                        markdown.push_str("```");
                        markdown.push_str(&self.fence_language);
                        markdown.push('\n');
                        segment = Segment::InCode;
                    }
                    markdown.push_str(line);
                    markdown.push('\n');
                }
            }
        }
        if segment == Segment::InCode {
            markdown.push_str("```\n");
        }

        Ok(Conversion { markdown, media })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_code_only_wrapped_in_one_fence_pair() {
        let converted = Converter::new().convert("fn main() {}\nlet x = 1;").unwrap();
        assert_eq!(converted.markdown, "```go\nfn main() {}\nlet x = 1;\n```\n");
        assert!(converted.media.is_empty());
    }

    #[test]
    fn test_comment_only_has_no_fences() {
        let converted = Converter::new().convert("// a\n// b").unwrap();
        assert_eq!(converted.markdown, "a\nb\n");
    }

    #[test]
    fn test_line_comment_strips_one_space() {
        let converted = Converter::new().convert("//   extra indent").unwrap();
        // The delimiter and exactly one space go; further spaces stay.
        assert_eq!(converted.markdown, "  extra indent\n");
    }

    #[test]
    fn test_block_comment_strips_boundary_delimiters_only() {
        let converted = Converter::new().convert("/* a\nb\nc */").unwrap();
        assert_eq!(converted.markdown, "a\nb\nc\n");
    }

    #[test]
    fn test_comment_then_code_then_comment() {
        let source = "// intro\nfn main() {}\n// outro";
        let converted = Converter::new().convert(source).unwrap();
        assert_eq!(converted.markdown, "intro\n```go\nfn main() {}\n```\noutro\n");
    }

    #[test]
    fn test_trailing_fence_closed_at_end_of_input() {
        let converted = Converter::new().convert("// c\ncode();").unwrap();
        assert_eq!(converted.markdown, "c\n```go\ncode();\n```\n");
    }

    #[test]
    fn test_directive_fully_omitted() {
        let converted = Converter::new().convert("//go:generate foo\n// kept").unwrap();
        assert_eq!(converted.markdown, "kept\n");
        assert!(converted.media.is_empty());
    }

    #[test]
    fn test_blank_line_between_comments_opens_no_fence() {
        let source = "// first block\n\n// second block";
        let converted = Converter::new().convert(source).unwrap();
        assert_eq!(converted.markdown, "first block\n\nsecond block\n");
    }

    #[test]
    fn test_blank_code_lines_defer_fence_opening() {
        let source = "// prose\n\n\ncode();";
        let converted = Converter::new().convert(source).unwrap();
        assert_eq!(converted.markdown, "prose\n\n\n```go\ncode();\n```\n");
    }

    #[test]
    fn test_image_path_collected_and_tag_stripped_line_kept() {
        let source = r#"// ![alt](pic.png "t")"#;
        let converted = Converter::new().convert(source).unwrap();
        assert_eq!(
            converted.media.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["pic.png"]
        );
        assert_eq!(converted.markdown, "![alt](pic.png \"t\")\n");
    }

    #[test]
    fn test_duplicate_image_paths_deduplicated() {
        let source = "// ![a](pic.png)\n// ![b](pic.png)";
        let converted = Converter::new().convert(source).unwrap();
        assert_eq!(converted.media.len(), 1);
    }

    #[test]
    fn test_malformed_image_tag_reports_line() {
        let err = Converter::new().convert("// ![broken]()").unwrap_err();
        assert!(err.to_string().contains("![broken]()"));
    }

    #[test]
    fn test_image_in_code_line_ignored() {
        let source = "let s = \"![alt](pic.png)\";";
        let converted = Converter::new().convert(source).unwrap();
        assert!(converted.media.is_empty());
    }

    #[test]
    fn test_carriage_returns_removed() {
        let converted = Converter::new().convert("// a\r\n// b\r").unwrap();
        assert_eq!(converted.markdown, "a\nb\n");
    }

    #[test]
    fn test_custom_fence_language() {
        let converted = Converter::new()
            .fence_language("rust")
            .convert("code();")
            .unwrap();
        assert_eq!(converted.markdown, "```rust\ncode();\n```\n");
    }

    #[test]
    fn test_animation_snippet_embedded_and_resources_collected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("cube.html"),
            "<head>\n<!-- copy these lines to your document: -->\n<div id=\"cube\"></div>\n<!-- end copy -->\n</body>\n",
        )
        .unwrap();

        let source = "// HYPE[cube](cube.html)";
        let converted = Converter::new().base_dir(dir.path()).convert(source).unwrap();

        assert_eq!(converted.markdown, "<div id=\"cube\"></div>\n\n");
        assert_eq!(
            converted.media.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["cube.hyperesources"]
        );
    }

    #[test]
    fn test_missing_animation_export_fails_with_line() {
        let dir = tempfile::tempdir().unwrap();
        let err = Converter::new()
            .base_dir(dir.path())
            .convert("// HYPE[gone](gone.html)")
            .unwrap_err();
        assert!(err.to_string().contains("HYPE[gone](gone.html)"));
    }
}
