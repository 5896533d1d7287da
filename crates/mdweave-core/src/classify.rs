//! Line classification for the document scan.

use std::sync::LazyLock;

use regex::Regex;

/// Pattern for `//` single-line comments.
pub(crate) const LINE_COMMENT_PATTERN: &str = r"^\s*//\s?";
/// Pattern for the `/*` block comment opener.
pub(crate) const BLOCK_OPEN_PATTERN: &str = r"^\s*/\*\s?";
/// Pattern for the `*/` block comment closer.
pub(crate) const BLOCK_CLOSE_PATTERN: &str = r"\s?\*/\s*$";

static LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(LINE_COMMENT_PATTERN).unwrap());
static BLOCK_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(BLOCK_OPEN_PATTERN).unwrap());
static BLOCK_CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(BLOCK_CLOSE_PATTERN).unwrap());

/// Pattern for build directives like `//go:generate`. No leading whitespace
/// is tolerated before the token.
static DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^//go:").unwrap());

/// Kind of a single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Build directive, dropped from output entirely.
    Directive,
    /// Part of a comment region.
    Comment,
    /// Part of a code region.
    Code,
}

/// Stateful line classifier for one document scan.
///
/// Tracks whether the scan is currently inside a `/* ... */` block comment.
/// Construct a fresh classifier per document; the flag persists across lines,
/// so sharing one instance between documents would leak scan state.
#[derive(Debug, Default)]
pub struct Classifier {
    in_block_comment: bool,
}

impl Classifier {
    /// Create a classifier with a clean scan state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify one line, updating the block comment state.
    ///
    /// Checks are ordered: directive, line comment, block opener, block
    /// closer, block continuation, code. A one-line block comment `/* x */`
    /// matches the opener before the closer and therefore leaves the scan
    /// inside a block comment; subsequent lines remain comment lines until a
    /// closer appears.
    pub fn classify(&mut self, line: &str) -> LineKind {
        if DIRECTIVE.is_match(line) {
            return LineKind::Directive;
        }
        if LINE_COMMENT.is_match(line) {
            return LineKind::Comment;
        }
        if BLOCK_OPEN.is_match(line) {
            self.in_block_comment = true;
            return LineKind::Comment;
        }
        if BLOCK_CLOSE.is_match(line) {
            self.in_block_comment = false;
            return LineKind::Comment;
        }
        if self.in_block_comment {
            return LineKind::Comment;
        }
        LineKind::Code
    }
}
