//! Marked-region extraction from animation export files.

use std::fs;
use std::path::Path;

use crate::error::SnippetError;

/// Marker line that opens the copy region inside an export file.
const COPY_START: &str = "<!-- copy these lines to your document: -->";
/// Marker line that closes the copy region.
const COPY_END: &str = "<!-- end copy -->";

/// Load the embeddable markup fragment from an animation export file.
///
/// The fragment is delimited by marker comments; both marker lines are
/// excluded from the result. The scan stops at the first end marker, so only
/// the first marked region of a file is ever used. Lines inside the region
/// are right-trimmed of tab characters; the returned text ends with one
/// trailing blank line.
pub fn load_snippet(path: &Path) -> Result<String, SnippetError> {
    let content = fs::read_to_string(path).map_err(|source| SnippetError {
        path: path.to_path_buf(),
        source,
    })?;
    let content = content.replace('\r', "");

    let mut snippet = String::new();
    let mut copying = false;
    for line in content.split('\n') {
        if line.contains(COPY_START) {
            copying = true;
            continue;
        }
        if copying {
            if line.contains(COPY_END) {
                break;
            }
            snippet.push_str(line.trim_end_matches('\t'));
            snippet.push('\n');
        }
    }
    snippet.push('\n');
    Ok(snippet)
}
