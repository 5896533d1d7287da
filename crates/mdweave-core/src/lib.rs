//! Conversion core for mdweave.
//!
//! Turns source files written with `//` line comments and `/* ... */` block
//! comments into Markdown: comment text becomes prose, code becomes fenced
//! blocks, and image or animation references inside comments are collected
//! as media paths for the caller to copy next to the generated document.
//!
//! # Architecture
//!
//! - [`Classifier`]: stateful per-document line classification
//! - [`extract`]: pure tag extraction from comment lines
//! - [`load_snippet`]: marked-region extraction from animation export files
//! - [`Converter`]: the line-oriented state machine driving all of the above
//!
//! # Example
//!
//! ```
//! use mdweave_core::Converter;
//!
//! let source = "// A greeting.\nfn main() {}\n";
//! let converted = Converter::new().convert(source).unwrap();
//! assert!(converted.markdown.starts_with("A greeting.\n"));
//! ```

mod classify;
mod convert;
mod error;
pub mod extract;
mod snippet;

pub use classify::{Classifier, LineKind};
pub use convert::{Conversion, Converter};
pub use error::{ConvertError, SnippetError};
pub use snippet::load_snippet;
