//! Reader for `.ins` instrument definition files
//!
//! Instrument definition files are INI-like: named `[Section]` headers
//! followed by ordered `key=value` pairs. This crate loads one file into an
//! [`IniDocument`] that preserves section order and key order, which is all
//! a consumer needs to walk bank sets and patch lists.
//!
//! # Examples
//!
//! ```
//! use ins_file::IniDocument;
//!
//! let doc = IniDocument::parse("[Bank]\n0=Grand Piano\n").unwrap();
//! let section = doc.section("Bank").unwrap();
//! assert_eq!(section.get("0"), Some("Grand Piano"));
//! ```

pub mod document;

pub use document::{IniDocument, Section};

use std::path::PathBuf;

/// Errors produced while loading an instrument definition file
#[derive(Debug, thiserror::Error)]
pub enum InsFileError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed section header on line {line}: {text}")]
    Syntax { line: usize, text: String },
}

pub type Result<T> = std::result::Result<T, InsFileError>;
