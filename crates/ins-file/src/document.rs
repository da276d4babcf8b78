//! Section/key-value document model
//!
//! Parsing is line-oriented and deliberately lenient: `.ins` files contain
//! `;` comments, chapter-marker lines (`.Patch Names`) and the occasional
//! stray key, none of which should stop a load. Only an unreadable file or
//! a broken `[section` header is fatal.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::{InsFileError, Result};

/// A named section holding its key/value pairs in file order
#[derive(Debug, Clone, Default)]
pub struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    fn new(name: &str) -> Self {
        Section {
            name: name.to_string(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries in the order they appear in the file
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Look up a single key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Keys are unique within a section: a repeated key overwrites the
    // earlier value in place.
    fn insert(&mut self, key: &str, value: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| k == key) {
            entry.1 = value.to_string();
        } else {
            self.entries.push((key.to_string(), value.to_string()));
        }
    }
}

/// An ordered collection of sections parsed from one file
#[derive(Debug, Clone, Default)]
pub struct IniDocument {
    sections: Vec<Section>,
    index: HashMap<String, usize>,
}

impl IniDocument {
    /// Load and parse a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| InsFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Parse document text
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        let mut doc = IniDocument::default();
        let mut current: Option<usize> = None;

        for (lineno, raw) in text.lines().enumerate() {
            let line = raw.trim();

            if line.is_empty() || line.starts_with(';') {
                continue;
            }

            if let Some(rest) = line.strip_prefix('[') {
                let name = match rest.strip_suffix(']') {
                    Some(name) => name.trim(),
                    None => {
                        return Err(InsFileError::Syntax {
                            line: lineno + 1,
                            text: line.to_string(),
                        })
                    }
                };
                current = Some(doc.section_index(name));
                continue;
            }

            // Chapter markers and other stray lines carry no key/value
            // payload.
            let (key, value) = match line.split_once('=') {
                Some((key, value)) => (key.trim(), value.trim()),
                None => continue,
            };

            // Keys before the first section header have nowhere to go.
            if let Some(idx) = current {
                doc.sections[idx].insert(key, value);
            }
        }

        Ok(doc)
    }

    /// Look up a section by name
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.index.get(name).map(|&idx| &self.sections[idx])
    }

    /// Sections in the order they first appear
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    // A repeated section header merges into the first occurrence.
    fn section_index(&mut self, name: &str) -> usize {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        let idx = self.sections.len();
        self.sections.push(Section::new(name));
        self.index.insert(name.to_string(), idx);
        idx
    }
}
