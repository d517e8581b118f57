use crate::utils::{entry_paths::EntryFileName, tags::extract_tags};
use std::{borrow::Cow, collections::BTreeSet, io, path::PathBuf};

/// A journal entry as read back from the store, already decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub file_name: EntryFileName,
    /// Full text, byte-for-byte as stored (after decoding).
    pub body: String,
}

impl Entry {
    pub fn title(&self) -> Option<&str> {
        entry_title(&self.body)
    }

    pub fn tags(&self) -> BTreeSet<String> {
        extract_tags(&self.body)
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.body.lines()
    }

    pub fn is_encrypted(&self) -> bool {
        self.file_name.encrypted
    }
}

/// Raw file content, tagged by whether the file name says it needs decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryContent {
    Plain(String),
    Encrypted(Vec<u8>),
}

impl EntryContent {
    /// Plain entries must be UTF-8; encrypted ones are kept as bytes.
    pub fn load(file_name: &EntryFileName, raw: Vec<u8>) -> io::Result<Self> {
        if file_name.encrypted {
            Ok(EntryContent::Encrypted(raw))
        } else {
            String::from_utf8(raw)
                .map(EntryContent::Plain)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
        }
    }

    /// The text tag and text filters look at. Ciphertext is read lossily.
    pub fn searchable_text(&self) -> Cow<'_, str> {
        match self {
            EntryContent::Plain(body) => Cow::Borrowed(body),
            EntryContent::Encrypted(bytes) => String::from_utf8_lossy(bytes),
        }
    }
}

/// The first non-blank line of an entry.
pub fn entry_title(body: &str) -> Option<&str> {
    body.lines().map(str::trim).find(|l| !l.is_empty())
}
