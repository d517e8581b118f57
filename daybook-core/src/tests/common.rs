use super::fake_history::FakeHistory;
use crate::cipher::Cipher;
use crate::entry_store::{EntryStore, Project};
use crate::error::Result;
use crate::history::args;
use std::fs;
use tempfile::TempDir;

/// Test helper to create an `EntryStore` for the daybook `personal` inside `tmp`,
/// backed by an in-memory history.
pub fn mk_store(tmp: &TempDir) -> EntryStore<FakeHistory> {
    let project = Project::new("personal", tmp.path()).expect("valid project");
    let history = FakeHistory::new(&project.base_dir);
    EntryStore::with_history(project, history).expect("store created")
}

/// Writes `content` at `relative` (below the project directory) and commits it,
/// bypassing the store's own naming.
pub fn write_and_commit<H: crate::history::VersionedHistory>(
    store: &EntryStore<H>,
    relative: &str,
    content: impl AsRef<[u8]>,
) {
    let path = store.project().project_dir.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();

    let rel = store.project().relative(&path).to_string_lossy().into_owned();
    assert!(store.execute(&args(["add", "--", rel.as_str()])).is_success());
    assert!(store.execute(&args(["commit", "-m", relative])).is_success());
}

/// A toy cipher, enough to exercise the decode path.
pub struct Rot13;

impl Rot13 {
    fn rotate(s: &str) -> String {
        s.chars()
            .map(|c| match c {
                'a'..='z' => (((c as u8 - b'a') + 13) % 26 + b'a') as char,
                'A'..='Z' => (((c as u8 - b'A') + 13) % 26 + b'A') as char,
                _ => c,
            })
            .collect()
    }
}

impl Cipher for Rot13 {
    fn encrypt(&self, plaintext: &str) -> Result<Vec<u8>> {
        Ok(Self::rotate(plaintext).into_bytes())
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<String> {
        Ok(Self::rotate(&String::from_utf8_lossy(ciphertext)))
    }
}
