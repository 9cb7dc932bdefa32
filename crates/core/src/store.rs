//! Sharded JSON document storage.
//!
//! Farmer-generated records are stored one-per-directory under a two-level
//! sharded layout derived from the record id:
//!
//! ```text
//! <data_dir>/<domain>/
//!   <s1>/
//!     <s2>/
//!       <record_id>/
//!         record.json
//! ```
//!
//! where `s1`/`s2` are the first four hex characters of the id. Listing
//! scans the shard tree; a file that fails to parse is logged as a warning
//! and skipped rather than failing the whole listing.

use crate::constants::RECORD_JSON_FILENAME;
use crate::error::{CoreError, CoreResult};
use matsya_uuid::RecordId;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A domain-scoped store of JSON documents.
#[derive(Clone, Debug)]
pub struct DocumentStore {
    root: PathBuf,
    filename: &'static str,
}

impl DocumentStore {
    /// Creates a store rooted at `root`, writing documents as `record.json`.
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            filename: RECORD_JSON_FILENAME,
        }
    }

    /// Creates a store with a custom document filename.
    pub fn with_filename(root: PathBuf, filename: &'static str) -> Self {
        Self { root, filename }
    }

    fn document_path(&self, id: &RecordId) -> PathBuf {
        id.sharded_dir(&self.root).join(self.filename)
    }

    /// Writes (or overwrites) the document for `id`.
    pub fn write<T: Serialize>(&self, id: &RecordId, document: &T) -> CoreResult<()> {
        let dir = id.sharded_dir(&self.root);
        fs::create_dir_all(&dir).map_err(CoreError::StorageDirCreation)?;
        let json = serde_json::to_string_pretty(document).map_err(CoreError::Serialization)?;
        fs::write(dir.join(self.filename), json).map_err(CoreError::FileWrite)
    }

    /// Reads the document for `id`, returning `None` if it does not exist.
    pub fn read<T: DeserializeOwned>(&self, id: &RecordId) -> CoreResult<Option<T>> {
        let path = self.document_path(id);
        if !path.is_file() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path).map_err(CoreError::FileRead)?;
        serde_json::from_str(&contents)
            .map(Some)
            .map_err(CoreError::Deserialization)
    }

    /// Loads every document in the store by walking the shard tree.
    ///
    /// Missing directories yield an empty list (nothing has been stored
    /// yet). Unparseable documents are skipped with a warning so one bad
    /// file cannot take down every listing.
    pub fn load_all<T: DeserializeOwned>(&self) -> Vec<T> {
        let mut documents = Vec::new();

        let s1_iter = match fs::read_dir(&self.root) {
            Ok(it) => it,
            Err(_) => return documents,
        };
        for s1 in s1_iter.flatten() {
            let s1_path = s1.path();
            if !s1_path.is_dir() {
                continue;
            }
            let s2_iter = match fs::read_dir(&s1_path) {
                Ok(it) => it,
                Err(_) => continue,
            };
            for s2 in s2_iter.flatten() {
                let s2_path = s2.path();
                if !s2_path.is_dir() {
                    continue;
                }
                let id_iter = match fs::read_dir(&s2_path) {
                    Ok(it) => it,
                    Err(_) => continue,
                };
                for id_entry in id_iter.flatten() {
                    let document_path = id_entry.path().join(self.filename);
                    if !document_path.is_file() {
                        continue;
                    }
                    match self.parse_document(&document_path) {
                        Some(document) => documents.push(document),
                        None => {
                            tracing::warn!(
                                "failed to parse record: {}",
                                document_path.display()
                            );
                        }
                    }
                }
            }
        }

        documents
    }

    fn parse_document<T: DeserializeOwned>(&self, path: &Path) -> Option<T> {
        let contents = fs::read_to_string(path).ok()?;
        serde_json::from_str(&contents).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: RecordId,
        body: String,
    }

    #[test]
    fn write_then_read_roundtrips() {
        let dir = TempDir::new().unwrap();
        let store = DocumentStore::new(dir.path().join("notes"));
        let id = RecordId::generate();
        let note = Note {
            id,
            body: "পুকুরে চুন প্রয়োগ".into(),
        };

        store.write(&id, &note).unwrap();
        let loaded: Note = store.read(&id).unwrap().unwrap();
        assert_eq!(loaded, note);
    }

    #[test]
    fn read_missing_returns_none() {
        let dir = TempDir::new().unwrap();
        let store = DocumentStore::new(dir.path().join("notes"));
        let missing: Option<Note> = store.read(&RecordId::generate()).unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn load_all_walks_the_shard_tree() {
        let dir = TempDir::new().unwrap();
        let store = DocumentStore::new(dir.path().join("notes"));
        for n in 0..5 {
            let id = RecordId::generate();
            store
                .write(&id, &Note {
                    id,
                    body: format!("note {n}"),
                })
                .unwrap();
        }
        let all: Vec<Note> = store.load_all();
        assert_eq!(all.len(), 5);
    }

    #[test]
    fn load_all_on_empty_store_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = DocumentStore::new(dir.path().join("notes"));
        let all: Vec<Note> = store.load_all();
        assert!(all.is_empty());
    }

    #[test]
    fn load_all_skips_unparseable_documents() {
        let dir = TempDir::new().unwrap();
        let store = DocumentStore::new(dir.path().join("notes"));
        let id = RecordId::generate();
        store
            .write(&id, &Note {
                id,
                body: "ok".into(),
            })
            .unwrap();

        // Corrupt a second record on disk.
        let bad_id = RecordId::generate();
        let bad_dir = bad_id.sharded_dir(&dir.path().join("notes"));
        std::fs::create_dir_all(&bad_dir).unwrap();
        std::fs::write(bad_dir.join(RECORD_JSON_FILENAME), "{not json").unwrap();

        let all: Vec<Note> = store.load_all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].body, "ok");
    }
}
