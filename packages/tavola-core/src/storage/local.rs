/// Local filesystem storage backend.
///
/// Keeps the whole list collection in one JSON document with:
/// - An in-memory RwLock cache, loaded once at open
/// - Atomic writes (write to .tmp, fsync, rename, fsync directory)
/// - Disk-first mutation order: the document is persisted before the
///   in-memory copy is updated, so a failed write leaves the cache
///   matching what is actually on disk

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::types::List;
use super::{ListStorage, StoreError};

/// On-disk document: the whole list collection, persisted as one file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ListDocument {
    lists: Vec<List>,
}

/// JSON-file-backed list storage.
pub struct LocalStorage {
    path: PathBuf,
    lists: RwLock<Vec<List>>,
}

impl LocalStorage {
    /// Open storage backed by the document at `path`. A missing file is an
    /// empty collection; an unreadable or corrupt file is an error, because
    /// this file is the system of record and starting empty over it would
    /// orphan the existing data.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let lists = match fs::read_to_string(path) {
            Ok(content) => {
                let document: ListDocument = serde_json::from_str(&content)?;
                log::info!(
                    "[tavola.storage] Loaded {} lists from {}",
                    document.lists.len(),
                    path.display()
                );
                document.lists
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!(
                    "[tavola.storage] No data file at {}, starting empty",
                    path.display()
                );
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path: path.to_path_buf(),
            lists: RwLock::new(lists),
        })
    }

    /// Serialize and atomically write the whole document.
    /// Called with the write lock held so writers are serialized.
    fn persist(&self, lists: &[List]) -> Result<(), StoreError> {
        let document = ListDocument {
            lists: lists.to_vec(),
        };
        let json = serde_json::to_string_pretty(&document)?;
        Self::atomic_write(&self.path, &json)?;
        log::debug!(
            "[tavola.storage] Persisted {} lists to {}",
            lists.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Atomic write with fsync: write to .tmp, fsync, rename, fsync directory.
    fn atomic_write(path: &Path, content: &str) -> Result<(), std::io::Error> {
        let tmp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp_path, path)?;

        // fsync directory for rename durability
        if let Some(dir) = path.parent() {
            if let Ok(d) = fs::File::open(dir) {
                let _ = d.sync_all();
            }
        }
        Ok(())
    }
}

impl ListStorage for LocalStorage {
    fn find_all(&self) -> Result<Vec<List>, StoreError> {
        Ok(self.lists.read().unwrap().clone())
    }

    fn find_one(&self, list_id: u64) -> Result<Option<List>, StoreError> {
        Ok(self
            .lists
            .read()
            .unwrap()
            .iter()
            .find(|l| l.id == list_id)
            .cloned())
    }

    fn save(&self, list: &List) -> Result<(), StoreError> {
        let mut lists = self.lists.write().unwrap();
        let mut next = lists.clone();
        match next.iter_mut().find(|l| l.id == list.id) {
            Some(slot) => *slot = list.clone(),
            None => next.push(list.clone()),
        }
        self.persist(&next)?;
        *lists = next;
        Ok(())
    }

    fn delete_one(&self, list_id: u64) -> Result<bool, StoreError> {
        let mut lists = self.lists.write().unwrap();
        let Some(index) = lists.iter().position(|l| l.id == list_id) else {
            return Ok(false);
        };
        let mut next = lists.clone();
        next.remove(index);
        self.persist(&next)?;
        *lists = next;
        Ok(true)
    }
}
