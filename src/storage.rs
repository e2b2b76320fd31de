//! ファイルによるキー・バリューストア
//!
//! キーごとに `<dir>/<key>.json` を1ファイル持つ。
//! 書き込みは同じディレクトリの一意な一時ファイルに書いてからrenameするので、
//! 読み手が書きかけの内容を見ることはない。同時に書いた場合は最後の書き込みが残る。

use recipe_lookup_common::{KeyValueStore, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "storage read failed");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        let path = self.path_for(key);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.persist(&path).map_err(|e| e.error)?;

        tracing::debug!(path = %path.display(), bytes = value.len(), "storage written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = FileStore::new(dir.path());
        assert!(store.get("favoriteRecipes").is_none());
    }

    #[test]
    fn test_set_creates_dir_and_overwrites() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let mut store = FileStore::new(dir.path().join("nested"));

        store.set("k", "one").unwrap();
        store.set("k", "two").unwrap();

        assert_eq!(store.get("k").as_deref(), Some("two"));

        // 一時ファイルは残らない
        let files: Vec<_> = fs::read_dir(store.dir()).unwrap().collect();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_concurrent_writers_last_one_wins() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let mut store = FileStore::new(dir.path());
                std::thread::spawn(move || {
                    for round in 0..20 {
                        store.set("favoriteRecipes", &format!("[\"{}-{}\"]", i, round))?;
                    }
                    Ok::<(), recipe_lookup_common::Error>(())
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap().unwrap();
        }

        let store = FileStore::new(dir.path());
        let raw = store.get("favoriteRecipes").unwrap();
        assert!(raw.ends_with("-19\"]"), "{}", raw);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
