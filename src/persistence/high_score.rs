use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Somewhere to keep the best score between runs
pub trait HighScoreStore {
    /// Stored high score, or 0 when nothing usable is stored
    fn load(&self) -> u32;

    /// Replace the stored high score
    fn save(&mut self, score: u32) -> Result<()>;
}

/// Stores the high score as a bare JSON integer in a file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for JsonFileStore {
    fn load(&self) -> u32 {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = ?self.path, "No stored high score");
                return 0;
            }
            Err(e) => {
                tracing::warn!(path = ?self.path, error = %e, "Failed to read high score");
                return 0;
            }
        };

        match serde_json::from_str::<u32>(contents.trim()) {
            Ok(score) => score,
            Err(e) => {
                tracing::warn!(path = ?self.path, error = %e, "Ignoring malformed high score");
                0
            }
        }
    }

    fn save(&mut self, score: u32) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }

        let json = serde_json::to_string(&score).context("Failed to serialize high score")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write high score to {:?}", self.path))?;

        Ok(())
    }
}

/// In-process store, keeps every saved value
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    saved: Vec<u32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a previously stored value
    pub fn with_score(score: u32) -> Self {
        Self { saved: vec![score] }
    }

    /// Every value passed to `save`, oldest first
    pub fn history(&self) -> &[u32] {
        &self.saved
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> u32 {
        self.saved.last().copied().unwrap_or(0)
    }

    fn save(&mut self, score: u32) -> Result<()> {
        self.saved.push(score);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_zero() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("high_score.json"));

        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("high_score.json");
        let mut store = JsonFileStore::new(&path);

        store.save(130).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "130");
        assert_eq!(JsonFileStore::new(&path).load(), 130);
    }

    #[test]
    fn test_malformed_file_loads_zero() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("high_score.json");
        std::fs::write(&path, "not a number").unwrap();

        assert_eq!(JsonFileStore::new(&path).load(), 0);
    }

    #[test]
    fn test_trailing_newline_is_accepted() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("high_score.json");
        std::fs::write(&path, "50\n").unwrap();

        assert_eq!(JsonFileStore::new(&path).load(), 50);
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load(), 0);

        store.save(10).unwrap();
        store.save(20).unwrap();
        assert_eq!(store.load(), 20);
        assert_eq!(store.history(), &[10, 20]);

        assert_eq!(MemoryStore::with_score(40).load(), 40);
    }
}
