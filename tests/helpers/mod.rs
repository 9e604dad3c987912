use anyhow::{Context, Result};
use cardboard::infrastructure::SqliteCardRepository;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture for working with temporary on-disk card stores
#[allow(dead_code)]
pub struct TestStore {
    _temp_dir: TempDir,
    pub db_path: PathBuf,
}

#[allow(dead_code)]
impl TestStore {
    /// Create a scratch store in a temporary directory
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let db_path = temp_dir.path().join("cards.db");

        Ok(Self {
            _temp_dir: temp_dir,
            db_path,
        })
    }

    /// Open a repository on this store. Reopening simulates a process
    /// restart against the same database file.
    pub fn open_repository(&self) -> Result<SqliteCardRepository> {
        SqliteCardRepository::new(&self.db_path)
    }
}

/// Titles from the seed data set
#[allow(dead_code)]
pub mod seed_titles {
    pub const MODERN_DESIGN: &str = "Modern Design";
    pub const POWERFUL_PERFORMANCE: &str = "Powerful Performance";
    pub const SECURE_RELIABLE: &str = "Secure & Reliable";
    pub const USER_FRIENDLY: &str = "User Friendly";
}
