//! Durable backends for the civic store.
//!
//! The library ships the file and in-memory backends; this module adds a
//! `SQLite` backend and picks one from configuration.
//!
//! # Submodules
//!
//! - [`sqlite`] - single-table `SQLite` key-value store

pub mod sqlite;

use std::fmt;
use std::path::Path;

use civic_lib::{FileKv, KeyValueStore, MemoryKv, Result};
use serde::{Deserialize, Serialize};

pub use sqlite::SqliteKv;

/// File name of the `SQLite` database inside the data directory.
pub const SQLITE_FILE: &str = "civic.db";

/// Which durable store to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// One JSON file per key in the data directory.
    #[default]
    File,
    /// A `SQLite` database in the data directory.
    Sqlite,
    /// Nothing is written; state lasts for one invocation.
    Memory,
}

impl BackendKind {
    pub const ALL: [Self; 3] = [Self::File, Self::Sqlite, Self::Memory];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Sqlite => "sqlite",
            Self::Memory => "memory",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "file" => Ok(Self::File),
            "sqlite" => Ok(Self::Sqlite),
            "memory" => Ok(Self::Memory),
            other => Err(format!("unknown backend '{other}' (expected file, sqlite, or memory)")),
        }
    }
}

/// Open the configured backend rooted at `data_dir`.
///
/// # Errors
///
/// Returns an error if the directory or database cannot be created.
pub fn open_backend(kind: BackendKind, data_dir: &Path) -> Result<Box<dyn KeyValueStore>> {
    tracing::debug!(backend = %kind, dir = %data_dir.display(), "opening backend");
    Ok(match kind {
        BackendKind::File => Box::new(FileKv::open(data_dir)?),
        BackendKind::Sqlite => {
            std::fs::create_dir_all(data_dir)?;
            Box::new(SqliteKv::open(data_dir.join(SQLITE_FILE))?)
        }
        BackendKind::Memory => Box::new(MemoryKv::new()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_kind_parses() {
        assert_eq!("SQLite".parse::<BackendKind>().unwrap(), BackendKind::Sqlite);
        assert!("redis".parse::<BackendKind>().is_err());
    }

    #[test]
    fn each_backend_opens_and_stores() {
        let dir = tempfile::tempdir().unwrap();
        for kind in BackendKind::ALL {
            let mut kv = open_backend(kind, &dir.path().join(kind.as_str())).unwrap();
            kv.set("darkMode", "true").unwrap();
            assert_eq!(kv.get("darkMode").unwrap().as_deref(), Some("true"));
        }
        assert!(dir.path().join("sqlite").join(SQLITE_FILE).exists());
    }
}
