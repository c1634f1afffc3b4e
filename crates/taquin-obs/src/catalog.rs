//! Source-image discovery.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use taquin_core::ConfigError;

/// Cached listing of candidate source images.
///
/// Listing is decoupled from bank building: [`scan`](Self::scan) reads
/// the directory once, [`rescan`](Self::rescan) refreshes the cached
/// listing explicitly, and [`choose`](Self::choose) picks uniformly
/// from it. Entries are sorted by path so a fixed RNG seed selects a
/// fixed file regardless of directory iteration order.
#[derive(Clone, Debug)]
pub struct ImageCatalog {
    folder: PathBuf,
    entries: Vec<PathBuf>,
}

impl ImageCatalog {
    /// List the files under `folder`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ImageFolderMissing`] if the folder cannot be read.
    /// - [`ConfigError::ImageFolderEmpty`] if it contains no files.
    pub fn scan(folder: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let mut catalog = Self {
            folder: folder.into(),
            entries: Vec::new(),
        };
        catalog.rescan()?;
        Ok(catalog)
    }

    /// Re-list the directory, replacing the cached entries.
    ///
    /// On failure the previous listing is kept.
    ///
    /// # Errors
    ///
    /// Same as [`scan`](Self::scan).
    pub fn rescan(&mut self) -> Result<(), ConfigError> {
        let read_dir = fs::read_dir(&self.folder).map_err(|e| ConfigError::ImageFolderMissing {
            path: self.folder.clone(),
            reason: e.to_string(),
        })?;
        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| ConfigError::ImageFolderMissing {
                path: self.folder.clone(),
                reason: e.to_string(),
            })?;
            let path = entry.path();
            if path.is_file() {
                entries.push(path);
            }
        }
        if entries.is_empty() {
            return Err(ConfigError::ImageFolderEmpty {
                path: self.folder.clone(),
            });
        }
        entries.sort();
        debug!(
            "catalog: {} candidate images under {}",
            entries.len(),
            self.folder.display()
        );
        self.entries = entries;
        Ok(())
    }

    /// The configured folder.
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// The cached listing, sorted by path.
    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    /// Number of cached entries. Always positive after a successful scan.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the listing is empty. Never true after a successful scan.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pick one entry uniformly at random.
    pub fn choose<R: Rng>(&self, rng: &mut R) -> &Path {
        self.entries
            .choose(rng)
            .map(PathBuf::as_path)
            .expect("catalog is non-empty after scan")
    }
}
