use std::path::{Path, PathBuf};
use anyhow::Result;
use log::{debug, trace};

use crate::utils::file_utils;

/// Regular files found directly inside a directory
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CollectedFiles {
    /// Regular files, in directory listing order
    pub files: Vec<PathBuf>,

    /// Entries that were not regular files
    pub skipped: Vec<PathBuf>,
}

/// File collector for the non-recursive directory scan
#[derive(Debug, Default)]
pub struct FileCollector {}

impl FileCollector {
    pub fn new() -> Self {
        Self {}
    }

    /// Collect the regular files directly inside `input_dir`.
    ///
    /// Subdirectories (and links to them) are skipped without descent.
    pub fn collect_files(&self, input_dir: impl AsRef<Path>) -> Result<CollectedFiles> {
        let input_dir = input_dir.as_ref();
        let mut collected = CollectedFiles::default();

        for path in file_utils::list_dir_entries(input_dir)? {
            if file_utils::is_regular_file(&path) {
                collected.files.push(path);
            } else {
                trace!("Skipping non-file entry: {}", path.display());
                collected.skipped.push(path);
            }
        }

        debug!(
            "Collected {} file(s) from {} ({} skipped)",
            collected.files.len(),
            input_dir.display(),
            collected.skipped.len()
        );
        Ok(collected)
    }
}
