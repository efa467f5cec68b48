use std::path::{Path, PathBuf};
use std::fs;
use anyhow::{bail, Result, Context};
use log::{debug, trace};
use walkdir::WalkDir;

/// Check whether a path is a regular file, following symlinks.
///
/// Missing paths, dangling links and metadata errors all count as "not a file".
pub fn is_regular_file(path: impl AsRef<Path>) -> bool {
    fs::metadata(path.as_ref())
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}

/// List the entries directly inside `dir`, in directory order.
///
/// Fails if the directory cannot be opened or an entry cannot be read.
pub fn list_dir_entries(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    debug!("Listing directory: {}", dir.display());

    let meta = fs::metadata(dir)
        .with_context(|| format!("Failed to open directory {}", dir.display()))?;
    if !meta.is_dir() {
        bail!("{} is not a directory", dir.display());
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.with_context(|| format!("Failed to read directory {}", dir.display()))?;
        trace!("Found entry: {}", entry.path().display());
        entries.push(entry.into_path());
    }

    Ok(entries)
}

/// Read a file to string with better error handling
pub fn read_file_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read file {}", path.display()))
}

/// Overwrite a file with `content`
pub fn write_string_to_file(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, content)
        .with_context(|| format!("Failed to write file {}", path.display()))
}
