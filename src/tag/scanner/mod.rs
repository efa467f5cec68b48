mod file_collector;

use std::path::Path;
use anyhow::Result;
use log::debug;

use crate::tag::stripper::TagStripper;
use crate::tag::types::{StripOptions, StripStats};

pub use file_collector::{CollectedFiles, FileCollector};

/// Directory scanner that runs the tag stripper over every regular file
/// directly inside a directory
#[derive(Debug)]
pub struct DirectoryScanner {
    /// Whether files are left untouched
    dry_run: bool,

    /// File collector for the non-recursive listing
    file_collector: FileCollector,

    /// Stripper applied to each file
    stripper: TagStripper,
}

impl DirectoryScanner {
    /// Create a scanner for the pattern and mode in `options`
    pub fn new(options: &StripOptions) -> Result<Self> {
        Ok(Self {
            dry_run: options.dry_run,
            file_collector: FileCollector::new(),
            stripper: TagStripper::new(&options.pattern)?,
        })
    }

    /// Create a scanner with the default docutils pattern
    pub fn with_defaults() -> Result<Self> {
        Self::new(&StripOptions::default())
    }

    pub fn stripper(&self) -> &TagStripper {
        &self.stripper
    }

    /// Strip the tag from every regular file directly inside `directory`.
    ///
    /// The listing is taken once up front. The first error aborts the scan;
    /// files already processed stay rewritten.
    pub fn scan_directory(&self, directory: impl AsRef<Path>) -> Result<StripStats> {
        let directory = directory.as_ref();
        let collected = self.file_collector.collect_files(directory)?;

        let mut stats = StripStats::new();
        stats.skipped_entries = collected.skipped.len();

        for path in &collected.files {
            println!("Remove Tag from file at {}", path.display());
            let report = self.stripper.strip_file(path, self.dry_run)?;
            stats.record(report);
        }

        debug!(
            "Processed {} file(s) in {}: {} changed, {} tag(s) removed",
            stats.total_files,
            directory.display(),
            stats.changed_files,
            stats.tags_removed
        );
        Ok(stats)
    }
}
