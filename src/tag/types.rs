use std::path::PathBuf;
use serde::{Serialize, Deserialize};

/// Opening tag stripped by default (Sphinx/docutils inline literal)
pub const DEFAULT_TAG_START: &str = r#"<code class="docutils literal notranslate">"#;

/// Closing tag stripped by default
pub const DEFAULT_TAG_END: &str = "</code>";

/// Directory scanned by default, relative to the working directory
pub const DEFAULT_DIRECTORY: &str = "_build/html/api";

/// The two literal delimiters surrounding the text to keep
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagPattern {
    /// Opening tag, including its attributes
    pub start: String,

    /// Closing tag
    pub end: String,
}

impl TagPattern {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

impl Default for TagPattern {
    fn default() -> Self {
        Self::new(DEFAULT_TAG_START, DEFAULT_TAG_END)
    }
}

/// Configuration for a single stripping run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripOptions {
    /// Directory whose regular files are rewritten (not recursive)
    pub directory: PathBuf,

    /// Tag delimiters to strip
    pub pattern: TagPattern,

    /// Report changes without writing any file
    pub dry_run: bool,
}

impl Default for StripOptions {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_DIRECTORY),
            pattern: TagPattern::default(),
            dry_run: false,
        }
    }
}

/// Outcome of stripping one file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileReport {
    /// Path of the processed file
    pub path: PathBuf,

    /// Number of lines read
    pub lines: usize,

    /// Number of lines that contained at least one tag
    pub lines_changed: usize,

    /// Number of tag occurrences removed
    pub tags_removed: usize,

    /// Whether the file was rewritten on disk
    pub written: bool,
}

impl FileReport {
    pub fn is_changed(&self) -> bool {
        self.tags_removed > 0
    }
}

/// Statistics about a directory scan
#[derive(Debug, Default, Clone)]
pub struct StripStats {
    /// Number of regular files processed
    pub total_files: usize,

    /// Number of files that contained at least one tag
    pub changed_files: usize,

    /// Number of directory entries skipped because they are not regular files
    pub skipped_entries: usize,

    /// Total number of changed lines
    pub lines_changed: usize,

    /// Total number of tag occurrences removed
    pub tags_removed: usize,

    /// Per-file reports, in processing order
    pub reports: Vec<FileReport>,
}

impl StripStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file report to the totals
    pub fn record(&mut self, report: FileReport) {
        self.total_files += 1;
        if report.is_changed() {
            self.changed_files += 1;
        }
        self.lines_changed += report.lines_changed;
        self.tags_removed += report.tags_removed;
        self.reports.push(report);
    }
}
