use std::borrow::Cow;
use std::path::Path;
use anyhow::{bail, Context, Result};
use log::{debug, trace};
use regex::{Captures, Regex};

use crate::tag::types::{FileReport, TagPattern};
use crate::utils::file_utils;

/// Result of stripping a block of text in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrippedContent {
    /// Text with every tag wrapper replaced by its inner content
    pub text: String,

    /// Number of lines in the input
    pub lines: usize,

    /// Number of lines that contained at least one tag
    pub lines_changed: usize,

    /// Number of tag occurrences removed
    pub tags_removed: usize,
}

/// Removes a tag wrapper from text, one line at a time
#[derive(Debug, Clone)]
pub struct TagStripper {
    pattern: TagPattern,
    regex: Regex,
}

impl TagStripper {
    /// Compile a stripper for the given delimiters
    pub fn new(pattern: &TagPattern) -> Result<Self> {
        if pattern.start.is_empty() || pattern.end.is_empty() {
            bail!("Tag delimiters must not be empty (start: {:?}, end: {:?})", pattern.start, pattern.end);
        }

        let source = format!("{}(.*?){}", regex::escape(&pattern.start), regex::escape(&pattern.end));
        let regex = Regex::new(&source)
            .with_context(|| format!("Failed to compile tag pattern {source}"))?;

        Ok(Self {
            pattern: pattern.clone(),
            regex,
        })
    }

    /// Create a stripper for the default docutils literal tag
    pub fn with_defaults() -> Result<Self> {
        Self::new(&TagPattern::default())
    }

    pub fn pattern(&self) -> &TagPattern {
        &self.pattern
    }

    /// Strip every tag occurrence from a single line.
    ///
    /// Returns the new line and the number of occurrences removed. `.` never
    /// matches `\n`, so a tag opened on one line and closed on the next is
    /// left alone.
    pub fn strip_line<'a>(&self, line: &'a str) -> (Cow<'a, str>, usize) {
        let mut removed = 0;
        let stripped = self.regex.replace_all(line, |caps: &Captures<'_>| {
            removed += 1;
            caps.get(1).map_or("", |m| m.as_str()).to_string()
        });
        (stripped, removed)
    }

    /// Strip every line of `content`, keeping line terminators in place
    pub fn strip_content(&self, content: &str) -> StrippedContent {
        let mut out = StrippedContent {
            text: String::with_capacity(content.len()),
            ..Default::default()
        };

        for (index, line) in content.split_inclusive('\n').enumerate() {
            out.lines += 1;
            let (stripped, removed) = self.strip_line(line);
            if removed > 0 {
                trace!("Line {}: removed {} tag(s)", index + 1, removed);
                out.lines_changed += 1;
                out.tags_removed += removed;
            }
            out.text.push_str(&stripped);
        }

        out
    }

    /// Rewrite `path` in place with every tag wrapper removed.
    ///
    /// The file is read completely before it is overwritten. Nothing is
    /// written when `dry_run` is set.
    pub fn strip_file(&self, path: impl AsRef<Path>, dry_run: bool) -> Result<FileReport> {
        let path = path.as_ref();

        let content = file_utils::read_file_to_string(path)?;
        let stripped = self.strip_content(&content);

        if !dry_run {
            file_utils::write_string_to_file(path, &stripped.text)?;
        }

        debug!(
            "{}: {} line(s), {} changed, {} tag(s) removed{}",
            path.display(),
            stripped.lines,
            stripped.lines_changed,
            stripped.tags_removed,
            if dry_run { " (dry run)" } else { "" }
        );

        Ok(FileReport {
            path: path.to_path_buf(),
            lines: stripped.lines,
            lines_changed: stripped.lines_changed,
            tags_removed: stripped.tags_removed,
            written: !dry_run,
        })
    }
}
