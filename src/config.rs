use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use log::debug;

use crate::tag::types::StripOptions;
use crate::utils::file_utils;

/// Values given on the command line, applied on top of the configuration
#[derive(Debug, Default, Clone)]
pub struct OptionOverrides {
    pub directory: Option<PathBuf>,
    pub tag_start: Option<String>,
    pub tag_end: Option<String>,
    pub dry_run: bool,
}

/// Parse strip options from TOML text. Missing keys take their defaults.
pub fn parse_options(text: &str) -> Result<StripOptions> {
    toml::from_str(text).context("Failed to parse strip options")
}

/// Load strip options from a TOML file
pub fn load_options(path: impl AsRef<Path>) -> Result<StripOptions> {
    let path = path.as_ref();
    debug!("Loading configuration from {}", path.display());

    let text = file_utils::read_file_to_string(path)?;
    parse_options(&text).with_context(|| format!("Invalid configuration file {}", path.display()))
}

/// Build the run options: defaults, then the config file, then overrides
pub fn resolve_options(config: Option<&Path>, overrides: OptionOverrides) -> Result<StripOptions> {
    let mut options = match config {
        Some(path) => load_options(path)?,
        None => StripOptions::default(),
    };

    if let Some(directory) = overrides.directory {
        options.directory = directory;
    }
    if let Some(start) = overrides.tag_start {
        options.pattern.start = start;
    }
    if let Some(end) = overrides.tag_end {
        options.pattern.end = end;
    }
    options.dry_run |= overrides.dry_run;

    Ok(options)
}
