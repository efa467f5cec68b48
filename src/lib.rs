pub mod config;
pub mod tag;
pub mod utils;

// Re-export main types and functions for easier access
pub use tag::types::{FileReport, StripOptions, StripStats, TagPattern};
pub use tag::stripper::TagStripper;
pub use tag::scanner::DirectoryScanner;

pub use config::{load_options, resolve_options, OptionOverrides};

// Re-export utility functions
pub use utils::file_utils;
