pub mod types;
pub mod stripper;
pub mod scanner;

// Re-export the main API for easier access
pub use types::{FileReport, StripOptions, StripStats, TagPattern};
pub use stripper::{StrippedContent, TagStripper};
pub use scanner::DirectoryScanner;
