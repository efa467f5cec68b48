use std::path::PathBuf;
use anyhow::Result;
use clap::Parser;
use log::{debug, LevelFilter};

use remove_tag::{resolve_options, DirectoryScanner, OptionOverrides, StripOptions, StripStats};

/// Strip the docutils inline-literal `<code>` wrapper from generated HTML pages
#[derive(Parser, Debug)]
#[command(name = "remove_tag", version, about)]
struct Cli {
    /// Directory whose files are rewritten (default: _build/html/api)
    directory: Option<PathBuf>,

    /// TOML file with strip options
    #[arg(long)]
    config: Option<PathBuf>,

    /// Opening tag to strip
    #[arg(long)]
    tag_start: Option<String>,

    /// Closing tag to strip
    #[arg(long)]
    tag_end: Option<String>,

    /// Report what would change without writing files
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn run(options: &StripOptions) -> Result<StripStats> {
    println!("Started Remove Tag");

    let scanner = DirectoryScanner::new(options)?;
    let stats = scanner.scan_directory(&options.directory)?;

    println!("Finished Removing Tag");
    Ok(stats)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let overrides = OptionOverrides {
        directory: cli.directory,
        tag_start: cli.tag_start,
        tag_end: cli.tag_end,
        dry_run: cli.dry_run,
    };
    let options = resolve_options(cli.config.as_deref(), overrides)?;
    debug!("Running with {:?}", options);

    let stats = run(&options)?;
    debug!(
        "{} file(s) processed, {} changed, {} skipped, {} tag(s) removed",
        stats.total_files, stats.changed_files, stats.skipped_entries, stats.tags_removed
    );

    Ok(())
}
