use std::fs;
use std::path::Path;
use anyhow::Result;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

use remove_tag::{DirectoryScanner, StripOptions, TagPattern};

const OPEN: &str = r#"<code class="docutils literal notranslate">"#;
const CLOSE: &str = "</code>";

// Helper function to wrap text in the default tag
fn tagged(inner: &str) -> String {
    format!("{OPEN}{inner}{CLOSE}")
}

// Helper function to create a test page
fn write_page(dir: &Path, name: &str, content: &str) -> Result<()> {
    fs::write(dir.join(name), content)?;
    Ok(())
}

#[test]
fn test_file_without_tag_is_unchanged() -> Result<()> {
    let temp_dir = tempdir()?;
    let content = "<html>\n<p><code class=\"literal\">x</code></p>\n</html>";
    write_page(temp_dir.path(), "plain.html", content)?;

    let stats = DirectoryScanner::with_defaults()?.scan_directory(temp_dir.path())?;

    assert_eq!(fs::read_to_string(temp_dir.path().join("plain.html"))?, content);
    assert_eq!(stats.total_files, 1);
    assert_eq!(stats.changed_files, 0);
    assert_eq!(stats.tags_removed, 0);
    Ok(())
}

#[test]
fn test_single_and_double_tags() -> Result<()> {
    let temp_dir = tempdir()?;
    let content = format!(
        "<dt>{}</dt>\n<dd>{} and {}</dd>\n",
        tagged("solve()"),
        tagged("h"),
        tagged("hu")
    );
    write_page(temp_dir.path(), "api.html", &content)?;

    let stats = DirectoryScanner::with_defaults()?.scan_directory(temp_dir.path())?;

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("api.html"))?,
        "<dt>solve()</dt>\n<dd>h and hu</dd>\n"
    );
    assert_eq!(stats.lines_changed, 2);
    assert_eq!(stats.tags_removed, 3);
    Ok(())
}

#[test]
fn test_second_run_changes_nothing() -> Result<()> {
    let temp_dir = tempdir()?;
    write_page(temp_dir.path(), "a.html", &format!("{}\n{}\n", tagged("one"), tagged("two")))?;
    write_page(temp_dir.path(), "b.html", &format!("text {}", tagged("three")))?;

    let scanner = DirectoryScanner::with_defaults()?;
    let first = scanner.scan_directory(temp_dir.path())?;
    let after_first = (
        fs::read_to_string(temp_dir.path().join("a.html"))?,
        fs::read_to_string(temp_dir.path().join("b.html"))?,
    );

    let second = scanner.scan_directory(temp_dir.path())?;
    let after_second = (
        fs::read_to_string(temp_dir.path().join("a.html"))?,
        fs::read_to_string(temp_dir.path().join("b.html"))?,
    );

    assert_eq!(first.tags_removed, 3);
    assert_eq!(second.tags_removed, 0);
    assert_eq!(after_first, after_second);
    assert_eq!(after_second.0, "one\ntwo\n");
    assert_eq!(after_second.1, "text three");
    Ok(())
}

#[test]
fn test_tag_split_across_lines_is_left_alone() -> Result<()> {
    let temp_dir = tempdir()?;
    let content = format!("<p>{OPEN}first half\nsecond half{CLOSE}</p>\n");
    write_page(temp_dir.path(), "split.html", &content)?;

    DirectoryScanner::with_defaults()?.scan_directory(temp_dir.path())?;

    assert_eq!(fs::read_to_string(temp_dir.path().join("split.html"))?, content);
    Ok(())
}

#[test]
fn test_subdirectory_is_skipped() -> Result<()> {
    let temp_dir = tempdir()?;
    write_page(temp_dir.path(), "index.html", &tagged("top"))?;

    let nested = temp_dir.path().join("nested");
    fs::create_dir(&nested)?;
    let nested_content = tagged("deep");
    write_page(&nested, "page.html", &nested_content)?;

    let stats = DirectoryScanner::with_defaults()?.scan_directory(temp_dir.path())?;

    assert_eq!(fs::read_to_string(temp_dir.path().join("index.html"))?, "top");
    assert_eq!(fs::read_to_string(nested.join("page.html"))?, nested_content);
    assert_eq!(stats.total_files, 1);
    assert_eq!(stats.skipped_entries, 1);
    Ok(())
}

#[test]
fn test_missing_directory_fails() -> Result<()> {
    let temp_dir = tempdir()?;
    let result = DirectoryScanner::with_defaults()?.scan_directory(temp_dir.path().join("_build/html/api"));
    assert!(result.is_err());
    Ok(())
}

#[test]
fn test_invalid_file_aborts_scan() -> Result<()> {
    let temp_dir = tempdir()?;
    fs::write(temp_dir.path().join("broken.html"), [0xc3, 0x28, b'\n'])?;

    let result = DirectoryScanner::with_defaults()?.scan_directory(temp_dir.path());

    let err = result.expect_err("non-UTF-8 file must abort the scan");
    assert!(format!("{err:#}").contains("broken.html"));
    Ok(())
}

#[test]
fn test_custom_pattern_and_dry_run() -> Result<()> {
    let temp_dir = tempdir()?;
    let content = "<span class=\"pre\">x</span> and <code>y</code>\n";
    write_page(temp_dir.path(), "page.html", content)?;

    let options = StripOptions {
        directory: temp_dir.path().to_path_buf(),
        pattern: TagPattern::new("<span class=\"pre\">", "</span>"),
        dry_run: true,
    };
    let scanner = DirectoryScanner::new(&options)?;
    let stats = scanner.scan_directory(&options.directory)?;

    assert_eq!(stats.tags_removed, 1);
    assert!(!stats.reports[0].written);
    assert_eq!(fs::read_to_string(temp_dir.path().join("page.html"))?, content);

    let (line, _) = scanner.stripper().strip_line(content);
    assert_eq!(line, "x and <code>y</code>\n");
    Ok(())
}
