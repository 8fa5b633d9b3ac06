use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::Error;
use crate::scanner::LinkEntry;

pub const EMPTY_MESSAGE: &str = "No symbolic links found in your home directory.";
pub const HEADER: &str = "Found symbolic links:";
pub const SEPARATOR_WIDTH: usize = 60;

/// Link inventory in scan order, rendered as plain text.
#[derive(Debug, Clone, Default)]
pub struct Report {
    entries: Vec<LinkEntry>,
}

impl Report {
    pub fn build(entries: Vec<LinkEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[LinkEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Report lines without trailing newlines. Link blocks span two lines.
    pub fn lines(&self) -> Vec<String> {
        if self.entries.is_empty() {
            return vec![EMPTY_MESSAGE.to_string()];
        }

        let separator = "-".repeat(SEPARATOR_WIDTH);
        let mut lines = vec![HEADER.to_string(), separator.clone()];
        let mut listed = 0usize;
        for entry in &self.entries {
            lines.push(format!("Link: {}", entry.path.display()));
            lines.push(format!("→ Target: {}", entry.target.display()));
            listed += 1;
        }
        lines.push(separator);
        lines.push(format!("Total symbolic links in home directory: {}", listed));
        lines
    }

    pub fn render(&self) -> String {
        let mut text = self.lines().join("\n");
        text.push('\n');
        text
    }

    /// Replaces whatever is at `path` with the rendered report. The text is
    /// staged in a sibling file and renamed over the destination.
    pub fn write_to(&self, path: &Path) -> Result<(), Error> {
        let staging = staging_path(path);
        let written = fs::write(&staging, self.render()).and_then(|_| fs::rename(&staging, path));
        if let Err(source) = written {
            let _ = fs::remove_file(&staging);
            return Err(Error::ReportWrite {
                path: path.to_path_buf(),
                source,
            });
        }

        info!(
            "Wrote report with {} links to {}",
            self.entries.len(),
            path.display()
        );
        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.tmp", file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(path: &str, target: &str) -> LinkEntry {
        LinkEntry {
            path: PathBuf::from(path),
            target: PathBuf::from(target),
        }
    }

    #[test]
    fn test_empty_report_has_no_count_section() {
        let report = Report::build(Vec::new());
        assert_eq!(report.render(), format!("{}\n", EMPTY_MESSAGE));
        assert!(!report.render().contains("Total symbolic links"));
        assert!(!report.render().contains("---"));
    }

    #[test]
    fn test_report_layout() {
        let report = Report::build(vec![
            link("/home/u/Desktop/notes.txt", "/home/u/docs/notes.txt"),
            link("/home/u/latest", "../broken"),
        ]);
        let separator = "-".repeat(60);
        let expected = format!(
            "Found symbolic links:\n{sep}\n\
             Link: /home/u/Desktop/notes.txt\n→ Target: /home/u/docs/notes.txt\n\
             Link: /home/u/latest\n→ Target: ../broken\n\
             {sep}\nTotal symbolic links in home directory: 2\n",
            sep = separator
        );
        assert_eq!(report.render(), expected);
    }

    #[test]
    fn test_count_matches_listed_blocks() {
        for k in [1usize, 3, 10] {
            let entries: Vec<LinkEntry> = (0..k)
                .map(|i| link(&format!("/h/link{}", i), &format!("/h/t{}", i)))
                .collect();
            let text = Report::build(entries).render();
            assert_eq!(text.matches("Link: ").count(), k);
            assert!(text.ends_with(&format!("Total symbolic links in home directory: {}\n", k)));
        }
    }

    #[test]
    fn test_staging_path_is_sibling() {
        let staging = staging_path(Path::new("/home/u/symlink_report.txt"));
        assert_eq!(staging, PathBuf::from("/home/u/.symlink_report.txt.tmp"));
    }
}
