use glob::Pattern;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use super::{FileEntry, FsNode, LinkEntry, MatchSet, NodeKind};
use crate::progress::ProgressReporter;

const PROGRESS_INTERVAL: usize = 128;

pub fn compile_ignore_patterns(ignore_globs: &[String]) -> Vec<Pattern> {
    ignore_globs
        .iter()
        .filter_map(|glob| match Pattern::new(glob) {
            Ok(p) => Some(p),
            Err(e) => {
                warn!("Invalid glob pattern '{}': {}", glob, e);
                None
            }
        })
        .collect()
}

/// Depth-first walk of `root` in file-name order. Links are leaves: they are
/// reported but never descended into. Entries that cannot be read are skipped.
pub fn walk(root: &Path, ignore_patterns: &[Pattern]) -> impl Iterator<Item = FsNode> {
    let ignore_patterns = ignore_patterns.to_vec();

    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |entry| entry.depth() == 0 || !is_ignored(entry, &ignore_patterns))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(FsNode {
                kind: node_kind(&entry),
                path: entry.into_path(),
            }),
            Err(err) => {
                debug!("Skipping unreadable entry: {}", err);
                None
            }
        })
}

/// Every regular file under `root` whose base name equals `name`.
pub fn find_files_named(
    root: &Path,
    name: &str,
    ignore_patterns: &[Pattern],
    reporter: &dyn ProgressReporter,
) -> MatchSet {
    let wanted = OsStr::new(name);
    let scan_start = Instant::now();
    reporter.on_scan_start(&root.to_string_lossy());

    let mut matches = MatchSet::new();
    for (seen, node) in walk(root, ignore_patterns).enumerate() {
        report_progress(reporter, seen, &node.path);
        if node.kind == NodeKind::File && node.path.file_name() == Some(wanted) {
            matches.push(FileEntry {
                path: node.path,
                name: name.to_string(),
            });
        }
    }

    let duration = scan_start.elapsed();
    debug!(
        "Name search for '{}' completed in {:.2}s: {} matches",
        name,
        duration.as_secs_f64(),
        matches.len()
    );
    reporter.on_scan_complete(matches.len(), duration.as_secs_f64());
    matches
}

/// Every symbolic link under `root` with its stored target, unresolved.
pub fn find_symlinks(
    root: &Path,
    ignore_patterns: &[Pattern],
    reporter: &dyn ProgressReporter,
) -> Vec<LinkEntry> {
    let scan_start = Instant::now();
    reporter.on_scan_start(&root.to_string_lossy());

    let mut links = Vec::new();
    for (seen, node) in walk(root, ignore_patterns).enumerate() {
        report_progress(reporter, seen, &node.path);
        if node.kind != NodeKind::Symlink {
            continue;
        }
        match fs::read_link(&node.path) {
            Ok(target) => links.push(LinkEntry {
                path: node.path,
                target,
            }),
            Err(err) => debug!("Skipping unreadable link {}: {}", node.path.display(), err),
        }
    }

    let duration = scan_start.elapsed();
    debug!(
        "Link inventory completed in {:.2}s: {} links",
        duration.as_secs_f64(),
        links.len()
    );
    reporter.on_scan_complete(links.len(), duration.as_secs_f64());
    links
}

fn node_kind(entry: &DirEntry) -> NodeKind {
    let file_type = entry.file_type();
    if file_type.is_symlink() {
        NodeKind::Symlink
    } else if file_type.is_dir() {
        NodeKind::Directory
    } else if file_type.is_file() {
        NodeKind::File
    } else {
        NodeKind::Other
    }
}

fn is_ignored(entry: &DirEntry, ignore_patterns: &[Pattern]) -> bool {
    ignore_patterns
        .iter()
        .any(|pattern| pattern.matches_path(entry.path()))
}

fn report_progress(reporter: &dyn ProgressReporter, seen: usize, path: &Path) {
    if seen % PROGRESS_INTERVAL == 0 {
        reporter.on_scan_progress(seen, &path.to_string_lossy());
    }
}
