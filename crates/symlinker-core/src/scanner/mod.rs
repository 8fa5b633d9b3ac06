pub mod walk;

use std::path::PathBuf;

pub use walk::{compile_ignore_patterns, find_files_named, find_symlinks, walk};

/// What a traversal node is, judged without following links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Directory,
    Symlink,
    /// Sockets, fifos, device nodes.
    Other,
}

#[derive(Debug, Clone)]
pub struct FsNode {
    pub path: PathBuf,
    pub kind: NodeKind,
}

/// A regular file found by name search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub name: String,
}

/// A symbolic link together with the raw target string stored in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    pub path: PathBuf,
    pub target: PathBuf,
}

/// Files sharing one base name, in traversal order.
pub type MatchSet = Vec<FileEntry>;
