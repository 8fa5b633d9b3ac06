use std::fs;
use std::io;
use std::os::windows::fs::{symlink_dir, symlink_file, FileTypeExt};
use std::path::Path;

/// Windows distinguishes file links from directory links at creation time.
pub fn create_symlink(target: &Path, link_path: &Path) -> io::Result<()> {
    if target.is_dir() {
        symlink_dir(target, link_path)
    } else {
        symlink_file(target, link_path)
    }
}

pub fn remove_symlink(link_path: &Path) -> io::Result<()> {
    let file_type = fs::symlink_metadata(link_path)?.file_type();
    if file_type.is_symlink_dir() {
        fs::remove_dir(link_path)
    } else {
        fs::remove_file(link_path)
    }
}
