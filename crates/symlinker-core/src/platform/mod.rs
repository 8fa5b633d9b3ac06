#[cfg(target_os = "windows")]
pub mod windows;

use std::io;
use std::path::Path;

#[cfg(unix)]
pub fn create_symlink(target: &Path, link_path: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link_path)
}

#[cfg(target_os = "windows")]
pub fn create_symlink(target: &Path, link_path: &Path) -> io::Result<()> {
    windows::create_symlink(target, link_path)
}

/// Removes the link entry itself, never what it points to.
#[cfg(unix)]
pub fn remove_symlink(link_path: &Path) -> io::Result<()> {
    std::fs::remove_file(link_path)
}

#[cfg(target_os = "windows")]
pub fn remove_symlink(link_path: &Path) -> io::Result<()> {
    windows::remove_symlink(link_path)
}
