use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::info;

use crate::error::Error;
use crate::platform;

/// A resolved request to link `resolved_target` as `link_path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRequest {
    pub source_name: String,
    pub resolved_target: PathBuf,
    pub link_path: PathBuf,
}

impl LinkRequest {
    pub fn new(source_name: &str, resolved_target: PathBuf, destination_dir: &Path) -> Self {
        Self {
            source_name: source_name.to_string(),
            resolved_target,
            link_path: destination_dir.join(source_name),
        }
    }
}

/// A link name must be a single, plain path component so the link stays
/// directly inside the destination directory.
pub fn validate_link_name(name: &str) -> Result<(), Error> {
    if name.is_empty() {
        return Err(Error::EmptyInput);
    }
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(Error::InvalidName {
            name: name.to_string(),
        }),
    }
}

/// Link-aware existence check: a dangling link still exists.
pub fn entry_exists(path: &Path) -> io::Result<bool> {
    match fs::symlink_metadata(path) {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}

/// Creates the link, refusing to touch anything already at `link_path`.
/// The stored target is `resolved_target` exactly as given.
pub fn create_link(request: &LinkRequest) -> Result<(), Error> {
    let link_path = &request.link_path;

    let occupied = entry_exists(link_path).map_err(|source| Error::LinkCreation {
        path: link_path.clone(),
        source,
    })?;
    if occupied {
        return Err(Error::Collision {
            path: link_path.clone(),
        });
    }

    platform::create_symlink(&request.resolved_target, link_path).map_err(|source| {
        if source.kind() == io::ErrorKind::AlreadyExists {
            Error::Collision {
                path: link_path.clone(),
            }
        } else {
            Error::LinkCreation {
                path: link_path.clone(),
                source,
            }
        }
    })?;

    info!(
        "Created symbolic link {} -> {}",
        link_path.display(),
        request.resolved_target.display()
    );
    Ok(())
}

/// Removes `link_path` only if it is a symbolic link. Regular files and
/// directories under that name are left untouched.
pub fn delete_link(link_path: &Path) -> Result<(), Error> {
    let metadata = match fs::symlink_metadata(link_path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(Error::NotFound {
                path: link_path.to_path_buf(),
            })
        }
        Err(source) => {
            return Err(Error::LinkDeletion {
                path: link_path.to_path_buf(),
                source,
            })
        }
    };

    if !metadata.file_type().is_symlink() {
        return Err(Error::NotASymlink {
            path: link_path.to_path_buf(),
        });
    }

    platform::remove_symlink(link_path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            Error::NotFound {
                path: link_path.to_path_buf(),
            }
        } else {
            Error::LinkDeletion {
                path: link_path.to_path_buf(),
                source,
            }
        }
    })?;

    info!("Deleted symbolic link {}", link_path.display());
    Ok(())
}
