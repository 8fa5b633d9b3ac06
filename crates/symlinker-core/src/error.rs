use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("File name cannot be empty.")]
    EmptyInput,

    #[error("'{name}' is not a plain file name.")]
    InvalidName { name: String },

    #[error("No file named '{name}' found in your home directory.")]
    NoMatch { name: String },

    #[error("Invalid selection '{input}'. Enter a number between 1 and {max}.")]
    InvalidSelection { input: String, max: usize },

    #[error("A link or file named '{}' already exists.", .path.display())]
    Collision { path: PathBuf },

    #[error("Symbolic link '{}' does not exist.", .path.display())]
    NotFound { path: PathBuf },

    #[error("'{}' exists but is not a symbolic link.", .path.display())]
    NotASymlink { path: PathBuf },

    #[error("Could not create symbolic link {}: {source}", .path.display())]
    LinkCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not delete symbolic link {}: {source}", .path.display())]
    LinkDeletion {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not write report file {}: {source}", .path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not determine the home directory")]
    HomeDirUnavailable,

    #[error("Input closed")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl Error {
    /// Errors scoped to a single menu action. The session prints them and
    /// returns to the menu; anything else ends the session.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            Error::InputClosed | Error::Io(_) | Error::Config(_) | Error::HomeDirUnavailable
        )
    }
}
