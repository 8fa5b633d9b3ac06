use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "symlinker")]
#[command(about = "Create, delete and report symbolic links in your home directory", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Find a file under home by name and link it onto the Desktop
    Create {
        /// Base name of the file to link
        name: String,
    },
    /// Delete a symbolic link from the Desktop
    Delete {
        /// Name of the link on the Desktop
        name: String,
    },
    /// Write a report of every symbolic link under home
    Report,
    /// Print configuration values
    PrintConfig,
}
