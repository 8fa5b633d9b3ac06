pub mod config;
pub mod error;
pub mod links;
pub mod manager;
pub mod platform;
pub mod progress;
pub mod prompt;
pub mod report;
pub mod resolver;
pub mod scanner;
pub mod session;

pub use config::AppConfig;
pub use error::Error;
pub use links::LinkRequest;
pub use manager::LinkManager;
pub use progress::{ProgressReporter, SilentReporter};
pub use report::Report;
pub use scanner::{FileEntry, LinkEntry, MatchSet};
pub use session::{MenuChoice, Session};
