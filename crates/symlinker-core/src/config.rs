use config::{Config, File as ConfigFile};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Folder inside the home directory where new links are placed.
pub const DESTINATION_DIR_NAME: &str = "Desktop";

/// File inside the home directory that receives the link report.
pub const REPORT_FILE_NAME: &str = "symlink_report.txt";

/// Resolved once at startup and handed to every component.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub home_dir: PathBuf,
    pub destination_dir: PathBuf,
    pub report_path: PathBuf,
    pub ignore_patterns: Vec<String>,
}

/// The only settings an optional `Config.toml` may provide.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileSettings {
    ignore_patterns: Vec<String>,
}

impl AppConfig {
    /// Fixed layout rooted at `home`: links go to `<home>/Desktop`,
    /// the report to `<home>/symlink_report.txt`.
    pub fn for_home(home: impl Into<PathBuf>) -> Self {
        let home_dir = home.into();
        Self {
            destination_dir: home_dir.join(DESTINATION_DIR_NAME),
            report_path: home_dir.join(REPORT_FILE_NAME),
            home_dir,
            ignore_patterns: Vec::new(),
        }
    }

    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }
}

pub fn load_configuration() -> Result<AppConfig, Error> {
    let home = dirs::home_dir().ok_or(Error::HomeDirUnavailable)?;
    load_configuration_from(&home, Path::new("Config"))
}

/// Builds the layout for `home`, reading `ignore_patterns` from
/// `settings_file` if it exists. Without an extension, any supported
/// format (`Config.toml`, ...) is looked up.
pub fn load_configuration_from(home: &Path, settings_file: &Path) -> Result<AppConfig, Error> {
    let settings: FileSettings = Config::builder()
        .add_source(ConfigFile::from(settings_file).required(false))
        .build()?
        .try_deserialize()?;
    Ok(AppConfig::for_home(home).with_ignore_patterns(settings.ignore_patterns))
}
