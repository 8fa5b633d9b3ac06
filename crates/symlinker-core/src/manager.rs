use glob::Pattern;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::error::Error;
use crate::links::{self, LinkRequest};
use crate::progress::ProgressReporter;
use crate::report::Report;
use crate::scanner::{self, MatchSet};

/// Ties the fixed paths of an [`AppConfig`] to the scanner, link
/// operations and report builder.
pub struct LinkManager {
    config: AppConfig,
    ignore_patterns: Vec<Pattern>,
}

impl LinkManager {
    pub fn new(config: AppConfig) -> Self {
        let ignore_patterns = scanner::compile_ignore_patterns(&config.ignore_patterns);
        Self {
            config,
            ignore_patterns,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Regular files under home named `name`. Never empty on success.
    pub fn find_candidates(
        &self,
        name: &str,
        reporter: &dyn ProgressReporter,
    ) -> Result<MatchSet, Error> {
        links::validate_link_name(name)?;

        info!(
            "Searching {} for '{}'",
            self.config.home_dir.display(),
            name
        );
        let matches = scanner::find_files_named(
            &self.config.home_dir,
            name,
            &self.ignore_patterns,
            reporter,
        );
        if matches.is_empty() {
            return Err(Error::NoMatch {
                name: name.to_string(),
            });
        }
        debug!("{} candidates for '{}'", matches.len(), name);
        Ok(matches)
    }

    /// Links `target` into the destination directory under `name`.
    pub fn create(&self, name: &str, target: PathBuf) -> Result<LinkRequest, Error> {
        links::validate_link_name(name)?;
        let request = LinkRequest::new(name, target, &self.config.destination_dir);
        links::create_link(&request)?;
        Ok(request)
    }

    /// Deletes the link `name` from the destination directory.
    pub fn delete(&self, name: &str) -> Result<PathBuf, Error> {
        links::validate_link_name(name)?;
        let link_path = self.config.destination_dir.join(name);
        links::delete_link(&link_path)?;
        Ok(link_path)
    }

    /// Inventory of every link under home, in scan order.
    pub fn build_report(&self, reporter: &dyn ProgressReporter) -> Report {
        info!(
            "Collecting symbolic links under {}",
            self.config.home_dir.display()
        );
        let entries =
            scanner::find_symlinks(&self.config.home_dir, &self.ignore_patterns, reporter);
        Report::build(entries)
    }

    pub fn write_report(&self, report: &Report) -> Result<PathBuf, Error> {
        report.write_to(&self.config.report_path)?;
        Ok(self.config.report_path.clone())
    }
}
