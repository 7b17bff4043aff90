use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Sentinel meaning "whatever version is current", both for the version flag
/// default and for the pinned dev-dependency constraints.
pub const LATEST: &str = "latest";

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("invalid project name: {given:?}")]
    #[diagnostic(
        code(fabrika::config::invalid_project_name),
        help("Pass a non-empty project name, e.g. `fabrika destroy-all-biters`")
    )]
    InvalidProjectName { given: Option<String> },

    #[error("unable to determine the current working directory")]
    #[diagnostic(code(fabrika::config::current_dir))]
    CurrentDir(#[source] std::io::Error),
}

/// Resolved invocation settings. Constructed once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute directory the project is created in.
    pub dirname: PathBuf,
    /// Used both as a filesystem-safe identifier and as display text.
    pub project_name: String,
    /// Factorio version the mod targets, or [`LATEST`].
    pub factorio_version: String,
}
impl Config {
    /// Maps raw CLI input to a [`Config`].
    ///
    /// `dirname` falls back to `<cwd>/<project_name>` and `factorio_version`
    /// falls back to [`LATEST`]. Nothing on disk is touched; only the current
    /// working directory is read, and only when the dirname default applies.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidProjectName`] when the project name is
    /// missing or blank, and [`ConfigError::CurrentDir`] when the working
    /// directory cannot be read while resolving the dirname default.
    pub fn resolve(
        project_name: Option<&str>,
        dirname: Option<&str>,
        factorio_version: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let project_name = match project_name {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            other => {
                return Err(ConfigError::InvalidProjectName {
                    given: other.map(str::to_string),
                })
            }
        };

        let dirname = match dirname {
            Some(dir) => PathBuf::from(dir),
            None => std::env::current_dir()
                .map_err(ConfigError::CurrentDir)?
                .join(&project_name),
        };

        let factorio_version = factorio_version.unwrap_or(LATEST).to_string();

        Ok(Config {
            dirname,
            project_name,
            factorio_version,
        })
    }
}
