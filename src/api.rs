use crate::{
    config::{self, Config},
    scaffold,
};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum FabrikaError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Scaffold(#[from] scaffold::ScaffoldError),
}

/// Resolves the configuration from raw CLI input and scaffolds the project.
///
/// # Errors
///
/// Returns a [`FabrikaError`] if:
///
/// - The project name is missing or blank (nothing is written in that case).
/// - A directory or file cannot be created or written to.
/// - The dependency installer cannot be spawned or exits non-zero.
pub fn create_project(
    project_name: Option<&str>,
    dirname: Option<&str>,
    factorio_version: Option<&str>,
) -> Result<(), FabrikaError> {
    let config = Config::resolve(project_name, dirname, factorio_version)?;

    log::debug!(
        "scaffolding '{}' into {}",
        config.project_name,
        config.dirname.display()
    );

    scaffold::generate(&config)?;

    Ok(())
}
