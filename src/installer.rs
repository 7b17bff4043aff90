use crate::manifest::DEV_DEPENDENCIES;
use miette::Diagnostic;
use std::{
    path::Path,
    process::{Command, Stdio},
};
use thiserror::Error;

/// The package manager the generated project is wired up for.
pub const PACKAGE_MANAGER: &str = "yarn";

#[derive(Debug, Error, Diagnostic)]
pub enum InstallerError {
    #[error("unable to spawn `{program}`")]
    #[diagnostic(
        code(fabrika::installer::spawn),
        help("Make sure yarn is installed and on your PATH.")
    )]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program} add --dev` exited with {status}")]
    #[diagnostic(
        code(fabrika::installer::exit),
        help("Inspect the installer output above for the underlying failure.")
    )]
    Failed {
        program: String,
        status: std::process::ExitStatus,
    },
}

/// Arguments requesting installation of every entry in [`DEV_DEPENDENCIES`]
/// as a development dependency.
fn install_args() -> Vec<String> {
    let mut args = vec!["add".to_string(), "--dev".to_string()];

    args.extend(
        DEV_DEPENDENCIES
            .iter()
            .map(|(name, version)| format!("{name}@{version}")),
    );

    args
}

/// Installs the fixed development dependency set into `dirname`.
///
/// The child inherits this process's standard streams so the user sees live
/// installer output, and the call blocks until the installer exits. No
/// timeout is applied.
///
/// # Errors
///
/// Returns [`InstallerError::Spawn`] when the executable cannot be started
/// and [`InstallerError::Failed`] on a non-zero exit.
pub fn install_dev_dependencies(dirname: &Path) -> Result<(), InstallerError> {
    run(PACKAGE_MANAGER, dirname)
}

fn run(program: &str, dirname: &Path) -> Result<(), InstallerError> {
    log::debug!("running `{} add --dev` in {}", program, dirname.display());

    let status = Command::new(program)
        .args(install_args())
        .current_dir(dirname)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|error| InstallerError::Spawn {
            program: program.to_string(),
            source: error,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(InstallerError::Failed {
            program: program.to_string(),
            status,
        })
    }
}
