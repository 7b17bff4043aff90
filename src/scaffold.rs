use crate::{
    config::Config,
    errors::{FileOperation, IoError},
    installer::{self, InstallerError},
    manifest::{self, ManifestError},
    preview::preview_as_tree,
    vfs::VirtualFS,
};
use colored::Colorize;
use std::{fs, path::Path, thread};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ScaffoldError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Manifest(#[from] ManifestError),

    #[error("I/O error while scaffolding the project")]
    #[diagnostic(code(fabrika::scaffold::io))]
    Io(#[from] IoError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Installer(#[from] InstallerError),
}

/// Scaffolds a project from the given [`Config`] and installs its development
/// dependencies. The sole effectful operation of the crate.
///
/// Already-written files are left on disk when a later step fails; a one-shot
/// generator has nothing worth rolling back.
///
/// # Errors
///
/// Returns a [`ScaffoldError`] if:
///
/// - The target directory or one of its subdirectories cannot be created.
/// - A file cannot be written.
/// - The installer cannot be spawned or exits non-zero.
pub fn generate(config: &Config) -> Result<(), ScaffoldError> {
    create_directory(&config.dirname)?;

    let vfs = manifest::build_manifest(config)?;

    preview_as_tree(&vfs, &config.dirname);

    apply_vfs(&vfs, &config.dirname)?;

    installer::install_dev_dependencies(&config.dirname)?;

    println!(
        "\n{} {} is ready, now get to coding:",
        "success".green().bold(),
        config.project_name
    );
    println!("  - cd \"{}\"", config.dirname.display());
    println!("  - yarn build");

    Ok(())
}

/// Applies directory and file creation operations from a [`VirtualFS`].
///
/// Directories are created first, in staging order, so every file's parent
/// exists before the writes start. The writes themselves are independent and
/// fan out across scoped threads; all of them are joined before returning and
/// the first failure wins.
pub(crate) fn apply_vfs(vfs: &VirtualFS, destination_root: &Path) -> Result<(), ScaffoldError> {
    for entry in vfs.directories() {
        create_directory(&destination_root.join(&entry.path))?;
    }

    thread::scope(|scope| {
        let handles: Vec<_> = vfs
            .files()
            .map(|entry| {
                let path = destination_root.join(&entry.path);
                let contents = entry.content.as_deref().unwrap_or_default();

                scope.spawn(move || write_file(&path, contents))
            })
            .collect();

        // join all before reporting, siblings are not cancelled
        let mut outcome = Ok(());
        for handle in handles {
            match handle.join() {
                Ok(Ok(())) => {}
                Ok(Err(error)) => {
                    if outcome.is_ok() {
                        outcome = Err(error);
                    }
                }
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }

        outcome
    })?;

    Ok(())
}

/// Creates all directories in the specified path if they do not exist.
/// Idempotent: a pre-existing directory is not an error.
fn create_directory(path: &Path) -> Result<(), IoError> {
    fs::create_dir_all(path).map_err(|error| IoError::new(FileOperation::Mkdir, path.into(), error))
}

/// Writes a file with the provided contents to the specified path, printing a
/// line to the console for each created file.
fn write_file(path: &Path, contents: &str) -> Result<(), IoError> {
    fs::write(path, contents)
        .map_err(|error| IoError::new(FileOperation::Write, path.into(), error))?;

    let msg = format!("{} {}", "create".green(), path.display());

    println!("{}", &msg);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LATEST;

    fn config_for(dirname: &Path) -> Config {
        Config {
            dirname: dirname.to_path_buf(),
            project_name: "x".to_string(),
            factorio_version: LATEST.to_string(),
        }
    }

    #[test]
    fn apply_writes_every_staged_entry() {
        let scratch = tempfile::tempdir().unwrap();
        let config = config_for(scratch.path());
        let vfs = manifest::build_manifest(&config).unwrap();

        apply_vfs(&vfs, scratch.path()).unwrap();

        for entry in &vfs.entries {
            let path = scratch.path().join(&entry.path);
            if entry.is_file {
                assert!(path.is_file(), "{} missing", path.display());
            } else {
                assert!(path.is_dir(), "{} missing", path.display());
            }
        }

        let info = fs::read_to_string(scratch.path().join("src/info.json")).unwrap();
        assert!(info.contains(r#""name": "x""#));
        assert!(info.contains(r#""factorio_version": "1.1.77""#));

        let readme = fs::read_to_string(scratch.path().join("readme.md")).unwrap();
        assert!(readme.starts_with("# x"));
    }

    #[test]
    fn apply_is_idempotent_over_pre_existing_directories() {
        let scratch = tempfile::tempdir().unwrap();
        let config = config_for(scratch.path());
        let vfs = manifest::build_manifest(&config).unwrap();

        apply_vfs(&vfs, scratch.path()).unwrap();
        apply_vfs(&vfs, scratch.path()).unwrap();
    }

    #[test]
    fn regeneration_is_byte_identical() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();

        for scratch in [&first, &second] {
            let config = config_for(scratch.path());
            let vfs = manifest::build_manifest(&config).unwrap();
            apply_vfs(&vfs, scratch.path()).unwrap();
        }

        let config = config_for(first.path());
        for entry in manifest::build_manifest(&config).unwrap().files() {
            let left = fs::read(first.path().join(&entry.path)).unwrap();
            let right = fs::read(second.path().join(&entry.path)).unwrap();
            assert_eq!(left, right, "{} differs", entry.path.display());
        }
    }

    #[test]
    fn write_failure_is_surfaced_and_blocks_the_installer() {
        let scratch = tempfile::tempdir().unwrap();
        let config = config_for(scratch.path());
        let vfs = manifest::build_manifest(&config).unwrap();

        // a directory squatting where a file belongs makes that write fail
        fs::create_dir_all(scratch.path().join("src/info.json")).unwrap();

        let result = apply_vfs(&vfs, scratch.path());

        assert!(matches!(
            result,
            Err(ScaffoldError::Io(IoError {
                operation: FileOperation::Write,
                ..
            }))
        ));

        // sibling writes ran to completion instead of being cancelled
        assert!(scratch.path().join("readme.md").is_file());
    }

    #[test]
    fn generate_fails_before_the_installer_when_the_target_is_a_file() {
        let scratch = tempfile::tempdir().unwrap();
        let collision = scratch.path().join("x");
        fs::write(&collision, "not a directory").unwrap();

        let result = generate(&config_for(&collision));

        assert!(matches!(result, Err(ScaffoldError::Io(_))));
    }
}
