pub mod cli;
pub mod errors;
pub mod layout;
pub mod plan;
pub mod preview;
pub mod scaffold;
pub mod structure;
pub mod validate;

pub use errors::SkellyError;
pub use plan::{Action, Plan, PlannedEntry};
pub use scaffold::scaffold;
pub use structure::{FileKind, SpecNode};
pub use validate::{validate, Mismatch, ValidationResult};

// Public API
pub mod actions {
    use crate::{
        errors::{FileOperation, IoError, SkellyError},
        layout::{SAMPLE_CONTENTS, SCAFFOLD_SPEC, SKIP_SET, VALIDATION_SPEC},
        preview::preview_as_tree,
        scaffold, validate,
    };
    use colored::Colorize;
    use std::{
        io,
        path::{Path, PathBuf},
    };

    /// The repository root for the running executable, see [`repo_root_for`].
    ///
    /// # Errors
    ///
    /// Returns an [`IoError`] if the running executable cannot be located.
    pub fn default_repo_root() -> Result<PathBuf, SkellyError> {
        let exe = std::env::current_exe().map_err(|error| {
            IoError::new(FileOperation::ResolveExecutable, PathBuf::new(), error)
        })?;

        repo_root_for(&exe)
    }

    /// The repository root for an executable installed at `<root>/<dir>/<binary>`.
    ///
    /// # Errors
    ///
    /// Returns an [`IoError`] if `exe` has no grandparent directory.
    pub fn repo_root_for(exe: &Path) -> Result<PathBuf, SkellyError> {
        let root = exe
            .parent()
            .and_then(Path::parent)
            .filter(|root| !root.as_os_str().is_empty())
            .ok_or_else(|| {
                IoError::new(
                    FileOperation::ResolveExecutable,
                    exe.to_path_buf(),
                    io::Error::new(
                        io::ErrorKind::NotFound,
                        "executable is not installed below a repository directory",
                    ),
                )
            })?;

        log::debug!("repository root inferred from {}: {}", exe.display(), root.display());

        Ok(root.to_path_buf())
    }

    /// The directory `setup-project` scaffolds into.
    ///
    /// # Errors
    ///
    /// Returns an [`IoError`] if the working directory is gone or unreadable.
    pub fn working_dir() -> Result<PathBuf, SkellyError> {
        let dir = std::env::current_dir().map_err(|error| {
            IoError::new(FileOperation::ResolveWorkingDir, PathBuf::from("."), error)
        })?;

        Ok(dir)
    }

    /// Validates `root` against the full project layout, printing one line per mismatch to stderr
    /// and a summary to stdout. Returns whether the tree matched.
    pub fn validate_structure(root: &Path) -> bool {
        log::debug!("validating project structure in: {}", root.display());

        let result = validate(root, &VALIDATION_SPEC);

        // plain text so redirected diagnostics keep their exact form
        for message in result.messages() {
            eprintln!("{}", message);
        }

        if result.all_passed() {
            println!("{}", "Project structure validated successfully.".green());
        } else {
            println!("{}", "Project structure validation failed.".red());
        }

        result.all_passed()
    }

    /// Scaffolds the project layout into `root`. With `dry_run` set the plan is only previewed.
    ///
    /// # Errors
    ///
    /// Returns a [`SkellyError`] if a directory or file cannot be created.
    pub fn setup_project(root: &Path, dry_run: bool) -> Result<(), SkellyError> {
        println!("Setting up project structure in: {}", root.display());

        let plan = scaffold::plan(root, &SCAFFOLD_SPEC, &SKIP_SET, &SAMPLE_CONTENTS);

        if dry_run {
            preview_as_tree(&plan);
            return Ok(());
        }

        scaffold::apply(&plan)?;

        println!("{}", "Project setup complete.".green());

        Ok(())
    }

}
