use crate::{
    errors::{FileOperation, IoError, ScaffoldError},
    plan::{Action, Plan, PlannedEntry},
    structure::{join_relative, FileKind, SpecNode},
};
use colored::Colorize;
use indexmap::{IndexMap, IndexSet};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

/// Walks `spec` against `root` and records what has to be created, without writing anything.
///
/// Top-level names in `skip` are recorded as [`Action::Skipped`] and nothing below them is looked
/// at. New files get the entry of `samples` keyed by their slash-separated relative path, or
/// nothing when there is no such entry.
pub fn plan(
    root: &Path,
    spec: &SpecNode,
    skip: &IndexSet<String>,
    samples: &IndexMap<String, String>,
) -> Plan {
    let mut plan = Plan::new(root.to_path_buf());

    plan_children(&mut plan, root, spec, "", skip, samples);

    plan
}

fn plan_children(
    plan: &mut Plan,
    dir: &Path,
    spec: &SpecNode,
    relative_base: &str,
    skip: &IndexSet<String>,
    samples: &IndexMap<String, String>,
) {
    let SpecNode::Branch(children) = spec else {
        return;
    };

    for (name, child) in children {
        let relative = join_relative(relative_base, name);
        let path = dir.join(name);

        if relative_base.is_empty() && skip.contains(name) {
            push(plan, relative, path, Action::Skipped, child.kind());
            continue;
        }

        let exists = path.exists();

        let action = match (child.kind(), exists) {
            (FileKind::File, true) => Action::FileExists,
            (FileKind::File, false) => {
                Action::CreateFile(samples.get(&relative).cloned().unwrap_or_default())
            }
            (FileKind::Dir, true) => Action::DirExists,
            (FileKind::Dir, false) => Action::CreateDir,
        };

        push(plan, relative.clone(), path.clone(), action, child.kind());

        if let SpecNode::Branch(_) = child {
            plan_children(plan, &path, child, &relative, skip, samples);
        }
    }
}

fn push(plan: &mut Plan, relative: String, path: PathBuf, action: Action, kind: FileKind) {
    log::debug!("planned {:?} for {}", action, relative);

    plan.entries.push(PlannedEntry {
        relative,
        path,
        action,
        is_dir: kind == FileKind::Dir,
    });
}

/// Applies a [`Plan`] front to back, printing one line per entry.
///
/// # Errors
///
/// Returns a [`ScaffoldError`] on the first directory or file that cannot be created. Nothing is
/// retried and entries created before the failure are kept.
pub fn apply(plan: &Plan) -> Result<(), ScaffoldError> {
    for entry in &plan.entries {
        match &entry.action {
            Action::CreateDir => create_directory(&entry.path)?,
            Action::CreateFile(contents) => write_file(&entry.path, contents)?,
            Action::DirExists | Action::FileExists | Action::Skipped => {}
        }

        let verb = match entry.action {
            Action::CreateDir | Action::CreateFile(_) => entry.verb().green(),
            Action::Skipped => entry.verb().blue(),
            Action::DirExists | Action::FileExists => entry.verb().yellow(),
        };

        println!("{}: {}", verb, entry.relative);
    }

    Ok(())
}

/// Plans and applies in one go, returning the applied plan.
///
/// # Errors
///
/// See [`apply`].
pub fn scaffold(
    root: &Path,
    spec: &SpecNode,
    skip: &IndexSet<String>,
    samples: &IndexMap<String, String>,
) -> Result<Plan, ScaffoldError> {
    let plan = plan(root, spec, skip, samples);

    apply(&plan)?;

    Ok(plan)
}

/// Creates the directory and any missing parents.
fn create_directory(path: &Path) -> Result<(), ScaffoldError> {
    fs::create_dir_all(path)
        .map_err(|error| IoError::new(FileOperation::Mkdir, path.into(), error))?;

    Ok(())
}

/// Creates a new file with the given contents. Fails instead of truncating if the file showed up
/// after planning.
fn write_file(path: &Path, contents: &str) -> Result<(), ScaffoldError> {
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|error| IoError::new(FileOperation::Create, path.into(), error))?;

    file.write_all(contents.as_bytes())
        .map_err(|error| IoError::new(FileOperation::Write, path.into(), error))?;

    Ok(())
}
