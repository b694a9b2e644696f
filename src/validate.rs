use crate::structure::{FileKind, SpecNode};
use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

/// A path that is absent or exists as the wrong kind of entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub path: PathBuf,
    pub expected: FileKind,
}
impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Missing {}: {}", self.expected, self.path.display())
    }
}

/// Outcome of a validation run, mismatches in the order they were found.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub mismatches: Vec<Mismatch>,
}
impl ValidationResult {
    pub fn all_passed(&self) -> bool {
        self.mismatches.is_empty()
    }

    pub fn messages(&self) -> Vec<String> {
        self.mismatches.iter().map(ToString::to_string).collect()
    }
}

/// Checks `root` against `spec` without touching the filesystem.
///
/// Every mismatch is recorded and the walk carries on with the remaining siblings, so a single
/// run reports the whole difference between the tree and the layout. Directories that are missing
/// are reported once; their children are not reported on top of that.
///
/// Symlinks are not followed: a link to a file does not satisfy a file leaf.
pub fn validate(root: &Path, spec: &SpecNode) -> ValidationResult {
    let mut result = ValidationResult::default();

    match spec {
        SpecNode::Leaf(kind) => {
            check_leaf(root, *kind, &mut result);
        }
        SpecNode::Branch(_) => check_children(root, spec, &mut result),
    }

    result
}

fn check_children(dir: &Path, spec: &SpecNode, result: &mut ValidationResult) {
    let SpecNode::Branch(children) = spec else {
        return;
    };

    for (name, child) in children {
        let child_path = dir.join(name);

        match child {
            SpecNode::Leaf(kind) => {
                check_leaf(&child_path, *kind, result);
            }
            SpecNode::Branch(_) => {
                if check_leaf(&child_path, FileKind::Dir, result) {
                    check_children(&child_path, child, result);
                }
            }
        }
    }
}

fn check_leaf(path: &Path, expected: FileKind, result: &mut ValidationResult) -> bool {
    let found = is_kind(path, expected);

    log::debug!("checking {} {}: {}", expected, path.display(), found);

    if !found {
        result.mismatches.push(Mismatch {
            path: path.to_path_buf(),
            expected,
        });
    }

    found
}

fn is_kind(path: &Path, expected: FileKind) -> bool {
    match fs::symlink_metadata(path) {
        Ok(metadata) => match expected {
            FileKind::File => metadata.is_file(),
            FileKind::Dir => metadata.is_dir(),
        },
        Err(_) => false,
    }
}
