use std::path::PathBuf;

/// What the scaffolder does with a single entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CreateDir,
    /// Create a new file holding the given contents (empty when no sample is registered).
    CreateFile(String),
    DirExists,
    FileExists,
    /// A top-level entry left alone because it is assumed to pre-exist.
    Skipped,
}

/// One entry of a [`Plan`].
#[derive(Debug, Clone)]
pub struct PlannedEntry {
    /// Slash-separated path relative to the project root, as printed in the log.
    pub relative: String,
    /// The absolute location the action applies to.
    pub path: PathBuf,
    pub action: Action,
    /// Whether the entry ends up as a directory.
    pub is_dir: bool,
}
impl PlannedEntry {
    pub fn verb(&self) -> &'static str {
        match self.action {
            Action::CreateDir => "Created directory",
            Action::CreateFile(_) => "Created file",
            Action::DirExists => "Directory exists",
            Action::FileExists => "File exists",
            Action::Skipped => "Skipped (pre-existing)",
        }
    }

    /// The log line for this entry once the plan has been applied.
    #[cfg(test)]
    pub(crate) fn describe(&self) -> String {
        format!("{}: {}", self.verb(), self.relative)
    }
}

/// Ordered list of scaffolding actions computed before anything is written to disk.
///
/// Entries appear in depth-first order, parents before their children, so applying them front to
/// back always creates a directory before anything inside it.
#[derive(Debug, Clone)]
pub struct Plan {
    pub root: PathBuf,
    pub entries: Vec<PlannedEntry>,
}
impl Plan {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            entries: Vec::new(),
        }
    }

    /// Entries the plan will create.
    pub fn creations(&self) -> impl Iterator<Item = &PlannedEntry> {
        self.entries.iter().filter(|entry| {
            matches!(entry.action, Action::CreateDir | Action::CreateFile(_))
        })
    }

    #[cfg(test)]
    pub(crate) fn get(&self, relative: &str) -> Option<&PlannedEntry> {
        self.entries.iter().find(|entry| entry.relative == relative)
    }
}
