use indexmap::IndexMap;
use std::fmt;

/// The kind of filesystem entry a leaf expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    File,
    Dir,
}
impl FileKind {
    fn as_str(&self) -> &str {
        match self {
            Self::File => "file",
            Self::Dir => "directory",
        }
    }
}
impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A node of the expected project layout.
///
/// A [`SpecNode::Leaf`] expects a single file or directory (whose contents are not inspected),
/// a [`SpecNode::Branch`] expects a directory holding the named children. Children keep their
/// insertion order, which is also the order both the validator and the scaffolder visit them in.
#[derive(Debug, Clone, PartialEq)]
pub enum SpecNode {
    Leaf(FileKind),
    Branch(IndexMap<String, SpecNode>),
}
impl SpecNode {
    pub const FILE: SpecNode = SpecNode::Leaf(FileKind::File);
    pub const DIR: SpecNode = SpecNode::Leaf(FileKind::Dir);

    /// Builds a branch from `(name, node)` pairs, keeping their order.
    ///
    /// # Example
    ///
    /// ```
    /// use skelly::structure::SpecNode;
    ///
    /// let spec = SpecNode::branch([
    ///     ("src", SpecNode::branch([("main.js", SpecNode::FILE)])),
    ///     ("dist", SpecNode::DIR),
    /// ]);
    ///
    /// assert_eq!(spec.count_entries(), 3);
    /// ```
    pub fn branch<I, S>(children: I) -> Self
    where
        I: IntoIterator<Item = (S, SpecNode)>,
        S: Into<String>,
    {
        SpecNode::Branch(
            children
                .into_iter()
                .map(|(name, node)| (name.into(), node))
                .collect(),
        )
    }

    /// The filesystem kind this node must exist as. Branches are always directories.
    pub fn kind(&self) -> FileKind {
        match self {
            SpecNode::Leaf(kind) => *kind,
            SpecNode::Branch(_) => FileKind::Dir,
        }
    }

    /// Names of the direct children, in visiting order. Leaves have none.
    pub fn child_names(&self) -> Vec<&str> {
        match self {
            SpecNode::Leaf(_) => vec![],
            SpecNode::Branch(children) => children.keys().map(String::as_str).collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&SpecNode> {
        match self {
            SpecNode::Leaf(_) => None,
            SpecNode::Branch(children) => children.get(name),
        }
    }

    /// Counts every entry below this node, leaves and branches alike.
    pub fn count_entries(&self) -> usize {
        match self {
            SpecNode::Leaf(_) => 0,
            SpecNode::Branch(children) => children
                .values()
                .map(|child| 1 + child.count_entries())
                .sum(),
        }
    }

    /// Collects the posix-style relative paths of every file leaf below this node.
    pub fn file_paths(&self) -> Vec<String> {
        let mut paths = vec![];
        collect_file_paths(self, "", &mut paths);
        paths
    }
}

fn collect_file_paths(node: &SpecNode, prefix: &str, paths: &mut Vec<String>) {
    let SpecNode::Branch(children) = node else {
        return;
    };

    for (name, child) in children {
        let relative = join_relative(prefix, name);

        match child {
            SpecNode::Leaf(FileKind::File) => paths.push(relative),
            SpecNode::Leaf(FileKind::Dir) => {}
            SpecNode::Branch(_) => collect_file_paths(child, &relative, paths),
        }
    }
}

/// Joins a child name onto a slash-separated relative path. The root is the empty string.
pub fn join_relative(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", prefix, name)
    }
}
