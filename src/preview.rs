use crate::plan::{Action, Plan};
use colored::Colorize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::{self, Write};
use std::rc::Rc;

/// Represents a node in the tree (either file or directory).
#[derive(Debug)]
struct TreeNode {
    name: String,
    children: Vec<Rc<RefCell<TreeNode>>>,
    is_dir: bool,
    action: Option<Action>,
}
impl TreeNode {
    fn new(name: String, is_dir: bool, action: Option<Action>) -> Self {
        Self {
            name,
            children: Vec::new(),
            is_dir,
            action,
        }
    }
}

/// Build the directory tree from the plan entries, returning the root node.
fn build_tree(plan: &Plan) -> Rc<RefCell<TreeNode>> {
    let root_name = plan
        .root
        .file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| plan.root.display().to_string());

    let root = Rc::new(RefCell::new(TreeNode::new(root_name, true, None)));

    // map relative path to node, the root is the empty path
    let mut lookup: HashMap<&str, Rc<RefCell<TreeNode>>> = HashMap::new();
    lookup.insert("", Rc::clone(&root));

    for entry in &plan.entries {
        let (parent, name) = entry
            .relative
            .rsplit_once('/')
            .unwrap_or(("", entry.relative.as_str()));

        let Some(parent_node) = lookup.get(parent).map(Rc::clone) else {
            log::debug!("parent: {}, not found for path: {}", parent, entry.relative);
            continue;
        };

        let child = Rc::new(RefCell::new(TreeNode::new(
            name.to_string(),
            entry.is_dir,
            Some(entry.action.clone()),
        )));

        parent_node.borrow_mut().children.push(Rc::clone(&child));

        lookup.insert(entry.relative.as_str(), child);
    }

    root
}

fn label(node: &TreeNode) -> String {
    let name = if node.is_dir {
        node.name.blue()
    } else {
        node.name.green()
    };

    let status = match node.action {
        Some(Action::CreateDir) | Some(Action::CreateFile(_)) => "(new)".bold(),
        Some(Action::DirExists) | Some(Action::FileExists) => "(exists)".dimmed(),
        Some(Action::Skipped) => "(skipped)".dimmed(),
        None => return name.to_string(),
    };

    format!("{} {}", name, status)
}

fn write_tree(
    out: &mut String,
    node: &Rc<RefCell<TreeNode>>,
    prefix: &str,
    is_last: bool,
) -> fmt::Result {
    let node_borrow = node.borrow();

    let connector = if is_last {
        "└── ".yellow()
    } else {
        "├── ".yellow()
    };

    writeln!(out, "{}{}{}", prefix.yellow(), connector, label(&node_borrow))?;

    let child_prefix = if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    };

    let len = node_borrow.children.len();
    for (i, child) in node_borrow.children.iter().enumerate() {
        write_tree(out, child, &child_prefix, i == len - 1)?;
    }

    Ok(())
}

/// Renders the plan as an ASCII tree, each entry tagged with what would happen to it.
pub fn render_tree(plan: &Plan) -> String {
    let mut out = String::new();

    write_tree(&mut out, &build_tree(plan), "", true).expect("writing to a String cannot fail");

    out
}

pub fn preview_as_tree(plan: &Plan) {
    println!(
        "Legend: {} = (directory), {} = (file)",
        "blue".blue(),
        "green".green()
    );

    let fancy_prompt = format!(
        "{} {}\n",
        "┌─".bold().bright_blue(),
        "Preview".bold().bright_blue(),
    );

    println!("{}", fancy_prompt);

    print!("{}", render_tree(plan));

    let fancy_prompt = format!(
        "\n{} {} {}\n",
        "└─".bold().bright_blue(),
        plan.creations().count().to_string().bright_green(),
        "entries would be created".bright_green()
    );

    println!("{}", fancy_prompt);
}
