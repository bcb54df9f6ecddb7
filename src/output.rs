//! CLI output formatting.
//!
//! The `check` command prints the compiled tree as an inventory: positional
//! index and label first, the link as secondary context after an arrow.
//!
//! ```text
//! 001 Расы (2 documents)
//!     001 Инопланетяне/
//!         001 Вуки → /content/Расы/Инопланетяне/Вуки
//!     002 Человек → /content/Расы/Человек
//!
//! 1 category, 2 documents
//! ```
//!
//! Format functions are pure and return lines; `print_*` wrappers write them
//! to stdout.

use crate::types::{NavNode, NavigationTree};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

fn format_nodes(nodes: &[NavNode], depth: usize, lines: &mut Vec<String>) {
    for (i, node) in nodes.iter().enumerate() {
        let prefix = format!("{}{}", indent(depth), format_index(i + 1));
        match node {
            NavNode::Folder {
                label, children, ..
            } => {
                lines.push(format!("{prefix} {label}/"));
                format_nodes(children, depth + 1, lines);
            }
            NavNode::Document { label, link } => {
                lines.push(format!("{prefix} {label} → {link}"));
            }
        }
    }
}

/// Format the navigation tree as an indented inventory with a summary line.
pub fn format_navigation(tree: &NavigationTree) -> Vec<String> {
    let mut lines = Vec::new();

    if tree.is_empty() {
        lines.push("No documents found".to_string());
        return lines;
    }

    for (i, category) in tree.categories.iter().enumerate() {
        let count = plural(category.document_count(), "document", "documents");
        lines.push(format!(
            "{} {} ({count})",
            format_index(i + 1),
            category.label()
        ));
        format_nodes(category.children(), 1, &mut lines);
    }

    lines.push(String::new());
    lines.push(format!(
        "{}, {}",
        plural(tree.categories.len(), "category", "categories"),
        plural(tree.document_count(), "document", "documents")
    ));
    lines
}

pub fn print_navigation(tree: &NavigationTree) {
    for line in format_navigation(tree) {
        println!("{line}");
    }
}
