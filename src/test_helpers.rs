//! Shared test utilities for the wiki-nav test suite.
//!
//! Provides a throwaway content tree builder and lookup helpers for
//! navigation nodes.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let content = ContentTree::new();
//! content.file("Расы/Человек.md").file("Расы/Инопланетяне/Вуки.md");
//!
//! let nodes = scan_category("Расы", content.root()).unwrap();
//! assert_eq!(labels(&nodes), vec!["Инопланетяне", "Человек"]);
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::types::NavNode;

// =========================================================================
// Content tree setup
// =========================================================================

/// A content root in a temp directory, removed on drop.
pub struct ContentTree {
    dir: TempDir,
}

impl ContentTree {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Create a file (and its parent directories) at a `/`-separated path.
    pub fn file(&self, rel: &str) -> &Self {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        let title = path.file_stem().unwrap().to_string_lossy().to_string();
        fs::write(&path, format!("# {title}\n")).unwrap();
        self
    }

    /// Create an empty directory at a `/`-separated path.
    pub fn dir(&self, rel: &str) -> &Self {
        fs::create_dir_all(self.root().join(rel)).unwrap();
        self
    }
}

// =========================================================================
// Node lookups — panics with a clear message on miss
// =========================================================================

/// Labels of sibling nodes in order.
pub fn labels(nodes: &[NavNode]) -> Vec<&str> {
    nodes.iter().map(NavNode::label).collect()
}

/// Find a sibling by label. Panics if not found.
pub fn find_node<'a>(nodes: &'a [NavNode], label: &str) -> &'a NavNode {
    nodes
        .iter()
        .find(|n| n.label() == label)
        .unwrap_or_else(|| panic!("node '{label}' not found. Available: {:?}", labels(nodes)))
}

/// Every label in the tree, depth first.
pub fn all_labels(nodes: &[NavNode]) -> Vec<String> {
    let mut out = Vec::new();
    for node in nodes {
        out.push(node.label().to_string());
        out.extend(all_labels(node.children()));
    }
    out
}

/// Every document link in the tree, depth first.
pub fn all_links(nodes: &[NavNode]) -> Vec<String> {
    let mut out = Vec::new();
    for node in nodes {
        if let Some(link) = node.link() {
            out.push(link.to_string());
        }
        out.extend(all_links(node.children()));
    }
    out
}
