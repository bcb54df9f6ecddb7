//! Navigation types handed to the site framework.
//!
//! These serialize to the sidebar shape the framework reads:
//!
//! ```json
//! [
//!   {
//!     "label": "Расы",
//!     "collapsed": false,
//!     "children": [
//!       { "label": "Инопланетяне", "collapsed": true, "children": [
//!         { "label": "Вуки", "link": "/content/Расы/Инопланетяне/Вуки" }
//!       ] },
//!       { "label": "Человек", "link": "/content/Расы/Человек" }
//!     ]
//!   }
//! ]
//! ```

use serde::{Deserialize, Serialize};

/// One entry of the navigation tree.
///
/// A node is either a folder (children, no link) or a document (link, no
/// children). Folders are only built with at least one child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavNode {
    Folder {
        label: String,
        collapsed: bool,
        children: Vec<NavNode>,
    },
    Document {
        label: String,
        link: String,
    },
}

impl NavNode {
    pub fn folder(label: impl Into<String>, collapsed: bool, children: Vec<NavNode>) -> Self {
        NavNode::Folder {
            label: label.into(),
            collapsed,
            children,
        }
    }

    pub fn document(label: impl Into<String>, link: impl Into<String>) -> Self {
        NavNode::Document {
            label: label.into(),
            link: link.into(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            NavNode::Folder { label, .. } | NavNode::Document { label, .. } => label,
        }
    }

    pub fn link(&self) -> Option<&str> {
        match self {
            NavNode::Folder { .. } => None,
            NavNode::Document { link, .. } => Some(link),
        }
    }

    /// Children of a folder; empty for documents.
    pub fn children(&self) -> &[NavNode] {
        match self {
            NavNode::Folder { children, .. } => children,
            NavNode::Document { .. } => &[],
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, NavNode::Folder { .. })
    }

    /// Number of documents in this subtree.
    pub fn document_count(&self) -> usize {
        match self {
            NavNode::Folder { children, .. } => children.iter().map(NavNode::document_count).sum(),
            NavNode::Document { .. } => 1,
        }
    }

    /// Number of folders in this subtree, this node included.
    pub fn folder_count(&self) -> usize {
        match self {
            NavNode::Folder { children, .. } => {
                1 + children.iter().map(NavNode::folder_count).sum::<usize>()
            }
            NavNode::Document { .. } => 0,
        }
    }
}

/// The placeholder entry shown when no category has content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeLink {
    pub label: String,
    pub link: String,
}

/// Category-level nodes in declared order.
///
/// Built fresh for every build and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavigationTree {
    pub categories: Vec<NavNode>,
}

impl NavigationTree {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn document_count(&self) -> usize {
        self.categories.iter().map(NavNode::document_count).sum()
    }

    /// The sidebar the framework should render.
    ///
    /// An empty tree becomes a single home link rather than an empty sidebar.
    pub fn into_sidebar(self, home: &HomeLink) -> Vec<NavNode> {
        if self.categories.is_empty() {
            vec![NavNode::document(&home.label, &home.link)]
        } else {
            self.categories
        }
    }
}
