//! Top-level assembly of the navigation tree.
//!
//! Categories keep their declared order: that order is an editorial choice,
//! unlike the alphabetic order inside a category. Disabled categories and
//! categories without documents are left out.

use crate::config::NavConfig;
use crate::scan::{ScanError, Scanner};
use crate::types::{HomeLink, NavNode, NavigationTree};
use std::path::Path;

/// Scan every enabled category under `content_root`.
///
/// The config is validated first, so a malformed category list fails before
/// any directory is read.
pub fn generate_navigation_tree(
    config: &NavConfig,
    content_root: &Path,
) -> Result<NavigationTree, ScanError> {
    config.validate()?;
    let scanner = Scanner::new(config)?;

    let mut categories = Vec::new();
    for category in &config.categories {
        if !category.enabled {
            tracing::debug!(category = %category.name, "Category disabled");
            continue;
        }
        let children = scanner.scan_category(&category.name, content_root)?;
        if !children.is_empty() {
            categories.push(NavNode::folder(&category.name, category.collapsed, children));
        }
    }

    let tree = NavigationTree { categories };
    tracing::info!(
        categories = tree.categories.len(),
        documents = tree.document_count(),
        "Navigation tree built"
    );
    Ok(tree)
}

/// The sidebar for the framework: the tree, or the home link if it is empty.
pub fn build_sidebar(config: &NavConfig, content_root: &Path) -> Result<Vec<NavNode>, ScanError> {
    let tree = generate_navigation_tree(config, content_root)?;
    if tree.is_empty() {
        tracing::warn!("No category produced any documents, falling back to the home link");
    }
    Ok(tree.into_sidebar(&home_link(config)))
}

pub fn home_link(config: &NavConfig) -> HomeLink {
    HomeLink {
        label: config.home_label.clone(),
        link: config.home_link.clone(),
    }
}
