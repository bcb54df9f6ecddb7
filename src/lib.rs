//! # wiki-nav
//!
//! Compiles a documentation site's content directory into its sidebar
//! navigation. The filesystem is the data source: each configured category is a
//! directory under the content root, subdirectories become folders, and
//! markdown files become documents.
//!
//! ```text
//! content/Расы/Человек.md              →  Расы › Человек
//! content/Расы/Инопланетяне/Вуки.md    →  Расы › Инопланетяне › Вуки
//! ```
//!
//! The result is plain data (see [`types::NavNode`]) for the site framework to
//! render; this crate never touches document contents.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `wiki-nav.toml` loading with stock defaults, validation |
//! | [`scan`] | Walks one category directory into a sorted subtree |
//! | [`navigation`] | Assembles categories in declared order, home-link fallback |
//! | [`naming`] | Which entries are content, labels, link construction |
//! | [`collate`] | Locale-aware sibling ordering |
//! | [`types`] | Navigation nodes and tree, serialized for the framework |
//! | [`output`] | CLI inventory display for `check` |
//! | [`render`] | HTML sidebar preview fragment |
//!
//! # Design Decisions
//!
//! ## Folders Are Pruned, Not Hidden
//!
//! A directory that holds nothing but drafts, images or ignored entries has no
//! node at all. Folder nodes therefore always have children, and a category
//! whose directory is missing or empty simply does not show up.
//!
//! ## Collated Labels, Curated Categories
//!
//! Inside a category, folders come first and labels follow dictionary order for
//! the configured locale (`ru` by default). Categories themselves keep the order
//! they are declared in.
//!
//! ## Explicit Configuration
//!
//! The category list and rules are loaded once at the entry point into an
//! immutable [`config::NavConfig`] and passed down; there is no global state.

pub mod collate;
pub mod config;
pub mod naming;
pub mod navigation;
pub mod output;
pub mod render;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
