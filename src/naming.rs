//! Entry classification and link construction.
//!
//! Every directory entry the scanner sees is classified by name alone:
//!
//! - `.git/`, `.DS_Store` → hidden (always skipped)
//! - `node_modules/` → ignored (configurable, any depth, files too)
//! - `_draft.md` → draft (files only; `_shared/` directories are still walked)
//! - `Человек.md` → document labeled "Человек"
//! - `notes.txt` → not content
//!
//! Links are built from name components rather than from `Path` values, so
//! the separator is always `/` whatever the host uses.

use crate::config::NavConfig;

/// Name-based rules, borrowed from the active [`NavConfig`].
#[derive(Debug, Clone, Copy)]
pub struct NamingRules<'a> {
    pub document_extension: &'a str,
    pub ignored_names: &'a [String],
    pub draft_prefix: &'a str,
    pub link_prefix: &'a str,
}

impl<'a> NamingRules<'a> {
    pub fn from_config(config: &'a NavConfig) -> Self {
        Self {
            document_extension: &config.document_extension,
            ignored_names: &config.ignored_names,
            draft_prefix: &config.draft_prefix,
            link_prefix: &config.link_prefix,
        }
    }

    /// Hidden and ignored entries are infrastructure, never content.
    pub fn is_excluded(&self, name: &str) -> bool {
        name.starts_with('.') || self.ignored_names.iter().any(|n| n == name)
    }

    /// Label of a file entry if it is a listed document.
    ///
    /// `Вуки.md` → `Some("Вуки")`; `_draft.md`, `notes.txt` and a bare `.md`
    /// → `None`.
    pub fn document_label<'n>(&self, file_name: &'n str) -> Option<&'n str> {
        if !self.draft_prefix.is_empty() && file_name.starts_with(self.draft_prefix) {
            return None;
        }
        let stem = file_name
            .strip_suffix(self.document_extension)?
            .strip_suffix('.')?;
        if stem.is_empty() { None } else { Some(stem) }
    }

    /// Build the link of a document.
    ///
    /// `parents` are the directory names between the category directory and
    /// the document; `label` is the document name without extension.
    pub fn document_link(&self, category: &str, parents: &[String], label: &str) -> String {
        let mut link = format!("{}/{}", self.link_prefix, category);
        for parent in parents {
            link.push('/');
            link.push_str(parent);
        }
        link.push('/');
        link.push_str(label);
        link.replace('\\', "/")
    }
}
