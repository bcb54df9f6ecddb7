//! Category directory scanning.
//!
//! Walks one category directory and compiles it into a sorted navigation
//! subtree.
//!
//! ## Directory Structure
//!
//! ```text
//! content/                         # Content root
//! ├── Расы/                        # Category (declared in config)
//! │   ├── Человек.md               # Document → /content/Расы/Человек
//! │   ├── _draft.md                # Draft, not listed
//! │   ├── Инопланетяне/            # Folder
//! │   │   └── Вуки.md              # Document → /content/Расы/Инопланетяне/Вуки
//! │   ├── Заметки/                 # Folder with only drafts: pruned
//! │   │   └── _todo.md
//! │   ├── node_modules/            # Ignored at any depth
//! │   └── .obsidian/               # Hidden
//! └── Классы/
//!     └── ...
//! ```
//!
//! ## Ordering
//!
//! Entries are read in file-name order, then siblings are stably sorted with
//! folders first and labels collated for the configured locale. Scanning the
//! same tree twice yields the same result.
//!
//! ## Failures
//!
//! A missing category directory yields an empty result and a warning. Any
//! other filesystem failure goes through the configured [`ErrorPolicy`]:
//! `abort` returns it, `skip` logs it at error level and leaves that subtree
//! or entry out. Symbolic links are never followed; a link named like a
//! document is listed like a regular file.

use crate::collate::LabelOrder;
use crate::config::{ConfigError, ErrorPolicy, NavConfig};
use crate::naming::NamingRules;
use crate::types::NavNode;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Cannot read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("Category path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// Compiles category directories into navigation subtrees.
pub struct Scanner<'a> {
    rules: NamingRules<'a>,
    order: LabelOrder,
    policy: ErrorPolicy,
    collapse_folders: bool,
    /// Directories whose listing fails with permission denied.
    #[cfg(test)]
    unreadable: Vec<PathBuf>,
}

impl<'a> Scanner<'a> {
    pub fn new(config: &'a NavConfig) -> Result<Self, ScanError> {
        Ok(Self {
            rules: NamingRules::from_config(config),
            order: LabelOrder::for_config(config)?,
            policy: config.on_error,
            collapse_folders: config.collapse_folders,
            #[cfg(test)]
            unreadable: Vec::new(),
        })
    }

    /// Scan `content_root/category_name` into sorted navigation nodes.
    ///
    /// Returns an empty list when the category directory does not exist.
    pub fn scan_category(
        &self,
        category_name: &str,
        content_root: &Path,
    ) -> Result<Vec<NavNode>, ScanError> {
        let category_path = content_root.join(category_name);

        match fs::metadata(&category_path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(
                    category = category_name,
                    path = %category_path.display(),
                    "Category directory not found"
                );
                return Ok(Vec::new());
            }
            Err(source) => {
                self.recover(ScanError::Io {
                    path: category_path,
                    source,
                })?;
                return Ok(Vec::new());
            }
            Ok(meta) if !meta.is_dir() => {
                self.recover(ScanError::NotADirectory(category_path))?;
                return Ok(Vec::new());
            }
            Ok(_) => {}
        }

        let mut parents = Vec::new();
        let nodes = self.scan_directory(&category_path, category_name, &mut parents)?;

        let documents: usize = nodes.iter().map(NavNode::document_count).sum();
        let folders: usize = nodes.iter().map(NavNode::folder_count).sum();
        if nodes.is_empty() {
            tracing::warn!(category = category_name, "Category has no documents");
        } else {
            tracing::info!(
                category = category_name,
                documents,
                folders,
                "Category scanned"
            );
        }
        Ok(nodes)
    }

    fn scan_directory(
        &self,
        dir: &Path,
        category: &str,
        parents: &mut Vec<String>,
    ) -> Result<Vec<NavNode>, ScanError> {
        let read = match self.read_dir(dir) {
            Ok(read) => read,
            Err(source) => {
                self.recover(ScanError::Io {
                    path: dir.to_path_buf(),
                    source,
                })?;
                return Ok(Vec::new());
            }
        };

        let mut entries = Vec::new();
        for entry in read {
            match entry {
                Ok(entry) => entries.push(entry),
                Err(source) => self.recover(ScanError::Io {
                    path: dir.to_path_buf(),
                    source,
                })?,
            }
        }
        entries.sort_by_key(fs::DirEntry::file_name);

        let mut nodes = Vec::new();
        for entry in entries {
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                tracing::warn!(
                    path = %entry.path().display(),
                    "Skipping entry with a non-UTF-8 name"
                );
                continue;
            };
            if self.rules.is_excluded(name) {
                continue;
            }

            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(source) => {
                    self.recover(ScanError::Io {
                        path: entry.path(),
                        source,
                    })?;
                    continue;
                }
            };

            if file_type.is_dir() {
                parents.push(name.to_string());
                let children = self.scan_directory(&entry.path(), category, parents)?;
                parents.pop();
                if children.is_empty() {
                    tracing::debug!(path = %entry.path().display(), "Pruning folder without documents");
                } else {
                    nodes.push(NavNode::folder(name, self.collapse_folders, children));
                }
                continue;
            }

            if file_type.is_symlink() {
                tracing::debug!(path = %entry.path().display(), "Not following symlink");
            }
            if let Some(label) = self.rules.document_label(name) {
                let link = self.rules.document_link(category, parents, label);
                nodes.push(NavNode::document(label, link));
            }
        }

        self.order.sort_siblings(&mut nodes);
        Ok(nodes)
    }

    fn read_dir(&self, dir: &Path) -> io::Result<fs::ReadDir> {
        #[cfg(test)]
        if self.unreadable.iter().any(|p| p == dir) {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        fs::read_dir(dir)
    }

    /// Apply the error policy: `abort` hands the error back, `skip` logs it.
    fn recover(&self, err: ScanError) -> Result<(), ScanError> {
        match self.policy {
            ErrorPolicy::Abort => Err(err),
            ErrorPolicy::Skip => {
                tracing::error!(error = %err, "Skipping unreadable content");
                Ok(())
            }
        }
    }
}

/// Scan one category with the stock rules.
pub fn scan_category(category_name: &str, content_root: &Path) -> Result<Vec<NavNode>, ScanError> {
    let config = NavConfig::default();
    Scanner::new(&config)?.scan_category(category_name, content_root)
}
