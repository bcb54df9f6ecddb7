//! Navigation configuration.
//!
//! Handles loading and validating the `wiki-nav.toml` file. The file is sparse:
//! every key has a stock default, so a config only needs the keys it changes.
//! A relative `content_root` is resolved against the config file's directory.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! content_root = "content"          # Directory holding one subdirectory per category
//! link_prefix = "/content"          # Leading path of every document link
//! document_extension = "md"         # Only files with this extension become documents
//! ignored_names = ["node_modules"]  # Entries skipped wherever they appear
//! draft_prefix = "_"                # Files starting with this are drafts/partials
//! collapse_folders = true           # Nested folders start collapsed
//! locale = "ru"                     # Collation locale for sibling ordering
//! on_error = "abort"                # "abort" or "skip" on filesystem errors
//! home_label = "Home"               # Placeholder entry when nothing was found
//! home_link = "/"
//!
//! [[categories]]
//! name = "Расы"
//! collapsed = false
//! enabled = true
//! ```
//!
//! Unknown keys are rejected to catch typos early. Category names are checked
//! before any directory is read: an empty, duplicated, or path-like name fails
//! the build with a message naming the offending entry, as does a name that the
//! scanner would skip (hidden or listed in `ignored_names`).

use icu_locid::Locale;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
    #[error("Invalid collation locale: {0}")]
    Locale(String),
}

/// What to do when the filesystem refuses a read mid-traversal.
///
/// A missing category directory is never an error; this only governs
/// unexpected failures such as permission denied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Fail the whole build, naming the path that could not be read.
    #[default]
    Abort,
    /// Drop the unreadable subtree, log it at error level, keep going.
    Skip,
}

/// A top-level grouping of content, one directory under the content root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub collapsed: bool,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collapsed: false,
            enabled: true,
        }
    }

    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Navigation configuration loaded from `wiki-nav.toml`.
///
/// Constructed once at the entry point and passed down by reference; nothing
/// in the crate mutates it after [`load_config`] returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    /// Directory holding one subdirectory per category.
    pub content_root: String,
    /// Leading path of every document link, without a trailing slash.
    pub link_prefix: String,
    /// Extension (without the dot) that marks a file as a document.
    pub document_extension: String,
    /// Names skipped wherever they appear, e.g. dependency caches.
    pub ignored_names: Vec<String>,
    /// Files whose name starts with this are drafts and never listed.
    pub draft_prefix: String,
    /// Whether nested folder nodes start collapsed.
    pub collapse_folders: bool,
    /// BCP 47 locale used to order sibling labels.
    pub locale: String,
    /// Handling of filesystem failures during traversal.
    pub on_error: ErrorPolicy,
    /// Label of the placeholder entry used when no category has content.
    pub home_label: String,
    /// Link of the placeholder entry.
    pub home_link: String,
    /// Categories in editorial order.
    pub categories: Vec<Category>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            content_root: "content".to_string(),
            link_prefix: "/content".to_string(),
            document_extension: "md".to_string(),
            ignored_names: vec!["node_modules".to_string()],
            draft_prefix: "_".to_string(),
            collapse_folders: true,
            locale: "ru".to_string(),
            on_error: ErrorPolicy::Abort,
            home_label: "Home".to_string(),
            home_link: "/".to_string(),
            categories: Vec::new(),
        }
    }
}

impl NavConfig {
    /// Validate config values before any scanning begins.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (index, category) in self.categories.iter().enumerate() {
            let name = category.name.trim();
            if name.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "categories[{index}].name must not be empty"
                )));
            }
            if name == "." || name == ".." || name.contains(['/', '\\']) {
                return Err(ConfigError::Validation(format!(
                    "categories[{index}].name {:?} must be a single directory name",
                    category.name
                )));
            }
            if name.starts_with('.') || self.ignored_names.iter().any(|n| n == name) {
                return Err(ConfigError::Validation(format!(
                    "categories[{index}].name {:?} is hidden or ignored and can never be listed",
                    category.name
                )));
            }
            if !seen.insert(category.name.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate category name {:?}",
                    category.name
                )));
            }
        }
        if !self.link_prefix.starts_with('/') || self.link_prefix.ends_with('/') {
            return Err(ConfigError::Validation(
                "link_prefix must start with '/' and must not end with '/'".into(),
            ));
        }
        if self.document_extension.is_empty() || self.document_extension.contains('.') {
            return Err(ConfigError::Validation(
                "document_extension must be a bare extension such as \"md\"".into(),
            ));
        }
        if self.ignored_names.iter().any(|n| n.is_empty()) {
            return Err(ConfigError::Validation(
                "ignored_names must not contain empty names".into(),
            ));
        }
        self.collation_locale()?;
        Ok(())
    }

    /// Parse the configured locale.
    pub fn collation_locale(&self) -> Result<Locale, ConfigError> {
        self.locale
            .parse::<Locale>()
            .map_err(|e| ConfigError::Locale(format!("{:?}: {e}", self.locale)))
    }

    /// The content root, with a relative `content_root` taken from the
    /// directory holding the config file.
    pub fn resolve_content_root(&self, config_path: &Path) -> PathBuf {
        let root = Path::new(&self.content_root);
        match config_path.parent() {
            Some(dir) if root.is_relative() => dir.join(root),
            _ => root.to_path_buf(),
        }
    }

    /// Categories that take part in the build, in declared order.
    pub fn enabled_categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|c| c.enabled)
    }
}

/// Load the config file at `path`, falling back to stock defaults when absent.
///
/// Every field has a default, so a file only lists the keys it changes; a
/// listed array such as `ignored_names` replaces the default one.
pub fn load_config(path: &Path) -> Result<NavConfig, ConfigError> {
    let config: NavConfig = if path.exists() {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)?
    } else {
        tracing::debug!(path = %path.display(), "No config file, using stock defaults");
        NavConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `wiki-nav.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# wiki-nav configuration
# ======================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# Directory holding one subdirectory per category.
content_root = "content"

# Leading path of every document link. Links look like
#   /content/<category>/<path/inside/category>/<document>
link_prefix = "/content"

# Only files with this extension become documents.
document_extension = "md"

# Entries with these exact names are skipped at any depth.
# Anything starting with "." is always skipped as well.
ignored_names = ["node_modules"]

# Files starting with this prefix are drafts or partials and stay out of the
# navigation. Directories are not affected.
draft_prefix = "_"

# Nested folders start collapsed in the sidebar.
collapse_folders = true

# Locale used to order labels within a folder.
locale = "ru"

# Filesystem errors during traversal:
#   "abort" - fail the build and report the path
#   "skip"  - leave the unreadable subtree out, log it, continue
on_error = "abort"

# Placeholder entry shown when no category produced any content.
home_label = "Home"
home_link = "/"

# ---------------------------------------------------------------------------
# Categories, in the order they appear in the sidebar.
# ---------------------------------------------------------------------------
# [[categories]]
# name = "Расы"
# collapsed = false   # start the category collapsed
# enabled = true      # set to false to leave it out entirely
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_values() {
        let config = NavConfig::default();
        assert_eq!(config.content_root, "content");
        assert_eq!(config.link_prefix, "/content");
        assert_eq!(config.document_extension, "md");
        assert_eq!(config.ignored_names, vec!["node_modules"]);
        assert_eq!(config.on_error, ErrorPolicy::Abort);
        assert!(config.categories.is_empty());
    }

    #[test]
    fn parse_partial_config() {
        let toml = r#"
on_error = "skip"

[[categories]]
name = "Расы"
"#;
        let config: NavConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.on_error, ErrorPolicy::Skip);
        assert_eq!(config.categories, vec![Category::new("Расы")]);
        // Defaults preserved
        assert_eq!(config.locale, "ru");
        assert!(config.collapse_folders);
    }

    #[test]
    fn category_flags_default_to_enabled_and_expanded() {
        let toml = r#"
[[categories]]
name = "Классы"

[[categories]]
name = "Планеты"
collapsed = true
enabled = false
"#;
        let config: NavConfig = toml::from_str(toml).unwrap();
        assert!(config.categories[0].enabled);
        assert!(!config.categories[0].collapsed);
        assert!(!config.categories[1].enabled);
        assert!(config.categories[1].collapsed);
    }

    #[test]
    fn enabled_categories_keep_declared_order() {
        let config = NavConfig {
            categories: vec![
                Category::new("Расы"),
                Category::new("Оружие").enabled(false),
                Category::new("Классы"),
            ],
            ..NavConfig::default()
        };
        let names: Vec<&str> = config
            .enabled_categories()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Расы", "Классы"]);
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("wiki-nav.toml")).unwrap();
        assert_eq!(config, NavConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("wiki-nav.toml");
        fs::write(
            &path,
            r#"
content_root = "docs"
ignored_names = ["node_modules", "target"]

[[categories]]
name = "Расы"
collapsed = true
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.content_root, "docs");
        assert_eq!(config.ignored_names, vec!["node_modules", "target"]);
        assert_eq!(config.categories, vec![Category::new("Расы").collapsed(true)]);
        assert_eq!(config.link_prefix, "/content");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("wiki-nav.toml");
        fs::write(&path, "this is not = [valid toml").unwrap();

        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_validates_categories() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("wiki-nav.toml");
        fs::write(
            &path,
            r#"
[[categories]]
name = "Расы"

[[categories]]
name = "Расы"
"#,
        )
        .unwrap();

        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    fn with_categories(names: &[&str]) -> NavConfig {
        NavConfig {
            categories: names.iter().map(|n| Category::new(*n)).collect(),
            ..NavConfig::default()
        }
    }

    #[test]
    fn validate_default_config_passes() {
        assert!(NavConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_empty_category_name() {
        let err = with_categories(&["Расы", "  "]).validate().unwrap_err();
        assert!(err.to_string().contains("categories[1].name"));
    }

    #[test]
    fn validate_duplicate_category_name() {
        let err = with_categories(&["Расы", "Классы", "Расы"])
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("duplicate category name"));
    }

    #[test]
    fn validate_path_like_category_name() {
        for name in ["..", ".", "Расы/Люди", r"Расы\Люди"] {
            let result = with_categories(&[name]).validate();
            assert!(
                matches!(result, Err(ConfigError::Validation(_))),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn validate_reserved_category_name() {
        for name in [".obsidian", "node_modules"] {
            let err = with_categories(&["Расы", name]).validate().unwrap_err();
            assert!(
                err.to_string().contains("hidden or ignored"),
                "{name:?} should be rejected, got {err}"
            );
        }
    }

    #[test]
    fn validate_category_matching_custom_ignored_name() {
        let config = NavConfig {
            ignored_names: vec!["Черновики".to_string()],
            categories: vec![Category::new("Черновики")],
            ..NavConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn content_root_relative_to_config_dir() {
        let config = NavConfig::default();
        assert_eq!(
            config.resolve_content_root(Path::new("site/docs/wiki-nav.toml")),
            PathBuf::from("site/docs/content")
        );
        assert_eq!(
            config.resolve_content_root(Path::new("wiki-nav.toml")),
            PathBuf::from("content")
        );
    }

    #[test]
    fn absolute_content_root_kept() {
        let tmp = TempDir::new().unwrap();
        let config = NavConfig {
            content_root: tmp.path().to_string_lossy().to_string(),
            ..NavConfig::default()
        };
        assert_eq!(
            config.resolve_content_root(Path::new("site/wiki-nav.toml")),
            tmp.path()
        );
    }

    #[test]
    fn load_config_arrays_replace_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("wiki-nav.toml");
        fs::write(&path, r#"ignored_names = ["vendor"]"#).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.ignored_names, vec!["vendor"]);
        assert_eq!(config.home_link, "/");
    }

    #[test]
    fn validate_link_prefix_shape() {
        for prefix in ["content", "/content/", ""] {
            let config = NavConfig {
                link_prefix: prefix.to_string(),
                ..NavConfig::default()
            };
            assert!(config.validate().is_err(), "{prefix:?} should be rejected");
        }
    }

    #[test]
    fn validate_document_extension() {
        let config = NavConfig {
            document_extension: ".md".to_string(),
            ..NavConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn validate_empty_ignored_name() {
        let config = NavConfig {
            ignored_names: vec![String::new()],
            ..NavConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_bad_locale() {
        let config = NavConfig {
            locale: "not a locale!".to_string(),
            ..NavConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Locale(_))));
    }

    #[test]
    fn unknown_key_rejected() {
        let result: Result<NavConfig, _> = toml::from_str("sidebar_width = 3");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_category_key_rejected() {
        let result: Result<NavConfig, _> = toml::from_str(
            r#"
[[categories]]
name = "Расы"
hidden = true
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn unknown_error_policy_rejected() {
        let result: Result<NavConfig, _> = toml::from_str(r#"on_error = "retry""#);
        assert!(result.is_err());
    }

    // =========================================================================
    // Stock config tests
    // =========================================================================

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let parsed: NavConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(parsed, NavConfig::default());
    }
}
