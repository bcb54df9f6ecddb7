//! Locale-aware ordering of sibling nodes.
//!
//! Code-point order puts every uppercase Cyrillic letter before every lowercase
//! one and sends `ё` past `я`. Readers expect dictionary order instead, so
//! labels are compared with an ICU collator for the configured locale.

use crate::config::{ConfigError, NavConfig};
use crate::types::NavNode;
use icu_collator::{Collator, CollatorOptions};
use std::cmp::Ordering;

/// Compares labels for the configured locale.
pub struct LabelOrder {
    collator: Collator,
}

impl LabelOrder {
    pub fn for_config(config: &NavConfig) -> Result<Self, ConfigError> {
        let locale = config.collation_locale()?;
        let collator = Collator::try_new(&locale.into(), CollatorOptions::new())
            .map_err(|e| ConfigError::Locale(format!("{:?}: {e}", config.locale)))?;
        Ok(Self { collator })
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b)
    }

    /// Folders first, then documents; labels collated within each group.
    ///
    /// The sort is stable, so equal labels keep their scan order.
    pub fn sort_siblings(&self, nodes: &mut [NavNode]) {
        nodes.sort_by(|a, b| {
            b.is_folder()
                .cmp(&a.is_folder())
                .then_with(|| self.compare(a.label(), b.label()))
        });
    }
}
