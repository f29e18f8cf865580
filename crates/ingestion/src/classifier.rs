//! Buyer-vs-item row classification.
//!
//! The export's name column conflates two entity types: buyer header
//! lines and product detail lines. A name cell matching any configured
//! keyword (case-insensitive substring) is a product line. The keyword
//! list is configuration, not a rule of the format: it encodes one
//! organization's product-naming convention.

use tally_core::config::ClassifierConfig;

/// Classifies name-column text as buyer header vs product line.
pub struct ItemClassifier {
    /// Keywords, lowercased once at construction.
    keywords: Vec<String>,
}

impl ItemClassifier {
    /// Create a classifier from a keyword list.
    pub fn new(keywords: &[String]) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// Create a classifier from configuration.
    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self::new(&config.item_keywords)
    }

    /// True if `name` matches any item keyword.
    ///
    /// Substring matching over the whole cell: a buyer whose registered
    /// name happens to contain a keyword will classify as an item. The
    /// keyword list is the knob for that, not the matcher.
    pub fn is_item(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.keywords.iter().any(|k| lower.contains(k.as_str()))
    }
}
