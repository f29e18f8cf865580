//! Configuration structures for the tally-sales system.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Main configuration for the ingestion core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Raw table reading configuration.
    pub reader: ReaderConfig,
    /// Row-role classification configuration.
    pub classifier: ClassifierConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reader: ReaderConfig::default(),
            classifier: ClassifierConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Configuration for reading the raw delimited export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Field delimiter byte.
    pub delimiter: u8,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Configuration for buyer-vs-item row classification.
///
/// The keyword list encodes one organization's product-naming convention;
/// alternate export conventions are supported by replacing the list, not
/// by changing the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Substrings (matched case-insensitively) that mark a name cell as a
    /// product line rather than a buyer.
    pub item_keywords: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            item_keywords: vec![
                "Hydraulic".to_string(),
                "Broomer".to_string(),
                "CFGH".to_string(),
                "Gearbox".to_string(),
            ],
        }
    }
}
