use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::trie::Named;

pub const DEFAULT_MAX_RESULTS: usize = 10;
pub const DEFAULT_MIN_WORD_LEN: usize = 2;
pub const DEFAULT_ADDRESS: &str = "0.0.0.0:9000";

/// A searchable entity (player, team, league). Display fields other than
/// `id` and `name` are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: serde_json::Value,
    pub name: String,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl Named for Record {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Stats for one loaded collection.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionStats {
    pub name: String,
    pub records: usize,
    pub nodes: usize,
}

/// Main configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub collection: BTreeMap<String, CollectionConfig>,
}

/// App settings. Unset values fall back to defaults when the index is built,
/// so that a later config file only overrides what it sets.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub address: String,
    pub max_results: Option<usize>,
    pub min_word_len: Option<usize>,
    pub fold_diacritics: Option<bool>,
}

/// A named collection and the JSON file its records are read from.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CollectionConfig {
    #[serde(default)]
    pub path: String,
}
