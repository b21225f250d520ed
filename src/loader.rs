use std::{collections::BTreeMap, path::Path};

use crate::{
    autocomplete::{build_trie, Options},
    models::{CollectionConfig, Record},
    trie::WordTrie,
};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Format(String),
    #[error("load task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Parse a JSON array of records. Elements without a string `name` or an `id`
/// are skipped with a warning.
pub fn parse_records(data: &[u8], source: &str) -> Result<Vec<Record>, LoadError> {
    let value: serde_json::Value = serde_json::from_slice(data)?;
    let items = match value {
        serde_json::Value::Array(items) => items,
        _ => {
            return Err(LoadError::Format(format!(
                "{}: expected a JSON array of records",
                source
            )))
        }
    };

    let mut out = Vec::with_capacity(items.len());
    for (n, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<Record>(item) {
            Ok(r) => out.push(r),
            Err(e) => log::warn!("{}: skipping record {}: {}", source, n, e),
        }
    }

    Ok(out)
}

/// Read and validate a record list from a JSON file.
pub async fn load_file(path: &Path) -> Result<Vec<Record>, LoadError> {
    let data = tokio::fs::read(path).await?;
    let source = path.display().to_string();
    parse_records(&data, &source)
}

/// Load one collection and build its trie.
async fn load_collection(path: String, opt: Options) -> Result<WordTrie<Record>, LoadError> {
    let records = load_file(Path::new(&path)).await?;
    let trie = tokio::task::spawn_blocking(move || build_trie(records, &opt)).await?;
    Ok(trie)
}

/// Load every configured collection concurrently. Collections that fail to
/// load are logged and left out; the rest are returned.
pub async fn load_collections(
    collections: &BTreeMap<String, CollectionConfig>,
    opt: Options,
) -> BTreeMap<String, WordTrie<Record>> {
    let mut tasks = Vec::with_capacity(collections.len());
    for (name, cfg) in collections {
        if cfg.path.is_empty() {
            log::warn!("collection '{}' has no path, skipping", name);
            continue;
        }

        log::info!("loading collection '{}' from {}", name, cfg.path);
        let task = tokio::spawn(load_collection(cfg.path.clone(), opt));
        tasks.push((name.clone(), task));
    }

    let mut out = BTreeMap::new();
    for (name, task) in tasks {
        let res = match task.await {
            Ok(r) => r,
            Err(e) => Err(LoadError::from(e)),
        };

        match res {
            Ok(trie) => {
                if trie.is_empty() {
                    log::warn!("collection '{}' has no records", name);
                }
                log::info!(
                    "collection '{}': {} records, {} nodes",
                    name,
                    trie.len(),
                    trie.node_count()
                );
                out.insert(name, trie);
            }
            Err(e) => log::error!("error loading collection '{}': {}", name, e),
        }
    }

    out
}
