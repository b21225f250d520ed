use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::{
    collate,
    models::{AppConfig, CollectionStats, Record, DEFAULT_MAX_RESULTS, DEFAULT_MIN_WORD_LEN},
    trie::{Named, WordTrie},
};

/// Normalize a word: lowercase, and optionally strip diacritics.
pub fn normalize_word(s: &str, fold: bool) -> String {
    if fold {
        collate::fold(s).to_lowercase()
    } else {
        s.to_lowercase()
    }
}

/// Search tuning shared by all collections.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Options {
    /// Maximum number of results per search.
    pub max_results: usize,
    /// Query words with fewer chars than this are dropped.
    pub min_word_len: usize,
    pub fold_diacritics: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            min_word_len: DEFAULT_MIN_WORD_LEN,
            fold_diacritics: false,
        }
    }
}

impl From<&AppConfig> for Options {
    fn from(cfg: &AppConfig) -> Self {
        let d = Self::default();
        Self {
            max_results: cfg.max_results.unwrap_or(d.max_results),
            min_word_len: cfg.min_word_len.unwrap_or(d.min_word_len),
            fold_diacritics: cfg.fold_diacritics.unwrap_or(d.fold_diacritics),
        }
    }
}

/// Search `trie` for records having a name word that starts with every word of
/// `query`. Results are deduplicated, sorted by name and truncated.
pub fn search<'a, R: Named>(trie: &'a WordTrie<R>, query: &str, opt: &Options) -> Vec<&'a R> {
    let query = normalize_word(query.trim(), opt.fold_diacritics);
    let mut words = query
        .split(' ')
        .filter(|w| !w.is_empty() && w.chars().count() >= opt.min_word_len);

    let Some(first) = words.next() else {
        return Vec::new();
    };

    // AND across words: a record must sit under every word's subtree.
    let mut ids = trie.collect(first);
    for w in words {
        if ids.is_empty() {
            break;
        }
        let other = trie.collect(w);
        ids.retain(|id| other.contains(id));
    }

    // Equal names fall back to insertion order.
    let mut hits: Vec<_> = ids
        .into_iter()
        .filter_map(|id| trie.get(id).map(|r| (id, r)))
        .collect();
    hits.sort_by(|(ia, a), (ib, b)| collate::compare(a.name(), b.name()).then(ia.cmp(ib)));
    hits.truncate(opt.max_results);
    hits.into_iter().map(|(_, r)| r).collect()
}

/// In-memory trie-based autocomplete, one independent trie per collection.
pub struct Autocomplete {
    tries: HashMap<String, WordTrie<Record>>,
    opt: Options,
}

impl Autocomplete {
    pub fn new(opt: Options) -> Self {
        Self {
            tries: HashMap::new(),
            opt,
        }
    }

    /// Build a trie for every collection in `collections`.
    pub fn from_collections(collections: BTreeMap<String, Vec<Record>>, opt: Options) -> Self {
        let mut ac = Self::new(opt);
        for (name, records) in collections {
            ac.build(&name, records);
        }
        ac
    }

    /// Build a trie for a collection from its records, replacing any previous one.
    pub fn build(&mut self, collection: &str, records: Vec<Record>) {
        let trie = build_trie(records, &self.opt);
        self.insert(collection, trie);
    }

    /// Install an already built trie for a collection.
    pub fn insert(&mut self, collection: &str, trie: WordTrie<Record>) {
        self.tries.insert(collection.to_string(), trie);
    }

    /// Query a collection. An unknown or unbuilt collection yields no results.
    pub fn query(&self, collection: &str, q: &str) -> Vec<&Record> {
        match self.tries.get(collection) {
            Some(t) => search(t, q, &self.opt),
            None => Vec::new(),
        }
    }

    pub fn get(&self, collection: &str) -> Option<&WordTrie<Record>> {
        self.tries.get(collection)
    }

    /// Record and node counts per collection, sorted by collection name.
    pub fn stats(&self) -> Vec<CollectionStats> {
        let mut out: Vec<CollectionStats> = self
            .tries
            .iter()
            .map(|(name, t)| CollectionStats {
                name: name.clone(),
                records: t.len(),
                nodes: t.node_count(),
            })
            .collect();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        out
    }

    pub fn options(&self) -> &Options {
        &self.opt
    }
}

/// Build one collection's trie with the normalization `opt` asks for.
pub fn build_trie(records: Vec<Record>, opt: &Options) -> WordTrie<Record> {
    let fold = opt.fold_diacritics;
    WordTrie::build(records, |w| normalize_word(w, fold))
}
