use std::collections::{HashMap, HashSet};

/// Anything with a display name can be indexed by words of that name.
pub trait Named {
    fn name(&self) -> &str;
}

/// Handle of a record stored in a [`WordTrie`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(usize);

/// One character position reached while walking one or more words.
#[derive(Debug, Default)]
pub struct TrieNode {
    /// Records whose name has a word ending exactly here.
    value: Vec<RecordId>,
    children: HashMap<char, TrieNode>,
}

impl TrieNode {
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    pub fn value(&self) -> &[RecordId] {
        &self.value
    }

    /// All records stored at this node or anywhere below it.
    pub fn collect(&self) -> HashSet<RecordId> {
        let mut out = HashSet::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.extend(node.value().iter().copied());
            stack.extend(node.children.values());
        }
        out
    }

    fn count(&self) -> usize {
        1 + self.children.values().map(TrieNode::count).sum::<usize>()
    }
}

/// Prefix tree over the words of record names. Owns the records it indexes.
#[derive(Debug)]
pub struct WordTrie<R> {
    root: TrieNode,
    records: Vec<R>,
}

impl<R> Default for WordTrie<R> {
    fn default() -> Self {
        Self {
            root: TrieNode::default(),
            records: Vec::new(),
        }
    }
}

impl<R: Named> WordTrie<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trie from a full record list. Every space-separated word of a
    /// record's name is normalized with `normalize` and inserted on its own.
    pub fn build<I, F>(records: I, normalize: F) -> Self
    where
        I: IntoIterator<Item = R>,
        F: Fn(&str) -> String,
    {
        let mut trie = Self::new();
        for rec in records {
            let words: Vec<String> = rec.name().split(' ').map(&normalize).collect();
            let id = trie.add(rec);
            for w in &words {
                trie.insert(w, id);
            }
        }
        trie
    }

    /// Store a record without attaching it to any word.
    pub fn add(&mut self, record: R) -> RecordId {
        self.records.push(record);
        RecordId(self.records.len() - 1)
    }

    /// Attach a record to the node terminating `word`, creating nodes on the way.
    /// Inserting the same pair twice is additive. Empty words are ignored.
    pub fn insert(&mut self, word: &str, id: RecordId) {
        if word.is_empty() {
            return;
        }

        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }
        node.value.push(id);
    }

    /// Node reached by consuming every character of `prefix`. A partial walk is no match.
    pub fn find(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in prefix.chars() {
            node = node.child(c)?;
        }
        Some(node)
    }

    /// Records reachable under `prefix`, or an empty set if the prefix has no path.
    pub fn collect(&self, prefix: &str) -> HashSet<RecordId> {
        self.find(prefix).map(TrieNode::collect).unwrap_or_default()
    }

    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.records.get(id.0)
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.root.count()
    }
}
