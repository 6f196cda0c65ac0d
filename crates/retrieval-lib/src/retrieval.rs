//! The `Retrieval` facade.

use retrieval_engine::execute;
use retrieval_pattern::{ParseError, Pattern};
use retrieval_trie::Trie;

/// A store of byte strings queryable by membership, prefix, and pattern.
///
/// `insert` mutates in place; clone the store for a snapshot. Queries never
/// mutate, so shared references can be used from many readers at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Retrieval {
    trie: Trie,
}

impl Retrieval {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store holding every key in `keys`.
    pub fn from_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<[u8]>,
    {
        Self {
            trie: Trie::from_keys(keys),
        }
    }

    /// Insert one key. Returns `true` if it was not already stored.
    pub fn insert(&mut self, key: impl AsRef<[u8]>) -> bool {
        self.trie.insert(key)
    }

    /// True iff `key` was inserted.
    pub fn contains(&self, key: impl AsRef<[u8]>) -> bool {
        self.trie.contains(key)
    }

    /// Every stored key beginning with `prefix`, in lexicographic order.
    /// The prefix itself is included when it is stored.
    pub fn prefix(&self, prefix: impl AsRef<[u8]>) -> Vec<Vec<u8>> {
        self.trie.prefix(prefix)
    }

    /// Every stored key matching the pattern, in lexicographic order.
    ///
    /// A syntax error short-circuits the query; there are no partial
    /// results.
    pub fn pattern(&self, pattern: impl AsRef<[u8]>) -> Result<Vec<Vec<u8>>, ParseError> {
        let compiled = Pattern::compile(pattern)?;
        Ok(self.matches(&compiled))
    }

    /// Run a pre-compiled pattern.
    pub fn matches(&self, pattern: &Pattern) -> Vec<Vec<u8>> {
        execute(&self.trie, pattern)
    }

    /// All stored keys in lexicographic order.
    pub fn keys(&self) -> Vec<Vec<u8>> {
        self.trie.keys()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// The underlying trie.
    pub fn trie(&self) -> &Trie {
        &self.trie
    }
}

impl<K: AsRef<[u8]>> Extend<K> for Retrieval {
    fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        self.trie.extend(keys);
    }
}

impl<K: AsRef<[u8]>> FromIterator<K> for Retrieval {
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        Self::from_keys(keys)
    }
}
