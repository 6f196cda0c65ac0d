//! Capture-name interning.
//!
//! Converts capture names (byte strings) into cheap integer handles
//! ([`Symbol`]). Comparing two symbols is O(1), and the match engine indexes
//! its binding slots directly by symbol.

use indexmap::IndexSet;

/// A lightweight handle to an interned capture name.
///
/// Symbols are numbered by first occurrence in the pattern, densely from
/// zero, so they double as binding-slot indices.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(test, derive(serde::Serialize))]
pub struct Symbol(u32);

impl Symbol {
    /// Slot index for binding arrays.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Raw value for serialization/debugging.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Create a Symbol from a raw index. Use only to address an interner
    /// that produced the index.
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }
}

/// Byte-string interner. Deduplicates names and returns [`Symbol`] handles.
///
/// Backed by an insertion-ordered set, so a name's symbol is simply its
/// index of first insertion.
#[derive(Debug, Clone, Default)]
pub struct Interner {
    names: IndexSet<Box<[u8]>>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a name, returning its Symbol.
    /// If the name was already interned, returns the existing Symbol.
    pub fn intern(&mut self, name: &[u8]) -> Symbol {
        if let Some(index) = self.names.get_index_of(name) {
            return Symbol(index as u32);
        }
        let (index, _) = self.names.insert_full(name.into());
        Symbol(index as u32)
    }

    /// Resolve a Symbol back to its name.
    ///
    /// # Panics
    /// Panics if the symbol was not created by this interner.
    #[inline]
    pub fn resolve(&self, sym: Symbol) -> &[u8] {
        &self.names[sym.index()]
    }

    /// Try to resolve a Symbol, returning None if invalid.
    #[inline]
    pub fn try_resolve(&self, sym: Symbol) -> Option<&[u8]> {
        self.names.get_index(sym.index()).map(|name| &name[..])
    }

    /// Number of interned names.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate all interned names with their symbols.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &[u8])> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (Symbol(i as u32), &name[..]))
    }
}
