//! Capture environment.

use retrieval_pattern::Symbol;

/// Byte bindings for one match attempt, one slot per capture name.
///
/// A name binds at its first matched occurrence and is explicitly cleared
/// when the search backtracks past that occurrence, so sibling branches
/// never observe each other's bindings.
#[derive(Debug, Clone)]
pub struct Bindings {
    slots: Vec<Option<u8>>,
}

impl Bindings {
    /// Environment with `count` unbound slots (`Pattern::name_count`).
    pub fn new(count: usize) -> Self {
        Self {
            slots: vec![None; count],
        }
    }

    /// The byte bound to `sym`, if any.
    #[inline]
    pub fn get(&self, sym: Symbol) -> Option<u8> {
        self.slots[sym.index()]
    }

    #[inline]
    pub fn bind(&mut self, sym: Symbol, byte: u8) {
        debug_assert!(
            self.slots[sym.index()].is_none(),
            "rebinding a bound capture"
        );
        self.slots[sym.index()] = Some(byte);
    }

    #[inline]
    pub fn unbind(&mut self, sym: Symbol) {
        self.slots[sym.index()] = None;
    }
}
