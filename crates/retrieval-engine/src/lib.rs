//! Pattern execution against a byte-keyed trie.
//!
//! Walks the compiled token sequence and the trie in lockstep, maintaining a
//! capture environment, and collects every stored key that satisfies the
//! pattern. Subtrees that cannot match are never entered; results come out
//! in depth-first, ascending-byte order, so the output is lexicographically
//! sorted.

mod bindings;
mod matcher;

#[cfg(test)]
mod matcher_tests;

pub use bindings::Bindings;
pub use matcher::execute;
