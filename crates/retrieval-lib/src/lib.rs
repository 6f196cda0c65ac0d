//! Retrieval: a byte-keyed trie with a pattern-matching query engine.
//!
//! Stores a set of byte strings and answers three queries: exact
//! membership, prefix enumeration, and pattern enumeration. The pattern
//! language supports wildcards (`*`), inclusion and exclusion classes
//! (`[abc]`, `[^abc]`), and named captures (`{name}`, `{name[abc]}`,
//! `{name[^abc]}`) that enforce cross-position byte equality.
//!
//! # Example
//!
//! ```
//! use retrieval_lib::Retrieval;
//!
//! let store = Retrieval::from_keys(["apple", "apply", "ape"]);
//!
//! assert!(store.contains("apple"));
//! assert_eq!(store.prefix("app").len(), 2);
//!
//! let hits = store.pattern("*{1}{1}**").expect("valid pattern");
//! assert_eq!(hits, [b"apple".to_vec(), b"apply".to_vec()]);
//! ```

mod retrieval;


pub use retrieval::Retrieval;

pub use retrieval_engine::{Bindings, execute};
pub use retrieval_pattern::{
    ByteSet, GroupKind, ParseError, Pattern, RenderOptions, Symbol, Token, render_error,
};
pub use retrieval_trie::{Keys, Trie, TrieNode};
