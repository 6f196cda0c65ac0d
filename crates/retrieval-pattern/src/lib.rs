//! Pattern DSL front end for the retrieval query engine.
//!
//! Compiles pattern source like `a{1}[^xy]*{1}` into a flat token sequence:
//! literal bytes, wildcards, [`ByteSet`] classes, and captures with interned
//! names. Syntax errors carry 1-based, column-accurate positions.
//!
//! # Example
//!
//! ```
//! use retrieval_pattern::Pattern;
//!
//! let pattern = Pattern::compile("ab*").expect("valid pattern");
//! assert_eq!(pattern.tokens().len(), 3);
//!
//! let err = Pattern::compile("ab*[^zsd").unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Dangling group (exclusion) starting at column 5, expecting ]",
//! );
//! ```

mod byte_set;
mod error;
mod interner;
mod lexer;
mod parser;
mod pattern;
mod token;


pub use byte_set::ByteSet;
pub use error::{GroupKind, ParseError, RenderOptions, render_error};
pub use interner::{Interner, Symbol};
pub use pattern::Pattern;
pub use token::Token;
