//! Parse errors and snippet rendering.

use std::fmt;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};
use serde::Serialize;
use thiserror::Error;

/// Whether a group matches bytes inside or outside its set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    Inclusion,
    Exclusion,
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKind::Inclusion => write!(f, "inclusion"),
            GroupKind::Exclusion => write!(f, "exclusion"),
        }
    }
}

/// A pattern syntax error.
///
/// The message names the offending construct and the 1-based column where it
/// began or where the offending byte occurred. Columns count source bytes,
/// so an escape occupies two; a construct's starting column is the column of
/// the final byte of its opening delimiter (`[^` reports its `^`).
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum ParseError {
    /// A reserved metacharacter where a literal byte was expected.
    #[error("Unescaped symbol {symbol} at column {column}")]
    UnescapedSymbol { symbol: char, column: usize },

    /// `[` or `[^` never closed by `]`.
    #[error("Dangling group ({kind}) starting at column {column}, expecting ]")]
    DanglingGroup { kind: GroupKind, column: usize },

    /// `{` never closed by `}`.
    #[error("Dangling group (capture) starting at column {column}, expecting }}")]
    DanglingCapture { column: usize },

    /// `{}` with no name bytes.
    #[error("Unnamed capture starting at column {column}, capture cannot be empty")]
    EmptyCapture { column: usize },

    /// `{[` before any name byte was collected.
    #[error("Unnamed capture starting at column {column}, capture must be named before group")]
    UnnamedCaptureGroup { column: usize },

    /// Bytes between a capture's inner group and the closing `}`.
    #[error("Group ({kind}) must in the tail position of capture starting at column {column}")]
    NontrailingGroup { kind: GroupKind, column: usize },

    /// `[]` or `[^]`; class sets must hold at least one byte.
    #[error("Empty group ({kind}) starting at column {column}, group cannot be empty")]
    EmptyGroup { kind: GroupKind, column: usize },
}

impl ParseError {
    /// The 1-based column carried by the message.
    pub fn column(&self) -> usize {
        match self {
            ParseError::UnescapedSymbol { column, .. }
            | ParseError::DanglingGroup { column, .. }
            | ParseError::DanglingCapture { column }
            | ParseError::EmptyCapture { column }
            | ParseError::UnnamedCaptureGroup { column }
            | ParseError::NontrailingGroup { column, .. }
            | ParseError::EmptyGroup { column, .. } => *column,
        }
    }
}

/// Options for rendering a parse error as an annotated snippet.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub colored: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { colored: true }
    }
}

impl RenderOptions {
    pub fn plain() -> Self {
        Self { colored: false }
    }

    pub fn colored() -> Self {
        Self { colored: true }
    }
}

/// Render `error` as a caret-annotated snippet of the pattern source.
///
/// The pattern is shown through a lossy UTF-8 view; the caret lands on the
/// reported column's byte for ASCII patterns.
pub fn render_error(source: &[u8], error: &ParseError, options: RenderOptions) -> String {
    let src = String::from_utf8_lossy(source);
    let message = error.to_string();

    let renderer = if options.colored {
        Renderer::styled()
    } else {
        Renderer::plain()
    };

    let start = error.column().saturating_sub(1).min(src.len());
    let end = (start + 1).min(src.len());

    let snippet = Snippet::source(src.as_ref()).line_start(1).annotation(
        AnnotationKind::Primary
            .span(start..end)
            .label(&message),
    );

    let report: Vec<Group> = vec![Level::ERROR.primary_title(&message).element(snippet)];
    renderer.render(&report).to_string()
}
