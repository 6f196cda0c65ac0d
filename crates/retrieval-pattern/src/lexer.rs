//! Lexer for the pattern language.
//!
//! Produces span-based lexemes over raw bytes. Only the metacharacter
//! vocabulary is tokenized by logos; every byte logos does not recognize is
//! folded into a [`LexKind::Literal`] lexeme, so the stream always covers
//! the whole pattern.

use logos::Logos;
use std::ops::Range;

/// Byte range of a lexeme within the pattern source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    fn from_range(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }

    /// 1-based column of the first byte.
    pub fn column(self) -> usize {
        self.start + 1
    }

    /// 1-based column of the last byte. Constructs report this as their
    /// starting column, so `[^` is reported at its `^`.
    pub fn last_column(self) -> usize {
        self.end
    }
}

/// Raw metacharacter vocabulary. Longest match wins, so `[^` outranks `[`
/// and `\X` outranks the lone backslash.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(utf8 = false)]
enum RawToken {
    #[token("*")]
    Star,

    #[token("[^")]
    ExclusionOpen,

    #[token("[")]
    InclusionOpen,

    #[token("]")]
    GroupClose,

    #[token("{")]
    CaptureOpen,

    #[token("}")]
    CaptureClose,

    #[token("^")]
    Caret,

    /// `\` followed by a metacharacter: two source bytes, one literal byte.
    #[regex(br"\\[*^\[\]{}]")]
    Escaped,

    /// A backslash not followed by a metacharacter stands for itself.
    #[token("\\")]
    Backslash,
}

/// Surface lexeme kinds the parser consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LexKind {
    /// A literal byte: any unreserved source byte, an escaped
    /// metacharacter, or a lone backslash.
    Literal(u8),
    Star,
    InclusionOpen,
    ExclusionOpen,
    GroupClose,
    CaptureOpen,
    CaptureClose,
    Caret,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Lexeme {
    pub kind: LexKind,
    pub span: Span,
}

impl Lexeme {
    /// The metacharacter named in an `Unescaped symbol` report. The
    /// two-byte `[^` opener is named by its first byte.
    pub fn symbol(self) -> char {
        match self.kind {
            LexKind::Star => '*',
            LexKind::InclusionOpen | LexKind::ExclusionOpen => '[',
            LexKind::GroupClose => ']',
            LexKind::CaptureOpen => '{',
            LexKind::CaptureClose => '}',
            LexKind::Caret => '^',
            LexKind::Literal(_) => unreachable!("literal lexemes are never unescaped symbols"),
        }
    }
}

/// Tokenizes a pattern into a vector of span-based lexemes.
///
/// Bytes the metacharacter vocabulary does not cover come back from logos
/// as errors; each such byte becomes a one-byte literal lexeme.
pub(crate) fn lex(source: &[u8]) -> Vec<Lexeme> {
    let mut lexemes = Vec::with_capacity(source.len());
    let mut lexer = RawToken::lexer(source);

    while let Some(raw) = lexer.next() {
        let span = lexer.span();
        let kind = match raw {
            Ok(RawToken::Star) => LexKind::Star,
            Ok(RawToken::ExclusionOpen) => LexKind::ExclusionOpen,
            Ok(RawToken::InclusionOpen) => LexKind::InclusionOpen,
            Ok(RawToken::GroupClose) => LexKind::GroupClose,
            Ok(RawToken::CaptureOpen) => LexKind::CaptureOpen,
            Ok(RawToken::CaptureClose) => LexKind::CaptureClose,
            Ok(RawToken::Caret) => LexKind::Caret,
            Ok(RawToken::Escaped) => LexKind::Literal(source[span.end - 1]),
            Ok(RawToken::Backslash) => LexKind::Literal(b'\\'),
            Err(()) => LexKind::Literal(source[span.start]),
        };
        lexemes.push(Lexeme {
            kind,
            span: Span::from_range(span),
        });
    }

    lexemes
}
