//! Pattern parser.
//!
//! A character-driven state machine over the lexeme stream. The grammar is
//! shallow — groups and captures cannot nest — so the open construct lives
//! in the call frame of its parse function rather than an explicit state
//! stack. The first error aborts the parse; there are no partial results.

use crate::byte_set::ByteSet;
use crate::error::{GroupKind, ParseError};
use crate::interner::Interner;
use crate::lexer::{LexKind, Lexeme};
use crate::pattern::Pattern;
use crate::token::Token;

pub(crate) struct PatternParser<'p> {
    lexemes: &'p [Lexeme],
    pos: usize,
    tokens: Vec<Token>,
    names: Interner,
}

impl<'p> PatternParser<'p> {
    pub(crate) fn new(lexemes: &'p [Lexeme]) -> Self {
        Self {
            lexemes,
            pos: 0,
            tokens: Vec::new(),
            names: Interner::new(),
        }
    }

    fn next(&mut self) -> Option<Lexeme> {
        let lexeme = self.lexemes.get(self.pos).copied();
        if lexeme.is_some() {
            self.pos += 1;
        }
        lexeme
    }

    pub(crate) fn parse(mut self) -> Result<Pattern, ParseError> {
        while let Some(lexeme) = self.next() {
            let token = match lexeme.kind {
                LexKind::Literal(byte) => Token::Char(byte),
                LexKind::Star => Token::Wildcard,
                LexKind::InclusionOpen => {
                    self.group(GroupKind::Inclusion, lexeme.span.last_column())?
                }
                LexKind::ExclusionOpen => {
                    self.group(GroupKind::Exclusion, lexeme.span.last_column())?
                }
                LexKind::CaptureOpen => self.capture(lexeme.span.last_column())?,
                LexKind::GroupClose | LexKind::CaptureClose | LexKind::Caret => {
                    return Err(unescaped(lexeme));
                }
            };
            self.tokens.push(token);
        }
        Ok(Pattern::from_parts(self.tokens, self.names))
    }

    /// `[...]` / `[^...]` at top level; the opener is already consumed.
    fn group(&mut self, kind: GroupKind, start_column: usize) -> Result<Token, ParseError> {
        let set = self.group_body(kind, start_column)?;
        Ok(match kind {
            GroupKind::Inclusion => Token::Inclusion(set),
            GroupKind::Exclusion => Token::Exclusion(set),
        })
    }

    /// Collect literal bytes up to the closing `]`. Shared by top-level and
    /// capture-inner groups.
    fn group_body(&mut self, kind: GroupKind, start_column: usize) -> Result<ByteSet, ParseError> {
        let mut set = ByteSet::EMPTY;
        loop {
            let Some(lexeme) = self.next() else {
                return Err(ParseError::DanglingGroup {
                    kind,
                    column: start_column,
                });
            };
            match lexeme.kind {
                LexKind::Literal(byte) => set.insert(byte),
                LexKind::GroupClose => {
                    if set.is_empty() {
                        return Err(ParseError::EmptyGroup {
                            kind,
                            column: start_column,
                        });
                    }
                    return Ok(set);
                }
                _ => return Err(unescaped(lexeme)),
            }
        }
    }

    /// `{name}` / `{name[...]}` / `{name[^...]}`; the opener is already
    /// consumed.
    fn capture(&mut self, start_column: usize) -> Result<Token, ParseError> {
        let mut name = Vec::new();
        loop {
            let Some(lexeme) = self.next() else {
                return Err(ParseError::DanglingCapture {
                    column: start_column,
                });
            };
            match lexeme.kind {
                LexKind::Literal(byte) => name.push(byte),
                LexKind::CaptureClose => {
                    if name.is_empty() {
                        return Err(ParseError::EmptyCapture {
                            column: start_column,
                        });
                    }
                    return Ok(Token::Capture(self.names.intern(&name)));
                }
                LexKind::InclusionOpen | LexKind::ExclusionOpen => {
                    if name.is_empty() {
                        return Err(ParseError::UnnamedCaptureGroup {
                            column: start_column,
                        });
                    }
                    let kind = match lexeme.kind {
                        LexKind::InclusionOpen => GroupKind::Inclusion,
                        _ => GroupKind::Exclusion,
                    };
                    let set = self.group_body(kind, lexeme.span.last_column())?;
                    return self.close_capture(kind, start_column, &name, set);
                }
                _ => return Err(unescaped(lexeme)),
            }
        }
    }

    /// A capture's inner group must sit in tail position: after its `]`,
    /// the very next lexeme has to be `}`.
    fn close_capture(
        &mut self,
        kind: GroupKind,
        start_column: usize,
        name: &[u8],
        set: ByteSet,
    ) -> Result<Token, ParseError> {
        match self.next() {
            None => Err(ParseError::DanglingCapture {
                column: start_column,
            }),
            Some(lexeme) if lexeme.kind == LexKind::CaptureClose => {
                let sym = self.names.intern(name);
                Ok(match kind {
                    GroupKind::Inclusion => Token::CaptureIn(sym, set),
                    GroupKind::Exclusion => Token::CaptureEx(sym, set),
                })
            }
            Some(_) => Err(ParseError::NontrailingGroup {
                kind,
                column: start_column,
            }),
        }
    }
}

/// `Unescaped symbol` report for a metacharacter in literal position.
fn unescaped(lexeme: Lexeme) -> ParseError {
    ParseError::UnescapedSymbol {
        symbol: lexeme.symbol(),
        column: lexeme.span.column(),
    }
}
