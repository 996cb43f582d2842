//! Token arena and index-based edits
//!
//! The fixer never splices the token vector in place. It describes changes as
//! [`TokenEdit`]s over index ranges and hands them to [`Tokens::apply_edits`],
//! which rebuilds the sequence in a single pass and recomputes byte offsets.

use serde::{Deserialize, Serialize};
use std::ops::{Index, Range};

/// Classification of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// `<?php` plus at most one trailing whitespace character.
    OpenTag,
    /// `<?=`
    OpenTagWithEcho,
    /// `?>` plus at most one trailing line break.
    CloseTag,
    /// Text outside of PHP mode.
    InlineHtml,
    Whitespace,
    /// `/* ... */`
    Comment,
    /// `/** ... */`
    DocComment,
    /// `// ...` or `# ...`
    LineComment,
    /// The `declare` keyword.
    Declare,
    Identifier,
    Variable,
    Number,
    String,
    /// Any other single character.
    Punct,
}

impl TokenKind {
    /// Whether the token is any kind of comment.
    pub fn is_comment(self) -> bool {
        matches!(self, Self::Comment | Self::DocComment | Self::LineComment)
    }
}

/// A single token with its kind, raw text, and byte offset in the source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub offset: usize,
}

impl Token {
    /// Create a token whose offset is fixed up when it is placed in a sequence.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            offset: 0,
        }
    }

    pub fn whitespace(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Whitespace, text)
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Whether this is a single-character token with the given text.
    pub fn is_punct(&self, ch: char) -> bool {
        self.kind == TokenKind::Punct
            && self.text.len() == ch.len_utf8()
            && self.text.starts_with(ch)
    }
}

/// The kind of edit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditKind {
    /// Insert tokens at a zero-width position.
    Insert,
    /// Replace a range with new tokens.
    Replace,
    /// Delete a range.
    Delete,
}

/// A replacement of a contiguous token range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenEdit {
    pub kind: EditKind,
    /// Token indices being replaced (empty for inserts).
    pub span: Range<usize>,
    pub replacement: Vec<Token>,
}

impl TokenEdit {
    pub fn insert(at: usize, replacement: Vec<Token>) -> Self {
        Self {
            kind: EditKind::Insert,
            span: at..at,
            replacement,
        }
    }

    pub fn replace(span: Range<usize>, replacement: Vec<Token>) -> Self {
        let kind = match (span.is_empty(), replacement.is_empty()) {
            (true, _) => EditKind::Insert,
            (false, true) => EditKind::Delete,
            (false, false) => EditKind::Replace,
        };
        Self {
            kind,
            span,
            replacement,
        }
    }

    /// True when applying the edit would leave the source text unchanged.
    pub fn is_noop(&self, tokens: &Tokens) -> bool {
        let old: String = tokens.as_slice()[self.span.clone()]
            .iter()
            .map(|t| t.text.as_str())
            .collect();
        let new: String = self.replacement.iter().map(|t| t.text.as_str()).collect();
        old == new
    }
}

/// An ordered, contiguous token sequence covering an entire file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    tokens: Vec<Token>,
}

impl Tokens {
    /// Build a sequence, assigning offsets from the token texts.
    pub fn new(tokens: Vec<Token>) -> Self {
        let mut tokens = Self { tokens };
        tokens.reindex();
        tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// Reassemble the file text.
    pub fn source(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    /// Index of the first non-whitespace token at or after `from`.
    pub fn next_non_whitespace(&self, from: usize) -> Option<usize> {
        (from..self.tokens.len()).find(|&i| !self.tokens[i].is_whitespace())
    }

    /// Index of the first token at or after `from` that is neither whitespace
    /// nor a comment.
    pub fn next_meaningful(&self, from: usize) -> Option<usize> {
        (from..self.tokens.len()).find(|&i| {
            let t = &self.tokens[i];
            !t.is_whitespace() && !t.kind.is_comment()
        })
    }

    /// Concatenated text of a token range.
    pub fn text_of(&self, span: Range<usize>) -> String {
        self.tokens[span].iter().map(|t| t.text.as_str()).collect()
    }

    pub fn count_kind(&self, kind: TokenKind) -> usize {
        self.tokens.iter().filter(|t| t.kind == kind).count()
    }

    /// Apply non-overlapping edits in one pass.
    ///
    /// Edits may be given in any order; they are sorted by span start.
    ///
    /// # Panics
    /// Panics if two edits overlap. Callers must hand over disjoint spans.
    pub fn apply_edits(&mut self, mut edits: Vec<TokenEdit>) {
        if edits.is_empty() {
            return;
        }
        edits.sort_by_key(|e| (e.span.start, e.span.end));

        let old = std::mem::take(&mut self.tokens);
        let mut out = Vec::with_capacity(old.len() + 4);
        let mut cursor = 0;
        let mut old_iter = old.into_iter();

        for edit in edits {
            assert!(
                edit.span.start >= cursor,
                "overlapping token edits at {:?}",
                edit.span
            );
            tracing::trace!(kind = ?edit.kind, span = ?edit.span, "applying token edit");
            out.extend(old_iter.by_ref().take(edit.span.start - cursor));
            old_iter.by_ref().take(edit.span.len()).for_each(drop);
            out.extend(edit.replacement.into_iter().filter(|t| !t.text.is_empty()));
            cursor = edit.span.end;
        }
        out.extend(old_iter);

        self.tokens = out;
        self.reindex();
    }

    fn reindex(&mut self) {
        let mut offset = 0;
        for token in &mut self.tokens {
            token.offset = offset;
            offset += token.text.len();
        }
    }
}

impl Index<usize> for Tokens {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl From<Vec<Token>> for Tokens {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}
