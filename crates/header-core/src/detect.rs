//! Existing-header detection
//!
//! Only position and delimiter style decide whether a comment is the header.
//! The comment text is never inspected: a matching-style comment right after
//! the anchor is the header slot even if it documents the class below it.

use crate::config::CommentType;
use crate::token::Tokens;
use std::ops::Range;

/// Token range of the comment currently occupying the header position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSlot {
    pub start: usize,
    pub end: usize,
}

impl HeaderSlot {
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// What sits after the anchor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// First non-whitespace token at or after the anchor, or the sequence
    /// length at end of file.
    pub next: usize,
    /// Set when `next` is a comment of the configured style.
    pub slot: Option<HeaderSlot>,
}

impl Detection {
    /// `next` is a comment, but of the other style.
    pub fn is_unrelated_comment(&self, tokens: &Tokens) -> bool {
        self.slot.is_none() && tokens.get(self.next).is_some_and(|t| t.kind.is_comment())
    }
}

/// Inspect the first non-whitespace token at or after `anchor`.
pub fn detect_slot(tokens: &Tokens, anchor: usize, comment_type: CommentType) -> Detection {
    let next = tokens.next_non_whitespace(anchor).unwrap_or(tokens.len());

    let slot = tokens
        .get(next)
        .filter(|t| t.is(comment_type.token_kind()))
        .map(|_| HeaderSlot {
            start: next,
            end: next + 1,
        });

    tracing::debug!(
        anchor,
        next,
        found = slot.is_some(),
        "inspected header slot"
    );

    Detection { next, slot }
}
