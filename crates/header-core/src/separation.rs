//! Blank-line normalization around the header
//!
//! The whitespace on either side of the header is rebuilt from scratch rather
//! than patched, so surplus blank lines collapse to the policy and a second run
//! produces the same text.

use crate::config::Separation;
use crate::token::{Token, TokenEdit, TokenKind, Tokens};
use crate::whitespace::WhitespaceStyle;
use regex::Regex;
use std::sync::LazyLock;

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\n|\r").expect("Invalid line break regex"));

/// Last line break plus the horizontal whitespace after it.
static TRAILING_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\r\n|\n|\r)?[ \t]*\z").expect("Invalid trailing break regex")
});

static LEADING_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A(?:\r\n|\n|\r)").expect("Invalid leading break regex"));

fn count_line_breaks(text: &str) -> usize {
    LINE_BREAK.find_iter(text).count()
}

/// Horizontal whitespace after the last line break (all of `gap` if it has
/// none). This is the indentation of whatever follows the gap.
fn indentation(gap: &str) -> &str {
    match LINE_BREAK.find_iter(gap).last() {
        Some(m) => &gap[m.end()..],
        None => gap,
    }
}

/// Whitespace placement around one header comment
pub struct Separator<'a> {
    policy: Separation,
    style: &'a WhitespaceStyle,
}

impl<'a> Separator<'a> {
    pub fn new(policy: Separation, style: &'a WhitespaceStyle) -> Self {
        Self { policy, style }
    }

    /// Whitespace between the token at `anchor - 1` and the header.
    ///
    /// The opening tag carries the first line break itself. A tag that ends in
    /// a space (`<?php echo`) gets that space swapped for a line ending, which
    /// is returned as a separate edit.
    pub fn leading(&self, tokens: &Tokens, anchor: usize) -> (Option<TokenEdit>, Token) {
        let wanted = self.policy.line_breaks_before();
        let prev_index = anchor - 1;
        let prev = &tokens[prev_index];

        if !prev.is(TokenKind::OpenTag) {
            return (None, Token::whitespace(self.style.newlines(wanted)));
        }

        let (fix, carried) = if prev.text.ends_with(['\n', '\r']) {
            (None, 1)
        } else if prev.text.ends_with([' ', '\t']) {
            let tag = prev.text.trim_end_matches([' ', '\t']);
            let fixed = Token::new(TokenKind::OpenTag, format!("{tag}{}", self.style.newline()));
            (Some(TokenEdit::replace(prev_index..anchor, vec![fixed])), 1)
        } else {
            (None, 0)
        };

        let ws = self.style.newlines(wanted.saturating_sub(carried));
        (fix, Token::whitespace(ws))
    }

    /// Whitespace between the header and the next token.
    ///
    /// `gap` is the whitespace that used to precede the next token; its
    /// indentation is kept. At end of file a single line break is written.
    pub fn trailing(&self, gap: &str, at_eof: bool) -> Token {
        let wanted = if at_eof {
            1
        } else {
            self.policy.line_breaks_after()
        };
        Token::whitespace(format!("{}{}", self.style.newlines(wanted), indentation(gap)))
    }
}

/// Whitespace left behind when a header comment is deleted.
///
/// The whitespace before the header loses its last line break together with
/// any indentation after it. If it had no line break, the whitespace after the
/// header loses its first line break instead.
pub fn merge_after_removal(before: &str, after: &str) -> String {
    if count_line_breaks(before) > 0 {
        let before = TRAILING_BREAK.replace(before, "");
        format!("{before}{after}")
    } else {
        let after = LEADING_BREAK.replace(after, "");
        format!("{before}{after}")
    }
}
