//! File-shape facts computed once per invocation

use crate::token::{TokenKind, Tokens};

/// Read-only facts about the overall layout of a token sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileShape {
    /// Token 0 is `<?php` at byte offset 0.
    pub opens_at_start: bool,
    /// A `<?=` tag occurs anywhere.
    pub has_echo_open: bool,
    /// Text outside PHP mode occurs anywhere.
    pub has_inline_html: bool,
    /// Number of `<?php` tags.
    pub open_tags: usize,
    /// Index just past the `;` of a `declare(strict_types=N);` that directly
    /// follows the opening tag.
    pub strict_declaration_end: Option<usize>,
}

impl FileShape {
    pub fn scan(tokens: &Tokens) -> Self {
        let opens_at_start = tokens
            .get(0)
            .is_some_and(|t| t.is(TokenKind::OpenTag) && t.offset == 0);

        Self {
            opens_at_start,
            has_echo_open: tokens.count_kind(TokenKind::OpenTagWithEcho) > 0,
            has_inline_html: tokens.count_kind(TokenKind::InlineHtml) > 0,
            open_tags: tokens.count_kind(TokenKind::OpenTag),
            strict_declaration_end: if opens_at_start {
                strict_declaration_end(tokens)
            } else {
                None
            },
        }
    }

    /// Whether the file is a template or otherwise not a plain PHP file and
    /// must be left exactly as it is.
    pub fn is_do_not_touch(&self) -> bool {
        !self.opens_at_start || self.has_echo_open || self.has_inline_html || self.open_tags > 1
    }
}

/// Match `declare ( strict_types = <int> ) ;` right after the opening tag.
///
/// Only whitespace may sit between the tag and `declare`. Inside the
/// statement whitespace and comments are skipped. A statement closed by
/// `?>` instead of `;` does not qualify.
fn strict_declaration_end(tokens: &Tokens) -> Option<usize> {
    let declare = tokens.next_non_whitespace(1)?;
    if !tokens[declare].is(TokenKind::Declare) {
        return None;
    }

    let open = tokens.next_meaningful(declare + 1)?;
    if !tokens[open].is_punct('(') {
        return None;
    }
    let name = tokens.next_meaningful(open + 1)?;
    if !(tokens[name].is(TokenKind::Identifier)
        && tokens[name].text.eq_ignore_ascii_case("strict_types"))
    {
        return None;
    }
    let eq = tokens.next_meaningful(name + 1)?;
    if !tokens[eq].is_punct('=') {
        return None;
    }
    let value = tokens.next_meaningful(eq + 1)?;
    if !tokens[value].is(TokenKind::Number) {
        return None;
    }
    let close = tokens.next_meaningful(value + 1)?;
    if !tokens[close].is_punct(')') {
        return None;
    }
    let semicolon = tokens.next_meaningful(close + 1)?;
    if !tokens[semicolon].is_punct(';') {
        return None;
    }
    Some(semicolon + 1)
}
