//! Reference tokenizer for PHP source
//!
//! Just enough of the PHP lexer to classify what the header rule cares about:
//! open and close tags, inline HTML, whitespace, the three comment forms, the
//! `declare` keyword, and opaque code around them. Strings and
//! heredocs are recognized so comment markers inside them are not mistaken
//! for comments. Tokenizing never fails; unterminated constructs run to the
//! end of the input.

use crate::token::{Token, TokenKind, Tokens};
use regex::Regex;
use std::sync::LazyLock;

/// `<?php` followed by exactly one whitespace character or end of input.
static OPEN_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<\?php(?:\r\n|[ \t\n\r]|\z)").expect("Invalid open tag regex")
});

/// Heredoc / nowdoc opener: `<<<ID`, `<<<"ID"` or `<<<'ID'` then a line break.
static HEREDOC_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^<<<[ \t]*(["']?)([A-Za-z_][A-Za-z0-9_]*)(["']?)\r?\n"#)
        .expect("Invalid heredoc regex")
});

/// Split PHP source into a contiguous token sequence.
pub fn tokenize(source: &str) -> Tokens {
    let mut lexer = Lexer {
        src: source,
        pos: 0,
        out: Vec::new(),
    };
    lexer.run();
    Tokens::new(lexer.out)
}

struct Lexer<'a> {
    src: &'a str,
    pos: usize,
    out: Vec<Token>,
}

impl<'a> Lexer<'a> {
    fn run(&mut self) {
        while self.pos < self.src.len() {
            self.lex_html();
            self.lex_php();
        }
    }

    fn push(&mut self, kind: TokenKind, end: usize) {
        let text = &self.src[self.pos..end];
        self.out.push(Token::new(kind, text));
        self.pos = end;
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    /// Consume inline HTML up to and including the next opening tag.
    fn lex_html(&mut self) {
        let rest = self.rest();
        let php = OPEN_TAG.find(rest).map(|m| (m.start(), m.end(), TokenKind::OpenTag));
        let echo = rest
            .find("<?=")
            .map(|s| (s, s + 3, TokenKind::OpenTagWithEcho));

        let next = match (php, echo) {
            (Some(a), Some(b)) => Some(if b.0 < a.0 { b } else { a }),
            (a, b) => a.or(b),
        };

        match next {
            Some((start, end, kind)) => {
                if start > 0 {
                    self.push(TokenKind::InlineHtml, self.pos + start);
                }
                self.push(kind, self.pos + (end - start));
            }
            None => self.push(TokenKind::InlineHtml, self.src.len()),
        }
    }

    /// Consume PHP code until a closing tag (inclusive) or end of input.
    fn lex_php(&mut self) {
        while self.pos < self.src.len() {
            let rest = self.rest();
            let Some(ch) = rest.chars().next() else {
                return;
            };

            if rest.starts_with("?>") {
                let mut end = self.pos + 2;
                let tail = &self.src[end..];
                if tail.starts_with("\r\n") {
                    end += 2;
                } else if tail.starts_with('\n') {
                    end += 1;
                }
                self.push(TokenKind::CloseTag, end);
                return;
            }

            if is_space(ch) {
                let len = rest.find(|c: char| !is_space(c)).unwrap_or(rest.len());
                self.push(TokenKind::Whitespace, self.pos + len);
            } else if rest.starts_with("/*") {
                let len = rest[2..].find("*/").map_or(rest.len(), |p| p + 4);
                let kind = if is_doc_comment(&rest[..len]) {
                    TokenKind::DocComment
                } else {
                    TokenKind::Comment
                };
                self.push(kind, self.pos + len);
            } else if rest.starts_with("//") || (ch == '#' && !rest.starts_with("#[")) {
                let len = line_comment_len(rest);
                self.push(TokenKind::LineComment, self.pos + len);
            } else if ch == '\'' || ch == '"' || ch == '`' {
                let len = quoted_len(rest, ch);
                self.push(TokenKind::String, self.pos + len);
            } else if let Some(len) = heredoc_len(rest) {
                self.push(TokenKind::String, self.pos + len);
            } else if ch == '$' && rest[1..].starts_with(is_ident_start) {
                self.push(TokenKind::Variable, self.pos + 1 + ident_len(&rest[1..]));
            } else if is_ident_start(ch) {
                let len = name_len(rest);
                let kind = keyword_kind(&rest[..len]);
                self.push(kind, self.pos + len);
            } else if ch.is_ascii_digit() {
                let len = rest
                    .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '.'))
                    .unwrap_or(rest.len());
                self.push(TokenKind::Number, self.pos + len);
            } else {
                self.push(TokenKind::Punct, self.pos + ch.len_utf8());
            }
        }
    }
}

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || !c.is_ascii()
}

fn ident_len(s: &str) -> usize {
    s.find(|c: char| !is_ident_char(c)).unwrap_or(s.len())
}

/// Length of a possibly namespace-qualified name (`A\B\C`).
fn name_len(s: &str) -> usize {
    let mut len = ident_len(s);
    while s[len..].starts_with('\\') && s[len + 1..].starts_with(is_ident_start) {
        len += 1 + ident_len(&s[len + 1..]);
    }
    len
}

fn keyword_kind(word: &str) -> TokenKind {
    if word.eq_ignore_ascii_case("declare") {
        TokenKind::Declare
    } else {
        TokenKind::Identifier
    }
}

/// `/**` must be followed by whitespace; `/**/` is an ordinary comment.
fn is_doc_comment(text: &str) -> bool {
    text.strip_prefix("/**")
        .and_then(|rest| rest.chars().next())
        .is_some_and(is_space)
}

/// Line comments stop before a line break or a closing tag.
fn line_comment_len(s: &str) -> usize {
    let nl = s.find(['\n', '\r']).unwrap_or(s.len());
    let close = s.find("?>").unwrap_or(s.len());
    nl.min(close)
}

fn quoted_len(s: &str, quote: char) -> usize {
    let mut escaped = false;
    for (i, c) in s.char_indices().skip(1) {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            return i + c.len_utf8();
        }
    }
    s.len()
}

fn heredoc_len(s: &str) -> Option<usize> {
    let caps = HEREDOC_START.captures(s)?;
    if caps[1] != caps[3] {
        return None;
    }
    let label = caps.get(2)?.as_str();
    let body_start = caps.get(0)?.end();

    let mut line_start = body_start;
    while line_start <= s.len() {
        let line_end = s[line_start..].find('\n').map_or(s.len(), |p| line_start + p);
        let line = s[line_start..line_end].trim_start_matches([' ', '\t']);
        if let Some(after) = line.strip_prefix(label) {
            if !after.starts_with(is_ident_char) {
                let indent = s[line_start..line_end].len() - line.len();
                return Some(line_start + indent + label.len());
            }
        }
        if line_end == s.len() {
            break;
        }
        line_start = line_end + 1;
    }
    Some(s.len())
}
