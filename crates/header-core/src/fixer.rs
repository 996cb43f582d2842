//! The header comment rule
//!
//! [`HeaderCommentFixer`] is the single entry point. One call takes a whole
//! file's tokens and returns them with the header inserted, replaced, removed
//! or left alone:
//!
//! ```text
//! guard ─▶ resolve anchor ─▶ detect slot ─┬─▶ replace ─┐
//!                                          ├─▶ insert  ─┼─▶ separate ─▶ done
//!                                          ├─▶ remove  ─┘
//!                                          └─▶ unchanged
//! ```
//!
//! All edits for one call are collected first and applied in a single pass.
//! If every edit would reproduce the text already there, the input is
//! returned untouched.

use crate::config::HeaderConfig;
use crate::detect::{Detection, HeaderSlot, detect_slot};
use crate::lexer::tokenize;
use crate::location::{alternate_anchor, resolve_anchor};
use crate::render::render_header;
use crate::separation::{Separator, merge_after_removal};
use crate::shape::FileShape;
use crate::token::{Token, TokenEdit, Tokens};
use crate::whitespace::WhitespaceStyle;

/// What a call did to the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The file is not plain PHP and was not looked at.
    Untouched,
    /// The header and its separation already matched.
    Unchanged,
    /// An existing header was rewritten.
    Replaced,
    /// A new header was added.
    Inserted,
    /// The header was deleted.
    Removed,
}

/// Result of one normalization call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixed {
    pub tokens: Tokens,
    pub outcome: Outcome,
}

impl Fixed {
    pub fn source(&self) -> String {
        self.tokens.source()
    }

    pub fn is_changed(&self) -> bool {
        !matches!(self.outcome, Outcome::Untouched | Outcome::Unchanged)
    }
}

/// Inserts, replaces or removes the configured header comment
#[derive(Debug, Clone)]
pub struct HeaderCommentFixer {
    config: HeaderConfig,
    style: WhitespaceStyle,
}

impl HeaderCommentFixer {
    pub fn new(config: HeaderConfig, style: WhitespaceStyle) -> Self {
        Self { config, style }
    }

    pub fn config(&self) -> &HeaderConfig {
        &self.config
    }

    pub fn whitespace_style(&self) -> &WhitespaceStyle {
        &self.style
    }

    /// Replace the configuration for subsequent calls.
    pub fn configure(&mut self, config: HeaderConfig) {
        self.config = config;
    }

    /// Replace the whitespace style for subsequent calls.
    pub fn set_whitespace_style(&mut self, style: WhitespaceStyle) {
        self.style = style;
    }

    /// Tokenize `source` and fix it.
    pub fn fix_source(&self, source: &str) -> Fixed {
        self.fix(tokenize(source))
    }

    /// Normalize the header of one file.
    pub fn fix(&self, mut tokens: Tokens) -> Fixed {
        let shape = FileShape::scan(&tokens);
        if shape.is_do_not_touch() {
            tracing::debug!(?shape, "not a plain PHP file, leaving it alone");
            return Fixed {
                tokens,
                outcome: Outcome::Untouched,
            };
        }

        let comment_type = self.config.comment_type();
        let anchor = resolve_anchor(&shape, self.config.location());
        let detection = detect_slot(&tokens, anchor, comment_type);

        let mut edits = Vec::new();
        let mut outcome = if self.config.is_removal() {
            match &detection.slot {
                Some(slot) => {
                    edits.push(removal(&tokens, anchor, slot));
                    Outcome::Removed
                }
                None => Outcome::Unchanged,
            }
        } else {
            let comment = render_header(self.config.header(), comment_type, &self.style);
            match &detection.slot {
                Some(slot) => {
                    tracing::debug!(span = ?slot.span(), "replacing existing header");
                    edits.extend(self.place(&tokens, anchor, &detection, comment));
                    Outcome::Replaced
                }
                None => {
                    if detection.is_unrelated_comment(&tokens) {
                        tracing::debug!("leaving comment of the other style in place");
                    }
                    edits.extend(self.place(&tokens, anchor, &detection, comment));
                    Outcome::Inserted
                }
            }
        };

        if let Some(alternate) = alternate_anchor(&shape, self.config.location()) {
            if let Some(slot) = detect_slot(&tokens, alternate, comment_type).slot {
                tracing::debug!(span = ?slot.span(), "removing header from the other location");
                edits.push(removal(&tokens, alternate, &slot));
                if outcome == Outcome::Unchanged {
                    outcome = Outcome::Removed;
                }
            }
        }

        if edits.iter().all(|edit| edit.is_noop(&tokens)) {
            tracing::debug!("header and separation already in place");
            return Fixed {
                tokens,
                outcome: Outcome::Unchanged,
            };
        }

        tokens.apply_edits(edits);
        tracing::debug!(?outcome, "header normalized");
        Fixed { tokens, outcome }
    }

    /// Edits that put `comment` at the header position with normalized
    /// separation, replacing the slot if there is one.
    fn place(
        &self,
        tokens: &Tokens,
        anchor: usize,
        detection: &Detection,
        comment: Token,
    ) -> Vec<TokenEdit> {
        let separator = Separator::new(self.config.separate(), &self.style);
        let (tag_fix, before) = separator.leading(tokens, anchor);

        // With no slot the whitespace after the anchor belongs to the next
        // token; with a slot it is whatever follows the old comment.
        let (end, gap) = match &detection.slot {
            Some(slot) => {
                let end = tokens.next_non_whitespace(slot.end).unwrap_or(tokens.len());
                (end, tokens.text_of(slot.end..end))
            }
            None => (detection.next, tokens.text_of(anchor..detection.next)),
        };
        let after = separator.trailing(&gap, end == tokens.len());

        let mut edits = vec![TokenEdit::replace(anchor..end, vec![before, comment, after])];
        edits.extend(tag_fix);
        edits
    }
}

/// Delete the slot comment and merge the whitespace around it.
fn removal(tokens: &Tokens, anchor: usize, slot: &HeaderSlot) -> TokenEdit {
    let end = tokens.next_non_whitespace(slot.end).unwrap_or(tokens.len());
    let before = tokens.text_of(anchor..slot.start);
    let after = tokens.text_of(slot.end..end);
    let merged = merge_after_removal(&before, &after);
    TokenEdit::replace(anchor..end, vec![Token::whitespace(merged)])
}
