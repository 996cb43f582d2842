//! Header comment normalization for PHP source files.
//!
//! This crate inserts, replaces or removes a configured license/copyright
//! comment at the top of a PHP file, working on a token sequence rather than
//! raw text:
//!
//! ```text
//! <?php
//!
//! /*
//!  * This file is part of Foo.
//!  */
//!
//! declare(strict_types=1);
//! ```
//!
//! The pieces, in the order a call goes through them:
//!
//! - [`lexer`] splits source text into [`Tokens`]. Only the token classes the
//!   rule looks at are distinguished.
//! - [`shape`] decides whether the file is plain PHP at all. Templates with
//!   inline HTML, echo tags or a late opening tag are never touched.
//! - [`location`] finds the anchor, [`detect`] looks for an existing header
//!   there.
//! - [`render`] and [`separation`] build the replacement tokens.
//! - [`fixer`] ties it together and applies all edits in one pass.
//!
//! Options arrive as a loose mapping and are validated by [`config`] before
//! any of this runs.

pub mod config;
pub mod detect;
pub mod diagnostics;
pub mod error;
pub mod fixer;
pub mod lexer;
pub mod location;
pub mod render;
pub mod separation;
pub mod shape;
pub mod token;
pub mod whitespace;

pub use config::{CommentType, HeaderConfig, LEGACY_DEPRECATION, Location, Separation};
pub use diagnostics::{CollectedDiagnostics, Diagnostics, TracingDiagnostics};
pub use error::{Error, RULE_NAME, Result};
pub use fixer::{Fixed, HeaderCommentFixer, Outcome};
pub use lexer::tokenize;
pub use shape::FileShape;
pub use token::{EditKind, Token, TokenEdit, TokenKind, Tokens};
pub use whitespace::WhitespaceStyle;
