//! Header comment rendering

use crate::config::CommentType;
use crate::token::Token;
use crate::whitespace::WhitespaceStyle;

/// Render a non-empty `header` as a comment token.
///
/// Every content line gets a `" * "` prefix, so a single-line header still
/// spans three lines. A line holding only whitespace becomes a bare `" *"`.
pub fn render_header(header: &str, comment_type: CommentType, style: &WhitespaceStyle) -> Token {
    Token::new(
        comment_type.token_kind(),
        render_comment(header, comment_type, style),
    )
}

/// Comment text for a non-empty header.
pub fn render_comment(header: &str, comment_type: CommentType, style: &WhitespaceStyle) -> String {
    let newline = style.newline();
    let mut comment = String::from(comment_type.opener());
    comment.push_str(newline);

    for line in header.split('\n') {
        let line = line.replace('\r', "");
        if line.trim().is_empty() {
            comment.push_str(" *");
        } else {
            comment.push_str(" * ");
            comment.push_str(&line);
        }
        comment.push_str(newline);
    }

    comment.push_str(" */");
    comment
}
