//! Anchor resolution
//!
//! The anchor is the token index the header is placed in front of, before any
//! whitespace that follows the opening tag or the strict-mode declaration.

use crate::config::Location;
use crate::shape::FileShape;

/// Token index directly after the opening tag.
pub const AFTER_OPEN_TAG: usize = 1;

/// Resolve the anchor index for `location`.
///
/// `AfterDeclareStrict` falls back to the opening tag when the file has no
/// qualifying strict-mode declaration. Only token kinds and order matter.
pub fn resolve_anchor(shape: &FileShape, location: Location) -> usize {
    let anchor = match location {
        Location::AfterOpen => AFTER_OPEN_TAG,
        Location::AfterDeclareStrict => shape.strict_declaration_end.unwrap_or(AFTER_OPEN_TAG),
    };
    tracing::debug!(?location, anchor, "resolved header anchor");
    anchor
}

/// The other legal header position, when the file has one.
///
/// With `AfterOpen` configured, a header that sits after a leading
/// strict-mode declaration is misplaced and gets relocated.
pub fn alternate_anchor(shape: &FileShape, location: Location) -> Option<usize> {
    match location {
        Location::AfterOpen => shape.strict_declaration_end,
        Location::AfterDeclareStrict => None,
    }
}
