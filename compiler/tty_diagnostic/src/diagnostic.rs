//! The [`Diagnostic`] type returned in [`crate::TransformResult::errors`]... — see `tty_transform`.

use tty_ir::Span;

use crate::ErrorCode;

/// A single structural diagnostic produced by the invariant checker.
///
/// Carries everything a caller needs to report the problem without
/// re-deriving anything: the fixed message text, the code for matching, and
/// the origin span to highlight.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: &'static str,
    pub location: Span,
}

impl Diagnostic {
    /// Construct a diagnostic for `code` at `location`, using the code's
    /// fixed message text.
    #[must_use]
    pub const fn new(code: ErrorCode, location: Span) -> Self {
        Diagnostic {
            code,
            message: code.message(),
            location,
        }
    }
}
