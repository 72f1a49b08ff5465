//! Invariant checker.
//!
//! Most of the checks here are invoked inline by the expression and
//! statement emitters at the point where the relevant AST shape is in hand,
//! rather than as a separate upfront pass — the transform still emits
//! best-effort text around a structural error so the type checker can keep
//! producing its own diagnostics against the same source.

/// Whether `name` is a valid (simple, ASCII) TypeScript identifier.
///
/// Used both for block-param validation (`E-BP-NAME`) and for deciding
/// whether a path's tail segment renders as `?.name` or `?.["name"]`.
#[must_use]
pub(crate) fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_' || first == '$') {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
