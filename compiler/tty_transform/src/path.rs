//! Path classifier.
//!
//! Resolves a dotted template path to one of four emission shapes. The
//! classifier never reports its own errors (resolution failures are
//! surfaced by the host type checker via the emitted expression) — its only
//! side effect besides writing to the builder is returning the bare
//! fallback statement text the built-in case requires at the enclosing
//! statement level.

use tty_ir::ast::{PathExpression, PathHead, PathSegment};

use crate::builder::Builder;
use crate::invariants::is_valid_identifier;
use crate::scope::ScopeTracker;

/// Emit `path`'s classified expression text into `builder`. Returns the
/// bare-fallback statement text when the head resolved to the built-in
/// namespace, for the caller to flush at the enclosing statement.
pub(crate) fn emit_path(builder: &mut Builder, scope: &ScopeTracker, path: &PathExpression) -> Option<String> {
    let bare_fallback = match &path.head {
        PathHead::This => {
            builder.emit_mapped("Γ.this", path.head_span);
            None
        }
        PathHead::AtName(name) => {
            builder.emit_mapped(&format!("Γ.args.{name}"), path.head_span);
            None
        }
        PathHead::Bare(name) if scope.has(name) => {
            builder.emit_mapped(name, path.head_span);
            None
        }
        PathHead::Bare(name) => {
            builder.emit_mapped(&format!(r#"χ.BuiltIns["{name}"]"#), path.head_span);
            Some(format!(r#"χ.BuiltIns["{name}"];"#))
        }
    };

    emit_tail(builder, &path.tail);

    bare_fallback
}

/// Optional-chain every tail segment; the head is never chained (a missing
/// first segment is a hard error, not a null-safe gap).
fn emit_tail(builder: &mut Builder, tail: &[PathSegment]) {
    for segment in tail {
        if is_valid_identifier(&segment.name) {
            builder.emit_mapped(&format!("?.{}", segment.name), segment.span);
        } else {
            builder.emit_mapped(&format!(r#"?.["{}"]"#, segment.name), segment.span);
        }
    }
}
