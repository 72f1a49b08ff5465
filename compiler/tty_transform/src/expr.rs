//! Expression emitter.
//!
//! Emits the value of a literal, a path, a subexpression, or an inline
//! mustache call. Special forms (`if`, `array`, `hash`, `yield`) are
//! recognized here by callee name and never routed through `resolve` —
//! `yield` in particular emits as a generator `yield` rather than a plain
//! call, since it has to suspend the enclosing generator function.

use tty_diagnostic::{Diagnostic, DiagnosticBag, ErrorCode};
use tty_ir::ast::{Expression, HashPair, PathExpression, PathHead, SubExpression};
use tty_ir::{Span, Spanned};

use crate::builder::Builder;
use crate::path;
use crate::scope::ScopeTracker;

/// Emit `expr`'s value text. Returns any bare-fallback statements surfaced
/// while emitting it, for the caller to flush.
pub(crate) fn emit_expression(
    builder: &mut Builder,
    scope: &ScopeTracker,
    diagnostics: &mut DiagnosticBag,
    expr: &Expression,
) -> Vec<String> {
    match expr {
        Expression::Path(p) => path::emit_path(builder, scope, p).into_iter().collect(),
        Expression::SubExpression(sub) => emit_subexpression(builder, scope, diagnostics, sub),
        Expression::String(lit) => {
            builder.emit_mapped(&format!("{:?}", lit.value), lit.span);
            Vec::new()
        }
        Expression::Number(lit) => {
            builder.emit_mapped(&format_number(lit.value), lit.span);
            Vec::new()
        }
        Expression::Boolean(lit) => {
            builder.emit_mapped(if lit.value { "true" } else { "false" }, lit.span);
            Vec::new()
        }
        Expression::Null(span) => {
            builder.emit_mapped("null", *span);
            Vec::new()
        }
        Expression::Undefined(span) => {
            builder.emit_mapped("undefined", *span);
            Vec::new()
        }
    }
}

/// JS/TS numeric literals drop a trailing `.0` for integral values.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

fn emit_subexpression(
    builder: &mut Builder,
    scope: &ScopeTracker,
    diagnostics: &mut DiagnosticBag,
    sub: &SubExpression,
) -> Vec<String> {
    if let Some(form) = special_form_name(&sub.callee) {
        return emit_special_form(builder, scope, diagnostics, form, &sub.params, &sub.hash, sub.span);
    }

    emit_resolved_call(builder, scope, diagnostics, &sub.callee, &sub.params, &sub.hash)
}

/// `resolve(CALLEE)(args)` — shared by subexpressions and the statement
/// emitter's block/component invocations and modifier statements.
pub(crate) fn emit_resolved_call(
    builder: &mut Builder,
    scope: &ScopeTracker,
    diagnostics: &mut DiagnosticBag,
    callee: &PathExpression,
    params: &[Expression],
    hash: &[HashPair],
) -> Vec<String> {
    builder.emit("resolve(");
    let fallback = path::emit_path(builder, scope, callee);
    builder.emit(")");
    let mut fallbacks: Vec<String> = fallback.into_iter().collect();
    fallbacks.extend(emit_call_args(builder, scope, diagnostics, params, hash));
    fallbacks
}

/// Emit an inline mustache's call: `invokeInline(resolveOrReturn(CALLEE)(args))`
/// or `invokeInline(resolve(CALLEE)(args))`, unless `callee` names a special
/// form, in which case that form's bare shape is emitted instead.
pub(crate) fn emit_inline_call(
    builder: &mut Builder,
    scope: &ScopeTracker,
    diagnostics: &mut DiagnosticBag,
    callee: &PathExpression,
    params: &[Expression],
    hash: &[HashPair],
) -> Vec<String> {
    if let Some(form) = special_form_name(callee) {
        return emit_special_form(builder, scope, diagnostics, form, params, hash, callee.span);
    }

    let wrapper = if params.is_empty() && hash.is_empty() {
        "resolveOrReturn"
    } else {
        "resolve"
    };
    builder.emit("invokeInline(");
    builder.emit(wrapper);
    builder.emit("(");
    let fallback = path::emit_path(builder, scope, callee);
    builder.emit(")");
    let mut fallbacks: Vec<String> = fallback.into_iter().collect();
    fallbacks.extend(emit_call_args(builder, scope, diagnostics, params, hash));
    builder.emit(")");
    fallbacks
}

fn special_form_name(callee: &PathExpression) -> Option<&str> {
    if !callee.tail.is_empty() {
        return None;
    }
    match &callee.head {
        PathHead::Bare(name) if matches!(name.as_str(), "if" | "array" | "hash" | "yield") => Some(name.as_str()),
        _ => None,
    }
}

fn emit_special_form(
    builder: &mut Builder,
    scope: &ScopeTracker,
    diagnostics: &mut DiagnosticBag,
    form: &str,
    params: &[Expression],
    hash: &[HashPair],
    span: Span,
) -> Vec<String> {
    match form {
        "if" => emit_if(builder, scope, diagnostics, params, span),
        "array" => emit_array(builder, scope, diagnostics, params, hash, span),
        "hash" => emit_hash(builder, scope, diagnostics, params, hash, span),
        "yield" => {
            diagnostics.push(Diagnostic::new(ErrorCode::YieldPos, span));
            emit_yield(builder, scope, diagnostics, params, hash)
        }
        _ => Vec::new(),
    }
}

fn emit_if(
    builder: &mut Builder,
    scope: &ScopeTracker,
    diagnostics: &mut DiagnosticBag,
    params: &[Expression],
    span: Span,
) -> Vec<String> {
    if params.len() < 2 {
        diagnostics.push(Diagnostic::new(ErrorCode::IfFew, span));
    }

    let mut fallbacks = Vec::new();
    builder.emit("(");
    if let Some(cond) = params.first() {
        fallbacks.extend(emit_expression(builder, scope, diagnostics, cond));
    }
    builder.emit(") ? (");
    if let Some(then) = params.get(1) {
        fallbacks.extend(emit_expression(builder, scope, diagnostics, then));
    } else {
        builder.emit("undefined");
    }
    builder.emit(") : (");
    if let Some(otherwise) = params.get(2) {
        fallbacks.extend(emit_expression(builder, scope, diagnostics, otherwise));
    } else {
        builder.emit("undefined");
    }
    builder.emit(")");
    fallbacks
}

fn emit_array(
    builder: &mut Builder,
    scope: &ScopeTracker,
    diagnostics: &mut DiagnosticBag,
    params: &[Expression],
    hash: &[HashPair],
    span: Span,
) -> Vec<String> {
    if !hash.is_empty() {
        diagnostics.push(Diagnostic::new(ErrorCode::ArrayNamed, span));
    }

    builder.emit("[");
    let mut fallbacks = Vec::new();
    for (i, param) in params.iter().enumerate() {
        if i > 0 {
            builder.emit(", ");
        }
        fallbacks.extend(emit_expression(builder, scope, diagnostics, param));
    }
    builder.emit("]");
    fallbacks
}

fn emit_hash(
    builder: &mut Builder,
    scope: &ScopeTracker,
    diagnostics: &mut DiagnosticBag,
    params: &[Expression],
    hash: &[HashPair],
    span: Span,
) -> Vec<String> {
    if !params.is_empty() {
        diagnostics.push(Diagnostic::new(ErrorCode::HashPos, span));
    }

    builder.emit("(");
    let fallbacks = emit_hash_object(builder, scope, diagnostics, hash);
    builder.emit(")");
    fallbacks
}

/// `{{yield a b}}` / `{{yield a to="name"}}`. Shared by the statement
/// emitter (valid, top-level position) and this module's special-form
/// dispatch (invalid, expression position — callers there have already
/// pushed `E-YIELD-POS`).
pub(crate) fn emit_yield(
    builder: &mut Builder,
    scope: &ScopeTracker,
    diagnostics: &mut DiagnosticBag,
    params: &[Expression],
    hash: &[HashPair],
) -> Vec<String> {
    let to = hash.iter().find(|pair| pair.key == "to");
    let name = match to {
        None => "default".to_string(),
        Some(pair) => match &pair.value {
            Expression::String(lit) => lit.value.clone(),
            other => {
                diagnostics.push(Diagnostic::new(ErrorCode::YieldDyn, other.span()));
                "default".to_string()
            }
        },
    };

    builder.emit(&format!("yield toBlock({name:?}"));
    let mut fallbacks = Vec::new();
    for param in params {
        builder.emit(", ");
        fallbacks.extend(emit_expression(builder, scope, diagnostics, param));
    }
    builder.emit(")");
    fallbacks
}

/// Emit `( {named...} , pos0, pos1, ... )`, the invocation parens for a
/// helper/component/modifier call.
pub(crate) fn emit_call_args(
    builder: &mut Builder,
    scope: &ScopeTracker,
    diagnostics: &mut DiagnosticBag,
    params: &[Expression],
    hash: &[HashPair],
) -> Vec<String> {
    builder.emit("(");
    let mut fallbacks = emit_hash_object(builder, scope, diagnostics, hash);
    for param in params {
        builder.emit(", ");
        fallbacks.extend(emit_expression(builder, scope, diagnostics, param));
    }
    builder.emit(")");
    fallbacks
}

/// Emit the named-args object, always present even when empty (`{}`).
/// Non-empty objects use a trailing comma after the last pair.
fn emit_hash_object(
    builder: &mut Builder,
    scope: &ScopeTracker,
    diagnostics: &mut DiagnosticBag,
    hash: &[HashPair],
) -> Vec<String> {
    if hash.is_empty() {
        builder.emit("{}");
        return Vec::new();
    }

    builder.emit("{ ");
    let mut fallbacks = Vec::new();
    for pair in hash {
        builder.emit(&format!("{}: ", pair.key));
        fallbacks.extend(emit_expression(builder, scope, diagnostics, &pair.value));
        builder.emit(", ");
    }
    builder.emit("}");
    fallbacks
}
