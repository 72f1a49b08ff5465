//! Statement emitter.
//!
//! Drives the top-level walk: mustaches, element trees (plain, component, or
//! named-block), modifiers, and block (`{{#x}}`) invocations. The trailing
//! "bare reference" a component/block/modifier needs when its callee falls
//! back to the built-in namespace is just whatever [`path::emit_path`]
//! already handed back — this module's only job is to flush it at the right
//! point, not to re-derive it.

use tty_diagnostic::{Diagnostic, DiagnosticBag, ErrorCode};
use tty_ir::ast::{
    AttrNode, AttrValue, BlockParam, BlockStatement, ConcatPart, ConcatStatement,
    ElementModifierStatement, ElementNode, Inverse, MustacheStatement, PathExpression, PathHead,
    PathSegment, Statement,
};
use tty_ir::{classify_tag, named_block_name, Span, TagKind};

use crate::builder::Builder;
use crate::expr;
use crate::invariants;
use crate::path;
use crate::scope::ScopeTracker;

/// Emit a statement list (a template body, a block's body, or a named
/// block's children) in source order.
pub(crate) fn emit_statements(
    builder: &mut Builder,
    scope: &mut ScopeTracker,
    diagnostics: &mut DiagnosticBag,
    statements: &[Statement],
) {
    for stmt in statements {
        emit_statement(builder, scope, diagnostics, stmt);
    }
}

fn emit_statement(builder: &mut Builder, scope: &mut ScopeTracker, diagnostics: &mut DiagnosticBag, stmt: &Statement) {
    match stmt {
        Statement::Text(_) => {}
        Statement::Mustache(m) => emit_top_level_mustache(builder, scope, diagnostics, m),
        Statement::Block(b) => emit_block_statement(builder, scope, diagnostics, b),
        Statement::Element(e) => emit_element(builder, scope, diagnostics, e),
    }
}

fn flush_fallbacks(builder: &mut Builder, fallbacks: Vec<String>) {
    for text in fallbacks {
        builder.write_indent();
        builder.emit(&text);
        builder.emit("\n");
    }
}

fn is_bare_named(path: &PathExpression, name: &str) -> bool {
    path.tail.is_empty() && matches!(&path.head, PathHead::Bare(n) if n == name)
}

fn emit_top_level_mustache(
    builder: &mut Builder,
    scope: &ScopeTracker,
    diagnostics: &mut DiagnosticBag,
    mustache: &MustacheStatement,
) {
    builder.write_indent();
    let fallbacks = if is_bare_named(&mustache.path, "yield") {
        expr::emit_yield(builder, scope, diagnostics, &mustache.params, &mustache.hash)
    } else {
        expr::emit_inline_call(builder, scope, diagnostics, &mustache.path, &mustache.params, &mustache.hash)
    };
    builder.emit(";\n");
    flush_fallbacks(builder, fallbacks);
}

fn emit_block_param_list(builder: &mut Builder, params: &[BlockParam]) {
    builder.emit("...[");
    for (i, param) in params.iter().enumerate() {
        if i > 0 {
            builder.emit(", ");
        }
        builder.emit_mapped(&param.name, param.span);
    }
    builder.emit("]");
}

fn validate_block_params(diagnostics: &mut DiagnosticBag, params: &[BlockParam]) {
    for param in params {
        if !invariants::is_valid_identifier(&param.name) {
            diagnostics.push(Diagnostic::new(ErrorCode::BpName, param.span));
        }
    }
}

/// `{{#path args as |a b|}} body {{else}} inverse {{/path}}` — emitted as a
/// generic `invokeBlock` invocation with a `default`/`inverse` block pair.
/// `{{#if}}` is the same shape, with the addition of the `E-IF-BLOCK-COND`
/// parameter-count check; it has no dedicated emission path (name
/// recognition, not a separate AST node — see `tty_ir::ast::Statement`).
fn emit_block_statement(
    builder: &mut Builder,
    scope: &mut ScopeTracker,
    diagnostics: &mut DiagnosticBag,
    stmt: &BlockStatement,
) {
    if is_bare_named(&stmt.path, "if") && stmt.params.len() != 1 {
        diagnostics.push(Diagnostic::new(ErrorCode::IfBlockCond, stmt.span));
    }

    builder.write_indent();
    let fallbacks = expr::emit_resolved_call(builder, scope, diagnostics, &stmt.path, &stmt.params, &stmt.hash);

    builder.emit(", { *default(");
    emit_block_param_list(builder, &stmt.program.block_params);
    builder.emit(") {\n");
    builder.push_indent();
    validate_block_params(diagnostics, &stmt.program.block_params);
    scope.enter(stmt.program.block_params.iter().map(|p| p.name.clone()));
    emit_statements(builder, scope, diagnostics, &stmt.program.body);
    scope.leave();
    builder.pop_indent();
    builder.write_indent();
    builder.emit("}");

    match &stmt.inverse {
        None => {
            builder.emit(" }, \"default\");\n");
        }
        Some(Inverse::Body(block)) => {
            builder.emit(", *inverse(");
            emit_block_param_list(builder, &block.block_params);
            builder.emit(") {\n");
            builder.push_indent();
            validate_block_params(diagnostics, &block.block_params);
            scope.enter(block.block_params.iter().map(|p| p.name.clone()));
            emit_statements(builder, scope, diagnostics, &block.body);
            scope.leave();
            builder.pop_indent();
            builder.write_indent();
            builder.emit("}");
            builder.emit(" }, \"default\", \"inverse\");\n");
        }
        Some(Inverse::Chain(inner)) => {
            builder.emit(", *inverse() {\n");
            builder.push_indent();
            emit_block_statement(builder, scope, diagnostics, inner);
            builder.pop_indent();
            builder.write_indent();
            builder.emit("}");
            builder.emit(" }, \"default\", \"inverse\");\n");
        }
    }

    flush_fallbacks(builder, fallbacks);
}

fn emit_element(builder: &mut Builder, scope: &mut ScopeTracker, diagnostics: &mut DiagnosticBag, el: &ElementNode) {
    match classify_tag(&el.tag) {
        TagKind::Component => emit_component(builder, scope, diagnostics, el),
        TagKind::NamedBlock => {
            // Reached only when a named-block tag appears outside a
            // component's direct children (malformed input); the common
            // case is consumed directly by `emit_component`'s child loop.
            emit_statements(builder, scope, diagnostics, &el.children);
        }
        TagKind::Plain => emit_plain_element(builder, scope, diagnostics, el),
    }
}

fn emit_plain_element(builder: &mut Builder, scope: &mut ScopeTracker, diagnostics: &mut DiagnosticBag, el: &ElementNode) {
    for modifier in &el.modifiers {
        emit_modifier(builder, scope, diagnostics, modifier);
    }
    for attr in &el.attributes {
        emit_attr_statement(builder, scope, diagnostics, attr);
    }
    emit_statements(builder, scope, diagnostics, &el.children);
}

fn emit_modifier(
    builder: &mut Builder,
    scope: &ScopeTracker,
    diagnostics: &mut DiagnosticBag,
    modifier: &ElementModifierStatement,
) {
    builder.write_indent();
    builder.emit("invokeModifier(");
    let fallbacks = expr::emit_resolved_call(builder, scope, diagnostics, &modifier.path, &modifier.params, &modifier.hash);
    builder.emit(");\n");
    flush_fallbacks(builder, fallbacks);
}

/// Plain-element attributes recurse for type-checking purposes only; a
/// literal text value has nothing to check.
fn emit_attr_statement(builder: &mut Builder, scope: &ScopeTracker, diagnostics: &mut DiagnosticBag, attr: &AttrNode) {
    let fallbacks = match &attr.value {
        AttrValue::Text(_) => return,
        AttrValue::Mustache(m) => {
            builder.write_indent();
            expr::emit_inline_call(builder, scope, diagnostics, &m.path, &m.params, &m.hash)
        }
        AttrValue::Concat(concat) => {
            builder.write_indent();
            emit_concat(builder, scope, diagnostics, concat)
        }
    };
    builder.emit(";\n");
    flush_fallbacks(builder, fallbacks);
}

/// Template-literal-style string coercion for an interpolated attribute
/// value: `` `${…}${…}` ``.
fn emit_concat(builder: &mut Builder, scope: &ScopeTracker, diagnostics: &mut DiagnosticBag, concat: &ConcatStatement) -> Vec<String> {
    builder.emit("`");
    let mut fallbacks = Vec::new();
    for part in &concat.parts {
        match part {
            ConcatPart::Text(text) => builder.emit(&escape_template_text(text)),
            ConcatPart::Mustache(m) => {
                builder.emit("${");
                fallbacks.extend(expr::emit_inline_call(builder, scope, diagnostics, &m.path, &m.params, &m.hash));
                builder.emit("}");
            }
        }
    }
    builder.emit("`");
    fallbacks
}

fn escape_template_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '`' => out.push_str("\\`"),
            '\\' => out.push_str("\\\\"),
            '$' => out.push_str("\\$"),
            other => out.push(other),
        }
    }
    out
}

fn emit_attr_value_expr(builder: &mut Builder, scope: &ScopeTracker, diagnostics: &mut DiagnosticBag, value: &AttrValue) -> Vec<String> {
    match value {
        AttrValue::Text(text) => {
            builder.emit(&format!("{text:?}"));
            Vec::new()
        }
        AttrValue::Mustache(m) => expr::emit_inline_call(builder, scope, diagnostics, &m.path, &m.params, &m.hash),
        AttrValue::Concat(concat) => emit_concat(builder, scope, diagnostics, concat),
    }
}

/// Split a dotted element tag (`this.Foo`, `@foo.bar`, `MyComponent`) into a
/// path head/tail the same way a bare template path would be, so the tag
/// goes through the same classifier as any other callee. Per-segment
/// spans aren't available from an `ElementNode`'s flat tag string, so every
/// segment maps to the whole tag span.
fn tag_to_path(tag: &str, span: Span) -> PathExpression {
    let mut parts = tag.split('.');
    let first = parts.next().unwrap_or(tag);
    let head = if first == "this" {
        PathHead::This
    } else if let Some(name) = first.strip_prefix('@') {
        PathHead::AtName(name.to_string())
    } else {
        PathHead::Bare(first.to_string())
    };
    let tail = parts.map(|name| PathSegment { name: name.to_string(), span }).collect();
    PathExpression {
        head,
        tail,
        head_span: span,
        span,
    }
}

fn is_named_block(stmt: &Statement) -> bool {
    matches!(stmt, Statement::Element(e) if classify_tag(&e.tag) == TagKind::NamedBlock)
}

fn is_whitespace_only_text(stmt: &Statement) -> bool {
    matches!(stmt, Statement::Text(t) if t.chars.trim().is_empty())
}

/// Returns `(has_any_named_block, all_children_are_named_blocks_or_whitespace)`.
fn classify_children(children: &[Statement]) -> (bool, bool) {
    let has_named = children.iter().any(is_named_block);
    let all_ok = children.iter().all(|s| is_named_block(s) || is_whitespace_only_text(s));
    (has_named, all_ok)
}

fn emit_attrs_as_named_args(builder: &mut Builder, scope: &ScopeTracker, diagnostics: &mut DiagnosticBag, attrs: &[AttrNode]) -> Vec<String> {
    builder.emit("(");
    let fallbacks = if attrs.is_empty() {
        builder.emit("{}");
        Vec::new()
    } else {
        builder.emit("{ ");
        let mut fallbacks = Vec::new();
        for attr in attrs {
            builder.emit(&format!("{}: ", attr.name));
            fallbacks.extend(emit_attr_value_expr(builder, scope, diagnostics, &attr.value));
            builder.emit(", ");
        }
        builder.emit("}");
        fallbacks
    };
    builder.emit(")");
    fallbacks
}

/// Angle-bracket component invocation, including named-block children.
/// Its direct children must be all named blocks (`E-MIX` if mixed
/// with other content) or none, in which case the children form a single
/// `default` block.
fn emit_component(builder: &mut Builder, scope: &mut ScopeTracker, diagnostics: &mut DiagnosticBag, el: &ElementNode) {
    builder.write_indent();
    builder.emit("yield invokeBlock(resolve(");
    let callee = tag_to_path(&el.tag, el.tag_span);
    let mut fallbacks: Vec<String> = path::emit_path(builder, scope, &callee).into_iter().collect();
    builder.emit(")");
    fallbacks.extend(emit_attrs_as_named_args(builder, scope, diagnostics, &el.attributes));
    builder.emit(", {");

    let (has_named, all_ok) = classify_children(&el.children);
    if has_named && !all_ok {
        diagnostics.push(Diagnostic::new(ErrorCode::Mix, el.span));
    }

    let mut block_names = Vec::new();
    if has_named && all_ok {
        for child in &el.children {
            let Statement::Element(child_el) = child else { continue };
            let Some(name) = named_block_name(&child_el.tag) else { continue };
            builder.emit(" *");
            builder.emit(name);
            builder.emit("(");
            emit_block_param_list(builder, &child_el.block_params);
            builder.emit(") {\n");
            builder.push_indent();
            validate_block_params(diagnostics, &child_el.block_params);
            scope.enter(child_el.block_params.iter().map(|p| p.name.clone()));
            emit_statements(builder, scope, diagnostics, &child_el.children);
            scope.leave();
            builder.pop_indent();
            builder.write_indent();
            builder.emit("},");
            block_names.push(name.to_string());
        }
    } else {
        builder.emit(" *default(");
        emit_block_param_list(builder, &el.block_params);
        builder.emit(") {\n");
        builder.push_indent();
        validate_block_params(diagnostics, &el.block_params);
        scope.enter(el.block_params.iter().map(|p| p.name.clone()));
        emit_statements(builder, scope, diagnostics, &el.children);
        scope.leave();
        builder.pop_indent();
        builder.write_indent();
        builder.emit("},");
        block_names.push("default".to_string());
    }

    builder.emit(" }");
    for name in &block_names {
        builder.emit(", ");
        builder.emit(&format!("{name:?}"));
    }
    builder.emit(");\n");
    flush_fallbacks(builder, fallbacks);
}
