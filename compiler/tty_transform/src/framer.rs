//! Template framer.
//!
//! Wraps the emitted body in the fixed boilerplate that binds the runtime
//! namespace, the context parameter, and any caller-supplied type params —
//! the one part of this transform with no per-template variation beyond a
//! handful of substitutions.

use tty_ir::ast::Template;
use tty_diagnostic::{DiagnosticBag, RangeMap};

use crate::builder::Builder;
use crate::scope::ScopeTracker;
use crate::stmt;

/// Name of the runtime module the emitted code imports against.
const RUNTIME_MODULE: &str = "@typed-templates/runtime/-private/dsl";

/// Inputs the framer needs beyond the template body itself.
pub(crate) struct FramerOptions<'a> {
    pub type_params: Option<&'a str>,
    pub context_type: Option<&'a str>,
    pub preamble: &'a [String],
    pub identifiers_in_scope: Vec<String>,
}

/// Produce the complete wrapped program and its range map for `template`.
pub(crate) fn frame(template: &Template, options: &FramerOptions<'_>) -> (String, RangeMap, DiagnosticBag) {
    let mut builder = Builder::new();
    let mut scope = ScopeTracker::new(options.identifiers_in_scope.iter().cloned());
    let mut diagnostics = DiagnosticBag::new();

    builder.emit("(() => {\n");
    builder.push_indent();

    for line in options.preamble {
        builder.write_indent();
        builder.emit(line);
        builder.emit("\n");
    }

    builder.write_indent();
    builder.emit(&format!("let χ!: typeof import(\"{RUNTIME_MODULE}\");\n"));

    builder.write_indent();
    builder.emit("return χ.template(function*");
    if let Some(type_params) = options.type_params {
        builder.emit(type_params);
    }
    builder.emit("(Γ: import(\"");
    builder.emit(RUNTIME_MODULE);
    builder.emit("\").ResolveContext<");
    builder.emit(options.context_type.unwrap_or("unknown"));
    builder.emit(">) {\n");
    builder.push_indent();

    builder.write_indent();
    builder.emit("Γ;\n");

    stmt::emit_statements(&mut builder, &mut scope, &mut diagnostics, &template.body);

    builder.pop_indent();
    builder.write_indent();
    builder.emit("});\n");

    builder.pop_indent();
    builder.write_indent();
    builder.emit("})()");

    let (code, map) = builder.finish();
    (code, map, diagnostics)
}
