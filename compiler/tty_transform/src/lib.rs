//! The template-to-typed-script transform.
//!
//! Walks an already-parsed template AST ([`tty_ir::ast::Template`]) and
//! emits a single self-invoking TypeScript expression whose structure makes
//! the host type checker produce template-semantic diagnostics, plus a
//! range map projecting offsets between the two. Parsing template text into
//! that AST, and type-checking the emitted code, are both external
//! collaborators this crate only emits against — see the module docs on
//! [`tty_ir`].

mod builder;
mod expr;
mod framer;
mod invariants;
mod path;
mod scope;
mod stmt;

use rustc_hash::FxHashSet;
use tty_diagnostic::{Diagnostic, RangeMap};
use tty_ir::ast::Template;

use framer::FramerOptions;

/// The transform's sole configuration surface, defaulted in one place.
#[derive(Default, Debug, Clone)]
pub struct TransformOptions {
    /// Literal type-parameter clause injected into the emitted function
    /// signature, e.g. `<T extends string>`.
    pub type_params: Option<String>,
    /// Type expression supplied as the argument to `ResolveContext<T>`.
    /// Defaults to `unknown` when absent.
    pub context_type: Option<String>,
    /// Statements injected before the template body (imports, side effects).
    pub preamble: Vec<String>,
    /// Names treated as locally in scope; any other bare identifier path
    /// falls back to a built-in namespace lookup.
    pub identifiers_in_scope: FxHashSet<String>,
    /// Byte offset of the template's embedding in a host file, if any.
    /// Carried through for the caller's own range-map composition; this
    /// crate's AST spans are already absolute offsets into the text it was
    /// given, so no internal shift is applied (see `DESIGN.md`).
    pub embedded_start: Option<u32>,
    pub embedded_end: Option<u32>,
}

/// The successful half of a [`TransformResult`]: emitted code plus its
/// range map.
#[derive(Debug)]
pub struct TransformOutput {
    /// A single self-invoking anonymous function, syntactically valid as an
    /// expression in the target language.
    pub code: String,
    pub range_map: RangeMap,
}

/// The outcome of a single [`template_to_typescript`] call.
#[derive(Debug)]
pub struct TransformResult {
    /// Present unless the transform could not produce a syntactically valid
    /// emission at all — in practice this transform always has
    /// best-effort text to emit, even alongside structural errors.
    pub result: Option<TransformOutput>,
    /// Ordered by `location.start` ascending.
    pub errors: Vec<Diagnostic>,
}

/// Transform `ast` (as parsed from `source`) into a typed-script program.
///
/// `source` is not walked directly — the AST already carries absolute byte
/// offsets into it — but its length is used for a diagnostic-only logging
/// span.
#[must_use]
pub fn template_to_typescript(source: &str, ast: &Template, options: &TransformOptions) -> TransformResult {
    let _span = tracing::info_span!("template_to_typescript", source_len = source.len()).entered();
    tracing::debug!("entering framer");

    let framer_options = FramerOptions {
        type_params: options.type_params.as_deref(),
        context_type: options.context_type.as_deref(),
        preamble: &options.preamble,
        identifiers_in_scope: options.identifiers_in_scope.iter().cloned().collect(),
    };
    let (code, range_map, diagnostics) = framer::frame(ast, &framer_options);
    let errors = diagnostics.finish();

    tracing::debug!(error_count = errors.len(), "transform finished");

    TransformResult {
        result: Some(TransformOutput { code, range_map }),
        errors,
    }
}
