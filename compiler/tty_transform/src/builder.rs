//! Range-mapped text builder.
//!
//! An append-only buffer with a current byte offset. Not re-entrant: callers
//! own one `Builder` per transform call and thread `&mut` through the
//! expression, statement, and framer emitters.

use tty_ir::Span;
use tty_diagnostic::{RangeMap, RangeMapBuilder};

/// Width of one indent level, in spaces. Fixed and otherwise opaque to
/// callers — two spaces is simply the convention this emitter uses.
const INDENT_WIDTH: usize = 2;

pub(crate) struct Builder {
    code: String,
    indent: u32,
    map: RangeMapBuilder,
}

impl Builder {
    pub(crate) fn new() -> Self {
        Builder {
            code: String::new(),
            indent: 0,
            map: RangeMapBuilder::new(),
        }
    }

    /// Current byte offset in the emitted buffer.
    pub(crate) fn offset(&self) -> u32 {
        // Template sources (and therefore their emitted programs) are not
        // expected to approach u32::MAX bytes.
        u32::try_from(self.code.len()).unwrap_or(u32::MAX)
    }

    /// Append `text` with no range-map entry (synthesized scaffolding).
    pub(crate) fn emit(&mut self, text: &str) {
        self.code.push_str(text);
    }

    /// Append `text`, recording a mapping from `orig` to the span just
    /// emitted.
    pub(crate) fn emit_mapped(&mut self, text: &str, orig: Span) {
        let start = self.offset();
        self.code.push_str(text);
        let end = self.offset();
        self.map.push(orig, Span::new(start, end));
    }

    /// Append `text`, prefixing each non-empty line with the current indent.
    pub(crate) fn emit_indented(&mut self, text: &str) {
        let prefix = " ".repeat(self.indent as usize * INDENT_WIDTH);
        let mut first = true;
        for line in text.split('\n') {
            if !first {
                self.code.push('\n');
            }
            first = false;
            if line.is_empty() {
                continue;
            }
            self.code.push_str(&prefix);
            self.code.push_str(line);
        }
    }

    /// Write the current indent prefix (for building a line piecewise with
    /// `emit`/`emit_mapped` calls after it).
    pub(crate) fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.code.push_str(&" ".repeat(INDENT_WIDTH));
        }
    }

    pub(crate) fn push_indent(&mut self) {
        self.indent += 1;
    }

    pub(crate) fn pop_indent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    /// Consume the builder, returning the emitted code and the finished
    /// range map.
    pub(crate) fn finish(self) -> (String, RangeMap) {
        (self.code, self.map.finish())
    }
}
