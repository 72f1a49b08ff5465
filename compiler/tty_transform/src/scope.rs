//! Scope tracker.
//!
//! A stack of frames tracking which bare identifiers are locally in scope.
//! Consulted by the path classifier for the *first segment only* of a
//! dotted path — everything after that is always a member access.

use rustc_hash::FxHashSet;

pub(crate) struct ScopeTracker {
    base: FxHashSet<String>,
    frames: Vec<FxHashSet<String>>,
}

impl ScopeTracker {
    /// Create a tracker seeded with the options' `identifiersInScope`.
    pub(crate) fn new(identifiers_in_scope: impl IntoIterator<Item = String>) -> Self {
        ScopeTracker {
            base: identifiers_in_scope.into_iter().collect(),
            frames: Vec::new(),
        }
    }

    /// Push a frame binding `names` in addition to everything already in
    /// scope (block params on a block invocation or angle-bracket
    /// component, or a named-block's parameter list).
    pub(crate) fn enter(&mut self, names: impl IntoIterator<Item = String>) {
        self.frames.push(names.into_iter().collect());
    }

    pub(crate) fn leave(&mut self) {
        self.frames.pop();
    }

    /// True if `name` (the first segment of a dotted path) is bound by the
    /// base set or any active frame.
    pub(crate) fn has(&self, name: &str) -> bool {
        self.base.contains(name) || self.frames.iter().any(|f| f.contains(name))
    }
}
