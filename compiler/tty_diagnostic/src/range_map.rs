//! The bidirectional range map between original template offsets and emitted
//! program offsets.
//!
//! A single emitted token can correspond to a multi-segment original path
//! (e.g. `obj?.["foo-bar"]?.baz` all maps back to one `PathExpression`'s
//! span), so this is richer than a line/column source map. The
//! implementation follows the same discipline as a line-offset table: build
//! once from emission order, then support O(log n) lookups in both
//! directions via binary search over two independently sorted views of the
//! same entries.

use tty_ir::Span;

/// One correspondence between an origin span and the span of text emitted
/// for it.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct RangeMapEntry {
    pub orig: Span,
    pub emit: Span,
}

/// Accumulates `(orig, emit)` correspondences during emission; call
/// [`RangeMapBuilder::finish`] once to get a queryable [`RangeMap`].
///
/// The builder does not require entries to be pushed in sorted order by
/// either axis — `finish` builds both sorted indexes.
#[derive(Default, Debug)]
pub struct RangeMapBuilder {
    entries: Vec<RangeMapEntry>,
}

impl RangeMapBuilder {
    #[must_use]
    pub fn new() -> Self {
        RangeMapBuilder::default()
    }

    /// Record that `orig` (in the template) produced `emit` (in the emitted
    /// program).
    pub fn push(&mut self, orig: Span, emit: Span) {
        self.entries.push(RangeMapEntry { orig, emit });
    }

    /// Finalize into a queryable map. Builds an index sorted by origin start
    /// and one sorted by emit start.
    #[must_use]
    pub fn finish(self) -> RangeMap {
        let entries = self.entries;

        let mut by_orig: Vec<u32> = (0..entries.len() as u32).collect();
        by_orig.sort_by_key(|&i| entries[i as usize].orig.start);

        let mut by_emit: Vec<u32> = (0..entries.len() as u32).collect();
        by_emit.sort_by_key(|&i| entries[i as usize].emit.start);

        RangeMap {
            entries,
            by_orig,
            by_emit,
        }
    }
}

/// A finished, queryable range map, supporting lookups in both directions
/// (original-to-emitted and emitted-to-original).
#[derive(Default, Debug)]
pub struct RangeMap {
    entries: Vec<RangeMapEntry>,
    /// Indices into `entries`, sorted by `entries[i].orig.start`.
    by_orig: Vec<u32>,
    /// Indices into `entries`, sorted by `entries[i].emit.start`.
    by_emit: Vec<u32>,
}

impl RangeMap {
    /// All recorded correspondences, in emission order.
    #[must_use]
    pub fn entries(&self) -> &[RangeMapEntry] {
        &self.entries
    }

    /// Project a byte offset in the original template to the corresponding
    /// offset in the emitted program, if `offset` falls within some entry's
    /// origin span.
    #[must_use]
    pub fn original_to_emitted(&self, offset: u32) -> Option<u32> {
        let entry = Self::lookup(&self.entries, &self.by_orig, offset, |e| e.orig)?;
        let delta = offset - entry.orig.start;
        Some(entry.emit.start + delta.min(entry.emit.len()))
    }

    /// Project a byte offset in the emitted program back to the
    /// corresponding offset in the original template, if `offset` falls
    /// within some entry's emit span.
    #[must_use]
    pub fn emitted_to_original(&self, offset: u32) -> Option<u32> {
        let entry = Self::lookup(&self.entries, &self.by_emit, offset, |e| e.emit)?;
        let delta = offset - entry.emit.start;
        Some(entry.orig.start + delta.min(entry.orig.len()))
    }

    /// Binary-search `order` (indices into `entries`, sorted by
    /// `axis(entries[i]).start`) for the entry whose axis span contains
    /// `offset`.
    fn lookup(
        entries: &[RangeMapEntry],
        order: &[u32],
        offset: u32,
        axis: impl Fn(&RangeMapEntry) -> Span,
    ) -> Option<RangeMapEntry> {
        // Find the last entry whose axis.start <= offset, then confirm
        // offset is actually inside that span (spans are disjoint but not
        // contiguous — there are unmapped gaps for synthesized scaffolding).
        let idx = order.partition_point(|&i| axis(&entries[i as usize]).start <= offset);
        if idx == 0 {
            return None;
        }
        let entry = entries[order[idx - 1] as usize];
        let span = axis(&entry);
        if span.is_empty() {
            // Zero-length spans only match an exact offset.
            (span.start == offset).then_some(entry)
        } else if offset < span.end {
            Some(entry)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests;
