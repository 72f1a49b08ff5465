use super::*;

fn s(start: u32, end: u32) -> Span {
    Span::new(start, end)
}

#[test]
fn projects_forward_and_backward() {
    let mut builder = RangeMapBuilder::new();
    builder.push(s(10, 13), s(40, 43)); // "foo" -> "foo"
    builder.push(s(20, 23), s(60, 70)); // "bar" -> "Γ.args.bar"
    let map = builder.finish();

    assert_eq!(map.original_to_emitted(11), Some(41));
    assert_eq!(map.emitted_to_original(41), Some(11));

    assert_eq!(map.original_to_emitted(21), Some(61));
    assert_eq!(map.emitted_to_original(65), Some(25));
}

#[test]
fn offsets_outside_any_entry_are_none() {
    let mut builder = RangeMapBuilder::new();
    builder.push(s(10, 13), s(40, 43));
    let map = builder.finish();

    assert_eq!(map.original_to_emitted(0), None);
    assert_eq!(map.original_to_emitted(100), None);
    assert_eq!(map.emitted_to_original(13), None); // in the gap, not the span
}

#[test]
fn point_spans_only_match_their_exact_offset() {
    let mut builder = RangeMapBuilder::new();
    builder.push(s(5, 5), s(9, 9));
    let map = builder.finish();

    assert_eq!(map.original_to_emitted(5), Some(9));
    assert_eq!(map.original_to_emitted(6), None);
}

#[test]
fn works_regardless_of_push_order() {
    let mut builder = RangeMapBuilder::new();
    builder.push(s(20, 23), s(60, 63));
    builder.push(s(10, 13), s(40, 43));
    builder.push(s(30, 33), s(80, 83));
    let map = builder.finish();

    assert_eq!(map.original_to_emitted(11), Some(41));
    assert_eq!(map.original_to_emitted(31), Some(81));
    assert_eq!(map.emitted_to_original(61), Some(21));
}

#[test]
fn entries_preserve_emission_order() {
    let mut builder = RangeMapBuilder::new();
    builder.push(s(20, 23), s(60, 63));
    builder.push(s(10, 13), s(40, 43));
    let map = builder.finish();

    assert_eq!(map.entries()[0].orig, s(20, 23));
    assert_eq!(map.entries()[1].orig, s(10, 13));
}
