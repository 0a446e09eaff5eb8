use alloc::string::String;

use crate::{Error, JsonDocument, Value};

#[test]
fn integers_are_copied_by_value() {
    let mut doc = JsonDocument::new();
    let array = doc.to_array().unwrap();
    let a = doc.arena_mut().push(array, Value::integer(123)).unwrap();

    let copied = doc.arena().value(a);
    let b = doc.arena_mut().push(array, copied).unwrap();
    doc.arena_mut().set_value(a, Value::integer(456));

    assert_eq!(doc.arena().value(b).as_i64(doc.arena()), 123);
}

#[test]
fn floats_are_copied_by_value() {
    let mut doc = JsonDocument::new();
    let array = doc.to_array().unwrap();
    let a = doc.arena_mut().push(array, Value::Float(123.45)).unwrap();

    let copied = doc.arena().value(a);
    let b = doc.arena_mut().push(array, copied).unwrap();
    doc.arena_mut().set_value(a, Value::Float(456.78));

    assert_eq!(doc.arena().value(b).as_f64(doc.arena()), 123.45);
}

#[test]
fn booleans_are_copied_by_value() {
    let mut doc = JsonDocument::new();
    let array = doc.to_array().unwrap();
    let a = doc.arena_mut().push(array, Value::Bool(true)).unwrap();

    let copied = doc.arena().value(a);
    let b = doc.arena_mut().push(array, copied).unwrap();
    doc.arena_mut().set_value(a, Value::Bool(false));

    assert!(doc.arena().value(b).as_bool(doc.arena()));
}

#[test]
fn strings_are_copied_by_value() {
    let mut doc = JsonDocument::new();
    let array = doc.to_array().unwrap();
    let hello = doc.arena_mut().intern("hello").unwrap();
    let a = doc.arena_mut().push(array, Value::String(hello)).unwrap();

    let copied = doc.arena().value(a);
    let b = doc.arena_mut().push(array, copied).unwrap();
    let world = doc.arena_mut().intern("world").unwrap();
    doc.arena_mut().set_value(a, Value::String(world));

    assert_eq!(doc.arena().value(b).as_str(doc.arena()), Some("hello"));
}

#[test]
fn containers_are_copied_by_reference() {
    let mut doc = JsonDocument::new();
    let root = doc.to_array().unwrap();
    let shared = doc.arena_mut().create_list().unwrap();
    let a = doc.arena_mut().push(root, Value::Object(shared)).unwrap();
    let b = doc.arena_mut().push(root, Value::Object(shared)).unwrap();

    // Mutating through the shared handle is visible through both values.
    doc.arena_mut()
        .insert(shared, "hello", Value::borrowed("world"))
        .unwrap();

    let via_a = doc.arena().value(a).as_object().unwrap();
    let via_b = doc.arena().value(b).as_object().unwrap();
    assert_eq!(doc.arena().len(via_a), 1);
    assert_eq!(doc.arena().get(via_b, "hello").as_str(doc.arena()), Some("world"));
}

#[test]
fn imported_strings_survive_their_source() {
    let mut source_text = String::from("hello");

    let mut first = JsonDocument::new();
    first.set_root_str(&source_text).unwrap();

    let mut second = JsonDocument::new();
    let root = second.import(&first, first.root()).unwrap();
    second.set_root(root);

    // Mutate the original buffer and drop the source document entirely.
    source_text.clear();
    source_text.push_str("junk");
    drop(first);

    assert_eq!(second.root().as_str(second.arena()), Some("hello"));
}

#[test]
fn import_rebuilds_nested_containers() {
    let mut src = JsonDocument::new();
    let obj = src.to_object().unwrap();
    let list = src.arena_mut().create_list().unwrap();
    src.arena_mut().push(list, Value::integer(1)).unwrap();
    src.arena_mut().push(list, Value::integer(2)).unwrap();
    src.arena_mut().insert(obj, "items", Value::Array(list)).unwrap();
    src.arena_mut().insert(obj, "name", Value::borrowed("probe")).unwrap();

    let mut dst = JsonDocument::new();
    let root = dst.import(&src, src.root()).unwrap();
    dst.set_root(root);

    assert!(dst == src);

    // The copy aliases nothing: growing the source leaves it behind.
    src.arena_mut().push(list, Value::integer(3)).unwrap();
    assert!(dst != src);
    let items = dst
        .arena()
        .get(dst.root().as_object().unwrap(), "items")
        .as_array()
        .unwrap();
    assert_eq!(dst.arena().len(items), 2);
}

#[test]
fn import_enforces_the_nesting_limit() {
    let mut src = JsonDocument::new();
    let mut current = src.to_array().unwrap();
    for _ in 0..60 {
        let inner = src.arena_mut().create_list().unwrap();
        src.arena_mut().push(current, Value::Array(inner)).unwrap();
        current = inner;
    }

    let mut dst = JsonDocument::new();
    assert!(matches!(
        dst.import(&src, src.root()),
        Err(Error::NestingLimitExceeded)
    ));

    let mut relaxed = JsonDocument::new();
    relaxed.set_nesting_limit(100);
    assert!(relaxed.import(&src, src.root()).is_ok());
}

#[test]
fn import_failure_leaves_the_committed_prefix_readable() {
    let mut src = JsonDocument::new();
    let array = src.to_array().unwrap();
    for i in 0..32 {
        src.arena_mut().push(array, Value::integer(i)).unwrap();
    }

    // Budget for the container header and a handful of slots, not all 32.
    let budget = {
        let mut probe = JsonDocument::new();
        let list = probe.to_array().unwrap();
        for i in 0..4 {
            probe.arena_mut().push(list, Value::integer(i)).unwrap();
        }
        probe.memory_usage()
    };

    let mut dst = JsonDocument::fixed(budget);
    assert!(matches!(
        dst.import(&src, src.root()),
        Err(Error::OutOfMemory)
    ));

    // The partial copy stays valid even though the aggregate failed.
    assert!(dst.memory_usage() > 0);
    assert_eq!(dst.memory_usage(), budget);
}
