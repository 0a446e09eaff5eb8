use alloc::string::{String, ToString};
use alloc::vec::Vec;
use alloc::vec;

use crate::{JsonDocument, Value};

#[test]
fn object_iterates_in_insertion_order_and_mutates_through_the_iterator() {
    let mut doc = JsonDocument::new();
    let obj = doc.to_object().unwrap();
    doc.arena_mut().insert(obj, "ab", Value::integer(12)).unwrap();
    doc.arena_mut().insert(obj, "cd", Value::integer(34)).unwrap();

    let entries: Vec<(String, i64)> = doc
        .arena()
        .entries(obj)
        .map(|(key, value)| (key.to_string(), value.as_i64(doc.arena())))
        .collect();
    assert_eq!(entries, vec![("ab".to_string(), 12), ("cd".to_string(), 34)]);

    // Mutate the first entry through its iterator-yielded slot.
    let first = doc.arena().iter(obj).next().unwrap();
    doc.arena_mut().set_value(first, Value::Float(1.2));
    assert_eq!(doc.arena().get(obj, "ab").as_f64(doc.arena()), 1.2);
}

#[test]
fn removing_the_middle_element_keeps_committed_bytes() {
    let mut doc = JsonDocument::new();
    let array = doc.to_array().unwrap();
    for i in 1..=3 {
        doc.arena_mut().push(array, Value::integer(i)).unwrap();
    }
    let committed = doc.memory_usage();

    let middle = doc.arena().at(array, 1).unwrap();
    doc.arena_mut().remove(array, middle);

    assert_eq!(doc.arena().len(array), 2);
    let values: Vec<i64> = doc
        .arena()
        .values(array)
        .map(|v| v.as_i64(doc.arena()))
        .collect();
    assert_eq!(values, vec![1, 3]);
    assert_eq!(doc.memory_usage(), committed);
}

#[test]
fn removing_head_and_tail_keeps_the_chain_consistent() {
    let mut doc = JsonDocument::new();
    let array = doc.to_array().unwrap();
    let head = doc.arena_mut().push(array, Value::integer(1)).unwrap();
    doc.arena_mut().push(array, Value::integer(2)).unwrap();
    let tail = doc.arena_mut().push(array, Value::integer(3)).unwrap();

    doc.arena_mut().remove(array, head);
    doc.arena_mut().remove(array, tail);
    assert_eq!(doc.arena().len(array), 1);

    // Appending after a tail removal must link at the new tail.
    doc.arena_mut().push(array, Value::integer(4)).unwrap();
    let values: Vec<i64> = doc
        .arena()
        .values(array)
        .map(|v| v.as_i64(doc.arena()))
        .collect();
    assert_eq!(values, vec![2, 4]);
}

#[test]
fn removing_the_only_element_empties_the_container() {
    let mut doc = JsonDocument::new();
    let array = doc.to_array().unwrap();
    let only = doc.arena_mut().push(array, Value::integer(1)).unwrap();
    doc.arena_mut().remove(array, only);

    assert!(doc.arena().is_empty(array));
    assert_eq!(doc.arena().iter(array).next(), None);

    doc.arena_mut().push(array, Value::integer(2)).unwrap();
    assert_eq!(doc.arena().len(array), 1);
}

#[test]
fn read_only_lookup_never_vivifies() {
    let mut doc = JsonDocument::new();
    let obj = doc.to_object().unwrap();
    assert!(doc.arena().get(obj, "missing").is_undefined());
    assert_eq!(doc.arena().len(obj), 0);
}

#[test]
fn entry_vivifies_exactly_once() {
    let mut doc = JsonDocument::new();
    let obj = doc.to_object().unwrap();

    let slot = doc.arena_mut().entry(obj, "level").unwrap();
    assert!(doc.arena().value(slot).is_undefined());
    assert_eq!(doc.arena().len(obj), 1);

    let again = doc.arena_mut().entry(obj, "level").unwrap();
    assert_eq!(slot, again);
    assert_eq!(doc.arena().len(obj), 1);
}

#[test]
fn insert_overwrites_the_first_match() {
    let mut doc = JsonDocument::new();
    let obj = doc.to_object().unwrap();
    doc.arena_mut().insert(obj, "k", Value::integer(1)).unwrap();
    doc.arena_mut().insert(obj, "k", Value::integer(2)).unwrap();

    assert_eq!(doc.arena().len(obj), 1);
    assert_eq!(doc.arena().get(obj, "k").as_i64(doc.arena()), 2);
}

#[test]
fn duplicate_keys_may_coexist_and_lookup_takes_the_first() {
    let mut doc = JsonDocument::new();
    let obj = doc.to_object().unwrap();
    let key = doc.arena_mut().intern("k").unwrap();
    doc.arena_mut().append_entry(obj, key, Value::integer(1)).unwrap();
    doc.arena_mut().append_entry(obj, key, Value::integer(2)).unwrap();

    assert_eq!(doc.arena().len(obj), 2);
    assert_eq!(doc.arena().get(obj, "k").as_i64(doc.arena()), 1);
}

#[test]
fn key_comparison_is_byte_exact() {
    let mut doc = JsonDocument::new();
    let obj = doc.to_object().unwrap();
    doc.arena_mut().insert(obj, "Key", Value::integer(1)).unwrap();

    assert!(doc.arena().get(obj, "key").is_undefined());
    assert!(doc.arena().get(obj, "Key ").is_undefined());
    assert_eq!(doc.arena().get(obj, "Key").as_i64(doc.arena()), 1);
}

#[test]
fn iterators_compare_by_position_and_bulk_advance() {
    let mut doc = JsonDocument::new();
    let array = doc.to_array().unwrap();
    for i in 0..4 {
        doc.arena_mut().push(array, Value::integer(i)).unwrap();
    }

    let mut a = doc.arena().iter(array);
    let b = doc.arena().iter(array);
    assert!(a == b);

    a.next();
    assert!(a != b);

    // `nth` is the bulk advance: skip two more, land on the last slot.
    let last = a.nth(2).unwrap();
    assert_eq!(doc.arena().value(last).as_i64(doc.arena()), 3);

    let exhausted = doc.arena().iter(array).nth(7);
    assert_eq!(exhausted, None);
}

#[test]
fn borrowed_keys_avoid_interning() {
    let mut doc = JsonDocument::new();
    let obj = doc.to_object().unwrap();
    let before = doc.memory_usage();
    let slot = doc.arena_mut().entry_borrowed(obj, "config").unwrap();
    doc.arena_mut().set_value(slot, Value::Bool(true));

    // Only the slot itself was charged, never the key bytes.
    assert!(doc.memory_usage() > before);
    assert_eq!(doc.arena().key(slot), Some("config"));
    assert!(doc.arena().get(obj, "config").as_bool(doc.arena()));
}
