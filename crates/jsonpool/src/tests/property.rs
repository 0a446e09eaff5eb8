use alloc::string::String;
use alloc::vec::Vec;

use quickcheck_macros::quickcheck;

use crate::{JsonDocument, Value};

#[quickcheck]
fn signed_integers_round_trip(value: i64) -> bool {
    let doc = JsonDocument::new();
    Value::integer(value).as_i64(doc.arena()) == value
}

#[quickcheck]
fn unsigned_integers_round_trip(value: u64) -> bool {
    let doc = JsonDocument::new();
    Value::PositiveInteger(value).as_u64(doc.arena()) == value
}

#[quickcheck]
fn floats_round_trip(value: f64) -> bool {
    let doc = JsonDocument::new();
    let stored = Value::Float(value).as_f64(doc.arena());
    stored == value || (stored.is_nan() && value.is_nan())
}

#[quickcheck]
fn interned_strings_resolve_to_their_source(texts: Vec<String>) -> bool {
    let mut doc = JsonDocument::new();
    texts.iter().all(|text| {
        let interned = doc.arena_mut().intern(text).unwrap();
        doc.arena().resolve(interned) == text.as_str()
    })
}

#[quickcheck]
fn reinterning_never_grows_the_arena(texts: Vec<String>) -> bool {
    let mut doc = JsonDocument::new();
    for text in &texts {
        doc.arena_mut().intern(text).unwrap();
    }
    let committed = doc.memory_usage();
    for text in &texts {
        doc.arena_mut().intern(text).unwrap();
    }
    doc.memory_usage() == committed
}

#[quickcheck]
fn committed_bytes_are_monotonic_under_removal(values: Vec<i64>, removals: Vec<usize>) -> bool {
    let mut doc = JsonDocument::new();
    let array = doc.to_array().unwrap();
    for &value in &values {
        doc.arena_mut().push(array, Value::integer(value)).unwrap();
    }
    let committed = doc.memory_usage();

    for &pick in &removals {
        let remaining = doc.arena().len(array);
        if remaining == 0 {
            break;
        }
        let slot = doc.arena().at(array, pick % remaining).unwrap();
        doc.arena_mut().remove(array, slot);
        if doc.memory_usage() != committed {
            return false;
        }
    }
    true
}

#[quickcheck]
fn documents_equal_their_own_import(values: Vec<i64>) -> bool {
    let mut src = JsonDocument::new();
    let array = src.to_array().unwrap();
    for &value in &values {
        src.arena_mut().push(array, Value::integer(value)).unwrap();
    }

    let mut dst = JsonDocument::new();
    let root = dst.import(&src, src.root()).unwrap();
    dst.set_root(root);
    dst == src
}
