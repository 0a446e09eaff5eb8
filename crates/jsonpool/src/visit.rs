//! Single-dispatch over value discriminants.
//!
//! External consumers — the serializer, comparison, debugging aids — act on a
//! value through [`Visitor`] instead of duplicating discriminant switches at
//! every call site. The dispatch itself is one exhaustive `match` in
//! [`Arena::accept`]: adding a discriminant fails compilation there and in
//! every visitor, which is the closed, compile-time-checked contract the
//! model wants.

use crate::{
    arena::{Arena, ListId},
    value::Value,
};

/// Acts on exactly one discriminant of a [`Value`].
///
/// String and fragment arguments borrow from the arena for the duration of
/// the call only; a visitor must not retain them, since a later mutation or
/// reset would invalidate what they point at. Container callbacks receive the
/// [`ListId`] so the visitor can walk children through the same arena it was
/// dispatched from.
pub trait Visitor<'s> {
    /// Called for `Undefined`, the null marker.
    fn visit_null(&mut self);
    /// Called for `Bool`.
    fn visit_bool(&mut self, value: bool);
    /// Called for `PositiveInteger` with the stored value.
    fn visit_positive_integer(&mut self, magnitude: u64);
    /// Called for `NegativeInteger` with the stored magnitude.
    fn visit_negative_integer(&mut self, magnitude: u64);
    /// Called for `Float`.
    fn visit_float(&mut self, value: f64);
    /// Called for `String` with the resolved text.
    fn visit_string(&mut self, text: &str);
    /// Called for `RawJson` with the unparsed fragment.
    fn visit_raw_json(&mut self, fragment: &str);
    /// Called for `Array` with the container handle.
    fn visit_array(&mut self, array: ListId);
    /// Called for `Object` with the container handle.
    fn visit_object(&mut self, object: ListId);
}

impl<'s> Arena<'s> {
    /// Dispatches `value` to exactly one of the visitor's methods.
    pub fn accept<V: Visitor<'s> + ?Sized>(&self, value: Value<'s>, visitor: &mut V) {
        match value {
            Value::Undefined => visitor.visit_null(),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::PositiveInteger(magnitude) => visitor.visit_positive_integer(magnitude),
            Value::NegativeInteger(magnitude) => visitor.visit_negative_integer(magnitude),
            Value::Float(f) => visitor.visit_float(f),
            Value::String(s) => visitor.visit_string(self.resolve(s)),
            Value::RawJson(s) => visitor.visit_raw_json(self.resolve(s)),
            Value::Array(list) => visitor.visit_array(list),
            Value::Object(list) => visitor.visit_object(list),
        }
    }
}

/// Structural equality across two arenas.
///
/// Discriminants must match exactly (an integer 12 is not a float 12.0),
/// strings compare by resolved bytes, containers element-wise in insertion
/// order — the order the model preserves and iterates in.
#[allow(clippy::float_cmp)]
pub(crate) fn deep_eq<'a, 'b>(
    left_arena: &Arena<'a>,
    left: Value<'a>,
    right_arena: &Arena<'b>,
    right: Value<'b>,
) -> bool {
    match (left, right) {
        (Value::Undefined, Value::Undefined) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::PositiveInteger(a), Value::PositiveInteger(b))
        | (Value::NegativeInteger(a), Value::NegativeInteger(b)) => a == b,
        (Value::Float(a), Value::Float(b)) => a == b,
        (Value::String(a), Value::String(b)) | (Value::RawJson(a), Value::RawJson(b)) => {
            left_arena.resolve(a) == right_arena.resolve(b)
        }
        (Value::Array(a), Value::Array(b)) | (Value::Object(a), Value::Object(b)) => {
            lists_eq(left_arena, a, right_arena, b)
        }
        _ => false,
    }
}

fn lists_eq<'a, 'b>(
    left_arena: &Arena<'a>,
    left: ListId,
    right_arena: &Arena<'b>,
    right: ListId,
) -> bool {
    let mut left_iter = left_arena.iter(left);
    let mut right_iter = right_arena.iter(right);
    loop {
        match (left_iter.next(), right_iter.next()) {
            (None, None) => return true,
            (Some(a), Some(b)) => {
                let left_key = left_arena.key(a);
                let right_key = right_arena.key(b);
                if left_key != right_key {
                    return false;
                }
                if !deep_eq(left_arena, left_arena.value(a), right_arena, right_arena.value(b)) {
                    return false;
                }
            }
            _ => return false,
        }
    }
}
