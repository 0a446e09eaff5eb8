//! The tagged union at the heart of the document model.
//!
//! [`Value`] is a closed sum type with one variant per JSON discriminant.
//! Scalars carry their payload inline; strings carry a [`Str`] (borrowed or
//! arena-owned); arrays and objects carry a [`ListId`] into the arena. The
//! type is `Copy`, which makes the assignment asymmetry of the model fall out
//! of the representation: copying a scalar copies the payload, copying a
//! container variant copies the handle and aliases the container.

use crate::{
    arena::{Arena, ListId},
    number,
    string::Str,
};

/// One JSON value.
///
/// Integers are split by sign: `PositiveInteger` holds the value itself,
/// `NegativeInteger` holds the magnitude (absolute value), so the full
/// unsigned range is representable symmetrically and no signed payload field
/// is needed. Use [`Value::integer`] to encode and [`Value::as_i64`] to
/// decode; both ends round-trip every `i64` including `i64::MIN`.
///
/// A freshly created value is `Undefined`, which also serves as the null
/// marker. `RawJson` is an unparsed fragment passed through verbatim by the
/// serializer.
///
/// # Examples
///
/// ```
/// use jsonpool::{JsonDocument, Value};
///
/// let mut doc = JsonDocument::new();
/// doc.set_root(Value::integer(-42));
/// assert_eq!(doc.root().as_i64(doc.arena()), -42);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub enum Value<'s> {
    /// No value; also the null marker.
    #[default]
    Undefined,
    /// A boolean.
    Bool(bool),
    /// A non-negative integer, stored as its value.
    PositiveInteger(u64),
    /// A negative integer, stored as its magnitude.
    NegativeInteger(u64),
    /// A double-precision float.
    Float(f64),
    /// A string, borrowed or arena-owned.
    String(Str<'s>),
    /// An unparsed JSON fragment, serialized verbatim.
    RawJson(Str<'s>),
    /// An array; the payload aliases a container in the arena.
    Array(ListId),
    /// An object; the payload aliases a container in the arena.
    Object(ListId),
}

impl<'s> Value<'s> {
    /// Encodes a signed integer, choosing the discriminant by sign.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn integer(value: i64) -> Self {
        if value < 0 {
            Self::NegativeInteger(value.unsigned_abs())
        } else {
            Self::PositiveInteger(value as u64)
        }
    }

    /// Wraps a caller-owned string without copying it.
    ///
    /// The borrow ties the document to the source buffer; use
    /// [`Arena::intern`] when the source does not outlive the document.
    #[must_use]
    pub fn borrowed(text: &'s str) -> Self {
        Self::String(Str::Borrowed(text))
    }

    /// Returns `true` for `Undefined`.
    #[must_use]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns `true` for `Bool`.
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(..))
    }

    /// Returns `true` for either integer discriminant.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::PositiveInteger(..) | Self::NegativeInteger(..))
    }

    /// Returns `true` for any float-representable number: `Float` itself or
    /// either integer discriminant.
    #[must_use]
    pub fn is_float(&self) -> bool {
        matches!(
            self,
            Self::Float(..) | Self::PositiveInteger(..) | Self::NegativeInteger(..)
        )
    }

    /// Returns `true` for `String`.
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` for `RawJson`.
    #[must_use]
    pub fn is_raw_json(&self) -> bool {
        matches!(self, Self::RawJson(..))
    }

    /// Returns `true` for `Array`.
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` for `Object`.
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// Coerces to a signed integer; total, never fails.
    ///
    /// `Undefined`, `RawJson`, and containers yield 0; booleans yield 0 or 1;
    /// floats truncate; strings get a best-effort prefix parse, 0 when the
    /// text has no leading number.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn as_i64(&self, arena: &Arena<'s>) -> i64 {
        match *self {
            Self::Bool(b) => i64::from(b),
            Self::PositiveInteger(magnitude) => magnitude as i64,
            Self::NegativeInteger(magnitude) => (magnitude as i64).wrapping_neg(),
            Self::Float(f) => f as i64,
            Self::String(s) => number::parse_integer(arena.resolve(s)),
            Self::Undefined | Self::RawJson(..) | Self::Array(..) | Self::Object(..) => 0,
        }
    }

    /// Coerces to an unsigned integer; total, never fails.
    ///
    /// The negative discriminant two's-complement-negates its magnitude, the
    /// same reinterpretation a signed-to-unsigned cast performs.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn as_u64(&self, arena: &Arena<'s>) -> u64 {
        match *self {
            Self::Bool(b) => u64::from(b),
            Self::PositiveInteger(magnitude) => magnitude,
            Self::NegativeInteger(magnitude) => magnitude.wrapping_neg(),
            Self::Float(f) => f as u64,
            Self::String(s) => number::parse_integer(arena.resolve(s)) as u64,
            Self::Undefined | Self::RawJson(..) | Self::Array(..) | Self::Object(..) => 0,
        }
    }

    /// Coerces to a float; total, never fails.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self, arena: &Arena<'s>) -> f64 {
        match *self {
            Self::Bool(b) => f64::from(u8::from(b)),
            Self::PositiveInteger(magnitude) => magnitude as f64,
            Self::NegativeInteger(magnitude) => -(magnitude as f64),
            Self::Float(f) => f,
            Self::String(s) => number::parse_float(arena.resolve(s)),
            Self::Undefined | Self::RawJson(..) | Self::Array(..) | Self::Object(..) => 0.0,
        }
    }

    /// Coerces to a boolean: any value whose integer coercion is non-zero.
    #[must_use]
    pub fn as_bool(&self, arena: &Arena<'s>) -> bool {
        self.as_i64(arena) != 0
    }

    /// Returns the text of a `String` value, `None` for every other
    /// discriminant. Never fails or panics.
    #[must_use]
    pub fn as_str<'a>(&self, arena: &'a Arena<'s>) -> Option<&'a str> {
        match *self {
            Self::String(s) => Some(arena.resolve(s)),
            _ => None,
        }
    }

    /// Returns the fragment of a `RawJson` value, `None` otherwise.
    #[must_use]
    pub fn as_raw_json<'a>(&self, arena: &'a Arena<'s>) -> Option<&'a str> {
        match *self {
            Self::RawJson(s) => Some(arena.resolve(s)),
            _ => None,
        }
    }

    /// Returns the container handle of an `Array` value.
    #[must_use]
    pub fn as_array(&self) -> Option<ListId> {
        match *self {
            Self::Array(list) => Some(list),
            _ => None,
        }
    }

    /// Returns the container handle of an `Object` value.
    #[must_use]
    pub fn as_object(&self) -> Option<ListId> {
        match *self {
            Self::Object(list) => Some(list),
            _ => None,
        }
    }
}

impl From<bool> for Value<'_> {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value<'_> {
    fn from(value: i64) -> Self {
        Self::integer(value)
    }
}

impl From<u64> for Value<'_> {
    fn from(value: u64) -> Self {
        Self::PositiveInteger(value)
    }
}

impl From<f64> for Value<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
