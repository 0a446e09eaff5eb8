//! The externally visible root of the model.

use core::fmt;

use crate::{
    arena::{Arena, ListId},
    error::Error,
    serialize::write_compact,
    value::Value,
    visit::{self, Visitor},
};

/// Default nesting limit for a freshly constructed document.
pub const DEFAULT_NESTING_LIMIT: usize = 50;

/// A JSON document: one arena, one root value.
///
/// Everything reachable from the root — container slots, owned strings — is
/// transitively owned by the document's [`Arena`] and shares its lifetime.
/// Mutation always starts from the root or from a handle obtained by walking
/// it; there is no partial teardown, only [`JsonDocument::clear`] of the
/// whole document at once.
///
/// The lifetime parameter `'s` bounds every string the document borrows
/// instead of copying; a document that only holds owned or literal strings
/// can be `JsonDocument<'static>`.
///
/// # Examples
///
/// ```
/// use jsonpool::{JsonDocument, Value};
///
/// let mut doc = JsonDocument::new();
/// let obj = doc.to_object().unwrap();
/// doc.arena_mut().insert(obj, "ab", Value::integer(12)).unwrap();
/// doc.arena_mut().insert(obj, "cd", Value::integer(34)).unwrap();
///
/// assert_eq!(doc.arena().get(obj, "ab").as_i64(doc.arena()), 12);
/// assert_eq!(doc.to_string(), r#"{"ab":12,"cd":34}"#);
/// ```
#[derive(Debug)]
pub struct JsonDocument<'s> {
    arena: Arena<'s>,
    root: Value<'s>,
    nesting_limit: usize,
}

impl<'s> JsonDocument<'s> {
    /// An empty document over a growable arena with no initial reservation.
    #[must_use]
    pub fn new() -> Self {
        Self::from_arena(Arena::default())
    }

    /// An empty document over a growable arena that reserves
    /// `initial_capacity` bytes ahead.
    #[must_use]
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self::from_arena(Arena::growable(initial_capacity, Arena::DEFAULT_GROWTH))
    }

    /// An empty document over a fixed arena with a byte budget of `capacity`.
    ///
    /// Once the budget is exhausted every further allocating operation
    /// reports [`Error::OutOfMemory`] until the document is cleared.
    #[must_use]
    pub fn fixed(capacity: usize) -> Self {
        Self::from_arena(Arena::fixed(capacity))
    }

    fn from_arena(arena: Arena<'s>) -> Self {
        Self {
            arena,
            root: Value::Undefined,
            nesting_limit: DEFAULT_NESTING_LIMIT,
        }
    }

    /// The document's arena, for read access to containers and strings.
    #[must_use]
    pub fn arena(&self) -> &Arena<'s> {
        &self.arena
    }

    /// The document's arena, for container mutation and string interning.
    ///
    /// Handles passed to it must come from this document; the model forbids
    /// values that point into another document's arena.
    #[must_use]
    pub fn arena_mut(&mut self) -> &mut Arena<'s> {
        &mut self.arena
    }

    /// The root value. `Undefined` for a fresh or cleared document.
    #[must_use]
    pub fn root(&self) -> Value<'s> {
        self.root
    }

    /// Replaces the root value.
    ///
    /// Scalars are stored by value; a container handle aliases its container,
    /// and must have been created by this document's arena.
    pub fn set_root(&mut self, value: Value<'s>) {
        self.root = value;
    }

    /// Interns `text` and installs it as the root.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfMemory`] if the copy does not fit; the root is then left
    /// unchanged.
    pub fn set_root_str(&mut self, text: &str) -> Result<(), Error> {
        let text = self.arena.intern(text)?;
        self.root = Value::String(text);
        Ok(())
    }

    /// Clears the document and installs a fresh empty array at the root.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfMemory`] if even the container header does not fit.
    pub fn to_array(&mut self) -> Result<ListId, Error> {
        self.clear();
        let list = self.arena.create_list()?;
        self.root = Value::Array(list);
        Ok(list)
    }

    /// Clears the document and installs a fresh empty object at the root.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfMemory`] if even the container header does not fit.
    pub fn to_object(&mut self) -> Result<ListId, Error> {
        self.clear();
        let list = self.arena.create_list()?;
        self.root = Value::Object(list);
        Ok(list)
    }

    /// Resets the arena and the root in one destructive step.
    ///
    /// Every handle previously obtained from this document is invalidated;
    /// there is no finer-grained teardown.
    pub fn clear(&mut self) {
        self.arena.reset();
        self.root = Value::Undefined;
    }

    /// Bytes committed by the arena. The only capacity metric the model
    /// exposes.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.arena.size()
    }

    /// Maximum depth [`JsonDocument::import`] will copy.
    #[must_use]
    pub fn nesting_limit(&self) -> usize {
        self.nesting_limit
    }

    /// Overrides the nesting limit for this document only.
    pub fn set_nesting_limit(&mut self, limit: usize) {
        self.nesting_limit = limit;
    }

    /// Deep-copies `value` from another document into this one.
    ///
    /// Every reachable string — borrowed or owned — is interned into this
    /// arena and every container is rebuilt, so the returned value is fully
    /// independent of `src`. This is the only sanctioned way to move data
    /// between documents; storing a foreign handle directly would break both
    /// documents' lifetime guarantees.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfMemory`] if this document's arena cannot hold the copy —
    /// elements copied before the failure stay committed and readable.
    /// [`Error::NestingLimitExceeded`] if `value` nests deeper than
    /// [`JsonDocument::nesting_limit`].
    pub fn import<'t>(
        &mut self,
        src: &JsonDocument<'t>,
        value: Value<'t>,
    ) -> Result<Value<'s>, Error> {
        import_value(&mut self.arena, &src.arena, value, self.nesting_limit)
    }

    /// Dispatches the root to `visitor`. See [`Visitor`].
    pub fn visit<V: Visitor<'s> + ?Sized>(&self, visitor: &mut V) {
        self.arena.accept(self.root, visitor);
    }
}

fn import_value<'s, 't>(
    dst: &mut Arena<'s>,
    src: &Arena<'t>,
    value: Value<'t>,
    depth: usize,
) -> Result<Value<'s>, Error> {
    match value {
        Value::Undefined => Ok(Value::Undefined),
        Value::Bool(b) => Ok(Value::Bool(b)),
        Value::PositiveInteger(magnitude) => Ok(Value::PositiveInteger(magnitude)),
        Value::NegativeInteger(magnitude) => Ok(Value::NegativeInteger(magnitude)),
        Value::Float(f) => Ok(Value::Float(f)),
        Value::String(text) => Ok(Value::String(dst.intern(src.resolve(text))?)),
        Value::RawJson(fragment) => Ok(Value::RawJson(dst.intern(src.resolve(fragment))?)),
        Value::Array(list) => Ok(Value::Array(import_list(dst, src, list, depth, false)?)),
        Value::Object(list) => Ok(Value::Object(import_list(dst, src, list, depth, true)?)),
    }
}

fn import_list<'s, 't>(
    dst: &mut Arena<'s>,
    src: &Arena<'t>,
    list: ListId,
    depth: usize,
    keyed: bool,
) -> Result<ListId, Error> {
    if depth == 0 {
        return Err(Error::NestingLimitExceeded);
    }
    let copy = dst.create_list()?;
    for slot in src.iter(list) {
        let value = import_value(dst, src, src.value(slot), depth - 1)?;
        let target = dst.push(copy, value)?;
        if keyed {
            if let Some(key) = src.key(slot) {
                let key = dst.intern(key)?;
                dst.set_key(target, key);
            }
        }
    }
    Ok(copy)
}

impl Default for JsonDocument<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JsonDocument<'_> {
    /// Compact textual form of the whole document; `Undefined` prints as
    /// `null`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_compact(&self.arena, self.root, f)
    }
}

impl<'a, 'b> PartialEq<JsonDocument<'b>> for JsonDocument<'a> {
    /// Structural equality of the two roots: discriminants must match,
    /// strings compare by bytes, containers element-wise in insertion order.
    fn eq(&self, other: &JsonDocument<'b>) -> bool {
        visit::deep_eq(&self.arena, self.root, &other.arena, other.root)
    }
}
