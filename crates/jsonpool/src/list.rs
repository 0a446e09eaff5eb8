//! Linked-list containers for arrays and objects.
//!
//! One structure serves both container kinds: a singly-linked chain of
//! arena-allocated slots. An array slot holds just a value; an object slot
//! additionally carries its key. Insertion order is preserved, key lookup is
//! a linear byte-exact scan, and duplicate keys may coexist — only string
//! bytes are deduplicated by the arena, never keys.
//!
//! Removing a slot unlinks it but never reclaims its storage; arena
//! allocation is monotonic and only a whole-arena reset gets the bytes back.

use crate::{
    arena::{Arena, ListId, SlotId},
    error::Error,
    string::Str,
    value::Value,
};

/// One container slot: an optional key, a value, and the tail link.
#[derive(Debug, Default)]
pub(crate) struct Slot<'s> {
    pub key: Option<Str<'s>>,
    pub value: Value<'s>,
    pub next: Option<SlotId>,
}

/// Container header: head and tail of the slot chain.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct ListData {
    pub head: Option<SlotId>,
    pub tail: Option<SlotId>,
}

impl<'s> Arena<'s> {
    /// Appends a fresh slot at the tail and returns its handle.
    ///
    /// The slot's value starts `Undefined` and its key unset; an object slot
    /// is not considered populated until its key is assigned.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfMemory`] if the slot does not fit a fixed arena's
    /// budget; the container is left unchanged.
    pub fn append(&mut self, list: ListId) -> Result<SlotId, Error> {
        let slot = self.alloc_slot()?;
        match self.list(list).tail {
            Some(tail) => {
                self.slot_mut(tail).next = Some(slot);
                self.list_mut(list).tail = Some(slot);
            }
            None => {
                let data = self.list_mut(list);
                data.head = Some(slot);
                data.tail = Some(slot);
            }
        }
        Ok(slot)
    }

    /// Appends `value` to an array.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfMemory`] if the slot allocation fails.
    pub fn push(&mut self, list: ListId, value: Value<'s>) -> Result<SlotId, Error> {
        let slot = self.append(list)?;
        self.slot_mut(slot).value = value;
        Ok(slot)
    }

    /// Appends a key/value pair without looking for an existing key, so
    /// duplicate keys can coexist the way a permissive parser produces them.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfMemory`] if the slot allocation fails.
    pub fn append_entry(
        &mut self,
        list: ListId,
        key: Str<'s>,
        value: Value<'s>,
    ) -> Result<SlotId, Error> {
        let slot = self.append(list)?;
        let data = self.slot_mut(slot);
        data.key = Some(key);
        data.value = value;
        Ok(slot)
    }

    /// Unlinks `slot` from `list`.
    ///
    /// O(n) to find the predecessor, O(1) to unlink. The slot's storage is
    /// not reclaimed: the logical size shrinks but [`Arena::size`] does not —
    /// an explicit memory characteristic of the model. Removing a slot that
    /// is not linked in `list` is a no-op.
    pub fn remove(&mut self, list: ListId, slot: SlotId) {
        let data = *self.list(list);
        let Some(head) = data.head else { return };

        let next = self.slot(slot).next;
        if head == slot {
            let data = self.list_mut(list);
            data.head = next;
            if data.tail == Some(slot) {
                data.tail = None;
            }
            return;
        }

        let mut cursor = head;
        while let Some(follower) = self.slot(cursor).next {
            if follower == slot {
                self.slot_mut(cursor).next = next;
                if self.list(list).tail == Some(slot) {
                    self.list_mut(list).tail = Some(cursor);
                }
                return;
            }
            cursor = follower;
        }
    }

    /// Number of linked slots. O(n): the length is not cached, so callers
    /// that query it repeatedly should cache it themselves.
    #[must_use]
    pub fn len(&self, list: ListId) -> usize {
        self.iter(list).count()
    }

    /// Returns `true` when the container has no linked slots.
    #[must_use]
    pub fn is_empty(&self, list: ListId) -> bool {
        self.list(list).head.is_none()
    }

    /// Walks to the slot at `index` from the head. O(n), no random access.
    #[must_use]
    pub fn at(&self, list: ListId, index: usize) -> Option<SlotId> {
        self.iter(list).nth(index)
    }

    /// Finds the first slot whose key equals `key`, byte for byte.
    ///
    /// No normalization, no case folding; with duplicate keys the first in
    /// insertion order wins.
    #[must_use]
    pub fn find(&self, list: ListId, key: &str) -> Option<SlotId> {
        self.iter(list).find(|&slot| {
            self.slot(slot)
                .key
                .is_some_and(|stored| self.resolve(stored) == key)
        })
    }

    /// Read-only key lookup: the value under `key`, or `Undefined` when the
    /// key is absent. Never creates a slot.
    #[must_use]
    pub fn get(&self, list: ListId, key: &str) -> Value<'s> {
        self.find(list, key)
            .map_or(Value::Undefined, |slot| self.slot(slot).value)
    }

    /// Write-side key lookup with auto-vivification: returns the slot under
    /// `key`, appending one (with the key interned into the arena) when it is
    /// absent.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfMemory`] if vivifying the slot or interning the key
    /// fails; an existing slot is returned without allocating.
    pub fn entry(&mut self, list: ListId, key: &str) -> Result<SlotId, Error> {
        if let Some(slot) = self.find(list, key) {
            return Ok(slot);
        }
        let key = self.intern(key)?;
        self.append_entry(list, key, Value::Undefined)
    }

    /// Like [`Arena::entry`], but a vivified slot borrows `key` instead of
    /// copying it. The borrow must outlive the document.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfMemory`] if vivifying the slot fails.
    pub fn entry_borrowed(&mut self, list: ListId, key: &'s str) -> Result<SlotId, Error> {
        if let Some(slot) = self.find(list, key) {
            return Ok(slot);
        }
        self.append_entry(list, Str::Borrowed(key), Value::Undefined)
    }

    /// Sets the value under `key`, overwriting the first matching entry or
    /// appending a new one.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfMemory`] if a new entry had to be vivified and failed.
    pub fn insert(&mut self, list: ListId, key: &str, value: Value<'s>) -> Result<SlotId, Error> {
        let slot = self.entry(list, key)?;
        self.slot_mut(slot).value = value;
        Ok(slot)
    }

    /// Reads the value held by `slot`.
    #[must_use]
    pub fn value(&self, slot: SlotId) -> Value<'s> {
        self.slot(slot).value
    }

    /// Overwrites the value held by `slot`.
    ///
    /// The write replaces discriminant and payload together; scalars are
    /// stored by value, container handles by reference.
    pub fn set_value(&mut self, slot: SlotId, value: Value<'s>) {
        self.slot_mut(slot).value = value;
    }

    /// Reads the key of `slot`, `None` for array slots.
    #[must_use]
    pub fn key(&self, slot: SlotId) -> Option<&str> {
        self.slot(slot).key.map(|key| self.resolve(key))
    }

    /// Assigns the key of `slot`.
    pub fn set_key(&mut self, slot: SlotId, key: Str<'s>) {
        self.slot_mut(slot).key = Some(key);
    }

    /// Forward iterator over the slots of a container, in insertion order.
    ///
    /// Bulk advance is `Iterator::nth`, costing O(n) like every other walk.
    #[must_use]
    pub fn iter(&self, list: ListId) -> ListIter<'_, 's> {
        ListIter {
            arena: self,
            cursor: self.list(list).head,
        }
    }

    /// Iterator over array element values, in insertion order.
    #[must_use]
    pub fn values(&self, list: ListId) -> ArrayValues<'_, 's> {
        ArrayValues {
            inner: self.iter(list),
        }
    }

    /// Iterator over object `(key, value)` pairs, in insertion order.
    ///
    /// Slots whose key was never assigned surface an empty key.
    #[must_use]
    pub fn entries(&self, list: ListId) -> ObjectEntries<'_, 's> {
        ObjectEntries {
            inner: self.iter(list),
        }
    }
}

/// Forward-only iterator over container slots.
///
/// Yields [`SlotId`]s so that callers can read or mutate through the arena,
/// and compares equal to another iterator at the same position — the
/// begin/end comparison idiom of the source model.
#[derive(Debug, Clone)]
pub struct ListIter<'a, 's> {
    arena: &'a Arena<'s>,
    cursor: Option<SlotId>,
}

impl Iterator for ListIter<'_, '_> {
    type Item = SlotId;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.cursor?;
        self.cursor = self.arena.slot(slot).next;
        Some(slot)
    }
}

impl PartialEq for ListIter<'_, '_> {
    fn eq(&self, other: &Self) -> bool {
        self.cursor == other.cursor
    }
}

/// Iterator over array element values.
#[derive(Debug, Clone)]
pub struct ArrayValues<'a, 's> {
    inner: ListIter<'a, 's>,
}

impl<'s> Iterator for ArrayValues<'_, 's> {
    type Item = Value<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.inner.next()?;
        Some(self.inner.arena.slot(slot).value)
    }
}

/// Iterator over object key/value pairs.
#[derive(Debug, Clone)]
pub struct ObjectEntries<'a, 's> {
    inner: ListIter<'a, 's>,
}

impl<'a, 's> Iterator for ObjectEntries<'a, 's> {
    type Item = (&'a str, Value<'s>);

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.inner.next()?;
        let data = self.inner.arena.slot(slot);
        let key = data.key.map_or("", |key| self.inner.arena.resolve(key));
        Some((key, data.value))
    }
}
