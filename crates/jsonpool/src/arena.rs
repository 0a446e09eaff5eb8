//! The pool allocator behind every document.
//!
//! All container slots, container headers, and owned string bytes live in one
//! [`Arena`]. Allocation is monotonic: nothing is reclaimed individually, and
//! [`Arena::reset`] tears everything down at once. Handles into the arena are
//! indices stamped with the arena's generation, so a handle that survives a
//! `reset` is detected in debug builds instead of dangling.

use alloc::{boxed::Box, string::String, vec::Vec};

use crate::{
    error::Error,
    list::{ListData, Slot},
    string::Str,
};

/// Byte cost charged per container slot.
const SLOT_BYTES: usize = size_of::<Slot<'static>>();
/// Byte cost charged per container header.
const LIST_BYTES: usize = size_of::<ListData>();

macro_rules! handle {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        ///
        /// A handle is an index stamped with the generation of the arena that
        /// issued it. It stays valid until that arena is reset; afterwards any
        /// use trips a debug assertion. Handles from one document must never
        /// be stored in another.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            index: u32,
            generation: u32,
        }

        impl $name {
            pub(crate) fn new(index: u32, generation: u32) -> Self {
                Self { index, generation }
            }

            pub(crate) fn index(self) -> usize {
                self.index as usize
            }

            pub(crate) fn generation(self) -> u32 {
                self.generation
            }
        }
    };
}

handle! {
    /// Handle to one container slot.
    SlotId
}
handle! {
    /// Handle to one container (array or object).
    ListId
}
handle! {
    /// Handle to one arena-owned string.
    StrId
}

/// Pool allocator for one document.
///
/// Two flavors share this type: [`Arena::fixed`] enforces a byte budget and
/// fails with [`Error::OutOfMemory`] once it would be exceeded, while
/// [`Arena::growable`] grows on demand and fails only if the global allocator
/// does. Either way allocation is monotonic — removing a container slot never
/// shrinks [`Arena::size`], only [`Arena::reset`] does.
#[derive(Debug)]
pub struct Arena<'s> {
    slots: Vec<Slot<'s>>,
    lists: Vec<ListData>,
    strings: Vec<Box<str>>,
    string_bytes: usize,
    limit: Option<usize>,
    growth: usize,
    generation: u32,
}

impl<'s> Arena<'s> {
    /// Default growth increment of the growable flavor, in bytes.
    pub const DEFAULT_GROWTH: usize = 256;

    /// Creates a fixed-capacity arena with a byte budget of `capacity`.
    ///
    /// Slots, container headers, and owned string bytes all draw on the same
    /// budget; the allocation that would cross it fails, leaving everything
    /// allocated before it valid.
    #[must_use]
    pub fn fixed(capacity: usize) -> Self {
        Self {
            slots: Vec::new(),
            lists: Vec::new(),
            strings: Vec::new(),
            string_bytes: 0,
            limit: Some(capacity),
            growth: Self::DEFAULT_GROWTH,
            generation: 0,
        }
    }

    /// Creates a growable arena.
    ///
    /// `initial_capacity` is a reservation hint in bytes; `growth_increment`
    /// is the step, in bytes, by which backing storage is extended when a
    /// store runs full.
    #[must_use]
    pub fn growable(initial_capacity: usize, growth_increment: usize) -> Self {
        Self {
            slots: Vec::with_capacity(initial_capacity / SLOT_BYTES),
            lists: Vec::new(),
            strings: Vec::new(),
            string_bytes: 0,
            limit: None,
            growth: growth_increment.max(1),
            generation: 0,
        }
    }

    /// Returns whether this is the fixed-capacity flavor.
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        self.limit.is_some()
    }

    /// Returns the byte budget of a fixed arena, or `None` when growable.
    #[must_use]
    pub fn capacity(&self) -> Option<usize> {
        self.limit
    }

    /// Bytes currently committed.
    ///
    /// Monotonic between resets: removing container slots does not refund
    /// their bytes. Intended for memory-usage reporting, not capacity
    /// planning.
    #[must_use]
    pub fn size(&self) -> usize {
        self.slots.len() * SLOT_BYTES + self.lists.len() * LIST_BYTES + self.string_bytes
    }

    /// Discards every allocation at once and invalidates all handles.
    ///
    /// The growable flavor releases its backing memory to the allocator; the
    /// fixed flavor keeps its reserve and rewinds the accounting. Either way
    /// the generation advances, so stale handles are caught by the debug
    /// assertions on every access.
    pub fn reset(&mut self) {
        if self.is_fixed() {
            self.slots.clear();
            self.lists.clear();
            self.strings.clear();
        } else {
            self.slots = Vec::new();
            self.lists = Vec::new();
            self.strings = Vec::new();
        }
        self.string_bytes = 0;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Copies `text` into the arena, reusing an existing byte-identical copy.
    ///
    /// The deduplication scan walks every owned string already resident —
    /// O(count) per intern, a deliberate trade of insertion cost for
    /// footprint on the small documents this crate targets. A reused copy
    /// charges nothing.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfMemory`] if copying the bytes would exceed a fixed
    /// arena's budget, or if the global allocator refuses the copy.
    pub fn intern(&mut self, text: &str) -> Result<Str<'s>, Error> {
        if let Some(found) = self.strings.iter().position(|existing| existing.as_ref() == text) {
            let index = u32::try_from(found).map_err(|_| Error::OutOfMemory)?;
            return Ok(Str::Owned(StrId::new(index, self.generation)));
        }

        self.charge(text.len())?;
        let index = u32::try_from(self.strings.len()).map_err(|_| Error::OutOfMemory)?;
        self.reserve_strings()?;
        let mut owned = String::new();
        owned.try_reserve_exact(text.len()).map_err(|_| Error::OutOfMemory)?;
        owned.push_str(text);
        self.strings.push(owned.into_boxed_str());
        self.string_bytes += text.len();
        Ok(Str::Owned(StrId::new(index, self.generation)))
    }

    /// Resolves either string variant to its text.
    #[must_use]
    pub fn resolve(&self, text: Str<'s>) -> &str {
        match text {
            Str::Borrowed(text) => text,
            Str::Owned(id) => {
                self.check(id.generation());
                &self.strings[id.index()]
            }
        }
    }

    /// Allocates a fresh container header.
    ///
    /// The header starts empty; whether it is an array or an object is
    /// decided by the [`Value`](crate::Value) variant it is installed under.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfMemory`] on an exhausted fixed arena, or when the
    /// global allocator fails a growable one.
    pub fn create_list(&mut self) -> Result<ListId, Error> {
        self.charge(LIST_BYTES)?;
        let index = u32::try_from(self.lists.len()).map_err(|_| Error::OutOfMemory)?;
        if self.lists.len() == self.lists.capacity() {
            self.lists.try_reserve(1).map_err(|_| Error::OutOfMemory)?;
        }
        self.lists.push(ListData::default());
        Ok(ListId::new(index, self.generation))
    }

    pub(crate) fn alloc_slot(&mut self) -> Result<SlotId, Error> {
        self.charge(SLOT_BYTES)?;
        let index = u32::try_from(self.slots.len()).map_err(|_| Error::OutOfMemory)?;
        self.reserve_slots()?;
        self.slots.push(Slot::default());
        Ok(SlotId::new(index, self.generation))
    }

    pub(crate) fn slot(&self, id: SlotId) -> &Slot<'s> {
        self.check(id.generation());
        &self.slots[id.index()]
    }

    pub(crate) fn slot_mut(&mut self, id: SlotId) -> &mut Slot<'s> {
        self.check(id.generation());
        &mut self.slots[id.index()]
    }

    pub(crate) fn list(&self, id: ListId) -> &ListData {
        self.check(id.generation());
        &self.lists[id.index()]
    }

    pub(crate) fn list_mut(&mut self, id: ListId) -> &mut ListData {
        self.check(id.generation());
        &mut self.lists[id.index()]
    }

    fn check(&self, generation: u32) {
        debug_assert_eq!(
            generation, self.generation,
            "handle used after the arena was reset"
        );
    }

    /// Charges `bytes` against a fixed budget, failing before committing.
    fn charge(&mut self, bytes: usize) -> Result<(), Error> {
        if let Some(limit) = self.limit {
            if self.size() + bytes > limit {
                return Err(Error::OutOfMemory);
            }
        }
        Ok(())
    }

    /// Grows the slot store by one increment, reporting allocator failure
    /// instead of aborting.
    fn reserve_slots(&mut self) -> Result<(), Error> {
        if self.slots.len() == self.slots.capacity() {
            let step = if self.is_fixed() {
                1
            } else {
                (self.growth / SLOT_BYTES).max(1)
            };
            self.slots.try_reserve(step).map_err(|_| Error::OutOfMemory)?;
        }
        Ok(())
    }

    fn reserve_strings(&mut self) -> Result<(), Error> {
        if self.strings.len() == self.strings.capacity() {
            let step = if self.is_fixed() {
                1
            } else {
                (self.growth / size_of::<Box<str>>()).max(1)
            };
            self.strings.try_reserve(step).map_err(|_| Error::OutOfMemory)?;
        }
        Ok(())
    }
}

impl Default for Arena<'_> {
    /// A growable arena with no initial reservation.
    fn default() -> Self {
        Self::growable(0, Self::DEFAULT_GROWTH)
    }
}
