//! An arena-backed JSON document model for embedded targets.
//!
//! Every value in a [`JsonDocument`] lives inside a single caller-controlled
//! memory arena: no general-purpose heap churn, no per-node teardown, the
//! whole document is reclaimed in one [`JsonDocument::clear`]. Arrays and
//! objects are arena-allocated linked lists; strings are either borrowed from
//! the caller (zero-copy, lifetime-checked) or interned into the arena with
//! deduplication.
//!
//! Two arena flavors are available: [`JsonDocument::fixed`] enforces a byte
//! budget and reports [`Error::OutOfMemory`] instead of growing, while
//! [`JsonDocument::new`] / [`JsonDocument::with_capacity`] grow on demand.
//! Reads never fail: the coercion accessors on [`Value`] degrade to defaults
//! when the discriminant does not match.
//!
//! ```
//! use jsonpool::{JsonDocument, Value};
//!
//! let mut doc = JsonDocument::new();
//! let prices = doc.to_array().unwrap();
//! doc.arena_mut().push(prices, Value::integer(10)).unwrap();
//! doc.arena_mut().push(prices, Value::Float(1.5)).unwrap();
//!
//! let total: f64 = doc
//!     .arena()
//!     .values(prices)
//!     .map(|v| v.as_f64(doc.arena()))
//!     .sum();
//! assert_eq!(total, 11.5);
//! assert_eq!(doc.to_string(), "[10,1.5]");
//! ```
//!
//! The model is single-owner and single-threaded by design; share a document
//! across threads only behind external synchronization.

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod arena;
mod document;
mod error;
mod list;
mod number;
mod serialize;
mod string;
mod value;
mod visit;

#[cfg(test)]
mod tests;

pub use arena::{Arena, ListId, SlotId, StrId};
pub use document::{DEFAULT_NESTING_LIMIT, JsonDocument};
pub use error::Error;
pub use list::{ArrayValues, ListIter, ObjectEntries};
pub use serialize::write_compact;
pub use string::Str;
pub use value::Value;
pub use visit::Visitor;
