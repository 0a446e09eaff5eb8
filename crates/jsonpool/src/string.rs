//! String ownership policy.
//!
//! A document stores strings two ways: borrowed from the caller, or copied
//! into the arena. The variant is chosen at the call site, never inferred,
//! so the lifetime contract is visible wherever a string enters the tree.

use crate::arena::StrId;

/// A string as stored inside a document.
///
/// `Borrowed` is zero-copy: the bytes stay in caller-owned memory and the
/// lifetime parameter ties the document to them, so the compiler rejects any
/// use of the document past the source buffer. `Owned` is a copy interned
/// into the document's arena, independent of the source's lifetime.
///
/// [`Arena::intern`](crate::Arena::intern) is the only producer of `Owned`
/// strings; byte-identical interned strings are deduplicated.
#[derive(Debug, Clone, Copy)]
pub enum Str<'s> {
    /// Caller-owned bytes, must outlive the document.
    Borrowed(&'s str),
    /// Arena-owned copy, lives until the arena is reset.
    Owned(StrId),
}
