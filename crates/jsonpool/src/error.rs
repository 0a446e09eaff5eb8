//! Error taxonomy for arena-backed documents.

use thiserror::Error;

/// Failures reported by mutating document operations.
///
/// Every operation that may allocate returns `Result<_, Error>`; nothing in
/// the crate panics on exhaustion. Reading a value through the "wrong" type is
/// not an error at all — the coercion accessors on [`Value`](crate::Value)
/// degrade to a default instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The arena could not satisfy an allocation: a fixed arena ran past its
    /// byte budget, or the global allocator failed for a growable one.
    ///
    /// Allocations that succeeded before the failure stay committed and
    /// readable.
    #[error("arena out of memory")]
    OutOfMemory,

    /// A deep copy between documents recursed past the destination
    /// document's nesting limit.
    #[error("nesting limit exceeded")]
    NestingLimitExceeded,
}
