//! Lazy sequence-to-sequence operators.
//!
//! Each operator wraps a [`Sequence`](crate::Sequence) and produces a new
//! one; nothing happens until a cursor from the result is advanced. The
//! operators hold only the wrapped sequence and the transformation closure;
//! per-traversal state (counters, partner cursors, done latches) lives in
//! the cursors they spawn.

mod filter;
mod map;
mod take;
mod zip;

pub use filter::{Filter, FilterCursor, filter};
pub use map::{Map, MapCursor, TryMap, TryMapCursor, map, try_map};
pub use take::{Take, TakeCursor, take};
pub use zip::{Zip, ZipCursor, zip};
