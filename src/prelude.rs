//! Convenience re-exports of the working surface.
//!
//! ```rust
//! use lazyseq::prelude::*;
//! ```

pub use crate::combinators::{filter, map, take, try_map, zip};
pub use crate::coroutine::coroutine;
pub use crate::cursor::Cursor;
pub use crate::drive::{collect, for_each};
pub use crate::error::{Error, Result};
pub use crate::iter::SeqIter;
pub use crate::sequence::Sequence;
pub use crate::source::{empty, from_iter, unfold, values};
pub use crate::step::Step;
