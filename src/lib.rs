//! # Lazyseq: Pull-Based Lazy Sequences
//!
//! Build sequences that produce elements on demand, driven step by step by
//! their consumer — including sequences backed by suspendable computations
//! that accept injected resume values.
//!
//! ## Core Traits
//!
//! - **[`Sequence`]**: a factory of fresh, independent traversals
//! - **[`Cursor`]**: one stateful traversal, advanced a [`Step`] at a time
//!
//! ## Key Features
//!
//! - **Lazy end to end**: combinators wrap cursors transparently; nothing
//!   runs until `advance`
//! - **Suspend/resume**: [`coroutine`] sequences keep local bindings alive
//!   across suspension points and accept resume values
//! - **Composable**: [`map`], [`filter`], [`take`], [`zip`] as free
//!   functions and as methods on [`Sequence`]
//!
//! ## Example
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! // an infinite counter, truncated and transformed lazily
//! let counter = unfold(5, |n: &mut i32| {
//!     let value = *n;
//!     *n += 1;
//!     Some(value)
//! });
//!
//! let seq = counter.take(2).map(|x| x * 10);
//! assert_eq!(seq.collect(16).unwrap(), vec![50, 60]);
//! ```
//!
//! ## Common Functions
//!
//! **Building Sequences:**
//! - [`values(v)`](values) - finite sequence over owned elements
//! - [`unfold(seed, f)`](unfold) - stateful generator
//! - [`coroutine(factory)`](coroutine) - suspendable body with resume values
//!
//! **Consuming:**
//! - [`collect(&seq, limit)`](collect) - eager drive with a non-termination
//!   guard
//! - [`for_each(&seq, f)`](for_each) - explicit for-each driver
//! - [`Sequence::iter`] - bridge to `std::iter::Iterator`

pub mod combinators;
mod coroutine;
mod cursor;
pub mod drive;
mod error;
mod iter;
pub mod prelude;
mod sequence;
mod source;
mod step;

pub use combinators::{Filter, Map, Take, TryMap, Zip, filter, map, take, try_map, zip};
pub use coroutine::{Coroutine, CoroutineCursor, coroutine};
pub use cursor::Cursor;
pub use drive::{collect, for_each};
pub use error::{Error, Result};
pub use iter::SeqIter;
pub use sequence::Sequence;
pub use source::{Empty, FromIter, Unfold, Values, empty, from_iter, unfold, values};
pub use step::Step;
