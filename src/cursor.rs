//! Core trait for stateful cursors.
//!
//! A [`Cursor`] owns the private progression state of one traversal of a
//! sequence: a position, captured bindings, or a suspended computation.
//! Advancing it produces [`Step`]s in strict order; the `&mut self` receiver
//! is what enforces the single-consumer rule — two call contexts can never
//! overlap on the same cursor without an explicit lock.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let seq = values(vec![1, 2]);
//! let mut cursor = seq.cursor();
//! assert_eq!(cursor.advance(None).unwrap(), Step::Yielded(1));
//! assert_eq!(cursor.advance(None).unwrap(), Step::Yielded(2));
//! assert_eq!(cursor.advance(None).unwrap(), Step::done());
//! ```

use std::{
    cell::RefCell,
    rc::Rc,
    sync::{Arc, Mutex},
};

use either::Either;

use crate::error::{Error, Result};
use crate::step::Step;

/// Stateful producer of an ordered run of [`Step`]s.
///
/// Each call to [`advance`](Cursor::advance) either yields the next element,
/// reports termination, or fails. A resume value may be supplied; it is
/// delivered to the suspension point the cursor last paused at, and is
/// ignored by cursors that have no suspension to feed (including any cursor
/// on its very first advance).
///
/// Contract:
/// - once a `Done` step has been produced, every later advance produces
///   `Done(None)`;
/// - once an `Err` has been produced, the cursor is terminal and later
///   advances produce `Done(None)` without re-raising;
/// - advancing mutates only the cursor itself, never its originating
///   [`Sequence`](crate::Sequence).
pub trait Cursor {
    /// Element type produced by this cursor.
    type Item;
    /// Resume value accepted at suspension points.
    type Resume;

    /// Produce the next step, optionally feeding `resume` into the pending
    /// suspension point.
    fn advance(&mut self, resume: Option<Self::Resume>) -> Result<Step<Self::Item>>;
}

impl<C> Cursor for &mut C
where
    C: Cursor + ?Sized,
{
    type Item = C::Item;
    type Resume = C::Resume;

    fn advance(&mut self, resume: Option<Self::Resume>) -> Result<Step<Self::Item>> {
        (**self).advance(resume)
    }
}

impl<C> Cursor for Box<C>
where
    C: Cursor + ?Sized,
{
    type Item = C::Item;
    type Resume = C::Resume;

    fn advance(&mut self, resume: Option<Self::Resume>) -> Result<Step<Self::Item>> {
        (**self).advance(resume)
    }
}

impl<C> Cursor for Rc<RefCell<C>>
where
    C: Cursor,
{
    type Item = C::Item;
    type Resume = C::Resume;

    fn advance(&mut self, resume: Option<Self::Resume>) -> Result<Step<Self::Item>> {
        self.as_ref().borrow_mut().advance(resume)
    }
}

/// Serialized shared access for consumers that genuinely need to advance one
/// cursor from several contexts. The core adds no synchronization of its
/// own; this impl is the explicit opt-in. A poisoned lock surfaces as
/// [`Error::ComputationFailure`].
impl<C> Cursor for Arc<Mutex<C>>
where
    C: Cursor,
{
    type Item = C::Item;
    type Resume = C::Resume;

    fn advance(&mut self, resume: Option<Self::Resume>) -> Result<Step<Self::Item>> {
        match self.lock() {
            Ok(mut cursor) => cursor.advance(resume),
            Err(_) => Err(Error::computation("cursor lock poisoned")),
        }
    }
}

impl<L, R> Cursor for Either<L, R>
where
    L: Cursor,
    R: Cursor<Item = L::Item, Resume = L::Resume>,
{
    type Item = L::Item;
    type Resume = L::Resume;

    fn advance(&mut self, resume: Option<Self::Resume>) -> Result<Step<Self::Item>> {
        match self {
            Either::Left(l) => l.advance(resume),
            Either::Right(r) => r.advance(resume),
        }
    }
}
