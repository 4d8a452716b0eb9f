//! Pairwise combination.

use crate::cursor::Cursor;
use crate::error::Result;
use crate::sequence::Sequence;
use crate::step::Step;

/// Pairs elements of two sequences; see [`zip`].
pub struct Zip<A, B> {
    left: A,
    right: B,
}

/// Create a sequence of pairs drawn from `left` and `right` in lockstep,
/// finishing as soon as either side does.
///
/// The right cursor is polled first and short-circuits, so once the right
/// side ends the left cursor is not advanced past that point. Resume values
/// route to the left cursor.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let pairs = zip(values(vec![1, 2, 3]), values(vec!["a", "b"]));
/// assert_eq!(pairs.collect(8).unwrap(), vec![(1, "a"), (2, "b")]);
/// ```
pub fn zip<A, B>(left: A, right: B) -> Zip<A, B>
where
    A: Sequence,
    B: Sequence<Resume = A::Resume>,
{
    Zip { left, right }
}

impl<A, B> Sequence for Zip<A, B>
where
    A: Sequence,
    B: Sequence<Resume = A::Resume>,
{
    type Item = (A::Item, B::Item);
    type Resume = A::Resume;
    type Cursor = ZipCursor<A::Cursor, B::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        ZipCursor {
            left: self.left.cursor(),
            right: self.right.cursor(),
            done: false,
        }
    }
}

/// Cursor of [`Zip`].
pub struct ZipCursor<L, R> {
    left: L,
    right: R,
    done: bool,
}

impl<L, R> Cursor for ZipCursor<L, R>
where
    L: Cursor,
    R: Cursor<Resume = L::Resume>,
{
    type Item = (L::Item, R::Item);
    type Resume = L::Resume;

    fn advance(&mut self, resume: Option<Self::Resume>) -> Result<Step<Self::Item>> {
        if self.done {
            return Ok(Step::done());
        }
        let right_value = match self.right.advance(None) {
            Ok(Step::Yielded(value)) => value,
            Ok(Step::Done(_)) => {
                self.done = true;
                return Ok(Step::done());
            }
            Err(err) => {
                self.done = true;
                return Err(err);
            }
        };
        match self.left.advance(resume) {
            Ok(Step::Yielded(value)) => Ok(Step::Yielded((value, right_value))),
            Ok(Step::Done(_)) => {
                self.done = true;
                Ok(Step::done())
            }
            Err(err) => {
                self.done = true;
                Err(err)
            }
        }
    }
}
