//! Truncation.

use crate::cursor::Cursor;
use crate::error::Result;
use crate::sequence::Sequence;
use crate::step::Step;

/// Truncates the wrapped sequence; see [`take`].
pub struct Take<S> {
    seq: S,
    count: usize,
}

/// Create a sequence yielding at most `count` elements of `seq`.
///
/// Finishes after `count` elements or when the inner sequence does,
/// whichever comes first. Once the count is spent the inner cursor is never
/// advanced again, so infinite (for instance coroutine-backed) sequences
/// are not over-driven; `take(seq, 0)` never touches the inner cursor at
/// all.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let counter = unfold(5, |n: &mut i32| {
///     let value = *n;
///     *n += 1;
///     Some(value)
/// });
///
/// assert_eq!(take(counter, 2).collect(8).unwrap(), vec![5, 6]);
/// ```
pub fn take<S>(seq: S, count: usize) -> Take<S>
where
    S: Sequence,
{
    Take { seq, count }
}

impl<S> Sequence for Take<S>
where
    S: Sequence,
{
    type Item = S::Item;
    type Resume = S::Resume;
    type Cursor = TakeCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        TakeCursor {
            inner: self.seq.cursor(),
            remaining: self.count,
            done: false,
        }
    }
}

/// Cursor of [`Take`].
pub struct TakeCursor<C> {
    inner: C,
    remaining: usize,
    done: bool,
}

impl<C> Cursor for TakeCursor<C>
where
    C: Cursor,
{
    type Item = C::Item;
    type Resume = C::Resume;

    fn advance(&mut self, resume: Option<Self::Resume>) -> Result<Step<C::Item>> {
        if self.done || self.remaining == 0 {
            self.done = true;
            return Ok(Step::done());
        }
        match self.inner.advance(resume) {
            Ok(Step::Yielded(value)) => {
                self.remaining -= 1;
                Ok(Step::Yielded(value))
            }
            Ok(step @ Step::Done(_)) => {
                self.done = true;
                Ok(step)
            }
            Err(err) => {
                self.done = true;
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::source::{unfold, values};

    fn counting_counter(from: i32) -> (impl Sequence<Item = i32, Resume = ()>, Rc<Cell<usize>>) {
        let advances = Rc::new(Cell::new(0));
        let seq = unfold(
            (from, Rc::clone(&advances)),
            |(n, advances): &mut (i32, Rc<Cell<usize>>)| {
                advances.set(advances.get() + 1);
                let value = *n;
                *n += 1;
                Some(value)
            },
        );
        (seq, advances)
    }

    #[test]
    fn test_take_zero_never_touches_inner() {
        let (counter, advances) = counting_counter(5);
        let seq = take(counter, 0);
        let mut cursor = seq.cursor();
        assert_eq!(cursor.advance(None).unwrap(), Step::done());
        assert_eq!(advances.get(), 0);
    }

    #[test]
    fn test_take_two_from_infinite_counter_advances_inner_exactly_twice() {
        let (counter, advances) = counting_counter(5);
        let seq = take(counter, 2);
        let mut cursor = seq.cursor();

        assert_eq!(cursor.advance(None).unwrap(), Step::Yielded(5));
        assert_eq!(cursor.advance(None).unwrap(), Step::Yielded(6));
        assert_eq!(cursor.advance(None).unwrap(), Step::done());
        assert_eq!(cursor.advance(None).unwrap(), Step::done());
        assert_eq!(advances.get(), 2);
    }

    #[test]
    fn test_take_more_than_available_ends_with_inner() {
        let seq = take(values(vec![1, 2]), 10);
        assert_eq!(seq.collect(8).unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_take_is_reusable() {
        let (counter, _) = counting_counter(0);
        let seq = take(counter, 3);
        assert_eq!(seq.collect(8).unwrap(), vec![0, 1, 2]);
        // fresh cursor, fresh count
        assert_eq!(seq.collect(8).unwrap(), vec![0, 1, 2]);
    }
}
