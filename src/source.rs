//! Ready-made sequence sources.
//!
//! Constructors for the common starting points: [`empty`], finite
//! [`values`], a bridge from std iterators ([`from_iter`]), and the
//! stateful [`unfold`] generator. All of them spawn cursors with `()`
//! resume values; sequences that consume resume values are built with
//! [`coroutine`](crate::coroutine::coroutine).

use std::marker::PhantomData;
use std::sync::Arc;

use crate::cursor::Cursor;
use crate::error::Result;
use crate::sequence::Sequence;
use crate::step::Step;

/// The sequence with no elements.
pub struct Empty<T> {
    _marker: PhantomData<fn() -> T>,
}

/// Create a sequence whose cursors are terminal from the start.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let seq = empty::<i32>();
/// assert_eq!(seq.collect(4).unwrap(), Vec::<i32>::new());
/// ```
pub fn empty<T>() -> Empty<T> {
    Empty {
        _marker: PhantomData,
    }
}

impl<T> Sequence for Empty<T> {
    type Item = T;
    type Resume = ();
    type Cursor = EmptyCursor<T>;

    fn cursor(&self) -> Self::Cursor {
        EmptyCursor {
            _marker: PhantomData,
        }
    }
}

/// Cursor of [`Empty`]; every advance is terminal.
pub struct EmptyCursor<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Cursor for EmptyCursor<T> {
    type Item = T;
    type Resume = ();

    fn advance(&mut self, _resume: Option<()>) -> Result<Step<T>> {
        Ok(Step::done())
    }
}

/// A finite sequence over owned elements.
///
/// Cursors share the backing slice and own only their position, so
/// spawning a cursor never copies the elements.
pub struct Values<T> {
    items: Arc<[T]>,
}

/// Create a finite sequence from a vector (or anything convertible to a
/// shared slice).
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let seq = values(vec!["a", "b"]);
/// assert_eq!(seq.collect(8).unwrap(), vec!["a", "b"]);
/// ```
pub fn values<T: Clone>(items: impl Into<Arc<[T]>>) -> Values<T> {
    Values {
        items: items.into(),
    }
}

impl<T: Clone> Sequence for Values<T> {
    type Item = T;
    type Resume = ();
    type Cursor = ValuesCursor<T>;

    fn cursor(&self) -> Self::Cursor {
        ValuesCursor {
            items: Arc::clone(&self.items),
            at: 0,
        }
    }
}

/// Cursor of [`Values`].
pub struct ValuesCursor<T> {
    items: Arc<[T]>,
    at: usize,
}

impl<T: Clone> Cursor for ValuesCursor<T> {
    type Item = T;
    type Resume = ();

    fn advance(&mut self, _resume: Option<()>) -> Result<Step<T>> {
        match self.items.get(self.at) {
            Some(value) => {
                self.at += 1;
                Ok(Step::Yielded(value.clone()))
            }
            None => Ok(Step::done()),
        }
    }
}

/// Bridge from a cloneable std iterator.
pub struct FromIter<I> {
    iter: I,
}

/// Create a sequence backed by a std iterator; each cursor clones the
/// iterator and consumes its own copy.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let seq = from_iter(1..=3);
/// assert_eq!(seq.collect(8).unwrap(), vec![1, 2, 3]);
/// assert_eq!(seq.collect(8).unwrap(), vec![1, 2, 3]); // reusable
/// ```
pub fn from_iter<I>(iter: I) -> FromIter<I::IntoIter>
where
    I: IntoIterator,
    I::IntoIter: Clone,
{
    FromIter {
        iter: iter.into_iter(),
    }
}

impl<I> Sequence for FromIter<I>
where
    I: Iterator + Clone,
{
    type Item = I::Item;
    type Resume = ();
    type Cursor = IterCursor<I>;

    fn cursor(&self) -> Self::Cursor {
        IterCursor {
            iter: self.iter.clone(),
            done: false,
        }
    }
}

/// Cursor of [`FromIter`].
///
/// Latches terminal after the iterator's first `None`; arbitrary iterators
/// make no promise about calls past that point.
pub struct IterCursor<I> {
    iter: I,
    done: bool,
}

impl<I> Cursor for IterCursor<I>
where
    I: Iterator,
{
    type Item = I::Item;
    type Resume = ();

    fn advance(&mut self, _resume: Option<()>) -> Result<Step<I::Item>> {
        if self.done {
            return Ok(Step::done());
        }
        match self.iter.next() {
            Some(value) => Ok(Step::Yielded(value)),
            None => {
                self.done = true;
                Ok(Step::done())
            }
        }
    }
}

/// A stateful generator sequence; see [`unfold`].
pub struct Unfold<S, F> {
    seed: S,
    f: F,
}

/// Create a sequence that threads a state value through `f`, yielding until
/// `f` returns `None`. Never returning `None` gives an infinite sequence:
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// // counts 5, 6, 7, ...
/// let counter = unfold(5, |n: &mut i32| {
///     let value = *n;
///     *n += 1;
///     Some(value)
/// });
///
/// assert_eq!(counter.take(3).collect(8).unwrap(), vec![5, 6, 7]);
/// ```
pub fn unfold<S, T, F>(seed: S, f: F) -> Unfold<S, F>
where
    S: Clone,
    F: Fn(&mut S) -> Option<T> + Clone,
{
    Unfold { seed, f }
}

impl<S, T, F> Sequence for Unfold<S, F>
where
    S: Clone,
    F: Fn(&mut S) -> Option<T> + Clone,
{
    type Item = T;
    type Resume = ();
    type Cursor = UnfoldCursor<S, F>;

    fn cursor(&self) -> Self::Cursor {
        UnfoldCursor {
            state: self.seed.clone(),
            f: self.f.clone(),
            done: false,
        }
    }
}

/// Cursor of [`Unfold`].
pub struct UnfoldCursor<S, F> {
    state: S,
    f: F,
    done: bool,
}

impl<S, T, F> Cursor for UnfoldCursor<S, F>
where
    F: Fn(&mut S) -> Option<T>,
{
    type Item = T;
    type Resume = ();

    fn advance(&mut self, _resume: Option<()>) -> Result<Step<T>> {
        if self.done {
            return Ok(Step::done());
        }
        match (self.f)(&mut self.state) {
            Some(value) => Ok(Step::Yielded(value)),
            None => {
                self.done = true;
                Ok(Step::done())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_terminal_immediately() {
        let seq = empty::<u8>();
        let mut cursor = seq.cursor();
        assert_eq!(cursor.advance(None).unwrap(), Step::done());
        assert_eq!(cursor.advance(None).unwrap(), Step::done());
    }

    #[test]
    fn test_values_finishes_and_stays_finished() {
        let seq = values(vec![7]);
        let mut cursor = seq.cursor();
        assert_eq!(cursor.advance(None).unwrap(), Step::Yielded(7));
        assert_eq!(cursor.advance(None).unwrap(), Step::done());
        assert_eq!(cursor.advance(None).unwrap(), Step::done());
    }

    #[test]
    fn test_from_iter_cursors_are_independent() {
        let seq = from_iter(0..3);
        let mut a = seq.cursor();
        let mut b = seq.cursor();
        assert_eq!(a.advance(None).unwrap(), Step::Yielded(0));
        assert_eq!(a.advance(None).unwrap(), Step::Yielded(1));
        assert_eq!(b.advance(None).unwrap(), Step::Yielded(0));
    }

    #[test]
    fn test_unfold_counter_is_infinite() {
        let counter = unfold(5, |n: &mut i32| {
            let value = *n;
            *n += 1;
            Some(value)
        });

        let mut cursor = counter.cursor();
        for expected in 5..25 {
            assert_eq!(cursor.advance(None).unwrap(), Step::Yielded(expected));
        }
    }

    #[test]
    fn test_unfold_latches_after_none() {
        let seq = unfold(0, |n: &mut i32| {
            *n += 1;
            (*n <= 2).then_some(*n)
        });

        let mut cursor = seq.cursor();
        assert_eq!(cursor.advance(None).unwrap(), Step::Yielded(1));
        assert_eq!(cursor.advance(None).unwrap(), Step::Yielded(2));
        assert_eq!(cursor.advance(None).unwrap(), Step::done());
        // the closure is not consulted again once it has finished
        assert_eq!(cursor.advance(None).unwrap(), Step::done());
    }
}
