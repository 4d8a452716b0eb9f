//! Core trait for cursor factories.
//!
//! A [`Sequence`] owns no progression state of its own: it is a recipe for
//! traversals. Every call to [`cursor`](Sequence::cursor) returns a fresh,
//! independent [`Cursor`], so a sequence can be consumed any number of
//! times and shared freely between consumers (cursor creation takes
//! `&self`).
//!
//! The lazy combinators ([`map`](Sequence::map), [`filter`](Sequence::filter),
//! [`take`](Sequence::take), [`zip`](Sequence::zip)) are provided directly on
//! the trait and as free functions in [`combinators`](crate::combinators).
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let evens_scaled = values(vec![1, 2, 3, 4, 5])
//!     .filter(|x: &i32| x % 2 == 0)
//!     .map(|x| x * 10);
//!
//! assert_eq!(evens_scaled.collect(16).unwrap(), vec![20, 40]);
//! ```

use either::Either;

use crate::combinators::{self, Filter, Map, Take, TryMap, Zip};
use crate::cursor::Cursor;
use crate::error::Result;
use crate::iter::SeqIter;

/// Factory for fresh, independent [`Cursor`]s over the same run of elements.
pub trait Sequence {
    /// Element type produced by cursors of this sequence.
    type Item;
    /// Resume value accepted by cursors of this sequence.
    type Resume;
    /// Concrete cursor type spawned by [`cursor`](Sequence::cursor).
    type Cursor: Cursor<Item = Self::Item, Resume = Self::Resume>;

    /// Spawn a freshly-initialized cursor.
    ///
    /// Cursors from the same sequence progress independently; advancing one
    /// never affects the steps observed through another.
    fn cursor(&self) -> Self::Cursor;

    /// Lazily transform every element (and any final return value) with `f`.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> U + Clone,
    {
        combinators::map(self, f)
    }

    /// Like [`map`](Sequence::map), for transformations that can fail.
    ///
    /// A failure from `f` propagates out of the advance that applied it and
    /// leaves that cursor permanently terminal.
    fn try_map<U, F>(self, f: F) -> TryMap<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> Result<U> + Clone,
    {
        combinators::try_map(self, f)
    }

    /// Lazily discard elements for which `pred` returns `false`.
    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool + Clone,
    {
        combinators::filter(self, pred)
    }

    /// Truncate to at most `count` elements.
    ///
    /// Safe on infinite sequences: the inner cursor is never advanced once
    /// the count is spent.
    fn take(self, count: usize) -> Take<Self>
    where
        Self: Sized,
    {
        combinators::take(self, count)
    }

    /// Pair elements with `other`, finishing when either side does.
    fn zip<B>(self, other: B) -> Zip<Self, B>
    where
        Self: Sized,
        B: Sequence<Resume = Self::Resume>,
    {
        combinators::zip(self, other)
    }

    /// Drive a fresh cursor to completion, collecting at most `limit`
    /// elements.
    ///
    /// `limit` is the safety bound against infinite sequences; exceeding it
    /// is [`Error::NonTermination`](crate::Error::NonTermination). See
    /// [`drive::collect`](crate::drive::collect).
    fn collect(&self, limit: usize) -> Result<Vec<Self::Item>>
    where
        Self: Sized,
    {
        crate::drive::collect(self, limit)
    }

    /// Drive a fresh cursor to completion, invoking `f` per element.
    ///
    /// Returns the final return value, if the sequence produced one. See
    /// [`drive::for_each`](crate::drive::for_each).
    fn for_each<F>(&self, f: F) -> Result<Option<Self::Item>>
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        crate::drive::for_each(self, f)
    }

    /// Adapt a fresh cursor to a `std::iter::Iterator` of `Result` items.
    fn iter(&self) -> SeqIter<Self::Cursor>
    where
        Self: Sized,
    {
        SeqIter::new(self.cursor())
    }
}

impl<S> Sequence for &S
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;
    type Resume = S::Resume;
    type Cursor = S::Cursor;

    fn cursor(&self) -> Self::Cursor {
        (**self).cursor()
    }
}

impl<L, R> Sequence for Either<L, R>
where
    L: Sequence,
    R: Sequence<Item = L::Item, Resume = L::Resume>,
{
    type Item = L::Item;
    type Resume = L::Resume;
    type Cursor = Either<L::Cursor, R::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        match self {
            Either::Left(l) => Either::Left(l.cursor()),
            Either::Right(r) => Either::Right(r.cursor()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::values;
    use crate::step::Step;

    #[test]
    fn test_reference_is_a_sequence() {
        let seq = values(vec![1, 2]);
        let by_ref = &seq;
        assert_eq!(by_ref.collect(8).unwrap(), vec![1, 2]);
        // the original is still usable
        assert_eq!(seq.collect(8).unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_either_selects_branch() {
        let pick = |left: bool| -> Either<_, _> {
            if left {
                Either::Left(values(vec![1, 2]))
            } else {
                Either::Right(values(vec![9]))
            }
        };

        assert_eq!(pick(true).collect(8).unwrap(), vec![1, 2]);
        assert_eq!(pick(false).collect(8).unwrap(), vec![9]);
    }

    #[test]
    fn test_filter_then_map_pipeline_stays_lazy() {
        let seq = values(vec![1, 2, 3, 4, 5])
            .filter(|x: &i32| x % 2 == 0)
            .map(|x| x * 10);

        assert_eq!(seq.collect(16).unwrap(), vec![20, 40]);

        // stepping by hand shows the same order
        let mut cursor = seq.cursor();
        assert_eq!(cursor.advance(None).unwrap(), Step::Yielded(20));
        assert_eq!(cursor.advance(None).unwrap(), Step::Yielded(40));
        assert_eq!(cursor.advance(None).unwrap(), Step::done());
    }

    #[test]
    fn test_take_protects_infinite_coroutine() {
        use crate::coroutine::coroutine;

        let counter = coroutine(|| {
            let mut n = 4;
            move |_resume: Option<()>| {
                n += 1;
                Ok(Step::Yielded(n))
            }
        });

        let seq = counter.take(2);
        assert_eq!(seq.collect(16).unwrap(), vec![5, 6]);
    }

    #[test]
    fn test_independent_cursors_from_one_sequence() {
        let seq = values(vec![10, 20, 30]);
        let mut a = seq.cursor();
        let mut b = seq.cursor();

        assert_eq!(a.advance(None).unwrap(), Step::Yielded(10));
        assert_eq!(a.advance(None).unwrap(), Step::Yielded(20));
        // b starts from the beginning regardless of a's progress
        assert_eq!(b.advance(None).unwrap(), Step::Yielded(10));
        assert_eq!(a.advance(None).unwrap(), Step::Yielded(30));
        assert_eq!(b.advance(None).unwrap(), Step::Yielded(20));
    }
}
