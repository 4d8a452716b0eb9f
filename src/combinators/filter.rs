//! Element selection.

use crate::cursor::Cursor;
use crate::error::Result;
use crate::sequence::Sequence;
use crate::step::Step;

/// Keeps only elements matching a predicate; see [`filter`].
pub struct Filter<S, P> {
    seq: S,
    pred: P,
}

/// Create a sequence that discards elements of `seq` for which `pred`
/// returns `false`.
///
/// Each advance loops over the inner cursor until a matching element or a
/// done step turns up; the inner cursor is never advanced again once it has
/// finished.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let evens = filter(values(vec![1, 2, 3, 4, 5]), |x: &i32| x % 2 == 0);
/// assert_eq!(evens.collect(8).unwrap(), vec![2, 4]);
/// ```
pub fn filter<S, P>(seq: S, pred: P) -> Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool + Clone,
{
    Filter { seq, pred }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool + Clone,
{
    type Item = S::Item;
    type Resume = S::Resume;
    type Cursor = FilterCursor<S::Cursor, P>;

    fn cursor(&self) -> Self::Cursor {
        FilterCursor {
            inner: self.seq.cursor(),
            pred: self.pred.clone(),
            done: false,
        }
    }
}

/// Cursor of [`Filter`].
pub struct FilterCursor<C, P> {
    inner: C,
    pred: P,
    done: bool,
}

impl<C, P> Cursor for FilterCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;
    type Resume = C::Resume;

    fn advance(&mut self, resume: Option<Self::Resume>) -> Result<Step<C::Item>> {
        if self.done {
            return Ok(Step::done());
        }
        // the resume value feeds the suspension we paused at, i.e. the
        // first inner advance of this call only
        let mut resume = resume;
        loop {
            match self.inner.advance(resume.take()) {
                Ok(Step::Yielded(value)) => {
                    if (self.pred)(&value) {
                        return Ok(Step::Yielded(value));
                    }
                }
                Ok(step @ Step::Done(_)) => {
                    self.done = true;
                    return Ok(step);
                }
                Err(err) => {
                    self.done = true;
                    return Err(err);
                }
            }
        }
    }
}
