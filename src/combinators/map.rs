//! Element transformation, infallible and fallible.

use crate::cursor::Cursor;
use crate::error::Result;
use crate::sequence::Sequence;
use crate::step::Step;

/// Transforms every element of the wrapped sequence; see [`map`].
pub struct Map<S, F> {
    seq: S,
    f: F,
}

/// Create a sequence that applies `f` to every element of `seq`.
///
/// Done steps keep their flag; a final return value is mapped through `f`
/// as well, so the output sequence stays coherent in its element type.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let seq = map(values(vec![1, 2, 3]), |x| x * 10);
/// assert_eq!(seq.collect(8).unwrap(), vec![10, 20, 30]);
/// ```
pub fn map<S, U, F>(seq: S, f: F) -> Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> U + Clone,
{
    Map { seq, f }
}

impl<S, U, F> Sequence for Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> U + Clone,
{
    type Item = U;
    type Resume = S::Resume;
    type Cursor = MapCursor<S::Cursor, F>;

    fn cursor(&self) -> Self::Cursor {
        MapCursor {
            inner: self.seq.cursor(),
            f: self.f.clone(),
        }
    }
}

/// Cursor of [`Map`].
pub struct MapCursor<C, F> {
    inner: C,
    f: F,
}

impl<C, U, F> Cursor for MapCursor<C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> U,
{
    type Item = U;
    type Resume = C::Resume;

    fn advance(&mut self, resume: Option<Self::Resume>) -> Result<Step<U>> {
        Ok(self.inner.advance(resume)?.map(&self.f))
    }
}

/// Fallibly transforms every element of the wrapped sequence; see
/// [`try_map`].
pub struct TryMap<S, F> {
    seq: S,
    f: F,
}

/// Create a sequence that applies the fallible `f` to every element of
/// `seq`.
///
/// A failure from `f` propagates out of the advance that applied it and
/// latches that cursor terminal; later advances report plain exhaustion.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let seq = try_map(values(vec![4, 0]), |x| {
///     if x == 0 {
///         Err(Error::computation("zero is not allowed"))
///     } else {
///         Ok(100 / x)
///     }
/// });
///
/// let mut cursor = seq.cursor();
/// assert_eq!(cursor.advance(None).unwrap(), Step::Yielded(25));
/// assert!(cursor.advance(None).is_err());
/// assert_eq!(cursor.advance(None).unwrap(), Step::done());
/// ```
pub fn try_map<S, U, F>(seq: S, f: F) -> TryMap<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> Result<U> + Clone,
{
    TryMap { seq, f }
}

impl<S, U, F> Sequence for TryMap<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> Result<U> + Clone,
{
    type Item = U;
    type Resume = S::Resume;
    type Cursor = TryMapCursor<S::Cursor, F>;

    fn cursor(&self) -> Self::Cursor {
        TryMapCursor {
            inner: self.seq.cursor(),
            f: self.f.clone(),
            done: false,
        }
    }
}

/// Cursor of [`TryMap`].
pub struct TryMapCursor<C, F> {
    inner: C,
    f: F,
    done: bool,
}

impl<C, U, F> Cursor for TryMapCursor<C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> Result<U>,
{
    type Item = U;
    type Resume = C::Resume;

    fn advance(&mut self, resume: Option<Self::Resume>) -> Result<Step<U>> {
        if self.done {
            return Ok(Step::done());
        }
        let step = match self.inner.advance(resume) {
            Ok(step) => step,
            Err(err) => {
                self.done = true;
                return Err(err);
            }
        };
        match step {
            Step::Yielded(value) => match (self.f)(value) {
                Ok(mapped) => Ok(Step::Yielded(mapped)),
                Err(err) => {
                    self.done = true;
                    Err(err)
                }
            },
            Step::Done(value) => {
                self.done = true;
                match value.map(&self.f).transpose() {
                    Ok(mapped) => Ok(Step::Done(mapped)),
                    Err(err) => Err(err),
                }
            }
        }
    }
}
