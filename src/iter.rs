//! Adapter from cursors to `std::iter::Iterator`.
//!
//! [`SeqIter`] drives a cursor with no resume values and yields
//! `Result<T>` items, so std iterator machinery (`for` loops, `Iterator`
//! adapters, `collect`) can consume a sequence. The final return value of a
//! finished sequence is retained and can be read back after iteration.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let seq = values(vec![1, 2, 3]);
//! let doubled: Result<Vec<_>> = seq.iter().map(|x| Ok(x? * 2)).collect();
//! assert_eq!(doubled.unwrap(), vec![2, 4, 6]);
//! ```

use std::mem;

use crate::cursor::Cursor;
use crate::error::Result;
use crate::step::Step;

/// Iterator over the elements of one cursor.
///
/// A failure is yielded once as an `Err` item; after that, and after
/// normal termination, the iterator is fused to `None`.
pub struct SeqIter<C>
where
    C: Cursor,
{
    state: SeqIterState<C>,
}

enum SeqIterState<C>
where
    C: Cursor,
{
    Active(C),
    Finished(Option<C::Item>),
    Failed,
    Invalid,
}

impl<C> SeqIterState<C>
where
    C: Cursor,
{
    fn take(&mut self) -> Self {
        mem::replace(self, SeqIterState::Invalid)
    }
}

impl<C> SeqIter<C>
where
    C: Cursor,
{
    /// Wrap a cursor.
    pub fn new(cursor: C) -> Self {
        Self {
            state: SeqIterState::Active(cursor),
        }
    }

    /// Returns `true` once the cursor has finished normally.
    pub fn is_finished(&self) -> bool {
        matches!(self.state, SeqIterState::Finished(_))
    }

    /// The final return value, if the cursor has finished with one.
    pub fn final_value(&self) -> Option<&C::Item> {
        match &self.state {
            SeqIterState::Finished(value) => value.as_ref(),
            _ => None,
        }
    }

    /// Consume the adapter, returning the final return value if the cursor
    /// finished with one.
    pub fn into_final(self) -> Option<C::Item> {
        match self.state {
            SeqIterState::Finished(value) => value,
            _ => None,
        }
    }
}

impl<C> Iterator for SeqIter<C>
where
    C: Cursor,
{
    type Item = Result<C::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state.take() {
            SeqIterState::Active(mut cursor) => match cursor.advance(None) {
                Ok(Step::Yielded(value)) => {
                    self.state = SeqIterState::Active(cursor);
                    Some(Ok(value))
                }
                Ok(Step::Done(value)) => {
                    self.state = SeqIterState::Finished(value);
                    None
                }
                Err(err) => {
                    self.state = SeqIterState::Failed;
                    Some(Err(err))
                }
            },
            SeqIterState::Finished(value) => {
                self.state = SeqIterState::Finished(value);
                None
            }
            SeqIterState::Failed => {
                self.state = SeqIterState::Failed;
                None
            }
            SeqIterState::Invalid => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coroutine::coroutine;
    use crate::error::Error;
    use crate::sequence::Sequence;
    use crate::source::values;

    #[test]
    fn test_iterates_and_fuses() {
        let seq = values(vec![1, 2]);
        let mut iter = seq.iter();
        assert_eq!(iter.next().unwrap().unwrap(), 1);
        assert_eq!(iter.next().unwrap().unwrap(), 2);
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
        assert!(iter.is_finished());
    }

    #[test]
    fn test_final_value_retained() {
        let seq = coroutine(|| {
            let mut at = 0;
            move |_resume: Option<()>| {
                at += 1;
                Ok(match at {
                    1 => Step::Yielded(1),
                    _ => Step::Done(Some(42)),
                })
            }
        });

        let mut iter = seq.iter();
        assert_eq!(iter.final_value(), None);
        let elements: Vec<_> = (&mut iter).map(|item| item.unwrap()).collect();
        assert_eq!(elements, vec![1]);
        assert_eq!(iter.final_value(), Some(&42));
        assert_eq!(iter.into_final(), Some(42));
    }

    #[test]
    fn test_failure_yielded_once() {
        let seq = coroutine(|| {
            let mut at = 0;
            move |_resume: Option<()>| {
                at += 1;
                match at {
                    1 => Ok(Step::Yielded(1)),
                    _ => Err(Error::computation("broken")),
                }
            }
        });

        let mut iter = seq.iter();
        assert_eq!(iter.next().unwrap().unwrap(), 1);
        assert_eq!(iter.next().unwrap().unwrap_err(), Error::computation("broken"));
        assert!(iter.next().is_none());
        assert!(!iter.is_finished());
        assert_eq!(iter.into_final(), None);
    }

    #[test]
    fn test_for_loop_over_mut_ref() {
        let seq = values(vec![5, 6]);
        let mut iter = seq.iter();
        let mut seen = Vec::new();
        for item in &mut iter {
            seen.push(item.unwrap());
        }
        assert_eq!(seen, vec![5, 6]);
    }
}
