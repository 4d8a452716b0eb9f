//! Functions for driving sequences to completion.
//!
//! These are the explicit consumers that replace host-language loop sugar:
//! each one spawns a fresh cursor and advances it (with no resume values)
//! until a terminal step or a failure. [`collect`] additionally guards
//! against infinite sequences with a caller-chosen element bound.

use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::sequence::Sequence;
use crate::step::Step;

/// Drive a fresh cursor from `seq` to completion, collecting its elements.
///
/// `limit` is the safety bound for sequences not known to be finite: once
/// more than `limit` elements have been yielded the drive is abandoned with
/// [`Error::NonTermination`]. A sequence of exactly `limit` elements is
/// fine. `limit == 0` would make the guard vacuous and is rejected as
/// [`Error::InvalidArgument`].
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let seq = values(vec![1, 2, 3]);
/// assert_eq!(collect(&seq, 16).unwrap(), vec![1, 2, 3]);
/// ```
pub fn collect<S>(seq: &S, limit: usize) -> Result<Vec<S::Item>>
where
    S: Sequence,
{
    if limit == 0 {
        return Err(Error::invalid("collect limit must be positive"));
    }
    let mut cursor = seq.cursor();
    let mut collected = Vec::new();
    loop {
        match cursor.advance(None)? {
            Step::Yielded(value) => {
                if collected.len() == limit {
                    return Err(Error::NonTermination { limit });
                }
                collected.push(value);
            }
            Step::Done(_) => return Ok(collected),
        }
    }
}

/// Drive a fresh cursor from `seq` to completion, invoking `f` per element.
///
/// Returns the final return value if the sequence finished with one. No
/// safety bound is applied: feeding an infinite sequence here loops until
/// the caller's process does something about it.
///
/// # Examples
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let seq = values(vec![1, 2, 3]);
/// let mut total = 0;
/// for_each(&seq, |x| total += x).unwrap();
/// assert_eq!(total, 6);
/// ```
pub fn for_each<S, F>(seq: &S, mut f: F) -> Result<Option<S::Item>>
where
    S: Sequence,
    F: FnMut(S::Item),
{
    let mut cursor = seq.cursor();
    loop {
        match cursor.advance(None)? {
            Step::Yielded(value) => f(value),
            Step::Done(value) => return Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coroutine::coroutine;
    use crate::source::{unfold, values};

    fn counter_from(start: i32) -> impl Sequence<Item = i32, Resume = ()> {
        unfold(start, |n: &mut i32| {
            let value = *n;
            *n += 1;
            Some(value)
        })
    }

    #[test]
    fn test_collect_finite() {
        assert_eq!(collect(&values(vec![1, 2]), 16).unwrap(), vec![1, 2]);
        assert_eq!(collect(&values(Vec::<i32>::new()), 16).unwrap(), vec![]);
    }

    #[test]
    fn test_collect_guards_against_infinite_sequences() {
        assert_eq!(
            collect(&counter_from(0), 100).unwrap_err(),
            Error::NonTermination { limit: 100 }
        );
    }

    #[test]
    fn test_collect_limit_is_inclusive() {
        let seq = values(vec![1, 2, 3]);
        assert_eq!(collect(&seq, 3).unwrap(), vec![1, 2, 3]);
        assert_eq!(
            collect(&seq, 2).unwrap_err(),
            Error::NonTermination { limit: 2 }
        );
    }

    #[test]
    fn test_collect_rejects_zero_limit() {
        assert_eq!(
            collect(&values(vec![1]), 0).unwrap_err(),
            Error::invalid("collect limit must be positive")
        );
    }

    #[test]
    fn test_for_each_returns_final_value() {
        let seq = coroutine(|| {
            let mut at = 0;
            move |_resume: Option<()>| {
                at += 1;
                Ok(match at {
                    1 => Step::Yielded(10),
                    2 => Step::Yielded(20),
                    _ => Step::Done(Some(99)),
                })
            }
        });

        let mut seen = Vec::new();
        let final_value = for_each(&seq, |x| seen.push(x)).unwrap();
        assert_eq!(seen, vec![10, 20]);
        assert_eq!(final_value, Some(99));
    }

    #[test]
    fn test_for_each_propagates_failure() {
        let seq = coroutine(|| {
            let mut at = 0;
            move |_resume: Option<()>| {
                at += 1;
                match at {
                    1 => Ok(Step::Yielded(1)),
                    _ => Err(Error::computation("mid-drive")),
                }
            }
        });

        let mut seen = Vec::new();
        let err = for_each(&seq, |x| seen.push(x)).unwrap_err();
        assert_eq!(seen, vec![1]);
        assert_eq!(err, Error::computation("mid-drive"));
    }
}
