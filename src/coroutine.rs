//! Sequences backed by suspendable computation bodies.
//!
//! A [`Coroutine`] sequence spawns cursors that run a resumable body
//! between suspension points. The body is an explicit step closure
//! `FnMut(Option<R>) -> Result<Step<T>>`: each invocation resumes the
//! computation with the caller-supplied resume value, runs it until the
//! next suspension point, and reports what happened as a [`Step`]. Local
//! bindings live in the closure's captures, so they span the whole run of
//! suspensions without reinitialization.
//!
//! Construction is lazy end to end: building the sequence runs nothing,
//! spawning a cursor only instantiates a fresh body, and the body first
//! executes on the first advance.
//!
//! # Examples
//!
//! A counter that yields three values and then returns a final one:
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let seq = coroutine(|| {
//!     let mut at = 0;
//!     move |_resume: Option<()>| {
//!         at += 1;
//!         Ok(match at {
//!             1..=3 => Step::Yielded(at * 10),
//!             _ => Step::Done(Some(99)),
//!         })
//!     }
//! });
//!
//! let mut cursor = seq.cursor();
//! assert_eq!(cursor.advance(None).unwrap(), Step::Yielded(10));
//! assert_eq!(cursor.advance(None).unwrap(), Step::Yielded(20));
//! assert_eq!(cursor.advance(None).unwrap(), Step::Yielded(30));
//! assert_eq!(cursor.advance(None).unwrap(), Step::Done(Some(99)));
//! assert_eq!(cursor.advance(None).unwrap(), Step::done());
//! ```

use std::marker::PhantomData;
use std::mem;

use crate::cursor::Cursor;
use crate::error::Result;
use crate::sequence::Sequence;
use crate::step::Step;

/// A [`Sequence`] whose cursors run a suspendable body.
///
/// Holds only the body factory; all progression state lives in the cursors
/// it spawns.
pub struct Coroutine<F, R> {
    factory: F,
    _resume: PhantomData<fn(R)>,
}

/// Create a coroutine sequence from a body factory.
///
/// `factory` is invoked once per cursor and must return a fresh body
/// closure; the body is not executed until the cursor's first advance.
/// Within the body, returning `Step::Yielded(v)` suspends with `v`,
/// `Step::Done(v)` finishes (optionally with a final value), and `Err`
/// fails the cursor permanently.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// // body of the form: `a = yield; yield a + 1`
/// let seq = coroutine(|| {
///     let mut at = 0;
///     move |resume: Option<i32>| {
///         at += 1;
///         Ok(match at {
///             1 => Step::Yielded(0),
///             2 => Step::Yielded(resume.unwrap_or(0) + 1),
///             _ => Step::done(),
///         })
///     }
/// });
///
/// let mut cursor = seq.cursor();
/// // the first advance has no suspension point to feed, so any resume
/// // value would be ignored
/// assert_eq!(cursor.advance(None).unwrap(), Step::Yielded(0));
/// assert_eq!(cursor.advance(Some(10)).unwrap(), Step::Yielded(11));
/// ```
pub fn coroutine<F, B, R, T>(factory: F) -> Coroutine<F, R>
where
    F: Fn() -> B,
    B: FnMut(Option<R>) -> Result<Step<T>>,
{
    Coroutine {
        factory,
        _resume: PhantomData,
    }
}

impl<F, B, R, T> Sequence for Coroutine<F, R>
where
    F: Fn() -> B,
    B: FnMut(Option<R>) -> Result<Step<T>>,
{
    type Item = T;
    type Resume = R;
    type Cursor = CoroutineCursor<B, R>;

    fn cursor(&self) -> Self::Cursor {
        CoroutineCursor {
            state: State::Unstarted((self.factory)()),
            _resume: PhantomData,
        }
    }
}

/// Cursor over a coroutine body.
///
/// Progresses through `Unstarted -> Suspended -> ... -> Finished`; the
/// `Finished` state is terminal and covers normal completion as well as
/// failure (fail-once: the error surfaces on the advance that hit it, and
/// later advances report plain exhaustion).
pub struct CoroutineCursor<B, R> {
    state: State<B>,
    _resume: PhantomData<fn(R)>,
}

enum State<B> {
    Unstarted(B),
    Suspended(B),
    Finished,
}

impl<B, R, T> Cursor for CoroutineCursor<B, R>
where
    B: FnMut(Option<R>) -> Result<Step<T>>,
{
    type Item = T;
    type Resume = R;

    fn advance(&mut self, resume: Option<R>) -> Result<Step<T>> {
        let (mut body, resume) = match mem::replace(&mut self.state, State::Finished) {
            // no suspension point exists yet to receive a resume value
            State::Unstarted(body) => (body, None),
            State::Suspended(body) => (body, resume),
            State::Finished => return Ok(Step::done()),
        };

        match body(resume) {
            Ok(Step::Yielded(value)) => {
                self.state = State::Suspended(body);
                Ok(Step::Yielded(value))
            }
            // the body is dropped here, so destructors of its captured
            // bindings run before the terminal step reaches the caller
            Ok(step) => Ok(step),
            Err(err) => Err(err),
        }
    }
}
