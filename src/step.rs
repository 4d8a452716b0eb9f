//! One unit of output from a cursor.

/// Result of advancing a cursor: either the next element of the sequence or
/// the terminal step.
///
/// `Step` plays the role `Option` plays for optional values: it is the
/// protocol's wire type. A terminal step may carry a final return value
/// (`Done(Some(v))`, produced when a coroutine body finishes with a value)
/// or nothing at all (`Done(None)`, plain exhaustion).
///
/// Once a cursor has produced any `Done` step, every later advance on it
/// produces `Done(None)`.
///
/// # Examples
///
/// ```rust
/// use lazyseq::Step;
///
/// let element: Step<i32> = Step::Yielded(42);
/// let finished: Step<i32> = Step::Done(Some(7));
///
/// assert_eq!(element.map(|x| x * 2), Step::Yielded(84));
/// assert_eq!(finished.map(|x| x * 2), Step::Done(Some(14)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step<T> {
    /// The next element of the sequence.
    Yielded(T),
    /// The sequence is finished, optionally with a final return value.
    Done(Option<T>),
}

impl<T> Step<T> {
    /// The bare terminal step, `Done(None)`.
    ///
    /// This is what exhausted cursors produce on every advance after their
    /// first terminal step.
    #[inline]
    pub const fn done() -> Self {
        Step::Done(None)
    }

    /// Returns `true` if the step is `Yielded`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Step;
    ///
    /// assert!(Step::Yielded(1).is_yielded());
    /// assert!(!Step::<i32>::done().is_yielded());
    /// ```
    #[inline]
    pub const fn is_yielded(&self) -> bool {
        matches!(self, Step::Yielded(_))
    }

    /// Returns `true` if the step is `Done`.
    #[inline]
    pub const fn is_done(&self) -> bool {
        matches!(self, Step::Done(_))
    }

    /// Converts into the yielded element, discarding a terminal step.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Step;
    ///
    /// assert_eq!(Step::Yielded(3).yielded_value(), Some(3));
    /// assert_eq!(Step::Done(Some(3)).yielded_value(), None);
    /// ```
    #[inline]
    pub fn yielded_value(self) -> Option<T> {
        match self {
            Step::Yielded(value) => Some(value),
            Step::Done(_) => None,
        }
    }

    /// Converts into the final return value, discarding a yielded element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Step;
    ///
    /// assert_eq!(Step::Done(Some("end")).done_value(), Some("end"));
    /// assert_eq!(Step::Yielded("mid").done_value(), None);
    /// ```
    #[inline]
    pub fn done_value(self) -> Option<T> {
        match self {
            Step::Yielded(_) => None,
            Step::Done(value) => value,
        }
    }

    /// Maps the payload (yielded element or final return value) through `f`,
    /// leaving the done flag untouched.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Step<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Step::Yielded(value) => Step::Yielded(f(value)),
            Step::Done(value) => Step::Done(value.map(f)),
        }
    }

    /// Converts from `&Step<T>` to `Step<&T>`.
    #[inline]
    pub fn as_ref(&self) -> Step<&T> {
        match self {
            Step::Yielded(value) => Step::Yielded(value),
            Step::Done(value) => Step::Done(value.as_ref()),
        }
    }

    /// Returns the yielded element, panicking with `msg` on a terminal step.
    ///
    /// # Panics
    ///
    /// Panics if the step is `Done`.
    #[inline]
    pub fn expect_yielded(self, msg: &str) -> T {
        match self {
            Step::Yielded(value) => value,
            Step::Done(_) => panic!("{}", msg),
        }
    }

    /// Returns the yielded element.
    ///
    /// # Panics
    ///
    /// Panics if the step is `Done`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Step;
    ///
    /// assert_eq!(Step::Yielded(9).unwrap_yielded(), 9);
    /// ```
    ///
    /// ```should_panic
    /// use lazyseq::Step;
    ///
    /// Step::<i32>::done().unwrap_yielded(); // panics
    /// ```
    #[inline]
    pub fn unwrap_yielded(self) -> T {
        match self {
            Step::Yielded(value) => value,
            Step::Done(_) => panic!("called `Step::unwrap_yielded()` on a `Done` step"),
        }
    }
}
