use std::sync::Arc;

#[cfg(feature = "std")]
pub(crate) mod clock;
pub(crate) mod duration;
pub(crate) mod fmt;

/// An error that can occur in this crate.
///
/// Errors fall into a small number of categories:
///
/// * An invalid argument. For example, constructing a [`Duration`] from a
/// magnitude that isn't finite, or dividing a duration by zero.
/// * An invalid format. This only ever comes from the strict ISO 8601
/// grammar. The free-form grammar never fails.
/// * A range error. This occurs when arithmetic produces a magnitude that
/// can no longer be represented as a finite number of milliseconds.
/// * A failure to read the system clock or time zone, which can only happen
/// in the wall clock factories like [`Duration::since_midnight`].
///
/// # Introspection is limited
///
/// Other than implementing the [`std::error::Error`] trait, the
/// [`core::fmt::Debug`] trait and the [`core::fmt::Display`] trait, this
/// error type provides a few predicates like [`Error::is_invalid_format`].
/// The predicates are not exhaustive.
///
/// # Design
///
/// This crate follows the "One True God Error Type Pattern," where only one
/// error type exists for a variety of different operations. Errors may carry
/// a chain of causes. The `Display` impl shows the whole chain, from the
/// highest level context down to the root cause.
///
/// [`Duration`]: crate::Duration
/// [`Duration::since_midnight`]: crate::Duration::since_midnight
#[derive(Clone)]
pub struct Error {
    /// The internal representation of an error.
    ///
    /// This is in an `Arc` to make an `Error` cloneable and one word in size.
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Creates a new error value from `core::fmt::Arguments`.
    ///
    /// It is expected to use [`format_args!`](format_args) from
    /// Rust's standard library (available in `core`) to create a
    /// `core::fmt::Arguments`.
    ///
    /// Callers should generally use their own error types. But in some
    /// circumstances, it can be convenient to manufacture an error value
    /// of this crate specifically.
    ///
    /// # Example
    ///
    /// ```
    /// use dura::Error;
    ///
    /// let err = Error::from_args(format_args!("something failed"));
    /// assert_eq!(err.to_string(), "something failed");
    /// ```
    pub fn from_args<'a>(message: core::fmt::Arguments<'a>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::from_args(message)))
    }

    /// Returns true when this error originated from an argument that can
    /// never produce a valid duration.
    ///
    /// # Example
    ///
    /// ```
    /// use dura::Duration;
    ///
    /// assert!(Duration::try_from_millis(f64::NAN).unwrap_err().is_invalid_argument());
    /// assert!(Duration::from_millis(5.0).divided_by(0.0).unwrap_err().is_invalid_argument());
    /// ```
    pub fn is_invalid_argument(&self) -> bool {
        use self::duration::Error as DurationError;

        matches!(
            *self.root().kind(),
            ErrorKind::Duration(
                DurationError::NonFiniteMillis { .. }
                    | DurationError::NonFiniteScalar { .. }
                    | DurationError::DivideByZero
                    | DurationError::NegativeToUnsigned { .. }
            )
        )
    }

    /// Returns true when this error originated from input that does not
    /// match the ISO 8601 duration grammar.
    ///
    /// # Example
    ///
    /// ```
    /// use dura::Duration;
    ///
    /// assert!("P1M".parse::<Duration>().unwrap_err().is_invalid_format());
    /// assert!("P15D".parse::<Duration>().unwrap_err().is_invalid_format());
    /// ```
    pub fn is_invalid_format(&self) -> bool {
        matches!(*self.root().kind(), ErrorKind::FmtIso8601(_))
    }

    /// Returns true when this error originated as a result of arithmetic
    /// producing a magnitude that isn't finite.
    ///
    /// # Example
    ///
    /// ```
    /// use dura::Duration;
    ///
    /// let big = Duration::from_millis(f64::MAX);
    /// assert!(big.plus(big).unwrap_err().is_range());
    /// ```
    pub fn is_range(&self) -> bool {
        use self::duration::Error as DurationError;

        matches!(
            *self.root().kind(),
            ErrorKind::Duration(DurationError::Overflow { .. })
        )
    }
}

impl Error {
    /// Wraps an error from Jiff. This is only used for errors that occur
    /// while reading the system clock and time zone.
    #[cfg(feature = "std")]
    #[inline(never)]
    #[cold]
    pub(crate) fn jiff(err: jiff::Error) -> Error {
        Error::from(ErrorKind::Jiff(err))
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        assert!(
            err.inner.cause.is_none(),
            "cause of consequence must be `None`"
        );
        match Arc::get_mut(&mut err.inner) {
            Some(inner) => {
                inner.cause = Some(self);
                err
            }
            // The consequent is shared, so we can't attach a cause to it
            // without affecting its other owners. Rebuild it instead.
            None => {
                let kind = err.inner.kind.clone();
                Error {
                    inner: Arc::new(ErrorInner { kind, cause: Some(self) }),
                }
            }
        }
    }

    /// Returns the root error in this chain.
    fn root(&self) -> &Error {
        let mut err = self;
        while let Some(ref cause) = err.inner.cause {
            err = cause;
        }
        err
    }

    /// Returns a chain of error values.
    ///
    /// This starts with the most recent error added to the chain. That is,
    /// the highest level context. The last error in the chain is always the
    /// "root" cause. That is, the error closest to the point where something
    /// has gone wrong.
    ///
    /// The iterator returned is guaranteed to yield at least one error.
    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.cause.as_ref()?;
            Some(err)
        }))
    }

    /// Returns the kind of this error.
    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

/// The underlying kind of a [`Error`].
#[derive(Clone, Debug)]
enum ErrorKind {
    Adhoc(AdhocError),
    #[cfg(feature = "std")]
    Clock(self::clock::Error),
    Duration(self::duration::Error),
    FmtIso8601(self::fmt::iso8601::Error),
    #[cfg(feature = "std")]
    Jiff(jiff::Error),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match *self {
            Adhoc(ref msg) => msg.fmt(f),
            #[cfg(feature = "std")]
            Clock(ref err) => err.fmt(f),
            Duration(ref err) => err.fmt(f),
            FmtIso8601(ref err) => err.fmt(f),
            #[cfg(feature = "std")]
            Jiff(ref err) => err.fmt(f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { inner: Arc::new(ErrorInner { kind, cause: None }) }
    }
}

/// A generic error message.
///
/// This supports the `Error::from_args` public API, which permits users to
/// manifest their own `Error` values from an arbitrary message.
#[derive(Clone)]
struct AdhocError {
    message: Box<str>,
}

impl AdhocError {
    fn from_args<'a>(message: core::fmt::Arguments<'a>) -> AdhocError {
        AdhocError { message: message.to_string().into_boxed_str() }
    }
}

impl std::error::Error for AdhocError {}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.message, f)
    }
}

impl core::fmt::Debug for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.message, f)
    }
}

/// A simple trait to encapsulate automatic conversion to `Error`.
///
/// This trait basically exists to make `Error::context` work without needing
/// to rely on public `From` impls for the structured error types, which are
/// all crate-internal.
pub(crate) trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

/// A trait for contextualizing error values.
///
/// This makes it easy to contextualize either `Error` or `Result<T, Error>`.
/// Specifically, in the latter case, it absolves one of the need to call
/// `map_err` everywhere one wants to add context to an error.
pub(crate) trait ErrorContext<T, E> {
    /// Contextualize the given consequent error with this (`self`) error as
    /// the cause.
    ///
    /// This is equivalent to saying that "consequent is caused by self."
    fn context(self, consequent: impl IntoError) -> Result<T, Error>;
}

impl<T, E> ErrorContext<T, E> for Result<T, E>
where
    E: IntoError,
{
    fn context(self, consequent: impl IntoError) -> Result<T, Error> {
        self.map_err(|err| {
            err.into_error().context_impl(consequent.into_error())
        })
    }
}
