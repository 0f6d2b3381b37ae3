use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    DivideByZero,
    NegativeToUnsigned { millis: f64 },
    NonFiniteMillis { given: f64 },
    NonFiniteScalar { given: f64 },
    Overflow { operation: &'static str },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Duration(err).into()
    }
}

impl error::IntoError for Error {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            DivideByZero => f.write_str("cannot divide a duration by zero"),
            NegativeToUnsigned { millis } => write!(
                f,
                "cannot convert negative duration of {millis}ms \
                 to unsigned `std::time::Duration`",
            ),
            NonFiniteMillis { given } => write!(
                f,
                "duration magnitude must be a finite number \
                 of milliseconds, but got {given}",
            ),
            NonFiniteScalar { given } => write!(
                f,
                "scalar for duration arithmetic must be finite, \
                 but got {given}",
            ),
            Overflow { operation } => write!(
                f,
                "duration magnitude is no longer finite after {operation}",
            ),
        }
    }
}
