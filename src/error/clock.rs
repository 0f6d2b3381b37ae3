use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    StartOfDay,
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Clock(err).into()
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
            StartOfDay => f.write_str(
                "failed to find the start of the current day \
                 in the system time zone",
            ),
        }
    }
}
