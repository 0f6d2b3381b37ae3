use crate::{error, util::escape};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    DesignatorOutOfOrder { ch: char, prev: char },
    ExpectedDesignatorFoundEndOfInput,
    ExpectedDurationDesignatorFoundChar { ch: char },
    ExpectedDurationDesignatorFoundEndOfInput,
    ExpectedFractionDigits,
    ExpectedNumber { ch: char },
    ExpectedTimeDesignator,
    Failed,
    FractionalUnit { ch: char },
    RepeatedDesignator { ch: char },
    UnexpectedDateChar { ch: char },
    UnexpectedTimeChar { ch: char },
    UnsupportedCalendarUnit { ch: char },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::FmtIso8601(err).into()
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
            DesignatorOutOfOrder { ch, prev } => write!(
                f,
                "found unit designator `{ch}` after `{prev}` \
                 in ISO 8601 duration, but units must go from \
                 biggest to smallest",
                ch = escape::Char(ch),
                prev = escape::Char(prev),
            ),
            ExpectedDesignatorFoundEndOfInput => f.write_str(
                "expected a unit designator after a number \
                 in ISO 8601 duration, but found end of input",
            ),
            ExpectedDurationDesignatorFoundChar { ch } => write!(
                f,
                "expected to find duration beginning with `P` or `p`, \
                 but found `{ch}` instead",
                ch = escape::Char(ch),
            ),
            ExpectedDurationDesignatorFoundEndOfInput => f.write_str(
                "expected to find duration beginning with `P` or `p`, \
                 but found end of input",
            ),
            ExpectedFractionDigits => f.write_str(
                "expected at least one digit after the decimal point \
                 in ISO 8601 duration",
            ),
            ExpectedNumber { ch } => write!(
                f,
                "expected a number before unit designator `{ch}` \
                 in ISO 8601 duration",
                ch = escape::Char(ch),
            ),
            ExpectedTimeDesignator => f.write_str(
                "expected to find time designator `T` or `t` \
                 in ISO 8601 duration, but none was found",
            ),
            Failed => f.write_str(
                "failed to parse input as an ISO 8601 duration",
            ),
            FractionalUnit { ch } => write!(
                f,
                "found a fractional number before unit designator `{ch}` \
                 in ISO 8601 duration, but only seconds may be fractional",
                ch = escape::Char(ch),
            ),
            RepeatedDesignator { ch } => write!(
                f,
                "found unit designator `{ch}` more than once \
                 in ISO 8601 duration",
                ch = escape::Char(ch),
            ),
            UnexpectedDateChar { ch } => write!(
                f,
                "expected a number followed by the day designator `D` \
                 before the time designator, but found `{ch}` instead",
                ch = escape::Char(ch),
            ),
            UnexpectedTimeChar { ch } => write!(
                f,
                "expected a number followed by a time unit designator \
                 (`H`, `M` or `S`) after the time designator, \
                 but found `{ch}` instead",
                ch = escape::Char(ch),
            ),
            UnsupportedCalendarUnit { ch } => write!(
                f,
                "found calendar unit designator `{ch}` in ISO 8601 \
                 duration, but years, months and weeks are not supported \
                 because they have no fixed length",
                ch = escape::Char(ch),
            ),
        }
    }
}
