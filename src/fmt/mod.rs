/*!
Parsing and printing of durations.

# Parsing

Two grammars are supported:

* The [`friendly`] grammar is permissive and never fails. It finds each
unit independently anywhere in the input, e.g., `"2 hours and 5 mins"`.
* The [`iso8601`] grammar is strict. It supports durations like
`"P15DT1H30M45.500S"` and rejects years, months and weeks.

[`parse`] picks a grammar based on what the input looks like, and is what
`Duration`'s `FromStr` impl uses.

# Printing

* [`colon::ColonPrinter`] writes zero padded fields like
`00:16:37:14:344:250:000`.
* [`human::HumanPrinter`] writes `0d 16h 37m ..`, `16 hours, 37 minutes`
or `sixteen hours, thirty seven minutes`.
* [`iso8601::Printer`] writes ISO 8601 durations like `PT16H37M14.344S`.
This is what `Duration`'s `Display` impl uses.
* [`words::Speller`] spells out integers in English.
*/

use crate::error::Error;

pub mod colon;
pub mod friendly;
pub mod human;
pub mod iso8601;
#[cfg(feature = "serde")]
pub mod serde;
pub mod words;

/// Parses a duration in either supported grammar into a magnitude in
/// milliseconds.
///
/// If the input, ignoring surrounding whitespace, starts with an optional
/// sign followed by `P` and then a digit or `T`, it is parsed with the
/// strict [`iso8601`] grammar. Otherwise it is parsed with the
/// [`friendly`] grammar, which never fails.
///
/// # Errors
///
/// This only returns an error for input that looks like ISO 8601 but
/// doesn't match its grammar.
///
/// # Example
///
/// ```
/// use dura::fmt;
///
/// assert_eq!(fmt::parse("1m 30s")?, 90_000.0);
/// assert_eq!(fmt::parse(" PT1M30S ")?, 90_000.0);
/// assert_eq!(fmt::parse("gibberish")?, 0.0);
/// assert!(fmt::parse("P1M").is_err());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse(input: &str) -> Result<f64, Error> {
    if iso8601::is_iso8601(input) {
        debug!("parsing {input:?} as an ISO 8601 duration");
        iso8601::parse(input.trim())
    } else {
        trace!("parsing {input:?} as a friendly duration");
        Ok(friendly::parse(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch() {
        assert_eq!(parse("PT5S").unwrap(), 5_000.0);
        assert_eq!(parse("\tpt5s\n").unwrap(), 5_000.0);
        assert_eq!(parse("-PT5S").unwrap(), -5_000.0);
        // A `P` not followed by a digit or `T` isn't ISO 8601.
        assert_eq!(parse("P").unwrap(), 0.0);
        assert_eq!(parse("pause for 5s").unwrap(), 5_000.0);
        assert_eq!(parse("5 ps").unwrap(), 0.0);

        insta::assert_snapshot!(
            parse("P1D").unwrap_err(),
            @"failed to parse input as an ISO 8601 duration: expected to find time designator `T` or `t` in ISO 8601 duration, but none was found",
        );
        insta::assert_snapshot!(
            parse("PT1 minute").unwrap_err(),
            @"failed to parse input as an ISO 8601 duration: expected a number followed by a time unit designator (`H`, `M` or `S`) after the time designator, but found ` ` instead",
        );
    }
}
