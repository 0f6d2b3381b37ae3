/*!
A strict parser and printer for a subset of ISO 8601 durations.

The grammar supported is:

```text
duration    = sign? "P" days? "T" time
sign        = "+" | "-"
days        = number "D"
time        = (number "H")? (number "M")? (number ("." digits)? "S")?
```

Designators are case insensitive. Years, months and weeks are rejected
since none of them have a fixed length. The time designator `T` is always
required, even when no time units follow it.

Every number must be followed by exactly one designator. Each designator
may appear at most once, and designators must go from the biggest unit to
the smallest. Only seconds may have a fractional part.

# Printing

[`Printer`] writes the days, then `T`, then hours, minutes and seconds with
milliseconds as a three digit fraction. Zero units are omitted. If no time
units are written, `0S` is written after `T` so that the output can always
be parsed again. Precision smaller than a millisecond is dropped.

```
use dura::{fmt::iso8601, Duration};

let d = Duration::new("15 days 1h 30m 45.5s")?;
assert_eq!(iso8601::print(&d), "P15DT1H30M45.500S");
assert_eq!(iso8601::print(&d.negated()), "-P15DT1H30M45.500S");
assert_eq!(iso8601::print(&Duration::new("2 days")?), "P2DT0S");

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

use crate::{
    error::{fmt::iso8601::Error as E, Error, ErrorContext},
    unit::Unit,
    Duration,
};

/// Parses an ISO 8601 duration into a magnitude in milliseconds.
///
/// Leading or trailing whitespace is not permitted. See the
/// [module documentation](self) for the grammar.
///
/// # Errors
///
/// This returns an error when the input doesn't match the grammar, including
/// when it uses years, months or weeks.
///
/// # Example
///
/// ```
/// use dura::fmt::iso8601;
///
/// assert_eq!(iso8601::parse("PT1H30M45.500S")?, 5_445_500.0);
/// assert_eq!(iso8601::parse("-p1dt")?, -86_400_000.0);
/// assert!(iso8601::parse("P1W").is_err());
/// assert!(iso8601::parse("P1D").is_err());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse(input: &str) -> Result<f64, Error> {
    parse_impl(input).context(E::Failed)
}

/// Prints the given duration as an ISO 8601 duration.
///
/// This is what `Duration`'s `Display` impl writes.
pub fn print(duration: &Duration) -> String {
    Printer::new().print_duration(duration)
}

/// Returns true when the given input should be handled by this grammar
/// rather than the friendly grammar.
///
/// That is, the input (ignoring surrounding whitespace) is an optional sign
/// followed by `P` and then a digit or `T`. Input like `"5 ps"` or
/// `"pending"` is not ISO 8601.
pub(crate) fn is_iso8601(input: &str) -> bool {
    let input = input.trim();
    let input =
        input.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(input);
    let mut chars = input.chars();
    if !matches!(chars.next(), Some('P' | 'p')) {
        return false;
    }
    matches!(chars.next(), Some('0'..='9' | 'T' | 't'))
}

fn parse_impl(input: &str) -> Result<f64, Error> {
    let Parsed { value: negative, input: rest } = parse_sign(input);
    let Parsed { input: rest, .. } = parse_duration_designator(rest)?;
    let Parsed { value: date, input: rest } =
        parse_units(rest, Section::Date)?;
    let Parsed { value: has_time, input: rest } = parse_time_designator(rest);
    if !has_time {
        return Err(Error::from(E::ExpectedTimeDesignator));
    }
    let Parsed { value: time, .. } = parse_units(rest, Section::Time)?;

    let millis = date + time;
    debug!("parsed ISO 8601 duration {input:?} as {millis}ms");
    Ok(if negative { -millis } else { millis })
}

/// A value parsed from the front of some input, along with the input that
/// remains.
struct Parsed<'i, V> {
    value: V,
    input: &'i str,
}

/// Which side of the time designator a sequence of units is on.
#[derive(Clone, Copy, Debug)]
enum Section {
    Date,
    Time,
}

impl Section {
    /// Maps a designator in this section to its unit.
    fn unit(self, ch: char) -> Result<Unit, Error> {
        match (self, ch) {
            (Section::Date, 'D' | 'd') => Ok(Unit::Day),
            (Section::Date, 'Y' | 'y' | 'M' | 'm' | 'W' | 'w') => {
                debug!("rejecting calendar unit {ch:?} in ISO 8601 duration");
                Err(Error::from(E::UnsupportedCalendarUnit { ch }))
            }
            (Section::Time, 'H' | 'h') => Ok(Unit::Hour),
            (Section::Time, 'M' | 'm') => Ok(Unit::Minute),
            (Section::Time, 'S' | 's') => Ok(Unit::Second),
            (Section::Date, _) => {
                Err(Error::from(E::UnexpectedDateChar { ch }))
            }
            (Section::Time, _) => {
                Err(Error::from(E::UnexpectedTimeChar { ch }))
            }
        }
    }
}

// Sign ::: one of
//   + -
fn parse_sign(input: &str) -> Parsed<'_, bool> {
    if let Some(tail) = input.strip_prefix('+') {
        Parsed { value: false, input: tail }
    } else if let Some(tail) = input.strip_prefix('-') {
        Parsed { value: true, input: tail }
    } else {
        Parsed { value: false, input }
    }
}

// DurationDesignator ::: one of
//   P p
fn parse_duration_designator(input: &str) -> Result<Parsed<'_, ()>, Error> {
    let mut chars = input.chars();
    match chars.next() {
        None => {
            Err(Error::from(E::ExpectedDurationDesignatorFoundEndOfInput))
        }
        Some('P' | 'p') => Ok(Parsed { value: (), input: chars.as_str() }),
        Some(ch) => {
            Err(Error::from(E::ExpectedDurationDesignatorFoundChar { ch }))
        }
    }
}

// TimeDesignator ::: one of
//   T t
fn parse_time_designator(input: &str) -> Parsed<'_, bool> {
    match input.strip_prefix(|c: char| c == 'T' || c == 't') {
        Some(tail) => Parsed { value: true, input: tail },
        None => Parsed { value: false, input },
    }
}

/// Parses a sequence of `number designator` pairs and returns their sum in
/// milliseconds.
///
/// The date section stops at the time designator. The time section must
/// consume the rest of the input. Each designator may appear at most once,
/// and designators must go from the biggest unit to the smallest.
fn parse_units(
    mut input: &str,
    section: Section,
) -> Result<Parsed<'_, f64>, Error> {
    let mut millis = 0.0;
    let mut previous: Option<(Unit, char)> = None;
    loop {
        let Some(first) = input.chars().next() else { break };
        if matches!(section, Section::Date) && matches!(first, 'T' | 't') {
            break;
        }
        let Parsed { value: number, input: rest } =
            parse_number(input, section)?;
        let mut chars = rest.chars();
        let Some(ch) = chars.next() else {
            return Err(Error::from(E::ExpectedDesignatorFoundEndOfInput));
        };
        let unit = section.unit(ch)?;
        if number.fractional && unit != Unit::Second {
            return Err(Error::from(E::FractionalUnit { ch }));
        }
        if let Some((prev_unit, prev)) = previous {
            if unit == prev_unit {
                return Err(Error::from(E::RepeatedDesignator { ch }));
            }
            if unit > prev_unit {
                return Err(Error::from(E::DesignatorOutOfOrder {
                    ch,
                    prev,
                }));
            }
        }
        millis += number.value * unit.millis();
        previous = Some((unit, ch));
        input = chars.as_str();
    }
    Ok(Parsed { value: millis, input })
}

/// A non-negative decimal number.
#[derive(Clone, Copy, Debug)]
struct Number {
    value: f64,
    fractional: bool,
}

// Number :::
//   Digits
//   Digits . Digits
fn parse_number(
    input: &str,
    section: Section,
) -> Result<Parsed<'_, Number>, Error> {
    let digits = leading_digits(input);
    if digits == 0 {
        // Reaching here means `input` is non-empty.
        let ch = input.chars().next().unwrap_or_default();
        return Err(match section.unit(ch) {
            Ok(_) => Error::from(E::ExpectedNumber { ch }),
            Err(err) => err,
        });
    }
    let mut end = digits;
    let mut fractional = false;
    if input[end..].starts_with('.') {
        let fraction = leading_digits(&input[end + 1..]);
        if fraction == 0 {
            return Err(Error::from(E::ExpectedFractionDigits));
        }
        end += 1 + fraction;
        fractional = true;
    }
    let (number, rest) = input.split_at(end);
    // OK because `number` is ASCII digits with an optional fraction, which
    // always parses. Enormous values become infinite and are rejected by
    // the caller.
    let value: f64 = number.parse().expect("decimal number always parses");
    Ok(Parsed { value: Number { value, fractional }, input: rest })
}

/// Returns the number of ASCII digits at the start of the given input.
fn leading_digits(input: &str) -> usize {
    input.bytes().take_while(u8::is_ascii_digit).count()
}

/// A printer for ISO 8601 durations.
///
/// This printer has no configuration. It exists so that printing can write
/// to any [`core::fmt::Write`] implementation without allocating.
///
/// # Example
///
/// ```
/// use dura::{fmt::iso8601::Printer, Duration};
///
/// let mut buf = String::new();
/// Printer::new().print_duration_to(&Duration::from_millis(1.0), &mut buf)?;
/// assert_eq!(buf, "PT0.001S");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Printer {
    _priv: (),
}

impl Printer {
    /// Create a new ISO 8601 printer.
    pub const fn new() -> Printer {
        Printer { _priv: () }
    }

    /// Print the given duration to a new string.
    pub fn print_duration(&self, duration: &Duration) -> String {
        let mut buf = String::with_capacity(24);
        // OK because writing to a `String` never fails.
        let _ = self.print_duration_to(duration, &mut buf);
        buf
    }

    /// Print the given duration to the writer given.
    ///
    /// This only returns an error when the given writer returns an error.
    pub fn print_duration_to<W: core::fmt::Write>(
        &self,
        duration: &Duration,
        mut wtr: W,
    ) -> core::fmt::Result {
        if duration.is_negative() {
            wtr.write_str("-")?;
        }
        let d = duration.abs();
        wtr.write_str("P")?;
        if d.get_days() != 0 {
            write!(wtr, "{}D", d.get_days())?;
        }
        wtr.write_str("T")?;

        let mut wrote_time = false;
        if d.get_hours() != 0 {
            write!(wtr, "{}H", d.get_hours())?;
            wrote_time = true;
        }
        if d.get_minutes() != 0 {
            write!(wtr, "{}M", d.get_minutes())?;
            wrote_time = true;
        }
        let (secs, millis) = (d.get_seconds(), d.get_milliseconds());
        if secs != 0 || millis != 0 {
            write!(wtr, "{secs}.{millis:03}S")?;
            wrote_time = true;
        }
        if !wrote_time {
            wtr.write_str("0S")?;
        }
        Ok(())
    }
}
