/*!
A printer for durations as colon delimited, zero padded fields.

By default, every unit from days down to nanoseconds is printed in the
order `d:h:m:s:ms:us:ns`. Days, hours, minutes and seconds are padded to two
digits. Milliseconds, microseconds and nanoseconds are padded to three.
Negative values get their sign in front of the padding.

```
use dura::{fmt::colon::ColonPrinter, Duration, Unit};

let d = Duration::from_millis(59_834_344.25);
assert_eq!(ColonPrinter::new().print_duration(&d), "00:16:37:14:344:250:000");

let printer = ColonPrinter::new().units(Unit::Hour, Unit::Second);
assert_eq!(printer.print_duration(&d), "16:37:14");
assert_eq!(printer.print_duration(&d.negated()), "-16:-37:-14");
```
*/

use crate::{unit::Unit, Duration};

/// Which fields a [`ColonPrinter`] writes.
#[derive(Clone, Copy, Debug)]
enum Fields {
    /// A contiguous range of units, biggest first, inclusive on both ends.
    Padded { from: Unit, to: Unit },
    /// Every unit, unpadded. This is what an invalid range selects.
    Raw,
}

/// A printer for colon delimited durations.
///
/// This is a builder. The default configuration prints every unit.
#[derive(Clone, Copy, Debug)]
pub struct ColonPrinter {
    fields: Fields,
}

impl ColonPrinter {
    /// Create a new printer that prints every unit, zero padded.
    pub const fn new() -> ColonPrinter {
        ColonPrinter {
            fields: Fields::Padded { from: Unit::Day, to: Unit::Nanosecond },
        }
    }

    /// Restricts printing to the units from `from` down to `to`, inclusive.
    ///
    /// When `from` is smaller than `to`, the range is invalid and the printer
    /// falls back to writing every unit without any padding.
    ///
    /// ```
    /// use dura::{fmt::colon::ColonPrinter, Duration, Unit};
    ///
    /// let d = Duration::from_millis(59_834_344.25);
    /// let printer = ColonPrinter::new().units(Unit::Minute, Unit::Millisecond);
    /// assert_eq!(printer.print_duration(&d), "37:14:344");
    ///
    /// let printer = ColonPrinter::new().units(Unit::Second, Unit::Hour);
    /// assert_eq!(printer.print_duration(&d), "0:16:37:14:344:250:0");
    /// ```
    pub const fn units(self, from: Unit, to: Unit) -> ColonPrinter {
        let fields = if (from as u8) < (to as u8) {
            Fields::Raw
        } else {
            Fields::Padded { from, to }
        };
        ColonPrinter { fields, ..self }
    }

    /// Like [`ColonPrinter::units`], but the units are given by their
    /// abbreviation, e.g., `"h"` or `"ms"`.
    ///
    /// An unrecognized abbreviation selects the unpadded fallback.
    ///
    /// ```
    /// use dura::{fmt::colon::ColonPrinter, Duration};
    ///
    /// let d = Duration::from_millis(59_834_344.25);
    /// assert_eq!(ColonPrinter::new().range("h", "s").print_duration(&d), "16:37:14");
    /// assert_eq!(
    ///     ColonPrinter::new().range("h", "weeks").print_duration(&d),
    ///     "0:16:37:14:344:250:0",
    /// );
    /// ```
    pub fn range(self, from: &str, to: &str) -> ColonPrinter {
        match (Unit::from_abbreviation(from), Unit::from_abbreviation(to)) {
            (Some(from), Some(to)) => self.units(from, to),
            _ => {
                warn!(
                    "unrecognized colon range {from:?}..{to:?}, \
                     falling back to raw values",
                );
                ColonPrinter { fields: Fields::Raw, ..self }
            }
        }
    }

    /// Print the given duration to a new string.
    pub fn print_duration(&self, duration: &Duration) -> String {
        let mut buf = String::with_capacity(27);
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
        let (from, to, pad) = match self.fields {
            Fields::Padded { from, to } => (from, to, true),
            Fields::Raw => (Unit::Day, Unit::Nanosecond, false),
        };
        let units = &Unit::ALL[from.index()..=to.index()];
        for (i, &unit) in units.iter().enumerate() {
            if i > 0 {
                wtr.write_str(":")?;
            }
            let value = duration.get(unit);
            if !pad {
                write!(wtr, "{value}")?;
                continue;
            }
            if value < 0 {
                wtr.write_str("-")?;
            }
            write!(
                wtr,
                "{:0width$}",
                value.unsigned_abs(),
                width = unit.padding(),
            )?;
        }
        Ok(())
    }
}

impl Default for ColonPrinter {
    fn default() -> ColonPrinter {
        ColonPrinter::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(millis: f64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn all_units() {
        let p = |millis: f64| ColonPrinter::new().print_duration(&d(millis));

        insta::assert_snapshot!(p(0.0), @"00:00:00:00:000:000:000");
        insta::assert_snapshot!(p(59_834_344.25), @"00:16:37:14:344:250:000");
        insta::assert_snapshot!(p(1_000.0 * 86_400_000.0), @"1000:00:00:00:000:000:000");
        insta::assert_snapshot!(p(-1_500.0), @"00:00:00:-01:-500:000:000");
        insta::assert_snapshot!(p(0.001_953_125), @"00:00:00:00:000:001:953");
    }

    #[test]
    fn ranges() {
        let p = |from: &str, to: &str| {
            ColonPrinter::new().range(from, to).print_duration(&d(59_834_344.25))
        };

        insta::assert_snapshot!(p("d", "ns"), @"00:16:37:14:344:250:000");
        insta::assert_snapshot!(p("h", "s"), @"16:37:14");
        insta::assert_snapshot!(p("m", "m"), @"37");
        insta::assert_snapshot!(p("ms", "us"), @"344:250");
        insta::assert_snapshot!(p("µs", "ns"), @"250:000");
        insta::assert_snapshot!(p("s", "h"), @"0:16:37:14:344:250:0");
        insta::assert_snapshot!(p("H", "S"), @"0:16:37:14:344:250:0");
        insta::assert_snapshot!(p("", ""), @"0:16:37:14:344:250:0");
    }

    #[test]
    fn writer() {
        let mut buf = String::from("elapsed ");
        ColonPrinter::new()
            .units(Unit::Minute, Unit::Second)
            .print_duration_to(&d(61_000.0), &mut buf)
            .unwrap();
        assert_eq!(buf, "elapsed 01:01");
    }
}
