/*!
A printer for durations in human readable formats.

Three formats are supported, selected with a [`Designator`]:

* [`Designator::Short`] writes each unit as a value followed by its
abbreviation, separated by spaces: `0d 1h 30m 0s 0ms 0us 0ns`.
* [`Designator::Verbose`] writes each unit as a value followed by its full
name, separated by commas: `1 hour, 30 minutes`.
* [`Designator::Words`] is like verbose, but spells out each value in
English: `one hour, thirty minutes`.

Units are always written biggest first. By default every unit is written,
even when it is zero. The printer can be restricted to a subset of units
with [`HumanPrinter::only`], and zero units can be hidden with
[`HumanPrinter::hide_zero`].

```
use dura::{fmt::human::{Designator, HumanPrinter}, Duration, Unit};

let d = Duration::new("1h 30m")?;
let printer = HumanPrinter::new().hide_zero(true);
assert_eq!(printer.print_duration(&d), "1h 30m");

let printer = printer.designator(Designator::Verbose);
assert_eq!(printer.print_duration(&d), "1 hour, 30 minutes");

let printer = HumanPrinter::new()
    .designator(Designator::Words)
    .only(&[Unit::Minute, Unit::Hour]);
assert_eq!(printer.print_duration(&d), "one hour, thirty minutes");

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

use crate::{fmt::words::Speller, unit::Unit, Duration};

/// How each unit is labeled by a [`HumanPrinter`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum Designator {
    /// The value followed directly by the unit's abbreviation, e.g., `5m`.
    /// Units are separated by a single space.
    #[default]
    Short,
    /// The value followed by a space and the unit's full name, e.g.,
    /// `5 minutes`. The name is singular only when the value is exactly `1`.
    /// Units are separated by a comma and a space.
    Verbose,
    /// Like `Verbose`, but the value is spelled out in English words, e.g.,
    /// `five minutes`. Negative values are prefixed with `minus`.
    Words,
}

/// A printer for human readable durations.
///
/// This is a builder. The default configuration writes every unit with
/// [`Designator::Short`].
#[derive(Clone, Copy, Debug)]
pub struct HumanPrinter {
    designator: Designator,
    /// A bit set over `Unit::index()`.
    selected: u8,
    hide_zero: bool,
    speller: Speller,
}

impl HumanPrinter {
    const ALL_UNITS: u8 = 0b111_1111;

    /// Create a new printer with the default configuration.
    pub const fn new() -> HumanPrinter {
        HumanPrinter {
            designator: Designator::Short,
            selected: HumanPrinter::ALL_UNITS,
            hide_zero: false,
            speller: Speller::new(),
        }
    }

    /// Sets how each unit is labeled.
    pub const fn designator(self, designator: Designator) -> HumanPrinter {
        HumanPrinter { designator, ..self }
    }

    /// Restricts printing to the given units.
    ///
    /// The order of the units given doesn't matter. Units are always
    /// written biggest first.
    ///
    /// If no units are given, or if every selected unit is hidden by
    /// [`HumanPrinter::hide_zero`], then the smallest selected unit (or
    /// nanoseconds, if none are selected) is written with a value of zero.
    ///
    /// ```
    /// use dura::{fmt::human::HumanPrinter, Duration, Unit};
    ///
    /// let d = Duration::from_millis(59_834_344.25);
    /// let printer = HumanPrinter::new().only(&[Unit::Second, Unit::Hour]);
    /// assert_eq!(printer.print_duration(&d), "16h 14s");
    /// ```
    pub fn only(self, units: &[Unit]) -> HumanPrinter {
        let selected = units
            .iter()
            .fold(0u8, |set, unit| set | (1 << unit.index()));
        HumanPrinter { selected, ..self }
    }

    /// Like [`HumanPrinter::only`], but units are named by their
    /// abbreviations: `d`, `h`, `m`, `s`, `ms`, `us` (or `µs`) and `ns`.
    ///
    /// Abbreviations are case sensitive. Unrecognized abbreviations are
    /// ignored.
    ///
    /// ```
    /// use dura::{fmt::human::HumanPrinter, Duration};
    ///
    /// let d = Duration::from_millis(59_834_344.25);
    /// let printer = HumanPrinter::new().only_abbreviations(&["s", "h"]);
    /// assert_eq!(printer.print_duration(&d), "16h 14s");
    /// ```
    pub fn only_abbreviations(self, keys: &[&str]) -> HumanPrinter {
        let selected = keys.iter().fold(0u8, |set, key| {
            match Unit::from_abbreviation(key) {
                Some(unit) => set | (1 << unit.index()),
                None => {
                    warn!("ignoring unrecognized unit abbreviation {key:?}");
                    set
                }
            }
        });
        HumanPrinter { selected, ..self }
    }

    /// When enabled, units whose value is zero are not written.
    ///
    /// ```
    /// use dura::{fmt::human::HumanPrinter, Duration};
    ///
    /// let printer = HumanPrinter::new().hide_zero(true);
    /// assert_eq!(printer.print_duration(&Duration::from_millis(3_600_000.5)), "1h 500us");
    /// assert_eq!(printer.print_duration(&Duration::ZERO), "0ns");
    /// ```
    pub const fn hide_zero(self, yes: bool) -> HumanPrinter {
        HumanPrinter { hide_zero: yes, ..self }
    }

    /// When enabled, [`Designator::Words`] spells out values using the
    /// Indian numbering system. See [`Speller::indian`].
    pub const fn indian(self, yes: bool) -> HumanPrinter {
        HumanPrinter { speller: self.speller.indian(yes), ..self }
    }

    /// Print the given duration to a new string.
    pub fn print_duration(&self, duration: &Duration) -> String {
        let mut buf = String::with_capacity(32);
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
        let separator = match self.designator {
            Designator::Short => " ",
            Designator::Verbose | Designator::Words => ", ",
        };
        let mut wrote = false;
        for unit in Unit::ALL {
            if !self.is_selected(unit) {
                continue;
            }
            let value = duration.get(unit);
            if self.hide_zero && value == 0 {
                continue;
            }
            if wrote {
                wtr.write_str(separator)?;
            }
            self.write_unit(unit, value, &mut wtr)?;
            wrote = true;
        }
        if !wrote {
            let smallest = Unit::ALL
                .iter()
                .rev()
                .copied()
                .find(|&unit| self.is_selected(unit))
                .unwrap_or(Unit::Nanosecond);
            self.write_unit(smallest, 0, &mut wtr)?;
        }
        Ok(())
    }

    fn write_unit<W: core::fmt::Write>(
        &self,
        unit: Unit,
        value: i64,
        wtr: &mut W,
    ) -> core::fmt::Result {
        let name = if value == 1 { unit.singular() } else { unit.plural() };
        match self.designator {
            Designator::Short => write!(wtr, "{value}{}", unit.abbreviation()),
            Designator::Verbose => write!(wtr, "{value} {name}"),
            Designator::Words => {
                if value < 0 {
                    wtr.write_str("minus ")?;
                }
                let words = self.speller.spell(value.unsigned_abs());
                write!(wtr, "{words} {name}")
            }
        }
    }

    fn is_selected(&self, unit: Unit) -> bool {
        self.selected & (1 << unit.index()) != 0
    }
}

impl Default for HumanPrinter {
    fn default() -> HumanPrinter {
        HumanPrinter::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(millis: f64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn short() {
        let p = |millis: f64| HumanPrinter::new().print_duration(&d(millis));

        insta::assert_snapshot!(p(0.0), @"0d 0h 0m 0s 0ms 0us 0ns");
        insta::assert_snapshot!(p(59_834_344.25), @"0d 16h 37m 14s 344ms 250us 0ns");
        insta::assert_snapshot!(p(-90_500.0), @"0d 0h -1m -30s -500ms 0us 0ns");
    }

    #[test]
    fn verbose() {
        let p = |millis: f64| {
            HumanPrinter::new()
                .designator(Designator::Verbose)
                .print_duration(&d(millis))
        };

        insta::assert_snapshot!(
            p(90_061_001.0),
            @"1 day, 1 hour, 1 minute, 1 second, 1 millisecond, 0 microseconds, 0 nanoseconds",
        );
        insta::assert_snapshot!(
            p(-121_920.0),
            @"0 days, 0 hours, -2 minutes, -1 seconds, -920 milliseconds, 0 microseconds, 0 nanoseconds",
        );
    }

    #[test]
    fn words() {
        let p = |millis: f64| {
            HumanPrinter::new()
                .designator(Designator::Words)
                .print_duration(&d(millis))
        };

        insta::assert_snapshot!(
            p(121_920.0),
            @"zero days, zero hours, two minutes, one second, nine hundred and twenty milliseconds, zero microseconds, zero nanoseconds",
        );
        insta::assert_snapshot!(
            p(-1_000.0),
            @"zero days, zero hours, zero minutes, minus one seconds, zero milliseconds, zero microseconds, zero nanoseconds",
        );
    }

    #[test]
    fn words_indian() {
        let printer = HumanPrinter::new()
            .designator(Designator::Words)
            .indian(true)
            .only(&[Unit::Day]);
        let d = d(150_000.0 * 86_400_000.0);
        insta::assert_snapshot!(
            printer.print_duration(&d),
            @"one lakh fifty thousand days",
        );
        insta::assert_snapshot!(
            printer.indian(false).print_duration(&d),
            @"one hundred and fifty thousand days",
        );
    }

    #[test]
    fn selection() {
        let d = d(59_834_344.25);
        let p = |printer: HumanPrinter| printer.print_duration(&d);

        insta::assert_snapshot!(
            p(HumanPrinter::new().only(&[Unit::Nanosecond, Unit::Minute])),
            @"37m 0ns",
        );
        insta::assert_snapshot!(
            p(HumanPrinter::new().hide_zero(true)),
            @"16h 37m 14s 344ms 250us",
        );
        insta::assert_snapshot!(
            p(HumanPrinter::new().only(&[Unit::Day]).hide_zero(true)),
            @"0d",
        );
        insta::assert_snapshot!(p(HumanPrinter::new().only(&[])), @"0ns");
        insta::assert_snapshot!(
            p(HumanPrinter::new()
                .designator(Designator::Verbose)
                .only(&[Unit::Day, Unit::Microsecond])
                .hide_zero(true)),
            @"250 microseconds",
        );
    }

    #[test]
    fn selection_by_abbreviation() {
        let d = d(59_834_344.25);
        let p = |keys: &[&str]| {
            HumanPrinter::new().only_abbreviations(keys).print_duration(&d)
        };

        insta::assert_snapshot!(p(&["s", "h"]), @"16h 14s");
        insta::assert_snapshot!(p(&["µs", "ms", "d"]), @"0d 344ms 250us");
        insta::assert_snapshot!(p(&["m", "weeks"]), @"37m");
        insta::assert_snapshot!(p(&["H", "S"]), @"0ns");
        assert_eq!(
            p(&["d", "h", "m", "s", "ms", "us", "ns"]),
            HumanPrinter::new().print_duration(&d),
        );
    }
}
