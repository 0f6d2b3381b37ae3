/*!
A permissive, order independent grammar for durations written by humans.

This grammar never fails. The input is scanned once per [`Unit`], looking
for a number immediately followed (with at most one space in between) by
one of that unit's aliases. The first alias, in a fixed priority order,
that matches anywhere in the input supplies the unit's value. Units that
can't be found are zero. Anything else in the input is ignored.

A match must be followed by a character that isn't an ASCII letter, or by
the end of the input. This prevents `s` from matching the start of
`seconds` and `m` from matching the start of `min`.

Matching is case insensitive. Runs of spaces are collapsed to a single
space before scanning.

# Aliases

| Unit | Aliases, in priority order |
| ---- | -------------------------- |
| days | `d`, `day`, `days` |
| hours | `h`, `hr`, `hrs`, `hour`, `hours` |
| minutes | `m`, `min`, `mins`, `minute`, `minutes` |
| seconds | `s`, `sec`, `secs`, `second`, `seconds` |
| milliseconds | `ms`, `milli`, `millis`, `millisecond`, `milliseconds` |
| microseconds | `µs`, `us`, `microsecond`, `microseconds` |
| nanoseconds | `ns`, `nanosecond`, `nanoseconds` |

# Example

Since each unit is found independently, order doesn't matter and
punctuation or filler words in between are fine:

```
use dura::fmt::friendly;

let millis = friendly::parse("131 days, 50 hours, and 3600 secs");
assert_eq!(millis, 133.0 * 86_400_000.0 + 3.0 * 3_600_000.0);

let millis = friendly::parse("5 m s 54h 5d 44 s");
assert_eq!(millis, ((5.0 * 24.0 + 54.0) * 60.0 + 5.0) * 60_000.0 + 44_000.0);
```

Units that appear more than once only contribute their first match, and
input without any units is zero:

```
use dura::fmt::friendly;

assert_eq!(friendly::parse("1s 2s"), 1_000.0);
assert_eq!(friendly::parse("soon"), 0.0);
```
*/

use std::{borrow::Cow, sync::OnceLock};

use regex_lite::Regex;

use crate::unit::Unit;

/// The aliases for each unit, in the order they are tried.
static ALIASES: [(Unit, &[&str]); 7] = [
    (Unit::Day, &["d", "day", "days"]),
    (Unit::Hour, &["h", "hr", "hrs", "hour", "hours"]),
    (Unit::Minute, &["m", "min", "mins", "minute", "minutes"]),
    (Unit::Second, &["s", "sec", "secs", "second", "seconds"]),
    (
        Unit::Millisecond,
        &["ms", "milli", "millis", "millisecond", "milliseconds"],
    ),
    (Unit::Microsecond, &["µs", "us", "microsecond", "microseconds"]),
    (Unit::Nanosecond, &["ns", "nanosecond", "nanoseconds"]),
];

/// Parses the given input as a magnitude in milliseconds.
///
/// This never fails. See the [module documentation](self) for the grammar.
///
/// The result may be infinite if the input contains enormous numbers.
/// [`Duration`](crate::Duration)'s `FromStr` impl rejects such values.
pub fn parse(input: &str) -> f64 {
    let input = collapse_spaces(input);
    let mut millis = 0.0;
    for scanner in scanners() {
        let Some(value) = scanner.find(&input) else { continue };
        trace!(
            "found {value} {unit} in {input:?}",
            unit = scanner.unit.plural(),
        );
        millis += match scanner.unit {
            Unit::Microsecond => value / 1_000.0,
            Unit::Nanosecond => value / 1_000_000.0,
            unit => value * unit.millis(),
        };
    }
    millis
}

/// Parses the given input into the value found for each unit.
///
/// The values are in the same order as the units they belong to, from days
/// to nanoseconds. Unlike [`parse`], nothing is summed, so this shows
/// exactly what the scan found.
///
/// ```
/// use dura::fmt::friendly;
///
/// let values = friendly::parse_units("1.5h 20 mins");
/// assert_eq!(values, [0.0, 1.5, 20.0, 0.0, 0.0, 0.0, 0.0]);
/// ```
pub fn parse_units(input: &str) -> [f64; 7] {
    let input = collapse_spaces(input);
    let mut values = [0.0; 7];
    for scanner in scanners() {
        if let Some(value) = scanner.find(&input) {
            values[scanner.unit.index()] = value;
        }
    }
    values
}

/// The compiled patterns for a single unit's aliases.
#[derive(Debug)]
struct Scanner {
    unit: Unit,
    patterns: Vec<Regex>,
}

impl Scanner {
    fn new(unit: Unit, aliases: &[&str]) -> Scanner {
        let patterns = aliases
            .iter()
            .map(|alias| {
                let pattern = format!(
                    r"(?i)(-?[0-9]+(?:\.[0-9]+)?)\s?{alias}(?:[^a-zA-Z]|$)",
                    alias = regex_lite::escape(alias),
                );
                // OK because the aliases are fixed and known to be valid.
                Regex::new(&pattern).expect("alias pattern is valid")
            })
            .collect();
        Scanner { unit, patterns }
    }

    /// Returns the value of the first alias that matches anywhere in the
    /// given input.
    fn find(&self, input: &str) -> Option<f64> {
        self.patterns.iter().find_map(|re| {
            let caps = re.captures(input)?;
            caps.get(1)?.as_str().parse().ok()
        })
    }
}

fn scanners() -> &'static [Scanner] {
    static SCANNERS: OnceLock<Vec<Scanner>> = OnceLock::new();
    SCANNERS.get_or_init(|| {
        ALIASES
            .iter()
            .map(|&(unit, aliases)| Scanner::new(unit, aliases))
            .collect()
    })
}

fn collapse_spaces(input: &str) -> Cow<'_, str> {
    static SPACES: OnceLock<Regex> = OnceLock::new();
    let re = SPACES.get_or_init(|| {
        // OK because the pattern is a constant.
        Regex::new(" {2,}").expect("spaces pattern is valid")
    });
    re.replace_all(input, " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(input: &str) -> [f64; 7] {
        parse_units(input)
    }

    #[test]
    fn compact() {
        assert_eq!(units("1m2s"), [0.0, 0.0, 1.0, 2.0, 0.0, 0.0, 0.0]);
        assert_eq!(units("1d2h3m4s5ms6us7ns"), [
            1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0
        ]);
    }

    #[test]
    fn every_alias() {
        for &(unit, aliases) in ALIASES.iter() {
            for alias in aliases {
                let got = units(&format!("7 {alias}"));
                assert_eq!(got[unit.index()], 7.0, "alias {alias:?}");
                let got = units(&format!("8{alias}."));
                assert_eq!(got[unit.index()], 8.0, "alias {alias:?}");
            }
        }
    }

    #[test]
    fn unit_words_do_not_leak() {
        // `s` must not match the start of `sec`, `m` must not match the
        // start of `milliseconds` and so on.
        assert_eq!(units("4090 sec 4939 days 7342 hour 2324milliseconds 4344 min"), [
            4939.0, 7342.0, 4344.0, 4090.0, 2324.0, 0.0, 0.0
        ]);
        assert_eq!(units("3 hours"), [0.0, 3.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(units("3 mins"), [0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(units("2H 3M 4S"), [0.0, 2.0, 3.0, 4.0, 0.0, 0.0, 0.0]);
        assert_eq!(units("1 DAY"), [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn spaces() {
        // More than one space between a number and its unit is collapsed.
        assert_eq!(units("5    seconds"), [0.0, 0.0, 0.0, 5.0, 0.0, 0.0, 0.0]);
        // But other kinds of whitespace are only allowed once.
        assert_eq!(units("5\t\tseconds"), [0.0; 7]);
    }

    #[test]
    fn signs_and_fractions() {
        assert_eq!(parse("-5 seconds"), -5_000.0);
        assert_eq!(parse("1.5 hours"), 5_400_000.0);
        assert_eq!(parse("-0.25 ms"), -0.25);
        assert_eq!(parse("250us 500ns"), 0.25 + 0.0005);
        assert_eq!(parse("3 µs"), 0.003);
    }

    #[test]
    fn garbage_is_zero() {
        assert_eq!(parse(""), 0.0);
        assert_eq!(parse("   "), 0.0);
        assert_eq!(parse("yesterday"), 0.0);
        assert_eq!(parse("5 weeks"), 0.0);
        assert_eq!(parse("hms"), 0.0);
    }

    quickcheck::quickcheck! {
        fn prop_never_panics(input: String) -> bool {
            let _ = parse(&input);
            true
        }

        fn prop_single_unit(value: u32, unit: Unit) -> bool {
            let input = format!("{value}{}", unit.abbreviation());
            parse_units(&input)[unit.index()] == f64::from(value)
        }
    }
}
