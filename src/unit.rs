/// A fixed granularity of time that a [`Duration`](crate::Duration)
/// decomposes into.
///
/// Every unit has an invariant length in milliseconds. There are no units
/// bigger than days: weeks would be fine, but aren't part of the
/// decomposition, and months and years have no fixed length.
///
/// # Example: ordering
///
/// This example demonstrates that `Unit` has an ordering defined such that
/// bigger units compare greater than smaller units.
///
/// ```
/// use dura::Unit;
///
/// assert!(Unit::Day > Unit::Nanosecond);
/// assert!(Unit::Hour > Unit::Minute);
/// assert!(Unit::Millisecond > Unit::Microsecond);
/// assert_eq!(Unit::Second, Unit::Second);
/// ```
///
/// # Example: abbreviations
///
/// Each unit has a short key. `µs` is accepted as an alias for the
/// microsecond key, but the canonical key is always ASCII.
///
/// ```
/// use dura::Unit;
///
/// assert_eq!(Unit::from_abbreviation("ms"), Some(Unit::Millisecond));
/// assert_eq!(Unit::from_abbreviation("µs"), Some(Unit::Microsecond));
/// assert_eq!(Unit::Microsecond.abbreviation(), "us");
/// assert_eq!(Unit::from_abbreviation("w"), None);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Unit {
    /// A day is always 24 hours. Daylight saving time doesn't exist here.
    Day = 6,
    /// An hour is always 60 minutes.
    Hour = 5,
    /// A minute is always 60 seconds.
    Minute = 4,
    /// A second is always 1,000 milliseconds.
    Second = 3,
    /// A millisecond is always 1,000 microseconds. It is the unit in which
    /// a duration's magnitude is stored.
    Millisecond = 2,
    /// A microsecond is always 1,000 nanoseconds.
    Microsecond = 1,
    /// A nanosecond is the smallest unit a duration decomposes into.
    Nanosecond = 0,
}

impl Unit {
    /// All units, from biggest to smallest. This is the fixed order used by
    /// every printer.
    pub(crate) const ALL: [Unit; 7] = [
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
        Unit::Millisecond,
        Unit::Microsecond,
        Unit::Nanosecond,
    ];

    /// Returns the unit corresponding to the given key, if one exists.
    ///
    /// The keys are `d`, `h`, `m`, `s`, `ms`, `us` and `ns`. `µs` is
    /// accepted as an alias for `us`. Matching is exact (case sensitive),
    /// since `m` and `M` conventionally mean different things.
    pub fn from_abbreviation(key: &str) -> Option<Unit> {
        let unit = match key {
            "d" => Unit::Day,
            "h" => Unit::Hour,
            "m" => Unit::Minute,
            "s" => Unit::Second,
            "ms" => Unit::Millisecond,
            "us" | "µs" => Unit::Microsecond,
            "ns" => Unit::Nanosecond,
            _ => return None,
        };
        Some(unit)
    }

    /// Returns the short key for this unit, e.g., `ms` for milliseconds.
    pub fn abbreviation(&self) -> &'static str {
        match *self {
            Unit::Day => "d",
            Unit::Hour => "h",
            Unit::Minute => "m",
            Unit::Second => "s",
            Unit::Millisecond => "ms",
            Unit::Microsecond => "us",
            Unit::Nanosecond => "ns",
        }
    }

    /// Returns the singular name of this unit, e.g., `hour`.
    pub fn singular(&self) -> &'static str {
        match *self {
            Unit::Day => "day",
            Unit::Hour => "hour",
            Unit::Minute => "minute",
            Unit::Second => "second",
            Unit::Millisecond => "millisecond",
            Unit::Microsecond => "microsecond",
            Unit::Nanosecond => "nanosecond",
        }
    }

    /// Returns the plural name of this unit, e.g., `hours`.
    pub fn plural(&self) -> &'static str {
        match *self {
            Unit::Day => "days",
            Unit::Hour => "hours",
            Unit::Minute => "minutes",
            Unit::Second => "seconds",
            Unit::Millisecond => "milliseconds",
            Unit::Microsecond => "microseconds",
            Unit::Nanosecond => "nanoseconds",
        }
    }

    /// Returns the length of this unit in milliseconds.
    ///
    /// Units smaller than a millisecond return a fraction.
    ///
    /// ```
    /// use dura::Unit;
    ///
    /// assert_eq!(Unit::Day.millis(), 86_400_000.0);
    /// assert_eq!(Unit::Microsecond.millis(), 0.001);
    /// ```
    pub fn millis(&self) -> f64 {
        match *self {
            Unit::Day => 86_400_000.0,
            Unit::Hour => 3_600_000.0,
            Unit::Minute => 60_000.0,
            Unit::Second => 1_000.0,
            Unit::Millisecond => 1.0,
            Unit::Microsecond => 0.001,
            Unit::Nanosecond => 0.000_001,
        }
    }

    /// Returns how many of this unit fit into the next biggest unit, or
    /// `None` for days, which are unbounded.
    pub(crate) fn modulus(&self) -> Option<f64> {
        match *self {
            Unit::Day => None,
            Unit::Hour => Some(24.0),
            Unit::Minute | Unit::Second => Some(60.0),
            Unit::Millisecond | Unit::Microsecond | Unit::Nanosecond => {
                Some(1_000.0)
            }
        }
    }

    /// Returns the number of this unit's digits that are always printed in
    /// the colon delimited format.
    pub(crate) fn padding(&self) -> usize {
        match *self {
            Unit::Day | Unit::Hour | Unit::Minute | Unit::Second => 2,
            Unit::Millisecond | Unit::Microsecond | Unit::Nanosecond => 3,
        }
    }

    /// Returns the unit's position in `Unit::ALL`.
    pub(crate) fn index(&self) -> usize {
        Unit::Day as usize - *self as usize
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Unit {
    fn arbitrary(g: &mut quickcheck::Gen) -> Unit {
        Unit::ALL[usize::arbitrary(g) % Unit::ALL.len()]
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(
            self.index().shrink().map(|n| Unit::ALL[n % Unit::ALL.len()]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abbreviations_roundtrip() {
        for unit in Unit::ALL {
            assert_eq!(Unit::from_abbreviation(unit.abbreviation()), Some(unit));
        }
        assert_eq!(Unit::from_abbreviation("D"), None);
        assert_eq!(Unit::from_abbreviation(""), None);
    }

    #[test]
    fn index_matches_order() {
        for (i, unit) in Unit::ALL.iter().enumerate() {
            assert_eq!(unit.index(), i);
        }
        assert!(Unit::ALL.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn sizes_chain() {
        for w in Unit::ALL.windows(2) {
            let (big, small) = (w[0], w[1]);
            let ratio = big.millis() / small.millis();
            let modulus = small.modulus().unwrap();
            assert!((ratio - modulus).abs() < 1e-6, "{big:?}/{small:?}");
        }
        assert_eq!(Unit::Day.modulus(), None);
    }
}
