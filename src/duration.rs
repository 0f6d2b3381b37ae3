use core::cmp::Ordering;

use crate::{
    error::{duration::Error as E, Error},
    fmt::{colon::ColonPrinter, human::HumanPrinter, iso8601},
    unit::Unit,
};

/// A signed span of time with a magnitude in milliseconds.
///
/// A `Duration` stores exactly one value: a finite, signed, floating point
/// number of milliseconds. Fractions of a millisecond encode microseconds and
/// nanoseconds. Every unit (days, hours, minutes, seconds, milliseconds,
/// microseconds and nanoseconds) is computed from that magnitude on demand
/// using truncating division, so all units share the sign of the whole and
/// can never disagree with it.
///
/// # Creating a duration
///
/// * [`Duration::ZERO`] or [`Duration::default`] is the zero duration.
/// * [`Duration::from_millis`] and [`Duration::try_from_millis`] take a
/// magnitude directly.
/// * [`Duration::new`] accepts anything convertible into a
/// [`DurationInput`]: a number of milliseconds, a string or another
/// duration.
/// * Strings can be parsed with [`str::parse`]. See the [`fmt`](crate::fmt)
/// module for the grammars accepted.
///
/// ```
/// use dura::Duration;
///
/// let d1 = Duration::from_millis(90_000.0);
/// let d2: Duration = "1m 30s".parse()?;
/// let d3 = Duration::new("PT1M30S")?;
/// assert_eq!(d1, d2);
/// assert_eq!(d2, d3);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Units
///
/// Each unit can be read with a getter and rebased with a setter. Setting a
/// unit only changes that unit's contribution to the magnitude:
///
/// ```
/// use dura::Duration;
///
/// let mut d: Duration = "2h 15m".parse()?;
/// d.set_hours(5);
/// assert_eq!(d.to_short_string(), "0d 5h 15m 0s 0ms 0us 0ns");
/// assert_eq!(d.as_minutes(), 315.0);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Negative durations
///
/// The magnitude may be negative, in which case every non-zero unit is
/// negative too:
///
/// ```
/// use dura::Duration;
///
/// let d = Duration::from_millis(-90_500.0);
/// assert_eq!((d.get_minutes(), d.get_seconds()), (-1, -30));
/// assert_eq!(d.get_milliseconds(), -500);
/// assert_eq!(d.abs().as_millis(), 90_500.0);
/// ```
///
/// # Comparisons
///
/// Durations are totally ordered by their magnitude. Comparisons are exact.
/// There is no tolerance for floating point error.
#[derive(Clone, Copy, Default)]
pub struct Duration {
    millis: f64,
}

impl Duration {
    /// The zero duration.
    pub const ZERO: Duration = Duration { millis: 0.0 };

    /// Create a new duration from anything that can be turned into a
    /// [`DurationInput`].
    ///
    /// # Errors
    ///
    /// This returns an error when given a magnitude that isn't finite, or
    /// when given a string that fails to parse (which can only happen for
    /// strings in the ISO 8601 grammar).
    ///
    /// # Example
    ///
    /// ```
    /// use dura::Duration;
    ///
    /// assert_eq!(Duration::new(1_500)?.get_seconds(), 1);
    /// assert_eq!(Duration::new("1.5 seconds")?.as_millis(), 1_500.0);
    /// assert!(Duration::new(f64::INFINITY).is_err());
    /// assert!(Duration::new("P1Y").is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new<'a, I: Into<DurationInput<'a>>>(
        input: I,
    ) -> Result<Duration, Error> {
        input.into().resolve()
    }

    /// Create a new duration from a magnitude in milliseconds.
    ///
    /// The fallible version of this method is [`Duration::try_from_millis`].
    ///
    /// # Panics
    ///
    /// This panics when the given magnitude is NaN or infinite.
    #[inline]
    pub fn from_millis(millis: f64) -> Duration {
        Duration::try_from_millis(millis)
            .expect("duration magnitude must be finite")
    }

    /// Create a new duration from a magnitude in milliseconds.
    ///
    /// The panicking version of this method is [`Duration::from_millis`].
    ///
    /// # Errors
    ///
    /// This returns an error when the given magnitude is NaN or infinite.
    #[inline]
    pub fn try_from_millis(millis: f64) -> Result<Duration, Error> {
        if !millis.is_finite() {
            return Err(Error::from(E::NonFiniteMillis { given: millis }));
        }
        Ok(Duration { millis })
    }

    /// Create a duration from a magnitude that is the result of the given
    /// operation, failing with a range error if it isn't finite.
    fn checked(
        millis: f64,
        operation: &'static str,
    ) -> Result<Duration, Error> {
        if !millis.is_finite() {
            return Err(Error::from(E::Overflow { operation }));
        }
        Ok(Duration { millis })
    }
}

/// Wall clock factories.
///
/// These are the only routines in this crate that aren't pure. Each reads
/// the system clock once.
#[cfg(feature = "std")]
impl Duration {
    /// Returns the time elapsed since the most recent midnight in the
    /// system's time zone.
    ///
    /// # Errors
    ///
    /// This returns an error if the start of the current day could not be
    /// determined in the system time zone.
    pub fn since_midnight() -> Result<Duration, Error> {
        use crate::error::{clock::Error as ClockError, ErrorContext};

        let now = jiff::Zoned::now();
        let midnight = now
            .start_of_day()
            .map_err(Error::jiff)
            .context(ClockError::StartOfDay)?;
        let elapsed = now.timestamp().duration_since(midnight.timestamp());
        Ok(Duration::from_signed_duration(elapsed))
    }

    /// Returns the time elapsed since the given timestamp.
    ///
    /// The result is negative if the timestamp is in the future.
    ///
    /// # Example
    ///
    /// ```
    /// use dura::Duration;
    /// use jiff::{Timestamp, ToSpan};
    ///
    /// let hour_ago = Timestamp::now().checked_sub(1.hour())?;
    /// let d = Duration::since(hour_ago);
    /// assert!(d.as_hours() >= 1.0);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn since(timestamp: jiff::Timestamp) -> Duration {
        let elapsed = jiff::Timestamp::now().duration_since(timestamp);
        Duration::from_signed_duration(elapsed)
    }

    /// Returns the time remaining until the given timestamp.
    ///
    /// The result is negative if the timestamp is in the past.
    pub fn till(timestamp: jiff::Timestamp) -> Duration {
        let remaining = timestamp.duration_since(jiff::Timestamp::now());
        Duration::from_signed_duration(remaining)
    }

    fn from_signed_duration(d: jiff::SignedDuration) -> Duration {
        // A signed duration in seconds always fits in a finite f64.
        Duration { millis: d.as_secs_f64() * 1_000.0 }
    }
}

/// Unit accessors.
impl Duration {
    /// Returns the value of the given unit in this duration's breakdown.
    ///
    /// Days are unbounded. Every other unit is the remainder after taking
    /// out all bigger units, e.g., hours are always in the range `-23..=23`.
    /// Division and remainder both truncate toward zero, so a non-zero value
    /// always has the same sign as the whole duration.
    ///
    /// # Example
    ///
    /// ```
    /// use dura::{Duration, Unit};
    ///
    /// let d = Duration::from_millis(121_920.5);
    /// assert_eq!(d.get(Unit::Minute), 2);
    /// assert_eq!(d.get(Unit::Second), 1);
    /// assert_eq!(d.get(Unit::Millisecond), 920);
    /// assert_eq!(d.get(Unit::Microsecond), 500);
    /// ```
    #[inline]
    pub fn get(&self, unit: Unit) -> i64 {
        let whole = in_units(self.millis, unit).trunc();
        match unit.modulus() {
            None => whole as i64,
            Some(modulus) => (whole % modulus) as i64,
        }
    }

    /// Sets the given unit to `value`, leaving every other unit unchanged.
    ///
    /// This adjusts the magnitude by `(value - self.get(unit))` of the
    /// given unit. In particular, setting a unit to its current value never
    /// changes the magnitude. The value given may be out of the unit's usual
    /// range, in which case it carries into bigger units:
    ///
    /// ```
    /// use dura::{Duration, Unit};
    ///
    /// let mut d = Duration::ZERO;
    /// d.set(Unit::Minute, 90);
    /// assert_eq!((d.get_hours(), d.get_minutes()), (1, 30));
    /// ```
    pub fn set(&mut self, unit: Unit, value: i64) {
        let delta = value as f64 - self.get(unit) as f64;
        if delta != 0.0 {
            // Finite: the delta is bounded by twice i64::MAX days, which is
            // far smaller than the gap between f64::MAX and infinity.
            self.millis += to_millis(delta, unit);
        }
    }

    /// Adds a possibly fractional amount of the given unit to this
    /// duration.
    ///
    /// # Errors
    ///
    /// This returns an error when the amount isn't finite or when the
    /// resulting magnitude isn't finite. In either case, this duration is
    /// left unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use dura::{Duration, Unit};
    ///
    /// let mut d = Duration::ZERO;
    /// d.add(Unit::Hour, 1.5)?;
    /// d.add(Unit::Second, -30.0)?;
    /// assert_eq!(d.to_short_string(), "0d 1h 29m 30s 0ms 0us 0ns");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn add(&mut self, unit: Unit, amount: f64) -> Result<(), Error> {
        if !amount.is_finite() {
            return Err(Error::from(E::NonFiniteScalar { given: amount }));
        }
        let sum = self.millis + to_millis(amount, unit);
        *self = Duration::checked(sum, "adding units")?;
        Ok(())
    }

    /// Returns the number of whole days in this duration.
    #[inline]
    pub fn get_days(&self) -> i64 {
        self.get(Unit::Day)
    }

    /// Returns the hours in this duration, in the range `-23..=23`.
    #[inline]
    pub fn get_hours(&self) -> i64 {
        self.get(Unit::Hour)
    }

    /// Returns the minutes in this duration, in the range `-59..=59`.
    #[inline]
    pub fn get_minutes(&self) -> i64 {
        self.get(Unit::Minute)
    }

    /// Returns the seconds in this duration, in the range `-59..=59`.
    #[inline]
    pub fn get_seconds(&self) -> i64 {
        self.get(Unit::Second)
    }

    /// Returns the milliseconds in this duration, in the range
    /// `-999..=999`.
    #[inline]
    pub fn get_milliseconds(&self) -> i64 {
        self.get(Unit::Millisecond)
    }

    /// Returns the microseconds in this duration, in the range
    /// `-999..=999`.
    #[inline]
    pub fn get_microseconds(&self) -> i64 {
        self.get(Unit::Microsecond)
    }

    /// Returns the nanoseconds in this duration, in the range
    /// `-999..=999`.
    #[inline]
    pub fn get_nanoseconds(&self) -> i64 {
        self.get(Unit::Nanosecond)
    }

    /// Sets the number of days. See [`Duration::set`].
    #[inline]
    pub fn set_days(&mut self, days: i64) {
        self.set(Unit::Day, days)
    }

    /// Sets the number of hours. See [`Duration::set`].
    #[inline]
    pub fn set_hours(&mut self, hours: i64) {
        self.set(Unit::Hour, hours)
    }

    /// Sets the number of minutes. See [`Duration::set`].
    #[inline]
    pub fn set_minutes(&mut self, minutes: i64) {
        self.set(Unit::Minute, minutes)
    }

    /// Sets the number of seconds. See [`Duration::set`].
    #[inline]
    pub fn set_seconds(&mut self, seconds: i64) {
        self.set(Unit::Second, seconds)
    }

    /// Sets the number of milliseconds. See [`Duration::set`].
    #[inline]
    pub fn set_milliseconds(&mut self, milliseconds: i64) {
        self.set(Unit::Millisecond, milliseconds)
    }

    /// Sets the number of microseconds. See [`Duration::set`].
    #[inline]
    pub fn set_microseconds(&mut self, microseconds: i64) {
        self.set(Unit::Microsecond, microseconds)
    }

    /// Sets the number of nanoseconds. See [`Duration::set`].
    #[inline]
    pub fn set_nanoseconds(&mut self, nanoseconds: i64) {
        self.set(Unit::Nanosecond, nanoseconds)
    }

    /// Adds a number of days. See [`Duration::add`].
    #[inline]
    pub fn add_days(&mut self, days: f64) -> Result<(), Error> {
        self.add(Unit::Day, days)
    }

    /// Adds a number of hours. See [`Duration::add`].
    #[inline]
    pub fn add_hours(&mut self, hours: f64) -> Result<(), Error> {
        self.add(Unit::Hour, hours)
    }

    /// Adds a number of minutes. See [`Duration::add`].
    #[inline]
    pub fn add_minutes(&mut self, minutes: f64) -> Result<(), Error> {
        self.add(Unit::Minute, minutes)
    }

    /// Adds a number of seconds. See [`Duration::add`].
    #[inline]
    pub fn add_seconds(&mut self, seconds: f64) -> Result<(), Error> {
        self.add(Unit::Second, seconds)
    }

    /// Adds a number of milliseconds. See [`Duration::add`].
    #[inline]
    pub fn add_milliseconds(
        &mut self,
        milliseconds: f64,
    ) -> Result<(), Error> {
        self.add(Unit::Millisecond, milliseconds)
    }

    /// Adds a number of microseconds. See [`Duration::add`].
    #[inline]
    pub fn add_microseconds(
        &mut self,
        microseconds: f64,
    ) -> Result<(), Error> {
        self.add(Unit::Microsecond, microseconds)
    }

    /// Adds a number of nanoseconds. See [`Duration::add`].
    #[inline]
    pub fn add_nanoseconds(&mut self, nanoseconds: f64) -> Result<(), Error> {
        self.add(Unit::Nanosecond, nanoseconds)
    }

    /// Returns every unit of this duration as a plain record.
    ///
    /// This is the form a duration takes when serialized.
    ///
    /// ```
    /// use dura::{Duration, Parts};
    ///
    /// let d = Duration::from_millis(90_061_001.5);
    /// let parts = d.to_parts();
    /// assert_eq!(parts, Parts {
    ///     days: 1,
    ///     hours: 1,
    ///     minutes: 1,
    ///     seconds: 1,
    ///     milliseconds: 1,
    ///     microseconds: 500,
    ///     nanoseconds: 0,
    /// });
    /// assert_eq!(Duration::from(parts), d);
    /// ```
    pub fn to_parts(&self) -> Parts {
        Parts {
            days: self.get_days(),
            hours: self.get_hours(),
            minutes: self.get_minutes(),
            seconds: self.get_seconds(),
            milliseconds: self.get_milliseconds(),
            microseconds: self.get_microseconds(),
            nanoseconds: self.get_nanoseconds(),
        }
    }
}

/// Fractional conversions.
///
/// Unlike the unit getters, these don't truncate. Each returns the whole
/// duration expressed in the given unit.
impl Duration {
    /// Returns this duration as a fractional number of the given unit.
    ///
    /// ```
    /// use dura::{Duration, Unit};
    ///
    /// let d = Duration::from_millis(5_400_000.0);
    /// assert_eq!(d.total(Unit::Hour), 1.5);
    /// assert_eq!(d.total(Unit::Microsecond), 5_400_000_000.0);
    /// ```
    #[inline]
    pub fn total(&self, unit: Unit) -> f64 {
        in_units(self.millis, unit)
    }

    #[inline]
    pub fn as_days(&self) -> f64 {
        self.total(Unit::Day)
    }

    #[inline]
    pub fn as_hours(&self) -> f64 {
        self.total(Unit::Hour)
    }

    #[inline]
    pub fn as_minutes(&self) -> f64 {
        self.total(Unit::Minute)
    }

    #[inline]
    pub fn as_seconds(&self) -> f64 {
        self.total(Unit::Second)
    }

    /// Returns the magnitude of this duration. This is the single value a
    /// duration is made of.
    #[inline]
    pub fn as_millis(&self) -> f64 {
        self.millis
    }

    #[inline]
    pub fn as_microseconds(&self) -> f64 {
        self.total(Unit::Microsecond)
    }

    #[inline]
    pub fn as_nanoseconds(&self) -> f64 {
        self.total(Unit::Nanosecond)
    }
}

/// Arithmetic and sign.
impl Duration {
    /// Returns the sum of this duration and another.
    ///
    /// The other operand is anything that converts into a
    /// [`DurationInput`], so a number of milliseconds or a string works too.
    ///
    /// # Errors
    ///
    /// This returns an error if the other operand can't be turned into a
    /// duration, or if the sum isn't finite.
    ///
    /// # Example
    ///
    /// ```
    /// use dura::Duration;
    ///
    /// let d = Duration::from_millis(1_000.0);
    /// assert_eq!(d.plus(500)?.as_millis(), 1_500.0);
    /// assert_eq!(d.plus("1 minute")?.as_seconds(), 61.0);
    /// assert_eq!(d.plus(d)?.as_seconds(), 2.0);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn plus<'a, I: Into<DurationInput<'a>>>(
        self,
        other: I,
    ) -> Result<Duration, Error> {
        let other = other.into().resolve()?;
        Duration::checked(self.millis + other.millis, "addition")
    }

    /// Returns this duration minus another. The result is negative when
    /// `other` is bigger.
    ///
    /// For the unsigned distance between two durations, use
    /// [`Duration::between`].
    ///
    /// ```
    /// use dura::Duration;
    ///
    /// let d = Duration::from_millis(1_000.0);
    /// assert_eq!(d.minus("3s")?.as_millis(), -2_000.0);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn minus<'a, I: Into<DurationInput<'a>>>(
        self,
        other: I,
    ) -> Result<Duration, Error> {
        let other = other.into().resolve()?;
        Duration::checked(self.millis - other.millis, "subtraction")
    }

    /// Returns the absolute difference between this duration and another.
    /// The result is never negative.
    ///
    /// ```
    /// use dura::Duration;
    ///
    /// let d = Duration::from_millis(1_000.0);
    /// assert_eq!(d.between("3s")?.as_millis(), 2_000.0);
    /// assert_eq!(d.between(-1_000)?.as_millis(), 2_000.0);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn between<'a, I: Into<DurationInput<'a>>>(
        self,
        other: I,
    ) -> Result<Duration, Error> {
        Ok(self.minus(other)?.abs())
    }

    /// Scales this duration by a real number.
    ///
    /// # Errors
    ///
    /// This returns an error when the scalar isn't finite or when the
    /// product isn't finite.
    pub fn multiplied_by(self, scalar: f64) -> Result<Duration, Error> {
        if !scalar.is_finite() {
            return Err(Error::from(E::NonFiniteScalar { given: scalar }));
        }
        Duration::checked(self.millis * scalar, "multiplication")
    }

    /// Divides this duration by a real number.
    ///
    /// # Errors
    ///
    /// This returns an error when the divisor is zero or isn't finite, or
    /// when the quotient isn't finite.
    ///
    /// ```
    /// use dura::Duration;
    ///
    /// let d = Duration::from_millis(90_000.0);
    /// assert_eq!(d.divided_by(4.0)?.to_short_string(), "0d 0h 0m 22s 500ms 0us 0ns");
    /// assert!(d.divided_by(0.0).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn divided_by(self, divisor: f64) -> Result<Duration, Error> {
        if !divisor.is_finite() {
            return Err(Error::from(E::NonFiniteScalar { given: divisor }));
        }
        if divisor == 0.0 {
            return Err(Error::from(E::DivideByZero));
        }
        Duration::checked(self.millis / divisor, "division")
    }

    /// Returns the absolute value of this duration.
    #[inline]
    pub fn abs(self) -> Duration {
        Duration { millis: self.millis.abs() }
    }

    /// Returns the negative absolute value of this duration.
    ///
    /// Note that this is not a sign flip: a duration that is already
    /// negative stays negative.
    ///
    /// ```
    /// use dura::Duration;
    ///
    /// let d = Duration::from_millis(5_000.0);
    /// assert_eq!(d.negated().as_millis(), -5_000.0);
    /// assert_eq!(d.negated().negated().as_millis(), -5_000.0);
    /// ```
    #[inline]
    pub fn negated(self) -> Duration {
        Duration { millis: -self.millis.abs() }
    }

    /// Returns the sign of this duration: `-1`, `0` or `1`.
    #[inline]
    pub fn signum(self) -> i8 {
        if self.millis > 0.0 {
            1
        } else if self.millis < 0.0 {
            -1
        } else {
            0
        }
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        self.signum() > 0
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.signum() < 0
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.signum() == 0
    }

    /// Compares this duration with another by magnitude.
    ///
    /// This is the same as [`Ord::cmp`]. Casting the result with `as i8`
    /// gives `-1`, `0` or `1`.
    #[inline]
    pub fn compare_to(&self, other: &Duration) -> Ordering {
        self.cmp(other)
    }
}

/// Rendering helpers.
///
/// Each of these uses the default configuration of a printer in the
/// [`fmt`](crate::fmt) module. Use the printers directly for more control.
impl Duration {
    /// Renders every unit, colon delimited and zero padded.
    ///
    /// ```
    /// use dura::Duration;
    ///
    /// let d = Duration::from_millis(59_834_344.25);
    /// assert_eq!(d.to_time_string(), "00:16:37:14:344:250:000");
    /// ```
    pub fn to_time_string(&self) -> String {
        ColonPrinter::new().print_duration(self)
    }

    /// Renders every unit as a value followed by its abbreviation.
    pub fn to_short_string(&self) -> String {
        HumanPrinter::new().print_duration(self)
    }

    /// Renders every unit as a value followed by its full name.
    pub fn to_verbose_string(&self) -> String {
        HumanPrinter::new()
            .designator(crate::fmt::human::Designator::Verbose)
            .print_duration(self)
    }

    /// Renders every unit as English words followed by its full name.
    ///
    /// ```
    /// use dura::Duration;
    ///
    /// let d = Duration::from_millis(121_920.0);
    /// assert!(d.to_words_string().contains(
    ///     "two minutes, one second, nine hundred and twenty milliseconds",
    /// ));
    /// ```
    pub fn to_words_string(&self) -> String {
        HumanPrinter::new()
            .designator(crate::fmt::human::Designator::Words)
            .print_duration(self)
    }

    /// Renders this duration in the ISO 8601 duration format.
    ///
    /// This is the same as this duration's `Display` impl.
    pub fn to_iso_string(&self) -> String {
        iso8601::print(self)
    }
}

impl core::fmt::Display for Duration {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        iso8601::Printer::new().print_duration_to(self, f)
    }
}

impl core::fmt::Debug for Duration {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if f.alternate() {
            f.debug_struct("Duration").field("millis", &self.millis).finish()
        } else {
            f.write_str(&self.to_short_string())
        }
    }
}

impl core::str::FromStr for Duration {
    type Err = Error;

    /// Parses either grammar in the [`fmt`](crate::fmt) module.
    ///
    /// Free-form input never fails to parse, but a magnitude so big that it
    /// isn't finite is still rejected.
    fn from_str(s: &str) -> Result<Duration, Error> {
        let millis = crate::fmt::parse(s)?;
        Duration::checked(millis, "parsing")
    }
}

impl PartialEq for Duration {
    #[inline]
    fn eq(&self, other: &Duration) -> bool {
        self.millis == other.millis
    }
}

// OK because a duration's magnitude is never NaN.
impl Eq for Duration {}

impl PartialOrd for Duration {
    #[inline]
    fn partial_cmp(&self, other: &Duration) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Duration {
    #[inline]
    fn cmp(&self, other: &Duration) -> Ordering {
        if self.millis < other.millis {
            Ordering::Less
        } else if self.millis > other.millis {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl From<core::time::Duration> for Duration {
    fn from(d: core::time::Duration) -> Duration {
        let millis = d.as_secs() as f64 * 1_000.0
            + f64::from(d.subsec_nanos()) / 1_000_000.0;
        Duration { millis }
    }
}

/// Converts a `Duration` to an unsigned [`std::time::Duration`].
///
/// # Errors
///
/// This fails when the duration is negative, or when it is too big for a
/// `std::time::Duration`.
impl TryFrom<Duration> for core::time::Duration {
    type Error = Error;

    fn try_from(d: Duration) -> Result<core::time::Duration, Error> {
        if d.millis < 0.0 {
            return Err(Error::from(E::NegativeToUnsigned {
                millis: d.millis,
            }));
        }
        let overflow = || {
            Error::from(E::Overflow {
                operation: "converting to `std::time::Duration`",
            })
        };
        let secs = (d.millis / 1_000.0).trunc();
        // 2^64, which is exactly representable unlike `u64::MAX`.
        if secs >= 18_446_744_073_709_551_616.0 {
            return Err(overflow());
        }
        // Rounding the remainder rather than the whole avoids losing a
        // nanosecond to binary fractions like `1.50025`.
        let nanos = ((d.millis - secs * 1_000.0) * 1_000_000.0).round();
        core::time::Duration::from_secs(secs as u64)
            .checked_add(core::time::Duration::from_nanos(nanos as u64))
            .ok_or_else(overflow)
    }
}

impl From<Parts> for Duration {
    fn from(parts: Parts) -> Duration {
        parts.to_duration()
    }
}

/// The seven units of a [`Duration`] as a plain record.
///
/// This is what [`Duration::to_parts`] returns and what a duration
/// serializes to. The units don't need to be in their usual ranges when
/// converting back into a duration; they're simply summed.
///
/// ```
/// use dura::{Duration, Parts};
///
/// let parts = Parts { minutes: 90, milliseconds: 1_500, ..Parts::default() };
/// let d = Duration::from(parts);
/// assert_eq!(d.to_short_string(), "0d 1h 30m 1s 500ms 0us 0ns");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Parts {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub milliseconds: i64,
    pub microseconds: i64,
    pub nanoseconds: i64,
}

impl Parts {
    /// Sums every unit into a single duration.
    pub fn to_duration(&self) -> Duration {
        let Parts {
            days,
            hours,
            minutes,
            seconds,
            milliseconds,
            microseconds,
            nanoseconds,
        } = *self;
        // Finite: seven i64 values times at most 86.4 million each.
        let millis = to_millis(days as f64, Unit::Day)
            + to_millis(hours as f64, Unit::Hour)
            + to_millis(minutes as f64, Unit::Minute)
            + to_millis(seconds as f64, Unit::Second)
            + milliseconds as f64
            + to_millis(microseconds as f64, Unit::Microsecond)
            + to_millis(nanoseconds as f64, Unit::Nanosecond);
        Duration { millis }
    }
}

/// The input to [`Duration::new`] and the arithmetic routines on
/// [`Duration`].
///
/// This is resolved into a duration exactly once. Most callers never name
/// this type and rely on its `From` impls instead:
///
/// * Integers and floats are a number of milliseconds.
/// * Strings are parsed with [`fmt::parse`](crate::fmt::parse).
/// * Durations are copied.
#[derive(Clone, Copy, Debug)]
pub enum DurationInput<'a> {
    Millis(f64),
    Text(&'a str),
    Duration(Duration),
}

impl<'a> DurationInput<'a> {
    fn resolve(self) -> Result<Duration, Error> {
        match self {
            DurationInput::Millis(millis) => Duration::try_from_millis(millis),
            DurationInput::Text(text) => text.parse(),
            DurationInput::Duration(d) => Ok(d),
        }
    }
}

impl<'a> From<Duration> for DurationInput<'a> {
    fn from(d: Duration) -> DurationInput<'a> {
        DurationInput::Duration(d)
    }
}

impl<'a> From<&'a Duration> for DurationInput<'a> {
    fn from(d: &'a Duration) -> DurationInput<'a> {
        DurationInput::Duration(*d)
    }
}

impl<'a> From<&'a str> for DurationInput<'a> {
    fn from(text: &'a str) -> DurationInput<'a> {
        DurationInput::Text(text)
    }
}

impl<'a> From<&'a String> for DurationInput<'a> {
    fn from(text: &'a String) -> DurationInput<'a> {
        DurationInput::Text(text.as_str())
    }
}

impl<'a> From<f64> for DurationInput<'a> {
    fn from(millis: f64) -> DurationInput<'a> {
        DurationInput::Millis(millis)
    }
}

impl<'a> From<f32> for DurationInput<'a> {
    fn from(millis: f32) -> DurationInput<'a> {
        DurationInput::Millis(f64::from(millis))
    }
}

impl<'a> From<i32> for DurationInput<'a> {
    fn from(millis: i32) -> DurationInput<'a> {
        DurationInput::Millis(f64::from(millis))
    }
}

impl<'a> From<u32> for DurationInput<'a> {
    fn from(millis: u32) -> DurationInput<'a> {
        DurationInput::Millis(f64::from(millis))
    }
}

impl<'a> From<i64> for DurationInput<'a> {
    fn from(millis: i64) -> DurationInput<'a> {
        DurationInput::Millis(millis as f64)
    }
}

impl<'a> From<u64> for DurationInput<'a> {
    fn from(millis: u64) -> DurationInput<'a> {
        DurationInput::Millis(millis as f64)
    }
}

/// Converts a magnitude in milliseconds to the given unit.
///
/// Sub-millisecond units multiply instead of dividing by a fractional unit
/// length, which keeps exactly representable values exact.
fn in_units(millis: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Microsecond => millis * 1_000.0,
        Unit::Nanosecond => millis * 1_000_000.0,
        _ => millis / unit.millis(),
    }
}

/// Converts an amount of the given unit to milliseconds. This is the inverse
/// of `in_units`.
fn to_millis(amount: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Microsecond => amount / 1_000.0,
        Unit::Nanosecond => amount / 1_000_000.0,
        _ => amount * unit.millis(),
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Duration {
    fn arbitrary(g: &mut quickcheck::Gen) -> Duration {
        // Whole milliseconds up to roughly 30 years in either direction, plus
        // a dyadic fraction so that sub-millisecond units are exact.
        let whole = i64::arbitrary(g) % 1_000_000_000_000;
        let fraction = f64::from(u16::arbitrary(g) % 1024) / 1024.0;
        let fraction = if whole < 0 { -fraction } else { fraction };
        Duration { millis: whole as f64 + fraction }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Duration>> {
        let fraction = self.millis.fract();
        Box::new(
            (self.millis.trunc() as i64)
                .shrink()
                .map(move |whole| Duration { millis: whole as f64 + fraction }),
        )
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::TestResult;

    use super::*;

    fn d(millis: f64) -> Duration {
        Duration::from_millis(millis)
    }

    fn recombine(d: Duration) -> f64 {
        d.to_parts().to_duration().as_millis()
    }

    #[test]
    fn zero() {
        let zero = Duration::default();
        assert_eq!(zero, Duration::ZERO);
        assert_eq!(zero.as_millis(), 0.0);
        assert_eq!(zero.to_parts(), Parts::default());
        assert!(zero.is_zero());
    }

    #[test]
    fn decompose() {
        let got = d(59_834_344.25);
        assert_eq!(
            got.to_parts(),
            Parts {
                days: 0,
                hours: 16,
                minutes: 37,
                seconds: 14,
                milliseconds: 344,
                microseconds: 250,
                nanoseconds: 0,
            },
        );

        // 2^-9 milliseconds is exactly 1.953125 microseconds.
        let tiny = d(0.001_953_125);
        assert_eq!(tiny.get_microseconds(), 1);
        assert_eq!(tiny.get_nanoseconds(), 953);
    }

    #[test]
    fn decompose_negative() {
        let d = d(-(86_400_000.0 + 3_600_000.0 + 60_000.0 + 1_000.0 + 1.5));
        assert_eq!(
            d.to_parts(),
            Parts {
                days: -1,
                hours: -1,
                minutes: -1,
                seconds: -1,
                milliseconds: -1,
                microseconds: -500,
                nanoseconds: 0,
            },
        );
        assert_eq!(recombine(d), d.as_millis());
    }

    #[test]
    fn negative_five_seconds() {
        let neg = d(-5000.0);
        assert_eq!(neg.as_millis(), -5000.0);
        assert_eq!(neg.get_seconds(), -5);
        assert_eq!(neg.abs().as_millis(), 5000.0);
        assert!(neg.is_negative());
    }

    #[test]
    fn setters() {
        let mut d = d(59_834_344.25);
        d.set_hours(2);
        assert_eq!(d.get_hours(), 2);
        assert_eq!(d.get_minutes(), 37);
        assert_eq!(d.get_microseconds(), 250);

        d.set_microseconds(500);
        assert_eq!(d.get_microseconds(), 500);
        assert_eq!(d.get_milliseconds(), 344);

        d.set_days(-1);
        assert_eq!(d.get_days(), 0);
        assert_eq!(d.as_millis(), -86_400_000.0 + 9_434_344.5);

        let mut d = Duration::ZERO;
        d.set_seconds(61);
        assert_eq!((d.get_minutes(), d.get_seconds()), (1, 1));
    }

    #[test]
    fn add_units() {
        let mut d = Duration::ZERO;
        d.add(Unit::Day, 0.5).unwrap();
        assert_eq!(d.get_hours(), 12);
        d.add(Unit::Nanosecond, 1_500.0).unwrap();
        assert_eq!(d.get_microseconds(), 1);
        assert_eq!(d.get_nanoseconds(), 500);

        let before = d;
        assert!(d.add(Unit::Hour, f64::NAN).unwrap_err().is_invalid_argument());
        assert!(d.add(Unit::Day, f64::MAX).unwrap_err().is_range());
        assert_eq!(d, before);
    }

    #[test]
    fn arithmetic() {
        let a = d(1_500.0);
        assert_eq!(a.plus(a).unwrap(), d(3_000.0));
        assert_eq!(a.minus(d(2_000.0)).unwrap(), d(-500.0));
        assert_eq!(a.between(d(2_000.0)).unwrap(), d(500.0));
        assert_eq!(a.multiplied_by(-2.0).unwrap(), d(-3_000.0));
        assert_eq!(a.divided_by(3.0).unwrap(), d(500.0));
        assert_eq!(a.plus("1s").unwrap(), d(2_500.0));
        assert_eq!(a.plus(&String::from("PT1S")).unwrap(), d(2_500.0));

        insta::assert_snapshot!(
            a.divided_by(0.0).unwrap_err(),
            @"cannot divide a duration by zero",
        );
        insta::assert_snapshot!(
            a.multiplied_by(f64::INFINITY).unwrap_err(),
            @"scalar for duration arithmetic must be finite, but got inf",
        );
        insta::assert_snapshot!(
            d(f64::MAX).multiplied_by(2.0).unwrap_err(),
            @"duration magnitude is no longer finite after multiplication",
        );
        insta::assert_snapshot!(
            a.plus("P1Y").unwrap_err(),
            @"failed to parse input as an ISO 8601 duration: found calendar unit designator `Y` in ISO 8601 duration, but years, months and weeks are not supported because they have no fixed length",
        );
    }

    #[test]
    fn negated_is_negative_absolute() {
        let pos = d(5_000.0);
        let neg = d(-5_000.0);
        assert_eq!(pos.negated(), neg);
        assert_eq!(neg.negated(), neg);
        assert_eq!(pos.negated().negated(), neg);
        assert!(d(0.0).negated().is_zero());
    }

    #[test]
    fn construct() {
        assert_eq!(Duration::new(1_000).unwrap(), d(1_000.0));
        assert_eq!(Duration::new(1.5f32).unwrap(), d(1.5));
        assert_eq!(Duration::new(d(7.0)).unwrap(), d(7.0));
        assert_eq!(Duration::new("7ms").unwrap(), d(7.0));
        insta::assert_snapshot!(
            Duration::new(f64::NAN).unwrap_err(),
            @"duration magnitude must be a finite number of milliseconds, but got NaN",
        );
        assert!(Duration::try_from_millis(f64::NEG_INFINITY).is_err());
    }

    #[test]
    #[should_panic]
    fn from_millis_panics_on_nan() {
        let _ = Duration::from_millis(f64::NAN);
    }

    #[test]
    fn std_duration() {
        let std = core::time::Duration::new(90, 500_000_000);
        let got = Duration::from(std);
        assert_eq!(got, d(90_500.0));
        assert_eq!(core::time::Duration::try_from(got).unwrap(), std);

        let err = core::time::Duration::try_from(d(-1.0)).unwrap_err();
        assert!(err.is_invalid_argument());
        insta::assert_snapshot!(
            err,
            @"cannot convert negative duration of -1ms to unsigned `std::time::Duration`",
        );
        let err =
            core::time::Duration::try_from(d(f64::MAX)).unwrap_err();
        assert!(err.is_range());
    }

    #[test]
    fn ordering() {
        let mut durations = [d(3.0), d(-1.0), d(0.5), d(-7.25)];
        durations.sort();
        assert_eq!(durations, [d(-7.25), d(-1.0), d(0.5), d(3.0)]);
        assert_eq!(d(1.0).compare_to(&d(2.0)) as i8, -1);
        assert_eq!(d(2.0).compare_to(&d(2.0)) as i8, 0);
        assert_eq!(d(3.0).compare_to(&d(2.0)) as i8, 1);
        // No epsilon.
        assert_ne!(d(0.1 + 0.2), d(0.3));
    }

    #[test]
    fn conversions() {
        let d = d(129_600_000.0);
        assert_eq!(d.as_days(), 1.5);
        assert_eq!(d.as_hours(), 36.0);
        assert_eq!(d.as_minutes(), 2_160.0);
        assert_eq!(d.as_seconds(), 129_600.0);
        assert_eq!(d.as_microseconds(), 129_600_000_000.0);
        assert_eq!(d.as_nanoseconds(), 129_600_000_000_000.0);
    }

    #[test]
    fn debug() {
        let d = d(1_500.0);
        assert_eq!(format!("{d:?}"), "0d 0h 0m 1s 500ms 0us 0ns");
        assert_eq!(format!("{d:#?}"), "Duration {\n    millis: 1500.0,\n}");
    }

    #[cfg(feature = "std")]
    #[test]
    fn wall_clock() {
        let midnight = Duration::since_midnight().unwrap();
        assert!(!midnight.is_negative());
        assert!(midnight.as_hours() <= 25.0);

        let future = jiff::Timestamp::now()
            .checked_add(jiff::SignedDuration::from_hours(1))
            .unwrap();
        assert!(Duration::since(future).is_negative());
        assert!(Duration::till(future).as_minutes() > 59.0);
    }

    quickcheck::quickcheck! {
        fn prop_roundtrip_parts(d: Duration) -> bool {
            let tolerance = 1e-5 + d.as_millis().abs() * 1e-9;
            (recombine(d) - d.as_millis()).abs() <= tolerance
        }

        fn prop_set_current_is_noop(d: Duration, unit: Unit) -> bool {
            let mut updated = d;
            updated.set(unit, d.get(unit));
            updated.as_millis().to_bits() == d.as_millis().to_bits()
        }

        fn prop_units_share_sign(d: Duration) -> bool {
            let sign = d.signum();
            Unit::ALL.iter().all(|&unit| {
                let value = d.get(unit);
                value == 0 || value.signum() == i64::from(sign)
            })
        }

        fn prop_plus_minus_identity(a: Duration, b: Duration) -> bool {
            let got = a.plus(b).unwrap().minus(b).unwrap();
            let tolerance =
                1e-9 * (1.0 + a.as_millis().abs() + b.as_millis().abs());
            (got.as_millis() - a.as_millis()).abs() <= tolerance
        }

        fn prop_ordering_matches_magnitude(a: Duration, b: Duration) -> TestResult {
            let Some(expected) = a.as_millis().partial_cmp(&b.as_millis()) else {
                return TestResult::discard();
            };
            TestResult::from_bool(
                a.cmp(&b) == expected && (a == b) == (expected == Ordering::Equal)
            )
        }

        fn prop_between_is_non_negative(a: Duration, b: Duration) -> bool {
            let diff = a.between(b).unwrap();
            !diff.is_negative() && diff == b.between(a).unwrap()
        }
    }
}
