use dura::{Duration, Parts, Unit};

use crate::Result;

#[test]
fn zero_has_no_units() -> Result {
    let zero = Duration::default();
    assert_eq!(zero, Duration::ZERO);
    assert_eq!(zero.to_parts(), Parts::default());
    for unit in [
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
        Unit::Millisecond,
        Unit::Microsecond,
        Unit::Nanosecond,
    ] {
        assert_eq!(zero.get(unit), 0, "{unit:?}");
    }
    assert_eq!(Duration::new(0)?, zero);

    Ok(())
}

#[test]
fn negative_five_seconds() -> Result {
    let d = Duration::new(-5_000)?;
    assert_eq!(d.as_millis(), -5_000.0);
    assert_eq!(d.get_seconds(), -5);
    assert_eq!(d.abs().as_millis(), 5_000.0);

    let parsed: Duration = "-5 seconds".parse()?;
    let negated = "5 seconds".parse::<Duration>()?.negated();
    assert_eq!(parsed, negated);

    Ok(())
}

#[test]
fn negated_is_idempotent() -> Result {
    let pos = Duration::new("1h")?;
    assert_eq!(pos.negated().as_hours(), -1.0);
    assert_eq!(pos.negated().negated(), pos.negated());
    assert_eq!(pos.negated().abs(), pos);

    Ok(())
}

#[test]
fn plus_then_minus() -> Result {
    let a = Duration::new("3d 4h 5m 6s 7ms")?;
    let b = Duration::new(-123_456.5)?;
    assert_eq!(a.plus(b)?.minus(b)?, a);
    assert_eq!(a.minus(a)?, Duration::ZERO);
    assert_eq!(b.between(a)?, a.between(b)?);
    assert!(b.minus(a)?.is_negative());
    assert!(!b.between(a)?.is_negative());

    Ok(())
}

#[test]
fn scaling() -> Result {
    let d = Duration::new("1h")?;
    assert_eq!(d.multiplied_by(1.5)?.to_short_string(), "0d 1h 30m 0s 0ms 0us 0ns");
    assert_eq!(d.divided_by(-4.0)?.as_minutes(), -15.0);

    let err = d.divided_by(0.0).unwrap_err();
    assert!(err.is_invalid_argument());
    let err = d.multiplied_by(f64::NAN).unwrap_err();
    assert!(err.is_invalid_argument());
    let err = Duration::from_millis(f64::MAX).multiplied_by(10.0).unwrap_err();
    assert!(err.is_range());

    Ok(())
}

#[test]
fn setters_rebase_one_unit() -> Result {
    let mut d = Duration::new("1d 2h 3m 4s 5ms")?;
    let before = d.as_millis();
    d.set_hours(d.get_hours());
    assert_eq!(d.as_millis(), before);

    d.set_hours(20);
    assert_eq!(d.to_short_string(), "1d 20h 3m 4s 5ms 0us 0ns");
    d.set_minutes(-3);
    assert_eq!(d.as_millis(), before + 18.0 * 3_600_000.0 - 6.0 * 60_000.0);

    d.add_hours(-0.5)?;
    d.add_seconds(30.0)?;
    assert_eq!(d.to_short_string(), "1d 19h 27m 34s 5ms 0us 0ns");
    assert!(d.add_days(f64::INFINITY).is_err());

    let mut small = Duration::ZERO;
    small.add_nanoseconds(1_953.125)?;
    assert_eq!((small.get_microseconds(), small.get_nanoseconds()), (1, 953));
    small.add_microseconds(-1.0)?;
    assert_eq!((small.get_microseconds(), small.get_nanoseconds()), (0, 953));

    Ok(())
}

#[test]
fn units_from_negative_fraction() -> Result {
    let d = Duration::new(-(2.0 * 86_400_000.0 + 5.0 * 3_600_000.0 + 0.75))?;
    insta::assert_debug_snapshot!(d.to_parts(), @r"
    Parts {
        days: -2,
        hours: -5,
        minutes: 0,
        seconds: 0,
        milliseconds: 0,
        microseconds: -750,
        nanoseconds: 0,
    }
    ");
    assert_eq!(Duration::from(d.to_parts()), d);

    Ok(())
}

#[test]
fn ordering() -> Result {
    let one_minute = Duration::new("1m")?;
    let sixty_seconds = Duration::new("60s")?;
    let one_hour = Duration::new("PT1H")?;
    assert_eq!(one_minute, sixty_seconds);
    assert!(one_minute < one_hour);
    assert!(one_hour.negated() < one_minute);
    assert_eq!(one_minute.compare_to(&one_hour) as i8, -1);
    assert_eq!(one_minute.compare_to(&sixty_seconds) as i8, 0);
    assert_eq!(one_hour.compare_to(&one_minute) as i8, 1);
    assert_eq!(
        [one_hour, one_minute, one_hour.negated()].iter().max(),
        Some(&one_hour),
    );

    Ok(())
}

#[test]
fn std_duration_interop() -> Result {
    let std = std::time::Duration::from_micros(1_500_250);
    let d = Duration::from(std);
    assert_eq!(d.to_short_string(), "0d 0h 0m 1s 500ms 250us 0ns");
    assert_eq!(std::time::Duration::try_from(d)?, std);

    let err = std::time::Duration::try_from(d.negated()).unwrap_err();
    assert!(err.is_invalid_argument());

    Ok(())
}

#[cfg(feature = "std")]
#[test]
fn since_and_till() -> Result {
    let now = jiff::Timestamp::now();
    let past = now - jiff::SignedDuration::from_secs(90);
    let future = now + jiff::SignedDuration::from_secs(90);

    assert!(Duration::since(past).as_seconds() >= 90.0);
    assert!(Duration::till(past).is_negative());
    assert!(Duration::till(future).as_seconds() <= 90.0);
    assert!(Duration::since(future).is_negative());

    let midnight = Duration::since_midnight()?;
    assert!(!midnight.is_negative());

    Ok(())
}
