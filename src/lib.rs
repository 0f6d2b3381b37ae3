/*!
Dura is a signed, calendar-free duration value type.

A [`Duration`] is a single floating point magnitude in milliseconds. Every
unit, from days down to nanoseconds, is derived from that magnitude on
demand. This makes it impossible for the individual units to disagree with
the whole.

# Overview

* [`Duration`] is the value type. It supports arithmetic, exact comparison,
per-unit getters and setters and fractional conversions to every unit.
* [`Unit`] enumerates the seven fixed granularities a duration decomposes
into. Months and years are not supported because they have no fixed length.
* [`fmt`] contains the parsers and printers: a permissive free-form grammar,
a strict ISO 8601 grammar, colon-delimited and human readable printers and a
number-to-words speller.

# Example

```
use dura::{Duration, Unit};

let d: Duration = "1h 30m 45s 500ms".parse()?;
assert_eq!(d.get_hours(), 1);
assert_eq!(d.get(Unit::Minute), 30);
assert_eq!(d.to_iso_string(), "PT1H30M45.500S");
assert_eq!(d.to_short_string(), "0d 1h 30m 45s 500ms 0us 0ns");

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Parsing is deliberately asymmetric

Free-form text never fails to parse. Units that cannot be found are simply
zero, so garbage input yields a zero duration. The ISO 8601 grammar, on the
other hand, is strict:

```
use dura::Duration;

assert_eq!("not a duration".parse::<Duration>()?, Duration::ZERO);
assert!("P1Y".parse::<Duration>().unwrap_err().is_invalid_format());

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Crate features

* **std** (enabled by default) - Enables the wall clock factories
[`Duration::since_midnight`], [`Duration::since`] and [`Duration::till`].
These read the system clock and time zone via [Jiff](https://docs.rs/jiff).
* **logging** - Emits messages via the `log` crate from the parsers.
* **serde** - Provides `serde` impls for [`Duration`] and [`Parts`].
*/

#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// We generally want all types to impl Debug.
#![warn(missing_debug_implementations)]

pub use crate::{
    duration::{Duration, DurationInput, Parts},
    error::Error,
    unit::Unit,
};

#[macro_use]
mod logging;

mod duration;
mod error;
pub mod fmt;
mod unit;
mod util;
