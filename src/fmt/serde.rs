/*!
This module provides helpers to use with [Serde].

By default, a [`Duration`](crate::Duration) serializes as its seven units,
i.e., as a [`Parts`](crate::Parts) record. It deserializes from such a
record, from a number of milliseconds or from a string in either grammar
supported by [`fmt::parse`](crate::fmt::parse).

The helpers in this module are meant to be used with Serde's
[`with` attribute] when a different serialized form is wanted:

* [`dura::fmt::serde::millis`](self::millis) writes the magnitude as a
number of milliseconds.
* [`dura::fmt::serde::iso8601`](self::iso8601) writes an ISO 8601 duration
string.

# Example

```
use dura::Duration;

#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct Record {
    parts: Duration,
    #[serde(with = "dura::fmt::serde::millis")]
    millis: Duration,
    #[serde(with = "dura::fmt::serde::iso8601")]
    iso: Duration,
}

let json = r#"{"parts":"1h 30m","millis":1500.5,"iso":"PT1H30M"}"#;
let got: Record = serde_json::from_str(json)?;
assert_eq!(got.parts, got.iso);
assert_eq!(got.millis.as_millis(), 1_500.5);
assert_eq!(
    serde_json::to_string(&got)?,
    r#"{"parts":{"days":0,"hours":1,"minutes":30,"seconds":0,"milliseconds":0,"microseconds":0,"nanoseconds":0},"millis":1500.5,"iso":"PT1H30M"}"#,
);

# Ok::<(), Box<dyn std::error::Error>>(())
```

[Serde]: https://serde.rs/
[`with` attribute]: https://serde.rs/field-attrs.html#with
*/

use serde::de;

use crate::{Duration, Parts};

impl serde::Serialize for Duration {
    #[inline]
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.to_parts(), serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Duration {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Duration, D::Error> {
        deserializer.deserialize_any(DurationVisitor)
    }
}

/// A visitor for any of the forms a duration may take.
struct DurationVisitor;

impl<'de> de::Visitor<'de> for DurationVisitor {
    type Value = Duration;

    fn expecting(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(
            "a record of duration units, a number of milliseconds \
             or a duration string",
        )
    }

    #[inline]
    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Duration, E> {
        self.visit_f64(v as f64)
    }

    #[inline]
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Duration, E> {
        self.visit_f64(v as f64)
    }

    #[inline]
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Duration, E> {
        Duration::try_from_millis(v).map_err(de::Error::custom)
    }

    #[inline]
    fn visit_str<E: de::Error>(self, v: &str) -> Result<Duration, E> {
        v.parse().map_err(de::Error::custom)
    }

    #[inline]
    fn visit_map<A: de::MapAccess<'de>>(
        self,
        map: A,
    ) -> Result<Duration, A::Error> {
        let parts: Parts = serde::Deserialize::deserialize(
            de::value::MapAccessDeserializer::new(map),
        )?;
        Ok(parts.to_duration())
    }
}

/// (De)serialize a duration as a number of milliseconds.
pub mod millis {
    use serde::de;

    struct Visitor;

    impl<'de> de::Visitor<'de> for Visitor {
        type Value = crate::Duration;

        fn expecting(
            &self,
            f: &mut core::fmt::Formatter,
        ) -> core::fmt::Result {
            f.write_str("a finite number of milliseconds")
        }

        #[inline]
        fn visit_i64<E: de::Error>(
            self,
            v: i64,
        ) -> Result<crate::Duration, E> {
            self.visit_f64(v as f64)
        }

        #[inline]
        fn visit_u64<E: de::Error>(
            self,
            v: u64,
        ) -> Result<crate::Duration, E> {
            self.visit_f64(v as f64)
        }

        #[inline]
        fn visit_f64<E: de::Error>(
            self,
            v: f64,
        ) -> Result<crate::Duration, E> {
            crate::Duration::try_from_millis(v).map_err(de::Error::custom)
        }
    }

    /// Serialize a duration as a number of milliseconds.
    #[inline]
    pub fn serialize<S: serde::Serializer>(
        duration: &crate::Duration,
        se: S,
    ) -> Result<S::Ok, S::Error> {
        se.serialize_f64(duration.as_millis())
    }

    /// Deserialize a duration from a number of milliseconds.
    #[inline]
    pub fn deserialize<'de, D: serde::Deserializer<'de>>(
        de: D,
    ) -> Result<crate::Duration, D::Error> {
        de.deserialize_f64(Visitor)
    }
}

/// (De)serialize a duration as an ISO 8601 duration string.
///
/// Note that serializing this way drops precision smaller than a
/// millisecond.
pub mod iso8601 {
    use serde::de;

    struct Visitor;

    impl<'de> de::Visitor<'de> for Visitor {
        type Value = crate::Duration;

        fn expecting(
            &self,
            f: &mut core::fmt::Formatter,
        ) -> core::fmt::Result {
            f.write_str("an ISO 8601 duration string")
        }

        #[inline]
        fn visit_str<E: de::Error>(
            self,
            v: &str,
        ) -> Result<crate::Duration, E> {
            crate::fmt::iso8601::parse(v)
                .and_then(crate::Duration::try_from_millis)
                .map_err(de::Error::custom)
        }
    }

    /// Serialize a duration as an ISO 8601 duration string.
    #[inline]
    pub fn serialize<S: serde::Serializer>(
        duration: &crate::Duration,
        se: S,
    ) -> Result<S::Ok, S::Error> {
        se.collect_str(duration)
    }

    /// Deserialize a duration from an ISO 8601 duration string.
    #[inline]
    pub fn deserialize<'de, D: serde::Deserializer<'de>>(
        de: D,
    ) -> Result<crate::Duration, D::Error> {
        de.deserialize_str(Visitor)
    }
}
