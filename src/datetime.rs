use std::fmt;
use std::ops;

use chrono::TimeZone;

/// A fixed-offset timestamp for publish dates.
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Hash)]
pub struct DateTime(chrono::DateTime<chrono::FixedOffset>);

impl DateTime {
    /// The current moment, at UTC offset zero.
    pub fn now() -> Self {
        DateTime(chrono::Utc::now().fixed_offset())
    }

    /// Midnight UTC on the named calendar date.
    ///
    /// `None` when the components do not form a real date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        chrono::Utc
            .with_ymd_and_hms(year, month, day, 0, 0, 0)
            .single()
            .map(|d| DateTime(d.fixed_offset()))
    }

    pub fn parse<S: AsRef<str>>(d: S) -> Option<Self> {
        Self::parse_str(d.as_ref())
    }

    fn parse_str(d: &str) -> Option<Self> {
        chrono::DateTime::parse_from_str(d, "%Y-%m-%d %H:%M:%S %z")
            .ok()
            .map(DateTime)
    }

    pub fn format(&self) -> String {
        self.0.format("%Y-%m-%d %H:%M:%S %z").to_string()
    }
}

impl Default for DateTime {
    fn default() -> Self {
        DateTime(chrono::DateTime::UNIX_EPOCH.fixed_offset())
    }
}

impl ops::Deref for DateTime {
    type Target = chrono::DateTime<chrono::FixedOffset>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<chrono::DateTime<chrono::FixedOffset>> for DateTime {
    fn from(v: chrono::DateTime<chrono::FixedOffset>) -> Self {
        DateTime(v)
    }
}

impl From<DateTime> for chrono::DateTime<chrono::FixedOffset> {
    fn from(v: DateTime) -> Self {
        v.0
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

impl serde::Serialize for DateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(&self.format())
    }
}

struct DateTimeVisitor;

impl serde::de::Visitor<'_> for DateTimeVisitor {
    type Value = DateTime;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "a formatted date and time string")
    }

    fn visit_str<E>(self, value: &str) -> Result<DateTime, E>
    where
        E: serde::de::Error,
    {
        DateTime::parse(value).ok_or_else(|| {
            E::custom(format!(
                "Invalid datetime '{value}', must be `YYYY-MM-DD HH:MM:SS +/-TTTT`"
            ))
        })
    }
}

impl<'de> serde::de::Deserialize<'de> for DateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        deserializer.deserialize_str(DateTimeVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::Datelike;
    use chrono::Timelike;

    #[test]
    fn from_ymd_midnight() {
        let d = DateTime::from_ymd(2020, 1, 2).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2020, 1, 2));
        assert_eq!((d.hour(), d.minute(), d.second()), (0, 0, 0));
    }

    #[test]
    fn from_ymd_out_of_range() {
        assert_eq!(DateTime::from_ymd(2020, 13, 1), None);
        assert_eq!(DateTime::from_ymd(2020, 2, 30), None);
        assert_eq!(DateTime::from_ymd(2020, 1, 99), None);
    }

    #[test]
    fn format() {
        let d = DateTime::from_ymd(2016, 1, 1).unwrap();
        assert_eq!(d.format(), "2016-01-01 00:00:00 +0000");
    }

    #[test]
    fn parse_round_trip() {
        let d = DateTime::parse("2016-01-01 04:00:00 +0100").unwrap();
        assert_eq!(d.format(), "2016-01-01 04:00:00 +0100");
    }

    #[test]
    fn parse_invalid() {
        assert_eq!(DateTime::parse("not a date"), None);
    }

    #[test]
    fn now_is_recent() {
        let d = DateTime::now();
        let elapsed = chrono::Utc::now().fixed_offset() - *d;
        assert!(elapsed.num_seconds().abs() < 5);
    }
}
