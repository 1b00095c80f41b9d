// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Timestamp Domain
//!
//! Zone-naive timestamp endpoints at second granularity. `Timestamp` wraps
//! `chrono::NaiveDateTime` with the canonical text form `%Y-%m-%dT%H:%M:%S`;
//! spans over it cross day boundaries freely.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use std::{fmt, str::FromStr};
use tidemark_core::{point::SpanPoint, span::Span};

/// A closed span of zone-naive timestamps.
///
/// # Examples
///
/// ```rust
/// # use tidemark_time::datetime::{Timestamp, TimestampSpan};
///
/// let window = TimestampSpan::new(
///     Timestamp::from_ymd_hms(2020, 1, 1, 22, 0, 0).unwrap(),
///     Timestamp::from_ymd_hms(2020, 1, 2, 6, 0, 0).unwrap(),
/// )
/// .unwrap();
///
/// assert_eq!(window.to_string(), "2020-01-01T22:00:00-2020-01-02T06:00:00");
/// ```
pub type TimestampSpan = Span<Timestamp>;

/// A zone-naive timestamp usable as a span endpoint.
///
/// The canonical resolution is one second; sub-second precision is dropped
/// at construction so every value round-trips through its text form.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// The canonical text format.
    pub const FORMAT: &'static str = "%Y-%m-%dT%H:%M:%S";

    /// Creates a `Timestamp` from calendar and clock components.
    ///
    /// Returns `None` when any component is out of range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidemark_time::datetime::Timestamp;
    ///
    /// assert!(Timestamp::from_ymd_hms(2020, 2, 29, 12, 0, 0).is_some());
    /// assert!(Timestamp::from_ymd_hms(2020, 2, 30, 12, 0, 0).is_none());
    /// ```
    #[inline]
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)?
            .and_hms_opt(hour, minute, second)
            .map(Self)
    }

    /// Wraps a `chrono` timestamp, dropping sub-second precision.
    #[inline]
    pub fn new(datetime: NaiveDateTime) -> Self {
        Self(
            datetime
                .with_nanosecond(0)
                .expect("zero nanoseconds is valid for every timestamp"),
        )
    }

    /// Returns the wrapped `chrono` timestamp.
    #[inline]
    pub const fn into_inner(self) -> NaiveDateTime {
        self.0
    }
}

impl From<NaiveDateTime> for Timestamp {
    #[inline]
    fn from(datetime: NaiveDateTime) -> Self {
        Self::new(datetime)
    }
}

impl From<Timestamp> for NaiveDateTime {
    #[inline]
    fn from(timestamp: Timestamp) -> Self {
        timestamp.into_inner()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        NaiveDateTime::parse_from_str(text, Self::FORMAT).map(Self)
    }
}

impl SpanPoint for Timestamp {
    const TEXT_FIELDS: usize = 3;
    type Shift = TimeDelta;

    #[inline]
    fn shifted_by(self, delta: TimeDelta) -> Option<Self> {
        self.0.checked_add_signed(delta).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidemark_core::diff::SpanDiff;

    fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Timestamp {
        Timestamp::from_ymd_hms(year, month, day, hour, minute, second).unwrap()
    }

    #[test]
    fn test_construction_rejects_inverted_timestamps() {
        assert!(TimestampSpan::new(ts(2020, 1, 2, 0, 0, 0), ts(2020, 1, 1, 0, 0, 0)).is_err());
    }

    #[test]
    fn test_canonical_text() {
        let value = ts(2020, 1, 31, 10, 30, 0);
        assert_eq!(value.to_string(), "2020-01-31T10:30:00");
        assert_eq!("2020-01-31T10:30:00".parse::<Timestamp>(), Ok(value));
    }

    #[test]
    fn test_sub_second_precision_is_dropped() {
        let fractional = NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_milli_opt(10, 0, 0, 250)
            .unwrap();
        assert_eq!(Timestamp::new(fractional), ts(2020, 1, 1, 10, 0, 0));
    }

    #[test]
    fn test_wire_round_trip() {
        let spans = [
            TimestampSpan::new(ts(2020, 1, 1, 22, 0, 0), ts(2020, 1, 2, 6, 0, 0)).unwrap(),
            TimestampSpan::unbounded(ts(2020, 1, 1, 0, 0, 0)),
        ];
        for value in spans {
            let text = value.to_string();
            assert_eq!(text.parse::<TimestampSpan>(), Ok(value), "via {:?}", text);
        }
    }

    #[test]
    fn test_remove_across_midnight() {
        let window = TimestampSpan::new(ts(2020, 1, 1, 20, 0, 0), ts(2020, 1, 2, 8, 0, 0)).unwrap();
        let outage = TimestampSpan::new(ts(2020, 1, 1, 23, 0, 0), ts(2020, 1, 2, 1, 0, 0)).unwrap();

        let diff = window.remove(&outage).unwrap();
        assert_eq!(
            diff,
            SpanDiff::Split {
                before: TimestampSpan::new(ts(2020, 1, 1, 20, 0, 0), ts(2020, 1, 1, 23, 0, 0))
                    .unwrap(),
                after: TimestampSpan::new(ts(2020, 1, 2, 1, 0, 0), ts(2020, 1, 2, 8, 0, 0))
                    .unwrap(),
            }
        );
    }

    #[test]
    fn test_shift_across_day_boundary() {
        let window =
            TimestampSpan::new(ts(2020, 1, 1, 22, 0, 0), ts(2020, 1, 1, 23, 0, 0)).unwrap();
        let shifted = window.shift(TimeDelta::hours(3)).unwrap();
        assert_eq!(
            shifted,
            TimestampSpan::new(ts(2020, 1, 2, 1, 0, 0), ts(2020, 1, 2, 2, 0, 0)).unwrap()
        );
    }

    #[test]
    fn test_serde_wire_format() {
        let window = TimestampSpan::new(ts(2020, 1, 1, 9, 0, 0), ts(2020, 1, 1, 17, 0, 0)).unwrap();
        let json = serde_json::to_string(&window).unwrap();
        assert_eq!(json, "\"2020-01-01T09:00:00-2020-01-01T17:00:00\"");
        assert_eq!(serde_json::from_str::<TimestampSpan>(&json).unwrap(), window);
    }
}
