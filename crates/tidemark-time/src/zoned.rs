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

//! # Zone-Aware Timestamp Domain
//!
//! Timestamp endpoints carrying a fixed UTC offset. `ZonedTimestamp` wraps
//! `chrono::DateTime<FixedOffset>` with the canonical text form
//! `%Y-%m-%dT%H:%M:%S%:z`. Ordering and equality follow the instant, as
//! chrono defines them, so spans with mixed offsets compose correctly; the
//! offset is preserved verbatim by the codec.
//!
//! A negative UTC offset puts one extra `-` into the rendering; the span
//! codec's probed field count absorbs it, which is exactly the situation the
//! probe exists for.

use chrono::{DateTime, FixedOffset, TimeDelta, TimeZone, Timelike};
use std::{fmt, str::FromStr};
use tidemark_core::{point::SpanPoint, span::Span};

/// A closed span of zone-aware timestamps.
///
/// # Examples
///
/// ```rust
/// # use tidemark_time::zoned::{ZonedSpan, ZonedTimestamp};
///
/// let window = ZonedSpan::new(
///     ZonedTimestamp::from_parts(2020, 1, 1, 9, 0, 0, 3600).unwrap(),
///     ZonedTimestamp::from_parts(2020, 1, 1, 17, 0, 0, 3600).unwrap(),
/// )
/// .unwrap();
///
/// assert_eq!(
///     window.to_string(),
///     "2020-01-01T09:00:00+01:00-2020-01-01T17:00:00+01:00"
/// );
/// ```
pub type ZonedSpan = Span<ZonedTimestamp>;

/// A timestamp with a fixed UTC offset, usable as a span endpoint.
///
/// The canonical resolution is one second; sub-second precision is dropped
/// at construction so every value round-trips through its text form.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZonedTimestamp(DateTime<FixedOffset>);

impl ZonedTimestamp {
    /// The canonical text format.
    pub const FORMAT: &'static str = "%Y-%m-%dT%H:%M:%S%:z";

    /// Creates a `ZonedTimestamp` from calendar and clock components plus a
    /// UTC offset in seconds (positive east of Greenwich).
    ///
    /// Returns `None` when any component or the offset is out of range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidemark_time::zoned::ZonedTimestamp;
    ///
    /// let utc_plus_two = ZonedTimestamp::from_parts(2020, 6, 1, 12, 0, 0, 7200);
    /// assert!(utc_plus_two.is_some());
    ///
    /// // Offsets of a whole day or more are invalid.
    /// assert!(ZonedTimestamp::from_parts(2020, 6, 1, 12, 0, 0, 86_400).is_none());
    /// ```
    pub fn from_parts(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        offset_seconds: i32,
    ) -> Option<Self> {
        let offset = FixedOffset::east_opt(offset_seconds)?;
        offset
            .with_ymd_and_hms(year, month, day, hour, minute, second)
            .single()
            .map(Self)
    }

    /// Wraps a `chrono` zoned timestamp, dropping sub-second precision.
    #[inline]
    pub fn new(datetime: DateTime<FixedOffset>) -> Self {
        Self(
            datetime
                .with_nanosecond(0)
                .expect("zero nanoseconds is valid for every timestamp"),
        )
    }

    /// Returns the wrapped `chrono` zoned timestamp.
    #[inline]
    pub const fn into_inner(self) -> DateTime<FixedOffset> {
        self.0
    }

    /// Returns the UTC offset carried by this timestamp.
    #[inline]
    pub fn offset(&self) -> FixedOffset {
        *self.0.offset()
    }
}

impl From<DateTime<FixedOffset>> for ZonedTimestamp {
    #[inline]
    fn from(datetime: DateTime<FixedOffset>) -> Self {
        Self::new(datetime)
    }
}

impl From<ZonedTimestamp> for DateTime<FixedOffset> {
    #[inline]
    fn from(timestamp: ZonedTimestamp) -> Self {
        timestamp.into_inner()
    }
}

impl fmt::Display for ZonedTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl FromStr for ZonedTimestamp {
    type Err = chrono::ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        DateTime::parse_from_str(text, Self::FORMAT).map(Self)
    }
}

impl SpanPoint for ZonedTimestamp {
    // Field count of a rendering with a non-negative offset; a negative
    // offset adds one field, which the codec probes for.
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

    fn zoned(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        offset_hours: i32,
    ) -> ZonedTimestamp {
        ZonedTimestamp::from_parts(year, month, day, hour, 0, 0, offset_hours * 3600).unwrap()
    }

    #[test]
    fn test_canonical_text_positive_offset() {
        let value = zoned(2020, 1, 1, 9, 2);
        assert_eq!(value.to_string(), "2020-01-01T09:00:00+02:00");
        assert_eq!(value.to_string().parse::<ZonedTimestamp>(), Ok(value));
    }

    #[test]
    fn test_canonical_text_negative_offset() {
        let value = zoned(2020, 1, 1, 9, -5);
        assert_eq!(value.to_string(), "2020-01-01T09:00:00-05:00");
        assert_eq!(value.to_string().parse::<ZonedTimestamp>(), Ok(value));
    }

    #[test]
    fn test_ordering_follows_the_instant() {
        // 12:00+02:00 and 11:00+01:00 are the same instant.
        assert_eq!(zoned(2020, 1, 1, 12, 2), zoned(2020, 1, 1, 11, 1));
        assert!(zoned(2020, 1, 1, 12, 2) < zoned(2020, 1, 1, 12, 1));
    }

    #[test]
    fn test_wire_round_trip_positive_offsets() {
        let window = ZonedSpan::new(zoned(2020, 1, 1, 9, 2), zoned(2020, 1, 1, 17, 2)).unwrap();
        let text = window.to_string();
        assert_eq!(text, "2020-01-01T09:00:00+02:00-2020-01-01T17:00:00+02:00");
        assert_eq!(text.parse::<ZonedSpan>(), Ok(window));
    }

    #[test]
    fn test_wire_round_trip_negative_offsets() {
        // Both renderings carry an extra `-` field; the probed split must
        // still find the only cut where both sides parse.
        let window = ZonedSpan::new(zoned(2020, 1, 1, 9, -5), zoned(2020, 1, 1, 17, -5)).unwrap();
        let text = window.to_string();
        assert_eq!(text, "2020-01-01T09:00:00-05:00-2020-01-01T17:00:00-05:00");
        assert_eq!(text.parse::<ZonedSpan>(), Ok(window));
    }

    #[test]
    fn test_wire_round_trip_mixed_offsets() {
        let cases = [
            ZonedSpan::new(zoned(2020, 1, 1, 9, 2), zoned(2020, 1, 1, 17, -5)).unwrap(),
            ZonedSpan::new(zoned(2020, 1, 1, 4, -5), zoned(2020, 1, 1, 17, 2)).unwrap(),
            ZonedSpan::unbounded(zoned(2020, 1, 1, 9, -5)),
        ];
        for window in cases {
            let text = window.to_string();
            assert_eq!(text.parse::<ZonedSpan>(), Ok(window), "via {:?}", text);
        }
    }

    #[test]
    fn test_spans_compare_by_instant_across_offsets() {
        let a = ZonedSpan::new(zoned(2020, 1, 1, 12, 2), zoned(2020, 1, 1, 18, 2)).unwrap();
        let b = ZonedSpan::new(zoned(2020, 1, 1, 11, 1), zoned(2020, 1, 1, 17, 1)).unwrap();
        assert_eq!(a, b);
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_shift_preserves_offset() {
        let value = zoned(2020, 1, 1, 9, -5);
        let shifted = value.shifted_by(TimeDelta::hours(20)).unwrap();
        assert_eq!(shifted.to_string(), "2020-01-02T05:00:00-05:00");
        assert_eq!(shifted.offset(), FixedOffset::east_opt(-5 * 3600).unwrap());
    }

    #[test]
    fn test_serde_wire_format() {
        let window = ZonedSpan::new(zoned(2020, 1, 1, 9, -5), zoned(2020, 1, 1, 17, -5)).unwrap();
        let json = serde_json::to_string(&window).unwrap();
        assert_eq!(
            json,
            "\"2020-01-01T09:00:00-05:00-2020-01-01T17:00:00-05:00\""
        );
        assert_eq!(serde_json::from_str::<ZonedSpan>(&json).unwrap(), window);
    }
}
