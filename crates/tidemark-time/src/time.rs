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

//! # Wall-Clock Time Domain
//!
//! Second-granularity span endpoints within a single day. `ClockTime` wraps
//! `chrono::NaiveTime` with the canonical text form `%H:%M:%S`. A span of
//! wall-clock times never crosses midnight: the ordering invariant sees to
//! the span itself, and shifting rejects any translation that would wrap.

use chrono::{NaiveTime, TimeDelta, Timelike};
use std::{fmt, str::FromStr};
use tidemark_core::{point::SpanPoint, span::Span};

/// A closed span of wall-clock times within one day.
///
/// # Examples
///
/// ```rust
/// # use tidemark_time::time::{ClockTime, TimeSpan};
///
/// let shift = TimeSpan::new(
///     ClockTime::from_hms(9, 0, 0).unwrap(),
///     ClockTime::from_hms(17, 30, 0).unwrap(),
/// )
/// .unwrap();
///
/// assert_eq!(shift.to_string(), "09:00:00-17:30:00");
/// assert!(shift.contains_point(ClockTime::from_hms(12, 0, 0).unwrap()));
/// ```
pub type TimeSpan = Span<ClockTime>;

/// A wall-clock time usable as a span endpoint.
///
/// The canonical resolution is one second; sub-second precision is dropped
/// at construction so every value round-trips through its text form.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// The canonical text format.
    pub const FORMAT: &'static str = "%H:%M:%S";

    /// Creates a `ClockTime` from hours, minutes, and seconds.
    ///
    /// Returns `None` when any component is out of range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidemark_time::time::ClockTime;
    ///
    /// assert!(ClockTime::from_hms(23, 59, 59).is_some());
    /// assert!(ClockTime::from_hms(24, 0, 0).is_none());
    /// ```
    #[inline]
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, second).map(Self)
    }

    /// Wraps a `chrono` time, dropping sub-second precision.
    #[inline]
    pub fn new(time: NaiveTime) -> Self {
        Self(
            time.with_nanosecond(0)
                .expect("zero nanoseconds is valid for every time"),
        )
    }

    /// Returns the wrapped `chrono` time.
    #[inline]
    pub const fn into_inner(self) -> NaiveTime {
        self.0
    }
}

impl From<NaiveTime> for ClockTime {
    #[inline]
    fn from(time: NaiveTime) -> Self {
        Self::new(time)
    }
}

impl From<ClockTime> for NaiveTime {
    #[inline]
    fn from(time: ClockTime) -> Self {
        time.into_inner()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl FromStr for ClockTime {
    type Err = chrono::ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(text, Self::FORMAT).map(Self)
    }
}

impl SpanPoint for ClockTime {
    const TEXT_FIELDS: usize = 1;
    type Shift = TimeDelta;

    /// Translates within the day; any shift that would cross midnight in
    /// either direction is rejected.
    #[inline]
    fn shifted_by(self, delta: TimeDelta) -> Option<Self> {
        let (shifted, wrapped_secs) = self.0.overflowing_add_signed(delta);
        (wrapped_secs == 0).then_some(Self(shifted))
    }
}
