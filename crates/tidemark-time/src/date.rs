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

//! # Calendar Date Domain
//!
//! Day-granularity span endpoints. `CalendarDate` wraps `chrono::NaiveDate`
//! with the canonical text form `%Y-%m-%d`, shifts by whole days, and steps
//! day by day, so a `DateSpan` doubles as a lazy sequence of dates.

use chrono::{NaiveDate, TimeDelta};
use std::{fmt, str::FromStr};
use tidemark_core::{
    point::{DiscretePoint, SpanPoint},
    span::Span,
};

/// A closed span of calendar dates.
///
/// # Examples
///
/// ```rust
/// # use tidemark_time::date::{CalendarDate, DateSpan};
///
/// let span = DateSpan::new(
///     CalendarDate::from_ymd(2020, 1, 1).unwrap(),
///     CalendarDate::from_ymd(2020, 1, 5).unwrap(),
/// )
/// .unwrap();
///
/// assert_eq!(span.to_string(), "2020-01-01-2020-01-05");
/// assert_eq!(span.iter_points().count(), 5);
/// ```
pub type DateSpan = Span<CalendarDate>;

/// A calendar date usable as a span endpoint.
///
/// The canonical text form is `%Y-%m-%d` (`2020-01-31`). Shifting moves by
/// the whole days of the delta; the successor is the next day.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// The canonical text format.
    pub const FORMAT: &'static str = "%Y-%m-%d";

    /// Creates a `CalendarDate` from a calendar year, month, and day.
    ///
    /// Returns `None` for an invalid date.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidemark_time::date::CalendarDate;
    ///
    /// assert!(CalendarDate::from_ymd(2020, 2, 29).is_some()); // leap day
    /// assert!(CalendarDate::from_ymd(2021, 2, 29).is_none());
    /// ```
    #[inline]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Wraps an already-validated `chrono` date.
    #[inline]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the wrapped `chrono` date.
    #[inline]
    pub const fn into_inner(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    #[inline]
    fn from(date: NaiveDate) -> Self {
        Self::new(date)
    }
}

impl From<CalendarDate> for NaiveDate {
    #[inline]
    fn from(date: CalendarDate) -> Self {
        date.into_inner()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = chrono::ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(text, Self::FORMAT).map(Self)
    }
}

impl SpanPoint for CalendarDate {
    const TEXT_FIELDS: usize = 3;
    type Shift = TimeDelta;

    #[inline]
    fn shifted_by(self, delta: TimeDelta) -> Option<Self> {
        self.0.checked_add_signed(delta).map(Self)
    }
}

impl DiscretePoint for CalendarDate {
    #[inline]
    fn next_point(self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }
}
