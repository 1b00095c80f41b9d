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

//! # Tidemark Time
//!
//! **The temporal point domains for the tidemark span algebra.**
//!
//! This crate binds the generic `Span<T>` machinery from `tidemark-core` to
//! concrete calendar and clock domains. Each domain is a newtype over the
//! corresponding `chrono` value, pinning one canonical text form and one
//! shifting rule, so spans over it format, parse, and translate the same way
//! everywhere.
//!
//! ## Domains
//!
//! | type             | wraps                            | canonical text               |
//! |------------------|----------------------------------|------------------------------|
//! | `CalendarDate`   | `chrono::NaiveDate`              | `2020-01-31`                 |
//! | `ClockTime`      | `chrono::NaiveTime`              | `10:30:00`                   |
//! | `Timestamp`      | `chrono::NaiveDateTime`          | `2020-01-31T10:30:00`        |
//! | `ZonedTimestamp` | `chrono::DateTime<FixedOffset>`  | `2020-01-31T10:30:00+02:00`  |
//!
//! Span aliases (`DateSpan`, `TimeSpan`, `TimestampSpan`, `ZonedSpan`) are
//! exported next to each domain. `CalendarDate` additionally steps day by
//! day, so a `DateSpan` can be enumerated as a lazy sequence of dates.
//!
//! ## Design Philosophy
//!
//! 1. **One canonical form per domain**: the wire format is part of the
//!    domain's identity; sub-second precision is outside every canonical
//!    resolution here and is dropped at the constructor boundary.
//! 2. **Checked shifting**: translations that would leave the domain (a
//!    date past the calendar's edge, a wall-clock time across midnight)
//!    yield `None` instead of wrapping.
//! 3. **Newtypes over re-exports**: wrapping chrono values keeps the span
//!    contract implementable here and the canonical format un-forkable by
//!    downstream code.

pub mod date;
pub mod datetime;
pub mod time;
pub mod zoned;
