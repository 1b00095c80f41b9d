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

//! # Point Domains
//!
//! The endpoint contract for spans. A `SpanPoint` is any totally ordered,
//! cheaply copyable value with a canonical text form; `DiscretePoint` extends
//! it with a successor function so spans over the domain can be enumerated
//! point by point.
//!
//! ## Canonical text
//!
//! Each domain owns one textual rendering, exposed through the standard
//! `Display`/`FromStr` pair. The span codec joins two endpoint renderings
//! with a single `-`, so a domain must also declare how many `-`-separated
//! fields its canonical form occupies (`TEXT_FIELDS`); that is what lets the
//! codec split `"2020-01-01-2020-01-05"` correctly even though the endpoint
//! format itself contains the separator.
//!
//! ## Instances
//!
//! Primitive integers implement both traits here. Calendar and clock domains
//! live in the companion domain crate, wrapped in newtypes that pin their
//! canonical formats.

use std::{
    fmt::{Debug, Display},
    hash::Hash,
    str::FromStr,
};

/// The contract for a type usable as a span endpoint.
///
/// Implementors supply a total order, structural identity, a canonical text
/// form (via `Display`/`FromStr`), and a checked translation. All span
/// operations are defined purely in terms of this contract.
///
/// # Examples
///
/// ```rust
/// # use tidemark_core::point::SpanPoint;
///
/// assert_eq!(<u32 as SpanPoint>::TEXT_FIELDS, 1);
/// assert_eq!(7u32.shifted_by(3), Some(10));
/// assert_eq!(u32::MAX.shifted_by(1), None);
/// ```
pub trait SpanPoint: Copy + Ord + Hash + Debug + Display + FromStr {
    /// Number of `-`-separated fields in the canonical text form.
    ///
    /// A rendering may carry at most one extra `-` beyond this count (a sign,
    /// or a negative UTC offset); the span codec probes both field counts.
    const TEXT_FIELDS: usize;

    /// The offset type by which a point can be translated.
    type Shift: Copy;

    /// Translates the point by `delta`, returning `None` if the result falls
    /// outside the domain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidemark_core::point::SpanPoint;
    ///
    /// assert_eq!(250u8.shifted_by(5), Some(255));
    /// assert_eq!(250u8.shifted_by(6), None);
    /// ```
    fn shifted_by(self, delta: Self::Shift) -> Option<Self>;
}

/// A `SpanPoint` with a successor function.
///
/// Domains implementing this trait can be enumerated: integers step by one,
/// calendar dates step by a day. The successor is `None` at the domain's
/// upper edge, which keeps iteration over open-ended spans finite.
///
/// # Examples
///
/// ```rust
/// # use tidemark_core::point::DiscretePoint;
///
/// assert_eq!(41u32.next_point(), Some(42));
/// assert_eq!(u32::MAX.next_point(), None);
/// ```
pub trait DiscretePoint: SpanPoint {
    /// Returns the next point in the domain, or `None` at the upper edge.
    fn next_point(self) -> Option<Self>;
}

macro_rules! impl_point_for_int {
    ($t:ty) => {
        impl SpanPoint for $t {
            const TEXT_FIELDS: usize = 1;
            type Shift = $t;

            #[inline]
            fn shifted_by(self, delta: $t) -> Option<$t> {
                self.checked_add(delta)
            }
        }

        impl DiscretePoint for $t {
            #[inline]
            fn next_point(self) -> Option<$t> {
                self.checked_add(1)
            }
        }
    };
}

impl_point_for_int!(i8);
impl_point_for_int!(i16);
impl_point_for_int!(i32);
impl_point_for_int!(i64);
impl_point_for_int!(i128);
impl_point_for_int!(isize);

impl_point_for_int!(u8);
impl_point_for_int!(u16);
impl_point_for_int!(u32);
impl_point_for_int!(u64);
impl_point_for_int!(u128);
impl_point_for_int!(usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shifted_by_within_domain() {
        assert_eq!(10u32.shifted_by(5), Some(15));
        assert_eq!((-10i32).shifted_by(3), Some(-7));
    }

    #[test]
    fn test_shifted_by_overflow() {
        assert_eq!(u8::MAX.shifted_by(1), None);
        assert_eq!(i64::MAX.shifted_by(1), None);
    }

    #[test]
    fn test_next_point() {
        assert_eq!(0u8.next_point(), Some(1));
        assert_eq!(u8::MAX.next_point(), None);
        assert_eq!((-1i32).next_point(), Some(0));
    }

    #[test]
    fn test_text_fields_is_one_for_integers() {
        assert_eq!(<i64 as SpanPoint>::TEXT_FIELDS, 1);
        assert_eq!(<usize as SpanPoint>::TEXT_FIELDS, 1);
    }
}
