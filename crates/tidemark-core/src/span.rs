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

//! # Closed Spans
//!
//! The `Span<T>` value type: a validated, immutable closed interval
//! `[start, end]` over a point domain, where the upper bound is an explicit
//! `EndBound<T>` and may be open-ended. This module carries the construction
//! invariant and the whole set algebra: containment, overlap, union,
//! intersection, and overlap-checked merge.
//!
//! ## Boundary policy
//!
//! Spans are closed on both ends. Containment is boundary-inclusive
//! everywhere, and two spans that merely touch at a single point overlap.
//! Callers who need "touching but disjoint" semantics must special-case
//! endpoint equality themselves; no operation in this crate does.
//!
//! A span with `start == end` is legal and covers exactly one point
//! (an *instant* span).

use crate::point::SpanPoint;
use num_traits::{CheckedAdd, One, PrimInt};
use std::{
    cmp::{max, min},
    ops::{BitAnd, BitOr},
};

/// The upper bound of a span: a concrete point, or no bound at all.
///
/// Open-endedness is a tag, not a sentinel value, so a span that is genuinely
/// unbounded is distinguishable from one that happens to end at the domain's
/// maximum. The derived ordering places `Unbounded` above every `Bounded`
/// point, which is exactly the comparison the span algebra needs.
///
/// # Examples
///
/// ```rust
/// # use tidemark_core::span::EndBound;
///
/// assert!(EndBound::Bounded(u32::MAX) < EndBound::Unbounded);
/// assert!(EndBound::Bounded(3u32) < EndBound::Bounded(4u32));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EndBound<T> {
    /// The span ends at this point, inclusive.
    Bounded(T),
    /// The span has no upper bound.
    Unbounded,
}

impl<T> EndBound<T> {
    /// Returns `true` if this bound is a concrete point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidemark_core::span::EndBound;
    ///
    /// assert!(EndBound::Bounded(5u32).is_bounded());
    /// assert!(!EndBound::<u32>::Unbounded.is_bounded());
    /// ```
    #[inline]
    pub const fn is_bounded(&self) -> bool {
        matches!(self, EndBound::Bounded(_))
    }

    /// Returns `true` if this bound is open-ended.
    #[inline]
    pub const fn is_unbounded(&self) -> bool {
        matches!(self, EndBound::Unbounded)
    }

    /// Returns the concrete point, or `None` for an open end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidemark_core::span::EndBound;
    ///
    /// assert_eq!(EndBound::Bounded(5u32).as_bounded(), Some(5));
    /// assert_eq!(EndBound::<u32>::Unbounded.as_bounded(), None);
    /// ```
    #[inline]
    pub fn as_bounded(&self) -> Option<T>
    where
        T: Copy,
    {
        match self {
            EndBound::Bounded(point) => Some(*point),
            EndBound::Unbounded => None,
        }
    }
}

impl<T> From<Option<T>> for EndBound<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(point) => EndBound::Bounded(point),
            None => EndBound::Unbounded,
        }
    }
}

impl<T> From<EndBound<T>> for Option<T> {
    #[inline]
    fn from(value: EndBound<T>) -> Self {
        match value {
            EndBound::Bounded(point) => Some(point),
            EndBound::Unbounded => None,
        }
    }
}

/// The error returned when a span's end would precede its start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrderingError<T>
where
    T: SpanPoint,
{
    start: T,
    end: EndBound<T>,
}

impl<T> OrderingError<T>
where
    T: SpanPoint,
{
    /// The start that was rejected.
    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    /// The end that was rejected.
    #[inline]
    pub fn end(&self) -> EndBound<T> {
        self.end
    }
}

impl<T> std::fmt::Display for OrderingError<T>
where
    T: SpanPoint,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid span: start {} is ordered after end {}",
            self.start, self.end
        )
    }
}

impl<T> std::error::Error for OrderingError<T> where T: SpanPoint {}

/// The error returned by [`Span::merge`] when the two spans do not overlap.
///
/// `merge` exists so callers can assert adjacency as a precondition instead
/// of silently bridging a gap with [`Span::union`]; this error is the
/// assertion failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoOverlapError<T>
where
    T: SpanPoint,
{
    left: Span<T>,
    right: Span<T>,
}

impl<T> NoOverlapError<T>
where
    T: SpanPoint,
{
    /// The left operand of the failed merge.
    #[inline]
    pub fn left(&self) -> Span<T> {
        self.left
    }

    /// The right operand of the failed merge.
    #[inline]
    pub fn right(&self) -> Span<T> {
        self.right
    }
}

impl<T> std::fmt::Display for NoOverlapError<T>
where
    T: SpanPoint,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "cannot merge disjoint spans {} and {}",
            self.left, self.right
        )
    }
}

impl<T> std::error::Error for NoOverlapError<T> where T: SpanPoint {}

/// A closed span `[start, end]` over an ordered point domain.
///
/// A span always satisfies `start <= end`; construction rejects anything
/// else. `start == end` is a legal *instant* span covering exactly one
/// point. The upper bound is an [`EndBound`], so a span may be open-ended.
///
/// Spans are immutable `Copy` values with structural equality; every
/// operation that "changes" a span produces a new one.
///
/// # Examples
///
/// ```rust
/// # use tidemark_core::span::Span;
///
/// let a = Span::new(0u32, 10).unwrap();
/// let b = Span::new(5u32, 15).unwrap();
///
/// assert!(a.overlaps(&b));
/// assert_eq!(a.intersection(&b), Some(Span::new(5, 10).unwrap()));
/// assert_eq!(a.union(&b), Span::new(0, 15).unwrap());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span<T>
where
    T: SpanPoint,
{
    start: T,
    end: EndBound<T>,
}

impl<T> Span<T>
where
    T: SpanPoint,
{
    /// Creates a bounded span `[start, end]`.
    ///
    /// Fails with [`OrderingError`] if `end < start`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidemark_core::span::Span;
    ///
    /// assert!(Span::new(1u32, 5).is_ok());
    /// assert!(Span::new(1u32, 1).is_ok()); // instant span
    /// assert!(Span::new(5u32, 1).is_err());
    /// ```
    #[inline]
    pub fn new(start: T, end: T) -> Result<Self, OrderingError<T>> {
        Self::with_bound(start, EndBound::Bounded(end))
    }

    /// Creates a span with an explicit upper bound.
    ///
    /// Fails with [`OrderingError`] if the bound is a point before `start`;
    /// an `Unbounded` end is valid for any start.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidemark_core::span::{EndBound, Span};
    ///
    /// assert!(Span::with_bound(3u32, EndBound::Unbounded).is_ok());
    /// assert!(Span::with_bound(3u32, EndBound::Bounded(2)).is_err());
    /// ```
    #[inline]
    pub fn with_bound(start: T, end: EndBound<T>) -> Result<Self, OrderingError<T>> {
        if end < EndBound::Bounded(start) {
            return Err(OrderingError { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates an open-ended span `[start, ∞)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidemark_core::span::Span;
    ///
    /// let tail = Span::unbounded(7u32);
    /// assert!(tail.contains_point(u32::MAX));
    /// ```
    #[inline]
    pub const fn unbounded(start: T) -> Self {
        Self {
            start,
            end: EndBound::Unbounded,
        }
    }

    /// Creates a span without checking the invariant in release builds.
    ///
    /// Used internally by operations whose inputs already guarantee
    /// `start <= end`; a `debug_assert!` catches violations in development.
    #[inline]
    pub(crate) fn new_unchecked(start: T, end: EndBound<T>) -> Self {
        debug_assert!(
            EndBound::Bounded(start) <= end,
            "invalid span: start must be ordered before end"
        );
        Self { start, end }
    }

    /// Returns the inclusive start of the span.
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the upper bound of the span.
    #[inline]
    pub const fn end(&self) -> EndBound<T> {
        self.end
    }

    /// Returns the inclusive end point, or `None` for an open-ended span.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidemark_core::span::Span;
    ///
    /// assert_eq!(Span::new(1u32, 5).unwrap().end_point(), Some(5));
    /// assert_eq!(Span::unbounded(1u32).end_point(), None);
    /// ```
    #[inline]
    pub fn end_point(&self) -> Option<T> {
        self.end.as_bounded()
    }

    /// Returns `true` if the span covers exactly one point.
    #[inline]
    pub fn is_instant(&self) -> bool {
        self.end == EndBound::Bounded(self.start)
    }

    /// Returns `true` if the span has no upper bound.
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.end.is_unbounded()
    }

    /// Returns `true` if `point` lies within the span.
    ///
    /// Boundary-inclusive on both ends; this is the single containment
    /// policy used throughout the crate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidemark_core::span::Span;
    ///
    /// let span = Span::new(1u32, 5).unwrap();
    /// assert!(span.contains_point(1)); // start is included
    /// assert!(span.contains_point(3));
    /// assert!(span.contains_point(5)); // end is included
    /// assert!(!span.contains_point(6));
    /// ```
    #[inline]
    pub fn contains_point(&self, point: T) -> bool {
        self.start <= point && EndBound::Bounded(point) <= self.end
    }

    /// Returns `true` if `other` lies entirely within this span.
    ///
    /// A span contains itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidemark_core::span::Span;
    ///
    /// let outer = Span::new(0u32, 10).unwrap();
    /// assert!(outer.contains_span(&Span::new(2, 8).unwrap()));
    /// assert!(outer.contains_span(&outer));
    /// assert!(!outer.contains_span(&Span::new(2, 11).unwrap()));
    /// ```
    #[inline]
    pub fn contains_span(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns `true` if the two spans share at least one point.
    ///
    /// This is the closed-interval overlap test: spans that merely touch at
    /// a single point (`a.end == b.start`) *do* overlap. Every downstream
    /// operation (intersection, merge, difference) is governed by this
    /// definition, so callers relying on "touching but disjoint" semantics
    /// must special-case endpoint equality explicitly.
    ///
    /// Symmetric: `a.overlaps(&b) == b.overlaps(&a)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidemark_core::span::Span;
    ///
    /// let a = Span::new(1u32, 3).unwrap();
    /// assert!(a.overlaps(&Span::new(3, 5).unwrap())); // touching counts
    /// assert!(!a.overlaps(&Span::new(4, 5).unwrap()));
    /// ```
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        EndBound::Bounded(self.start) <= other.end && EndBound::Bounded(other.start) <= self.end
    }

    /// Returns the convex hull of the two spans.
    ///
    /// Always defined, regardless of overlap: disjoint inputs are bridged,
    /// gap included. Callers that must not bridge a gap should check
    /// [`Span::overlaps`] first or use [`Span::merge`].
    ///
    /// Commutative and idempotent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidemark_core::span::Span;
    ///
    /// let a = Span::new(0u32, 2).unwrap();
    /// let b = Span::new(5u32, 9).unwrap();
    /// assert_eq!(a.union(&b), Span::new(0, 9).unwrap()); // gap bridged
    /// ```
    #[inline]
    pub fn union(&self, other: &Self) -> Self {
        Self::new_unchecked(min(self.start, other.start), max(self.end, other.end))
    }

    /// Returns the span covered by both inputs, or `None` if they do not
    /// overlap.
    ///
    /// Never constructs an inverted span: disjoint inputs yield an explicit
    /// absence instead of a constructor failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidemark_core::span::Span;
    ///
    /// let a = Span::new(0u32, 10).unwrap();
    /// let b = Span::new(5u32, 15).unwrap();
    /// assert_eq!(a.intersection(&b), Some(Span::new(5, 10).unwrap()));
    ///
    /// let c = Span::new(11u32, 15).unwrap();
    /// assert_eq!(a.intersection(&c), None);
    /// ```
    #[inline]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.overlaps(other) {
            return None;
        }
        Some(Self::new_unchecked(
            max(self.start, other.start),
            min(self.end, other.end),
        ))
    }

    /// Returns the union of two overlapping spans, failing if they are
    /// disjoint.
    ///
    /// The computation is identical to [`Span::union`]; the difference is
    /// the precondition. Use this when a gap between the inputs would be a
    /// caller bug rather than something to silently bridge.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidemark_core::span::Span;
    ///
    /// let a = Span::new(0u32, 5).unwrap();
    /// let b = Span::new(5u32, 9).unwrap();
    /// assert_eq!(a.merge(&b), Ok(Span::new(0, 9).unwrap()));
    ///
    /// let c = Span::new(7u32, 9).unwrap();
    /// assert!(a.merge(&c).is_err());
    /// ```
    #[inline]
    pub fn merge(&self, other: &Self) -> Result<Self, NoOverlapError<T>> {
        if !self.overlaps(other) {
            return Err(NoOverlapError {
                left: *self,
                right: *other,
            });
        }
        Ok(self.union(other))
    }

    /// Translates the span by `delta`, returning `None` if either endpoint
    /// would leave the domain.
    ///
    /// An unbounded end stays unbounded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidemark_core::span::Span;
    ///
    /// let span = Span::new(10u32, 20).unwrap();
    /// assert_eq!(span.shift(5), Some(Span::new(15, 25).unwrap()));
    /// assert_eq!(span.shift(u32::MAX), None);
    /// ```
    pub fn shift(&self, delta: T::Shift) -> Option<Self> {
        let start = self.start.shifted_by(delta)?;
        let end = match self.end {
            EndBound::Bounded(point) => EndBound::Bounded(point.shifted_by(delta)?),
            EndBound::Unbounded => EndBound::Unbounded,
        };
        Some(Self::new_unchecked(start, end))
    }
}

impl<T> Span<T>
where
    T: SpanPoint + PrimInt + CheckedAdd,
{
    /// Returns the number of points a bounded integer span covers.
    ///
    /// `None` for open-ended spans, and when the count itself overflows `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidemark_core::span::Span;
    ///
    /// assert_eq!(Span::new(10u32, 12).unwrap().point_count(), Some(3));
    /// assert_eq!(Span::new(4u32, 4).unwrap().point_count(), Some(1));
    /// assert_eq!(Span::unbounded(0u32).point_count(), None);
    /// ```
    #[inline]
    pub fn point_count(&self) -> Option<T> {
        match self.end {
            EndBound::Bounded(end) => (end - self.start).checked_add(&T::one()),
            EndBound::Unbounded => None,
        }
    }
}

impl<T> BitAnd for Span<T>
where
    T: SpanPoint,
{
    type Output = Option<Self>;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(&rhs)
    }
}

impl<T> BitOr for Span<T>
where
    T: SpanPoint,
{
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(&rhs)
    }
}

impl<T> std::fmt::Debug for Span<T>
where
    T: SpanPoint,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Span")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish()
    }
}

impl<T> std::ops::RangeBounds<T> for Span<T>
where
    T: SpanPoint,
{
    fn start_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.start)
    }

    fn end_bound(&self) -> std::ops::Bound<&T> {
        match &self.end {
            EndBound::Bounded(point) => std::ops::Bound::Included(point),
            EndBound::Unbounded => std::ops::Bound::Unbounded,
        }
    }
}
