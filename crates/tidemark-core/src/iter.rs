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

//! # Span Iteration
//!
//! Lazy enumeration of the points inside a span, for domains with a
//! successor function (`DiscretePoint`). Iteration is restartable, since the
//! iterator is a cheap `Clone` detached from the span, and fused. A bounded
//! span yields `start..=end`; an open-ended span keeps yielding until the
//! domain itself runs out of successors.

use crate::{
    point::DiscretePoint,
    span::{EndBound, Span},
};
use std::iter::FusedIterator;

/// An iterator over the points contained in a [`Span`].
///
/// # Examples
///
/// ```rust
/// # use tidemark_core::span::Span;
///
/// let span = Span::new(1u32, 4).unwrap();
/// let points: Vec<_> = span.iter_points().collect();
/// assert_eq!(points, vec![1, 2, 3, 4]);
/// ```
#[derive(Clone, Debug)]
pub struct SpanIter<T>
where
    T: DiscretePoint,
{
    next: Option<T>,
    end: EndBound<T>,
}

impl<T> Iterator for SpanIter<T>
where
    T: DiscretePoint,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current
            .next_point()
            .filter(|point| EndBound::Bounded(*point) <= self.end);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(_) => (1, None),
            None => (0, Some(0)),
        }
    }
}

impl<T> FusedIterator for SpanIter<T> where T: DiscretePoint {}

impl<T> Span<T>
where
    T: DiscretePoint,
{
    /// Creates an iterator over the points in the span, in order.
    ///
    /// The iterator borrows nothing; restarting is just calling this again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidemark_core::span::Span;
    ///
    /// let span = Span::new(1u32, 3).unwrap();
    /// assert_eq!(span.iter_points().collect::<Vec<_>>(), vec![1, 2, 3]);
    ///
    /// // An instant span yields its single point.
    /// let instant = Span::new(7u32, 7).unwrap();
    /// assert_eq!(instant.iter_points().collect::<Vec<_>>(), vec![7]);
    /// ```
    #[inline]
    pub fn iter_points(&self) -> SpanIter<T> {
        SpanIter {
            next: Some(self.start()),
            end: self.end(),
        }
    }
}

impl<T> IntoIterator for Span<T>
where
    T: DiscretePoint,
{
    type Item = T;
    type IntoIter = SpanIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_points()
    }
}

impl<T> IntoIterator for &Span<T>
where
    T: DiscretePoint,
{
    type Item = T;
    type IntoIter = SpanIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_points()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iterates_all_points_inclusive() {
        let span = Span::new(1u32, 4).unwrap();
        assert_eq!(span.iter_points().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_instant_span_yields_one_point() {
        let span = Span::new(5u32, 5).unwrap();
        assert_eq!(span.iter_points().collect::<Vec<_>>(), vec![5]);
    }

    #[test]
    fn test_iteration_is_restartable() {
        let span = Span::new(1u32, 3).unwrap();
        let first: Vec<_> = span.iter_points().collect();
        let second: Vec<_> = span.iter_points().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unbounded_span_stops_at_domain_edge() {
        let span = Span::unbounded(u8::MAX - 2);
        assert_eq!(span.iter_points().collect::<Vec<_>>(), vec![253, 254, 255]);
    }

    #[test]
    fn test_fused() {
        let span = Span::new(0u32, 0).unwrap();
        let mut iter = span.iter_points();
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);

        fn assert_fused<I: FusedIterator>(_: I) {}
        assert_fused(iter);
    }

    #[test]
    fn test_into_iterator() {
        let span = Span::new(0u32, 2).unwrap();
        let mut count = 0;
        for (expected, point) in (&span).into_iter().enumerate() {
            assert_eq!(point, expected as u32);
            count += 1;
        }
        for point in span {
            assert!(span.contains_point(point));
        }
        assert_eq!(count, 3);
    }

    #[test]
    fn test_size_hint() {
        let span = Span::new(0u32, 2).unwrap();
        let mut iter = span.iter_points();
        assert_eq!(iter.size_hint(), (1, None));
        iter.next();
        iter.next();
        iter.next();
        assert_eq!(iter.size_hint(), (0, Some(0)));
    }
}
