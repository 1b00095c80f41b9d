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

//! # Span Difference
//!
//! Subtracting one span's coverage from another. Removing a span from the
//! middle of a larger one splits it in two; removing a span that reaches a
//! boundary trims it to one remainder; removing a covering span leaves
//! nothing. The result shape is [`SpanDiff`], an enum, so the mutually
//! exclusive outcomes cannot be mixed up by construction.
//!
//! ## Boundary policy
//!
//! A single rule governs every case: a subtrahend that *touches* a boundary
//! of the minuend trims, and only a strictly interior subtrahend splits.
//! Because spans are closed, remainders keep the shared boundary point:
//! removing `[3,5]` from `[1,10]` leaves `[1,3]` and `[5,10]`.

use crate::{
    point::SpanPoint,
    span::{EndBound, Span},
};
use smallvec::{SmallVec, smallvec};

/// What remains of a span after removing another span's coverage.
///
/// Returned by [`Span::remove`]. `Trimmed` carries the single surviving
/// remainder when the removed span reached one of the boundaries; `Split`
/// carries the two disjoint remainders left when the removed span was
/// strictly interior.
///
/// # Examples
///
/// ```rust
/// # use tidemark_core::diff::SpanDiff;
/// # use tidemark_core::span::Span;
///
/// let span = Span::new(1u32, 10).unwrap();
/// let hole = Span::new(3u32, 5).unwrap();
///
/// match span.remove(&hole) {
///     Some(SpanDiff::Split { before, after }) => {
///         assert_eq!(before, Span::new(1, 3).unwrap());
///         assert_eq!(after, Span::new(5, 10).unwrap());
///     }
///     other => panic!("expected a split, got {:?}", other),
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpanDiff<T>
where
    T: SpanPoint,
{
    /// One remainder survived; the removed span reached a boundary.
    Trimmed(Span<T>),
    /// Two remainders survived; the removed span was strictly interior.
    Split {
        /// The remainder before the removed span.
        before: Span<T>,
        /// The remainder after the removed span.
        after: Span<T>,
    },
}

impl<T> SpanDiff<T>
where
    T: SpanPoint,
{
    /// Returns the remainder pieces in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidemark_core::span::Span;
    ///
    /// let span = Span::new(1u32, 10).unwrap();
    /// let diff = span.remove(&Span::new(3, 5).unwrap()).unwrap();
    ///
    /// let pieces = diff.pieces();
    /// assert_eq!(pieces.len(), 2);
    /// assert_eq!(pieces[0], Span::new(1, 3).unwrap());
    /// assert_eq!(pieces[1], Span::new(5, 10).unwrap());
    /// ```
    pub fn pieces(&self) -> SmallVec<[Span<T>; 2]> {
        match self {
            SpanDiff::Trimmed(span) => smallvec![*span],
            SpanDiff::Split { before, after } => smallvec![*before, *after],
        }
    }
}

impl<T> Span<T>
where
    T: SpanPoint,
{
    /// Removes `other`'s coverage from this span.
    ///
    /// The cases, evaluated in order:
    ///
    /// 1. No overlap at all, or `other` contains this span (equality
    ///    included): nothing remains to report, and `None` is returned.
    ///    The two situations are deliberately collapsed; a caller that must
    ///    tell "untouched" from "fully consumed" checks
    ///    [`Span::overlaps`] first.
    /// 2. `other` lies strictly inside: the span splits into the part
    ///    before `other` and the part after it.
    /// 3. `other` covers the start but not the end, leaving one remainder,
    ///    the tail.
    /// 4. `other` covers the end but not the start, leaving one remainder,
    ///    the head.
    ///
    /// A subtrahend touching a boundary (`other.start == self.start`)
    /// trims rather than splits. Remainders keep the shared boundary
    /// point, since a closed span cannot express an open endpoint.
    ///
    /// # Panics
    ///
    /// The four cases are exhaustive over the overlap precondition; if the
    /// analysis ever falls through, that is a bug in this crate and the
    /// method panics rather than returning a wrong answer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidemark_core::diff::SpanDiff;
    /// # use tidemark_core::span::Span;
    ///
    /// let span = Span::new(1u32, 10).unwrap();
    ///
    /// // Strictly interior: split.
    /// let diff = span.remove(&Span::new(3, 5).unwrap()).unwrap();
    /// assert_eq!(diff.pieces().len(), 2);
    ///
    /// // Covers the start: trimmed to the tail.
    /// let diff = span.remove(&Span::new(1, 4).unwrap()).unwrap();
    /// assert_eq!(diff, SpanDiff::Trimmed(Span::new(4, 10).unwrap()));
    ///
    /// // Covers everything: nothing remains.
    /// assert_eq!(span.remove(&Span::new(0, 12).unwrap()), None);
    ///
    /// // No overlap: also `None`; check `overlaps` to distinguish.
    /// assert_eq!(span.remove(&Span::new(20, 30).unwrap()), None);
    /// ```
    pub fn remove(&self, other: &Self) -> Option<SpanDiff<T>> {
        if !self.overlaps(other) || other.contains_span(self) {
            return None;
        }

        // The head survives iff `other` starts strictly inside; the tail
        // survives iff `other` ends strictly inside. An end strictly below
        // ours is necessarily bounded.
        let head = (self.start() < other.start())
            .then(|| Span::new_unchecked(self.start(), EndBound::Bounded(other.start())));
        let tail = match other.end() {
            EndBound::Bounded(point) if EndBound::Bounded(point) < self.end() => {
                Some(Span::new_unchecked(point, self.end()))
            }
            _ => None,
        };

        match (head, tail) {
            (Some(before), Some(after)) => Some(SpanDiff::Split { before, after }),
            (Some(piece), None) | (None, Some(piece)) => Some(SpanDiff::Trimmed(piece)),
            (None, None) => unreachable!(
                "span difference case analysis fell through: {:?} minus {:?}",
                self, other
            ),
        }
    }
}
