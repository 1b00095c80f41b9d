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

//! # Tidemark Core
//!
//! Generic closed-span algebra over ordered point domains. This crate defines
//! the `Span<T>` value type, a validated, immutable closed interval
//! `[start, end]` whose upper bound may be open-ended, together with the set
//! operations, the difference engine, and the canonical text codec that the
//! domain crates build on.
//!
//! ## Modules
//!
//! - `point`: The `SpanPoint` contract every endpoint domain satisfies
//!   (total ordering, canonical text, checked shifting) and the
//!   `DiscretePoint` extension for domains with a successor function.
//!   Primitive integers implement both, so the algebra can be exercised
//!   without pulling in any calendar machinery.
//! - `span`: `Span<T>` construction and invariants, the tagged upper bound
//!   `EndBound<T>`, containment and overlap predicates, union, intersection,
//!   and overlap-checked merge, plus `BitAnd`/`BitOr` sugar and a
//!   `RangeBounds` bridge into the standard library.
//! - `diff`: The difference engine: subtracting one span's coverage from
//!   another, yielding zero, one, or two remainder pieces.
//! - `codec`: The canonical `"<start>-<end>"` wire format (`Display`,
//!   `FromStr`, serde), with `∞` denoting an open upper end.
//! - `iter`: Lazy, fused iteration over the points of a span for discrete
//!   domains.
//!
//! ## Purpose
//!
//! Interval logic is notoriously easy to fork-and-drift: every consumer grows
//! its own copy with slightly different boundary rules. This crate pins the
//! semantics down once (closed intervals, boundary-inclusive containment,
//! touching endpoints count as overlap) and every operation is written and
//! tested against that single policy.
//!
//! Refer to each module for detailed APIs and examples.

pub mod codec;
pub mod diff;
pub mod iter;
pub mod point;
pub mod span;
