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

//! # Span Codec
//!
//! The canonical wire format for spans: `"<start>-<end>"`, with `∞` in the
//! end position for an open-ended span. Formatting is the `Display` impl,
//! parsing is the `FromStr` impl, and the serde impls map a span to and from
//! exactly this string, so a JSON document field carries
//! `"2020-01-01-2020-01-05"` rather than a nested object.
//!
//! ## Splitting strategy
//!
//! An endpoint's own canonical text may contain the `-` separator (a
//! calendar date does, three fields' worth). Parsing therefore never splits
//! on the first `-`: the text is cut after the domain's declared field count
//! (`SpanPoint::TEXT_FIELDS`), with one extra field probed to absorb a sign
//! or a negative UTC offset. A cut is accepted only when both sides parse,
//! or when the end is the literal `∞`.
//!
//! Round-trip law: parsing a formatted span always reproduces it,
//! `text.parse() == Ok(span)` for `text = span.to_string()`.

use crate::{
    point::SpanPoint,
    span::{EndBound, Span},
};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::{fmt, marker::PhantomData, str::FromStr};

/// The separator between the two endpoint renderings.
pub const SEPARATOR: char = '-';

/// The end-position token denoting an open-ended span.
pub const UNBOUNDED_TOKEN: &str = "∞";

/// The error returned when span text does not match the wire format.
///
/// Malformed endpoint text, a missing separator, trailing garbage, and
/// inverted bounds all land here; parsing never panics. The offending text
/// is carried for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseSpanError {
    text: String,
}

impl ParseSpanError {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_owned(),
        }
    }

    /// The text that failed to parse.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for ParseSpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "malformed span text {:?}: expected \"<start>{}<end>\" or \"<start>{}{}\"",
            self.text, SEPARATOR, SEPARATOR, UNBOUNDED_TOKEN
        )
    }
}

impl std::error::Error for ParseSpanError {}

impl<T> fmt::Display for EndBound<T>
where
    T: SpanPoint,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndBound::Bounded(point) => write!(f, "{}", point),
            EndBound::Unbounded => f.write_str(UNBOUNDED_TOKEN),
        }
    }
}

/// Formats the span in its canonical wire form.
///
/// # Examples
///
/// ```rust
/// # use tidemark_core::span::Span;
///
/// assert_eq!(Span::new(5u32, 9).unwrap().to_string(), "5-9");
/// assert_eq!(Span::unbounded(5u32).to_string(), "5-∞");
/// ```
impl<T> fmt::Display for Span<T>
where
    T: SpanPoint,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.start(), SEPARATOR, self.end())
    }
}

/// Parses a span from its canonical wire form.
///
/// `parse().ok()` is the non-failing variant; this impl itself never
/// panics.
///
/// # Examples
///
/// ```rust
/// # use tidemark_core::span::Span;
///
/// let span: Span<u32> = "5-9".parse().unwrap();
/// assert_eq!(span, Span::new(5, 9).unwrap());
///
/// let open: Span<u32> = "5-∞".parse().unwrap();
/// assert_eq!(open, Span::unbounded(5));
///
/// assert!("9-5".parse::<Span<u32>>().is_err());
/// assert!("no span here".parse::<Span<u32>>().is_err());
/// ```
impl<T> FromStr for Span<T>
where
    T: SpanPoint,
{
    type Err = ParseSpanError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = text.split(SEPARATOR).collect();

        // Cut after the domain's field count, probing one extra field for a
        // leading sign or a negative offset; the remainder is the end.
        for taken in [T::TEXT_FIELDS, T::TEXT_FIELDS + 1] {
            if taken == 0 || taken >= fields.len() {
                continue;
            }
            let start_text = fields[..taken].join("-");
            let end_text = fields[taken..].join("-");

            let Ok(start) = start_text.parse::<T>() else {
                continue;
            };
            let end = if end_text == UNBOUNDED_TOKEN {
                EndBound::Unbounded
            } else if let Ok(point) = end_text.parse::<T>() {
                EndBound::Bounded(point)
            } else {
                continue;
            };

            if let Ok(span) = Span::with_bound(start, end) {
                return Ok(span);
            }
        }

        Err(ParseSpanError::new(text))
    }
}

impl<T> Serialize for Span<T>
where
    T: SpanPoint,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

struct SpanVisitor<T>(PhantomData<T>);

impl<T> de::Visitor<'_> for SpanVisitor<T>
where
    T: SpanPoint,
{
    type Value = Span<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a span string \"<start>{}<end>\" or \"<start>{}{}\"",
            SEPARATOR, SEPARATOR, UNBOUNDED_TOKEN
        )
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        value.parse().map_err(E::custom)
    }
}

impl<'de, T> Deserialize<'de> for Span<T>
where
    T: SpanPoint,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(SpanVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bounded() {
        assert_eq!(Span::new(0u32, 10).unwrap().to_string(), "0-10");
        assert_eq!(Span::new(7u32, 7).unwrap().to_string(), "7-7");
    }

    #[test]
    fn test_format_unbounded() {
        assert_eq!(Span::unbounded(3u32).to_string(), "3-∞");
    }

    #[test]
    fn test_format_negative_integers() {
        let span = Span::new(-5i32, -3).unwrap();
        assert_eq!(span.to_string(), "-5--3");
    }

    #[test]
    fn test_parse_bounded() {
        let span: Span<u32> = "0-10".parse().unwrap();
        assert_eq!(span, Span::new(0, 10).unwrap());
    }

    #[test]
    fn test_parse_unbounded() {
        let span: Span<u32> = "3-∞".parse().unwrap();
        assert_eq!(span, Span::unbounded(3));
    }

    #[test]
    fn test_parse_negative_integers() {
        // The extra probed field absorbs the leading sign.
        let span: Span<i32> = "-5--3".parse().unwrap();
        assert_eq!(span, Span::new(-5, -3).unwrap());

        let span: Span<i32> = "-5-3".parse().unwrap();
        assert_eq!(span, Span::new(-5, 3).unwrap());

        let span: Span<i32> = "-5-∞".parse().unwrap();
        assert_eq!(span, Span::unbounded(-5));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for text in [
            "", "5", "-", "--", "5-", "-5", "a-b", "∞-5", "∞-∞", "1-2-3", "5-∞-",
        ] {
            let result = text.parse::<Span<u32>>();
            assert!(result.is_err(), "expected {:?} to be rejected", text);
        }
    }

    #[test]
    fn test_parse_rejects_inverted_bounds() {
        let err = "10-5".parse::<Span<u32>>().unwrap_err();
        assert_eq!(err.text(), "10-5");
    }

    #[test]
    fn test_parse_error_display() {
        let err = "junk".parse::<Span<u32>>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed span text \"junk\": expected \"<start>-<end>\" or \"<start>-∞\""
        );
    }

    #[test]
    fn test_round_trip() {
        let spans = [
            Span::new(0u32, 10).unwrap(),
            Span::new(7u32, 7).unwrap(),
            Span::new(0u32, u32::MAX).unwrap(),
            Span::unbounded(42u32),
        ];
        for span in spans {
            let text = span.to_string();
            assert_eq!(text.parse::<Span<u32>>(), Ok(span), "via {:?}", text);
        }
    }

    #[test]
    fn test_round_trip_signed() {
        let spans = [
            Span::new(-10i32, -2).unwrap(),
            Span::new(-10i32, 10).unwrap(),
            Span::unbounded(i32::MIN),
        ];
        for span in spans {
            let text = span.to_string();
            assert_eq!(text.parse::<Span<i32>>(), Ok(span), "via {:?}", text);
        }
    }

    #[test]
    fn test_serde_serializes_to_wire_string() {
        let span = Span::new(5u32, 9).unwrap();
        assert_eq!(serde_json::to_string(&span).unwrap(), "\"5-9\"");

        let open = Span::unbounded(5u32);
        assert_eq!(serde_json::to_string(&open).unwrap(), "\"5-∞\"");
    }

    #[test]
    fn test_serde_deserializes_from_wire_string() {
        let span: Span<u32> = serde_json::from_str("\"5-9\"").unwrap();
        assert_eq!(span, Span::new(5, 9).unwrap());

        let open: Span<u32> = serde_json::from_str("\"5-∞\"").unwrap();
        assert_eq!(open, Span::unbounded(5));

        assert!(serde_json::from_str::<Span<u32>>("\"9-5\"").is_err());
        assert!(serde_json::from_str::<Span<u32>>("17").is_err());
    }
}
