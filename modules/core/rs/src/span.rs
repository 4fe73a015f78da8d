use std::fmt::Display;
use std::ops::Range;

use derive_getters::Dissolve;
use eyre::{eyre, Report, Result};

use crate::num::PrimInt;

/// Span is a half-open index range [start, end) inside a sequence.
/// It's not represented as a Rust-native Range for a couple of reasons:
/// - Prohibit 'empty' spans (start == end) or spans with negative length (start > end)
/// - Implement custom traits (e.g. Dissolve) and methods (e.g. contains, intersects).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Dissolve)]
pub struct Span<Idx: PrimInt> {
    start: Idx,
    end: Idx,
}

impl<Idx: PrimInt> Span<Idx> {
    pub fn new(start: Idx, end: Idx) -> Result<Self> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(eyre!("Invalid span: start >= end"))
        }
    }

    #[inline(always)]
    pub fn start(&self) -> Idx {
        self.start
    }

    #[inline(always)]
    pub fn end(&self) -> Idx {
        self.end
    }

    pub fn len(&self) -> Idx {
        self.end - self.start
    }

    /// Check if the span contains a given position.
    pub fn contains(&self, pos: Idx) -> bool {
        self.start <= pos && pos < self.end
    }

    /// Check if the span intersects with another span.
    /// The condition is strict and doesn't allow touching spans.
    pub fn intersects(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if start < end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    pub fn cast<T: PrimInt>(&self) -> Option<Span<T>> {
        match (T::from(self.start), T::from(self.end)) {
            (Some(start), Some(end)) => Some(Span { start, end }),
            _ => None,
        }
    }
}

impl<Idx: PrimInt + Display> Display for Span<Idx> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl<Idx: PrimInt> TryFrom<(Idx, Idx)> for Span<Idx> {
    type Error = Report;

    fn try_from(value: (Idx, Idx)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1)
    }
}

impl<Idx: PrimInt> From<Span<Idx>> for (Idx, Idx) {
    fn from(span: Span<Idx>) -> Self {
        (span.start, span.end)
    }
}

impl<Idx: PrimInt> TryFrom<Range<Idx>> for Span<Idx> {
    type Error = Report;

    fn try_from(value: Range<Idx>) -> Result<Self, Self::Error> {
        Self::new(value.start, value.end)
    }
}

impl<Idx: PrimInt> From<Span<Idx>> for Range<Idx> {
    fn from(span: Span<Idx>) -> Self {
        span.start..span.end
    }
}

impl<Idx: PrimInt> PartialEq<(Idx, Idx)> for Span<Idx> {
    fn eq(&self, other: &(Idx, Idx)) -> bool {
        self.start == other.0 && self.end == other.1
    }
}

impl<Idx: PrimInt> PartialEq<Range<Idx>> for Span<Idx> {
    fn eq(&self, other: &Range<Idx>) -> bool {
        self.start == other.start && self.end == other.end
    }
}
