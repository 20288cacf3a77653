//! Locations in decoded type strings

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Byte range of the token an error refers to
///
/// Syntax errors only know the offset where parsing stopped and carry an
/// empty span there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// An empty span at `offset`
    pub const fn point(offset: usize) -> Self {
        Self::new(offset, offset)
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_and_range() {
        assert_eq!(Span::point(4), Span::new(4, 4));
        assert_eq!(Span::from(2..7), Span::new(2, 7));
        assert_eq!(Span::from(2..7).to_string(), "2..7");
    }
}
