use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The overlap found between two texts: the first `length` elements of `x`
/// equal the last `length` elements of `y`.
///
/// Elements are characters or tokens depending on how the overlap was
/// computed, so the matched text is tracked separately for both sides in
/// characters.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlap<'a> {
    x: &'a str,
    y: &'a str,
    length: usize,
    prefix_char_count: usize,
    suffix_char_count: usize,
}

impl<'a> Overlap<'a> {
    pub(crate) fn new(
        x: &'a str,
        y: &'a str,
        length: usize,
        prefix_char_count: usize,
        suffix_char_count: usize,
    ) -> Self {
        Overlap {
            x,
            y,
            length,
            prefix_char_count,
            suffix_char_count,
        }
    }

    #[must_use]
    pub fn x(&self) -> &'a str { self.x }

    #[must_use]
    pub fn y(&self) -> &'a str { self.y }

    /// The overlap `k`, counted in the elements the inputs were compared by.
    #[must_use]
    pub fn len(&self) -> usize { self.length }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.length == 0 }

    /// The matched head of `x`.
    #[must_use]
    pub fn prefix(&self) -> &'a str {
        &self.x[..byte_index_after_chars(self.x, self.prefix_char_count)]
    }

    /// The matched tail of `y`.
    #[must_use]
    pub fn suffix(&self) -> &'a str {
        &self.y[byte_index_before_last_chars(self.y, self.suffix_char_count)..]
    }
}

/// Prints `Largest k such that "<prefix>" = "<suffix>" is: <k>`, an English
/// rendering of the Polish sample-run message
/// (`Największe k, takie że "…" = "…" wynosi: k`). Output is not byte-identical
/// to those runs.
impl Display for Overlap<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Largest k such that \"{}\" = \"{}\" is: {}",
            self.prefix(),
            self.suffix(),
            self.length
        )
    }
}

fn byte_index_after_chars(text: &str, count: usize) -> usize {
    text.char_indices()
        .nth(count)
        .map_or(text.len(), |(index, _)| index)
}

fn byte_index_before_last_chars(text: &str, count: usize) -> usize {
    if count == 0 {
        return text.len();
    }

    text.char_indices()
        .rev()
        .nth(count - 1)
        .map_or(0, |(index, _)| index)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_prefix_and_suffix_slicing() {
        let overlap = Overlap::new("żółw", "jeż żó", 2, 2, 2);
        assert_eq!(overlap.prefix(), "żó");
        assert_eq!(overlap.suffix(), "żó");

        let overlap = Overlap::new("abc", "xyz", 0, 0, 0);
        assert_eq!(overlap.prefix(), "");
        assert_eq!(overlap.suffix(), "");
        assert!(overlap.is_empty());

        let overlap = Overlap::new("abc", "abc", 3, 3, 3);
        assert_eq!(overlap.prefix(), "abc");
        assert_eq!(overlap.suffix(), "abc");
    }

    #[test]
    fn test_token_lengths_may_differ_per_side() {
        let overlap = Overlap::new("a  b", "x a b", 3, 4, 3);
        assert_eq!(overlap.len(), 3);
        assert_eq!(overlap.prefix(), "a  b");
        assert_eq!(overlap.suffix(), "a b");
    }
}
