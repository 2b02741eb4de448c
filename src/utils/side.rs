use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Names the operands of an overlap: `Prefix` is the sequence whose head is
/// matched, `Suffix` is the sequence whose tail is matched.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Prefix,
    Suffix,
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Prefix => write!(f, "prefix"),
            Side::Suffix => write!(f, "suffix"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Side::Prefix.to_string(), "prefix");
        assert_eq!(Side::Suffix.to_string(), "suffix");
    }
}
