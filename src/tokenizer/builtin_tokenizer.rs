use std::ops::Deref;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{
    Tokenizer, character_tokenizer::character_tokenizer, line_tokenizer::line_tokenizer,
    word_tokenizer::word_tokenizer,
};

/// The tokenizers shipped with the crate.
///
/// Dereferences to the tokenizer function so it can be passed wherever a
/// `&Tokenizer<String>` is expected: `&*BuiltinTokenizer::Word`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuiltinTokenizer {
    #[default]
    Character,
    Word,
    Line,
}

impl Deref for BuiltinTokenizer {
    type Target = Tokenizer<String>;

    fn deref(&self) -> &Self::Target {
        match self {
            BuiltinTokenizer::Character => &character_tokenizer,
            BuiltinTokenizer::Word => &word_tokenizer,
            BuiltinTokenizer::Line => &line_tokenizer,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_deref_dispatches() {
        let text = "one two\nthree";

        assert_eq!((*BuiltinTokenizer::Character)(text).len(), 13);
        assert_eq!((*BuiltinTokenizer::Word)(text).len(), 5);
        assert_eq!((*BuiltinTokenizer::Line)(text).len(), 3);
    }
}
