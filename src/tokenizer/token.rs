use std::fmt::Debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A token is a piece of text together with the form it's compared by.
///
/// The normalised form decides equality, the original form is what the
/// token covers in the input and is used for measuring matched text.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct Token<T>
where
    T: PartialEq + Clone + Debug,
{
    normalised: T,
    original: String,
}

/// Trivial implementation of Token when the normalised form is the same as the
/// original string.
impl From<&str> for Token<String> {
    fn from(text: &str) -> Self { Token::new(text.to_owned(), text.to_owned()) }
}

impl<T> Token<T>
where
    T: PartialEq + Clone + Debug,
{
    #[must_use]
    pub fn new(normalised: T, original: String) -> Self {
        Token {
            normalised,
            original,
        }
    }

    #[must_use]
    pub fn original(&self) -> &str { &self.original }

    #[must_use]
    pub fn normalised(&self) -> &T { &self.normalised }

    /// Number of UTF-8 characters the token covers in its input.
    #[must_use]
    pub fn original_char_count(&self) -> usize { self.original.chars().count() }
}

impl<T> PartialEq for Token<T>
where
    T: PartialEq + Clone + Debug,
{
    fn eq(&self, other: &Self) -> bool { self.normalised == other.normalised }
}
