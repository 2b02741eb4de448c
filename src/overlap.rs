mod overlap_result;

use std::fmt::Debug;

use log::{debug, trace};
pub use overlap_result::Overlap;

use crate::{OverlapError, Side, Token, Tokenizer, utils::is_binary::as_text};

/// Given two sequences, returns the largest `k` for which the first `k`
/// elements of `x` equal the last `k` elements of `y`.
///
/// Candidate lengths are tried from the longest possible down, so the first
/// match is the maximal one. An empty overlap always matches, hence the
/// function is total.
///
/// ## Example
///
/// ```not_rust
/// x:       [a, b, c, d, e, f]
/// y: [x, y, z, a, b, c]
/// ```
/// > results in a length of 3
#[must_use]
pub fn longest_prefix_suffix_overlap<T>(x: &[T], y: &[T]) -> usize
where
    T: PartialEq,
{
    let max_possible = x.len().min(y.len());

    for len in (1..=max_possible).rev() {
        if x[..len] == y[y.len() - len..] {
            return len;
        }
    }

    0
}

/// Finds the overlap of two texts character by character.
///
/// Characters are Unicode scalar values compared exactly, so the comparison
/// is case-sensitive and no normalisation takes place.
///
/// ## Example
///
/// ```
/// use text_overlap::overlap;
///
/// let result = overlap("abcdef", "xyzabc");
/// assert_eq!(result.len(), 3);
/// assert_eq!(result.prefix(), "abc");
/// ```
#[must_use]
pub fn overlap<'a>(x: &'a str, y: &'a str) -> Overlap<'a> {
    let x_chars = x.chars().collect::<Vec<_>>();
    let y_chars = y.chars().collect::<Vec<_>>();

    let length = longest_prefix_suffix_overlap(&x_chars, &y_chars);

    Overlap::new(x, y, length, length, length)
}

/// Finds the overlap of two raw inputs after checking that both are text.
///
/// # Errors
///
/// Returns [`OverlapError::BinaryInput`] naming the first input that isn't
/// valid UTF-8 or contains NUL bytes.
pub fn overlap_bytes<'a>(x: &'a [u8], y: &'a [u8]) -> Result<Overlap<'a>, OverlapError> {
    let x = text_input(x, Side::Prefix)?;
    let y = text_input(y, Side::Suffix)?;

    Ok(overlap(x, y))
}

/// Finds the overlap of two texts over the tokens produced by `tokenizer`.
///
/// `len()` of the result counts tokens. Tokens compare by their normalised
/// form, so the matched prefix and suffix may differ in their original text.
///
/// ## Example
///
/// ```
/// use text_overlap::{BuiltinTokenizer, overlap_with_tokenizer};
///
/// let result = overlap_with_tokenizer(
///     "merge these words",
///     "now merge these",
///     &*BuiltinTokenizer::Word,
/// );
/// assert_eq!(result.len(), 3);
/// assert_eq!(result.prefix(), "merge these");
/// ```
#[must_use]
pub fn overlap_with_tokenizer<'a, T>(
    x: &'a str,
    y: &'a str,
    tokenizer: &Tokenizer<T>,
) -> Overlap<'a>
where
    T: PartialEq + Clone + Debug,
{
    let x_tokens = tokenizer(x);
    let y_tokens = tokenizer(y);

    let length = longest_prefix_suffix_overlap(&x_tokens, &y_tokens);
    trace!(
        "Tokenised overlap of {length} out of {} and {} tokens",
        x_tokens.len(),
        y_tokens.len()
    );

    let prefix_char_count: usize = x_tokens[..length]
        .iter()
        .map(Token::original_char_count)
        .sum();
    let suffix_char_count: usize = y_tokens[y_tokens.len() - length..]
        .iter()
        .map(Token::original_char_count)
        .sum();

    Overlap::new(x, y, length, prefix_char_count, suffix_char_count)
}

/// Checks that a raw input is text and borrows it as `&str`.
///
/// # Errors
///
/// Returns [`OverlapError::BinaryInput`] for `side` when the input isn't valid
/// UTF-8 or contains NUL bytes.
pub fn text_input(data: &[u8], side: Side) -> Result<&str, OverlapError> {
    as_text(data).ok_or_else(|| {
        debug!("Rejecting {side} input of {} bytes as binary", data.len());
        OverlapError::BinaryInput { side }
    })
}
