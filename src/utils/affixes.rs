/// Returns whether `prefix` is an initial segment of `sequence`.
///
/// The empty sequence is a prefix of everything.
#[must_use]
pub fn is_prefix<T: PartialEq>(prefix: &[T], sequence: &[T]) -> bool {
    prefix.len() <= sequence.len() && sequence[..prefix.len()] == *prefix
}

/// Returns whether `suffix` is a final segment of `sequence`.
///
/// The empty sequence is a suffix of everything.
#[must_use]
pub fn is_suffix<T: PartialEq>(suffix: &[T], sequence: &[T]) -> bool {
    suffix.len() <= sequence.len() && sequence[sequence.len() - suffix.len()..] == *suffix
}
