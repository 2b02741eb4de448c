/// Finds the first position at which `pattern` occurs within `text` by
/// comparing `pattern` against every window of `text`.
///
/// An empty pattern matches at position 0.
///
/// ## Example
///
/// ```not_rust
/// text:    "Hello, world!"
/// pattern:        "world"
/// ```
/// > results in `Some(7)`
#[must_use]
pub fn naive_find<T: PartialEq>(text: &[T], pattern: &[T]) -> Option<usize> {
    if pattern.is_empty() {
        return Some(0);
    }

    text.windows(pattern.len())
        .position(|window| window == pattern)
}

/// Finds every position at which `pattern` occurs within `text`, including
/// occurrences that overlap each other.
///
/// An empty pattern has no occurrences.
#[must_use]
pub fn naive_find_all<T: PartialEq>(text: &[T], pattern: &[T]) -> Vec<usize> {
    if pattern.is_empty() {
        return Vec::new();
    }

    text.windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| *window == pattern)
        .map(|(i, _)| i)
        .collect()
}
