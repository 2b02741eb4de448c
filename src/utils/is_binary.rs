/// Heuristically determine if the given bytes are binary data rather than
/// text that can be compared character by character.
#[must_use]
pub fn is_binary(data: &[u8]) -> bool {
    if data.contains(&0) {
        // NUL is valid UTF-8 but does not occur in human-readable text.
        return true;
    }

    std::str::from_utf8(data).is_err()
}

/// Returns the input as `&str` when it's text, or `None` if it's likely binary.
#[must_use]
pub fn as_text(data: &[u8]) -> Option<&str> {
    if is_binary(data) {
        return None;
    }

    std::str::from_utf8(data).ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_is_binary() {
        assert!(is_binary(&[0, 159, 146, 150]));
        assert!(is_binary(&[0, 12]));
        assert!(is_binary(&[255, 254]));
        assert!(!is_binary(b"hello"));
        assert!(!is_binary(b""));
        assert!(!is_binary("żółć".as_bytes()));
    }

    #[test]
    fn test_as_text() {
        assert_eq!(as_text(b"hello"), Some("hello"));
        assert_eq!(as_text(b"nul\0byte"), None);
        assert_eq!(as_text(&[159, 146, 150]), None);
        assert_eq!(as_text(b""), Some(""));
    }
}
