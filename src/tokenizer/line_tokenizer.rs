use super::token::Token;

/// Splits text into lines, keeping line endings as separate tokens.
///
/// ## Example
///
/// ```not_rust
/// "Hello\nWorld!" -> ["Hello", "\n", "World!"]
/// "Line 1\r\nLine 2" -> ["Line 1", "\r\n", "Line 2"]
/// ```
#[must_use]
pub fn line_tokenizer(text: &str) -> Vec<Token<String>> {
    let mut result = Vec::new();
    let mut line_start = 0;

    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        let ending_length = match c {
            '\n' => 1,
            '\r' if chars.peek() == Some(&(i + 1, '\n')) => {
                chars.next();
                2
            }
            _ => continue,
        };

        if i > line_start {
            result.push(text[line_start..i].into());
        }
        result.push(text[i..i + ending_length].into());
        line_start = i + ending_length;
    }

    if line_start < text.len() {
        result.push(text[line_start..].into());
    }

    result
}
