use super::token::Token;

/// Splits text on word boundaries, creating tokens of alternating runs of
/// words and whitespace.
///
/// ## Example
///
/// ```not_rust
/// "Hi there!" -> ["Hi", " ", "there!"]
/// ```
#[must_use]
pub fn word_tokenizer(text: &str) -> Vec<Token<String>> {
    let mut result = Vec::new();

    let mut previous_boundary_index = 0;
    let mut previous_char_is_whitespace = text.chars().next().is_some_and(char::is_whitespace);

    for (i, c) in text.char_indices() {
        let is_current_char_whitespace = c.is_whitespace();
        if previous_char_is_whitespace != is_current_char_whitespace {
            result.push(text[previous_boundary_index..i].into());
            previous_boundary_index = i;
        }

        previous_char_is_whitespace = is_current_char_whitespace;
    }

    if previous_boundary_index < text.len() {
        result.push(text[previous_boundary_index..].into());
    }

    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn originals(text: &str) -> Vec<String> {
        word_tokenizer(text)
            .iter()
            .map(|token| token.original().to_owned())
            .collect()
    }

    #[test]
    fn test_word_boundaries() {
        assert_eq!(originals("Hi there!"), vec!["Hi", " ", "there!"]);
        assert_eq!(originals(""), Vec::<String>::new());
        assert_eq!(originals(" what? "), vec![" ", "what?", " "]);
        assert_eq!(
            originals(" hello, \nwhere are you?"),
            vec![" ", "hello,", " \n", "where", " ", "are", " ", "you?"]
        );
    }

    #[test]
    fn test_concatenation_is_lossless() {
        let text = "  multiple   spaces\tand\ttabs  ";
        assert_eq!(originals(text).concat(), text);
    }
}
