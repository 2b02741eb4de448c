use token::Token;

pub mod builtin_tokenizer;
pub mod character_tokenizer;
pub mod line_tokenizer;
pub mod token;
pub mod word_tokenizer;

/// A tokenizer takes a string and returns its list of tokens.
pub type Tokenizer<T> = dyn Fn(&str) -> Vec<Token<T>>;
