//! Find how far the start of one sequence overlaps the end of another.
//!
//! The core is [`longest_prefix_suffix_overlap`], which works over any slice
//! of comparable elements. [`overlap`], [`overlap_bytes`] and
//! [`overlap_with_tokenizer`] apply it to text.
//!
//! ```
//! use text_overlap::overlap;
//!
//! let result = overlap("abcdef", "xyzabc");
//! assert_eq!(result.to_string(), r#"Largest k such that "abc" = "abc" is: 3"#);
//! ```

mod errors;
mod overlap;
mod tokenizer;
mod utils;

pub use errors::OverlapError;
pub use overlap::{
    Overlap, longest_prefix_suffix_overlap, overlap, overlap_bytes, overlap_with_tokenizer,
    text_input,
};
pub use tokenizer::{
    Tokenizer, builtin_tokenizer::BuiltinTokenizer, character_tokenizer::character_tokenizer,
    line_tokenizer::line_tokenizer, token::Token, word_tokenizer::word_tokenizer,
};
pub use utils::{
    affixes::{is_prefix, is_suffix},
    is_binary::is_binary,
    naive_search::{naive_find, naive_find_all},
    side::Side,
};
