use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};

use crate::{output_format::OutputFormat, tokenizer_choice::TokenizerChoice};

/// Print the largest k for which the first k characters of X equal the last
/// k characters of Y. Runs the built-in samples when no inputs are given.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Text whose beginning is matched, or a path to it with `--files`
    #[arg(index = 1, requires = "y")]
    pub x: Option<String>,

    /// Text whose end is matched, or a path to it with `--files`
    #[arg(index = 2, requires = "x")]
    pub y: Option<String>,

    /// Treat X and Y as paths of files to compare
    #[arg(long, requires = "x")]
    pub files: bool,

    /// Unit the inputs are compared by
    #[arg(long, value_name = "TOKENIZER", default_value_t = TokenizerChoice::Character, value_enum)]
    pub tokenizer: TokenizerChoice,

    /// How each result is printed
    #[arg(long, value_name = "FORMAT", default_value_t = OutputFormat::Text, value_enum)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub verbose: Verbosity<WarnLevel>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_command_is_well_formed() { Args::command().debug_assert(); }

    #[test]
    fn test_parse_operands() {
        let args = Args::parse_from(["text-overlap", "abcdef", "xyzabc", "--tokenizer", "word"]);
        assert_eq!(args.x.as_deref(), Some("abcdef"));
        assert_eq!(args.y.as_deref(), Some("xyzabc"));
        assert_eq!(args.tokenizer, TokenizerChoice::Word);
        assert_eq!(args.format, OutputFormat::Text);
        assert!(!args.files);
    }

    #[test]
    fn test_operands_come_in_pairs() {
        assert!(Args::try_parse_from(["text-overlap", "abcdef"]).is_err());
        assert!(Args::try_parse_from(["text-overlap", "--files"]).is_err());
        assert!(Args::try_parse_from(["text-overlap"]).is_ok());
        assert!(Args::try_parse_from(["text-overlap", "--files", "a.txt", "b.txt"]).is_ok());
    }
}
