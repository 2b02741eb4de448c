use clap::ValueEnum;
use text_overlap::BuiltinTokenizer;

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TokenizerChoice {
    Character,
    Word,
    Line,
}

impl From<TokenizerChoice> for BuiltinTokenizer {
    fn from(choice: TokenizerChoice) -> Self {
        match choice {
            TokenizerChoice::Character => BuiltinTokenizer::Character,
            TokenizerChoice::Word => BuiltinTokenizer::Word,
            TokenizerChoice::Line => BuiltinTokenizer::Line,
        }
    }
}

impl std::fmt::Display for TokenizerChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.to_possible_value()
            .expect("no values are skipped")
            .get_name()
            .fmt(f)
    }
}
