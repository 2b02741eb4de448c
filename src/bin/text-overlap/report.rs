use serde::Serialize;
use text_overlap::{BuiltinTokenizer, Overlap};

/// Machine-readable form of a single comparison.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct Report<'a> {
    pub x: &'a str,
    pub y: &'a str,
    pub tokenizer: BuiltinTokenizer,
    pub k: usize,
    pub prefix: &'a str,
    pub suffix: &'a str,
}

impl<'a> Report<'a> {
    pub fn new(overlap: &Overlap<'a>, tokenizer: BuiltinTokenizer) -> Self {
        Report {
            x: overlap.x(),
            y: overlap.y(),
            tokenizer,
            k: overlap.len(),
            prefix: overlap.prefix(),
            suffix: overlap.suffix(),
        }
    }
}
