use thiserror::Error;

use crate::Side;

/// Error type for inputs that cannot be compared as text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OverlapError {
    /// One of the raw inputs is not human-readable text
    #[error("Invalid argument: the {side} input looks like binary data, not UTF-8 text")]
    BinaryInput {
        /// The operand that failed validation
        side: Side,
    },
}
