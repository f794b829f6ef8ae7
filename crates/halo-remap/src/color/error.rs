//! Reference color parsing errors.

use std::fmt;

/// A reference color string that is not `RGB` or `RRGGBB` hex.
///
/// Both variants keep the rejected input (as given, before trimming) so a
/// CLI can echo it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Not 3 or 6 digits after trimming and dropping a leading `#`
    InvalidLength { input: String, digits: usize },
    /// A character other than `0-9`, `a-f`, `A-F`, signs included
    InvalidDigit { input: String, found: char },
}

impl ParseColorError {
    /// The string that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            ParseColorError::InvalidLength { input, .. }
            | ParseColorError::InvalidDigit { input, .. } => input,
        }
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength { input, digits } => write!(
                f,
                "color {:?} has {} hex digits, expected 3 or 6",
                input, digits
            ),
            ParseColorError::InvalidDigit { input, found } => {
                write!(f, "color {:?} contains non-hex character {:?}", input, found)
            }
        }
    }
}

impl std::error::Error for ParseColorError {}
