#[derive(Debug, PartialEq, Eq, Clone)]
/// Represents all errors that can occur while evaluating a line of input.
pub enum ParseError {
    /// The tokenizer found a character that is not a digit, `+`, `-` or a
    /// space.
    UnexpectedCharacter {
        /// The rejected character.
        character: char,
        /// Byte offset of the character in the input line.
        position:  usize,
    },
    /// A piece of the split expression is not an integer literal.
    InvalidTerm {
        /// The offending piece, exactly as it appeared after splitting.
        term: String,
    },
    /// The subtraction branch had fewer than two operands to combine.
    MissingOperand {
        /// The number of operands that were available.
        found: usize,
    },
    /// The result does not fit in an `i64`.
    Overflow,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, position } => write!(f,
                                                                        "Error parsing input: unexpected character {character:?} at position {position}."),

            Self::InvalidTerm { term } => {
                write!(f, "Error parsing input: {term:?} is not an integer.")
            },

            Self::MissingOperand { found } => write!(f,
                                                     "Error parsing input: subtraction needs two operands but found {found}."),

            Self::Overflow => write!(f, "Error parsing input: result does not fit in 64 bits."),
        }
    }
}

impl std::error::Error for ParseError {}
