#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while validating a conversion request.
pub enum ValidationError {
    /// A radix was outside the supported range of 1 to 36.
    InvalidRadix {
        /// The radix that was supplied.
        radix: u32,
    },
    /// The number contained more than one separator.
    MalformedNumber {
        /// The number of separators found.
        count: usize,
    },
    /// A radix-1 number contained a symbol other than `1` or `.`.
    InvalidDigitForUnaryBase {
        /// The offending symbol.
        symbol: char,
    },
    /// An uppercase letter was used as a digit.
    CaseMismatch {
        /// The offending symbol.
        symbol: char,
    },
    /// A symbol that is neither a digit, a lowercase letter, nor a separator.
    InvalidSymbol {
        /// The offending symbol.
        symbol: char,
    },
    /// A digit whose value is not representable in the source radix.
    DigitExceedsRadix {
        /// The offending symbol.
        symbol: char,
        /// The declared source radix.
        radix:  u32,
    },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRadix { radix } => write!(f,
                                                   "Radix {radix} is invalid: must not be less than 1 or greater than 36."),

            Self::MalformedNumber { count } => write!(f,
                                                      "Number contains {count} separators, but at most one is allowed."),

            Self::InvalidDigitForUnaryBase { symbol } => write!(f,
                                                                "Symbol '{symbol}' is invalid in base one: the number must contain only ones."),

            Self::CaseMismatch { symbol } => write!(f,
                                                    "Symbol '{symbol}' does not match case: digits above nine are lowercase letters."),

            Self::InvalidSymbol { symbol } => write!(f,
                                                     "Symbol '{symbol}' is special and is invalid in a number."),

            Self::DigitExceedsRadix { symbol, radix } => {
                write!(f, "Digit '{symbol}' does not conform to radix {radix}.")
            },
        }
    }
}

impl std::error::Error for ValidationError {}
