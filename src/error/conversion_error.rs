#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while converting a validated request.
pub enum ConversionError {
    /// The integer part does not fit in the 64-bit accumulator.
    Overflow,
    /// A fractional digit fell outside the 36-symbol alphabet.
    ///
    /// Only reachable through a radix-1 fractional part, whose decimal value
    /// is the substring length and can therefore exceed 1.
    FractionDigitOutOfRange {
        /// The digit value with no corresponding symbol.
        digit: i64,
    },
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overflow => write!(f,
                                     "Integer overflow while trying to compute result: the integer part does not fit in 64 bits."),

            Self::FractionDigitOutOfRange { digit } => write!(f,
                                                              "Fractional digit value {digit} has no symbol in the 36-symbol alphabet."),
        }
    }
}

impl std::error::Error for ConversionError {}
