/// The input to a single conversion: source radix, number text, and target
/// radix. Immutable once constructed; validation and conversion only read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    source_radix: u32,
    number:       String,
    target_radix: u32,
}

impl ConversionRequest {
    /// Creates a request. The radices are not checked here; validation
    /// happens as the first step of [`crate::convert`].
    pub fn new(source_radix: u32, number: impl Into<String>, target_radix: u32) -> Self {
        Self { source_radix,
               number: number.into(),
               target_radix }
    }

    /// The radix the source number is written in.
    pub const fn source_radix(&self) -> u32 {
        self.source_radix
    }

    /// The source number text.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// The radix the number is converted into.
    pub const fn target_radix(&self) -> u32 {
        self.target_radix
    }

    /// Splits the number at the first `.` into its integer and fractional
    /// substrings. Validation guarantees at most one separator, so the first
    /// split is the only one.
    pub fn parsed(&self) -> ParsedNumber<'_> {
        match self.number.split_once('.') {
            Some((integer, fraction)) => ParsedNumber { integer,
                                                        fraction: Some(fraction) },
            None => ParsedNumber { integer:  &self.number,
                                   fraction: None, },
        }
    }
}

/// A borrowed view of a number split into its integer part and optional
/// fractional part, both without the separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedNumber<'a> {
    /// The integer substring, possibly empty (e.g. for `.5`).
    pub integer:  &'a str,
    /// The fractional substring, present iff the number contained a `.`.
    pub fraction: Option<&'a str>,
}

impl ParsedNumber<'_> {
    /// Whether the source number carried a fractional part.
    pub const fn has_fraction(&self) -> bool {
        self.fraction.is_some()
    }
}
