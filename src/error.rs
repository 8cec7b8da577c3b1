/// Conversion errors.
///
/// Contains the error types that can be raised while a validated request is
/// being converted, such as overflow of the 64-bit integer accumulator or a
/// fractional digit with no symbol in the alphabet.
pub mod conversion_error;
/// Validation errors.
///
/// Defines all error types that can occur while checking a conversion request
/// against the declared source radix, before any conversion work starts.
/// Validation errors include out-of-range radices, repeated separators, and
/// symbols that do not belong to the source numeral system.
pub mod validation_error;

pub use conversion_error::ConversionError;
pub use validation_error::ValidationError;
