/// The digit alphabet shared by every numeral system up to radix 36.
///
/// This module holds the fixed, process-wide table mapping digit values 0–35
/// to their text symbols `0`–`9` and `a`–`z`, along with the supported radix
/// bounds.
///
/// # Responsibilities
/// - Defines the immutable 36-symbol digit alphabet.
/// - Provides the symbol lookup used when rendering output digits.
pub mod alphabet;
/// The fractional-part conversion pass.
///
/// Converts the fractional substring of a validated number into exactly five
/// digits of the target radix using the repeated multiply-and-truncate
/// algorithm.
///
/// # Responsibilities
/// - Accumulates the decimal value of the source fraction.
/// - Emits exactly five target-radix digits, without rounding.
pub mod fraction;
/// The integer-part conversion pass.
///
/// Parses the integer substring of a validated number into a 64-bit
/// accumulator and renders it in the target radix, with special handling for
/// unary on both ends.
///
/// # Responsibilities
/// - Parses the integer part in the source radix, failing fast on overflow.
/// - Renders the decimal value in the target radix via the digit alphabet.
pub mod integer;
/// The lexer module classifies the symbols of the source number.
///
/// The lexer reads the raw number text and produces a stream of symbol
/// tokens: decimal digits, lowercase letters, the fraction separator, and
/// uppercase letters (recognized separately so validation can name the case
/// error). Any other character is a lexing error.
///
/// # Responsibilities
/// - Converts the number text into classified symbols with digit values.
/// - Surfaces unclassifiable characters for error reporting.
pub mod lexer;
/// The request module defines the input to a conversion.
///
/// Declares `ConversionRequest`, the immutable triple of source radix, number
/// text, and target radix, together with the derived `ParsedNumber` view that
/// separates the integer part from the optional fractional part.
///
/// # Responsibilities
/// - Carries the conversion inputs, immutable once constructed.
/// - Splits the number into integer and fractional substrings.
pub mod request;
/// The validator module checks a request before any conversion runs.
///
/// Applies the ordered validation pipeline: radix bounds, separator count,
/// and a per-symbol scan against the declared source radix (or the unary
/// ones-only rule). A request that fails any check is never partially
/// converted.
///
/// # Responsibilities
/// - Confirms both radices lie within the supported range.
/// - Confirms the number contains at most one separator.
/// - Confirms every symbol belongs to the source numeral system.
pub mod validator;
