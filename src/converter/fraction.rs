use crate::{converter::alphabet, error::ConversionError};

pub type FractionResult<T> = Result<T, ConversionError>;

/// The fixed number of fractional digits emitted in the target radix. Not
/// configurable.
pub const FRACTION_DIGITS: usize = 5;

/// Converts the fractional substring (without its leading `.`) into exactly
/// [`FRACTION_DIGITS`] digits of the target radix.
///
/// Each step multiplies the running fraction by the target radix and takes
/// the integer part as the next digit. The final digit is truncated, never
/// rounded.
///
/// # Errors
/// Returns `FractionDigitOutOfRange` if a step produces a digit value with
/// no symbol in the alphabet. For any proper fraction the digit stays below
/// the target radix; only the unary source quirk, where the fraction value
/// is the substring length and can exceed 1, reaches this.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn convert(fraction: &str, source_radix: u32, target_radix: u32) -> FractionResult<String> {
    let mut value = to_decimal(fraction, source_radix);
    let mut output = String::with_capacity(FRACTION_DIGITS);

    for _ in 0..FRACTION_DIGITS {
        value *= f64::from(target_radix);
        let digit = value as i64;
        value -= digit as f64;

        let symbol = usize::try_from(digit).ok()
                                           .and_then(alphabet::symbol)
                                           .ok_or(ConversionError::FractionDigitOutOfRange { digit })?;
        output.push(symbol);
    }

    Ok(output)
}

/// Accumulates the decimal value of the source fraction.
///
/// For a positional source this is the usual digit-over-radix-power sum. For
/// a unary source the value is the substring length taken as a plain number:
/// `.111` in base 1 means 3.0, not 0.111 in any base. That matches no
/// coherent positional semantics, but it is the defined behavior and is kept
/// for compatibility.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_precision_loss)]
fn to_decimal(fraction: &str, source_radix: u32) -> f64 {
    if source_radix == 1 {
        return fraction.len() as f64;
    }

    let radix = f64::from(source_radix);
    let mut value = 0.0;
    for (position, symbol) in fraction.chars().enumerate() {
        // Validation guarantees every symbol is a digit of the source radix.
        let digit = symbol.to_digit(36).unwrap_or_default();
        value += f64::from(digit) / radix.powi(position as i32 + 1);
    }
    value
}
