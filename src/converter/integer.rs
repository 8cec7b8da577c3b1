use crate::{converter::alphabet, error::ConversionError};

pub type IntegerResult<T> = Result<T, ConversionError>;

/// Converts the integer substring of a validated number into the target
/// radix.
///
/// # Errors
/// Returns `Overflow` if the parsed value does not fit in the signed 64-bit
/// accumulator. Overflow fails fast; it never wraps silently.
pub fn convert(integer: &str, source_radix: u32, target_radix: u32) -> IntegerResult<String> {
    let decimal = to_decimal(integer, source_radix)?;
    Ok(render(decimal, target_radix))
}

/// Parses the integer substring in the source radix.
///
/// In unary the value is simply the count of ones. An empty integer part
/// (an input such as `.5`) parses as zero.
fn to_decimal(integer: &str, source_radix: u32) -> IntegerResult<i64> {
    if source_radix == 1 {
        return i64::try_from(integer.len()).map_err(|_| ConversionError::Overflow);
    }
    if integer.is_empty() {
        return Ok(0);
    }
    // Validation already rejected every digit the radix cannot represent,
    // so the only parse failure left is overflow.
    i64::from_str_radix(integer, source_radix).map_err(|_| ConversionError::Overflow)
}

fn render(value: i64, target_radix: u32) -> String {
    if target_radix == 1 {
        return unary(value);
    }
    positional(value, target_radix)
}

/// Renders `value` as that many repeated ones. Zero renders as the empty
/// string.
#[allow(clippy::cast_sign_loss)]
fn unary(value: i64) -> String {
    // The accumulator never goes negative: digits are unsigned and signs
    // are rejected as invalid symbols.
    "1".repeat(usize::try_from(value).unwrap_or_default())
}

/// Minimal positional rendering through the digit alphabet, least
/// significant digit first, then reversed.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn positional(mut value: i64, radix: u32) -> String {
    if value == 0 {
        return "0".to_owned();
    }

    let base = i64::from(radix);
    let mut digits = Vec::new();
    while value > 0 {
        // `value % base` is below 36 here, so the lookup cannot miss.
        digits.push(alphabet::symbol((value % base) as usize).unwrap_or_default());
        value /= base;
    }

    digits.iter().rev().collect()
}
