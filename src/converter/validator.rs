use logos::Logos;

use crate::{
    converter::{
        alphabet::{MAX_RADIX, MIN_RADIX},
        lexer::Symbol,
        request::ConversionRequest,
    },
    error::ValidationError,
};

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a request in full before any conversion step runs.
///
/// Checks run in a fixed order: radix bounds for both radices, separator
/// count, then a per-symbol scan of the number against the source radix.
/// The first failing check aborts the whole request; a syntactically invalid
/// input is never partially converted.
///
/// # Errors
/// - `InvalidRadix` if either radix lies outside 1–36.
/// - `MalformedNumber` if the number contains more than one `.`.
/// - `InvalidDigitForUnaryBase` if a radix-1 number contains anything other
///   than `1` or `.`.
/// - `CaseMismatch`, `InvalidSymbol`, or `DigitExceedsRadix` from the
///   per-symbol scan for radices of 2 and above.
pub fn validate(request: &ConversionRequest) -> ValidationResult<()> {
    check_radix(request.source_radix())?;
    check_radix(request.target_radix())?;
    check_separator_count(request.number())?;

    if request.source_radix() == MIN_RADIX {
        check_unary_symbols(request.number())
    } else {
        check_symbols(request.number(), request.source_radix())
    }
}

fn check_radix(radix: u32) -> ValidationResult<()> {
    if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
        return Err(ValidationError::InvalidRadix { radix });
    }
    Ok(())
}

fn check_separator_count(number: &str) -> ValidationResult<()> {
    let count = number.chars().filter(|&c| c == '.').count();
    if count > 1 {
        return Err(ValidationError::MalformedNumber { count });
    }
    Ok(())
}

/// A unary number is a run of ones, optionally split by the separator.
/// Anything the lexer cannot classify is still just an invalid unary digit.
fn check_unary_symbols(number: &str) -> ValidationResult<()> {
    let mut lexer = Symbol::lexer(number);
    while let Some(token) = lexer.next() {
        match token {
            Ok(Symbol::Digit(1) | Symbol::Separator) => {},
            _ => {
                return Err(ValidationError::InvalidDigitForUnaryBase { symbol:
                                                                           offending(lexer.slice()) });
            },
        }
    }
    Ok(())
}

fn check_symbols(number: &str, radix: u32) -> ValidationResult<()> {
    let mut lexer = Symbol::lexer(number);
    while let Some(token) = lexer.next() {
        let value = match token {
            Ok(Symbol::Digit(value) | Symbol::Letter(value)) => value,
            Ok(Symbol::Separator) => continue,
            Ok(Symbol::Uppercase(symbol)) => {
                return Err(ValidationError::CaseMismatch { symbol });
            },
            Err(()) => {
                return Err(ValidationError::InvalidSymbol { symbol: offending(lexer.slice()) });
            },
        };

        if value >= radix {
            return Err(ValidationError::DigitExceedsRadix { symbol: offending(lexer.slice()),
                                                            radix });
        }
    }
    Ok(())
}

/// The first character of the lexer slice that triggered an error. The slice
/// of a yielded token is never empty.
fn offending(slice: &str) -> char {
    slice.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER)
}
