//! # numera
//!
//! numera converts a number written in one positional numeral system into its
//! representation in another. Radices from 1 to 36 are supported, where radix
//! 1 is the degenerate unary system in which the value `n` is written as `n`
//! repetitions of the digit `1`. Numbers may carry an optional fractional
//! part, which is rendered with a fixed precision of five target-radix digits.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::converter::{fraction, integer, validator};

/// The conversion engine: request handling, validation, and the integer and
/// fractional conversion passes.
///
/// This module ties together the digit alphabet, the symbol lexer, the
/// validator, and the two conversion passes to turn a validated request into
/// target-radix text. It is the core of the crate.
///
/// # Responsibilities
/// - Defines `ConversionRequest` and the derived `ParsedNumber` view.
/// - Validates the request against the declared source radix.
/// - Converts the integer part and, if present, the fractional part.
pub mod converter;
/// Provides unified error types for validation and conversion.
///
/// This module defines all errors that can be raised while checking a request
/// or while computing its converted representation. It standardizes error
/// reporting and carries the offending symbol or value where one exists.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (validation, conversion).
/// - Attaches the offending symbol, radix, or digit value for user feedback.
/// - Supports integration with standard error handling traits.
pub mod error;

pub use converter::request::ConversionRequest;

/// Converts a request into its target-radix text representation.
///
/// This is the single public entry point. It validates the request in full
/// before any conversion work happens, then converts the integer part and,
/// when the source number carries a fractional part, appends a `.` followed
/// by exactly five fractional digits in the target radix.
///
/// # Errors
/// Returns an error if validation fails, if the integer part overflows the
/// 64-bit accumulator, or if a fractional digit falls outside the 36-symbol
/// alphabet (only reachable through a radix-1 fractional part).
///
/// # Examples
/// ```
/// use numera::{ConversionRequest, convert};
///
/// // 42 in decimal is 2a in hexadecimal.
/// let request = ConversionRequest::new(10, "42", 16);
/// assert_eq!(convert(&request).unwrap(), "2a");
///
/// // The digit '2' does not exist in base 2, so validation rejects this.
/// let request = ConversionRequest::new(2, "102", 10);
/// assert!(convert(&request).is_err());
/// ```
pub fn convert(request: &ConversionRequest) -> Result<String, Box<dyn std::error::Error>> {
    validator::validate(request)?;

    let parsed = request.parsed();
    let mut output =
        integer::convert(parsed.integer, request.source_radix(), request.target_radix())?;

    if let Some(fraction) = parsed.fraction {
        output.push('.');
        output.push_str(&fraction::convert(fraction,
                                           request.source_radix(),
                                           request.target_radix())?);
    }

    Ok(output)
}
