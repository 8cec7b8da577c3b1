use numera::{
    ConversionRequest, convert,
    error::{ConversionError, ValidationError},
};

fn assert_converts(source_radix: u32, number: &str, target_radix: u32, expected: &str) {
    let request = ConversionRequest::new(source_radix, number, target_radix);
    match convert(&request) {
        Ok(result) => assert_eq!(result, expected,
                                 "{number} (base {source_radix}) -> base {target_radix}"),
        Err(e) => panic!("{number} (base {source_radix}) -> base {target_radix} failed: {e}"),
    }
}

fn rejected(source_radix: u32, number: &str, target_radix: u32) -> Box<dyn std::error::Error> {
    let request = ConversionRequest::new(source_radix, number, target_radix);
    match convert(&request) {
        Ok(result) => panic!("{number} (base {source_radix}) -> base {target_radix} \
                              succeeded with {result} but was expected to fail"),
        Err(e) => e,
    }
}

fn validation_error(source_radix: u32, number: &str, target_radix: u32) -> ValidationError {
    *rejected(source_radix, number, target_radix).downcast::<ValidationError>()
                                                 .unwrap_or_else(|e| {
                                                     panic!("expected a validation error, got: {e}")
                                                 })
}

fn conversion_error(source_radix: u32, number: &str, target_radix: u32) -> ConversionError {
    *rejected(source_radix, number, target_radix).downcast::<ConversionError>()
                                                 .unwrap_or_else(|e| {
                                                     panic!("expected a conversion error, got: {e}")
                                                 })
}

#[test]
fn identity_on_matching_radices() {
    assert_converts(16, "ff", 16, "ff");
    assert_converts(10, "123", 10, "123");
    assert_converts(2, "101", 2, "101");
    assert_converts(36, "zz", 36, "zz");
    assert_converts(10, "0", 10, "0");
}

#[test]
fn integer_conversions_between_common_radices() {
    assert_converts(10, "255", 16, "ff");
    assert_converts(16, "ff", 10, "255");
    assert_converts(10, "8", 2, "1000");
    assert_converts(2, "1000", 8, "10");
    assert_converts(8, "777", 10, "511");
    assert_converts(36, "z", 10, "35");
}

#[test]
fn integer_round_trip_through_every_radix() {
    for radix in 2..=36 {
        let there = convert(&ConversionRequest::new(10, "3000", radix)).unwrap();
        let back = convert(&ConversionRequest::new(radix, there.as_str(), 10)).unwrap();
        assert_eq!(back, "3000", "round trip through base {radix}");
    }
}

#[test]
fn unary_encode_and_decode() {
    assert_converts(1, "111", 10, "3");
    assert_converts(10, "3", 1, "111");
    assert_converts(1, "", 10, "0");
    assert_converts(10, "0", 1, "");
    assert_converts(1, "1111111", 2, "111");
    assert_converts(36, "z", 1, &"1".repeat(35));
}

#[test]
fn fractional_part_is_always_five_digits() {
    assert_converts(10, "0.5", 2, "0.10000");
    assert_converts(10, "0.5", 16, "0.80000");
    assert_converts(2, "0.1", 10, "0.50000");
    assert_converts(16, "ff.8", 10, "255.50000");
    assert_converts(10, "3.14", 10, "3.14000");
    assert_converts(10, "0.0", 2, "0.00000");

    for radix in 2..=36 {
        let result = convert(&ConversionRequest::new(10, "0.5", radix)).unwrap();
        let (_, fraction) = result.split_once('.').unwrap();
        assert_eq!(fraction.len(), 5, "fraction digits in base {radix}");
    }
}

#[test]
fn empty_integer_part_reads_as_zero() {
    assert_converts(10, ".5", 2, "0.10000");
    assert_converts(16, ".8", 10, "0.50000");
}

#[test]
fn unary_fraction_value_is_the_substring_length() {
    // In base 1 the fractional value is the count of ones taken as a plain
    // number, so `.111` contributes 3.0 and the first base-10 digit is 30,
    // the symbol 'u'.
    assert_converts(1, "1.111", 10, "1.u0000");
    assert_converts(1, "11.1", 10, "2.a0000");
}

#[test]
fn unary_fraction_beyond_the_alphabet_is_rejected() {
    // 4 * 10 = 40, which has no symbol.
    assert_eq!(conversion_error(1, "1.1111", 10),
               ConversionError::FractionDigitOutOfRange { digit: 40 });
    // 2 * 36 = 72.
    assert_eq!(conversion_error(1, "1.11", 36),
               ConversionError::FractionDigitOutOfRange { digit: 72 });
}

#[test]
fn digits_outside_the_source_radix_are_rejected() {
    assert_eq!(validation_error(2, "102", 10),
               ValidationError::DigitExceedsRadix { symbol: '2', radix: 2 });
    assert_eq!(validation_error(8, "19", 10),
               ValidationError::DigitExceedsRadix { symbol: '9', radix: 8 });
    assert_eq!(validation_error(16, "fg", 10),
               ValidationError::DigitExceedsRadix { symbol: 'g', radix: 16 });
}

#[test]
fn uppercase_digits_are_rejected() {
    assert_eq!(validation_error(16, "1A", 10),
               ValidationError::CaseMismatch { symbol: 'A' });
    // Uppercase is a case error even where the lowercase digit would be
    // valid for the radix.
    assert_eq!(validation_error(36, "Z", 10),
               ValidationError::CaseMismatch { symbol: 'Z' });
}

#[test]
fn special_symbols_are_rejected() {
    assert_eq!(validation_error(10, "12%4", 10),
               ValidationError::InvalidSymbol { symbol: '%' });
    assert_eq!(validation_error(10, "1 2", 10),
               ValidationError::InvalidSymbol { symbol: ' ' });
    assert_eq!(validation_error(10, "-5", 10),
               ValidationError::InvalidSymbol { symbol: '-' });
}

#[test]
fn repeated_separators_are_rejected() {
    assert_eq!(validation_error(10, "1.2.3", 10),
               ValidationError::MalformedNumber { count: 2 });
    assert_eq!(validation_error(2, "1..1", 10),
               ValidationError::MalformedNumber { count: 2 });
}

#[test]
fn unary_numbers_may_contain_only_ones() {
    assert_eq!(validation_error(1, "121", 10),
               ValidationError::InvalidDigitForUnaryBase { symbol: '2' });
    assert_eq!(validation_error(1, "1a1", 10),
               ValidationError::InvalidDigitForUnaryBase { symbol: 'a' });
    assert_eq!(validation_error(1, "1%1", 10),
               ValidationError::InvalidDigitForUnaryBase { symbol: '%' });
}

#[test]
fn radix_bounds_are_enforced() {
    assert_eq!(validation_error(0, "1", 10), ValidationError::InvalidRadix { radix: 0 });
    assert_eq!(validation_error(37, "1", 10), ValidationError::InvalidRadix { radix: 37 });
    assert_eq!(validation_error(10, "1", 0), ValidationError::InvalidRadix { radix: 0 });
    assert_eq!(validation_error(10, "1", 37), ValidationError::InvalidRadix { radix: 37 });

    // Both boundaries of the legal range work.
    assert_converts(1, "11", 10, "2");
    assert_converts(36, "10", 10, "36");
    assert_converts(10, "36", 36, "10");
}

#[test]
fn integer_overflow_fails_fast() {
    // 2^63 does not fit in the signed 64-bit accumulator.
    assert_eq!(conversion_error(16, "8000000000000000", 10), ConversionError::Overflow);
    assert_eq!(conversion_error(2, &"1".repeat(64), 10), ConversionError::Overflow);

    // The largest representable value still converts.
    assert_converts(16, "7fffffffffffffff", 10, "9223372036854775807");
}

#[test]
fn base_thirty_six_produces_every_symbol() {
    for (value, expected) in "0123456789abcdefghijklmnopqrstuvwxyz".chars().enumerate() {
        let result = convert(&ConversionRequest::new(10, value.to_string(), 36)).unwrap();
        assert_eq!(result, expected.to_string(), "symbol for digit value {value}");
    }
}
