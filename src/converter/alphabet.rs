/// The fixed digit alphabet: index = digit value, 0–9 then a–z.
pub const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// The smallest supported radix, the degenerate unary system.
pub const MIN_RADIX: u32 = 1;
/// The largest supported radix, using the full alphabet.
pub const MAX_RADIX: u32 = 36;

/// Returns the symbol for a digit value, or `None` if the value has no
/// symbol in the alphabet.
pub fn symbol(value: usize) -> Option<char> {
    DIGITS.get(value).map(|&byte| char::from(byte))
}
