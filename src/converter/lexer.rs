use logos::Logos;

/// Represents one classified symbol of a source number.
///
/// Digits and lowercase letters carry their digit value directly, so the
/// validator and the conversion passes never re-derive it from the character.
/// Uppercase letters are a recognized token of their own: they are always
/// invalid as digits, but distinguishing them lets validation report a case
/// error rather than a generic bad symbol. Every other character fails to
/// lex and surfaces as an error token.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Symbol {
    /// A decimal digit `0`–`9`, carrying its value.
    #[regex(r"[0-9]", |lex| u32::from(lex.slice().as_bytes()[0] - b'0'))]
    Digit(u32),
    /// A lowercase letter `a`–`z`, carrying its digit value 10–35.
    #[regex(r"[a-z]", |lex| u32::from(lex.slice().as_bytes()[0] - b'a') + 10)]
    Letter(u32),
    /// The `.` separating the integer part from the fractional part.
    #[token(".")]
    Separator,
    /// An uppercase letter `A`–`Z`.
    #[regex(r"[A-Z]", |lex| char::from(lex.slice().as_bytes()[0]))]
    Uppercase(char),
}
