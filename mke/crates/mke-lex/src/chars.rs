//! Character classes for the mke lexer.
//!
//! The language is ASCII-only: identifiers are built from ASCII letters,
//! underscores and digits, numbers from ASCII digits. Anything outside these
//! classes that is not an operator or delimiter lexes as `ILLEGAL`.

/// Checks if a character can start an identifier.
///
/// Valid start characters are ASCII letters `a-z`, `A-Z` and the underscore.
///
/// # Example
///
/// ```
/// use mke_lex::chars::is_letter;
///
/// assert!(is_letter('a'));
/// assert!(is_letter('Z'));
/// assert!(is_letter('_'));
/// assert!(!is_letter('1'));
/// assert!(!is_letter('α'));
/// ```
#[inline]
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue an identifier after its first letter.
///
/// ```
/// use mke_lex::chars::is_ident_continue;
///
/// assert!(is_ident_continue('x'));
/// assert!(is_ident_continue('_'));
/// assert!(is_ident_continue('1'));
/// assert!(!is_ident_continue('-'));
/// ```
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    is_letter(c) || is_digit(c)
}

/// Checks if a character is an ASCII decimal digit.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character is insignificant whitespace.
///
/// Only space, tab, line feed and carriage return are skipped. Other
/// whitespace, such as a form feed or a Unicode space, is `ILLEGAL`.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}
