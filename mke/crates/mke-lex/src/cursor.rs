//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which holds the scan state of a
//! lexer: the source text, the position of the character under examination,
//! the position of the next character to read, and the current character.

/// Sentinel returned by [`Cursor::current_char`] and [`Cursor::peek_char`]
/// once the end of the source has been reached.
pub const EOF_CHAR: char = '\0';

/// A cursor over an immutable source text.
///
/// `position` is the byte offset of the current character and
/// `read_position` the byte offset of the next one. For ASCII input the two
/// always differ by exactly one; a multi-byte character widens the gap to its
/// UTF-8 length so a slice never splits a character.
///
/// The cursor only moves forward. Once the end of the source is reached,
/// [`Cursor::bump`] leaves it where it is.
///
/// End of input is decided by position alone. Unlike lexers that treat a NUL
/// sentinel as the end, a NUL byte inside the source is an ordinary character
/// here, and the lexer turns it into an `ILLEGAL` token.
///
/// # Example
///
/// ```
/// use mke_lex::cursor::Cursor;
///
/// let source = "let x = 5;";
/// let mut cursor = Cursor::new(source);
///
/// assert_eq!(cursor.current_char(), 'l');
/// cursor.bump();
/// assert_eq!(cursor.current_char(), 'e');
/// ```
#[derive(Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Byte offset of the character currently under examination.
    position: usize,

    /// Byte offset of the next character to read.
    read_position: usize,

    /// The character at `position`, or [`EOF_CHAR`] at end of input.
    ch: char,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned on the first character of `source`.
    ///
    /// # Example
    ///
    /// ```
    /// use mke_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("fn");
    /// assert_eq!(cursor.position(), 0);
    /// assert_eq!(cursor.read_position(), 1);
    /// ```
    pub fn new(source: &'a str) -> Self {
        let mut cursor = Self {
            source,
            position: 0,
            read_position: 0,
            ch: EOF_CHAR,
        };
        cursor.read_char();
        cursor
    }

    /// Loads the character at `read_position` and moves both indices forward.
    fn read_char(&mut self) {
        match self.source.get(self.read_position..).and_then(|rest| rest.chars().next()) {
            Some(c) => {
                self.position = self.read_position;
                self.read_position = self.position + c.len_utf8();
                self.ch = c;
            },
            None => {
                self.position = self.source.len();
                self.read_position = self.position + 1;
                self.ch = EOF_CHAR;
            },
        }
    }

    /// Returns the current character.
    ///
    /// Returns [`EOF_CHAR`] if at the end of the source. A NUL character
    /// inside the source is returned as-is, so callers that need to tell the
    /// two apart use [`Cursor::is_at_end`].
    ///
    /// # Example
    ///
    /// ```
    /// use mke_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("abc");
    /// assert_eq!(cursor.current_char(), 'a');
    /// ```
    #[inline]
    pub fn current_char(&self) -> char {
        self.ch
    }

    /// Returns the character after the current one without consuming it.
    ///
    /// # Example
    ///
    /// ```
    /// use mke_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("!=");
    /// assert_eq!(cursor.current_char(), '!');
    /// assert_eq!(cursor.peek_char(), '=');
    /// assert_eq!(cursor.current_char(), '!');
    /// ```
    #[inline]
    pub fn peek_char(&self) -> char {
        self.source
            .get(self.read_position..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(EOF_CHAR)
    }

    /// Advances the cursor to the next character.
    ///
    /// Does nothing if already at end.
    ///
    /// # Example
    ///
    /// ```
    /// use mke_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a");
    /// cursor.bump();
    /// assert!(cursor.is_at_end());
    /// cursor.bump();
    /// assert_eq!(cursor.position(), 1);
    /// ```
    #[inline]
    pub fn bump(&mut self) {
        if self.is_at_end() {
            return;
        }
        self.read_char();
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the byte offset of the current character.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the byte offset of the next character to read.
    pub fn read_position(&self) -> usize {
        self.read_position
    }

    /// Returns the source from `start` up to, but not including, the current
    /// character.
    ///
    /// # Example
    ///
    /// ```
    /// use mke_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("let x");
    /// let start = cursor.position();
    /// cursor.bump();
    /// cursor.bump();
    /// cursor.bump();
    /// assert_eq!(cursor.slice_from(start), "let");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("let five = 5;");
        assert_eq!(cursor.current_char(), 'l');
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.read_position(), 1);
    }

    #[test]
    fn test_bump() {
        let mut cursor = Cursor::new("abc");
        assert_eq!(cursor.current_char(), 'a');
        cursor.bump();
        assert_eq!(cursor.current_char(), 'b');
        cursor.bump();
        assert_eq!(cursor.current_char(), 'c');
        cursor.bump();
        assert_eq!(cursor.current_char(), EOF_CHAR);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_read_position_leads_by_one() {
        let mut cursor = Cursor::new("x = 10;");
        while !cursor.is_at_end() {
            assert_eq!(cursor.read_position(), cursor.position() + 1);
            cursor.bump();
        }
        assert_eq!(cursor.read_position(), cursor.position() + 1);
    }

    #[test]
    fn test_bump_past_end_is_noop() {
        let mut cursor = Cursor::new("ab");
        for _ in 0..10 {
            cursor.bump();
        }
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.read_position(), 3);
        assert_eq!(cursor.current_char(), EOF_CHAR);
    }

    #[test]
    fn test_peek_char() {
        let mut cursor = Cursor::new("==");
        assert_eq!(cursor.peek_char(), '=');
        cursor.bump();
        assert_eq!(cursor.peek_char(), EOF_CHAR);
        cursor.bump();
        assert_eq!(cursor.peek_char(), EOF_CHAR);
    }

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_char(), EOF_CHAR);
        assert_eq!(cursor.position(), 0);
        cursor.bump();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_embedded_nul_is_not_end() {
        let cursor = Cursor::new("\0a");
        assert_eq!(cursor.current_char(), '\0');
        assert!(!cursor.is_at_end());
    }

    #[test]
    fn test_multibyte_char() {
        let mut cursor = Cursor::new("é;");
        assert_eq!(cursor.current_char(), 'é');
        assert_eq!(cursor.read_position(), 2);
        assert_eq!(cursor.peek_char(), ';');
        cursor.bump();
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.slice_from(0), "é");
    }

    #[test]
    fn test_slice_from() {
        let mut cursor = Cursor::new("let x = 42;");
        let start = cursor.position();
        cursor.bump();
        cursor.bump();
        cursor.bump();
        assert_eq!(cursor.slice_from(start), "let");

        let start2 = cursor.position();
        cursor.bump();
        cursor.bump();
        assert_eq!(cursor.slice_from(start2), " x");
    }
}
