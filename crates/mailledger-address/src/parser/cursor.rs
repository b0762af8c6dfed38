//! Character cursor over the parser input.

/// Forward-only cursor tracking both the byte offset and the character
/// position within the input.
pub struct Cursor<'a> {
    input: &'a str,
    offset: usize,
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `input`.
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            position: 0,
        }
    }

    /// Returns the number of characters consumed so far.
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the current byte offset, for use with [`Self::slice_from`].
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns true if the whole input has been consumed.
    pub const fn is_eof(&self) -> bool {
        self.offset >= self.input.len()
    }

    /// Peeks at the current character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.input[self.offset..].chars().next()
    }

    /// Returns true if the current character is `expected`.
    pub fn peek_is(&self, expected: char) -> bool {
        self.peek() == Some(expected)
    }

    /// Advances by one character and returns it.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        self.position += 1;
        Some(c)
    }

    /// Consumes characters while `predicate` holds and returns how many were consumed.
    pub fn advance_while(&mut self, predicate: impl Fn(char) -> bool) -> usize {
        let mut count = 0;
        while self.peek().is_some_and(&predicate) {
            self.advance();
            count += 1;
        }
        count
    }

    /// Returns the input between byte offset `start` and the current offset.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.input[start..self.offset]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::redundant_clone, clippy::manual_string_new, clippy::needless_collect, clippy::unreadable_literal, clippy::used_underscore_items, clippy::similar_names)]
mod tests {
    use super::*;

    #[test]
    fn test_position_counts_characters() {
        let mut cursor = Cursor::new("äb");
        assert_eq!(cursor.advance(), Some('ä'));
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.offset(), 2);
        assert_eq!(cursor.advance(), Some('b'));
        assert_eq!(cursor.position(), 2);
        assert!(cursor.is_eof());
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_advance_while_and_slice() {
        let mut cursor = Cursor::new("abc.def");
        let start = cursor.offset();
        assert_eq!(cursor.advance_while(|c| c.is_ascii_alphabetic()), 3);
        assert_eq!(cursor.slice_from(start), "abc");
        assert!(cursor.peek_is('.'));
        assert_eq!(cursor.advance_while(|c| c.is_ascii_digit()), 0);
    }

    #[test]
    fn test_empty_input() {
        let cursor = Cursor::new("");
        assert!(cursor.is_eof());
        assert_eq!(cursor.peek(), None);
        assert!(!cursor.peek_is('@'));
    }
}
