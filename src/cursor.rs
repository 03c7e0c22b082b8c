//! Bidirectional cursor over an immutable token slice.
//!
//! The position is allowed to leave `[0, len)` in either direction; the
//! cursor then reports itself as invalid until moved back. There is no
//! wraparound. Several cursors may walk the same slice independently.

use crate::token::Token;

/// Positionable pointer into a token slice.
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    pos: isize,
}

impl<'a> TokenCursor<'a> {
    /// Create a cursor positioned on the first token.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// The token under the cursor, or `None` when the cursor is invalid.
    pub fn current(&self) -> Option<&'a Token> {
        self.key().map(|i| &self.tokens[i])
    }

    /// Whether the cursor points at a token.
    pub fn valid(&self) -> bool {
        self.pos >= 0 && (self.pos as usize) < self.tokens.len()
    }

    /// Move one token forward.
    pub fn next(&mut self) {
        if self.pos < self.tokens.len() as isize {
            self.pos += 1;
        }
    }

    /// Move one token backward.
    pub fn prev(&mut self) {
        if self.pos >= 0 {
            self.pos -= 1;
        }
    }

    /// Jump to `index`. Out-of-range indices leave the cursor invalid.
    pub fn seek(&mut self, index: usize) {
        self.pos = isize::try_from(index).unwrap_or(isize::MAX);
    }

    /// Index under the cursor, or `None` when invalid.
    pub fn key(&self) -> Option<usize> {
        if self.valid() {
            Some(self.pos as usize)
        } else {
            None
        }
    }

    /// The slice this cursor walks.
    pub fn tokens(&self) -> &'a [Token] {
        self.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Token> {
        vec![Token::Symbol('('), Token::Symbol(','), Token::Symbol(')')]
    }

    #[test]
    fn test_walk_forward_past_end() {
        let tokens = sample();
        let mut cursor = TokenCursor::new(&tokens);
        assert_eq!(cursor.key(), Some(0));
        cursor.next();
        cursor.next();
        assert!(cursor.current().unwrap().is_symbol(')'));
        cursor.next();
        assert!(!cursor.valid());
        assert!(cursor.current().is_none());
        // Stepping back re-enters the sequence.
        cursor.prev();
        assert_eq!(cursor.key(), Some(2));
    }

    #[test]
    fn test_walk_backward_past_start() {
        let tokens = sample();
        let mut cursor = TokenCursor::new(&tokens);
        cursor.prev();
        assert!(!cursor.valid());
        assert_eq!(cursor.key(), None);
        cursor.next();
        assert_eq!(cursor.key(), Some(0));
    }

    #[test]
    fn test_seek() {
        let tokens = sample();
        let mut cursor = TokenCursor::new(&tokens);
        cursor.seek(1);
        assert!(cursor.current().unwrap().is_symbol(','));
        cursor.seek(10);
        assert!(!cursor.valid());
    }

    #[test]
    fn test_empty_sequence_is_never_valid() {
        let tokens: Vec<Token> = Vec::new();
        let cursor = TokenCursor::new(&tokens);
        assert!(!cursor.valid());
    }

    #[test]
    fn test_cursors_are_independent() {
        let tokens = sample();
        let mut a = TokenCursor::new(&tokens);
        let b = a.clone();
        a.next();
        assert_eq!(a.key(), Some(1));
        assert_eq!(b.key(), Some(0));
    }
}
