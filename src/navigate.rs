//! Cursor helpers: matching-delimiter walks and trivia skipping.

use crate::cursor::TokenCursor;
use crate::error::{Result, TokenError};
use crate::token::{Token, TokenKind, TokenProp};

/// Closing symbol for an opening delimiter.
pub fn closing_delimiter(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '{' => Some('}'),
        '[' => Some(']'),
        _ => None,
    }
}

/// Advance `cursor` from an opening delimiter to its matching closer.
///
/// Nested pairs of the same delimiter are skipped. On success the cursor
/// rests on the closer. When `collect` is given, every visited token (both
/// delimiters included) is appended to it in order.
pub fn move_to_corresponding_end(
    cursor: &mut TokenCursor<'_>,
    mut collect: Option<&mut Vec<Token>>,
) -> Result<()> {
    let start = cursor.key().ok_or(TokenError::NotADelimiter {
        index: cursor.tokens().len(),
    })?;
    let (open, close) = match cursor.current() {
        Some(Token::Symbol(c)) => match closing_delimiter(*c) {
            Some(close) => (*c, close),
            None => return Err(TokenError::NotADelimiter { index: start }),
        },
        _ => return Err(TokenError::NotADelimiter { index: start }),
    };

    let mut depth = 0usize;
    while let Some(token) = cursor.current() {
        if let Some(out) = collect.as_deref_mut() {
            out.push(token.clone());
        }
        if token.is_symbol(open) {
            depth += 1;
        } else if token.is_symbol(close) {
            depth -= 1;
            if depth == 0 {
                return Ok(());
            }
        }
        cursor.next();
    }

    Err(TokenError::StructuralMismatch {
        index: start,
        reason: format!("'{}' is never closed by '{}'", open, close),
    })
}

/// Advance past every consecutive token matching `prop`.
pub fn skip_matching(cursor: &mut TokenCursor<'_>, prop: &TokenProp) {
    while let Some(token) = cursor.current() {
        if !prop.matches(token) {
            break;
        }
        cursor.next();
    }
}

/// Advance past consecutive whitespace tokens.
///
/// Leaves the cursor on the next non-whitespace token, or invalid.
pub fn skip_whitespace(cursor: &mut TokenCursor<'_>) {
    skip_matching(cursor, &TokenProp::Kind(TokenKind::Whitespace));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::tokens_to_string;
    use crate::token::tokenize;

    #[test]
    fn test_nested_braces() {
        let tokens = tokenize("<?php { a { b } { c } } tail");
        let open = tokens.iter().position(|t| t.is_symbol('{')).unwrap();
        let mut cursor = TokenCursor::new(&tokens);
        cursor.seek(open);

        let mut visited = Vec::new();
        move_to_corresponding_end(&mut cursor, Some(&mut visited)).unwrap();

        assert!(cursor.current().unwrap().is_symbol('}'));
        assert_eq!(tokens_to_string(&visited), "{ a { b } { c } }");
        assert_eq!(cursor.key(), Some(open + visited.len() - 1));
    }

    #[test]
    fn test_other_delimiters_are_ignored() {
        let tokens = tokenize("<?php ($a, [1, (2)], '(')");
        let mut cursor = TokenCursor::new(&tokens);
        cursor.seek(1);
        let mut visited = Vec::new();
        move_to_corresponding_end(&mut cursor, Some(&mut visited)).unwrap();
        assert_eq!(tokens_to_string(&visited), "($a, [1, (2)], '(')");
    }

    #[test]
    fn test_without_collection() {
        let tokens = tokenize("<?php [1, [2]];");
        let mut cursor = TokenCursor::new(&tokens);
        cursor.seek(1);
        move_to_corresponding_end(&mut cursor, None).unwrap();
        cursor.next();
        assert!(cursor.current().unwrap().is_symbol(';'));
    }

    #[test]
    fn test_unbalanced_is_structural_mismatch() {
        let tokens = tokenize("<?php { { }");
        let mut cursor = TokenCursor::new(&tokens);
        cursor.seek(1);
        let err = move_to_corresponding_end(&mut cursor, None).unwrap_err();
        assert!(matches!(err, TokenError::StructuralMismatch { index: 1, .. }));
        assert!(!cursor.valid());
    }

    #[test]
    fn test_not_on_a_delimiter() {
        let tokens = tokenize("<?php $a");
        let mut cursor = TokenCursor::new(&tokens);
        cursor.seek(1);
        assert_eq!(
            move_to_corresponding_end(&mut cursor, None),
            Err(TokenError::NotADelimiter { index: 1 })
        );
    }

    #[test]
    fn test_skip_whitespace() {
        let tokens = tokenize("<?php   \n\t$a");
        let mut cursor = TokenCursor::new(&tokens);
        cursor.seek(1);
        skip_whitespace(&mut cursor);
        assert!(cursor.current().unwrap().is_kind(TokenKind::Variable));

        cursor.next();
        skip_whitespace(&mut cursor);
        assert!(!cursor.valid());
    }
}
