//! Opening brace of each class-like body.

use super::{find_from, is_named_declaration, Match, TokenFinder};
use crate::cursor::TokenCursor;
use crate::navigate::move_to_corresponding_end;
use crate::token::Token;

/// Finds the `{` that opens every named class, interface, trait or enum body.
///
/// Each match spans that single brace; the marker is the index of the
/// declaring keyword.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassOpeningBracketFinder;

impl TokenFinder for ClassOpeningBracketFinder {
    fn find(&self, tokens: &[Token]) -> Vec<Match> {
        let mut matches = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            if is_named_declaration(tokens, i) {
                match find_from(tokens, i + 1, |t| t.is_symbol('{')) {
                    Some(brace) => {
                        matches.push(Match::new(brace, brace).with_marker(i));
                        i = brace;
                    }
                    None => break,
                }
            }
            i += 1;
        }
        matches
    }
}

/// `(open, close)` index pairs of every class-like body.
///
/// A body whose brace is never closed extends to the last token.
pub fn class_bodies(tokens: &[Token]) -> Vec<(usize, usize)> {
    let last = tokens.len().saturating_sub(1);
    ClassOpeningBracketFinder
        .find(tokens)
        .into_iter()
        .map(|m| {
            let mut cursor = TokenCursor::new(tokens);
            cursor.seek(m.start);
            match move_to_corresponding_end(&mut cursor, None) {
                Ok(()) => (m.start, cursor.key().unwrap_or(last)),
                Err(_) => (m.start, last),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{tokenize, TokenKind};

    #[test]
    fn test_finds_each_body() {
        let tokens = tokenize("<?php class A { function f() {} } interface B extends C {}");
        let matches = ClassOpeningBracketFinder.find(&tokens);
        assert_eq!(matches.len(), 2);
        assert!(tokens[matches[0].markers[0]].is_kind(TokenKind::Class));
        assert!(tokens[matches[1].markers[0]].is_kind(TokenKind::Interface));
        assert!(matches.iter().all(|m| tokens[m.start].is_symbol('{')));

        let bodies = class_bodies(&tokens);
        assert_eq!(bodies.len(), 2);
        assert!(tokens[bodies[0].1].is_symbol('}'));
        assert_eq!(bodies[1].1, tokens.len() - 1);
    }

    #[test]
    fn test_anonymous_class_is_skipped() {
        let tokens = tokenize("<?php $a = new class { };");
        assert!(ClassOpeningBracketFinder.find(&tokens).is_empty());
    }

    #[test]
    fn test_unclosed_body_runs_to_end() {
        let tokens = tokenize("<?php class A { public $a;");
        assert_eq!(class_bodies(&tokens), vec![(5, tokens.len() - 1)]);
    }
}
