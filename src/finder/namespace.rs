//! Namespace declarations.

use super::{is_name_part, Match, TokenFinder};
use crate::token::{Token, TokenKind};

/// Finds `namespace Name;` and `namespace Name {` declarations.
///
/// A match runs from the keyword to the terminating `;` or `{`. Relative
/// names such as `namespace\foo()` are not declarations and are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct NamespaceFinder;

impl TokenFinder for NamespaceFinder {
    fn find(&self, tokens: &[Token]) -> Vec<Match> {
        let mut matches = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            if tokens[i].is_kind(TokenKind::Namespace) {
                if let Some(end) = terminator(tokens, i) {
                    matches.push(Match::new(i, end));
                    i = end;
                }
            }
            i += 1;
        }
        matches
    }
}

fn terminator(tokens: &[Token], keyword: usize) -> Option<usize> {
    let next = tokens.get(keyword + 1)?;
    if !(next.is_trivia() || next.is_symbol('{')) {
        return None;
    }
    for (i, token) in tokens.iter().enumerate().skip(keyword + 1) {
        if token.is_symbol(';') || token.is_symbol('{') {
            return Some(i);
        }
        if !(token.is_trivia() || is_name_part(token)) {
            return None;
        }
    }
    None
}
