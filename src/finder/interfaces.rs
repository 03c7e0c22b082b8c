//! Implemented interface lists (`implements`).

use super::{find_from, next_significant, Match, TokenFinder};
use crate::token::{Token, TokenKind};

/// Finds the list of names between `implements` and the class body.
///
/// The match starts at the first name and ends at the last significant
/// token before `{`, so `implements A, B {` covers `A, B`.
#[derive(Debug, Clone, Copy, Default)]
pub struct InterfaceFinder;

impl TokenFinder for InterfaceFinder {
    fn find(&self, tokens: &[Token]) -> Vec<Match> {
        let mut matches = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            if tokens[i].is_kind(TokenKind::Implements) {
                let Some(start) = next_significant(tokens, i + 1) else {
                    break;
                };
                let Some(brace) = find_from(tokens, start, |t| t.is_symbol('{') || t.is_symbol(';'))
                else {
                    break;
                };
                if tokens[brace].is_symbol('{') && brace > start {
                    let end = (start..brace)
                        .rev()
                        .find(|&j| !tokens[j].is_kind(TokenKind::Whitespace))
                        .unwrap_or(start);
                    matches.push(Match::new(start, end));
                }
                i = brace;
            }
            i += 1;
        }
        matches
    }
}
