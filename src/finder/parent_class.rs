//! Parent class references (`extends`).

use super::{next_significant, prev_significant, Match, TokenFinder};
use crate::token::{Token, TokenKind};

/// Finds the name following `extends` in a class declaration.
///
/// The match spans the whole, possibly qualified, name (`\Foo\Bar`).
/// Only the first name is taken, so `interface A extends B, C` yields `B`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParentClassNameFinder;

impl TokenFinder for ParentClassNameFinder {
    fn find(&self, tokens: &[Token]) -> Vec<Match> {
        let mut matches = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            if tokens[i].is_kind(TokenKind::Extends) && follows_declaration(tokens, i) {
                if let Some((start, end)) = qualified_name_at(tokens, i + 1) {
                    matches.push(Match::new(start, end));
                    i = end;
                }
            }
            i += 1;
        }
        matches
    }
}

/// `extends` directly after a declared name or an anonymous `class`.
fn follows_declaration(tokens: &[Token], extends: usize) -> bool {
    match prev_significant(tokens, extends) {
        Some(p) => tokens[p].is_kind(TokenKind::Identifier) || tokens[p].is_kind(TokenKind::Class),
        None => false,
    }
}

/// Span of the contiguous name starting at the first significant token at
/// or after `from`.
pub(crate) fn qualified_name_at(tokens: &[Token], from: usize) -> Option<(usize, usize)> {
    let start = next_significant(tokens, from)?;
    let is_part = |t: &Token| t.is_kind(TokenKind::Identifier) || t.is_kind(TokenKind::NsSeparator);
    if !is_part(&tokens[start]) {
        return None;
    }
    let mut end = start;
    while end + 1 < tokens.len() && is_part(&tokens[end + 1]) {
        end += 1;
    }
    Some((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finder::matches_to_strings;
    use crate::token::tokenize;

    #[test]
    fn test_simple_and_qualified() {
        let tokens = tokenize("<?php class A extends B {} class C extends \\Lib\\D {}");
        let names = matches_to_strings(&ParentClassNameFinder.find(&tokens), &tokens);
        assert_eq!(names, vec!["B", "\\Lib\\D"]);
    }

    #[test]
    fn test_no_parent() {
        let tokens = tokenize("<?php class A implements B {}");
        assert!(ParentClassNameFinder.find(&tokens).is_empty());
    }
}
