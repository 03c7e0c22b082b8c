//! Method (and function) declarations.

use super::{
    declaration_end, is_import_marker, leading_block_start, next_significant, Match, TokenFinder,
};
use crate::token::{Token, TokenKind};

/// Modifiers that may precede `function` in a method declaration.
pub(crate) const METHOD_MODIFIERS: &[TokenKind] = &[
    TokenKind::Public,
    TokenKind::Protected,
    TokenKind::Private,
    TokenKind::Static,
    TokenKind::Abstract,
    TokenKind::Final,
];

/// Finds every named function declaration.
///
/// A match starts at the leading comment or first modifier and ends at the
/// closing `}` of the body, or at `;` for abstract and interface methods.
/// When the body is never closed the match runs to the last token. The
/// marker is the index of the `function` keyword. Closures are not matches,
/// and nothing inside a matched body is reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct MethodFinder;

impl TokenFinder for MethodFinder {
    fn find(&self, tokens: &[Token]) -> Vec<Match> {
        let mut matches = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            if is_function_declaration(tokens, i) {
                if let Some(end) = declaration_end(tokens, i) {
                    let start = leading_block_start(tokens, i, METHOD_MODIFIERS);
                    matches.push(Match::new(start, end).with_marker(i));
                    i = end;
                }
            }
            i += 1;
        }
        matches
    }
}

fn is_function_declaration(tokens: &[Token], index: usize) -> bool {
    if !tokens[index].is_kind(TokenKind::Function) {
        return false;
    }
    !is_import_marker(tokens, index) && method_name(tokens, index).is_some()
}

/// Index of the name after `function`. Reserved words are valid method
/// names (`function list()`), a `(` means a closure.
pub(crate) fn method_name(tokens: &[Token], function: usize) -> Option<usize> {
    let mut i = next_significant(tokens, function + 1)?;
    if tokens[i].is_symbol('&') {
        i = next_significant(tokens, i + 1)?;
    }
    match tokens[i].kind() {
        Some(k) if k == TokenKind::Identifier || k.is_reserved_word() => Some(i),
        _ => None,
    }
}
