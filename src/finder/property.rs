//! Class property declarations.

use super::{
    declaration_end, is_import_marker, is_statement_start, leading_block_start, Match,
    TokenFinder,
};
use crate::cursor::TokenCursor;
use crate::navigate::move_to_corresponding_end;
use crate::token::{Token, TokenKind};

const PROPERTY_MODIFIERS: &[TokenKind] = &[
    TokenKind::Public,
    TokenKind::Protected,
    TokenKind::Private,
    TokenKind::Static,
    TokenKind::Var,
    TokenKind::Readonly,
];

/// Finds property declarations such as `/** doc */ private static ?int $n = 0;`.
///
/// A match starts at the leading comment (or first modifier) and ends at the
/// terminating `;`. The marker is the index of the first variable. Function
/// bodies are skipped, so `static $cache;` inside a method is not reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassPropertyFinder;

impl TokenFinder for ClassPropertyFinder {
    fn find(&self, tokens: &[Token]) -> Vec<Match> {
        let mut matches = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            let token = &tokens[i];
            if token.is_kind(TokenKind::Function) && !is_import_marker(tokens, i) {
                if let Some(end) = declaration_end(tokens, i) {
                    i = end + 1;
                    continue;
                }
            } else if is_modifier(token) && is_statement_start(tokens, i) {
                match declaration(tokens, i) {
                    Scan::Property { var, end } => {
                        let start = leading_block_start(tokens, i, &[]);
                        matches.push(Match::new(start, end).with_marker(var));
                        i = end + 1;
                        continue;
                    }
                    Scan::NotAProperty => {}
                    Scan::Truncated => break,
                }
            }
            i += 1;
        }
        matches
    }
}

enum Scan {
    Property { var: usize, end: usize },
    NotAProperty,
    Truncated,
}

fn is_modifier(token: &Token) -> bool {
    token.kind().map_or(false, |k| PROPERTY_MODIFIERS.contains(&k))
}

/// Tokens allowed between the modifiers and the variable: type declarations.
fn is_type_part(token: &Token) -> bool {
    if token.is_trivia() || is_modifier(token) {
        return true;
    }
    match token {
        Token::Symbol(c) => matches!(c, '?' | '|' | '&' | '(' | ')'),
        Token::Typed { kind, .. } => matches!(
            kind,
            TokenKind::Identifier | TokenKind::NsSeparator | TokenKind::Keyword
        ),
    }
}

/// Scan a statement starting at a modifier up to its `;`.
fn declaration(tokens: &[Token], start: usize) -> Scan {
    let mut var = None;
    let mut cursor = TokenCursor::new(tokens);
    cursor.seek(start);

    while let Some(token) = cursor.current() {
        let index = cursor.key().unwrap_or(start);
        if var.is_none() {
            if token.is_kind(TokenKind::Variable) {
                var = Some(index);
            } else if !is_type_part(token) {
                return Scan::NotAProperty;
            }
        } else if token.is_symbol(';') {
            return match var {
                Some(var) => Scan::Property { var, end: index },
                None => Scan::NotAProperty,
            };
        } else if token.is_symbol('(') || token.is_symbol('[') || token.is_symbol('{') {
            if move_to_corresponding_end(&mut cursor, None).is_err() {
                return Scan::Truncated;
            }
        } else if token.is_symbol('}') {
            return Scan::NotAProperty;
        }
        cursor.next();
    }
    Scan::Truncated
}
