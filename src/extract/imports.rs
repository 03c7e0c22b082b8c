//! Imported names from `use` statements.

use crate::finder::{TokenFinder, UseStatementsFinder};
use crate::token::{Token, TokenKind};

/// Every name imported by the unit's `use` statements.
///
/// `use A, B;` yields both names and `use A\{B, C};` expands to `A\B` and
/// `A\C`. `function`/`const` import markers and `as` aliases are dropped;
/// aliases are never substituted. A leading `\` is stripped. With `sort` the
/// result is ordered byte-wise; duplicates are kept.
pub fn get_use_dependencies(tokens: &[Token], sort: bool) -> Vec<String> {
    let mut names = Vec::new();
    for m in UseStatementsFinder.find(tokens) {
        let statement = m.tokens(tokens);
        // Between `use` and `;`.
        let inner = &statement[1..statement.len() - 1];
        names.extend(imported_names(inner));
    }
    if sort {
        names.sort();
    }
    names
}

fn imported_names(tokens: &[Token]) -> Vec<String> {
    let mut names = Vec::new();
    let mut prefix = String::new();
    let mut current = String::new();
    let mut aliased = false;

    let mut flush = |prefix: &str, current: &mut String, aliased: &mut bool| {
        if !current.is_empty() {
            let name = format!("{}{}", prefix, current);
            names.push(name.trim_start_matches('\\').to_string());
        }
        current.clear();
        *aliased = false;
    };

    for token in tokens.iter().filter(|t| !t.is_trivia()) {
        match token {
            Token::Symbol('{') => {
                prefix = std::mem::take(&mut current);
                aliased = false;
            }
            Token::Symbol('}') => {
                flush(&prefix, &mut current, &mut aliased);
                prefix.clear();
            }
            Token::Symbol(',') => flush(&prefix, &mut current, &mut aliased),
            Token::Typed { kind, .. } if *kind == TokenKind::As => aliased = true,
            Token::Typed { kind, .. }
                if current.is_empty() && matches!(kind, TokenKind::Function | TokenKind::Const) => {}
            _ if aliased => {}
            _ => token.write_text(&mut current),
        }
    }
    flush(&prefix, &mut current, &mut aliased);
    names
}
