//! Top-level `use` import statements.

use super::{class_bodies, find_from, is_statement_start, Match, TokenFinder};
use crate::token::{Token, TokenKind};

/// Finds every import statement, from `use` to its terminating `;`.
///
/// `use` inside a class body imports a trait and `use (...)` after a closure
/// captures variables; neither is reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct UseStatementsFinder;

impl TokenFinder for UseStatementsFinder {
    fn find(&self, tokens: &[Token]) -> Vec<Match> {
        let bodies = class_bodies(tokens);
        let mut body = bodies.iter().peekable();

        let mut matches = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            while body.peek().map_or(false, |(_, close)| *close < i) {
                body.next();
            }
            if let Some(&&(open, close)) = body.peek() {
                if open <= i {
                    i = close + 1;
                    continue;
                }
            }

            if tokens[i].is_kind(TokenKind::Use) && is_statement_start(tokens, i) {
                match find_from(tokens, i + 1, |t| t.is_symbol(';')) {
                    Some(end) => {
                        matches.push(Match::new(i, end));
                        i = end;
                    }
                    None => break,
                }
            }
            i += 1;
        }
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finder::matches_to_strings;
    use crate::token::tokenize;

    #[test]
    fn test_imports_only() {
        let src = "<?php
namespace App;

use Lib\\Foo;
use Lib\\{Bar, Baz as Q};

class A {
    use SomeTrait;
    public function f() { return function () use ($x) { return $x; }; }
}
";
        let tokens = tokenize(src);
        let texts = matches_to_strings(&UseStatementsFinder.find(&tokens), &tokens);
        assert_eq!(texts, vec!["use Lib\\Foo;", "use Lib\\{Bar, Baz as Q};"]);
    }

    #[test]
    fn test_unterminated_import_is_dropped() {
        let tokens = tokenize("<?php use Lib\\Foo");
        assert!(UseStatementsFinder.find(&tokens).is_empty());
    }
}
