//! Finders: lexical recognizers for structural constructs.
//!
//! Each finder performs one linear scan of a token sequence and returns the
//! index spans of every construct it recognizes, in sequence order and
//! without overlap. Matching is lexical: a fixed local pattern of kinds and
//! symbols, with no attempt to validate the surrounding program.
//!
//! # Adding a New Finder
//!
//! Implement [`TokenFinder`] on a new type in this directory and export it
//! here. Shared scanning helpers (statement starts, declaration ends) live
//! at the bottom of this file.

mod class_bracket;
mod class_name;
mod interfaces;
mod method;
mod namespace;
mod parent_class;
mod property;
mod use_statements;

pub use class_bracket::{class_bodies, ClassOpeningBracketFinder};
pub use class_name::ClassNameFinder;
pub use interfaces::InterfaceFinder;
pub use method::MethodFinder;
pub use namespace::NamespaceFinder;
pub use parent_class::ParentClassNameFinder;
pub use property::ClassPropertyFinder;
pub use use_statements::UseStatementsFinder;

use serde::Serialize;

use crate::cursor::TokenCursor;
use crate::navigate::move_to_corresponding_end;
use crate::sequence::tokens_to_string;
use crate::token::{Token, TokenKind};

/// An inclusive span `[start, end]` over a token sequence.
///
/// `markers` holds extra indices whose meaning depends on the finder that
/// produced the match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub start: usize,
    pub end: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<usize>,
}

impl Match {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self {
            start,
            end,
            markers: Vec::new(),
        }
    }

    pub fn with_marker(mut self, marker: usize) -> Self {
        self.markers.push(marker);
        self
    }

    /// The tokens covered by this match.
    pub fn tokens<'a>(&self, tokens: &'a [Token]) -> &'a [Token] {
        tokens.get(self.start..=self.end).unwrap_or(&[])
    }
}

/// A recognizer for one structural construct.
pub trait TokenFinder: Send + Sync {
    /// Return every match in `tokens`, in sequence order.
    fn find(&self, tokens: &[Token]) -> Vec<Match>;
}

/// Reconstruct the literal source text of each match.
pub fn matches_to_strings(matches: &[Match], tokens: &[Token]) -> Vec<String> {
    matches
        .iter()
        .map(|m| tokens_to_string(m.tokens(tokens)))
        .collect()
}

// =============================================================================
// Shared scanning helpers
// =============================================================================

/// First index at or after `from` that is neither whitespace nor a comment.
pub(crate) fn next_significant(tokens: &[Token], from: usize) -> Option<usize> {
    (from..tokens.len()).find(|&i| !tokens[i].is_trivia())
}

/// Last index before `before` that is neither whitespace nor a comment.
pub(crate) fn prev_significant(tokens: &[Token], before: usize) -> Option<usize> {
    (0..before.min(tokens.len()))
        .rev()
        .find(|&i| !tokens[i].is_trivia())
}

/// Whether the token at `index` begins a statement.
///
/// Attribute groups (`#[...]`) in front of a declaration are looked through.
pub(crate) fn is_statement_start(tokens: &[Token], index: usize) -> bool {
    match prev_significant(tokens, index) {
        None => true,
        Some(p) => {
            let prev = &tokens[p];
            if prev.is_symbol(']') {
                return match attribute_group_start(tokens, p) {
                    Some(open) => is_statement_start(tokens, open),
                    None => false,
                };
            }
            prev.is_symbol(';')
                || prev.is_symbol('{')
                || prev.is_symbol('}')
                || prev.is_kind(TokenKind::OpenTag)
                || prev.is_kind(TokenKind::CloseTag)
        }
    }
}

/// Index of the `#[` opening the attribute group closed at `close`.
fn attribute_group_start(tokens: &[Token], close: usize) -> Option<usize> {
    let mut depth = 1usize;
    for i in (0..close).rev() {
        let token = &tokens[i];
        if token.is_symbol(']') {
            depth += 1;
        } else if token.is_symbol('[') || token.is_kind(TokenKind::Attribute) {
            depth -= 1;
            if depth == 0 {
                return token.is_kind(TokenKind::Attribute).then_some(i);
            }
        }
    }
    None
}

/// Whether the `function` or `const` keyword at `index` is the marker of a
/// `use function` / `use const` import rather than a declaration.
pub(crate) fn is_import_marker(tokens: &[Token], index: usize) -> bool {
    prev_significant(tokens, index).map_or(false, |p| tokens[p].is_kind(TokenKind::Use))
}

/// Whether `token` can be part of a (possibly qualified) name.
pub(crate) fn is_name_part(token: &Token) -> bool {
    matches!(
        token.kind(),
        Some(k) if k == TokenKind::Identifier || k == TokenKind::NsSeparator || k.is_reserved_word()
    )
}

/// Whether the class-like keyword at `index` declares a named type.
///
/// Rules out `Foo::class` constants and anonymous `new class` expressions.
pub(crate) fn is_named_declaration(tokens: &[Token], index: usize) -> bool {
    if !tokens[index].kind().map_or(false, |k| k.is_class_like()) {
        return false;
    }
    if let Some(p) = prev_significant(tokens, index) {
        if tokens[p].is_kind(TokenKind::DoubleColon) || tokens[p].is_kind(TokenKind::New) {
            return false;
        }
    }
    declared_name(tokens, index).is_some()
}

/// Index of the name following a declaring keyword (`class`, `function` ...).
pub(crate) fn declared_name(tokens: &[Token], keyword: usize) -> Option<usize> {
    let mut i = next_significant(tokens, keyword + 1)?;
    if tokens[i].is_symbol('&') {
        i = next_significant(tokens, i + 1)?;
    }
    if tokens[i].is_kind(TokenKind::Identifier) || tokens[i].is_kind(TokenKind::Enum) {
        Some(i)
    } else {
        None
    }
}

/// Index of the first token at or after `from` matching `pred`.
pub(crate) fn find_from(
    tokens: &[Token],
    from: usize,
    pred: impl Fn(&Token) -> bool,
) -> Option<usize> {
    (from..tokens.len()).find(|&i| pred(&tokens[i]))
}

/// Where a function declaration starting at the `function` keyword ends.
///
/// The end is the closing `}` of the body, or the `;` of a bodiless
/// declaration. When a delimiter is never closed the declaration runs to the
/// last token, so callers re-walking it hit the mismatch themselves.
/// Returns `None` when no parameter list follows the keyword.
pub(crate) fn declaration_end(tokens: &[Token], function: usize) -> Option<usize> {
    let last = tokens.len().checked_sub(1)?;
    let params = find_from(tokens, function + 1, |t| t.is_symbol('('))?;

    let mut cursor = TokenCursor::new(tokens);
    cursor.seek(params);
    if move_to_corresponding_end(&mut cursor, None).is_err() {
        return Some(last);
    }
    let after_params = cursor.key()? + 1;

    let Some(stop) = find_from(tokens, after_params, |t| t.is_symbol('{') || t.is_symbol(';'))
    else {
        return Some(last);
    };
    if tokens[stop].is_symbol(';') {
        return Some(stop);
    }
    cursor.seek(stop);
    match move_to_corresponding_end(&mut cursor, None) {
        Ok(()) => cursor.key().or(Some(last)),
        Err(_) => Some(last),
    }
}

/// Walk back from `index` over modifiers and trivia, returning the earliest
/// non-whitespace index of that run (a leading comment, if any).
pub(crate) fn leading_block_start(tokens: &[Token], index: usize, modifiers: &[TokenKind]) -> usize {
    let mut start = index;
    let mut i = index;
    while i > 0 {
        let prev = &tokens[i - 1];
        let is_modifier = prev.kind().map_or(false, |k| modifiers.contains(&k));
        if !(prev.is_trivia() || is_modifier) {
            break;
        }
        i -= 1;
        if !prev.is_kind(TokenKind::Whitespace) {
            start = i;
        }
    }
    start
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tokenize;

    #[test]
    fn test_matches_to_strings() {
        let tokens = tokenize("<?php $a = 1; $b = 2;");
        let matches = vec![Match::new(1, 6), Match::new(8, 13)];
        assert_eq!(
            matches_to_strings(&matches, &tokens),
            vec!["$a = 1;".to_string(), "$b = 2;".to_string()]
        );
    }

    #[test]
    fn test_declaration_end() {
        let tokens = tokenize("<?php function a($x) { if ($x) { return 1; } } $tail;");
        let f = 1;
        let end = declaration_end(&tokens, f).unwrap();
        assert!(tokens[end].is_symbol('}'));
        assert!(tokens[end + 2].is_kind(TokenKind::Variable));
    }

    #[test]
    fn test_declaration_end_bodiless() {
        let tokens = tokenize("<?php abstract function a(): array; $tail;");
        let f = tokens.iter().position(|t| t.is_kind(TokenKind::Function)).unwrap();
        let end = declaration_end(&tokens, f).unwrap();
        assert!(tokens[end].is_symbol(';'));
        assert_eq!(end, 11);
    }

    #[test]
    fn test_declaration_end_truncated() {
        let tokens = tokenize("<?php function a() { return 1;");
        assert_eq!(declaration_end(&tokens, 1), Some(tokens.len() - 1));
    }

    #[test]
    fn test_named_declaration() {
        let tokens = tokenize("<?php $x = Foo::class; $y = new class {}; class Bar {}");
        let classes: Vec<_> = tokens
            .iter()
            .enumerate()
            .filter(|(i, _)| is_named_declaration(&tokens, *i))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(classes.len(), 1);
        assert_eq!(tokens[declared_name(&tokens, classes[0]).unwrap()].text(), "Bar");
    }

    #[test]
    fn test_statement_start_after_attributes() {
        let tokens = tokenize("<?php class A {\n    #[ORM\\Column(type: [1, 2])]\n    #[Id] private $id;\n}");
        let private = tokens.iter().position(|t| t.is_kind(TokenKind::Private)).unwrap();
        assert!(is_statement_start(&tokens, private));

        let tokens = tokenize("<?php $a = $b[0] private");
        let private = tokens.iter().position(|t| t.is_kind(TokenKind::Private)).unwrap();
        assert!(!is_statement_start(&tokens, private));
    }

    #[test]
    fn test_import_marker() {
        let tokens = tokenize("<?php use function strlen; function f() {}");
        let functions: Vec<_> = tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_kind(TokenKind::Function))
            .map(|(i, _)| is_import_marker(&tokens, i))
            .collect();
        assert_eq!(functions, vec![true, false]);
    }

    #[test]
    fn test_leading_block_start() {
        let tokens = tokenize("<?php ; /** doc */\n  public static function f() {}");
        let f = tokens.iter().position(|t| t.is_kind(TokenKind::Function)).unwrap();
        let start = leading_block_start(&tokens, f, &[TokenKind::Public, TokenKind::Static]);
        assert!(tokens[start].is_kind(TokenKind::DocComment));
    }
}
