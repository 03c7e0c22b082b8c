//! Names of declared classes.

use super::{declared_name, is_named_declaration, Match, TokenFinder};
use crate::token::{Token, TokenKind};

/// Finds the name of every declared class.
///
/// Interfaces and traits are only reported when enabled. Each match spans
/// the single name token.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassNameFinder {
    pub include_interfaces: bool,
    pub include_traits: bool,
}

impl ClassNameFinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include_interfaces(mut self, include: bool) -> Self {
        self.include_interfaces = include;
        self
    }

    pub fn include_traits(mut self, include: bool) -> Self {
        self.include_traits = include;
        self
    }

    fn wants(&self, token: &Token) -> bool {
        match token.kind() {
            Some(TokenKind::Class) => true,
            Some(TokenKind::Interface) => self.include_interfaces,
            Some(TokenKind::Trait) => self.include_traits,
            _ => false,
        }
    }
}

impl TokenFinder for ClassNameFinder {
    fn find(&self, tokens: &[Token]) -> Vec<Match> {
        let mut matches = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            if self.wants(&tokens[i]) && is_named_declaration(tokens, i) {
                if let Some(name) = declared_name(tokens, i) {
                    matches.push(Match::new(name, name));
                    i = name;
                }
            }
            i += 1;
        }
        matches
    }
}
