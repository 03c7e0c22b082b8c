//! Token predicates ("token props").
//!
//! A prop is either a literal symbol, a token kind, or a set of props that
//! matches when any member does. A literal never matches a typed token and a
//! kind never matches a symbol.

use super::{Token, TokenKind};
use crate::error::{Result, TokenError};

/// Predicate over a single token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenProp {
    Literal(char),
    Kind(TokenKind),
    AnyOf(Vec<TokenProp>),
}

impl TokenProp {
    /// A set of props. An empty set can never match anything and is rejected.
    pub fn any_of(props: Vec<TokenProp>) -> Result<Self> {
        if props.is_empty() {
            return Err(TokenError::InvalidPredicate("empty set".to_string()));
        }
        Ok(TokenProp::AnyOf(props))
    }

    /// Shorthand for a set of kinds.
    pub fn kinds(kinds: &[TokenKind]) -> Self {
        TokenProp::AnyOf(kinds.iter().copied().map(TokenProp::Kind).collect())
    }

    /// Shorthand for a set of symbols.
    pub fn symbols(symbols: &[char]) -> Self {
        TokenProp::AnyOf(symbols.iter().copied().map(TokenProp::Literal).collect())
    }

    /// The default trimming prop.
    pub fn whitespace() -> Self {
        TokenProp::Kind(TokenKind::Whitespace)
    }

    /// Parse a textual prop: a single symbol char (`{`), a kind name
    /// (`T_WHITESPACE`), or a `|`-separated set of those.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.chars().count() == 1 {
            return Self::parse_single(s);
        }
        if s.contains('|') {
            let members = s
                .split('|')
                .map(Self::parse_single)
                .collect::<Result<Vec<_>>>()?;
            return Self::any_of(members);
        }
        Self::parse_single(s)
    }

    fn parse_single(s: &str) -> Result<Self> {
        let s = s.trim();
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_whitespace() && !c.is_alphanumeric() && c != '_' => {
                Ok(TokenProp::Literal(c))
            }
            _ => TokenKind::from_name(s)
                .map(TokenProp::Kind)
                .ok_or_else(|| TokenError::InvalidPredicate(format!("{:?}", s))),
        }
    }

    /// Whether `token` satisfies this prop.
    pub fn matches(&self, token: &Token) -> bool {
        match self {
            TokenProp::Literal(c) => token.is_symbol(*c),
            TokenProp::Kind(kind) => token.is_kind(*kind),
            TokenProp::AnyOf(props) => props.iter().any(|p| p.matches(token)),
        }
    }
}

impl From<char> for TokenProp {
    fn from(c: char) -> Self {
        TokenProp::Literal(c)
    }
}

impl From<TokenKind> for TokenProp {
    fn from(kind: TokenKind) -> Self {
        TokenProp::Kind(kind)
    }
}

/// Whether `token` satisfies `prop`.
pub fn matches(prop: &TokenProp, token: &Token) -> bool {
    prop.matches(token)
}

/// Whether any of `tokens` satisfies `prop`.
pub fn match_any(prop: &TokenProp, tokens: &[Token]) -> bool {
    tokens.iter().any(|t| prop.matches(t))
}

/// First token satisfying `prop`, in sequence order.
pub fn fetch<'a>(tokens: &'a [Token], prop: &TokenProp) -> Option<&'a Token> {
    tokens.iter().find(|t| prop.matches(t))
}

/// Every token satisfying `prop`, in sequence order.
pub fn fetch_all<'a>(tokens: &'a [Token], prop: &TokenProp) -> Vec<&'a Token> {
    tokens.iter().filter(|t| prop.matches(t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ws() -> Token {
        Token::typed(TokenKind::Whitespace, " ", 1)
    }

    #[test]
    fn test_literal_and_kind_never_cross() {
        let brace = Token::Symbol('{');
        let var = Token::typed(TokenKind::Variable, "$a", 1);

        assert!(matches(&'{'.into(), &brace));
        assert!(!matches(&'{'.into(), &var));
        assert!(matches(&TokenKind::Variable.into(), &var));
        assert!(!matches(&TokenKind::Variable.into(), &brace));
    }

    #[test]
    fn test_nested_sets() {
        let prop = TokenProp::AnyOf(vec![
            TokenProp::Literal(';'),
            TokenProp::kinds(&[TokenKind::Comment, TokenKind::DocComment]),
        ]);
        assert!(prop.matches(&Token::Symbol(';')));
        assert!(prop.matches(&Token::typed(TokenKind::DocComment, "/** x */", 1)));
        assert!(!prop.matches(&Token::Symbol(',')));
        assert!(!prop.matches(&ws()));
    }

    #[test]
    fn test_fetch_and_fetch_all() {
        let tokens = vec![
            ws(),
            Token::typed(TokenKind::Variable, "$a", 1),
            Token::Symbol(','),
            Token::typed(TokenKind::Variable, "$b", 2),
        ];
        let var = TokenProp::Kind(TokenKind::Variable);

        assert_eq!(fetch(&tokens, &var).map(|t| t.text()), Some("$a".to_string()));
        assert_eq!(fetch_all(&tokens, &var).len(), 2);
        assert!(match_any(&TokenProp::Literal(','), &tokens));
        assert!(fetch(&tokens, &TokenProp::Literal(';')).is_none());
    }

    #[test]
    fn test_parse() {
        assert_eq!(TokenProp::parse("{").unwrap(), TokenProp::Literal('{'));
        assert_eq!(TokenProp::parse("|").unwrap(), TokenProp::Literal('|'));
        assert_eq!(
            TokenProp::parse("T_WHITESPACE").unwrap(),
            TokenProp::Kind(TokenKind::Whitespace)
        );
        assert_eq!(
            TokenProp::parse("T_COMMENT|;").unwrap(),
            TokenProp::AnyOf(vec![
                TokenProp::Kind(TokenKind::Comment),
                TokenProp::Literal(';'),
            ])
        );
    }

    #[test]
    fn test_parse_rejects_unknown_shapes() {
        for bad in ["T_BOGUS", "ab", "a", "", "T_COMMENT|T_NOPE"] {
            assert!(
                matches!(TokenProp::parse(bad), Err(TokenError::InvalidPredicate(_))),
                "{:?} should be rejected",
                bad
            );
        }
        assert!(TokenProp::any_of(vec![]).is_err());
    }
}
