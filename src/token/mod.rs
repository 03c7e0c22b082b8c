//! Token model shared by every other module.
//!
//! A token is either a bare structural symbol (`{`, `;`, `,` ...) or a typed
//! triple of kind, literal text and 1-based source line. Sequences of tokens
//! are handled as plain slices and never mutated once produced.

mod lexer;
mod prop;

pub use lexer::tokenize;
pub use prop::{fetch, fetch_all, match_any, matches, TokenProp};

use std::fmt;

/// Semantic category of a typed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    OpenTag,
    OpenTagWithEcho,
    CloseTag,
    InlineHtml,
    Whitespace,
    Comment,
    DocComment,
    Attribute,
    Variable,
    Identifier,
    NsSeparator,
    StringLiteral,
    LNumber,
    DNumber,
    DoubleColon,
    ObjectOperator,
    DoubleArrow,
    Ellipsis,
    Operator,
    /// A type cast such as `(int)` or `( string )`.
    Cast,
    // Keywords the finders and the orchestrator look at.
    Namespace,
    Use,
    Class,
    Interface,
    Trait,
    Enum,
    Extends,
    Implements,
    Function,
    Fn,
    Public,
    Protected,
    Private,
    Static,
    Abstract,
    Final,
    Var,
    Const,
    Readonly,
    New,
    Return,
    As,
    /// Any other reserved word (`if`, `echo`, `foreach` ...).
    Keyword,
}

/// Every kind, in declaration order. Used for name lookups.
const ALL_KINDS: &[TokenKind] = &[
    TokenKind::OpenTag,
    TokenKind::OpenTagWithEcho,
    TokenKind::CloseTag,
    TokenKind::InlineHtml,
    TokenKind::Whitespace,
    TokenKind::Comment,
    TokenKind::DocComment,
    TokenKind::Attribute,
    TokenKind::Variable,
    TokenKind::Identifier,
    TokenKind::NsSeparator,
    TokenKind::StringLiteral,
    TokenKind::LNumber,
    TokenKind::DNumber,
    TokenKind::DoubleColon,
    TokenKind::ObjectOperator,
    TokenKind::DoubleArrow,
    TokenKind::Ellipsis,
    TokenKind::Operator,
    TokenKind::Cast,
    TokenKind::Namespace,
    TokenKind::Use,
    TokenKind::Class,
    TokenKind::Interface,
    TokenKind::Trait,
    TokenKind::Enum,
    TokenKind::Extends,
    TokenKind::Implements,
    TokenKind::Function,
    TokenKind::Fn,
    TokenKind::Public,
    TokenKind::Protected,
    TokenKind::Private,
    TokenKind::Static,
    TokenKind::Abstract,
    TokenKind::Final,
    TokenKind::Var,
    TokenKind::Const,
    TokenKind::Readonly,
    TokenKind::New,
    TokenKind::Return,
    TokenKind::As,
    TokenKind::Keyword,
];

/// Reserved words that have no dedicated kind.
const OTHER_KEYWORDS: &[&str] = &[
    "and", "array", "break", "callable", "case", "catch", "clone", "continue", "declare",
    "default", "do", "echo", "else", "elseif", "empty", "enddeclare", "endfor", "endforeach",
    "endif", "endswitch", "endwhile", "eval", "exit", "die", "finally", "for", "foreach",
    "global", "goto", "if", "include", "include_once", "instanceof", "insteadof", "isset",
    "list", "match", "or", "print", "require", "require_once", "switch", "throw", "try",
    "unset", "while", "xor", "yield",
];

impl TokenKind {
    /// Conventional `T_*` name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::OpenTag => "T_OPEN_TAG",
            TokenKind::OpenTagWithEcho => "T_OPEN_TAG_WITH_ECHO",
            TokenKind::CloseTag => "T_CLOSE_TAG",
            TokenKind::InlineHtml => "T_INLINE_HTML",
            TokenKind::Whitespace => "T_WHITESPACE",
            TokenKind::Comment => "T_COMMENT",
            TokenKind::DocComment => "T_DOC_COMMENT",
            TokenKind::Attribute => "T_ATTRIBUTE",
            TokenKind::Variable => "T_VARIABLE",
            TokenKind::Identifier => "T_STRING",
            TokenKind::NsSeparator => "T_NS_SEPARATOR",
            TokenKind::StringLiteral => "T_CONSTANT_ENCAPSED_STRING",
            TokenKind::LNumber => "T_LNUMBER",
            TokenKind::DNumber => "T_DNUMBER",
            TokenKind::DoubleColon => "T_DOUBLE_COLON",
            TokenKind::ObjectOperator => "T_OBJECT_OPERATOR",
            TokenKind::DoubleArrow => "T_DOUBLE_ARROW",
            TokenKind::Ellipsis => "T_ELLIPSIS",
            TokenKind::Operator => "T_OPERATOR",
            TokenKind::Cast => "T_CAST",
            TokenKind::Namespace => "T_NAMESPACE",
            TokenKind::Use => "T_USE",
            TokenKind::Class => "T_CLASS",
            TokenKind::Interface => "T_INTERFACE",
            TokenKind::Trait => "T_TRAIT",
            TokenKind::Enum => "T_ENUM",
            TokenKind::Extends => "T_EXTENDS",
            TokenKind::Implements => "T_IMPLEMENTS",
            TokenKind::Function => "T_FUNCTION",
            TokenKind::Fn => "T_FN",
            TokenKind::Public => "T_PUBLIC",
            TokenKind::Protected => "T_PROTECTED",
            TokenKind::Private => "T_PRIVATE",
            TokenKind::Static => "T_STATIC",
            TokenKind::Abstract => "T_ABSTRACT",
            TokenKind::Final => "T_FINAL",
            TokenKind::Var => "T_VAR",
            TokenKind::Const => "T_CONST",
            TokenKind::Readonly => "T_READONLY",
            TokenKind::New => "T_NEW",
            TokenKind::Return => "T_RETURN",
            TokenKind::As => "T_AS",
            TokenKind::Keyword => "T_KEYWORD",
        }
    }

    /// Look a kind up by its `T_*` name.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_KINDS.iter().copied().find(|k| k.name() == name)
    }

    /// Map a word to its keyword kind. Reserved words are case-insensitive.
    /// Returns `None` for plain identifiers.
    pub fn keyword(word: &str) -> Option<Self> {
        let lower = word.to_ascii_lowercase();
        let kind = match lower.as_str() {
            "namespace" => TokenKind::Namespace,
            "use" => TokenKind::Use,
            "class" => TokenKind::Class,
            "interface" => TokenKind::Interface,
            "trait" => TokenKind::Trait,
            "enum" => TokenKind::Enum,
            "extends" => TokenKind::Extends,
            "implements" => TokenKind::Implements,
            "function" => TokenKind::Function,
            "fn" => TokenKind::Fn,
            "public" => TokenKind::Public,
            "protected" => TokenKind::Protected,
            "private" => TokenKind::Private,
            "static" => TokenKind::Static,
            "abstract" => TokenKind::Abstract,
            "final" => TokenKind::Final,
            "var" => TokenKind::Var,
            "const" => TokenKind::Const,
            "readonly" => TokenKind::Readonly,
            "new" => TokenKind::New,
            "return" => TokenKind::Return,
            "as" => TokenKind::As,
            other if OTHER_KEYWORDS.contains(&other) => TokenKind::Keyword,
            _ => return None,
        };
        Some(kind)
    }

    /// Whether this kind is a comment of either flavour.
    pub fn is_comment(&self) -> bool {
        matches!(self, TokenKind::Comment | TokenKind::DocComment)
    }

    /// Whether this kind is a reserved word.
    pub fn is_reserved_word(&self) -> bool {
        let first = ALL_KINDS
            .iter()
            .position(|k| *k == TokenKind::Namespace)
            .unwrap_or(ALL_KINDS.len());
        ALL_KINDS[first..].contains(self)
    }

    /// Whether this kind opens a class-like declaration.
    pub fn is_class_like(&self) -> bool {
        matches!(
            self,
            TokenKind::Class | TokenKind::Interface | TokenKind::Trait | TokenKind::Enum
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One lexical unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A single structural character with no kind and no line.
    Symbol(char),
    /// A kind, the exact source text and the 1-based line it starts on.
    Typed {
        kind: TokenKind,
        text: String,
        line: usize,
    },
}

impl Token {
    /// Build a typed token.
    pub fn typed(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Token::Typed {
            kind,
            text: text.into(),
            line,
        }
    }

    /// The literal source text of this token.
    pub fn text(&self) -> String {
        match self {
            Token::Symbol(c) => c.to_string(),
            Token::Typed { text, .. } => text.clone(),
        }
    }

    /// Append the literal source text to `out` without allocating.
    pub fn write_text(&self, out: &mut String) {
        match self {
            Token::Symbol(c) => out.push(*c),
            Token::Typed { text, .. } => out.push_str(text),
        }
    }

    pub fn kind(&self) -> Option<TokenKind> {
        match self {
            Token::Symbol(_) => None,
            Token::Typed { kind, .. } => Some(*kind),
        }
    }

    pub fn line(&self) -> Option<usize> {
        match self {
            Token::Symbol(_) => None,
            Token::Typed { line, .. } => Some(*line),
        }
    }

    pub fn is_kind(&self, kind: TokenKind) -> bool {
        self.kind() == Some(kind)
    }

    pub fn is_symbol(&self, symbol: char) -> bool {
        matches!(self, Token::Symbol(c) if *c == symbol)
    }

    /// Whitespace or a comment: tokens that never change what a finder sees.
    pub fn is_trivia(&self) -> bool {
        matches!(self.kind(), Some(k) if k == TokenKind::Whitespace || k.is_comment())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Symbol(c) => write!(f, "{}", c),
            Token::Typed { text, .. } => write!(f, "{}", text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_round_trip() {
        for kind in ALL_KINDS {
            assert_eq!(TokenKind::from_name(kind.name()), Some(*kind));
        }
        assert_eq!(TokenKind::from_name("T_NOPE"), None);
    }

    #[test]
    fn test_keyword_lookup_is_case_insensitive() {
        assert_eq!(TokenKind::keyword("Class"), Some(TokenKind::Class));
        assert_eq!(TokenKind::keyword("FUNCTION"), Some(TokenKind::Function));
        assert_eq!(TokenKind::keyword("foreach"), Some(TokenKind::Keyword));
        assert_eq!(TokenKind::keyword("Foo"), None);
    }

    #[test]
    fn test_reserved_words() {
        assert!(TokenKind::Namespace.is_reserved_word());
        assert!(TokenKind::Keyword.is_reserved_word());
        assert!(!TokenKind::Identifier.is_reserved_word());
        assert!(TokenKind::Trait.is_class_like());
        assert!(!TokenKind::Function.is_class_like());
    }

    #[test]
    fn test_token_accessors() {
        let sym = Token::Symbol('{');
        assert_eq!(sym.text(), "{");
        assert_eq!(sym.kind(), None);
        assert_eq!(sym.line(), None);
        assert!(sym.is_symbol('{'));

        let typed = Token::typed(TokenKind::Variable, "$a", 3);
        assert_eq!(typed.text(), "$a");
        assert_eq!(typed.line(), Some(3));
        assert!(typed.is_kind(TokenKind::Variable));
        assert!(!typed.is_symbol('$'));
    }
}
