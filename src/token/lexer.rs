//! Regex-driven tokenizer for PHP-style sources.
//!
//! Produces the flat token stream the rest of the crate consumes. The output
//! is lossless: concatenating every token's text gives back the input.
//!
//! Not supported: short open tags (`<?` alone), heredoc/nowdoc, and string
//! interpolation (a double-quoted string is a single literal token).

use lazy_static::lazy_static;
use regex::Regex;

use super::{Token, TokenKind};

#[derive(Debug, Clone, Copy)]
enum Rule {
    CloseTag,
    Whitespace,
    DocComment,
    BlockComment,
    Attribute,
    LineComment,
    Variable,
    Word,
    DNumber,
    LNumber,
    StringLiteral,
    Cast,
    Operator,
    NsSeparator,
}

lazy_static! {
    static ref OPEN_TAG_RE: Regex = Regex::new(r"<\?(?:(?i:php)(?:\r\n|\s)?|=)").unwrap();

    // Tried in order; the first rule matching at the current offset wins.
    static ref RULES: Vec<(Rule, Regex)> = [
        (Rule::CloseTag, r"^\?>(?:\r\n|\n)?"),
        (Rule::Whitespace, r"^\s+"),
        (Rule::DocComment, r"^/\*\*\s[\s\S]*?(?:\*/|\z)"),
        (Rule::BlockComment, r"^/\*[\s\S]*?(?:\*/|\z)"),
        (Rule::Attribute, r"^#\["),
        (Rule::LineComment, r"^(?://|#)[^\n]*\n?"),
        (Rule::Variable, r"^\$[^\W\d]\w*"),
        (Rule::Word, r"^[^\W\d]\w*"),
        (
            Rule::DNumber,
            r"^(?:(?:\d[\d_]*)?\.\d[\d_]*(?:[eE][+-]?\d+)?|\d[\d_]*[eE][+-]?\d+)",
        ),
        (Rule::LNumber, r"^(?:0[xX][0-9a-fA-F_]+|0[bB][01_]+|\d[\d_]*)"),
        (
            Rule::StringLiteral,
            r#"^(?:'(?:[^'\\]|\\[\s\S])*'|"(?:[^"\\]|\\[\s\S])*")"#,
        ),
        (
            Rule::Cast,
            r"^\([ \t]*(?i:int|integer|bool|boolean|float|double|real|string|binary|array|object|unset)[ \t]*\)",
        ),
        (
            Rule::Operator,
            r"^(?:\?->|<=>|\*\*=|\?\?=|<<=|>>=|===|!==|\.\.\.|::|->|=>|<<|>>|<=|>=|==|!=|<>|\+\+|--|\+=|-=|\*=|/=|\.=|%=|&=|\|=|\^=|&&|\|\||\?\?|\*\*)",
        ),
        (Rule::NsSeparator, r"^\\"),
    ]
    .into_iter()
    .map(|(rule, pattern)| (rule, Regex::new(pattern).unwrap()))
    .collect();
}

/// Tokenize a complete source file.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new();
    let mut pos = 0;
    let mut in_code = false;

    while pos < source.len() {
        let rest = &source[pos..];

        if !in_code {
            match OPEN_TAG_RE.find(rest) {
                Some(tag) => {
                    if tag.start() > 0 {
                        lexer.push_typed(TokenKind::InlineHtml, &rest[..tag.start()]);
                    }
                    let kind = if tag.as_str() == "<?=" {
                        TokenKind::OpenTagWithEcho
                    } else {
                        TokenKind::OpenTag
                    };
                    lexer.push_typed(kind, tag.as_str());
                    pos += tag.end();
                    in_code = true;
                }
                None => {
                    lexer.push_typed(TokenKind::InlineHtml, rest);
                    pos = source.len();
                }
            }
            continue;
        }

        match match_rule(rest) {
            Some((rule, len)) => {
                let text = &rest[..len];
                if let Rule::CloseTag = rule {
                    in_code = false;
                }
                lexer.push_typed(kind_for(rule, text), text);
                pos += len;
            }
            None => {
                // Anything else is a bare symbol, one char at a time.
                let c = rest.chars().next().unwrap_or('\0');
                lexer.tokens.push(Token::Symbol(c));
                if c == '\n' {
                    lexer.line += 1;
                }
                pos += c.len_utf8().max(1);
            }
        }
    }

    lexer.tokens
}

fn match_rule(rest: &str) -> Option<(Rule, usize)> {
    RULES.iter().find_map(|(rule, re)| {
        re.find(rest)
            .filter(|m| m.end() > 0)
            .map(|m| (*rule, m.end()))
    })
}

fn kind_for(rule: Rule, text: &str) -> TokenKind {
    match rule {
        Rule::CloseTag => TokenKind::CloseTag,
        Rule::Whitespace => TokenKind::Whitespace,
        Rule::DocComment => TokenKind::DocComment,
        Rule::BlockComment | Rule::LineComment => TokenKind::Comment,
        Rule::Attribute => TokenKind::Attribute,
        Rule::Variable => TokenKind::Variable,
        Rule::Word => TokenKind::keyword(text).unwrap_or(TokenKind::Identifier),
        Rule::DNumber => TokenKind::DNumber,
        Rule::LNumber => TokenKind::LNumber,
        Rule::StringLiteral => TokenKind::StringLiteral,
        Rule::Operator => match text {
            "::" => TokenKind::DoubleColon,
            "->" | "?->" => TokenKind::ObjectOperator,
            "=>" => TokenKind::DoubleArrow,
            "..." => TokenKind::Ellipsis,
            _ => TokenKind::Operator,
        },
        Rule::Cast => TokenKind::Cast,
        Rule::NsSeparator => TokenKind::NsSeparator,
    }
}

struct Lexer {
    tokens: Vec<Token>,
    line: usize,
}

impl Lexer {
    fn new() -> Self {
        Self {
            tokens: Vec::new(),
            line: 1,
        }
    }

    fn push_typed(&mut self, kind: TokenKind, text: &str) {
        self.tokens.push(Token::typed(kind, text, self.line));
        self.line += text.matches('\n').count();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::tokens_to_string;

    fn kinds(tokens: &[Token]) -> Vec<Option<TokenKind>> {
        tokens.iter().map(|t| t.kind()).collect()
    }

    #[test]
    fn test_lossless() {
        let src = "<html>\n<?php\nnamespace App\\Models;\n\n/** doc */\nclass Foo extends Bar {\n    private $a = 'x'; // note\n    public function run($a) { return $a->b ?? 1.5; }\n}\n?>\ntail";
        let tokens = tokenize(src);
        assert_eq!(tokens_to_string(&tokens), src);
    }

    #[test]
    fn test_inline_html_and_open_tag() {
        let tokens = tokenize("<p>hi</p><?php echo 1;");
        assert_eq!(tokens[0], Token::typed(TokenKind::InlineHtml, "<p>hi</p>", 1));
        assert_eq!(tokens[1], Token::typed(TokenKind::OpenTag, "<?php ", 1));
        assert_eq!(tokens[2].kind(), Some(TokenKind::Keyword));
    }

    #[test]
    fn test_keywords_identifiers_and_symbols() {
        let tokens = tokenize("<?php class Foo {}");
        assert_eq!(
            kinds(&tokens),
            vec![
                Some(TokenKind::OpenTag),
                Some(TokenKind::Class),
                Some(TokenKind::Whitespace),
                Some(TokenKind::Identifier),
                Some(TokenKind::Whitespace),
                None,
                None,
            ]
        );
        assert!(tokens[5].is_symbol('{'));
        assert!(tokens[6].is_symbol('}'));
    }

    #[test]
    fn test_comments() {
        let tokens = tokenize("<?php\n// line\n/** doc */ /**/ # hash\n");
        let comments: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind().map(|k| k.is_comment()).unwrap_or(false))
            .map(|t| (t.kind().unwrap(), t.text()))
            .collect();
        assert_eq!(
            comments,
            vec![
                (TokenKind::Comment, "// line\n".to_string()),
                (TokenKind::DocComment, "/** doc */".to_string()),
                (TokenKind::Comment, "/**/".to_string()),
                (TokenKind::Comment, "# hash\n".to_string()),
            ]
        );
    }

    #[test]
    fn test_attribute_is_not_a_comment() {
        let tokens = tokenize("<?php #[Route('/')]");
        assert_eq!(tokens[1], Token::typed(TokenKind::Attribute, "#[", 1));
    }

    #[test]
    fn test_line_numbers() {
        let tokens = tokenize("<?php\n$a;\n/* one\ntwo */\n$b;");
        let vars: Vec<_> = tokens
            .iter()
            .filter(|t| t.is_kind(TokenKind::Variable))
            .map(|t| (t.text(), t.line().unwrap()))
            .collect();
        assert_eq!(vars, vec![("$a".to_string(), 2), ("$b".to_string(), 5)]);
    }

    #[test]
    fn test_operators_and_numbers() {
        let tokens = tokenize("<?php Foo::class; $a->b => 1.5e3 ... 0x1F");
        let typed: Vec<_> = tokens
            .iter()
            .filter_map(|t| t.kind())
            .filter(|k| *k != TokenKind::Whitespace)
            .collect();
        assert_eq!(
            typed,
            vec![
                TokenKind::OpenTag,
                TokenKind::Identifier,
                TokenKind::DoubleColon,
                TokenKind::Class,
                TokenKind::Variable,
                TokenKind::ObjectOperator,
                TokenKind::Identifier,
                TokenKind::DoubleArrow,
                TokenKind::DNumber,
                TokenKind::Ellipsis,
                TokenKind::LNumber,
            ]
        );
    }

    #[test]
    fn test_casts() {
        let tokens = tokenize("<?php $a = (int) $b . ( String )$c . ($d);");
        let casts: Vec<_> = tokens
            .iter()
            .filter(|t| t.is_kind(TokenKind::Cast))
            .map(|t| t.text())
            .collect();
        assert_eq!(casts, vec!["(int)".to_string(), "( String )".to_string()]);
        assert!(tokens.iter().any(|t| t.is_symbol('(')));
        assert_eq!(TokenKind::from_name("T_CAST"), Some(TokenKind::Cast));
    }
}
