//! Property declarations.

use crate::error::Result;
use crate::finder::{ClassPropertyFinder, TokenFinder};
use crate::sequence::{slice, start_end_lines, tokens_to_string};
use crate::token::{fetch, match_any, Token, TokenKind, TokenProp};

use super::info::{count_line_breaks, PropertyInfo};

/// Basic information on every property declared in the unit.
///
/// Modifiers and the doc comment are read from the part of the declaration
/// before the first variable. Lines cover the whole block, doc comment
/// included.
pub fn get_class_property_basic_info(tokens: &[Token]) -> Result<Vec<PropertyInfo>> {
    let mut properties = Vec::new();
    for m in ClassPropertyFinder.find(tokens) {
        let declaration = slice(tokens, m.start, m.end)?;
        let var = m.markers.first().map_or(m.start, |&v| v) - m.start;
        let head = &declaration[..var];

        let doc = fetch(head, &TokenProp::Kind(TokenKind::DocComment));
        let doc_comment = doc.map(Token::text);
        let comment_start_line = doc.and_then(Token::line);
        let comment_end_line = match (comment_start_line, &doc_comment) {
            (Some(line), Some(text)) => Some(line + count_line_breaks(text)),
            _ => None,
        };

        let (start_line, end_line) = start_end_lines(declaration)?;
        let var_name = declaration[var].text().trim_start_matches('$').to_string();

        properties.push(PropertyInfo {
            var_name,
            has_doc_comment: doc.is_some(),
            doc_comment,
            is_public: match_any(&TokenKind::Public.into(), head),
            is_protected: match_any(&TokenKind::Protected.into(), head),
            is_private: match_any(&TokenKind::Private.into(), head),
            is_static: match_any(&TokenKind::Static.into(), head),
            content: tokens_to_string(declaration),
            start_line,
            end_line,
            comment_start_line,
            comment_end_line,
        });
    }
    Ok(properties)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tokenize;

    #[test]
    fn test_private_static_with_doc() {
        let tokens = tokenize("<?php /** doc */ private static $count;");
        let props = get_class_property_basic_info(&tokens).unwrap();
        assert_eq!(props.len(), 1);
        let p = &props[0];
        assert_eq!(p.var_name, "count");
        assert!(p.is_private);
        assert!(p.is_static);
        assert!(!p.is_public && !p.is_protected);
        assert!(p.has_doc_comment);
        assert_eq!(p.doc_comment.as_deref(), Some("/** doc */"));
        assert_eq!(p.content, "/** doc */ private static $count;");
    }

    #[test]
    fn test_lines_in_class_body() {
        let src = "<?php
class A
{
    /**
     * Items.
     */
    protected array $items = [
        'a',
    ];

    public $plain;
}";
        let tokens = tokenize(src);
        let props = get_class_property_basic_info(&tokens).unwrap();
        assert_eq!(props.len(), 2);

        let items = &props[0];
        assert_eq!(items.var_name, "items");
        assert!(items.is_protected);
        assert_eq!((items.start_line, items.end_line), (4, 8));
        assert_eq!(items.comment_start_line, Some(4));
        assert_eq!(items.comment_end_line, Some(6));

        let plain = &props[1];
        assert!(plain.is_public);
        assert!(!plain.has_doc_comment);
        assert_eq!(plain.doc_comment, None);
        assert_eq!(plain.comment_start_line, None);
        assert_eq!((plain.start_line, plain.end_line), (11, 11));
    }
}
