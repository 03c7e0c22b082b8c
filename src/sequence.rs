//! Slicing, trimming, splitting and stringifying token sequences.

use crate::cursor::TokenCursor;
use crate::error::{Result, TokenError};
use crate::token::{Token, TokenProp};

/// Inclusive sub-slice `tokens[start..=end]`.
///
/// An `end` past the last token is clamped, like an array slice would be.
pub fn slice(tokens: &[Token], start: usize, end: usize) -> Result<&[Token]> {
    if end < start {
        return Err(TokenError::OutOfOrderRange { start, end });
    }
    let start = start.min(tokens.len());
    let end = end.saturating_add(1).min(tokens.len());
    Ok(&tokens[start..end])
}

/// Drop the leading run of tokens matching `chars` (whitespace by default).
pub fn ltrim(tokens: &[Token], chars: Option<&TokenProp>) -> Vec<Token> {
    let default = TokenProp::whitespace();
    let chars = chars.unwrap_or(&default);

    let mut cursor = TokenCursor::new(tokens);
    while let Some(token) = cursor.current() {
        if !chars.matches(token) {
            break;
        }
        cursor.next();
    }
    match cursor.key() {
        Some(first) => tokens[first..].to_vec(),
        None => Vec::new(),
    }
}

/// Drop the trailing run of tokens matching `chars` (whitespace by default).
pub fn rtrim(tokens: &[Token], chars: Option<&TokenProp>) -> Vec<Token> {
    let default = TokenProp::whitespace();
    let chars = chars.unwrap_or(&default);

    if tokens.is_empty() {
        return Vec::new();
    }
    let mut cursor = TokenCursor::new(tokens);
    cursor.seek(tokens.len() - 1);
    while let Some(token) = cursor.current() {
        if !chars.matches(token) {
            break;
        }
        cursor.prev();
    }
    match cursor.key() {
        Some(last) => tokens[..=last].to_vec(),
        None => Vec::new(),
    }
}

/// [`ltrim`] then [`rtrim`].
pub fn trim(tokens: &[Token], chars: Option<&TokenProp>) -> Vec<Token> {
    rtrim(&ltrim(tokens, chars), chars)
}

/// Split `tokens` at every token matching `delimiter`.
///
/// Delimiters are dropped. With a `limit`, at most that many splits happen
/// and later delimiters stay in the last group. Empty groups are kept.
pub fn explode(delimiter: &TokenProp, tokens: &[Token], limit: Option<usize>) -> Vec<Vec<Token>> {
    let mut groups = Vec::new();
    let mut current = Vec::new();

    for token in tokens {
        let can_split = limit.map_or(true, |l| groups.len() < l);
        if can_split && delimiter.matches(token) {
            groups.push(std::mem::take(&mut current));
        } else {
            current.push(token.clone());
        }
    }
    groups.push(current);
    groups
}

/// Concatenate the literal text of every token.
pub fn tokens_to_string(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        token.write_text(&mut out);
    }
    out
}

/// Line of the first and of the last typed token, in sequence order.
pub fn start_end_lines(tokens: &[Token]) -> Result<(usize, usize)> {
    let mut lines = tokens.iter().filter_map(Token::line);
    let start = lines.next().ok_or(TokenError::NoLineInformation)?;
    let end = lines.last().unwrap_or(start);
    Ok((start, end))
}

/// Human-readable dump: `T_NAME(text)@line` for typed tokens, the bare
/// symbol otherwise.
pub fn explicit_token_names(tokens: &[Token]) -> Vec<String> {
    tokens
        .iter()
        .map(|t| match t {
            Token::Symbol(c) => c.to_string(),
            Token::Typed { kind, text, line } => format!("{}({:?})@{}", kind.name(), text, line),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{tokenize, TokenKind};

    #[test]
    fn test_slice_is_inclusive() {
        let tokens = tokenize("<?php $a = 1;");
        let s = slice(&tokens, 1, 3).unwrap();
        assert_eq!(tokens_to_string(s), "$a =");
    }

    #[test]
    fn test_slice_out_of_order() {
        let tokens = tokenize("<?php $a = 1;");
        assert_eq!(
            slice(&tokens, 3, 1),
            Err(TokenError::OutOfOrderRange { start: 3, end: 1 })
        );
    }

    #[test]
    fn test_slice_clamps_end() {
        let tokens = tokenize("<?php $a;");
        assert_eq!(slice(&tokens, 1, 99).unwrap().len(), 2);
        assert!(slice(&tokens, 50, 99).unwrap().is_empty());
    }

    #[test]
    fn test_trim() {
        let tokens = tokenize("<?php   $a  ");
        let inner = &tokens[1..];
        assert_eq!(tokens_to_string(&ltrim(inner, None)), "$a  ");
        assert_eq!(tokens_to_string(&rtrim(inner, None)), "  $a");
        let trimmed = trim(inner, None);
        assert_eq!(tokens_to_string(&trimmed), "$a");
        assert_eq!(trim(&trimmed, None), trimmed);
    }

    #[test]
    fn test_trim_all_matching_yields_empty() {
        let tokens = vec![
            Token::typed(TokenKind::Whitespace, " ", 1),
            Token::typed(TokenKind::Whitespace, "\n", 1),
        ];
        assert!(ltrim(&tokens, None).is_empty());
        assert!(rtrim(&tokens, None).is_empty());
        assert!(trim(&[], None).is_empty());
    }

    #[test]
    fn test_trim_with_custom_prop() {
        let tokens = vec![Token::Symbol(';'), Token::Symbol('a'), Token::Symbol(';')];
        let semi = TokenProp::Literal(';');
        assert_eq!(tokens_to_string(&trim(&tokens, Some(&semi))), "a");
    }

    #[test]
    fn test_explode() {
        let tokens = tokenize("<?php A,B,,C");
        let groups = explode(&TokenProp::Literal(','), &tokens[1..], None);
        let texts: Vec<_> = groups.iter().map(|g| tokens_to_string(g)).collect();
        assert_eq!(texts, vec!["A", "B", "", "C"]);
    }

    #[test]
    fn test_explode_with_limit() {
        let tokens = tokenize("<?php A,B,C");
        let groups = explode(&TokenProp::Literal(','), &tokens[1..], Some(1));
        let texts: Vec<_> = groups.iter().map(|g| tokens_to_string(g)).collect();
        assert_eq!(texts, vec!["A", "B,C"]);
    }

    #[test]
    fn test_explode_then_join_reproduces_input() {
        let src = "<?php f($a, $b), g(), ";
        let tokens = tokenize(src);
        let groups = explode(&TokenProp::Literal(','), &tokens, None);
        let joined: Vec<_> = groups.iter().map(|g| tokens_to_string(g)).collect();
        assert_eq!(joined.join(","), src);
    }

    #[test]
    fn test_start_end_lines() {
        let tokens = tokenize("<?php\n$a\n=\n1;");
        assert_eq!(start_end_lines(&tokens[1..]).unwrap(), (2, 4));
        assert_eq!(
            start_end_lines(&[Token::Symbol(';'), Token::Symbol('{')]),
            Err(TokenError::NoLineInformation)
        );
    }

    #[test]
    fn test_explicit_token_names() {
        let tokens = tokenize("<?php $a;");
        assert_eq!(
            explicit_token_names(&tokens),
            vec![
                "T_OPEN_TAG(\"<?php \")@1".to_string(),
                "T_VARIABLE(\"$a\")@1".to_string(),
                ";".to_string(),
            ]
        );
    }
}
