//! Method declarations.
//!
//! Each span from [`MethodFinder`] is re-walked with a cursor. Until the
//! name is found the walk records the comment, modifiers and start line;
//! afterwards it captures the parameter list and the body, each once.

use crate::cursor::TokenCursor;
use crate::error::{Result, TokenError};
use crate::finder::{MethodFinder, TokenFinder};
use crate::navigate::{move_to_corresponding_end, skip_matching, skip_whitespace};
use crate::sequence::tokens_to_string;
use crate::token::{Token, TokenKind, TokenProp};

use super::info::{count_line_breaks, CommentInfo, CommentKind, MethodInfo, Visibility};
use super::shift_error;

enum State {
    ScanningModifiers,
    NameFound(String),
}

/// What the walk learns before reaching the method name.
#[derive(Default)]
struct Header {
    comment: Option<CommentInfo>,
    visibility: Option<(Visibility, usize)>,
    /// First line among `abstract`, `final`, `static` and `function`.
    modifier_line: Option<usize>,
    is_abstract: bool,
    is_final: bool,
    is_static: bool,
}

impl Header {
    fn observe(&mut self, token: &Token) {
        let (Some(kind), Some(line)) = (token.kind(), token.line()) else {
            return;
        };
        match kind {
            TokenKind::Comment | TokenKind::DocComment if self.comment.is_none() => {
                let comment_kind = if kind == TokenKind::DocComment {
                    CommentKind::DocBlock
                } else {
                    CommentKind::Regular
                };
                self.comment = Some(CommentInfo::new(comment_kind, token.text(), line));
            }
            TokenKind::Public | TokenKind::Protected | TokenKind::Private => {
                if self.visibility.is_none() {
                    self.visibility = Visibility::from_kind(kind).map(|v| (v, line));
                }
            }
            TokenKind::Abstract => {
                self.is_abstract = true;
                self.modifier_line.get_or_insert(line);
            }
            TokenKind::Final => {
                self.is_final = true;
                self.modifier_line.get_or_insert(line);
            }
            TokenKind::Static => {
                self.is_static = true;
                self.modifier_line.get_or_insert(line);
            }
            TokenKind::Function => {
                self.modifier_line.get_or_insert(line);
            }
            _ => {}
        }
    }

    fn start_line(&self) -> Option<usize> {
        self.visibility.map(|(_, line)| line).or(self.modifier_line)
    }
}

/// Structured information on every method declared in the unit.
///
/// Fails with [`TokenError::StructuralMismatch`] when a declaration has no
/// name or when its parameter list or body is never closed.
pub fn get_methods_info(tokens: &[Token]) -> Result<Vec<MethodInfo>> {
    MethodFinder
        .find(tokens)
        .into_iter()
        .map(|m| method_info(m.tokens(tokens), m.start).map_err(|e| shift_error(e, m.start)))
        .collect()
}

fn method_info(declaration: &[Token], start_index: usize) -> Result<MethodInfo> {
    let mut cursor = TokenCursor::new(declaration);
    let mut state = State::ScanningModifiers;
    let mut header = Header::default();
    let mut args: Option<String> = None;
    let mut body: Option<String> = None;

    let name_skip = TokenProp::AnyOf(vec![
        TokenProp::Kind(TokenKind::Whitespace),
        TokenProp::Kind(TokenKind::Comment),
        TokenProp::Kind(TokenKind::DocComment),
        TokenProp::Literal('&'),
    ]);

    while let Some(token) = cursor.current() {
        if matches!(state, State::ScanningModifiers) {
            header.observe(token);
            if token.is_kind(TokenKind::Function) {
                cursor.next();
                skip_matching(&mut cursor, &name_skip);
                let name = cursor
                    .current()
                    .filter(|t| is_method_name(t))
                    .ok_or_else(|| TokenError::StructuralMismatch {
                        index: cursor.key().unwrap_or(declaration.len()),
                        reason: "function keyword is not followed by a name".to_string(),
                    })?;
                state = State::NameFound(name.text());
                cursor.next();
                skip_whitespace(&mut cursor);
            }
        }

        if matches!(state, State::NameFound(_)) {
            if args.is_none() && cursor.current().map_or(false, |t| t.is_symbol('(')) {
                args = Some(capture(&mut cursor)?);
            } else if body.is_none() && cursor.current().map_or(false, |t| t.is_symbol('{')) {
                body = Some(capture(&mut cursor)?);
            }
        }
        cursor.next();
    }

    let State::NameFound(name) = state else {
        return Err(TokenError::StructuralMismatch {
            index: 0,
            reason: "declaration has no function keyword".to_string(),
        });
    };
    let method_start_line = header.start_line().ok_or_else(|| TokenError::StructuralMismatch {
        index: 0,
        reason: format!("no start line for method {}", name),
    })?;
    let content = body.unwrap_or_default();
    let method_end_line = method_start_line + count_line_breaks(&content);

    Ok(MethodInfo {
        name,
        visibility: header.visibility.map(|(v, _)| v).unwrap_or_default(),
        is_abstract: header.is_abstract,
        is_final: header.is_final,
        is_static: header.is_static,
        method_start_line,
        method_end_line,
        content,
        args: args.unwrap_or_default(),
        comment: header.comment,
        start_index,
    })
}

fn is_method_name(token: &Token) -> bool {
    token
        .kind()
        .map_or(false, |k| k == TokenKind::Identifier || k.is_reserved_word())
}

/// Walk from an opening delimiter to its closer and return the text between
/// them, both included.
fn capture(cursor: &mut TokenCursor<'_>) -> Result<String> {
    let mut visited = Vec::new();
    move_to_corresponding_end(cursor, Some(&mut visited))?;
    Ok(tokens_to_string(&visited))
}
