//! Records produced by the extraction functions.

use serde::Serialize;
use std::fmt;

use crate::token::TokenKind;

/// Declared visibility of a class member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    /// Visibility named by a modifier keyword, if it is one.
    pub fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Public => Some(Visibility::Public),
            TokenKind::Protected => Some(Visibility::Protected),
            TokenKind::Private => Some(Visibility::Private),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CommentKind {
    /// `//`, `#` or `/* */`.
    Regular,
    /// `/** */`.
    DocBlock,
}

/// A comment attached to a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentInfo {
    pub kind: CommentKind,
    pub text: String,
    pub start_line: usize,
    pub end_line: usize,
}

impl CommentInfo {
    /// Build from a comment's text and first line.
    ///
    /// A line comment ends on its own line even though its text carries the
    /// trailing line break.
    pub fn new(kind: CommentKind, text: impl Into<String>, start_line: usize) -> Self {
        let text = text.into();
        let trimmed = text.trim_start();
        let end_line = if trimmed.starts_with("//") || trimmed.starts_with('#') {
            start_line
        } else {
            start_line + count_line_breaks(&text)
        };
        Self {
            kind,
            text,
            start_line,
            end_line,
        }
    }
}

/// One method (or function) declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodInfo {
    pub name: String,
    pub visibility: Visibility,
    pub is_abstract: bool,
    pub is_final: bool,
    pub is_static: bool,
    pub method_start_line: usize,
    pub method_end_line: usize,
    /// The body including its braces, empty for bodiless declarations.
    pub content: String,
    /// The parameter list including its parentheses.
    pub args: String,
    pub comment: Option<CommentInfo>,
    /// Index of the first token of the declaration block.
    pub start_index: usize,
}

/// One property declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyInfo {
    /// Name without the leading `$`.
    pub var_name: String,
    pub has_doc_comment: bool,
    pub doc_comment: Option<String>,
    pub is_public: bool,
    pub is_protected: bool,
    pub is_private: bool,
    pub is_static: bool,
    /// Whole declaration as written, doc comment included.
    pub content: String,
    pub start_line: usize,
    pub end_line: usize,
    pub comment_start_line: Option<usize>,
    pub comment_end_line: Option<usize>,
}

pub(crate) fn count_line_breaks(text: &str) -> usize {
    text.matches('\n').count()
}
