//! Extraction: structured records built from finder matches.
//!
//! Every function here takes the token sequence of one source unit. Finder
//! spans are re-scanned with the cursor and navigator; structural failures
//! are returned to the caller unchanged apart from their token index, which
//! is always relative to the whole sequence.

mod class;
mod imports;
mod info;
mod method;
mod property;

pub use class::{get_class_names, get_interfaces, get_namespace, get_parent_class_name};
pub use imports::get_use_dependencies;
pub use info::{CommentInfo, CommentKind, MethodInfo, PropertyInfo, Visibility};
pub use method::get_methods_info;
pub use property::get_class_property_basic_info;

use crate::error::TokenError;

/// Re-base an error raised on a sub-slice starting at `offset`.
fn shift_error(err: TokenError, offset: usize) -> TokenError {
    match err {
        TokenError::StructuralMismatch { index, reason } => TokenError::StructuralMismatch {
            index: index + offset,
            reason,
        },
        TokenError::NotADelimiter { index } => TokenError::NotADelimiter {
            index: index + offset,
        },
        other => other,
    }
}
