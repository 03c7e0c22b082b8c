//! Tokenscope - structural inspection of PHP-style token streams.
//!
//! Tokenscope answers structural questions about a source file (its
//! namespace, classes, parent class, interfaces, imports, properties and
//! methods) by pattern-matching over the flat token stream. There is no
//! grammar and no syntax tree; nested structures are walked by counting
//! delimiters.
//!
//! # Architecture
//!
//! - `token`: token model, predicates (`TokenProp`) and the lexer
//! - `cursor` / `navigate`: positioned walks and matching-delimiter jumps
//! - `sequence`: slicing, trimming, splitting and stringifying
//! - `finder`: one lexical recognizer per construct
//! - `extract`: structured records built from finder matches
//! - `analyze` / `batch`: per-file reports and folder scans
//! - `config`, `report`, `cli`: the command-line tool
//!
//! # Adding a New Construct
//!
//! Implement `TokenFinder` in `src/finder/`, then turn its matches into a
//! record in `src/extract/`.

pub mod analyze;
pub mod batch;
pub mod cli;
pub mod config;
pub mod cursor;
pub mod error;
pub mod extract;
pub mod finder;
pub mod navigate;
pub mod report;
pub mod sequence;
pub mod token;

pub use analyze::{analyze_file, analyze_source, FileReport};
pub use batch::{
    collect_files, get_class_property_basic_info_for, get_use_dependencies_by_classes,
    get_use_dependencies_by_folder, BatchOutcome, ClassIndex,
};
pub use config::Config;
pub use cursor::TokenCursor;
pub use error::{Result, TokenError};
pub use extract::{
    get_class_names, get_class_property_basic_info, get_interfaces, get_methods_info,
    get_namespace, get_parent_class_name, get_use_dependencies, MethodInfo, PropertyInfo,
};
pub use finder::{matches_to_strings, Match, TokenFinder};
pub use token::{tokenize, Token, TokenKind, TokenProp};
