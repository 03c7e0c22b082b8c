//! Whole-unit analysis: every extraction bundled into one report.

use anyhow::Context;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::extract::{
    get_class_names, get_class_property_basic_info, get_interfaces, get_methods_info,
    get_namespace, get_parent_class_name, get_use_dependencies, MethodInfo, PropertyInfo,
};
use crate::token::{tokenize, Token};

/// Everything extracted from one source unit.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    pub namespace: Option<String>,
    pub classes: Vec<String>,
    pub parent: Option<String>,
    pub interfaces: Vec<String>,
    pub uses: Vec<String>,
    pub properties: Vec<PropertyInfo>,
    pub methods: Vec<MethodInfo>,
}

/// Read and tokenize a file.
pub fn tokenize_file(path: &Path) -> anyhow::Result<Vec<Token>> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(tokenize(&source))
}

/// Analyze source text.
pub fn analyze_source(source: &str, config: &Config) -> anyhow::Result<FileReport> {
    analyze_tokens(&tokenize(source), config)
}

/// Analyze a file. Errors carry the file path.
pub fn analyze_file(path: &Path, config: &Config) -> anyhow::Result<FileReport> {
    let tokens = tokenize_file(path)?;
    let mut report =
        analyze_tokens(&tokens, config).with_context(|| format!("failed to analyze {}", path.display()))?;
    report.path = Some(path.to_path_buf());
    Ok(report)
}

/// Analyze an already tokenized unit.
pub fn analyze_tokens(tokens: &[Token], config: &Config) -> anyhow::Result<FileReport> {
    let full_names = config.use_full_names();
    Ok(FileReport {
        path: None,
        namespace: get_namespace(tokens),
        classes: get_class_names(tokens, full_names, config.class_name_finder()),
        parent: get_parent_class_name(tokens, full_names),
        interfaces: get_interfaces(tokens, full_names),
        uses: get_use_dependencies(tokens, config.should_sort_uses()),
        properties: get_class_property_basic_info(tokens)?,
        methods: get_methods_info(tokens)?,
    })
}
