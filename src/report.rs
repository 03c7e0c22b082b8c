//! Output formatting for tokenscope results.
//!
//! Supports two output formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption

use colored::*;
use serde::Serialize;
use std::path::Path;

use crate::analyze::FileReport;
use crate::batch::{BatchOutcome, FileFailure};
use crate::extract::{MethodInfo, PropertyInfo};
use crate::token::Token;

// =============================================================================
// JSON Format
// =============================================================================

/// JSON envelope for an analyzed file.
#[derive(Serialize)]
pub struct JsonAnalysis<'a> {
    pub version: String,
    #[serde(flatten)]
    pub report: &'a FileReport,
}

/// JSON structure for a dependency scan.
#[derive(Serialize)]
pub struct JsonDependencies {
    pub version: String,
    pub path: String,
    pub files_scanned: usize,
    pub dependencies: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<FileFailure>,
}

/// JSON structure for a token dump.
#[derive(Serialize)]
pub struct JsonTokens {
    pub version: String,
    pub path: String,
    pub tokens: Vec<JsonToken>,
}

/// One token; symbols have neither kind nor line.
#[derive(Serialize)]
pub struct JsonToken {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

/// JSON structure for a class lookup.
#[derive(Serialize)]
pub struct JsonLocation {
    pub version: String,
    pub class: String,
    pub file: Option<String>,
}

fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

pub fn analysis_json(report: &FileReport) -> JsonAnalysis<'_> {
    JsonAnalysis {
        version: version(),
        report,
    }
}

pub fn dependencies_json(path: &str, outcome: &BatchOutcome<Vec<String>>) -> JsonDependencies {
    JsonDependencies {
        version: version(),
        path: path.to_string(),
        files_scanned: outcome.files_scanned,
        dependencies: outcome.value.clone(),
        failures: outcome.failures.clone(),
    }
}

pub fn tokens_json(path: &str, tokens: &[Token]) -> JsonTokens {
    JsonTokens {
        version: version(),
        path: path.to_string(),
        tokens: tokens
            .iter()
            .map(|t| JsonToken {
                kind: t.kind().map(|k| k.name().to_string()),
                text: t.text(),
                line: t.line(),
            })
            .collect(),
    }
}

pub fn location_json(class: &str, file: Option<&Path>) -> JsonLocation {
    JsonLocation {
        version: version(),
        class: class.to_string(),
        file: file.map(|f| f.to_string_lossy().to_string()),
    }
}

/// Write any JSON structure to stdout.
pub fn write_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

// =============================================================================
// Pretty Format
// =============================================================================

fn write_header(label: &str, path: &str) {
    println!();
    print!("  ");
    print!("{}", "tokenscope".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();
    print!("  {}", format!("{:<10}", label).dimmed());
    println!("{}", path);
    println!();
}

fn write_field(label: &str, value: Option<&str>) {
    print!("  {}", format!("{:<12}", label).bold());
    match value {
        Some(v) => println!("{}", v),
        None => println!("{}", "-".dimmed()),
    }
}

fn write_list(label: &str, items: &[String]) {
    println!("  {} ({}):", label.bold(), items.len());
    for item in items {
        println!("    {}", item);
    }
}

/// Write an analyzed file in pretty format.
pub fn write_pretty_report(path: &str, report: &FileReport) {
    write_header("Analyzing:", path);

    write_field("Namespace", report.namespace.as_deref());
    write_field("Parent", report.parent.as_deref());
    println!();
    write_list("Classes", &report.classes);
    write_list("Interfaces", &report.interfaces);
    write_list("Uses", &report.uses);
    println!();

    if !report.properties.is_empty() {
        write_properties(&report.properties);
        println!();
    }
    if !report.methods.is_empty() {
        write_methods(&report.methods);
        println!();
    }
}

fn write_properties(properties: &[PropertyInfo]) {
    println!("  {} ({}):", "Properties".bold(), properties.len());
    for p in properties {
        let visibility = if p.is_private {
            "private"
        } else if p.is_protected {
            "protected"
        } else {
            "public"
        };
        print!("    {:<10}", visibility.yellow());
        if p.is_static {
            print!("{} ", "static".yellow());
        }
        print!("{}", format!("${}", p.var_name).blue());
        print!("{}", format!("  lines {}-{}", p.start_line, p.end_line).dimmed());
        if p.has_doc_comment {
            print!("{}", "  (doc)".dimmed());
        }
        println!();
    }
}

fn write_methods(methods: &[MethodInfo]) {
    println!("  {} ({}):", "Methods".bold(), methods.len());
    for m in methods {
        print!("    {:<10}", m.visibility.as_str().yellow());
        let mut flags = Vec::new();
        if m.is_abstract {
            flags.push("abstract");
        }
        if m.is_final {
            flags.push("final");
        }
        if m.is_static {
            flags.push("static");
        }
        if !flags.is_empty() {
            print!("{} ", flags.join(" ").yellow());
        }
        print!("{}{}", m.name.blue(), m.args);
        println!(
            "{}",
            format!("  lines {}-{}", m.method_start_line, m.method_end_line).dimmed()
        );
    }
}

/// Write a dependency scan in pretty format.
pub fn write_pretty_dependencies(path: &str, outcome: &BatchOutcome<Vec<String>>) {
    write_header("Scanning:", path);
    write_list("Dependencies", &outcome.value);
    println!();

    if !outcome.failures.is_empty() {
        write_failures(&outcome.failures);
        println!();
    }

    print!(
        "  {}",
        format!("{} files scanned", outcome.files_scanned).dimmed()
    );
    if outcome.is_complete() {
        println!("  {}", "OK".green());
    } else {
        println!("  {}", format!("{} skipped", outcome.failures.len()).red());
    }
    println!();
}

fn write_failures(failures: &[FileFailure]) {
    println!("  {} ({}):", "Skipped".bold(), failures.len());
    for f in failures {
        print!("    {} ", "ERROR".red());
        println!("{}", f.path.display().to_string().blue());
        println!("            {}", f.error);
    }
}

/// Write a token dump in pretty format, one token per line.
pub fn write_pretty_tokens(path: &str, tokens: &[Token]) {
    write_header("Tokens:", path);
    for (i, token) in tokens.iter().enumerate() {
        print!("  {}", format!("{:>5}", i).dimmed());
        match token {
            Token::Symbol(c) => println!("  {}", c.to_string().yellow()),
            Token::Typed { kind, text, line } => {
                print!("  {:<28}", kind.name().cyan());
                print!("{:<40}", format!("{:?}", text));
                println!("{}", format!("line {}", line).dimmed());
            }
        }
    }
    println!();
}

/// Write a class lookup in pretty format.
pub fn write_pretty_location(class: &str, file: Option<&Path>) {
    match file {
        Some(f) => println!("{}  {}", class.bold(), f.display().to_string().blue()),
        None => println!("{}  {}", class.bold(), "not found".red()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::analyze_source;
    use crate::config::Config;
    use crate::token::tokenize;

    #[test]
    fn test_analysis_json_is_flat() {
        let report = analyze_source("<?php namespace A; class B {}", &Config::default()).unwrap();
        let value = serde_json::to_value(analysis_json(&report)).unwrap();
        assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(value["namespace"], "A");
        assert_eq!(value["classes"][0], "A\\B");
        assert!(value.get("path").is_none());
        assert!(value["parent"].is_null());
    }

    #[test]
    fn test_tokens_json_omits_symbol_fields() {
        let tokens = tokenize("<?php ;");
        let value = serde_json::to_value(tokens_json("x.php", &tokens)).unwrap();
        assert_eq!(value["tokens"][0]["kind"], "T_OPEN_TAG");
        assert_eq!(value["tokens"][0]["line"], 1);
        assert_eq!(value["tokens"][1]["text"], ";");
        assert!(value["tokens"][1].get("kind").is_none());
    }

    #[test]
    fn test_dependencies_json_hides_empty_failures() {
        let outcome = BatchOutcome {
            value: vec!["A\\B".to_string()],
            files_scanned: 1,
            failures: Vec::new(),
        };
        let value = serde_json::to_value(dependencies_json("src", &outcome)).unwrap();
        assert_eq!(value["dependencies"][0], "A\\B");
        assert_eq!(value["files_scanned"], 1);
        assert!(value.get("failures").is_none());
    }
}
